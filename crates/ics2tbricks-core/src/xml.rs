//! A small owned XML element tree and its serializer.
//!
//! Trees are written with `quick-xml`, indented by two spaces. Elements
//! without children are written as empty tags.

use std::io::Cursor;

use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};

use crate::error::{TransformError, TransformResult};

/// Indentation width of the serialized document.
const INDENT_SIZE: usize = 2;

/// A child of an [`XmlElement`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XmlNode {
    /// A nested element.
    Element(XmlElement),
    /// Character data.
    Text(String),
}

/// An element with ordered attributes and children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlElement {
    /// Tag name.
    pub name: String,
    /// Attributes in insertion order.
    pub attributes: Vec<(String, String)>,
    /// Child nodes in document order.
    pub children: Vec<XmlNode>,
}

impl XmlElement {
    /// Creates an element with no attributes or children.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Appends an attribute.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    /// Appends a child element.
    pub fn with_child(mut self, child: XmlElement) -> Self {
        self.children.push(XmlNode::Element(child));
        self
    }

    /// Appends a text node.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.children.push(XmlNode::Text(text.into()));
        self
    }

    /// Appends a child element in place.
    pub fn push_child(&mut self, child: XmlElement) {
        self.children.push(XmlNode::Element(child));
    }

    /// Returns the value of an attribute.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Iterates over the child elements named `name`.
    pub fn elements<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a XmlElement> + 'a {
        self.children.iter().filter_map(move |child| match child {
            XmlNode::Element(element) if element.name == name => Some(element),
            _ => None,
        })
    }

    /// Returns the concatenated text children.
    pub fn text(&self) -> String {
        self.children
            .iter()
            .filter_map(|child| match child {
                XmlNode::Text(text) => Some(text.as_str()),
                XmlNode::Element(_) => None,
            })
            .collect()
    }

    /// Serializes the tree as indented XML text.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::XmlWrite`] if the writer fails.
    pub fn to_xml_string(&self) -> TransformResult<String> {
        let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', INDENT_SIZE);
        write_element(&mut writer, self)?;

        let bytes = writer.into_inner().into_inner();
        String::from_utf8(bytes).map_err(|e| TransformError::XmlWrite(e.to_string()))
    }
}

fn write_element(writer: &mut Writer<Cursor<Vec<u8>>>, element: &XmlElement) -> TransformResult<()> {
    let mut start = BytesStart::new(element.name.as_str());
    for (key, value) in &element.attributes {
        start.push_attribute((key.as_str(), value.as_str()));
    }

    if element.children.is_empty() {
        return write_event(writer, Event::Empty(start));
    }

    write_event(writer, Event::Start(start))?;
    for child in &element.children {
        match child {
            XmlNode::Element(nested) => write_element(writer, nested)?,
            XmlNode::Text(text) => write_event(writer, Event::Text(BytesText::new(text)))?,
        }
    }
    write_event(writer, Event::End(BytesEnd::new(element.name.as_str())))
}

fn write_event(writer: &mut Writer<Cursor<Vec<u8>>>, event: Event<'_>) -> TransformResult<()> {
    writer
        .write_event(event)
        .map_err(|e| TransformError::XmlWrite(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_element_is_self_closing() {
        let xml = XmlElement::new("week")
            .with_attribute("monday", "yes")
            .to_xml_string()
            .unwrap();
        assert_eq!(xml, r#"<week monday="yes"/>"#);
    }

    #[test]
    fn nested_elements_are_indented() {
        let xml = XmlElement::new("days")
            .with_attribute("year", "2024")
            .with_child(XmlElement::new("day").with_attribute("date", "01-01"))
            .to_xml_string()
            .unwrap();
        assert_eq!(xml, "<days year=\"2024\">\n  <day date=\"01-01\"/>\n</days>");
    }

    #[test]
    fn text_stays_inline() {
        let xml = XmlElement::new("documentation")
            .with_text("hello")
            .to_xml_string()
            .unwrap();
        assert_eq!(xml, "<documentation>hello</documentation>");
    }

    #[test]
    fn special_characters_are_escaped() {
        let xml = XmlElement::new("resource")
            .with_attribute("name", "A&B")
            .with_text("<1>")
            .to_xml_string()
            .unwrap();
        assert!(xml.contains(r#"name="A&amp;B""#));
        assert!(xml.contains("&lt;1&gt;"));
    }

    #[test]
    fn attribute_order_is_preserved() {
        let element = XmlElement::new("day")
            .with_attribute("date", "12-25")
            .with_attribute("valid", "no");
        assert_eq!(element.attribute("valid"), Some("no"));
        assert_eq!(
            element.to_xml_string().unwrap(),
            r#"<day date="12-25" valid="no"/>"#
        );
    }

    #[test]
    fn lookup_helpers() {
        let mut root = XmlElement::new("root").with_text("a");
        root.push_child(XmlElement::new("child").with_attribute("id", "1"));
        root.push_child(XmlElement::new("other"));
        root.push_child(XmlElement::new("child").with_attribute("id", "2"));

        let ids: Vec<_> = root.elements("child").filter_map(|c| c.attribute("id")).collect();
        assert_eq!(ids, vec!["1", "2"]);
        assert_eq!(root.text(), "a");
        assert!(root.attribute("missing").is_none());
    }
}
