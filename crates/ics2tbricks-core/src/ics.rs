//! ICS parsing into calendar items.
//!
//! Parsing is delegated to the `icalendar` crate. Only the raw `DTSTART`
//! value and the text fields are kept, so date interpretation stays in
//! [`crate::date`].

use icalendar::{Calendar, CalendarComponent, Component, Event};
use tracing::debug;

use crate::error::{TransformError, TransformResult};

const BYTE_ORDER_MARK: char = '\u{feff}';

/// A parsed `VEVENT`, reduced to the fields the transform looks at.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CalendarItem {
    /// Raw `DTSTART` value without its parameters (e.g. `20240101`).
    pub start_date: Option<String>,
    /// Raw `DTEND` value without its parameters.
    pub end_date: Option<String>,
    /// Event summary.
    pub summary: Option<String>,
    /// Event description.
    pub description: Option<String>,
}

impl CalendarItem {
    /// Creates an item with the given start date and description.
    pub fn new(start_date: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            start_date: Some(start_date.into()),
            description: Some(description.into()),
            ..Default::default()
        }
    }

    /// Sets the summary.
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    fn from_event(event: &Event) -> Self {
        Self {
            start_date: event.property_value("DTSTART").map(str::to_string),
            end_date: event.property_value("DTEND").map(str::to_string),
            summary: event.get_summary().map(str::to_string),
            description: event.get_description().map(str::to_string),
        }
    }
}

/// Parses ICS text and returns one item per `VEVENT`, in document order.
///
/// A leading byte order mark is skipped.
///
/// # Errors
///
/// Returns [`TransformError::IcsParse`] if the parser rejects the document.
pub fn parse_calendar_items(ics: &str) -> TransformResult<Vec<CalendarItem>> {
    let calendar = ics
        .strip_prefix(BYTE_ORDER_MARK)
        .unwrap_or(ics)
        .parse::<Calendar>()
        .map_err(|e| TransformError::IcsParse(e.to_string()))?;

    let items: Vec<CalendarItem> = calendar
        .iter()
        .filter_map(|component| match component {
            CalendarComponent::Event(event) => Some(CalendarItem::from_event(event)),
            _ => None,
        })
        .collect();

    debug!(count = items.len(), "Parsed calendar items from ICS");

    Ok(items)
}
