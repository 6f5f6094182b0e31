//! ICS text to resource XML.

use tracing::debug;

use crate::error::TransformResult;
use crate::holidays::{CLOSED_MARKET_MARKER, HolidayFilter};
use crate::ics::parse_calendar_items;
use crate::resource::build_resource;

/// Country code used when none is given.
pub const DEFAULT_COUNTRY_CODE: &str = "HK";

/// Options for one transform call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformOptions {
    /// Resource name written to `<resource name="...">`.
    pub country_code: String,
    /// Description that marks a market holiday.
    pub marker: String,
}

impl Default for TransformOptions {
    fn default() -> Self {
        Self {
            country_code: DEFAULT_COUNTRY_CODE.to_string(),
            marker: CLOSED_MARKET_MARKER.to_string(),
        }
    }
}

impl TransformOptions {
    /// Creates options for the given country with the default marker.
    pub fn new(country_code: impl Into<String>) -> Self {
        Self {
            country_code: country_code.into(),
            ..Default::default()
        }
    }

    /// Sets the holiday marker.
    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = marker.into();
        self
    }
}

/// Converts ICS text into a Tbricks calendar resource for `country_code`.
///
/// # Errors
///
/// Fails only when the ICS document cannot be parsed at all.
pub fn calendar_resource_from_ics(ics: &str, country_code: &str) -> TransformResult<String> {
    transform_with(ics, &TransformOptions::new(country_code))
}

/// Converts ICS text into a Tbricks calendar resource using `options`.
///
/// # Errors
///
/// Fails only when the ICS document cannot be parsed at all.
pub fn transform_with(ics: &str, options: &TransformOptions) -> TransformResult<String> {
    let items = parse_calendar_items(ics)?;
    let holidays = HolidayFilter::new(options.marker.as_str()).extract(&items);
    let xml = build_resource(&holidays, &options.country_code).to_xml_string()?;

    debug!(
        country_code = %options.country_code,
        years = holidays.years().count(),
        bytes = xml.len(),
        "Built calendar resource"
    );

    Ok(xml)
}
