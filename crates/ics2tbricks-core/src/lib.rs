//! ICS to Tbricks calendar resource transform.
//!
//! ```text
//! ICS text ──► parse_calendar_items ──► HolidayFilter::extract ──► build_resource ──► XML text
//!              (icalendar)              (parse_ics_date)            (quick-xml)
//! ```
//!
//! [`calendar_resource_from_ics`] runs the whole pipeline.

pub mod date;
pub mod error;
pub mod holidays;
pub mod ics;
pub mod resource;
pub mod tracing;
pub mod transform;
pub mod xml;

#[cfg(test)]
mod golden_tests;

pub use date::parse_ics_date;
pub use error::{TransformError, TransformResult};
pub use holidays::{
    CLOSED_MARKET_MARKER, DayRecord, DayValidity, HolidayCalendar, HolidayFilter, extract_holidays,
};
pub use ics::{CalendarItem, parse_calendar_items};
pub use resource::{RESOURCE_TYPE, WeekPattern, build_resource};
pub use crate::tracing::{TracingConfig, TracingError, TracingOutputFormat, init_tracing};
pub use transform::{
    DEFAULT_COUNTRY_CODE, TransformOptions, calendar_resource_from_ics, transform_with,
};
pub use xml::{XmlElement, XmlNode};
