//! Market-closed day extraction.
//!
//! Selects the calendar items that mark a closed market and groups their
//! dates by UTC year.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{Datelike, NaiveDate};
use tracing::debug;

use crate::date::parse_ics_date;
use crate::ics::CalendarItem;

/// Description that marks an HKEX calendar event as a market holiday.
pub const CLOSED_MARKET_MARKER: &str = "Hong Kong Market is closed";

/// Whether the market trades on a given day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayValidity {
    /// Trading day.
    Yes,
    /// Closed.
    No,
}

impl DayValidity {
    /// Returns the attribute value used in the resource XML.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Yes => "yes",
            Self::No => "no",
        }
    }
}

impl fmt::Display for DayValidity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One exception day inside a year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayRecord {
    /// Month and day as `MM-DD`.
    pub date: String,
    /// Always [`DayValidity::No`] for extracted holidays.
    pub valid: DayValidity,
}

impl DayRecord {
    /// Creates a closed-day record for the given date.
    pub fn closed(date: NaiveDate) -> Self {
        Self {
            date: format!("{:02}-{:02}", date.month(), date.day()),
            valid: DayValidity::No,
        }
    }
}

/// Holidays grouped by year.
///
/// Years iterate in ascending order. Days within a year keep the order in
/// which they were added, duplicates included.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HolidayCalendar {
    years: BTreeMap<i32, Vec<DayRecord>>,
}

impl HolidayCalendar {
    /// Creates an empty calendar.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a closed day under the date's year.
    pub fn push(&mut self, date: NaiveDate) {
        self.years
            .entry(date.year())
            .or_default()
            .push(DayRecord::closed(date));
    }

    /// Iterates over `(year, days)` in ascending year order.
    pub fn years(&self) -> impl Iterator<Item = (i32, &[DayRecord])> {
        self.years.iter().map(|(year, days)| (*year, days.as_slice()))
    }

    /// Returns the days recorded for one year.
    pub fn days(&self, year: i32) -> Option<&[DayRecord]> {
        self.years.get(&year).map(Vec::as_slice)
    }

    /// Returns the total number of recorded days.
    pub fn len(&self) -> usize {
        self.years.values().map(Vec::len).sum()
    }

    /// Returns true if no day was recorded.
    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }
}

/// Decides which calendar items count as holidays.
///
/// An item passes when its description equals the marker exactly and its
/// start date parses. Everything else is dropped without an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolidayFilter {
    marker: String,
}

impl Default for HolidayFilter {
    fn default() -> Self {
        Self::new(CLOSED_MARKET_MARKER)
    }
}

impl HolidayFilter {
    /// Creates a filter matching the given description.
    pub fn new(marker: impl Into<String>) -> Self {
        Self {
            marker: marker.into(),
        }
    }

    /// Returns the description this filter matches.
    pub fn marker(&self) -> &str {
        &self.marker
    }

    /// Returns the holiday date of an item, or `None` if it is not one.
    pub fn holiday_date(&self, item: &CalendarItem) -> Option<NaiveDate> {
        if item.description.as_deref() != Some(self.marker.as_str()) {
            return None;
        }

        let start = item.start_date.as_deref()?;
        let date = parse_ics_date(start);
        if date.is_none() {
            debug!(start = %start, summary = ?item.summary, "Skipping holiday with unparseable start date");
        }
        date
    }

    /// Collects the holidays of `items` into a [`HolidayCalendar`].
    pub fn extract(&self, items: &[CalendarItem]) -> HolidayCalendar {
        let mut calendar = HolidayCalendar::new();
        for date in items.iter().filter_map(|item| self.holiday_date(item)) {
            calendar.push(date);
        }

        debug!(
            items = items.len(),
            holidays = calendar.len(),
            "Extracted market holidays"
        );

        calendar
    }
}

/// Extracts holidays with the default closed-market marker.
pub fn extract_holidays(items: &[CalendarItem]) -> HolidayCalendar {
    HolidayFilter::default().extract(items)
}
