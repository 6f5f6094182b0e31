//! Tbricks calendar resource document.
//!
//! ```text
//! resource (name, type)
//! ├── week (monday..sunday = yes|no)
//! ├── days (year)            one per year, ascending
//! │   └── day (date, valid)  input order
//! └── documentation
//! ```

use crate::holidays::{DayRecord, DayValidity, HolidayCalendar};
use crate::xml::XmlElement;

/// Resource type of a Tbricks calendar.
pub const RESOURCE_TYPE: &str = "application/x-calendar+xml";

/// Which weekdays are trading days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekPattern {
    pub monday: DayValidity,
    pub tuesday: DayValidity,
    pub wednesday: DayValidity,
    pub thursday: DayValidity,
    pub friday: DayValidity,
    pub saturday: DayValidity,
    pub sunday: DayValidity,
}

impl WeekPattern {
    /// Monday to Friday open, weekend closed.
    pub const fn trading_week() -> Self {
        Self {
            monday: DayValidity::Yes,
            tuesday: DayValidity::Yes,
            wednesday: DayValidity::Yes,
            thursday: DayValidity::Yes,
            friday: DayValidity::Yes,
            saturday: DayValidity::No,
            sunday: DayValidity::No,
        }
    }

    fn to_element(self) -> XmlElement {
        [
            ("monday", self.monday),
            ("tuesday", self.tuesday),
            ("wednesday", self.wednesday),
            ("thursday", self.thursday),
            ("friday", self.friday),
            ("saturday", self.saturday),
            ("sunday", self.sunday),
        ]
        .into_iter()
        .fold(XmlElement::new("week"), |week, (day, valid)| {
            week.with_attribute(day, valid.as_str())
        })
    }
}

impl Default for WeekPattern {
    fn default() -> Self {
        Self::trading_week()
    }
}

/// Builds the resource element tree for `country_code`.
pub fn build_resource(calendar: &HolidayCalendar, country_code: &str) -> XmlElement {
    let mut resource = XmlElement::new("resource")
        .with_attribute("name", country_code)
        .with_attribute("type", RESOURCE_TYPE)
        .with_child(WeekPattern::trading_week().to_element());

    for (year, days) in calendar.years() {
        resource.push_child(days_element(year, days));
    }

    resource.with_child(
        XmlElement::new("documentation")
            .with_text(format!("Calendar defining bank/settlement days for {country_code}.")),
    )
}

fn days_element(year: i32, days: &[DayRecord]) -> XmlElement {
    days.iter().fold(
        XmlElement::new("days").with_attribute("year", year.to_string()),
        |group, day| {
            group.with_child(
                XmlElement::new("day")
                    .with_attribute("date", day.date.as_str())
                    .with_attribute("valid", day.valid.as_str()),
            )
        },
    )
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn calendar(dates: &[(i32, u32, u32)]) -> HolidayCalendar {
        let mut calendar = HolidayCalendar::new();
        for &(y, m, d) in dates {
            calendar.push(NaiveDate::from_ymd_opt(y, m, d).unwrap());
        }
        calendar
    }

    #[test]
    fn root_attributes() {
        let resource = build_resource(&HolidayCalendar::new(), "HK");
        assert_eq!(resource.name, "resource");
        assert_eq!(resource.attribute("name"), Some("HK"));
        assert_eq!(resource.attribute("type"), Some(RESOURCE_TYPE));
    }

    #[test]
    fn week_is_fixed() {
        let resource = build_resource(&calendar(&[(2024, 1, 1)]), "HK");
        let week = resource.elements("week").next().unwrap();
        let flags: Vec<(&str, &str)> = week
            .attributes
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        assert_eq!(
            flags,
            vec![
                ("monday", "yes"),
                ("tuesday", "yes"),
                ("wednesday", "yes"),
                ("thursday", "yes"),
                ("friday", "yes"),
                ("saturday", "no"),
                ("sunday", "no"),
            ]
        );
    }

    #[test]
    fn days_follow_calendar_years() {
        let resource = build_resource(&calendar(&[(2025, 1, 1), (2023, 12, 25), (2025, 1, 29)]), "HK");
        let years: Vec<&str> = resource
            .elements("days")
            .filter_map(|d| d.attribute("year"))
            .collect();
        assert_eq!(years, vec!["2023", "2025"]);

        let days_2025 = resource.elements("days").nth(1).unwrap();
        let dates: Vec<&str> = days_2025
            .elements("day")
            .filter_map(|d| d.attribute("date"))
            .collect();
        assert_eq!(dates, vec!["01-01", "01-29"]);
        assert!(days_2025.elements("day").all(|d| d.attribute("valid") == Some("no")));
    }

    #[test]
    fn documentation_is_last() {
        let resource = build_resource(&calendar(&[(2024, 1, 1)]), "SG");
        let last = match resource.children.last().unwrap() {
            crate::xml::XmlNode::Element(element) => element,
            crate::xml::XmlNode::Text(_) => panic!("expected element"),
        };
        assert_eq!(last.name, "documentation");
        assert_eq!(last.text(), "Calendar defining bank/settlement days for SG.");
    }

    #[test]
    fn no_holidays_means_no_days() {
        let resource = build_resource(&HolidayCalendar::new(), "HK");
        assert_eq!(resource.elements("days").count(), 0);
        assert_eq!(resource.children.len(), 2);
    }
}
