//! Golden tests for the generated resource document.
//!
//! These tests use insta for snapshot testing to keep the XML layout stable
//! for downstream consumers. Run `cargo insta review` after intentional
//! changes.

use crate::transform::calendar_resource_from_ics;

const HKEX_FIXTURE: &str = include_str!("../tests/fixtures/hkex-calendar.ics");

fn minimal_ics(events: &[(&str, &str)]) -> String {
    let mut ics = String::from("BEGIN:VCALENDAR\r\nVERSION:2.0\r\nPRODID:-//Test//EN\r\n");
    for (i, (start, description)) in events.iter().enumerate() {
        ics.push_str(&format!(
            "BEGIN:VEVENT\r\nUID:{i}@test\r\nDTSTART;VALUE=DATE:{start}\r\nDESCRIPTION:{description}\r\nEND:VEVENT\r\n"
        ));
    }
    ics.push_str("END:VCALENDAR\r\n");
    ics
}

#[test]
fn golden_hkex_fixture() {
    let xml = calendar_resource_from_ics(HKEX_FIXTURE, "HK").unwrap();
    insta::assert_snapshot!(xml, @r#"
    <resource name="HK" type="application/x-calendar+xml">
      <week monday="yes" tuesday="yes" wednesday="yes" thursday="yes" friday="yes" saturday="no" sunday="no"/>
      <days year="2024">
        <day date="12-25" valid="no"/>
        <day date="12-26" valid="no"/>
        <day date="01-01" valid="no"/>
        <day date="02-12" valid="no"/>
        <day date="02-13" valid="no"/>
      </days>
      <days year="2025">
        <day date="01-01" valid="no"/>
        <day date="01-29" valid="no"/>
      </days>
      <documentation>Calendar defining bank/settlement days for HK.</documentation>
    </resource>
    "#);
}

#[test]
fn golden_no_holidays() {
    let ics = minimal_ics(&[("20240101", "Shanghai and Shenzhen Markets are closed")]);
    let xml = calendar_resource_from_ics(&ics, "HK").unwrap();
    insta::assert_snapshot!(xml, @r#"
    <resource name="HK" type="application/x-calendar+xml">
      <week monday="yes" tuesday="yes" wednesday="yes" thursday="yes" friday="yes" saturday="no" sunday="no"/>
      <documentation>Calendar defining bank/settlement days for HK.</documentation>
    </resource>
    "#);
}

#[test]
fn golden_single_holiday() {
    let ics = minimal_ics(&[("20240101", "Hong Kong Market is closed")]);
    let xml = calendar_resource_from_ics(&ics, "HK").unwrap();
    insta::assert_snapshot!(xml, @r#"
    <resource name="HK" type="application/x-calendar+xml">
      <week monday="yes" tuesday="yes" wednesday="yes" thursday="yes" friday="yes" saturday="no" sunday="no"/>
      <days year="2024">
        <day date="01-01" valid="no"/>
      </days>
      <documentation>Calendar defining bank/settlement days for HK.</documentation>
    </resource>
    "#);
}

#[test]
fn years_sorted_regardless_of_input_order() {
    let ics = minimal_ics(&[
        ("20260101", "Hong Kong Market is closed"),
        ("20240101", "Hong Kong Market is closed"),
        ("20250101", "Hong Kong Market is closed"),
    ]);
    let xml = calendar_resource_from_ics(&ics, "HK").unwrap();

    let p2024 = xml.find(r#"<days year="2024">"#).unwrap();
    let p2025 = xml.find(r#"<days year="2025">"#).unwrap();
    let p2026 = xml.find(r#"<days year="2026">"#).unwrap();
    assert!(p2024 < p2025 && p2025 < p2026);
}

#[test]
fn fixture_output_is_stable_across_calls() {
    let first = calendar_resource_from_ics(HKEX_FIXTURE, "HK").unwrap();
    let second = calendar_resource_from_ics(HKEX_FIXTURE, "HK").unwrap();
    assert_eq!(first, second);
}
