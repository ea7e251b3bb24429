use serde_json::json;

use orthodox_calendar_bot::model::calendar::CalendarRecord;

fn record(value: serde_json::Value) -> CalendarRecord {
    serde_json::from_value(value).expect("record from json")
}

#[test]
fn empty_record_reads_as_absent() {
    let r = CalendarRecord::default();
    assert!(r.is_empty());
    assert!(r.year().is_none());
    assert!(r.first_title().is_none());
    assert_eq!(r.fast_level(), 0);
    assert!(r.fast_level_desc().is_none());
    assert!(r.feasts().is_empty());
    assert!(r.saints().is_empty());
    assert!(r.readings().is_empty());
}

#[test]
fn fast_level_accepts_numeric_strings_and_ignores_junk() {
    assert_eq!(record(json!({"fast_level": 3})).fast_level(), 3);
    assert_eq!(record(json!({"fast_level": "2"})).fast_level(), 2);
    assert_eq!(record(json!({"fast_level": null})).fast_level(), 0);
    assert_eq!(record(json!({"fast_level": [1]})).fast_level(), 0);
}

#[test]
fn string_lists_skip_non_strings() {
    let r = record(json!({"saints": ["St. Mark", 7, null, "St. Luke"], "feasts": "Pascha"}));
    assert_eq!(r.saints(), vec!["St. Mark", "St. Luke"]);
    assert!(r.feasts().is_empty());
}

#[test]
fn empty_descriptions_are_absent() {
    let r = record(json!({"fast_level_desc": "", "fast_exception_desc": "Wine and Oil"}));
    assert!(r.fast_level_desc().is_none());
    assert_eq!(r.fast_exception_desc(), Some("Wine and Oil"));
}

#[test]
fn non_object_body_is_rejected() {
    assert!(CalendarRecord::from_json("[1, 2, 3]").is_err());
    assert!(CalendarRecord::from_json("not json").is_err());
    let r = CalendarRecord::from_json("{\"year\": 2025}").unwrap();
    assert!(!r.is_empty());
}

#[test]
fn sample_response_exposes_expected_fields() {
    let body = std::fs::read_to_string("tests/sample_response.json").expect("failed to read sample_response.json");
    let r = CalendarRecord::from_json(&body).expect("sample parses");
    assert_eq!(r.year(), Some(&json!(2025)));
    assert_eq!(r.first_title(), Some(&json!("Lazarus Saturday")));
    assert_eq!(r.fast_level(), 3);
    assert_eq!(r.saints().len(), 7);
    assert_eq!(r.readings().len(), 7);
}
