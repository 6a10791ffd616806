#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use chrono::{TimeZone, Utc};

use healthlog_core::record::{decode_record, REQUIRED_FIELDS_MSG};
use healthlog_core::{HealthLogError, StoredLogEntry};

#[test]
fn generated_fields_lead_and_record_follows() {
    let record = decode_record(br#"{"Date":"2024-01-01","Time":"08:00","Food_Item":"Oatmeal"}"#).unwrap();
    let at = Utc.with_ymd_and_hms(2024, 1, 1, 8, 0, 5).unwrap();
    let entry = StoredLogEntry::new(record, 1_704_096_005_000, at);

    assert_eq!(entry.id, "1704096005000");
    assert_eq!(entry.timestamp, "2024-01-01T08:00:05.000Z");

    let s = serde_json::to_string(&entry).unwrap();
    assert!(s.starts_with(r#"{"id":"1704096005000","timestamp":"2024-01-01T08:00:05.000Z","Date":"2024-01-01""#), "{s}");
}

#[test]
fn caller_cannot_override_generated_fields() {
    let record =
        decode_record(br#"{"Date":"2024-01-01","Time":"08:00","id":"spoofed","timestamp":"yesterday","Mood":"ok"}"#)
            .unwrap();
    let entry = StoredLogEntry::new(record, 42, Utc::now());

    let v = serde_json::to_value(&entry).unwrap();
    assert_eq!(v["id"], "42");
    assert_ne!(v["timestamp"], "yesterday");
    assert_eq!(v["Mood"], "ok");
    assert!(entry.record.get("id").is_none());
    assert!(entry.record.get("timestamp").is_none());
    let extra: Vec<&str> = entry.record.extra().map(|(k, _)| k.as_str()).collect();
    assert_eq!(extra, vec!["Mood"]);
}

#[test]
fn validation_error_carries_client_message() {
    let record = decode_record(br#"{"Time":"08:00"}"#).unwrap();
    match record.validate() {
        Err(HealthLogError::Validation(msg)) => assert_eq!(msg, REQUIRED_FIELDS_MSG),
        other => panic!("unexpected: {other:?}"),
    }
}

#[test]
fn stored_entry_parses_back_without_leaking_generated_keys() {
    let record = decode_record(br#"{"Date":"2024-01-01","Time":"08:00","Extra":"x"}"#).unwrap();
    let entry = StoredLogEntry::new(record, 7, Utc::now());
    let back: StoredLogEntry = serde_json::from_str(&serde_json::to_string(&entry).unwrap()).unwrap();
    assert_eq!(back, entry);
}

#[test]
fn non_string_and_null_values_round_trip_unchanged() {
    let body = br#"{"Date":"2024-01-01","Time":"08:00","Calories":300,"Notes":null,"Tags":["am"]}"#;
    let record = decode_record(body).unwrap();
    record.validate().unwrap();
    assert_eq!(record.date(), Some("2024-01-01"));
    assert_eq!(record.get_str("Calories"), None);

    let entry = StoredLogEntry::new(record, 1, Utc::now());
    let v = serde_json::to_value(&entry).unwrap();
    assert_eq!(v["Calories"], 300);
    assert!(v["Notes"].is_null());
    assert!(v.as_object().unwrap().contains_key("Notes"));
    assert_eq!(v["Tags"][0], "am");
}

#[test]
fn falsy_required_fields_fail_validation() {
    for body in [
        r#"{"Date":"2024-01-01"}"#,
        r#"{"Date":"2024-01-01","Time":""}"#,
        r#"{"Date":"2024-01-01","Time":false}"#,
        r#"{"Date":0,"Time":"08:00"}"#,
        r#"{"Date":null,"Time":"08:00"}"#,
    ] {
        let record = decode_record(body.as_bytes()).unwrap();
        assert!(
            matches!(record.validate(), Err(HealthLogError::Validation(_))),
            "body={body}"
        );
    }
}
