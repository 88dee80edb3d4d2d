use chrono::Datelike;
use chrono::Timelike;

use super::Timestamp;

#[test]
fn it_parses_naive_backend_timestamps() {
    let ts = Timestamp::new("2024-03-01T10:15:00.123456");
    let date = ts.parse().unwrap();

    assert_eq!(date.year(), 2024);
    assert_eq!(date.month(), 3);
    assert_eq!(date.hour(), 10);
    assert_eq!(date.minute(), 15);
    assert_eq!(ts.display(), "2024-03-01 10:15");
}

#[test]
fn it_parses_rfc3339_timestamps() {
    let ts = Timestamp::new("2024-02-28T08:00:00+02:00");
    assert_eq!(ts.display(), "2024-02-28 06:00");
}

#[test]
fn it_displays_unparsable_timestamps_verbatim() {
    let ts = Timestamp::new("yesterday");
    assert!(ts.parse().is_none());
    assert_eq!(ts.display(), "yesterday");
}

#[test]
fn it_keeps_the_raw_value() {
    let ts: Timestamp = serde_json::from_str("\"2024-03-01T10:15:00.123456\"").unwrap();
    assert_eq!(ts.as_str(), "2024-03-01T10:15:00.123456");
    assert_eq!(
        serde_json::to_string(&ts).unwrap(),
        "\"2024-03-01T10:15:00.123456\""
    );
}
