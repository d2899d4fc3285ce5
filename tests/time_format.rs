mod common;

use common::utc;
use fiber_reports::ReportError;
use fiber_reports::time_format::{DEFAULT_TIME_ZONE, PLACEHOLDER, TimestampFormatter};

#[test]
fn absent_instant_renders_placeholder() {
    let formatter = TimestampFormatter::new(DEFAULT_TIME_ZONE).expect("zone");
    assert_eq!(formatter.format(None), PLACEHOLDER);
    assert_eq!(PLACEHOLDER, "-");
}

#[test]
fn renders_winter_and_summer_time() {
    let formatter = TimestampFormatter::new(DEFAULT_TIME_ZONE).expect("zone");
    assert_eq!(
        formatter.format(Some(utc(2024, 1, 15, 12, 0, 0))),
        "2024-01-15 13:00:00 CET"
    );
    assert_eq!(
        formatter.format(Some(utc(2024, 7, 1, 8, 30, 5))),
        "2024-07-01 10:30:05 CEST"
    );
}

#[test]
fn rolls_over_the_local_date() {
    let formatter = TimestampFormatter::new(DEFAULT_TIME_ZONE).expect("zone");
    assert_eq!(
        formatter.format(Some(utc(2023, 12, 31, 23, 30, 0))),
        "2024-01-01 00:30:00 CET"
    );
}

#[test]
fn unknown_zone_is_rejected() {
    let error = TimestampFormatter::new("Mars/Olympus_Mons").expect_err("unknown zone");
    assert!(matches!(error, ReportError::UnknownTimeZone(ref zone) if zone == "Mars/Olympus_Mons"));
}
