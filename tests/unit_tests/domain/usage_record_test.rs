use chrono::{Duration, TimeZone, Utc};
use doclens::domain::UsageRecord;

#[test]
fn given_record_within_window_when_checking_then_no_reset_is_due() {
    let start = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
    let mut record = UsageRecord::new(start);
    record.count = 4;

    assert!(!record.reset_if_due(start + Duration::hours(23)));
    assert_eq!(record.count, 4);
}

#[test]
fn given_record_past_window_when_resetting_then_zeroes_count_and_moves_timestamp() {
    let start = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
    let later = start + Duration::hours(25);
    let mut record = UsageRecord::new(start);
    record.count = 4;

    assert!(record.reset_if_due(later));
    assert_eq!(record.count, 0);
    assert_eq!(record.last_reset, later);
}

#[test]
fn given_partial_hour_left_when_estimating_then_rounds_up() {
    let start = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
    let record = UsageRecord::new(start);

    assert_eq!(record.hours_until_reset(start + Duration::minutes(90)), 23);
    assert_eq!(record.hours_until_reset(start + Duration::hours(24)), 1);
}
