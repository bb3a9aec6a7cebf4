use std::net::{IpAddr, Ipv4Addr};

use chrono::{Duration, TimeZone, Utc};
use doclens::application::services::{QuotaLimits, QuotaTracker};
use doclens::domain::{Feature, Principal};

fn account() -> Principal {
    Principal::account("account-42")
}

fn guest() -> Principal {
    Principal::guest(IpAddr::V4(Ipv4Addr::new(203, 0, 113, 7)))
}

fn start() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 1, 8, 0, 0).unwrap()
}

#[test]
fn given_limit_of_three_when_consuming_four_times_then_fourth_is_denied() {
    let tracker = QuotaTracker::new(QuotaLimits::uniform(3));
    let now = start();

    let outcomes: Vec<(bool, u32)> = (0..4)
        .map(|_| tracker.check_and_consume_at(&account(), Feature::Batch, now))
        .map(|d| (d.allowed, d.remaining))
        .collect();

    assert_eq!(outcomes, vec![(true, 2), (true, 1), (true, 0), (false, 0)]);
}

#[test]
fn given_exhausted_record_older_than_a_day_when_consuming_then_resets_first() {
    let tracker = QuotaTracker::new(QuotaLimits::uniform(3));
    let now = start();
    for _ in 0..3 {
        tracker.check_and_consume_at(&account(), Feature::Batch, now);
    }

    let later = now + Duration::hours(24) + Duration::minutes(1);
    let decision = tracker.check_and_consume_at(&account(), Feature::Batch, later);

    assert!(decision.allowed);
    assert_eq!(decision.remaining, 2);
    let record = tracker.usage(&account(), Feature::Batch).unwrap();
    assert_eq!(record.count, 1);
    assert_eq!(record.last_reset, later);
}

#[test]
fn given_exactly_one_day_elapsed_when_consuming_then_does_not_reset_yet() {
    let tracker = QuotaTracker::new(QuotaLimits::uniform(1));
    let now = start();
    tracker.check_and_consume_at(&account(), Feature::Batch, now);

    let decision =
        tracker.check_and_consume_at(&account(), Feature::Batch, now + Duration::hours(24));

    assert!(!decision.allowed);
}

#[test]
fn given_exhausted_quota_when_denied_then_message_estimates_hours_left() {
    let tracker = QuotaTracker::new(QuotaLimits::uniform(1));
    let now = start();
    tracker.check_and_consume_at(&account(), Feature::AiAnalysis, now);

    let decision =
        tracker.check_and_consume_at(&account(), Feature::AiAnalysis, now + Duration::hours(20));

    assert!(!decision.allowed);
    assert_eq!(decision.remaining, 0);
    assert!(decision.message.contains("about 4 hours"), "{}", decision.message);
}

#[test]
fn given_fresh_principal_when_peeking_then_reports_full_quota_without_creating_record() {
    let tracker = QuotaTracker::new(QuotaLimits::uniform(5));

    let decision = tracker.peek_at(&account(), Feature::Batch, start());

    assert!(decision.allowed);
    assert_eq!(decision.remaining, 5);
    assert_eq!(decision.used, 0);
    assert!(tracker.usage(&account(), Feature::Batch).is_none());
}

#[test]
fn given_partial_usage_when_peeking_repeatedly_then_nothing_is_consumed() {
    let tracker = QuotaTracker::new(QuotaLimits::uniform(5));
    let now = start();
    tracker.check_and_consume_at(&account(), Feature::Batch, now);
    tracker.check_and_consume_at(&account(), Feature::Batch, now);

    let first = tracker.peek_at(&account(), Feature::Batch, now);
    let second = tracker.peek_at(&account(), Feature::Batch, now);

    assert_eq!(first, second);
    assert_eq!(first.remaining, 3);
    assert_eq!(first.used, 2);
}

#[test]
fn given_stale_exhausted_record_when_peeking_then_reports_reset_without_mutating() {
    let tracker = QuotaTracker::new(QuotaLimits::uniform(2));
    let now = start();
    tracker.check_and_consume_at(&account(), Feature::Batch, now);
    tracker.check_and_consume_at(&account(), Feature::Batch, now);

    let decision = tracker.peek_at(&account(), Feature::Batch, now + Duration::hours(30));

    assert!(decision.allowed);
    assert_eq!(decision.remaining, 2);
    assert_eq!(tracker.usage(&account(), Feature::Batch).unwrap().count, 2);
}

#[test]
fn given_account_and_guest_when_consuming_then_records_are_independent() {
    let tracker = QuotaTracker::new(QuotaLimits::uniform(1));
    let now = start();

    assert!(tracker.check_and_consume_at(&account(), Feature::Batch, now).allowed);
    assert!(tracker.check_and_consume_at(&guest(), Feature::Batch, now).allowed);
    assert!(tracker.check_and_consume_at(&account(), Feature::AiAnalysis, now).allowed);
    assert!(!tracker.check_and_consume_at(&account(), Feature::Batch, now).allowed);
}

#[test]
fn given_default_limits_when_resolving_then_guests_get_smaller_allowance() {
    let limits = QuotaLimits::default();

    assert_eq!(limits.daily_limit(&account(), Feature::Batch), 10);
    assert_eq!(limits.daily_limit(&account(), Feature::AiAnalysis), 10);
    assert!(limits.daily_limit(&guest(), Feature::AiAnalysis) < 10);
}

#[test]
fn given_zero_limit_when_checking_then_always_denies() {
    let tracker = QuotaTracker::new(QuotaLimits::uniform(0));

    assert!(!tracker.peek(&guest(), Feature::Batch).allowed);
    assert!(!tracker.check_and_consume(&guest(), Feature::Batch).allowed);
}

#[test]
fn given_deleted_account_when_forgetting_then_drops_all_its_records() {
    let tracker = QuotaTracker::new(QuotaLimits::uniform(3));
    tracker.check_and_consume(&account(), Feature::Batch);
    tracker.check_and_consume(&account(), Feature::AiAnalysis);
    tracker.check_and_consume(&guest(), Feature::Batch);

    assert_eq!(tracker.forget(&account()), 2);
    assert!(tracker.usage(&account(), Feature::Batch).is_none());
    assert!(tracker.usage(&guest(), Feature::Batch).is_some());
}

#[test]
fn given_concurrent_callers_when_consuming_last_slots_then_never_over_admits() {
    let tracker = QuotaTracker::new(QuotaLimits::uniform(5));
    let principal = account();

    let admitted: usize = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..32)
            .map(|_| {
                scope.spawn(|| {
                    tracker
                        .check_and_consume(&principal, Feature::AiAnalysis)
                        .allowed
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|allowed| *allowed)
            .count()
    });

    assert_eq!(admitted, 5);
}
