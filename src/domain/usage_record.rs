use chrono::{DateTime, Duration, Utc};

pub const RESET_WINDOW_HOURS: i64 = 24;

/// Usage counter for one (principal, feature) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsageRecord {
    pub count: u32,
    pub last_reset: DateTime<Utc>,
}

impl UsageRecord {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            count: 0,
            last_reset: now,
        }
    }

    fn window() -> Duration {
        Duration::hours(RESET_WINDOW_HOURS)
    }

    /// True once strictly more than the reset window has elapsed.
    pub fn is_reset_due(&self, now: DateTime<Utc>) -> bool {
        now - self.last_reset > Self::window()
    }

    /// Applies the lazy reset. Returns whether a reset happened.
    pub fn reset_if_due(&mut self, now: DateTime<Utc>) -> bool {
        if self.is_reset_due(now) {
            self.count = 0;
            self.last_reset = now;
            true
        } else {
            false
        }
    }

    pub fn next_reset(&self) -> DateTime<Utc> {
        self.last_reset + Self::window()
    }

    /// Whole hours until the next reset, rounded up and never below one.
    pub fn hours_until_reset(&self, now: DateTime<Utc>) -> i64 {
        let left = self.next_reset() - now;
        let minutes = left.num_minutes().max(0);
        ((minutes + 59) / 60).max(1)
    }
}
