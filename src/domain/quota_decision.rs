use serde::Serialize;

/// Outcome of a quota check. A value only, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuotaDecision {
    pub allowed: bool,
    pub remaining: u32,
    pub used: u32,
    pub limit: u32,
    pub message: String,
}

impl QuotaDecision {
    pub fn allow(used: u32, limit: u32) -> Self {
        let remaining = limit.saturating_sub(used);
        Self {
            allowed: true,
            remaining,
            used,
            limit,
            message: format!("{} remaining today", remaining),
        }
    }

    pub fn deny(used: u32, limit: u32, hours_until_reset: i64) -> Self {
        let unit = if hours_until_reset == 1 { "hour" } else { "hours" };
        Self {
            allowed: false,
            remaining: 0,
            used,
            limit,
            message: format!(
                "Daily limit of {} reached, resets in about {} {}",
                limit, hours_until_reset, unit
            ),
        }
    }
}
