use chrono::{DateTime, Utc};
use dashmap::DashMap;

use crate::domain::{Feature, Principal, QuotaDecision, UsageRecord};

/// Daily limits per feature, kept separately for accounts and guests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuotaLimits {
    pub account_batch: u32,
    pub account_ai_analysis: u32,
    pub guest_batch: u32,
    pub guest_ai_analysis: u32,
}

impl Default for QuotaLimits {
    fn default() -> Self {
        Self {
            account_batch: 10,
            account_ai_analysis: 10,
            guest_batch: 3,
            guest_ai_analysis: 3,
        }
    }
}

impl QuotaLimits {
    /// The same limit for every feature and both identity spaces.
    pub fn uniform(limit: u32) -> Self {
        Self {
            account_batch: limit,
            account_ai_analysis: limit,
            guest_batch: limit,
            guest_ai_analysis: limit,
        }
    }

    pub fn daily_limit(&self, principal: &Principal, feature: Feature) -> u32 {
        match (principal, feature) {
            (Principal::Account(_), Feature::Batch) => self.account_batch,
            (Principal::Account(_), Feature::AiAnalysis) => self.account_ai_analysis,
            (Principal::Guest(_), Feature::Batch) => self.guest_batch,
            (Principal::Guest(_), Feature::AiAnalysis) => self.guest_ai_analysis,
        }
    }
}

/// Per-principal, per-feature daily usage counters.
///
/// Records reset lazily: a record older than the reset window is zeroed the
/// next time it is consumed. Each record is mutated under its map shard's
/// write lock, so two concurrent callers can never both take the last slot.
pub struct QuotaTracker {
    limits: QuotaLimits,
    records: DashMap<(Principal, Feature), UsageRecord>,
}

impl QuotaTracker {
    pub fn new(limits: QuotaLimits) -> Self {
        Self {
            limits,
            records: DashMap::new(),
        }
    }

    pub fn limits(&self) -> &QuotaLimits {
        &self.limits
    }

    pub fn peek(&self, principal: &Principal, feature: Feature) -> QuotaDecision {
        self.peek_at(principal, feature, Utc::now())
    }

    pub fn check_and_consume(&self, principal: &Principal, feature: Feature) -> QuotaDecision {
        self.check_and_consume_at(principal, feature, Utc::now())
    }

    /// Reports what a consume at `now` would see, without creating,
    /// resetting or incrementing any record.
    pub fn peek_at(
        &self,
        principal: &Principal,
        feature: Feature,
        now: DateTime<Utc>,
    ) -> QuotaDecision {
        let limit = self.limits.daily_limit(principal, feature);
        let key = (principal.clone(), feature);

        match self.records.get(&key) {
            Some(record) if !record.is_reset_due(now) => evaluate(&record, limit, now),
            _ => evaluate(&UsageRecord::new(now), limit, now),
        }
    }

    pub fn check_and_consume_at(
        &self,
        principal: &Principal,
        feature: Feature,
        now: DateTime<Utc>,
    ) -> QuotaDecision {
        let limit = self.limits.daily_limit(principal, feature);
        let mut record = self
            .records
            .entry((principal.clone(), feature))
            .or_insert_with(|| UsageRecord::new(now));

        if record.reset_if_due(now) {
            tracing::debug!(principal = principal.kind(), feature = %feature, "Daily usage reset");
        }

        if record.count < limit {
            record.count += 1;
            return QuotaDecision::allow(record.count, limit);
        }

        tracing::info!(
            principal = principal.kind(),
            feature = %feature,
            limit = limit,
            "Daily quota exhausted"
        );
        evaluate(&record, limit, now)
    }

    pub fn usage(&self, principal: &Principal, feature: Feature) -> Option<UsageRecord> {
        self.records
            .get(&(principal.clone(), feature))
            .map(|record| record.clone())
    }

    /// Drops every record held for `principal`.
    pub fn forget(&self, principal: &Principal) -> usize {
        let before = self.records.len();
        self.records.retain(|(owner, _), _| owner != principal);
        before - self.records.len()
    }
}

fn evaluate(record: &UsageRecord, limit: u32, now: DateTime<Utc>) -> QuotaDecision {
    if record.count < limit {
        QuotaDecision::allow(record.count, limit)
    } else {
        QuotaDecision::deny(record.count, limit, record.hours_until_reset(now))
    }
}
