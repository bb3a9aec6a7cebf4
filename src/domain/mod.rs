mod analysis_report;
mod feature;
mod history_entry;
mod match_result;
mod principal;
mod quota_decision;
mod usage_record;

pub use analysis_report::AnalysisReport;
pub use feature::{Feature, UnknownFeature};
pub use history_entry::{HistoryEntry, HistoryEntryId};
pub use match_result::MatchResult;
pub use principal::{AccountId, Principal};
pub use quota_decision::QuotaDecision;
pub use usage_record::{RESET_WINDOW_HOURS, UsageRecord};
