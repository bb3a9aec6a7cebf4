mod analysis_service;
mod highlighter;
mod matcher;
mod quota_tracker;
mod summary_parser;
mod summary_prompt;

pub use analysis_service::{AnalysisRequest, AnalysisService};
pub use highlighter::{MARK_CLOSE, MARK_OPEN, highlight, highlight_matches};
pub use matcher::{HASH_BASE, HASH_MODULUS, RollingHash, count_matches, fold_case, search};
pub use quota_tracker::{QuotaLimits, QuotaTracker};
pub use summary_parser::{ParsedSummary, parse_summary};
pub use summary_prompt::{DEFAULT_SUMMARY_CHAR_BUDGET, build_summary_prompt, truncate_chars};
