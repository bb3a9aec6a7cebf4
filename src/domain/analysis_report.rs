use serde::Serialize;

/// Structured result of one analysis cycle.
///
/// The match/highlight fields are always populated; `summary` and `error`
/// reflect the independent summarization outcome.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub keyword: String,
    pub is_relevant: bool,
    pub positions: Vec<usize>,
    pub match_count: usize,
    pub highlighted_text: String,
    pub summary: Option<String>,
    pub parsed_summary: Option<serde_json::Value>,
    pub summary_is_json: bool,
    pub error: Option<String>,
}
