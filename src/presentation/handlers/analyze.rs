use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use crate::application::ports::LlmClient;
use crate::application::services::AnalysisRequest;
use crate::domain::{AnalysisReport, Feature, Principal, QuotaDecision};
use crate::infrastructure::observability::sanitize_excerpt;
use crate::presentation::state::AppState;

use super::error_response;

#[derive(Deserialize)]
pub struct AnalyzeRequest {
    pub text: String,
    pub keyword: String,
    #[serde(default)]
    pub filename: Option<String>,
}

#[derive(Serialize)]
pub struct AnalyzeResponse {
    #[serde(flatten)]
    pub report: AnalysisReport,
    pub quota: QuotaDecision,
}

#[tracing::instrument(skip(state, principal, request), fields(principal = principal.kind()))]
pub async fn analyze_handler<L>(
    State(state): State<AppState<L>>,
    principal: Principal,
    Json(request): Json<AnalyzeRequest>,
) -> Response
where
    L: LlmClient + 'static,
{
    let keyword = request.keyword.trim();
    if keyword.is_empty() {
        tracing::warn!("Analyze request without keyword");
        return error_response(StatusCode::BAD_REQUEST, "Keyword must not be empty");
    }

    tracing::debug!(
        keyword = %sanitize_excerpt(keyword),
        text = %sanitize_excerpt(&request.text),
        "Processing analysis"
    );

    // Consumed up front: a failed summary still counts against the quota.
    let quota = state
        .quota_tracker
        .check_and_consume(&principal, Feature::AiAnalysis);
    if !quota.allowed {
        return (StatusCode::TOO_MANY_REQUESTS, Json(quota)).into_response();
    }

    let mut analysis = AnalysisRequest::new(request.text, keyword);
    analysis.filename = request.filename;

    let report = state.analysis_service.analyze(&analysis, &principal).await;

    tracing::info!(
        is_relevant = report.is_relevant,
        match_count = report.match_count,
        summary_failed = report.error.is_some(),
        "Analysis complete"
    );

    (StatusCode::OK, Json(AnalyzeResponse { report, quota })).into_response()
}
