use std::sync::Arc;

use crate::application::ports::{HistoryRepository, LlmClient, LlmClientError};
use crate::domain::{AccountId, AnalysisReport, HistoryEntry, Principal};

use super::highlighter::highlight_matches;
use super::matcher::search;
use super::summary_parser::{ParsedSummary, parse_summary};
use super::summary_prompt::build_summary_prompt;

#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    pub text: String,
    pub keyword: String,
    pub filename: Option<String>,
}

impl AnalysisRequest {
    pub fn new(text: impl Into<String>, keyword: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            keyword: keyword.into(),
            filename: None,
        }
    }

    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }
}

enum SummaryOutcome {
    Skipped,
    Completed(ParsedSummary),
    Failed(LlmClientError),
}

/// Runs keyword matching and AI summarization for one document.
///
/// The two halves are independent: a failed summary is reported on the
/// result and never hides the match positions or highlighted text.
pub struct AnalysisService<L>
where
    L: LlmClient,
{
    llm_client: Arc<L>,
    history_repository: Option<Arc<dyn HistoryRepository>>,
    summary_char_budget: usize,
}

impl<L> AnalysisService<L>
where
    L: LlmClient,
{
    pub fn new(llm_client: Arc<L>, summary_char_budget: usize) -> Self {
        Self {
            llm_client,
            history_repository: None,
            summary_char_budget,
        }
    }

    pub fn with_history(mut self, history_repository: Arc<dyn HistoryRepository>) -> Self {
        self.history_repository = Some(history_repository);
        self
    }

    #[tracing::instrument(
        skip(self, request, principal),
        fields(principal = principal.kind(), text_chars = request.text.chars().count())
    )]
    pub async fn analyze(&self, request: &AnalysisRequest, principal: &Principal) -> AnalysisReport {
        let matches = search(&request.text, &request.keyword);
        let is_relevant = matches.is_found();
        let highlighted_text = if is_relevant {
            highlight_matches(&request.text, &matches)
        } else {
            request.text.clone()
        };

        tracing::debug!(match_count = matches.count(), "Keyword search complete");

        let mut report = AnalysisReport {
            keyword: request.keyword.clone(),
            is_relevant,
            match_count: matches.count(),
            positions: matches.into_positions(),
            highlighted_text,
            summary: None,
            parsed_summary: None,
            summary_is_json: false,
            error: None,
        };

        match self.summarize(&request.text).await {
            SummaryOutcome::Skipped => {}
            SummaryOutcome::Completed(summary) => {
                report.summary_is_json = summary.is_json();
                report.parsed_summary = summary.parsed;
                report.summary = Some(summary.raw);
            }
            SummaryOutcome::Failed(e) => {
                tracing::warn!(error = %e, "Summary generation failed");
                report.error = Some(e.to_string());
            }
        }

        if let Some(account_id) = principal.account_id() {
            self.record_history(account_id, request, &report).await;
        }

        report
    }

    async fn summarize(&self, text: &str) -> SummaryOutcome {
        if text.trim().is_empty() {
            return SummaryOutcome::Skipped;
        }

        let prompt = build_summary_prompt(text, self.summary_char_budget);
        match self.llm_client.complete(&prompt).await {
            Ok(raw) => SummaryOutcome::Completed(parse_summary(&raw)),
            Err(e) => SummaryOutcome::Failed(e),
        }
    }

    async fn record_history(
        &self,
        account_id: &AccountId,
        request: &AnalysisRequest,
        report: &AnalysisReport,
    ) {
        let Some(repository) = &self.history_repository else {
            return;
        };

        let entry = HistoryEntry::new(
            account_id.clone(),
            request.filename.clone(),
            request.keyword.clone(),
            request.text.clone(),
            report.summary.clone(),
        );

        if let Err(e) = repository.record(&entry).await {
            tracing::error!(error = %e, "Failed to save history");
        }
    }
}
