use std::sync::Arc;

use axum::extract::FromRef;

use crate::application::ports::{HistoryRepository, LlmClient};
use crate::application::services::{AnalysisService, QuotaTracker};
use crate::presentation::TrustedProxyHops;

pub struct AppState<L>
where
    L: LlmClient,
{
    pub analysis_service: Arc<AnalysisService<L>>,
    pub quota_tracker: Arc<QuotaTracker>,
    pub history_repository: Option<Arc<dyn HistoryRepository>>,
    pub trusted_proxy_hops: TrustedProxyHops,
}

impl<L> Clone for AppState<L>
where
    L: LlmClient,
{
    fn clone(&self) -> Self {
        Self {
            analysis_service: Arc::clone(&self.analysis_service),
            quota_tracker: Arc::clone(&self.quota_tracker),
            history_repository: self.history_repository.clone(),
            trusted_proxy_hops: self.trusted_proxy_hops,
        }
    }
}

impl<L> FromRef<AppState<L>> for TrustedProxyHops
where
    L: LlmClient,
{
    fn from_ref(state: &AppState<L>) -> Self {
        state.trusted_proxy_hops
    }
}
