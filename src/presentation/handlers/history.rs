use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::application::ports::{HistoryRepository, LlmClient};
use crate::domain::{AccountId, HistoryEntry, HistoryEntryId, Principal};
use crate::presentation::state::AppState;

use super::error_response;

const DEFAULT_PAGE_SIZE: i64 = 5;
const MAX_PAGE_SIZE: i64 = 100;

#[derive(Deserialize)]
pub struct HistoryQuery {
    pub limit: Option<i64>,
}

#[derive(Serialize)]
pub struct HistoryItem {
    pub id: Uuid,
    pub filename: Option<String>,
    pub keyword: String,
    pub extracted_text: String,
    pub ai_summary: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<HistoryEntry> for HistoryItem {
    fn from(entry: HistoryEntry) -> Self {
        Self {
            id: entry.id.as_uuid(),
            filename: entry.filename,
            keyword: entry.keyword,
            extracted_text: entry.extracted_text,
            ai_summary: entry.ai_summary,
            created_at: entry.created_at,
        }
    }
}

fn resolve<'a>(
    repository: &'a Option<Arc<dyn HistoryRepository>>,
    principal: &'a Principal,
) -> Result<(&'a Arc<dyn HistoryRepository>, &'a AccountId), Response> {
    let account_id = principal.account_id().ok_or_else(|| {
        error_response(StatusCode::UNAUTHORIZED, "History is only kept for signed-in accounts")
    })?;
    let repository = repository.as_ref().ok_or_else(|| {
        error_response(StatusCode::SERVICE_UNAVAILABLE, "History storage is not configured")
    })?;
    Ok((repository, account_id))
}

#[tracing::instrument(skip(state, principal, query), fields(principal = principal.kind()))]
pub async fn history_list_handler<L>(
    State(state): State<AppState<L>>,
    principal: Principal,
    Query(query): Query<HistoryQuery>,
) -> Response
where
    L: LlmClient + 'static,
{
    let (repository, account_id) = match resolve(&state.history_repository, &principal) {
        Ok(found) => found,
        Err(response) => return response,
    };

    let limit = query.limit.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE);

    match repository.list_recent(account_id, limit).await {
        Ok(entries) => {
            let items: Vec<HistoryItem> = entries.into_iter().map(HistoryItem::from).collect();
            (StatusCode::OK, Json(items)).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to load history");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to load history")
        }
    }
}

#[tracing::instrument(skip(state, principal), fields(principal = principal.kind()))]
pub async fn history_delete_handler<L>(
    State(state): State<AppState<L>>,
    principal: Principal,
    Path(entry_id): Path<Uuid>,
) -> Response
where
    L: LlmClient + 'static,
{
    let (repository, account_id) = match resolve(&state.history_repository, &principal) {
        Ok(found) => found,
        Err(response) => return response,
    };

    match repository
        .delete(account_id, HistoryEntryId::from_uuid(entry_id))
        .await
    {
        Ok(true) => StatusCode::NO_CONTENT.into_response(),
        Ok(false) => error_response(StatusCode::NOT_FOUND, "History entry not found"),
        Err(e) => {
            tracing::error!(error = %e, "Failed to delete history entry");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to delete history entry")
        }
    }
}
