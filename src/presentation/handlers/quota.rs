use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::application::ports::LlmClient;
use crate::domain::{Feature, Principal};
use crate::presentation::state::AppState;

use super::error_response;

#[tracing::instrument(skip(state, principal), fields(principal = principal.kind()))]
pub async fn quota_status_handler<L>(
    State(state): State<AppState<L>>,
    Path(feature): Path<String>,
    principal: Principal,
) -> Response
where
    L: LlmClient + 'static,
{
    match feature.parse::<Feature>() {
        Ok(feature) => {
            let decision = state.quota_tracker.peek(&principal, feature);
            (StatusCode::OK, Json(decision)).into_response()
        }
        Err(e) => error_response(StatusCode::NOT_FOUND, e.to_string()),
    }
}

#[tracing::instrument(skip(state, principal), fields(principal = principal.kind()))]
pub async fn quota_consume_handler<L>(
    State(state): State<AppState<L>>,
    Path(feature): Path<String>,
    principal: Principal,
) -> Response
where
    L: LlmClient + 'static,
{
    let feature = match feature.parse::<Feature>() {
        Ok(feature) => feature,
        Err(e) => return error_response(StatusCode::NOT_FOUND, e.to_string()),
    };

    let decision = state.quota_tracker.check_and_consume(&principal, feature);
    let status = if decision.allowed {
        StatusCode::OK
    } else {
        StatusCode::TOO_MANY_REQUESTS
    };

    (status, Json(decision)).into_response()
}
