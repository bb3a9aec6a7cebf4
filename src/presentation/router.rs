use axum::Router;
use axum::middleware;
use axum::routing::{delete, get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::LlmClient;
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    analyze_handler, health_handler, history_delete_handler, history_list_handler,
    quota_consume_handler, quota_status_handler,
};
use crate::presentation::state::AppState;

pub fn create_router<L>(state: AppState<L>) -> Router
where
    L: LlmClient + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/health", get(health_handler))
        .route("/api/v1/analyze", post(analyze_handler::<L>))
        .route("/api/v1/quota/{feature}", get(quota_status_handler::<L>))
        .route(
            "/api/v1/quota/{feature}/consume",
            post(quota_consume_handler::<L>),
        )
        .route("/api/v1/history", get(history_list_handler::<L>))
        .route(
            "/api/v1/history/{entry_id}",
            delete(history_delete_handler::<L>),
        )
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
