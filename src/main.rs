use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use doclens::application::ports::HistoryRepository;
use doclens::application::services::{AnalysisService, QuotaLimits, QuotaTracker};
use doclens::infrastructure::llm::{ChatCompletionBackend, CredentialRotationClient};
use doclens::infrastructure::observability::{TracingConfig, init_tracing};
use doclens::infrastructure::persistence::{PgHistoryRepository, create_pool, run_migrations};
use doclens::presentation::{AppState, Environment, Settings, TrustedProxyHops, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment).context("Failed to load configuration")?;

    init_tracing(&TracingConfig::from_settings(environment, &settings.logging));

    let backend = ChatCompletionBackend::from_settings(&settings.llm)
        .context("Failed to build completion backend")?;
    let credentials = settings.llm.api_keys.clone();
    if credentials.is_empty() {
        tracing::warn!("No API keys configured, summaries will fail");
    } else {
        tracing::info!(keys = credentials.len(), model = %settings.llm.model, "LLM credentials loaded");
    }
    let llm_client = Arc::new(CredentialRotationClient::new(backend, credentials));

    let history_repository: Option<Arc<dyn HistoryRepository>> = match &settings.database.url {
        Some(url) => {
            let pool = create_pool(url, settings.database.max_connections)
                .await
                .context("Failed to connect to database")?;
            run_migrations(&pool)
                .await
                .context("Failed to run database migrations")?;
            let repository: Arc<dyn HistoryRepository> = Arc::new(PgHistoryRepository::new(pool));
            Some(repository)
        }
        None => {
            tracing::info!("No database configured, analysis history is disabled");
            None
        }
    };

    let mut analysis_service =
        AnalysisService::new(llm_client, settings.analysis.summary_char_budget);
    if let Some(repository) = &history_repository {
        analysis_service = analysis_service.with_history(Arc::clone(repository));
    }

    let state = AppState {
        analysis_service: Arc::new(analysis_service),
        quota_tracker: Arc::new(QuotaTracker::new(QuotaLimits::from(&settings.quota))),
        history_repository,
        trusted_proxy_hops: TrustedProxyHops(settings.server.trusted_proxy_hops),
    };

    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("Invalid server address")?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        router.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
