use sqlx::{PgPool, postgres::PgPoolOptions};
use std::time::Duration;
use tracing::{info, instrument, warn};

use crate::application::ports::RepositoryError;

const CONNECT_ATTEMPTS: u32 = 5;

#[instrument(skip(url))]
pub async fn create_pool(url: &str, max_connections: u32) -> Result<PgPool, RepositoryError> {
    let mut delay = Duration::from_millis(500);

    for attempt in 1..=CONNECT_ATTEMPTS {
        match PgPoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(Duration::from_secs(5))
            .connect(url)
            .await
        {
            Ok(pool) => {
                info!(attempt, "PostgreSQL connection pool established");
                return Ok(pool);
            }
            Err(e) if attempt < CONNECT_ATTEMPTS => {
                warn!(
                    error = %e,
                    attempt,
                    delay_ms = delay.as_millis(),
                    "PostgreSQL connection failed, retrying"
                );
                tokio::time::sleep(delay).await;
                delay *= 2;
            }
            Err(e) => return Err(RepositoryError::ConnectionFailed(e.to_string())),
        }
    }

    Err(RepositoryError::ConnectionFailed(
        "no connection attempts made".to_string(),
    ))
}

#[instrument(skip(pool))]
pub async fn run_migrations(pool: &PgPool) -> Result<(), RepositoryError> {
    sqlx::migrate!()
        .run(pool)
        .await
        .map_err(|e| RepositoryError::MigrationFailed(e.to_string()))?;
    info!("Database migrations applied");
    Ok(())
}
