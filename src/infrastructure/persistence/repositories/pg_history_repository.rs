use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row};
use tracing::instrument;
use uuid::Uuid;

use crate::application::ports::{HistoryRepository, RepositoryError};
use crate::domain::{AccountId, HistoryEntry, HistoryEntryId};

pub struct PgHistoryRepository {
    pool: PgPool,
}

impl PgHistoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl HistoryRepository for PgHistoryRepository {
    #[instrument(skip(self, entry), fields(entry_id = %entry.id.as_uuid()))]
    async fn record(&self, entry: &HistoryEntry) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO analysis_history
                (id, account_id, filename, keyword, extracted_text, ai_summary, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(entry.id.as_uuid())
        .bind(entry.account_id.as_str())
        .bind(entry.filename.as_deref())
        .bind(&entry.keyword)
        .bind(&entry.extracted_text)
        .bind(entry.ai_summary.as_deref())
        .bind(entry.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        Ok(())
    }

    #[instrument(skip(self, account_id))]
    async fn list_recent(
        &self,
        account_id: &AccountId,
        limit: i64,
    ) -> Result<Vec<HistoryEntry>, RepositoryError> {
        let rows = sqlx::query(
            r#"
            SELECT id, account_id, filename, keyword, extracted_text, ai_summary, created_at
            FROM analysis_history
            WHERE account_id = $1
            ORDER BY created_at DESC
            LIMIT $2
            "#,
        )
        .bind(account_id.as_str())
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        rows.iter().map(row_to_entry).collect()
    }

    #[instrument(skip(self, account_id), fields(entry_id = %id.as_uuid()))]
    async fn delete(
        &self,
        account_id: &AccountId,
        id: HistoryEntryId,
    ) -> Result<bool, RepositoryError> {
        let result = sqlx::query(
            r#"
            DELETE FROM analysis_history
            WHERE id = $1 AND account_id = $2
            "#,
        )
        .bind(id.as_uuid())
        .bind(account_id.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }
}

fn row_to_entry(row: &sqlx::postgres::PgRow) -> Result<HistoryEntry, RepositoryError> {
    let column_error = |e: sqlx::Error| RepositoryError::QueryFailed(e.to_string());

    let id: Uuid = row.try_get("id").map_err(column_error)?;
    let account_id: String = row.try_get("account_id").map_err(column_error)?;
    let created_at: DateTime<Utc> = row.try_get("created_at").map_err(column_error)?;

    Ok(HistoryEntry {
        id: HistoryEntryId::from_uuid(id),
        account_id: AccountId::new(account_id),
        filename: row.try_get("filename").map_err(column_error)?,
        keyword: row.try_get("keyword").map_err(column_error)?,
        extracted_text: row.try_get("extracted_text").map_err(column_error)?,
        ai_summary: row.try_get("ai_summary").map_err(column_error)?,
        created_at,
    })
}
