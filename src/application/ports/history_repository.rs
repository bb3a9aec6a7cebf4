use async_trait::async_trait;

use crate::domain::{AccountId, HistoryEntry, HistoryEntryId};

use super::RepositoryError;

#[async_trait]
pub trait HistoryRepository: Send + Sync {
    async fn record(&self, entry: &HistoryEntry) -> Result<(), RepositoryError>;

    async fn list_recent(
        &self,
        account_id: &AccountId,
        limit: i64,
    ) -> Result<Vec<HistoryEntry>, RepositoryError>;

    async fn delete(&self, account_id: &AccountId, id: HistoryEntryId)
    -> Result<bool, RepositoryError>;
}
