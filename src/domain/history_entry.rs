use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::AccountId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HistoryEntryId(Uuid);

impl HistoryEntryId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for HistoryEntryId {
    fn default() -> Self {
        Self::new()
    }
}

/// A completed analysis kept for an authenticated account.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub id: HistoryEntryId,
    pub account_id: AccountId,
    pub filename: Option<String>,
    pub keyword: String,
    pub extracted_text: String,
    pub ai_summary: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl HistoryEntry {
    pub fn new(
        account_id: AccountId,
        filename: Option<String>,
        keyword: String,
        extracted_text: String,
        ai_summary: Option<String>,
    ) -> Self {
        Self {
            id: HistoryEntryId::new(),
            account_id,
            filename,
            keyword,
            extracted_text,
            ai_summary,
            created_at: Utc::now(),
        }
    }
}
