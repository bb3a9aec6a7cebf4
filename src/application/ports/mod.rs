mod completion_backend;
mod history_repository;
mod llm_client;
mod repository_error;

pub use completion_backend::CompletionBackend;
pub use history_repository::HistoryRepository;
pub use llm_client::{LlmClient, LlmClientError};
pub use repository_error::RepositoryError;
