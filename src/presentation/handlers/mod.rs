mod analyze;
mod error;
mod health;
mod history;
mod quota;

pub use analyze::{AnalyzeRequest, AnalyzeResponse, analyze_handler};
pub use error::{ErrorResponse, error_response};
pub use health::health_handler;
pub use history::{history_delete_handler, history_list_handler};
pub use quota::{quota_consume_handler, quota_status_handler};
