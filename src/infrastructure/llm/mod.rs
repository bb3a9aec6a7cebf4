mod chat_completion_backend;
mod credential_rotation_client;
mod rotation_cursor;

pub use chat_completion_backend::{ChatCompletionBackend, DEFAULT_BASE_URL, DEFAULT_MODEL};
pub use credential_rotation_client::CredentialRotationClient;
pub use rotation_cursor::RotationCursor;
