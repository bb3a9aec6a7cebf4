pub mod config;
pub mod handlers;
mod principal_extractor;
pub mod router;
pub mod state;

pub use config::{Environment, Settings};
pub use principal_extractor::{ACCOUNT_ID_HEADER, FORWARDED_FOR_HEADER, TrustedProxyHops};
pub use router::create_router;
pub use state::AppState;
