mod pg_pool;
mod repositories;

pub use pg_pool::{create_pool, run_migrations};
pub use repositories::PgHistoryRepository;
