mod pg_history_repository;

pub use pg_history_repository::PgHistoryRepository;
