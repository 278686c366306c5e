use thiserror::Error;

/// Failure kinds for recurrence rule parsing and evaluation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuleError {
    #[error("empty recurrence rule")]
    Empty,

    #[error("invalid day interval: {0}")]
    InvalidInterval(String),

    #[error("day interval out of range: {0} (must be 1..=399)")]
    IntervalOutOfRange(u64),

    #[error("unsupported recurrence rule: {0}")]
    Unsupported(String),
}

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Database error")]
    Database(#[from] sqlx::Error),

    #[error("Migration error")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("IO error")]
    Io(#[from] std::io::Error),

    #[error("Task not found: {0}")]
    NotFound(i64),

    #[error("Task title must not be empty")]
    EmptyTitle,

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Recurrence error")]
    Recurrence(#[from] RuleError),
}
