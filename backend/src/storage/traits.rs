//! # Storage Traits
//!
//! Storage abstraction used by the domain services. All operations are
//! synchronous and read or write whole tables.

use shared::Task;

use crate::domain::models::log_entry::LogEntry;
use crate::error::Result;

/// Persistence for the task catalog
pub trait TaskStorage: Send + Sync {
    /// Load the catalog in stored order
    fn load_tasks(&self) -> Result<Vec<Task>>;

    /// Replace the whole catalog. Tasks missing from `tasks` are gone afterwards.
    fn save_tasks(&self, tasks: &[Task]) -> Result<()>;
}

/// Persistence for the earnings log
pub trait EarningsLogStorage: Send + Sync {
    /// Load the log, newest entry first
    fn load_log(&self) -> Result<Vec<LogEntry>>;

    /// Put `entry` in front of the stored log.
    /// The current log is read before anything is written, so a read failure
    /// leaves the store untouched.
    fn append_log(&self, entry: &LogEntry) -> Result<()>;
}

/// A storage backend that can create its repositories and seed itself
pub trait Connection: Send + Sync + Clone {
    type TaskRepository: TaskStorage + Clone;
    type EarningsLogRepository: EarningsLogStorage + Clone;

    /// Create missing stores with their default content. Safe to call on every startup.
    fn ensure_initialized(&self) -> Result<()>;

    fn create_task_repository(&self) -> Self::TaskRepository;

    fn create_earnings_log_repository(&self) -> Self::EarningsLogRepository;
}
