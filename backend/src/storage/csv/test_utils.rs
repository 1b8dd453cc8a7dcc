//! Test utilities with automatic cleanup.
//!
//! Every test gets its own temporary data directory, removed when the
//! [`TestEnvironment`] goes out of scope even if the test panics.

use anyhow::Result;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

use super::connection::CsvConnection;
use super::earnings_log_repository::EarningsLogRepository;
use super::task_repository::TaskRepository;

/// RAII test environment around a temporary data directory
pub struct TestEnvironment {
    /// Kept alive so the directory survives until drop
    _temp_dir: TempDir,
    pub connection: CsvConnection,
    pub base_path: PathBuf,
}

impl TestEnvironment {
    /// Create an environment with an empty data directory
    pub fn new() -> Result<Self> {
        let _ = env_logger::builder().is_test(true).try_init();

        let temp_dir = TempDir::new()?;
        let base_path = temp_dir.path().to_path_buf();
        let connection = CsvConnection::from_directory(&base_path)?;

        Ok(TestEnvironment {
            _temp_dir: temp_dir,
            connection,
            base_path,
        })
    }

    /// Create an environment whose stores are already seeded
    pub fn initialized() -> Result<Self> {
        let env = Self::new()?;
        env.connection.ensure_initialized()?;
        Ok(env)
    }

    pub fn shared_connection(&self) -> Arc<CsvConnection> {
        Arc::new(self.connection.clone())
    }

    pub fn task_repository(&self) -> TaskRepository {
        TaskRepository::new(self.connection.clone())
    }

    pub fn earnings_log_repository(&self) -> EarningsLogRepository {
        EarningsLogRepository::new(self.connection.clone())
    }
}
