//! # Chore Allowance Backend
//!
//! All non-UI logic for the chore allowance tracker: a household member records
//! completed chores, earns a reward per chore, and sees their earnings split
//! into spend / save / invest along with a monthly summary.
//!
//! ## Architecture
//!
//! ```text
//! Presentation layer (external)
//!     ↓
//! Backend (this struct) + io::mappers
//!     ↓
//! Domain (services, models)
//!     ↓
//! Storage (CSV files)
//! ```
//!
//! Every call is synchronous. After each mutation the presentation layer asks
//! for a fresh [`DashboardSnapshot`] and redraws from it.

pub mod config;
pub mod domain;
pub mod error;
pub mod io;
pub mod storage;

use log::info;
use shared::{
    AllocationSetting, DashboardSnapshot, LogEntry, RecordChoreRequest, RecordChoreResponse,
    SaveCatalogRequest, SaveCatalogResponse, Task,
};
use std::sync::Arc;

use crate::domain::commands::catalog::SaveCatalogCommand;
use crate::domain::commands::earnings::RecordChoreCommand;
use crate::domain::{
    AllocationService, DashboardService, EarningsLogService, HistoryTableConfig,
    HistoryTableService, MonthlyRollupService, TaskCatalogService,
};
use crate::io::mappers::LogEntryMapper;
use crate::storage::csv::CsvConnection;

pub use config::AppConfig;
pub use error::{AllowanceError, ErrorKind, Result};

/// Main backend struct that wires storage and services together
pub struct Backend {
    config: AppConfig,
    connection: Arc<CsvConnection>,
    pub task_catalog_service: TaskCatalogService<CsvConnection>,
    pub earnings_log_service: EarningsLogService<CsvConnection>,
    pub allocation_service: AllocationService,
    pub monthly_rollup_service: MonthlyRollupService,
    pub dashboard_service: DashboardService<CsvConnection>,
}

impl Backend {
    /// Open the stores named by `config`, seeding them on first run
    pub fn new(config: AppConfig) -> Result<Self> {
        let connection = Arc::new(CsvConnection::new(&config)?);
        info!("Opening data directory {}", connection.base_directory().display());
        connection.ensure_initialized()?;

        let history_table_service = HistoryTableService::with_config(HistoryTableConfig {
            currency_symbol: config.currency_symbol.clone(),
            ..HistoryTableConfig::default()
        });

        Ok(Self {
            task_catalog_service: TaskCatalogService::new(connection.clone()),
            earnings_log_service: EarningsLogService::new(connection.clone()),
            allocation_service: AllocationService::new(),
            monthly_rollup_service: MonthlyRollupService::new(),
            dashboard_service: DashboardService::new(connection.clone(), history_table_service),
            connection,
            config,
        })
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn connection(&self) -> &CsvConnection {
        &self.connection
    }

    /// Slider positions to start a session with
    pub fn default_allocation(&self) -> AllocationSetting {
        self.config.default_allocation
    }

    /// Seed missing stores again; a no-op when both exist
    pub fn ensure_initialized(&self) -> Result<()> {
        self.connection.ensure_initialized()
    }

    pub fn tasks(&self) -> Result<Vec<Task>> {
        self.task_catalog_service.list_tasks()
    }

    /// Save the edited catalog grid (full replace)
    pub fn save_catalog(&self, request: SaveCatalogRequest) -> Result<SaveCatalogResponse> {
        let result = self
            .task_catalog_service
            .save_catalog(SaveCatalogCommand { rows: request.rows })?;

        Ok(SaveCatalogResponse {
            tasks: result.tasks,
            success_message: result.success_message,
        })
    }

    /// Record one completion of the selected task, stamped with the local clock
    pub fn record_chore(&self, request: RecordChoreRequest) -> Result<RecordChoreResponse> {
        let result = self.earnings_log_service.record_selected(RecordChoreCommand {
            task_name: request.task_name,
            now: None,
        })?;

        Ok(RecordChoreResponse {
            entry: LogEntryMapper::to_dto(&result.entry),
            success_message: result.success_message,
        })
    }

    /// Full log, newest first
    pub fn history(&self) -> Result<Vec<LogEntry>> {
        Ok(self
            .earnings_log_service
            .history()?
            .iter()
            .map(LogEntryMapper::to_dto)
            .collect())
    }

    /// Everything the view needs, reloaded from storage
    pub fn dashboard(&self, setting: AllocationSetting) -> Result<DashboardSnapshot> {
        self.dashboard_service.snapshot(setting)
    }
}
