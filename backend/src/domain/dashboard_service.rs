//! Dashboard snapshot: the re-fetch half of the re-fetch-and-redraw contract.
//!
//! After every interaction the presentation layer asks for a fresh snapshot.
//! Both stores are reloaded from disk each time, so edits made to the files
//! outside the app show up on the next redraw.

use log::debug;
use shared::{AllocationSetting, DashboardSnapshot};
use std::sync::Arc;

use crate::domain::allocation_service::{validate_setting, AllocationService};
use crate::domain::earnings_log_service::{total_reward, EarningsLogService};
use crate::domain::history_table::HistoryTableService;
use crate::domain::monthly_rollup_service::MonthlyRollupService;
use crate::domain::task_catalog_service::{task_names, TaskCatalogService};
use crate::error::Result;
use crate::storage::Connection;

#[derive(Clone)]
pub struct DashboardService<C: Connection> {
    task_catalog_service: TaskCatalogService<C>,
    earnings_log_service: EarningsLogService<C>,
    allocation_service: AllocationService,
    monthly_rollup_service: MonthlyRollupService,
    history_table_service: HistoryTableService,
}

impl<C: Connection> DashboardService<C> {
    pub fn new(connection: Arc<C>, history_table_service: HistoryTableService) -> Self {
        Self {
            task_catalog_service: TaskCatalogService::new(connection.clone()),
            earnings_log_service: EarningsLogService::new(connection),
            allocation_service: AllocationService::new(),
            monthly_rollup_service: MonthlyRollupService::new(),
            history_table_service,
        }
    }

    /// Reload both stores and derive everything the view shows.
    /// Percentages outside [0, 100] are rejected before anything is read.
    pub fn snapshot(&self, setting: AllocationSetting) -> Result<DashboardSnapshot> {
        validate_setting(&setting)?;
        let tasks = self.task_catalog_service.list_tasks()?;
        let history = self.earnings_log_service.history()?;

        let total = total_reward(&history);
        let summary = self.allocation_service.summarize(total, setting);
        let slices = self
            .history_table_service
            .allocation_slices(&summary.allocation, &self.allocation_service);
        let monthly_totals = self.monthly_rollup_service.rollup(&history);

        debug!(
            "Snapshot: {} tasks, {} log entries, total {}",
            tasks.len(),
            history.len(),
            total
        );

        Ok(DashboardSnapshot {
            task_names: task_names(&tasks),
            tasks,
            total_reward: total,
            allocation_setting: summary.setting,
            allocation: summary.allocation,
            slices,
            percentage_total: summary.percentage_total,
            percentage_warning: summary.warning,
            has_history: !monthly_totals.is_empty(),
            monthly_totals,
            history: self.history_table_service.format_entries(&history),
        })
    }
}
