//! Task catalog domain logic.
//!
//! The catalog is edited as a whole grid and saved with full-replace
//! semantics: a row missing from the saved grid is gone from the catalog, but
//! log entries that mention it are left alone.

use log::{info, warn};
use shared::{Task, TaskRowInput};
use std::sync::Arc;

use crate::domain::commands::catalog::{SaveCatalogCommand, SaveCatalogResult};
use crate::domain::models::task::coerce_reward;
use crate::error::{AllowanceError, Result};
use crate::storage::{Connection, TaskStorage};

#[derive(Clone)]
pub struct TaskCatalogService<C: Connection> {
    task_repository: C::TaskRepository,
}

impl<C: Connection> TaskCatalogService<C> {
    pub fn new(connection: Arc<C>) -> Self {
        Self {
            task_repository: connection.create_task_repository(),
        }
    }

    /// Current catalog, freshly loaded from storage
    pub fn list_tasks(&self) -> Result<Vec<Task>> {
        self.task_repository.load_tasks()
    }

    /// Coerce every edited row into a task.
    ///
    /// The only check is that each reward becomes a non-negative integer; the
    /// first row that fails rejects the whole edit.
    pub fn edit(&self, rows: &[TaskRowInput]) -> Result<Vec<Task>> {
        rows.iter()
            .map(|row| {
                let reward = coerce_reward(&row.reward).map_err(|reason| {
                    warn!("Rejected reward '{}' for task '{}': {}", row.reward, row.name, reason);
                    AllowanceError::validation(
                        "reward",
                        &row.reward,
                        format!("{} (task '{}')", reason, row.name),
                    )
                })?;
                Ok(Task {
                    name: row.name.clone(),
                    reward,
                })
            })
            .collect()
    }

    /// Persist `tasks` as the whole catalog
    pub fn save(&self, tasks: &[Task]) -> Result<()> {
        self.task_repository.save_tasks(tasks)
    }

    /// Validate the edited grid and save it. Nothing is written when any row is invalid.
    pub fn save_catalog(&self, command: SaveCatalogCommand) -> Result<SaveCatalogResult> {
        let tasks = self.edit(&command.rows)?;
        self.save(&tasks)?;

        info!("Catalog saved with {} tasks", tasks.len());
        Ok(SaveCatalogResult {
            success_message: format!("Saved {} tasks", tasks.len()),
            tasks,
        })
    }
}

/// Reward for `name` in `tasks`. With duplicate names the first row wins.
pub fn select_task(name: &str, tasks: &[Task]) -> Result<u32> {
    tasks
        .iter()
        .find(|task| task.name == name)
        .map(|task| task.reward)
        .ok_or_else(|| AllowanceError::not_found(name))
}

/// Options for the selection control, in catalog order
pub fn task_names(tasks: &[Task]) -> Vec<String> {
    tasks.iter().map(|task| task.name.clone()).collect()
}
