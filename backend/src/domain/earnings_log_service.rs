//! Earnings log domain logic.
//!
//! Each record action creates exactly one entry and writes it straight to
//! storage, newest first. Repeating an action repeats the entry: doing the same
//! chore twice earns twice.

use chrono::{Local, NaiveDateTime};
use log::{error, info};
use std::sync::Arc;

use crate::domain::commands::earnings::{RecordChoreCommand, RecordChoreResult};
use crate::domain::models::log_entry::LogEntry;
use crate::domain::task_catalog_service::select_task;
use crate::error::Result;
use crate::storage::{Connection, EarningsLogStorage, TaskStorage};

#[derive(Clone)]
pub struct EarningsLogService<C: Connection> {
    earnings_log_repository: C::EarningsLogRepository,
    task_repository: C::TaskRepository,
}

impl<C: Connection> EarningsLogService<C> {
    pub fn new(connection: Arc<C>) -> Self {
        Self {
            earnings_log_repository: connection.create_earnings_log_repository(),
            task_repository: connection.create_task_repository(),
        }
    }

    /// Append a completion of `task_name` stamped `now`
    pub fn record(&self, task_name: &str, reward: u32, now: NaiveDateTime) -> Result<LogEntry> {
        let entry = LogEntry::new(task_name, reward, now);

        if let Err(e) = self.earnings_log_repository.append_log(&entry) {
            error!("Failed to record '{}': {}", task_name, e);
            return Err(e);
        }

        Ok(entry)
    }

    /// Record the task currently selected in the UI.
    ///
    /// The reward is looked up in a freshly loaded catalog; a task that has
    /// disappeared from it fails with `NotFound` and nothing is written.
    pub fn record_selected(&self, command: RecordChoreCommand) -> Result<RecordChoreResult> {
        let tasks = self.task_repository.load_tasks()?;
        let reward = select_task(&command.task_name, &tasks)?;
        let now = command.now.unwrap_or_else(|| Local::now().naive_local());

        let entry = self.record(&command.task_name, reward, now)?;
        info!("Recorded chore '{}' for {}", entry.task_name, entry.reward);

        Ok(RecordChoreResult {
            success_message: format!("Recorded {} (+{})", entry.task_name, entry.reward),
            entry,
        })
    }

    /// Full log, newest first, as stored
    pub fn history(&self) -> Result<Vec<LogEntry>> {
        self.earnings_log_repository.load_log()
    }

    /// Sum of every reward in the log
    pub fn total_reward(&self) -> Result<u64> {
        Ok(total_reward(&self.history()?))
    }
}

/// Sum of the rewards in `entries`
pub fn total_reward(entries: &[LogEntry]) -> u64 {
    entries.iter().map(|entry| u64::from(entry.reward)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::log_entry::TIMESTAMP_FORMAT;
    use crate::error::ErrorKind;
    use crate::storage::csv::test_utils::TestEnvironment;
    use crate::storage::csv::CsvConnection;
    use std::fs;

    fn at(value: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT).unwrap()
    }

    fn service(env: &TestEnvironment) -> EarningsLogService<CsvConnection> {
        EarningsLogService::new(env.shared_connection())
    }

    #[test]
    fn test_history_is_newest_first() {
        let env = TestEnvironment::initialized().unwrap();
        let service = service(&env);

        service.record("A", 10, at("2024-01-01 08:00:00")).unwrap();
        service.record("B", 20, at("2024-01-01 09:00:00")).unwrap();

        let history = service.history().unwrap();
        let names: Vec<&str> = history.iter().map(|e| e.task_name.as_str()).collect();
        assert_eq!(names, vec!["B", "A"]);
    }

    #[test]
    fn test_repeated_records_are_kept() {
        let env = TestEnvironment::initialized().unwrap();
        let service = service(&env);
        let now = at("2024-01-01 08:00:00");

        service.record("洗い物", 30, now).unwrap();
        service.record("洗い物", 30, now).unwrap();

        assert_eq!(service.history().unwrap().len(), 2);
        assert_eq!(service.total_reward().unwrap(), 60);
    }

    #[test]
    fn test_record_selected_uses_catalog_reward() {
        let env = TestEnvironment::initialized().unwrap();
        let result = service(&env)
            .record_selected(RecordChoreCommand {
                task_name: "風呂掃除".to_string(),
                now: Some(at("2024-02-10 20:15:00")),
            })
            .unwrap();

        assert_eq!(result.entry.reward, 50);
        assert_eq!(result.entry.formatted_timestamp(), "2024-02-10 20:15:00");
    }

    #[test]
    fn test_record_selected_unknown_task_writes_nothing() {
        let env = TestEnvironment::initialized().unwrap();
        let service = service(&env);
        let before = fs::read(env.connection.log_file_path()).unwrap();

        let err = service
            .record_selected(RecordChoreCommand {
                task_name: "窓拭き".to_string(),
                now: None,
            })
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(fs::read(env.connection.log_file_path()).unwrap(), before);
    }

    #[test]
    fn test_record_without_clock_uses_local_time() {
        let env = TestEnvironment::initialized().unwrap();
        let result = service(&env)
            .record_selected(RecordChoreCommand {
                task_name: "洗い物".to_string(),
                now: None,
            })
            .unwrap();

        let stamp = result.entry.formatted_timestamp();
        assert_eq!(stamp.len(), "YYYY-MM-DD HH:MM:SS".len());
    }

    #[test]
    fn test_total_reward_of_empty_log() {
        assert_eq!(total_reward(&[]), 0);
    }
}
