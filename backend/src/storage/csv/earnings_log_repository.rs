use log::{debug, info};

use super::connection::{CsvConnection, LOG_HEADER};
use crate::domain::models::log_entry::LogEntry;
use crate::domain::models::task::coerce_reward;
use crate::error::{AllowanceError, Result};
use crate::storage::traits::EarningsLogStorage;

/// CSV-based earnings log repository
#[derive(Debug, Clone)]
pub struct EarningsLogRepository {
    connection: CsvConnection,
}

impl EarningsLogRepository {
    pub fn new(connection: CsvConnection) -> Self {
        Self { connection }
    }

    fn write_log(&self, entries: &[LogEntry]) -> Result<()> {
        let rows = entries.iter().map(|entry| {
            vec![
                entry.formatted_timestamp(),
                entry.task_name.clone(),
                entry.reward.to_string(),
            ]
        });
        self.connection
            .write_table(self.connection.log_file_path(), &LOG_HEADER, rows)
    }
}

impl EarningsLogStorage for EarningsLogRepository {
    fn load_log(&self) -> Result<Vec<LogEntry>> {
        let table = self.connection.read_table(self.connection.log_file_path())?;
        if !table.has_header() {
            debug!("Earnings log has no header row, treating it as empty");
            return Ok(Vec::new());
        }
        let date_column = table.column("date")?;
        let task_column = table.column("task")?;
        let reward_column = table.column("reward")?;

        let malformed = |line: u64, reason: String| AllowanceError::MalformedRecord {
            path: table.path().to_path_buf(),
            line,
            reason,
        };

        let mut entries = Vec::with_capacity(table.rows.len());
        for (line, record) in &table.rows {
            let raw_date = record.get(date_column).unwrap_or("");
            let timestamp = LogEntry::parse_timestamp(raw_date)
                .ok_or_else(|| malformed(*line, format!("unrecognised date '{}'", raw_date)))?;
            let reward = coerce_reward(record.get(reward_column).unwrap_or(""))
                .map_err(|reason| malformed(*line, reason))?;

            entries.push(LogEntry {
                timestamp,
                task_name: record.get(task_column).unwrap_or("").to_string(),
                reward,
            });
        }

        debug!("Loaded {} log entries", entries.len());
        Ok(entries)
    }

    fn append_log(&self, entry: &LogEntry) -> Result<()> {
        let mut entries = self.load_log()?;
        entries.insert(0, entry.clone());
        self.write_log(&entries)?;

        info!(
            "Recorded '{}' ({}) at {}",
            entry.task_name,
            entry.reward,
            entry.formatted_timestamp()
        );
        Ok(())
    }
}
