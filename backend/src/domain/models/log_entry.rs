//! Domain model for a recorded chore completion.
use chrono::{NaiveDate, NaiveDateTime, Timelike};

/// Fixed-width timestamp format used in the log store
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    /// Second resolution
    pub timestamp: NaiveDateTime,
    /// Free text; not required to match a catalog task
    pub task_name: String,
    pub reward: u32,
}

impl LogEntry {
    /// Create an entry stamped `now`, truncated to whole seconds
    pub fn new(task_name: &str, reward: u32, now: NaiveDateTime) -> Self {
        Self {
            timestamp: now.with_nanosecond(0).unwrap_or(now),
            task_name: task_name.to_string(),
            reward,
        }
    }

    pub fn formatted_timestamp(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }

    /// Calendar month key in `YYYY-MM` form
    pub fn month_key(&self) -> String {
        self.timestamp.format("%Y-%m").to_string()
    }

    /// Parse a stored timestamp. Hand-edited files may carry a bare date,
    /// which is read as midnight.
    pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
        let value = value.trim();
        NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT)
            .ok()
            .or_else(|| {
                NaiveDate::parse_from_str(value, "%Y-%m-%d")
                    .ok()
                    .and_then(|date| date.and_hms_opt(0, 0, 0))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(value: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT).unwrap()
    }

    #[test]
    fn test_new_truncates_subseconds() {
        let now = at("2024-03-09 07:05:03").with_nanosecond(987_000_000).unwrap();
        let entry = LogEntry::new("洗い物", 30, now);

        assert_eq!(entry.formatted_timestamp(), "2024-03-09 07:05:03");
        assert_eq!(entry.timestamp.nanosecond(), 0);
    }

    #[test]
    fn test_month_key() {
        let entry = LogEntry::new("風呂掃除", 50, at("2023-12-31 23:59:59"));
        assert_eq!(entry.month_key(), "2023-12");
    }

    #[test]
    fn test_parse_timestamp_formats() {
        assert_eq!(
            LogEntry::parse_timestamp("2024-01-05 10:00:00"),
            Some(at("2024-01-05 10:00:00"))
        );
        assert_eq!(LogEntry::parse_timestamp(" 2024-01-05 "), Some(at("2024-01-05 00:00:00")));
        assert_eq!(LogEntry::parse_timestamp("05/01/2024"), None);
        assert_eq!(LogEntry::parse_timestamp(""), None);
    }
}
