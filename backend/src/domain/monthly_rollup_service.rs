//! Monthly earnings rollup.
//!
//! Unlike the log itself, which is newest first by insertion, the rollup is
//! ordered chronologically by calendar month. Months without entries are
//! left out.

use log::debug;
use shared::MonthlyTotal;
use std::collections::BTreeMap;

use crate::domain::models::log_entry::LogEntry;

#[derive(Debug, Clone, Default)]
pub struct MonthlyRollupService;

impl MonthlyRollupService {
    pub fn new() -> Self {
        Self
    }

    /// Sum rewards per calendar month, oldest month first
    pub fn rollup(&self, entries: &[LogEntry]) -> Vec<MonthlyTotal> {
        // Zero-padded YYYY-MM keys sort chronologically
        let mut totals: BTreeMap<String, u64> = BTreeMap::new();

        for entry in entries {
            *totals.entry(entry.month_key()).or_insert(0) += u64::from(entry.reward);
        }

        debug!("Rolled up {} entries into {} months", entries.len(), totals.len());

        totals
            .into_iter()
            .map(|(month, total)| MonthlyTotal { month, total })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::log_entry::TIMESTAMP_FORMAT;
    use chrono::NaiveDateTime;

    fn entry(at: &str, reward: u32) -> LogEntry {
        let now = NaiveDateTime::parse_from_str(at, TIMESTAMP_FORMAT).unwrap();
        LogEntry::new("chore", reward, now)
    }

    fn monthly(month: &str, total: u64) -> MonthlyTotal {
        MonthlyTotal {
            month: month.to_string(),
            total,
        }
    }

    #[test]
    fn test_groups_by_month_in_chronological_order() {
        // Newest first, as the log stores them
        let entries = vec![
            entry("2024-02-01 09:00:00", 10),
            entry("2024-01-20 18:00:00", 30),
            entry("2024-01-05 07:30:00", 50),
        ];

        let totals = MonthlyRollupService::new().rollup(&entries);
        assert_eq!(totals, vec![monthly("2024-01", 80), monthly("2024-02", 10)]);
    }

    #[test]
    fn test_empty_log_rolls_up_to_nothing() {
        assert!(MonthlyRollupService::new().rollup(&[]).is_empty());
    }

    #[test]
    fn test_sparse_months_and_year_boundary() {
        let entries = vec![
            entry("2024-03-15 12:00:00", 20),
            entry("2023-12-31 23:59:59", 50),
            entry("2024-01-01 00:00:00", 30),
        ];

        let months: Vec<String> = MonthlyRollupService::new()
            .rollup(&entries)
            .into_iter()
            .map(|m| m.month)
            .collect();
        assert_eq!(months, vec!["2023-12", "2024-01", "2024-03"]);
    }

    #[test]
    fn test_zero_rewards_still_produce_a_month() {
        let totals = MonthlyRollupService::new().rollup(&[entry("2024-06-01 10:00:00", 0)]);
        assert_eq!(totals, vec![monthly("2024-06", 0)]);
    }
}
