//! Display formatting for the history table and the proportion chart.
//!
//! The domain keeps rewards as integers and allocations as unrounded floats;
//! this module turns them into the strings the presentation layer shows.

use serde::{Deserialize, Serialize};
use shared::{Allocation, AllocationCategory, AllocationSlice, FormattedLogEntry};

use crate::domain::allocation_service::AllocationService;
use crate::domain::models::log_entry::LogEntry;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HistoryTableConfig {
    pub currency_symbol: String,
    /// Decimal places for chart proportions
    pub proportion_decimals: usize,
}

impl Default for HistoryTableConfig {
    fn default() -> Self {
        Self {
            currency_symbol: "¥".to_string(),
            proportion_decimals: 1,
        }
    }
}

#[derive(Debug, Clone)]
pub struct HistoryTableService {
    config: HistoryTableConfig,
}

impl HistoryTableService {
    pub fn new() -> Self {
        Self {
            config: HistoryTableConfig::default(),
        }
    }

    pub fn with_config(config: HistoryTableConfig) -> Self {
        Self { config }
    }

    /// Format entries for the read-only table, keeping their order
    pub fn format_entries(&self, entries: &[LogEntry]) -> Vec<FormattedLogEntry> {
        entries.iter().map(|entry| self.format_entry(entry)).collect()
    }

    pub fn format_entry(&self, entry: &LogEntry) -> FormattedLogEntry {
        FormattedLogEntry {
            date: entry.formatted_timestamp(),
            task: entry.task_name.clone(),
            formatted_reward: self.format_reward(entry.reward),
            raw_reward: entry.reward,
        }
    }

    pub fn format_reward(&self, reward: u32) -> String {
        format!("{}{}", self.config.currency_symbol, reward)
    }

    /// Allocated amount rounded to whole currency units
    pub fn format_amount(&self, amount: f64) -> String {
        format!("{}{:.0}", self.config.currency_symbol, amount.round())
    }

    pub fn format_proportion(&self, proportion: f64) -> String {
        format!("{:.*}%", self.config.proportion_decimals, proportion)
    }

    /// One chart slice per category, in spend/save/invest order.
    /// Placeholder allocations carry no amount text.
    pub fn allocation_slices(
        &self,
        allocation: &Allocation,
        allocation_service: &AllocationService,
    ) -> Vec<AllocationSlice> {
        let proportions = allocation_service.proportions(allocation);

        AllocationCategory::ALL
            .iter()
            .zip(proportions)
            .map(|(category, proportion)| {
                let amount = allocation_service.amount_for(allocation, *category);
                AllocationSlice {
                    category: *category,
                    label: category.label().to_string(),
                    amount,
                    formatted_amount: if allocation.is_placeholder {
                        String::new()
                    } else {
                        self.format_amount(amount)
                    },
                    proportion,
                    formatted_proportion: self.format_proportion(proportion),
                }
            })
            .collect()
    }
}

impl Default for HistoryTableService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn entry(task_name: &str, reward: u32) -> LogEntry {
        let now =
            NaiveDateTime::parse_from_str("2024-04-01 16:20:00", "%Y-%m-%d %H:%M:%S").unwrap();
        LogEntry::new(task_name, reward, now)
    }

    #[test]
    fn test_format_entry() {
        let formatted = HistoryTableService::new().format_entry(&entry("洗い物", 30));

        assert_eq!(formatted.date, "2024-04-01 16:20:00");
        assert_eq!(formatted.task, "洗い物");
        assert_eq!(formatted.formatted_reward, "¥30");
        assert_eq!(formatted.raw_reward, 30);
    }

    #[test]
    fn test_format_entries_keeps_order() {
        let formatted =
            HistoryTableService::new().format_entries(&[entry("B", 20), entry("A", 10)]);
        let tasks: Vec<&str> = formatted.iter().map(|f| f.task.as_str()).collect();
        assert_eq!(tasks, vec!["B", "A"]);
    }

    #[test]
    fn test_custom_currency_symbol() {
        let service = HistoryTableService::with_config(HistoryTableConfig {
            currency_symbol: "$".to_string(),
            proportion_decimals: 2,
        });
        assert_eq!(service.format_reward(5), "$5");
        assert_eq!(service.format_proportion(33.3333), "33.33%");
    }

    #[test]
    fn test_amounts_round_for_display() {
        let service = HistoryTableService::new();
        assert_eq!(service.format_amount(16.5), "¥17");
        assert_eq!(service.format_amount(16.49), "¥16");
        assert_eq!(service.format_proportion(100.0 / 3.0), "33.3%");
    }

    #[test]
    fn test_allocation_slices() {
        let allocation_service = AllocationService::new();
        let service = HistoryTableService::new();

        let allocation = allocation_service.allocate(80, 20, 70, 10);
        let slices = service.allocation_slices(&allocation, &allocation_service);
        assert_eq!(slices.len(), 3);
        assert_eq!(slices[0].label, "使う");
        assert_eq!(slices[0].formatted_amount, "¥16");
        assert_eq!(slices[1].formatted_amount, "¥56");
        assert_eq!(slices[2].category, AllocationCategory::Invest);
        assert_eq!(slices[1].formatted_proportion, "70.0%");

        let empty = allocation_service.allocate(0, 20, 70, 10);
        let placeholder = service.allocation_slices(&empty, &allocation_service);
        assert!(placeholder.iter().all(|slice| slice.formatted_amount.is_empty()));
    }
}
