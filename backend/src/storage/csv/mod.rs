//! # CSV Storage Module
//!
//! File-based storage for the task catalog and the earnings log.
//!
//! ## File Format
//!
//! Both files are UTF-8 with a byte-order mark, header row first:
//!
//! ```csv
//! task,reward
//! トイレ掃除,50
//! 風呂掃除,50
//! ```
//!
//! ```csv
//! date,task,reward
//! 2024-01-20 18:02:11,洗い物,30
//! 2024-01-05 09:15:40,トイレ掃除,50
//! ```
//!
//! The log is kept newest first, in insertion order.

pub mod connection;
pub mod earnings_log_repository;
pub mod task_repository;

#[cfg(test)]
pub mod test_utils;

pub use connection::CsvConnection;
pub use earnings_log_repository::EarningsLogRepository;
pub use task_repository::TaskRepository;
