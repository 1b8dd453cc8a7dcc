//! # Domain Module
//!
//! Business logic for the chore allowance tracker, independent of any UI
//! framework or storage mechanism.
//!
//! - **task_catalog_service**: editing, saving and selecting catalog tasks
//! - **earnings_log_service**: recording chores and reading the history
//! - **allocation_service**: spend / save / invest split and percentage warning
//! - **monthly_rollup_service**: earnings per calendar month
//! - **history_table**: display formatting for the table and chart
//! - **dashboard_service**: the full view snapshot requested after every interaction

pub mod allocation_service;
pub mod commands;
pub mod dashboard_service;
pub mod earnings_log_service;
pub mod history_table;
pub mod models;
pub mod monthly_rollup_service;
pub mod task_catalog_service;

pub use allocation_service::*;
pub use dashboard_service::*;
pub use earnings_log_service::*;
pub use history_table::*;
pub use monthly_rollup_service::*;
pub use task_catalog_service::*;
