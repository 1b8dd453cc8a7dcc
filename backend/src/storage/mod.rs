//! # Storage Module
//!
//! Persistence for the task catalog and the earnings log.
//!
//! The domain layer only sees the traits in [`traits`]; the CSV implementation
//! in [`csv`] keeps both tables as flat files that open cleanly in a
//! spreadsheet. Every mutation reloads the whole table, changes it in memory
//! and rewrites the whole file.

pub mod csv;
pub mod traits;

pub use traits::{Connection, EarningsLogStorage, TaskStorage};
