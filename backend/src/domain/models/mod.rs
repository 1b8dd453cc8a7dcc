pub mod log_entry;
pub mod task;
