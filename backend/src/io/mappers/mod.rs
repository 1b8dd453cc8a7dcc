pub mod log_entry_mapper;

pub use log_entry_mapper::LogEntryMapper;
