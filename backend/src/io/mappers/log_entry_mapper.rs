use crate::domain::models::log_entry::LogEntry as DomainLogEntry;
use shared::LogEntry as SharedLogEntry;

pub struct LogEntryMapper;

impl LogEntryMapper {
    pub fn to_dto(domain: &DomainLogEntry) -> SharedLogEntry {
        SharedLogEntry {
            date: domain.formatted_timestamp(),
            task: domain.task_name.clone(),
            reward: domain.reward,
        }
    }
}
