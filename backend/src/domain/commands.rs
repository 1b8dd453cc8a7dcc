//! Domain-level command and result types.
//! These are used inside the domain layer; the `shared` crate carries the
//! public DTOs and `io::mappers` converts between the two.

pub mod catalog {
    use shared::{Task, TaskRowInput};

    /// Save the edited catalog grid
    #[derive(Debug, Clone)]
    pub struct SaveCatalogCommand {
        pub rows: Vec<TaskRowInput>,
    }

    #[derive(Debug, Clone)]
    pub struct SaveCatalogResult {
        pub tasks: Vec<Task>,
        pub success_message: String,
    }
}

pub mod earnings {
    use crate::domain::models::log_entry::LogEntry;
    use chrono::NaiveDateTime;

    /// Record one completion of the selected task
    #[derive(Debug, Clone)]
    pub struct RecordChoreCommand {
        pub task_name: String,
        /// Uses the local clock when not provided
        pub now: Option<NaiveDateTime>,
    }

    #[derive(Debug, Clone)]
    pub struct RecordChoreResult {
        pub entry: LogEntry,
        pub success_message: String,
    }
}
