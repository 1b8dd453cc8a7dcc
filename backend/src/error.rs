//! Error types for the chore allowance backend.
//!
//! Every failure a user action can hit falls into one of three kinds
//! (see [`ErrorKind`]): the backing store could not be read or written, a
//! user-supplied value could not be coerced, or the selected task is no longer
//! in the catalog. The presentation layer reports the failure and redraws from
//! the last persisted state.

use std::io;
use std::path::PathBuf;

/// Broad classification used by the presentation layer to word the failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Io,
    Validation,
    NotFound,
}

#[derive(Debug, thiserror::Error)]
pub enum AllowanceError {
    #[error("Failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to process CSV file {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Malformed record at line {line} of {}: {reason}", path.display())]
    MalformedRecord {
        path: PathBuf,
        line: u64,
        reason: String,
    },

    #[error("Invalid {field} '{value}': {reason}")]
    Validation {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Task not found: {task_name}")]
    NotFound { task_name: String },

    #[error("Invalid configuration in {}: {reason}", path.display())]
    Config { path: PathBuf, reason: String },
}

impl AllowanceError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        AllowanceError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn csv(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        AllowanceError::Csv {
            path: path.into(),
            source,
        }
    }

    pub fn validation(field: &str, value: &str, reason: impl Into<String>) -> Self {
        AllowanceError::Validation {
            field: field.to_string(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    pub fn not_found(task_name: &str) -> Self {
        AllowanceError::NotFound {
            task_name: task_name.to_string(),
        }
    }

    /// Classify this error into the three user-facing kinds
    pub fn kind(&self) -> ErrorKind {
        match self {
            AllowanceError::Io { .. }
            | AllowanceError::Csv { .. }
            | AllowanceError::MalformedRecord { .. }
            | AllowanceError::Config { .. } => ErrorKind::Io,
            AllowanceError::Validation { .. } => ErrorKind::Validation,
            AllowanceError::NotFound { .. } => ErrorKind::NotFound,
        }
    }
}

pub type Result<T> = std::result::Result<T, AllowanceError>;
