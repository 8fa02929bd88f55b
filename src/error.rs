//! Error types.
//!
//! Generation never returns these to the caller: [`crate::scheduler::CastScheduler::auto_generate`]
//! turns any `ScheduleError` into a failed result carrying its message.

use thiserror::Error;

use crate::validation::ValidationError;

/// Failure reported by a [`crate::roster::CastDirectory`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    #[error("company directory unavailable: {0}")]
    Unavailable(String),
    #[error("company directory returned no active cast")]
    Empty,
}

/// Failures inside one generation run.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScheduleError {
    #[error("no cast roster supplied and no company directory configured")]
    NoRoster,
    #[error("failed to load cast roster: {0}")]
    Directory(#[from] DirectoryError),
    #[error("invalid input: {}", join_messages(.0))]
    InvalidInput(Vec<ValidationError>),
    #[error("show '{0}' is not part of this week's staffed shows")]
    UnknownShow(String),
    #[error("performer '{0}' is not on the roster")]
    UnknownPerformer(String),
    #[error("OFF selection for show '{show_id}' returned {got} names, expected {expected}")]
    OffCountMismatch {
        show_id: String,
        expected: usize,
        got: usize,
    },
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
