//! Company directory boundary.
//!
//! When a caller does not pass a roster, the scheduler asks a
//! [`CastDirectory`] for the currently active cast, once, before any
//! generation work starts.

use std::fmt::Debug;

use crate::error::DirectoryError;
use crate::models::CastMember;

/// Source of the active cast roster.
pub trait CastDirectory: Debug {
    /// Returns the active cast.
    fn active_cast(&self) -> Result<Vec<CastMember>, DirectoryError>;
}

/// A directory backed by a fixed list.
#[derive(Debug, Clone, Default)]
pub struct StaticDirectory {
    cast: Vec<CastMember>,
}

impl StaticDirectory {
    /// Creates a directory serving the given cast.
    pub fn new(cast: Vec<CastMember>) -> Self {
        Self { cast }
    }
}

impl CastDirectory for StaticDirectory {
    fn active_cast(&self) -> Result<Vec<CastMember>, DirectoryError> {
        if self.cast.is_empty() {
            return Err(DirectoryError::Empty);
        }
        Ok(self.cast.clone())
    }
}
