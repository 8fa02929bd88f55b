//! Input and schedule validation.
//!
//! - [`validate_input`]: structural checks on shows and roster before
//!   generation (duplicate IDs, empty names, roster size).
//! - [`validate_schedule`]: every scheduling rule re-checked over finished
//!   assignment rows, producing errors, warnings and remediation hints.
//!
//! Schedule validation is deterministic and has no hidden state: the same
//! rows always give the same [`ConstraintResult`].

mod input;
mod issue;
mod schedule;
mod suggestions;

pub use input::{validate_input, ValidationError, ValidationErrorKind, ValidationResult};
pub use issue::{ConstraintResult, IssueKind, ScheduleIssue};
pub use schedule::ScheduleValidator;
pub use suggestions::SuggestionContext;

use crate::config::SchedulerConfig;
use crate::models::{Assignment, CastMember, RoleCatalog, Show};
use crate::scheduler::ShowIndex;

/// Validates assignment rows for a week of shows.
///
/// Usable on schedules edited outside the generator.
pub fn validate_schedule(
    shows: &[Show],
    cast: &[CastMember],
    catalog: &RoleCatalog,
    config: &SchedulerConfig,
    assignments: &[Assignment],
) -> ConstraintResult {
    let index = ShowIndex::build(shows, config.consecutive_gap_days);
    ScheduleValidator::new(&index, cast, catalog, config).validate(assignments)
}
