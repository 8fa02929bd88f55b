//! Schedule generation and workload statistics.
//!
//! # Algorithm
//!
//! [`CastScheduler`] runs a randomized constructive search with whole-attempt
//! retry: each attempt fills every show with a pluggable
//! [`AssignmentStrategy`] (by default [`RandomizedGreedy`]) under the
//! [`ConstraintChecker`], and is kept only if validation finds nothing
//! critical. A relaxed partial fill covers the case where every attempt
//! fails. RED days are assigned last.
//!
//! # Statistics
//!
//! [`WorkloadStats`] computes show counts, full days off and RED dates per
//! performer from the finished rows.
//!
//! # References
//!
//! - Burke et al. (2004), "The State of the Art of Nurse Rostering"
//! - Ernst et al. (2004), "Staff scheduling and rostering: A review of
//!   applications, methods and models"

mod constraints;
mod engine;
mod index;
mod off_selection;
mod partial;
mod red_day;
mod stats;
mod strategy;
mod working;

pub use constraints::{double_dates, has_back_to_back, longest_run, ConstraintChecker, Rejection};
pub use engine::CastScheduler;
pub use index::{are_shows_consecutive, is_weekday, weekend_key, ShowIndex};
pub use off_selection::{choose_off, rank_off_candidates};
pub use partial::fill_partial;
pub use red_day::{assign_red_days, day_off_rows, forced_date_score, RedDayPlan};
pub use stats::WorkloadStats;
pub use strategy::{pick_balanced, AssignmentStrategy, GenerationContext, RandomizedGreedy};
pub use working::{ShowAssignment, WorkingSchedule};
