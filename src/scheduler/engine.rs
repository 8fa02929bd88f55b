//! Weekly schedule generation.
//!
//! # Algorithm
//!
//! 1. Resolve the roster (argument, else the company directory) and check
//!    the inputs.
//! 2. Up to `max_attempts` times: build a fresh [`ShowIndex`] and
//!    [`WorkingSchedule`], run the [`AssignmentStrategy`], and validate the
//!    result. The first attempt without critical findings is accepted.
//! 3. If none is accepted, fill what can be filled with the partial
//!    fallback and report the gaps.
//! 4. Assign RED days, flatten to rows, validate once more and collect
//!    statistics.
//!
//! Attempts share nothing but the RNG, so a failed attempt leaves no state
//! behind.
//!
//! # Complexity
//! O(a * s * r * p) where a=attempts, s=shows, r=roles, p=performers.

use chrono::Utc;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeMap;

use super::partial::fill_partial;
use super::red_day::{assign_red_days, day_off_rows};
use super::strategy::{AssignmentStrategy, GenerationContext, RandomizedGreedy};
use super::{ShowIndex, WorkingSchedule, WorkloadStats};
use crate::config::SchedulerConfig;
use crate::error::ScheduleError;
use crate::models::{Assignment, AutoGenerateResult, CastMember, RoleCatalog, Show};
use crate::roster::CastDirectory;
use crate::validation::{validate_input, ConstraintResult, IssueKind, ScheduleValidator};

/// Generates weekly cast schedules.
///
/// # Example
///
/// ```
/// use cast_rota::models::{CastMember, Gender, Role, Show};
/// use cast_rota::scheduler::CastScheduler;
/// use chrono::{NaiveDate, NaiveTime};
///
/// let tue = NaiveDate::from_ymd_opt(2024, 5, 7).unwrap();
/// let wed = NaiveDate::from_ymd_opt(2024, 5, 8).unwrap();
/// let shows = vec![
///     Show::new("tue-eve", tue, NaiveTime::from_hms_opt(19, 30, 0).unwrap()),
///     Show::day_off("wed-dark", wed),
/// ];
/// let cast: Vec<CastMember> = Role::ALL
///     .iter()
///     .map(|&role| {
///         CastMember::new(format!("{role} lead"))
///             .with_role(role)
///             .with_gender(Gender::Female)
///     })
///     .collect();
///
/// let mut scheduler = CastScheduler::with_seed(7);
/// let result = scheduler.auto_generate(&shows, Some(cast));
/// assert!(result.success);
/// assert!(result.errors.is_empty());
/// assert_eq!(result.assignments_for_show("wed-dark").len(), 8);
/// ```
#[derive(Debug)]
pub struct CastScheduler<R: Rng = StdRng> {
    catalog: RoleCatalog,
    config: SchedulerConfig,
    strategy: Box<dyn AssignmentStrategy>,
    directory: Option<Box<dyn CastDirectory>>,
    rng: R,
}

impl CastScheduler<StdRng> {
    /// Creates a scheduler seeded from the operating system.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Creates a scheduler with a fixed seed. Same seed, same inputs, same
    /// schedule.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for CastScheduler<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> CastScheduler<R> {
    /// Creates a scheduler drawing from `rng`, with the standard catalog and
    /// default limits.
    pub fn with_rng(rng: R) -> Self {
        Self {
            catalog: RoleCatalog::standard(),
            config: SchedulerConfig::default(),
            strategy: Box::new(RandomizedGreedy),
            directory: None,
            rng,
        }
    }

    /// Sets the roles to fill.
    pub fn with_catalog(mut self, catalog: RoleCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Sets limits and the retry budget.
    pub fn with_config(mut self, config: SchedulerConfig) -> Self {
        self.config = config;
        self
    }

    /// Replaces the constructive strategy.
    pub fn with_strategy(mut self, strategy: impl AssignmentStrategy + 'static) -> Self {
        self.strategy = Box::new(strategy);
        self
    }

    /// Sets the directory consulted when no roster is passed.
    pub fn with_directory(mut self, directory: impl CastDirectory + 'static) -> Self {
        self.directory = Some(Box::new(directory));
        self
    }

    /// Roles filled in every show.
    pub fn catalog(&self) -> &RoleCatalog {
        &self.catalog
    }

    /// Limits and retry budget in use.
    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// Generates a schedule for one week of shows.
    ///
    /// Never fails outright: problems come back as `success: false` with
    /// messages, or as `errors` next to a best-effort schedule.
    pub fn auto_generate(
        &mut self,
        shows: &[Show],
        cast: Option<Vec<CastMember>>,
    ) -> AutoGenerateResult {
        match self.try_generate(shows, cast) {
            Ok(result) => result,
            Err(ScheduleError::InvalidInput(errors)) => {
                tracing::warn!(count = errors.len(), "rejected invalid input");
                AutoGenerateResult::failure(errors.into_iter().map(|e| e.message).collect())
            }
            Err(e) => {
                tracing::warn!(error = %e, "generation failed");
                AutoGenerateResult::failure(vec![e.to_string()])
            }
        }
    }

    /// Validates assignment rows with this scheduler's catalog and limits.
    pub fn validate(
        &self,
        shows: &[Show],
        cast: &[CastMember],
        assignments: &[Assignment],
    ) -> ConstraintResult {
        let index = ShowIndex::build(shows, self.config.consecutive_gap_days);
        ScheduleValidator::new(&index, cast, &self.catalog, &self.config).validate(assignments)
    }

    fn resolve_cast(
        &self,
        cast: Option<Vec<CastMember>>,
    ) -> Result<Vec<CastMember>, ScheduleError> {
        match cast {
            Some(cast) => Ok(cast),
            None => {
                let directory = self.directory.as_ref().ok_or(ScheduleError::NoRoster)?;
                Ok(directory.active_cast()?)
            }
        }
    }

    fn try_generate(
        &mut self,
        shows: &[Show],
        cast: Option<Vec<CastMember>>,
    ) -> Result<AutoGenerateResult, ScheduleError> {
        let cast = self.resolve_cast(cast)?;
        validate_input(shows, &cast, &self.catalog).map_err(ScheduleError::InvalidInput)?;

        let Self {
            catalog,
            config,
            strategy,
            rng,
            ..
        } = self;
        let catalog: &RoleCatalog = catalog;
        let config: &SchedulerConfig = config;

        let mut accepted = None;
        for attempt in 1..=config.max_attempts {
            let index = ShowIndex::build(shows, config.consecutive_gap_days);
            let ctx = GenerationContext::new(&index, &cast, catalog, config);
            let mut schedule = WorkingSchedule::new(index.len());

            if !strategy.attempt(&ctx, &mut schedule, &mut *rng) {
                tracing::debug!(attempt, "attempt left a role unfilled");
                continue;
            }
            let rows = schedule.to_assignments(&index, &cast, catalog, &BTreeMap::new());
            let check = ScheduleValidator::new(&index, &cast, catalog, config).validate(&rows);
            if check.has_critical_errors() {
                tracing::debug!(attempt, critical = check.critical_count(), "attempt rejected");
                continue;
            }

            tracing::info!(attempt, strategy = strategy.name(), "schedule accepted");
            accepted = Some((index, schedule));
            break;
        }

        let partial = accepted.is_none();
        let (index, mut schedule, mut errors) = match accepted {
            Some((index, schedule)) => (index, schedule, Vec::new()),
            None => {
                tracing::info!(
                    attempts = config.max_attempts,
                    "no attempt succeeded; building partial schedule"
                );
                let index = ShowIndex::build(shows, config.consecutive_gap_days);
                let ctx = GenerationContext::new(&index, &cast, catalog, config);
                let mut schedule = WorkingSchedule::new(index.len());
                let gaps = fill_partial(&ctx, &mut schedule, &mut *rng);
                (index, schedule, gaps)
            }
        };

        let ctx = GenerationContext::new(&index, &cast, catalog, config);
        let plan = assign_red_days(&ctx, &mut schedule);
        if !plan.forced.is_empty() {
            tracing::info!(forced = ?plan.forced, "RED days forced onto working dates");
        }
        let mut assignments = schedule.to_assignments(&index, &cast, catalog, &plan.dates);
        assignments.extend(day_off_rows(&ctx));

        let check = ScheduleValidator::new(&index, &cast, catalog, config).validate(&assignments);
        errors.extend(
            check
                .errors
                .iter()
                // Unfilled slots were already reported by the fallback.
                .filter(|e| {
                    !(partial && matches!(e.kind, IssueKind::Headcount | IssueKind::MissingRole))
                })
                .map(ToString::to_string),
        );
        let mut warnings = plan.warnings;
        warnings.extend(check.warning_messages());

        let success = !partial || index.is_empty() || schedule.filled_slots() > 0;
        let stats = WorkloadStats::calculate(&assignments, &index, &cast);
        tracing::info!(
            success,
            partial,
            errors = errors.len(),
            spread = stats.spread(),
            "generation finished"
        );
        let generation_id = uuid::Builder::from_random_bytes(rng.random()).into_uuid();

        Ok(AutoGenerateResult {
            success,
            assignments,
            errors,
            warnings,
            day_off_stats: stats.day_off_stats(),
            generation_id: Some(generation_id),
            generated_at: Some(Utc::now()),
        })
    }
}
