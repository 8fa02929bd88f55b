//! Scheduler configuration.
//!
//! Contractual limits and search budget. Deserializable so callers can keep
//! company rules in a JSON/TOML file; every field has a default.

use serde::{Deserialize, Serialize};

/// Limits and budgets used by generation and validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    /// Full constructive attempts before falling back to a partial schedule.
    pub max_attempts: usize,

    /// Longest allowed run of consecutive shows for one performer.
    pub max_consecutive_shows: usize,

    /// Shows at most this many days apart are consecutive.
    pub consecutive_gap_days: i64,

    /// Most shows a performer may do in one Friday–Sunday span.
    pub max_weekend_shows: usize,

    /// Most shows a performer may do in the week.
    pub max_weekly_shows: usize,

    /// Fewer shows than this is flagged underutilized.
    pub underutilized_min_shows: usize,

    /// Underutilization is only flagged when the week has at least this many shows.
    pub underutilized_week_threshold: usize,

    /// Overworked means above `ceil(factor * average)`, flagged only when the
    /// week has more than `underutilized_week_threshold` shows.
    pub overworked_factor: f64,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            max_attempts: 100,
            max_consecutive_shows: 6,
            consecutive_gap_days: 2,
            max_weekend_shows: 4,
            max_weekly_shows: 6,
            underutilized_min_shows: 2,
            underutilized_week_threshold: 4,
            overworked_factor: 1.5,
        }
    }
}

impl SchedulerConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the retry budget.
    pub fn with_max_attempts(mut self, attempts: usize) -> Self {
        self.max_attempts = attempts;
        self
    }

    /// Sets the consecutive-show limit.
    pub fn with_max_consecutive_shows(mut self, shows: usize) -> Self {
        self.max_consecutive_shows = shows;
        self
    }

    /// Sets the weekend limit.
    pub fn with_max_weekend_shows(mut self, shows: usize) -> Self {
        self.max_weekend_shows = shows;
        self
    }

    /// Sets the weekly limit.
    pub fn with_max_weekly_shows(mut self, shows: usize) -> Self {
        self.max_weekly_shows = shows;
        self
    }
}
