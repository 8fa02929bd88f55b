//! Workload statistics.
//!
//! Computed from finished assignment rows.
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Show count | Shows a performer is on stage for |
//! | Full days off | Staffed dates without a role, plus the company day off |
//! | RED dates | Distinct dates with a RED-flagged row |
//! | Average shows | Total on-stage rows / roster size |

use chrono::NaiveDate;
use std::collections::{BTreeMap, BTreeSet};

use super::ShowIndex;
use crate::models::{Assignment, CastMember};

/// Per-performer workload figures for one week.
#[derive(Debug, Clone, Default)]
pub struct WorkloadStats {
    /// On-stage shows per performer.
    pub show_counts: BTreeMap<String, usize>,
    /// Full days off per performer.
    pub full_days_off: BTreeMap<String, usize>,
    /// RED dates per performer.
    pub red_dates: BTreeMap<String, BTreeSet<NaiveDate>>,
    /// Mean show count across the roster.
    pub average_shows: f64,
    /// Number of staffed shows in the week.
    pub staffed_shows: usize,
}

impl WorkloadStats {
    /// Computes statistics for every roster member.
    ///
    /// Rows for shows the index does not know are ignored for dates but
    /// still counted as on-stage work.
    pub fn calculate(assignments: &[Assignment], index: &ShowIndex, cast: &[CastMember]) -> Self {
        let mut show_counts: BTreeMap<String, usize> =
            cast.iter().map(|m| (m.name.clone(), 0)).collect();
        let mut working_dates: BTreeMap<&str, BTreeSet<NaiveDate>> = BTreeMap::new();
        let mut red_dates: BTreeMap<String, BTreeSet<NaiveDate>> =
            cast.iter().map(|m| (m.name.clone(), BTreeSet::new())).collect();

        for a in assignments {
            let date = index.entry_date(&a.show_id);
            if a.is_on_stage() {
                *show_counts.entry(a.performer.clone()).or_insert(0) += 1;
                if let Some(date) = date {
                    working_dates.entry(a.performer.as_str()).or_default().insert(date);
                }
            }
            if a.is_red_day {
                if let Some(date) = date {
                    red_dates.entry(a.performer.clone()).or_default().insert(date);
                }
            }
        }

        let company = usize::from(index.company_day_off().is_some());
        let full_days_off = show_counts
            .keys()
            .map(|name| {
                let worked = working_dates.get(name.as_str());
                let free = index
                    .dates()
                    .filter(|d| worked.map_or(true, |set| !set.contains(d)))
                    .count();
                (name.clone(), free + company)
            })
            .collect();

        let total: usize = show_counts.values().sum();
        let average_shows = if cast.is_empty() {
            0.0
        } else {
            total as f64 / cast.len() as f64
        };

        Self {
            show_counts,
            full_days_off,
            red_dates,
            average_shows,
            staffed_shows: index.len(),
        }
    }

    /// Show count for a performer (0 if unknown).
    pub fn show_count(&self, performer: &str) -> usize {
        self.show_counts.get(performer).copied().unwrap_or(0)
    }

    /// Full days off per performer, as reported to callers.
    pub fn day_off_stats(&self) -> BTreeMap<String, usize> {
        self.full_days_off.clone()
    }

    /// Show count above which a performer counts as overworked.
    pub fn overworked_threshold(&self, factor: f64) -> usize {
        (factor * self.average_shows).ceil() as usize
    }

    /// Difference between the busiest and the least busy performer.
    pub fn spread(&self) -> usize {
        let max = self.show_counts.values().max().copied().unwrap_or(0);
        let min = self.show_counts.values().min().copied().unwrap_or(0);
        max - min
    }
}
