//! Assignment legality checks.
//!
//! Every check is a necessary condition evaluated against the current,
//! possibly partial, [`WorkingSchedule`] before a tentative assignment is
//! committed. Cheap lookups run before the ones that walk a performer's
//! appearances.
//!
//! | Check | Rule |
//! |-------|------|
//! | already on show | one position per performer per show |
//! | eligibility | role in `eligible_roles` |
//! | restriction | gender matches the catalog restriction |
//! | weekly | at most `max_weekly_shows` |
//! | weekend | at most `max_weekend_shows` per Friday–Sunday span |
//! | back-to-back doubles | no double-show days on adjacent dates |
//! | consecutive | no run longer than `max_consecutive_shows` |

use chrono::{Duration, NaiveDate};
use std::fmt;

use super::index::weekend_key;
use super::{ShowIndex, WorkingSchedule};
use crate::config::SchedulerConfig;
use crate::models::{CastMember, Role, RoleCatalog};

/// Why a tentative assignment was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    AlreadyOnShow,
    NotEligible,
    GenderRestricted,
    WeeklyLimit,
    WeekendLimit,
    BackToBackDoubles,
    ConsecutiveLimit,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Rejection::AlreadyOnShow => "already performing in this show",
            Rejection::NotEligible => "not eligible for the role",
            Rejection::GenderRestricted => "role is gender-restricted",
            Rejection::WeeklyLimit => "weekly show limit reached",
            Rejection::WeekendLimit => "weekend show limit reached",
            Rejection::BackToBackDoubles => "would work double-show days back to back",
            Rejection::ConsecutiveLimit => "consecutive show limit reached",
        };
        f.write_str(text)
    }
}

/// Length of the longest run in sorted show positions, where neighbours
/// must be adjacent in show order and consecutive in time.
pub fn longest_run(index: &ShowIndex, positions: &[usize]) -> usize {
    let mut longest = 0;
    let mut current = 0;
    let mut prev: Option<usize> = None;
    for &idx in positions {
        current = match prev {
            Some(p) if idx == p + 1 && index.consecutive(p, idx) => current + 1,
            _ => 1,
        };
        longest = longest.max(current);
        prev = Some(idx);
    }
    longest
}

/// Dates on which the performer works two or more shows.
pub fn double_dates(
    index: &ShowIndex,
    positions: impl IntoIterator<Item = usize>,
) -> Vec<NaiveDate> {
    let mut per_date: Vec<(NaiveDate, usize)> = Vec::new();
    for idx in positions {
        let date = index.date_of(idx);
        match per_date.iter_mut().find(|(d, _)| *d == date) {
            Some((_, n)) => *n += 1,
            None => per_date.push((date, 1)),
        }
    }
    let mut dates: Vec<NaiveDate> = per_date
        .into_iter()
        .filter(|&(_, n)| n >= 2)
        .map(|(d, _)| d)
        .collect();
    dates.sort();
    dates
}

/// Whether any two double dates are calendar-adjacent.
pub fn has_back_to_back(doubles: &[NaiveDate]) -> bool {
    doubles.windows(2).any(|w| w[1] - w[0] == Duration::days(1))
}

/// Checks tentative assignments against the working schedule.
#[derive(Debug, Clone, Copy)]
pub struct ConstraintChecker<'a> {
    index: &'a ShowIndex,
    catalog: &'a RoleCatalog,
    config: &'a SchedulerConfig,
}

impl<'a> ConstraintChecker<'a> {
    /// Creates a checker.
    pub fn new(
        index: &'a ShowIndex,
        catalog: &'a RoleCatalog,
        config: &'a SchedulerConfig,
    ) -> Self {
        Self {
            index,
            catalog,
            config,
        }
    }

    /// Whether the assignment would be legal.
    pub fn can_assign(
        &self,
        schedule: &WorkingSchedule,
        performer: &CastMember,
        show: usize,
        role: Role,
    ) -> bool {
        self.check(schedule, performer, show, role).is_ok()
    }

    /// Checks every rule, returning the first one broken.
    pub fn check(
        &self,
        schedule: &WorkingSchedule,
        performer: &CastMember,
        show: usize,
        role: Role,
    ) -> Result<(), Rejection> {
        let name = performer.name.as_str();
        if schedule.is_on_show(show, name) {
            return Err(Rejection::AlreadyOnShow);
        }
        if !performer.knows(role) {
            return Err(Rejection::NotEligible);
        }
        if !performer.meets_restriction(role, self.catalog) {
            return Err(Rejection::GenderRestricted);
        }
        self.check_workload(schedule, name, show)
    }

    /// The time-based rules only: weekly, weekend, doubles, consecutive.
    ///
    /// Used when re-filling slots, where eligibility is checked separately.
    pub fn check_workload(
        &self,
        schedule: &WorkingSchedule,
        performer: &str,
        show: usize,
    ) -> Result<(), Rejection> {
        if schedule.show_count_for(performer) + 1 > self.config.max_weekly_shows {
            return Err(Rejection::WeeklyLimit);
        }

        let date = self.index.date_of(show);
        if let Some(key) = weekend_key(date) {
            let weekend = schedule
                .appearances(performer)
                .filter(|&idx| weekend_key(self.index.date_of(idx)) == Some(key))
                .count();
            if weekend + 1 > self.config.max_weekend_shows {
                return Err(Rejection::WeekendLimit);
            }
        }

        let mut positions: Vec<usize> = schedule.appearances(performer).collect();
        let at = positions.partition_point(|&idx| idx < show);
        positions.insert(at, show);

        if schedule.shows_on_date(self.index, performer, date) + 1 >= 2 {
            let doubles = double_dates(self.index, positions.iter().copied());
            let adjacent = [date - Duration::days(1), date + Duration::days(1)];
            if adjacent.iter().any(|d| doubles.contains(d)) {
                return Err(Rejection::BackToBackDoubles);
            }
        }

        if longest_run(self.index, &positions) > self.config.max_consecutive_shows {
            return Err(Rejection::ConsecutiveLimit);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Gender, Show};
    use chrono::NaiveTime;

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, day).unwrap()
    }

    fn t(h: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, 0, 0).unwrap()
    }

    /// Tue–Fri evenings, Sat and Sun doubles: 8 shows, positions 0..8.
    fn week() -> ShowIndex {
        let shows = vec![
            Show::new("tue", d(7), t(19)),
            Show::new("wed", d(8), t(19)),
            Show::new("thu", d(9), t(19)),
            Show::new("fri", d(10), t(19)),
            Show::new("sat-mat", d(11), t(14)),
            Show::new("sat-eve", d(11), t(19)),
            Show::new("sun-mat", d(12), t(14)),
            Show::new("sun-eve", d(12), t(19)),
        ];
        ShowIndex::build(&shows, 2)
    }

    fn who() -> CastMember {
        CastMember::new("Xan").with_role(Role::Who)
    }

    #[test]
    fn test_basic_rejections() {
        let idx = week();
        let catalog = RoleCatalog::standard();
        let config = SchedulerConfig::default();
        let checker = ConstraintChecker::new(&idx, &catalog, &config);
        let mut ws = WorkingSchedule::new(idx.len());

        let x = who();
        assert_eq!(checker.check(&ws, &x, 0, Role::Sarge), Err(Rejection::NotEligible));
        assert!(checker.can_assign(&ws, &x, 0, Role::Who));

        ws.assign(0, Role::Who, "Xan");
        assert_eq!(checker.check(&ws, &x, 0, Role::Who), Err(Rejection::AlreadyOnShow));

        let male_bin = CastMember::new("Sam").with_role(Role::Bin).with_gender(Gender::Male);
        assert_eq!(
            checker.check(&ws, &male_bin, 1, Role::Bin),
            Err(Rejection::GenderRestricted)
        );
    }

    #[test]
    fn test_consecutive_limit() {
        let idx = week();
        let catalog = RoleCatalog::standard();
        let config = SchedulerConfig::default().with_max_weekly_shows(10);
        let checker = ConstraintChecker::new(&idx, &catalog, &config);
        let mut ws = WorkingSchedule::new(idx.len());
        let x = who();

        // Six in a row: Tue, Wed, Thu, Fri, Sat mat, Sat eve.
        for show in 0..6 {
            ws.assign(show, Role::Who, "Xan");
        }
        assert_eq!(
            checker.check(&ws, &x, 6, Role::Who),
            Err(Rejection::ConsecutiveLimit)
        );
    }

    #[test]
    fn test_weekly_limit_blocks_seventh_show() {
        let idx = week();
        let catalog = RoleCatalog::standard();
        let config = SchedulerConfig::default();
        let checker = ConstraintChecker::new(&idx, &catalog, &config);
        let mut ws = WorkingSchedule::new(idx.len());
        let x = who();

        for show in 0..6 {
            ws.assign(show, Role::Who, "Xan");
        }
        assert!(!checker.can_assign(&ws, &x, 6, Role::Who));
        assert_eq!(checker.check(&ws, &x, 6, Role::Who), Err(Rejection::WeeklyLimit));
    }

    #[test]
    fn test_weekend_limit() {
        let idx = week();
        let catalog = RoleCatalog::standard();
        let config = SchedulerConfig::default().with_max_weekend_shows(2);
        let checker = ConstraintChecker::new(&idx, &catalog, &config);
        let mut ws = WorkingSchedule::new(idx.len());
        let x = who();

        ws.assign(3, Role::Who, "Xan"); // Fri
        ws.assign(4, Role::Who, "Xan"); // Sat mat
        assert_eq!(checker.check(&ws, &x, 6, Role::Who), Err(Rejection::WeekendLimit));
        // Thursday is outside the span.
        assert!(checker.can_assign(&ws, &x, 2, Role::Who));
    }

    #[test]
    fn test_back_to_back_doubles() {
        let idx = week();
        let catalog = RoleCatalog::standard();
        let config = SchedulerConfig::default();
        let checker = ConstraintChecker::new(&idx, &catalog, &config);
        let mut ws = WorkingSchedule::new(idx.len());
        let x = who();

        ws.assign(4, Role::Who, "Xan");
        ws.assign(5, Role::Who, "Xan");
        ws.assign(6, Role::Who, "Xan");
        assert_eq!(
            checker.check(&ws, &x, 7, Role::Who),
            Err(Rejection::BackToBackDoubles)
        );
    }

    #[test]
    fn test_longest_run_breaks_on_skipped_show() {
        let idx = week();
        assert_eq!(longest_run(&idx, &[0, 1, 2, 4, 5]), 3);
        assert_eq!(longest_run(&idx, &[]), 0);
    }

    #[test]
    fn test_double_dates_adjacency() {
        let idx = week();
        let doubles = double_dates(&idx, [4, 5, 6, 7]);
        assert_eq!(doubles, vec![d(11), d(12)]);
        assert!(has_back_to_back(&doubles));
        assert!(!has_back_to_back(&[d(11)]));
    }
}
