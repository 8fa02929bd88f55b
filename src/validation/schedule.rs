//! Schedule validation.
//!
//! A pure pass over finished assignment rows. The same rows always produce
//! the same findings in the same order: shows in show order, then
//! performers in roster order (unknown names last, sorted).
//!
//! # Errors
//!
//! | Kind | Rule |
//! |------|------|
//! | `Headcount` | distinct on-stage performers per show == catalog size |
//! | `MissingRole` | every catalog role has a holder |
//! | `RoleOverbooked` / `DoubleBooking` | one holder per role, one row per performer |
//! | `MissingRow` | every roster performer has a role or OFF row in each show |
//! | `RoleIneligible` / `GenderIneligible` | performer knows the role and meets its restriction |
//! | `Consecutive` | run length <= `max_consecutive_shows` |
//! | `Weekend` | shows per Friday–Sunday span <= `max_weekend_shows` |
//! | `BackToBack` | no double-show days on adjacent dates |
//! | `WeeklyCap` | shows <= `max_weekly_shows` |
//! | `UnknownShow` / `UnknownPerformer` | rows reference the week and the roster |
//! | `RedDayConflict` | no role on one's RED date |
//!
//! # Warnings
//!
//! Zero or several RED days, and workload far from the roster average.

use chrono::NaiveDate;
use std::collections::{BTreeMap, BTreeSet};

use super::issue::{ConstraintResult, IssueKind, ScheduleIssue};
use super::suggestions::SuggestionContext;
use crate::config::SchedulerConfig;
use crate::models::{Assignment, CastMember, Role, RoleCatalog};
use crate::scheduler::{
    double_dates, has_back_to_back, longest_run, weekend_key, ShowIndex, WorkingSchedule,
    WorkloadStats,
};

/// Validates assignment rows against every scheduling rule.
#[derive(Debug, Clone, Copy)]
pub struct ScheduleValidator<'a> {
    index: &'a ShowIndex,
    cast: &'a [CastMember],
    catalog: &'a RoleCatalog,
    config: &'a SchedulerConfig,
}

/// Rows of one staffed show.
#[derive(Default)]
struct ShowRows<'r> {
    by_role: BTreeMap<Role, Vec<&'r str>>,
    by_performer: BTreeMap<&'r str, Vec<Role>>,
    /// OFF row count per performer.
    off: BTreeMap<&'r str, usize>,
}

impl<'a> ScheduleValidator<'a> {
    /// Creates a validator over an indexed week.
    pub fn new(
        index: &'a ShowIndex,
        cast: &'a [CastMember],
        catalog: &'a RoleCatalog,
        config: &'a SchedulerConfig,
    ) -> Self {
        Self {
            index,
            cast,
            catalog,
            config,
        }
    }

    /// Runs every check.
    pub fn validate(&self, assignments: &[Assignment]) -> ConstraintResult {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();

        let mut shows: Vec<ShowRows<'_>> =
            (0..self.index.len()).map(|_| ShowRows::default()).collect();
        let mut positions: BTreeMap<&str, BTreeSet<usize>> = BTreeMap::new();
        let mut red: BTreeMap<&str, BTreeSet<NaiveDate>> = BTreeMap::new();
        let mut unknown_shows: BTreeSet<&str> = BTreeSet::new();

        for a in assignments {
            if a.is_red_day {
                if let Some(date) = self.index.entry_date(&a.show_id) {
                    red.entry(a.performer.as_str()).or_default().insert(date);
                }
            }
            let Some(role) = a.role.role() else {
                if let Some(idx) = self.index.position(&a.show_id) {
                    *shows[idx].off.entry(a.performer.as_str()).or_insert(0) += 1;
                }
                continue;
            };
            match self.index.position(&a.show_id) {
                Some(idx) => {
                    let rows = &mut shows[idx];
                    rows.by_role.entry(role).or_default().push(&a.performer);
                    rows.by_performer.entry(&a.performer).or_default().push(role);
                    positions.entry(a.performer.as_str()).or_default().insert(idx);
                }
                None => {
                    unknown_shows.insert(a.show_id.as_str());
                }
            }
        }

        for id in unknown_shows {
            let message = if self.index.entry_date(id).is_some() {
                format!("Show {id} is not a performance but has performers on stage")
            } else {
                format!("Show {id} is not part of this week")
            };
            errors.push(ScheduleIssue::new(IssueKind::UnknownShow, message).with_show(id));
        }

        for (idx, rows) in shows.iter().enumerate() {
            self.check_show(idx, rows, &mut errors);
        }

        let known: BTreeSet<&str> = self.cast.iter().map(|m| m.name.as_str()).collect();
        let strangers: BTreeSet<&str> = assignments
            .iter()
            .map(|a| a.performer.as_str())
            .filter(|name| !known.contains(name))
            .collect();
        for name in &strangers {
            errors.push(
                ScheduleIssue::new(
                    IssueKind::UnknownPerformer,
                    format!("{name} is scheduled but not on the roster"),
                )
                .with_performer(*name),
            );
        }

        let empty = BTreeSet::new();
        let performers = known_in_roster_order(self.cast).chain(strangers.iter().copied());
        for name in performers {
            let worked = positions.get(name).unwrap_or(&empty);
            self.check_workload(name, worked, &mut errors);
            if let Some(dates) = red.get(name) {
                self.check_red_conflicts(name, worked, dates, &mut errors);
            }
        }

        let schedule = self.rebuild(&shows);
        let stats = WorkloadStats::calculate(assignments, self.index, self.cast);
        let ctx = SuggestionContext {
            index: self.index,
            cast: self.cast,
            catalog: self.catalog,
            schedule: &schedule,
            counts: &stats.show_counts,
        };
        self.check_red_days(&ctx, &red, &mut warnings);
        self.check_utilization(&ctx, &stats, &mut warnings);

        ConstraintResult::new(errors, warnings)
    }

    fn check_show(&self, idx: usize, rows: &ShowRows<'_>, errors: &mut Vec<ScheduleIssue>) {
        let show = self.index.show(idx);
        let at = format!("show {} on {} at {}", show.id, show.date, show.time.format("%H:%M"));
        let expected = self.catalog.role_count();

        if rows.by_performer.len() != expected {
            errors.push(
                ScheduleIssue::new(
                    IssueKind::Headcount,
                    format!(
                        "{} performers on stage in {at}, expected {expected}",
                        rows.by_performer.len()
                    ),
                )
                .with_show(&show.id),
            );
        }

        for role in self.catalog.roles() {
            if !rows.by_role.contains_key(&role) {
                errors.push(
                    ScheduleIssue::new(IssueKind::MissingRole, format!("No {role} in {at}"))
                        .with_show(&show.id),
                );
            }
        }

        for (role, holders) in &rows.by_role {
            if holders.len() > 1 {
                errors.push(
                    ScheduleIssue::new(
                        IssueKind::RoleOverbooked,
                        format!("{role} is held by {} in {at}", holders.join(", ")),
                    )
                    .with_show(&show.id),
                );
            }
        }

        for (&name, roles) in &rows.by_performer {
            if roles.len() > 1 {
                let list: Vec<&str> = roles.iter().map(|r| r.as_str()).collect();
                errors.push(
                    ScheduleIssue::new(
                        IssueKind::DoubleBooking,
                        format!("{name} holds {} in {at}", list.join(" and ")),
                    )
                    .with_show(&show.id)
                    .with_performer(name),
                );
            }

            let Some(member) = self.cast.iter().find(|m| m.name == name) else {
                continue;
            };
            for &role in roles {
                if !self.catalog.contains(role) || !member.knows(role) {
                    errors.push(
                        ScheduleIssue::new(
                            IssueKind::RoleIneligible,
                            format!("{name} is not eligible for {role} in {at}"),
                        )
                        .with_show(&show.id)
                        .with_performer(name),
                    );
                } else if !member.meets_restriction(role, self.catalog) {
                    errors.push(
                        ScheduleIssue::new(
                            IssueKind::GenderIneligible,
                            format!("{name} does not meet the restriction on {role} in {at}"),
                        )
                        .with_show(&show.id)
                        .with_performer(name),
                    );
                }
            }
        }

        for (&name, &count) in &rows.off {
            let message = if rows.by_performer.contains_key(name) {
                format!("{name} is both on stage and OFF in {at}")
            } else if count > 1 {
                format!("{name} has {count} OFF rows in {at}")
            } else {
                continue;
            };
            errors.push(
                ScheduleIssue::new(IssueKind::DoubleBooking, message)
                    .with_show(&show.id)
                    .with_performer(name),
            );
        }

        for member in self.cast {
            let name = member.name.as_str();
            if !rows.by_performer.contains_key(name) && !rows.off.contains_key(name) {
                errors.push(
                    ScheduleIssue::new(IssueKind::MissingRow, format!("{name} has no row in {at}"))
                        .with_show(&show.id)
                        .with_performer(name),
                );
            }
        }
    }

    fn check_workload(
        &self,
        name: &str,
        worked: &BTreeSet<usize>,
        errors: &mut Vec<ScheduleIssue>,
    ) {
        let config = self.config;
        let positions: Vec<usize> = worked.iter().copied().collect();

        if positions.len() > config.max_weekly_shows {
            errors.push(
                ScheduleIssue::new(
                    IssueKind::WeeklyCap,
                    format!(
                        "{name} has {} shows this week, limit is {}",
                        positions.len(),
                        config.max_weekly_shows
                    ),
                )
                .with_performer(name),
            );
        }

        let mut weekends: BTreeMap<NaiveDate, usize> = BTreeMap::new();
        for &idx in &positions {
            if let Some(key) = weekend_key(self.index.date_of(idx)) {
                *weekends.entry(key).or_insert(0) += 1;
            }
        }
        for (key, count) in weekends {
            if count > config.max_weekend_shows {
                errors.push(
                    ScheduleIssue::new(
                        IssueKind::Weekend,
                        format!(
                            "{name} has {count} shows in the weekend starting {key}, limit is {}",
                            config.max_weekend_shows
                        ),
                    )
                    .with_performer(name),
                );
            }
        }

        let run = longest_run(self.index, &positions);
        if run > config.max_consecutive_shows {
            errors.push(
                ScheduleIssue::new(
                    IssueKind::Consecutive,
                    format!(
                        "{name} works {run} consecutive shows, limit is {}",
                        config.max_consecutive_shows
                    ),
                )
                .with_performer(name),
            );
        }

        let doubles = double_dates(self.index, positions.iter().copied());
        if has_back_to_back(&doubles) {
            let list: Vec<String> = doubles.iter().map(ToString::to_string).collect();
            errors.push(
                ScheduleIssue::new(
                    IssueKind::BackToBack,
                    format!("{name} works double-show days back to back: {}", list.join(", ")),
                )
                .with_performer(name),
            );
        }
    }

    fn check_red_conflicts(
        &self,
        name: &str,
        worked: &BTreeSet<usize>,
        dates: &BTreeSet<NaiveDate>,
        errors: &mut Vec<ScheduleIssue>,
    ) {
        for &idx in worked {
            let show = self.index.show(idx);
            if dates.contains(&show.date) {
                errors.push(
                    ScheduleIssue::new(
                        IssueKind::RedDayConflict,
                        format!(
                            "{name} is on stage in show {} on their RED day {}",
                            show.id, show.date
                        ),
                    )
                    .with_show(&show.id)
                    .with_performer(name),
                );
            }
        }
    }

    fn check_red_days(
        &self,
        ctx: &SuggestionContext<'_>,
        red: &BTreeMap<&str, BTreeSet<NaiveDate>>,
        warnings: &mut Vec<ScheduleIssue>,
    ) {
        if self.index.is_empty() && self.index.company_day_off().is_none() {
            return;
        }
        for member in self.cast {
            let name = member.name.as_str();
            let dates: Vec<NaiveDate> = red
                .get(name)
                .map(|set| set.iter().copied().collect())
                .unwrap_or_default();
            match dates.len() {
                0 => warnings.push(
                    ScheduleIssue::new(IssueKind::MissingRedDay, format!("{name} has no RED day"))
                        .with_performer(name)
                        .with_suggestion(ctx.red_date(name)),
                ),
                1 => {}
                n => warnings.push(
                    ScheduleIssue::new(
                        IssueKind::ExtraRedDay,
                        format!("{name} has {n} RED days"),
                    )
                    .with_performer(name)
                    .with_suggestion(ctx.keep_one_red_date(&dates)),
                ),
            }
        }
    }

    fn check_utilization(
        &self,
        ctx: &SuggestionContext<'_>,
        stats: &WorkloadStats,
        warnings: &mut Vec<ScheduleIssue>,
    ) {
        let config = self.config;
        let week = self.index.len();
        let threshold = stats.overworked_threshold(config.overworked_factor);

        for member in self.cast {
            let name = member.name.as_str();
            let count = stats.show_count(name);
            if week >= config.underutilized_week_threshold
                && count < config.underutilized_min_shows
            {
                warnings.push(
                    ScheduleIssue::new(
                        IssueKind::Underutilized,
                        format!("{name} is underutilized with {count} of {week} shows"),
                    )
                    .with_performer(name)
                    .with_suggestion(ctx.relief_slot(name)),
                );
            } else if week > config.underutilized_week_threshold && count > threshold {
                warnings.push(
                    ScheduleIssue::new(
                        IssueKind::Overworked,
                        format!(
                            "{name} is overworked with {count} shows, average is {:.1}",
                            stats.average_shows
                        ),
                    )
                    .with_performer(name)
                    .with_suggestion(ctx.alternate_performer(name, stats.average_shows)),
                );
            }
        }
    }

    /// Working view of the rows, first holder per role, for suggestions.
    fn rebuild(&self, shows: &[ShowRows<'_>]) -> WorkingSchedule {
        let mut schedule = WorkingSchedule::new(self.index.len());
        for (idx, rows) in shows.iter().enumerate() {
            for (&role, holders) in &rows.by_role {
                if let Some(first) = holders.first() {
                    if schedule.role_of(idx, first).is_none() {
                        schedule.assign(idx, role, first);
                    }
                }
            }
        }
        schedule
    }
}

fn known_in_roster_order(cast: &[CastMember]) -> impl Iterator<Item = &str> + '_ {
    cast.iter().map(|m| m.name.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Gender, RoleDefinition, Show};
    use chrono::NaiveTime;

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, day).unwrap()
    }

    fn t(h: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, 0, 0).unwrap()
    }

    fn two_role_catalog() -> RoleCatalog {
        RoleCatalog::new(vec![
            RoleDefinition::open(Role::Sarge),
            RoleDefinition::restricted(Role::Bin, Gender::Female),
        ])
    }

    fn cast() -> Vec<CastMember> {
        vec![
            CastMember::new("Ana").with_roles([Role::Sarge, Role::Bin]).with_gender(Gender::Female),
            CastMember::new("Ben").with_roles([Role::Sarge, Role::Bin]).with_gender(Gender::Male),
            CastMember::new("Cai").with_role(Role::Sarge),
        ]
    }

    fn validate(shows: &[Show], rows: &[Assignment], config: &SchedulerConfig) -> ConstraintResult {
        let index = ShowIndex::build(shows, config.consecutive_gap_days);
        let cast = cast();
        let catalog = two_role_catalog();
        ScheduleValidator::new(&index, &cast, &catalog, config).validate(rows)
    }

    fn kinds(issues: &[ScheduleIssue]) -> Vec<IssueKind> {
        issues.iter().map(|i| i.kind).collect()
    }

    #[test]
    fn test_clean_show() {
        let shows = vec![Show::new("tue", d(7), t(19))];
        let rows = vec![
            Assignment::on_stage("tue", Role::Sarge, "Ben"),
            Assignment::on_stage("tue", Role::Bin, "Ana"),
            Assignment::off("tue", "Cai").with_red_day(true),
        ];
        let result = validate(&shows, &rows, &SchedulerConfig::default());
        assert!(result.is_valid, "{:?}", result.errors);
        // Ana and Ben have no RED day.
        assert_eq!(
            kinds(&result.warnings),
            vec![IssueKind::MissingRedDay, IssueKind::MissingRedDay]
        );
        assert!(result.warnings[0].suggestion.is_some());
    }

    #[test]
    fn test_headcount_and_missing_role() {
        let shows = vec![Show::new("tue", d(7), t(19))];
        let rows = vec![
            Assignment::on_stage("tue", Role::Sarge, "Cai"),
            Assignment::off("tue", "Ana"),
            Assignment::off("tue", "Ben"),
        ];
        let result = validate(&shows, &rows, &SchedulerConfig::default());
        assert!(!result.is_valid);
        assert_eq!(kinds(&result.errors), vec![IssueKind::Headcount, IssueKind::MissingRole]);
        assert!(result.has_critical_errors());
        assert!(result.errors[1].message.contains("No Bin in show tue on 2024-05-07 at 19:00"));
    }

    #[test]
    fn test_gender_and_role_eligibility() {
        let shows = vec![Show::new("tue", d(7), t(19))];
        let rows = vec![
            Assignment::on_stage("tue", Role::Sarge, "Ana"),
            Assignment::on_stage("tue", Role::Bin, "Ben"),
            Assignment::off("tue", "Cai"),
        ];
        let result = validate(&shows, &rows, &SchedulerConfig::default());
        assert_eq!(kinds(&result.errors), vec![IssueKind::GenderIneligible]);

        let rows = vec![
            Assignment::on_stage("tue", Role::Sarge, "Ana"),
            Assignment::on_stage("tue", Role::Bin, "Cai"),
            Assignment::off("tue", "Ben"),
        ];
        let result = validate(&shows, &rows, &SchedulerConfig::default());
        assert_eq!(kinds(&result.errors), vec![IssueKind::RoleIneligible]);
    }

    #[test]
    fn test_double_booking() {
        let shows = vec![Show::new("tue", d(7), t(19))];
        let rows = vec![
            Assignment::on_stage("tue", Role::Sarge, "Ana"),
            Assignment::on_stage("tue", Role::Bin, "Ana"),
            Assignment::on_stage("tue", Role::Sarge, "Cai"),
        ];
        let result = validate(&shows, &rows, &SchedulerConfig::default());
        let found = kinds(&result.errors);
        assert!(found.contains(&IssueKind::RoleOverbooked));
        assert!(found.contains(&IssueKind::DoubleBooking));
        assert!(!found.contains(&IssueKind::Headcount));
    }

    #[test]
    fn test_off_rows_count_as_positions() {
        let shows = vec![Show::new("tue", d(7), t(19))];
        let rows = vec![
            Assignment::on_stage("tue", Role::Sarge, "Ben"),
            Assignment::on_stage("tue", Role::Bin, "Ana"),
            Assignment::off("tue", "Ana"),
        ];
        let result = validate(&shows, &rows, &SchedulerConfig::default());
        assert!(!result.is_valid);
        assert_eq!(kinds(&result.errors), vec![IssueKind::DoubleBooking, IssueKind::MissingRow]);
        assert_eq!(result.errors[0].performer.as_deref(), Some("Ana"));
        assert!(result.errors[0].message.contains("both on stage and OFF"));
        assert_eq!(result.errors[1].performer.as_deref(), Some("Cai"));
        assert!(!result.has_critical_errors());

        let rows = vec![
            Assignment::on_stage("tue", Role::Sarge, "Ben"),
            Assignment::on_stage("tue", Role::Bin, "Ana"),
            Assignment::off("tue", "Cai"),
            Assignment::off("tue", "Cai").with_red_day(true),
        ];
        let result = validate(&shows, &rows, &SchedulerConfig::default());
        assert_eq!(kinds(&result.errors), vec![IssueKind::DoubleBooking]);
        assert!(result.errors[0].message.contains("Cai has 2 OFF rows"));
    }

    #[test]
    fn test_consecutive_and_weekly() {
        let shows: Vec<Show> = (0..7)
            .map(|i| Show::new(format!("s{i}"), d(6 + i), t(19)))
            .collect();
        let rows: Vec<Assignment> = shows
            .iter()
            .map(|s| Assignment::on_stage(&s.id, Role::Sarge, "Cai"))
            .collect();
        let result = validate(&shows, &rows, &SchedulerConfig::default());
        let cai: Vec<IssueKind> = result
            .errors
            .iter()
            .filter(|e| e.performer.as_deref() == Some("Cai"))
            .map(|e| e.kind)
            .collect();
        assert_eq!(cai, vec![IssueKind::WeeklyCap, IssueKind::Consecutive]);
    }

    #[test]
    fn test_weekend_and_back_to_back() {
        let shows = vec![
            Show::new("fri-mat", d(10), t(14)),
            Show::new("fri-eve", d(10), t(19)),
            Show::new("sat-mat", d(11), t(14)),
            Show::new("sat-eve", d(11), t(19)),
            Show::new("sun-mat", d(12), t(14)),
        ];
        let rows: Vec<Assignment> = shows
            .iter()
            .map(|s| Assignment::on_stage(&s.id, Role::Sarge, "Cai"))
            .collect();
        let config = SchedulerConfig::default().with_max_consecutive_shows(10);
        let result = validate(&shows, &rows, &config);
        let cai: Vec<IssueKind> = result
            .errors
            .iter()
            .filter(|e| e.performer.as_deref() == Some("Cai"))
            .map(|e| e.kind)
            .collect();
        assert_eq!(cai, vec![IssueKind::Weekend, IssueKind::BackToBack]);
    }

    #[test]
    fn test_unknowns_and_red_conflict() {
        let shows = vec![Show::new("tue", d(7), t(19)), Show::day_off("dark", d(8))];
        let rows = vec![
            Assignment::on_stage("tue", Role::Sarge, "Ana"),
            Assignment::on_stage("tue", Role::Bin, "Zed"),
            Assignment::off("tue", "Ana").with_red_day(true),
            Assignment::off("tue", "Ben"),
            Assignment::off("tue", "Cai"),
            Assignment::on_stage("ghost", Role::Sarge, "Ben"),
            Assignment::on_stage("dark", Role::Sarge, "Cai"),
        ];
        let result = validate(&shows, &rows, &SchedulerConfig::default());
        let found = kinds(&result.errors);
        assert_eq!(
            found,
            vec![
                IssueKind::UnknownShow,
                IssueKind::UnknownShow,
                IssueKind::DoubleBooking,
                IssueKind::UnknownPerformer,
                IssueKind::RedDayConflict,
            ]
        );
        assert!(result.errors[0].message.contains("dark"));
        assert!(result.errors[1].message.contains("ghost"));
    }

    #[test]
    fn test_red_day_counts() {
        let shows = vec![Show::new("tue", d(7), t(19)), Show::new("wed", d(8), t(19))];
        let rows = vec![
            Assignment::off("tue", "Ana").with_red_day(true),
            Assignment::off("wed", "Ana").with_red_day(true),
            Assignment::off("tue", "Ben").with_red_day(true),
            Assignment::off("wed", "Cai").with_red_day(true),
        ];
        let result = validate(&shows, &rows, &SchedulerConfig::default());
        let red: Vec<&ScheduleIssue> = result
            .warnings
            .iter()
            .filter(|w| w.kind == IssueKind::ExtraRedDay)
            .collect();
        assert_eq!(red.len(), 1);
        assert_eq!(red[0].performer.as_deref(), Some("Ana"));
        assert!(red[0].suggestion.as_deref().unwrap().contains("keep 2024-05-07"));
    }

    #[test]
    fn test_utilization_warnings() {
        let shows: Vec<Show> = (0..5)
            .map(|i| Show::new(format!("s{i}"), d(6 + i), t(19)))
            .collect();
        // Cai: 5 shows, Ben: 1, Ana: 0. Average 2, overworked above 3.
        let mut rows: Vec<Assignment> = shows
            .iter()
            .map(|s| Assignment::on_stage(&s.id, Role::Sarge, "Cai"))
            .collect();
        rows.push(Assignment::on_stage("s0", Role::Bin, "Ben"));
        let result = validate(&shows, &rows, &SchedulerConfig::default());

        let under: Vec<&str> = result
            .warnings
            .iter()
            .filter(|w| w.kind == IssueKind::Underutilized)
            .filter_map(|w| w.performer.as_deref())
            .collect();
        assert_eq!(under, vec!["Ana", "Ben"]);

        let over: Vec<&ScheduleIssue> = result
            .warnings
            .iter()
            .filter(|w| w.kind == IssueKind::Overworked)
            .collect();
        assert_eq!(over.len(), 1);
        assert_eq!(over[0].performer.as_deref(), Some("Cai"));
        assert!(over[0].suggestion.as_deref().unwrap().contains("to Ana"));
    }

    #[test]
    fn test_validation_is_idempotent() {
        let shows = vec![
            Show::new("tue", d(7), t(19)),
            Show::new("wed", d(8), t(19)),
        ];
        let rows = vec![
            Assignment::on_stage("tue", Role::Sarge, "Cai"),
            Assignment::on_stage("wed", Role::Bin, "Ben"),
            Assignment::off("wed", "Ana").with_red_day(true),
        ];
        let config = SchedulerConfig::default();
        let first = validate(&shows, &rows, &config);
        let second = validate(&shows, &rows, &config);
        assert_eq!(first, second);
    }
}
