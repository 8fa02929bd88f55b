//! RED day assignment.
//!
//! Every performer gets exactly one RED day: a calendar date on which they
//! are OFF for every show.
//!
//! # Algorithm
//!
//! - **Company day off present**: that date is everyone's RED day.
//! - **Otherwise**, per performer:
//!   1. Natural days off (dates with no role at all) are preferred:
//!      weekdays before weekends, then dates with fewer shows.
//!   2. With no natural day off, prefer dates where every vacated slot has
//!      a possible cover, then score each date (+10 weekday, +5 unless it is
//!      part of back-to-back double dates, up to +3 for fewer shows) and
//!      force the best one: the performer's
//!      roles that day are vacated and each slot is re-cast from that show's
//!      OFF performers who pass every constraint check and are not RED that
//!      day.
//!
//! Performers with a natural day off are settled first, so forcing cannot
//! take a natural day from someone handled later. A slot that cannot be
//! re-cast stays empty and is reported; validation then flags the show.

use chrono::{Duration, NaiveDate};
use std::collections::BTreeMap;

use super::index::is_weekday;
use super::strategy::GenerationContext;
use super::WorkingSchedule;
use crate::models::{Assignment, CastMember, Role};

/// RED dates chosen for a week.
#[derive(Debug, Clone, Default)]
pub struct RedDayPlan {
    /// Performer → RED date.
    pub dates: BTreeMap<String, NaiveDate>,
    /// Performers whose RED day had to be forced.
    pub forced: Vec<String>,
    /// Problems met while forcing.
    pub warnings: Vec<String>,
}

/// Natural days off for a performer, best first.
fn natural_days_off(
    ctx: &GenerationContext<'_>,
    schedule: &WorkingSchedule,
    performer: &str,
) -> Vec<NaiveDate> {
    let mut dates: Vec<NaiveDate> = ctx
        .index
        .dates()
        .filter(|&d| schedule.is_free_on(ctx.index, performer, d))
        .collect();
    dates.sort_by_key(|&d| (!is_weekday(d), ctx.index.shows_on(d).len(), d));
    dates
}

/// Desirability of forcing a rest day on a date. Higher is better.
pub fn forced_date_score(ctx: &GenerationContext<'_>, date: NaiveDate) -> u32 {
    let index = ctx.index;
    let mut score = 0;
    if is_weekday(date) {
        score += 10;
    }
    let back_to_back = index.is_double_date(date)
        && (index.is_double_date(date - Duration::days(1))
            || index.is_double_date(date + Duration::days(1)));
    if !back_to_back {
        score += 5;
    }
    let shows = index.shows_on(date).len() as u32;
    score + 3u32.saturating_sub(shows.saturating_sub(1))
}

/// Chooses a RED day for every performer, forcing one where necessary.
pub fn assign_red_days(ctx: &GenerationContext<'_>, schedule: &mut WorkingSchedule) -> RedDayPlan {
    let mut plan = RedDayPlan::default();

    if let Some(day_off) = ctx.index.company_day_off() {
        for member in ctx.cast {
            plan.dates.insert(member.name.clone(), day_off);
        }
        return plan;
    }
    if ctx.index.is_empty() {
        return plan;
    }

    let mut pending: Vec<&CastMember> = Vec::new();
    for member in ctx.cast {
        match natural_days_off(ctx, schedule, &member.name).first() {
            Some(&date) => {
                plan.dates.insert(member.name.clone(), date);
            }
            None => pending.push(member),
        }
    }

    for member in pending {
        if let Some(&date) = natural_days_off(ctx, schedule, &member.name).first() {
            plan.dates.insert(member.name.clone(), date);
            continue;
        }

        let Some(date) = ctx.index.dates().max_by_key(|&d| {
            (
                coverable(ctx, schedule, &plan.dates, &member.name, d),
                forced_date_score(ctx, d),
                std::cmp::Reverse(d),
            )
        }) else {
            continue;
        };
        tracing::info!(performer = %member.name, %date, "forcing RED day");
        plan.dates.insert(member.name.clone(), date);
        plan.forced.push(member.name.clone());

        for &show in ctx.index.shows_on(date) {
            let Some(role) = schedule.vacate(show, &member.name) else {
                continue;
            };
            if let Some(cover) = find_cover(ctx, schedule, &plan.dates, show, role, date) {
                schedule.assign(show, role, &cover);
            } else {
                let s = ctx.index.show(show);
                tracing::warn!(show = %s.id, role = %role, "no cover after forced RED day");
                plan.warnings.push(format!(
                    "No cover for {role} in show {} on {} after giving {} a RED day",
                    s.id, date, member.name
                ));
            }
        }
    }

    plan
}

/// Whether every role the performer holds on `date` has a possible cover.
fn coverable(
    ctx: &GenerationContext<'_>,
    schedule: &WorkingSchedule,
    red: &BTreeMap<String, NaiveDate>,
    performer: &str,
    date: NaiveDate,
) -> bool {
    let checker = ctx.checker();
    ctx.index.shows_on(date).iter().all(|&show| {
        let Some(role) = schedule.role_of(show, performer) else {
            return true;
        };
        ctx.cast.iter().any(|m| {
            m.name != performer
                && red.get(&m.name) != Some(&date)
                && checker.can_assign(schedule, m, show, role)
        })
    })
}

/// Least-loaded legal replacement for a vacated slot, in roster order on ties.
fn find_cover(
    ctx: &GenerationContext<'_>,
    schedule: &WorkingSchedule,
    red: &BTreeMap<String, NaiveDate>,
    show: usize,
    role: Role,
    date: NaiveDate,
) -> Option<String> {
    let checker = ctx.checker();
    ctx.cast
        .iter()
        .filter(|m| red.get(&m.name) != Some(&date))
        .filter(|m| checker.can_assign(schedule, m, show, role))
        .min_by_key(|m| schedule.show_count_for(&m.name))
        .map(|m| m.name.clone())
}

/// OFF rows, flagged RED, for every entry on the company day off.
pub fn day_off_rows(ctx: &GenerationContext<'_>) -> Vec<Assignment> {
    let mut rows = Vec::new();
    for entry in ctx.index.day_off_entries() {
        for member in ctx.cast {
            rows.push(Assignment::off(&entry.id, &member.name).with_red_day(true));
        }
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SchedulerConfig;
    use crate::models::{RoleCatalog, RoleDefinition, Show, ShowStatus};
    use crate::scheduler::ShowIndex;
    use chrono::NaiveTime;

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, day).unwrap()
    }

    fn t(h: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, 0, 0).unwrap()
    }

    fn sarge_catalog() -> RoleCatalog {
        RoleCatalog::new(vec![RoleDefinition::open(Role::Sarge)])
    }

    fn sarges(names: &[&str]) -> Vec<CastMember> {
        names
            .iter()
            .map(|n| CastMember::new(*n).with_role(Role::Sarge))
            .collect()
    }

    #[test]
    fn test_company_day_off_is_everyones_red_day() {
        let shows = vec![
            Show::new("tue", d(7), t(19)),
            Show::day_off("dark", d(8)),
            Show::new("bus", d(8), t(9)).with_status(ShowStatus::Travel),
            Show::new("thu", d(9), t(19)),
        ];
        let idx = ShowIndex::build(&shows, 2);
        let catalog = sarge_catalog();
        let config = SchedulerConfig::default();
        let cast = sarges(&["Ana", "Ben"]);
        let ctx = GenerationContext::new(&idx, &cast, &catalog, &config);
        let mut ws = WorkingSchedule::new(idx.len());
        ws.assign(0, Role::Sarge, "Ana");
        ws.assign(1, Role::Sarge, "Ana");

        let plan = assign_red_days(&ctx, &mut ws);
        assert_eq!(plan.dates.len(), 2);
        assert!(plan.dates.values().all(|&date| date == d(8)));
        assert!(plan.forced.is_empty());

        let rows = day_off_rows(&ctx);
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| r.show_id == "dark"));
        assert!(rows.iter().all(|r| r.is_red_day && !r.is_on_stage()));
    }

    #[test]
    fn test_natural_day_prefers_weekday_then_fewer_shows() {
        let shows = vec![
            Show::new("thu", d(9), t(19)),
            Show::new("fri-mat", d(10), t(14)),
            Show::new("fri-eve", d(10), t(19)),
            Show::new("sat", d(11), t(19)),
        ];
        let idx = ShowIndex::build(&shows, 2);
        let catalog = sarge_catalog();
        let config = SchedulerConfig::default();
        let cast = sarges(&["Ana"]);
        let ctx = GenerationContext::new(&idx, &cast, &catalog, &config);
        let ws = WorkingSchedule::new(idx.len());

        // Free everywhere: Thu (weekday, one show) beats Fri and Sat.
        let dates = natural_days_off(&ctx, &ws, "Ana");
        assert_eq!(dates, vec![d(9), d(10), d(11)]);
    }

    #[test]
    fn test_forced_red_day_recasts_slot() {
        let shows = vec![
            Show::new("tue", d(7), t(19)),
            Show::new("wed", d(8), t(19)),
            Show::new("sat", d(11), t(19)),
        ];
        let idx = ShowIndex::build(&shows, 2);
        let catalog = sarge_catalog();
        let config = SchedulerConfig::default();
        let cast = sarges(&["Ana", "Ben"]);
        let ctx = GenerationContext::new(&idx, &cast, &catalog, &config);
        let mut ws = WorkingSchedule::new(idx.len());
        // Ana works everything; Ben works nothing.
        for show in 0..3 {
            ws.assign(show, Role::Sarge, "Ana");
        }

        let plan = assign_red_days(&ctx, &mut ws);
        assert_eq!(plan.forced, vec!["Ana".to_string()]);
        // Ben rests on Tuesday (weekday, earliest), so he can only cover
        // Ana on Wednesday.
        assert_eq!(plan.dates["Ben"], d(7));
        assert_eq!(plan.dates["Ana"], d(8));
        assert_eq!(ws.holder(1, Role::Sarge), Some("Ben"));
        assert!(plan.warnings.is_empty());
    }

    #[test]
    fn test_forced_without_cover_reports() {
        let shows = vec![Show::new("tue", d(7), t(19))];
        let idx = ShowIndex::build(&shows, 2);
        let catalog = sarge_catalog();
        let config = SchedulerConfig::default();
        let cast = sarges(&["Ana"]);
        let ctx = GenerationContext::new(&idx, &cast, &catalog, &config);
        let mut ws = WorkingSchedule::new(idx.len());
        ws.assign(0, Role::Sarge, "Ana");

        let plan = assign_red_days(&ctx, &mut ws);
        assert_eq!(plan.dates["Ana"], d(7));
        assert_eq!(plan.warnings.len(), 1);
        assert!(ws.holder(0, Role::Sarge).is_none());
    }

    #[test]
    fn test_forced_date_score() {
        let shows = vec![
            Show::new("fri", d(10), t(19)),
            Show::new("sat-mat", d(11), t(14)),
            Show::new("sat-eve", d(11), t(19)),
            Show::new("sun-mat", d(12), t(14)),
            Show::new("sun-eve", d(12), t(19)),
        ];
        let idx = ShowIndex::build(&shows, 2);
        let catalog = sarge_catalog();
        let config = SchedulerConfig::default();
        let cast = sarges(&["Ana"]);
        let ctx = GenerationContext::new(&idx, &cast, &catalog, &config);

        assert_eq!(forced_date_score(&ctx, d(10)), 10 + 5 + 3);
        assert_eq!(forced_date_score(&ctx, d(11)), 2);
    }
}
