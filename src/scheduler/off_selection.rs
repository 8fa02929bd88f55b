//! OFF selection fairness scoring.
//!
//! Everyone not holding a role in a show is OFF for it. The scorer ranks
//! those performers so the ones who most need rest come first:
//!
//! 1. No full day off on another date yet (beyond the company day off).
//! 2. Does not leave them fully idle on two adjacent calendar days.
//! 3. Higher current show count.
//! 4. Longer consecutive run around this show.
//! 5. Random.
//!
//! Ranking never blocks completion: any failure falls back to a uniform
//! random order.

use chrono::{Duration, NaiveDate};
use rand::seq::SliceRandom;
use rand::Rng;
use std::cmp::Reverse;

use super::strategy::GenerationContext;
use super::WorkingSchedule;
use crate::error::ScheduleError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct OffScore {
    already_rested: bool,
    idles_adjacent_days: bool,
    load: Reverse<usize>,
    run: Reverse<usize>,
}

/// Whether the performer is fully free on a date, counting the company day off.
fn is_idle(
    ctx: &GenerationContext<'_>,
    schedule: &WorkingSchedule,
    name: &str,
    date: NaiveDate,
) -> bool {
    if ctx.index.company_day_off() == Some(date) {
        return true;
    }
    !ctx.index.shows_on(date).is_empty() && schedule.is_free_on(ctx.index, name, date)
}

/// Number of consecutive appearances directly before and after `show`.
fn run_around(
    ctx: &GenerationContext<'_>,
    schedule: &WorkingSchedule,
    name: &str,
    show: usize,
) -> usize {
    let mut run = 0;
    let mut cursor = show;
    while cursor > 0
        && schedule.is_on_show(cursor - 1, name)
        && ctx.index.consecutive(cursor - 1, cursor)
    {
        run += 1;
        cursor -= 1;
    }
    cursor = show;
    while cursor + 1 < ctx.index.len()
        && schedule.is_on_show(cursor + 1, name)
        && ctx.index.consecutive(cursor, cursor + 1)
    {
        run += 1;
        cursor += 1;
    }
    run
}

/// Ranks every performer without a role in `show`, best OFF candidate first.
pub fn rank_off_candidates<R: Rng + ?Sized>(
    ctx: &GenerationContext<'_>,
    schedule: &WorkingSchedule,
    show: usize,
    rng: &mut R,
) -> Result<Vec<String>, ScheduleError> {
    let date = ctx
        .index
        .shows()
        .get(show)
        .map(|s| s.date)
        .ok_or_else(|| ScheduleError::UnknownShow(format!("#{show}")))?;
    let baseline = usize::from(ctx.index.company_day_off().is_some());

    let mut candidates: Vec<&str> = ctx
        .cast
        .iter()
        .map(|m| m.name.as_str())
        .filter(|name| !schedule.is_on_show(show, name))
        .collect();
    candidates.shuffle(rng);

    let mut scored: Vec<(OffScore, &str)> = candidates
        .into_iter()
        .map(|name| {
            let days_off = ctx
                .index
                .dates()
                .filter(|&d| d != date && schedule.is_free_on(ctx.index, name, d))
                .count()
                + baseline;
            let idle_today = schedule.is_free_on(ctx.index, name, date);
            let idles_adjacent_days = idle_today
                && [date - Duration::days(1), date + Duration::days(1)]
                    .iter()
                    .any(|&d| is_idle(ctx, schedule, name, d));
            let score = OffScore {
                already_rested: days_off > baseline,
                idles_adjacent_days,
                load: Reverse(schedule.show_count_for(name)),
                run: Reverse(run_around(ctx, schedule, name, show)),
            };
            (score, name)
        })
        .collect();
    scored.sort_by_key(|(score, _)| *score);

    Ok(scored.into_iter().map(|(_, name)| name.to_string()).collect())
}

/// Selects the OFF list for a show.
///
/// Uses [`rank_off_candidates`]; if it fails or returns the wrong number of
/// names, falls back to a random order of the performers without a role.
pub fn choose_off<R: Rng + ?Sized>(
    ctx: &GenerationContext<'_>,
    schedule: &WorkingSchedule,
    show: usize,
    rng: &mut R,
) -> Vec<String> {
    let expected = ctx
        .cast
        .iter()
        .filter(|m| !schedule.is_on_show(show, &m.name))
        .count();

    let ranked = rank_off_candidates(ctx, schedule, show, rng).and_then(|names| {
        if names.len() == expected {
            Ok(names)
        } else {
            Err(ScheduleError::OffCountMismatch {
                show_id: ctx.index.show(show).id.clone(),
                expected,
                got: names.len(),
            })
        }
    });

    match ranked {
        Ok(names) => names,
        Err(e) => {
            tracing::warn!(error = %e, "OFF ranking failed; using random selection");
            let mut names: Vec<String> = ctx
                .cast
                .iter()
                .filter(|m| !schedule.is_on_show(show, &m.name))
                .map(|m| m.name.clone())
                .collect();
            names.shuffle(rng);
            names
        }
    }
}
