//! Partial schedule fallback.
//!
//! Used only when every constructive attempt failed. Fills what it can,
//! role by role (scarcest first) and show by show (chronological), with the
//! least-loaded performer who knows the role, meets its restriction, is not
//! already in the show and is under the weekly limit. Consecutive, weekend
//! and double-day limits are not checked here.
//!
//! Slots that cannot be filled stay empty and are reported.

use rand::Rng;

use super::off_selection::choose_off;
use super::strategy::{pick_balanced, GenerationContext};
use super::WorkingSchedule;
use crate::models::CastMember;

/// Fills `schedule` as far as possible. Returns one message per empty slot.
pub fn fill_partial<R: Rng + ?Sized>(
    ctx: &GenerationContext<'_>,
    schedule: &mut WorkingSchedule,
    rng: &mut R,
) -> Vec<String> {
    let mut errors = Vec::new();

    for role in ctx.roles_by_scarcity() {
        for show in 0..ctx.index.len() {
            let candidates: Vec<&CastMember> = ctx
                .cast
                .iter()
                .filter(|m| m.can_play(role, ctx.catalog))
                .filter(|m| !schedule.is_on_show(show, &m.name))
                .filter(|m| schedule.show_count_for(&m.name) < ctx.config.max_weekly_shows)
                .collect();

            match pick_balanced(&candidates, schedule, 0, rng) {
                Some(chosen) => schedule.assign(show, role, &chosen.name),
                None => {
                    let s = ctx.index.show(show);
                    let reason = if ctx.eligible_count(role) == 0 {
                        "no eligible performer on the roster"
                    } else {
                        "every eligible performer is already in the show or at the weekly limit"
                    };
                    tracing::warn!(show = %s.id, role = %role, "slot left unfilled");
                    errors.push(format!(
                        "Could not fill {role} for show {} on {} at {}: {reason}",
                        s.id,
                        s.date,
                        s.time.format("%H:%M")
                    ));
                }
            }
        }
    }

    for show in 0..ctx.index.len() {
        let off = choose_off(ctx, schedule, show, rng);
        schedule.set_off(show, off);
    }

    errors
}
