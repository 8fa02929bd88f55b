//! Constructive assignment strategies.
//!
//! # Algorithm (`RandomizedGreedy`)
//!
//! 1. Shuffle the show order (Fisher–Yates).
//! 2. For each show, shuffle the roles, then stable-sort them by scarcity
//!    (fewest eligible performers first).
//! 3. For each role, collect every performer the [`ConstraintChecker`]
//!    accepts and pick among the least loaded (within one show of the
//!    minimum) at random.
//! 4. A role with no legal candidate fails the whole attempt. There is no
//!    per-decision backtracking; the caller retries from scratch.
//! 5. With every role filled, rank the remaining performers for OFF.
//!
//! # Complexity
//! O(s * r * p) per attempt, where s=shows, r=roles, p=performers.

use rand::seq::{IndexedRandom, SliceRandom};
use rand::{Rng, RngCore};
use std::fmt::Debug;

use super::constraints::ConstraintChecker;
use super::off_selection::choose_off;
use super::{ShowIndex, WorkingSchedule};
use crate::config::SchedulerConfig;
use crate::models::{CastMember, Role, RoleCatalog};

/// Read-only inputs for one attempt.
#[derive(Debug, Clone)]
pub struct GenerationContext<'a> {
    /// Show order for this attempt.
    pub index: &'a ShowIndex,
    /// Roster.
    pub cast: &'a [CastMember],
    /// Roles to fill.
    pub catalog: &'a RoleCatalog,
    /// Limits.
    pub config: &'a SchedulerConfig,
    scarcity: Vec<(Role, usize)>,
}

impl<'a> GenerationContext<'a> {
    /// Creates a context, counting eligible performers per role.
    pub fn new(
        index: &'a ShowIndex,
        cast: &'a [CastMember],
        catalog: &'a RoleCatalog,
        config: &'a SchedulerConfig,
    ) -> Self {
        let scarcity = catalog
            .roles()
            .map(|role| {
                let eligible = cast.iter().filter(|m| m.can_play(role, catalog)).count();
                (role, eligible)
            })
            .collect();
        Self {
            index,
            cast,
            catalog,
            config,
            scarcity,
        }
    }

    /// Constraint checker over this context.
    pub fn checker(&self) -> ConstraintChecker<'a> {
        ConstraintChecker::new(self.index, self.catalog, self.config)
    }

    /// Number of performers eligible for a role.
    pub fn eligible_count(&self, role: Role) -> usize {
        self.scarcity
            .iter()
            .find(|(r, _)| *r == role)
            .map_or(0, |(_, n)| *n)
    }

    /// Catalog roles, scarcest first. Ties keep catalog order.
    pub fn roles_by_scarcity(&self) -> Vec<Role> {
        let mut roles: Vec<(Role, usize)> = self.scarcity.clone();
        roles.sort_by_key(|&(_, n)| n);
        roles.into_iter().map(|(r, _)| r).collect()
    }

    /// Catalog roles shuffled, then scarcest first. Ties stay shuffled.
    pub fn shuffled_roles_by_scarcity<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<Role> {
        let mut roles: Vec<(Role, usize)> = self.scarcity.clone();
        roles.shuffle(rng);
        roles.sort_by_key(|&(_, n)| n);
        roles.into_iter().map(|(r, _)| r).collect()
    }

    /// Number of performers OFF in every fully staffed show.
    pub fn off_per_show(&self) -> usize {
        self.cast.len().saturating_sub(self.catalog.role_count())
    }
}

/// A constructive search that tries to fill a whole week in one pass.
///
/// `attempt` starts from an empty [`WorkingSchedule`] and reports whether
/// every role in every show was filled. Retrying is the caller's job.
pub trait AssignmentStrategy: Debug {
    /// Strategy name.
    fn name(&self) -> &'static str;

    /// Fills `schedule`. Returns `false` as soon as a slot cannot be filled.
    fn attempt(
        &self,
        ctx: &GenerationContext<'_>,
        schedule: &mut WorkingSchedule,
        rng: &mut dyn RngCore,
    ) -> bool;
}

/// Picks a performer among the least loaded, allowing `slack` extra shows.
///
/// With `slack = 1`, anyone within one show of the minimum is equally
/// likely.
pub fn pick_balanced<'c, R: Rng + ?Sized>(
    candidates: &[&'c CastMember],
    schedule: &WorkingSchedule,
    slack: usize,
    rng: &mut R,
) -> Option<&'c CastMember> {
    let min = candidates
        .iter()
        .map(|m| schedule.show_count_for(&m.name))
        .min()?;
    let pool: Vec<&'c CastMember> = candidates
        .iter()
        .copied()
        .filter(|m| schedule.show_count_for(&m.name) <= min + slack)
        .collect();
    pool.choose(rng).copied()
}

/// Randomized greedy fill with load-balanced tie-breaking.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomizedGreedy;

impl AssignmentStrategy for RandomizedGreedy {
    fn name(&self) -> &'static str {
        "randomized-greedy"
    }

    fn attempt(
        &self,
        ctx: &GenerationContext<'_>,
        schedule: &mut WorkingSchedule,
        rng: &mut dyn RngCore,
    ) -> bool {
        let checker = ctx.checker();
        let mut order: Vec<usize> = (0..ctx.index.len()).collect();
        order.shuffle(rng);

        for &show in &order {
            for role in ctx.shuffled_roles_by_scarcity(rng) {
                let candidates: Vec<&CastMember> = ctx
                    .cast
                    .iter()
                    .filter(|m| checker.can_assign(schedule, m, show, role))
                    .collect();
                let Some(chosen) = pick_balanced(&candidates, schedule, 1, rng) else {
                    tracing::trace!(
                        show = %ctx.index.show(show).id,
                        role = %role,
                        "no legal candidate"
                    );
                    return false;
                };
                schedule.assign(show, role, &chosen.name);
            }
        }

        for show in 0..ctx.index.len() {
            let off = choose_off(ctx, schedule, show, rng);
            schedule.set_off(show, off);
        }
        true
    }
}
