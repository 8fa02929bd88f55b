//! In-progress assignment state for one attempt.

use chrono::NaiveDate;
use std::collections::{BTreeMap, BTreeSet};

use super::ShowIndex;
use crate::models::{Assignment, CastMember, Role, RoleCatalog};

/// Role holders for one show. Missing roles are unfilled.
pub type ShowAssignment = BTreeMap<Role, String>;

/// Owned, mutable role and OFF state for every staffed show.
///
/// Indexed by show position in a [`ShowIndex`]. Kept consistent in both
/// directions: who holds each role, and which shows each performer is on.
#[derive(Debug, Clone, Default)]
pub struct WorkingSchedule {
    shows: Vec<ShowAssignment>,
    off: Vec<Vec<String>>,
    appearances: BTreeMap<String, BTreeSet<usize>>,
}

impl WorkingSchedule {
    /// Empty state for `show_count` shows.
    pub fn new(show_count: usize) -> Self {
        Self {
            shows: vec![ShowAssignment::new(); show_count],
            off: vec![Vec::new(); show_count],
            appearances: BTreeMap::new(),
        }
    }

    /// Number of shows tracked.
    pub fn show_count(&self) -> usize {
        self.shows.len()
    }

    /// Role holders for a show.
    pub fn roles(&self, idx: usize) -> &ShowAssignment {
        &self.shows[idx]
    }

    /// Who holds a role in a show.
    pub fn holder(&self, idx: usize, role: Role) -> Option<&str> {
        self.shows[idx].get(&role).map(String::as_str)
    }

    /// The role a performer holds in a show.
    pub fn role_of(&self, idx: usize, performer: &str) -> Option<Role> {
        self.shows[idx]
            .iter()
            .find(|(_, name)| name.as_str() == performer)
            .map(|(role, _)| *role)
    }

    /// Whether the performer holds a role in the show.
    pub fn is_on_show(&self, idx: usize, performer: &str) -> bool {
        self.appearances
            .get(performer)
            .is_some_and(|set| set.contains(&idx))
    }

    /// Shows the performer is on stage for, in show order.
    pub fn appearances(&self, performer: &str) -> impl Iterator<Item = usize> + '_ {
        self.appearances
            .get(performer)
            .into_iter()
            .flat_map(|set| set.iter().copied())
    }

    /// Number of shows the performer is on stage for.
    pub fn show_count_for(&self, performer: &str) -> usize {
        self.appearances.get(performer).map_or(0, BTreeSet::len)
    }

    /// Number of shows the performer works on a date.
    pub fn shows_on_date(&self, index: &ShowIndex, performer: &str, date: NaiveDate) -> usize {
        index
            .shows_on(date)
            .iter()
            .filter(|&&idx| self.is_on_show(idx, performer))
            .count()
    }

    /// Whether the performer has no role at all on a date.
    pub fn is_free_on(&self, index: &ShowIndex, performer: &str, date: NaiveDate) -> bool {
        self.shows_on_date(index, performer, date) == 0
    }

    /// Puts a performer in a role, replacing any previous holder.
    pub fn assign(&mut self, idx: usize, role: Role, performer: &str) {
        if let Some(previous) = self.shows[idx].insert(role, performer.to_string()) {
            self.forget(idx, &previous);
        }
        self.appearances
            .entry(performer.to_string())
            .or_default()
            .insert(idx);
        self.off[idx].retain(|name| name != performer);
    }

    /// Removes the performer's role in a show, returning it.
    pub fn vacate(&mut self, idx: usize, performer: &str) -> Option<Role> {
        let role = self.role_of(idx, performer)?;
        self.shows[idx].remove(&role);
        self.forget(idx, performer);
        Some(role)
    }

    fn forget(&mut self, idx: usize, performer: &str) {
        if let Some(set) = self.appearances.get_mut(performer) {
            set.remove(&idx);
            if set.is_empty() {
                self.appearances.remove(performer);
            }
        }
    }

    /// Records the OFF list for a show.
    pub fn set_off(&mut self, idx: usize, performers: Vec<String>) {
        self.off[idx] = performers;
    }

    /// Performers recorded OFF for a show.
    pub fn off(&self, idx: usize) -> &[String] {
        &self.off[idx]
    }

    /// Roles with no holder in a show, in catalog order.
    pub fn unfilled(&self, idx: usize, catalog: &RoleCatalog) -> Vec<Role> {
        catalog
            .roles()
            .filter(|r| !self.shows[idx].contains_key(r))
            .collect()
    }

    /// Total filled role slots.
    pub fn filled_slots(&self) -> usize {
        self.shows.iter().map(BTreeMap::len).sum()
    }

    /// Flattens into assignment rows: one per (show, performer).
    ///
    /// Role holders come first in catalog order, then everyone else OFF.
    /// OFF rows on a performer's date in `red_dates` are flagged RED.
    pub fn to_assignments(
        &self,
        index: &ShowIndex,
        cast: &[CastMember],
        catalog: &RoleCatalog,
        red_dates: &BTreeMap<String, NaiveDate>,
    ) -> Vec<Assignment> {
        let mut rows = Vec::with_capacity(index.len() * cast.len());
        for (idx, show) in index.shows().iter().enumerate() {
            for role in catalog.roles() {
                if let Some(name) = self.holder(idx, role) {
                    rows.push(Assignment::on_stage(&show.id, role, name));
                }
            }

            // Ranked OFF list first, then anyone it missed, in roster order.
            let mut off_names: Vec<&str> = self.off[idx]
                .iter()
                .map(String::as_str)
                .filter(|name| !self.is_on_show(idx, name))
                .collect();
            for member in cast {
                if !self.is_on_show(idx, &member.name) && !off_names.contains(&member.name.as_str())
                {
                    off_names.push(&member.name);
                }
            }
            for name in off_names {
                let red = red_dates.get(name) == Some(&show.date);
                rows.push(Assignment::off(&show.id, name).with_red_day(red));
            }
        }
        rows
    }
}
