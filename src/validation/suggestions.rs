//! Remediation hints attached to warnings.
//!
//! Advisory text only. Nothing here changes a schedule.

use chrono::NaiveDate;
use std::collections::BTreeMap;

use crate::models::{CastMember, RoleCatalog};
use crate::scheduler::{is_weekday, ShowIndex, WorkingSchedule};

/// Read-only view used to phrase suggestions.
#[derive(Debug, Clone, Copy)]
pub struct SuggestionContext<'a> {
    pub index: &'a ShowIndex,
    pub cast: &'a [CastMember],
    pub catalog: &'a RoleCatalog,
    pub schedule: &'a WorkingSchedule,
    pub counts: &'a BTreeMap<String, usize>,
}

impl SuggestionContext<'_> {
    fn count(&self, name: &str) -> usize {
        self.counts.get(name).copied().unwrap_or(0)
    }

    fn describe(&self, show: usize) -> String {
        let s = self.index.show(show);
        format!("show {} ({} {})", s.id, s.date, s.time.format("%H:%M"))
    }

    /// For an overworked performer: a show where a lightly used colleague
    /// could take their role.
    pub fn alternate_performer(&self, performer: &str, average: f64) -> Option<String> {
        let mut best: Option<(usize, usize, &CastMember)> = None;
        for show in self.schedule.appearances(performer) {
            let Some(role) = self.schedule.role_of(show, performer) else {
                continue;
            };
            for m in self.cast {
                if m.name == performer
                    || (self.count(&m.name) as f64) >= average
                    || !m.can_play(role, self.catalog)
                    || self.schedule.is_on_show(show, &m.name)
                {
                    continue;
                }
                let load = self.count(&m.name);
                if best.map_or(true, |(n, _, _)| load < n) {
                    best = Some((load, show, m));
                }
            }
        }
        let (load, show, m) = best?;
        let role = self.schedule.role_of(show, performer)?;
        Some(format!(
            "give {role} in {} to {}, who has {load} shows",
            self.describe(show),
            m.name
        ))
    }

    /// For an underutilized performer: a slot held by the busiest colleague
    /// they could relieve.
    pub fn relief_slot(&self, performer: &str) -> Option<String> {
        let member = self.cast.iter().find(|m| m.name == performer)?;
        let mut best: Option<(usize, usize, &str)> = None;
        for show in 0..self.index.len() {
            if self.schedule.is_on_show(show, performer) {
                continue;
            }
            for (&role, holder) in self.schedule.roles(show) {
                if !member.can_play(role, self.catalog) {
                    continue;
                }
                let load = self.count(holder);
                if best.map_or(true, |(n, _, _)| load > n) {
                    best = Some((load, show, holder.as_str()));
                }
            }
        }
        let (load, show, holder) = best?;
        let role = self.schedule.role_of(show, holder)?;
        Some(format!(
            "take over {role} in {} from {holder}, who has {load} shows",
            self.describe(show)
        ))
    }

    /// For a performer without a RED day: the best date to give them one.
    pub fn red_date(&self, performer: &str) -> Option<String> {
        if let Some(day_off) = self.index.company_day_off() {
            return Some(format!("mark {day_off} as their RED day"));
        }
        let free = self
            .index
            .dates()
            .filter(|&d| self.schedule.is_free_on(self.index, performer, d))
            .min_by_key(|&d| (!is_weekday(d), self.index.shows_on(d).len(), d));
        if let Some(date) = free {
            return Some(format!("mark {date} as their RED day; they have no role that day"));
        }
        let busy = self.index.dates().min_by_key(|&d| {
            let shows = self.schedule.shows_on_date(self.index, performer, d);
            (shows, !is_weekday(d), d)
        })?;
        Some(format!("recast their shows on {busy} and make it their RED day"))
    }

    /// For a performer with several RED days: which one to keep.
    pub fn keep_one_red_date(&self, dates: &[NaiveDate]) -> Option<String> {
        let (keep, rest) = dates.split_first()?;
        let rest: Vec<String> = rest.iter().map(ToString::to_string).collect();
        Some(format!(
            "keep {keep} as the RED day and clear the flag on {}",
            rest.join(", ")
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Role, RoleDefinition, Show};
    use chrono::NaiveTime;

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, day).unwrap()
    }

    fn setup() -> (ShowIndex, Vec<CastMember>, RoleCatalog) {
        let t = NaiveTime::from_hms_opt(19, 0, 0).unwrap();
        let shows = vec![
            Show::new("tue", d(7), t),
            Show::new("wed", d(8), t),
            Show::new("sat", d(11), t),
        ];
        let cast = ["Ana", "Ben", "Cai"]
            .iter()
            .map(|n| CastMember::new(*n).with_role(Role::Sarge))
            .collect();
        let catalog = RoleCatalog::new(vec![RoleDefinition::open(Role::Sarge)]);
        (ShowIndex::build(&shows, 2), cast, catalog)
    }

    fn counts(ws: &WorkingSchedule, cast: &[CastMember]) -> BTreeMap<String, usize> {
        cast.iter()
            .map(|m| (m.name.clone(), ws.show_count_for(&m.name)))
            .collect()
    }

    #[test]
    fn test_alternate_and_relief() {
        let (idx, cast, catalog) = setup();
        let mut ws = WorkingSchedule::new(3);
        for show in 0..3 {
            ws.assign(show, Role::Sarge, "Ana");
        }
        let counts = counts(&ws, &cast);
        let ctx = SuggestionContext {
            index: &idx,
            cast: &cast,
            catalog: &catalog,
            schedule: &ws,
            counts: &counts,
        };

        let alt = ctx.alternate_performer("Ana", 1.0).unwrap();
        assert!(alt.contains("show tue"));
        assert!(alt.contains("Ben"));

        let relief = ctx.relief_slot("Cai").unwrap();
        assert!(relief.contains("from Ana"));
        assert!(ctx.relief_slot("Nobody").is_none());
    }

    #[test]
    fn test_red_date_hints() {
        let (idx, cast, catalog) = setup();
        let mut ws = WorkingSchedule::new(3);
        ws.assign(0, Role::Sarge, "Ana");
        ws.assign(1, Role::Sarge, "Ana");
        ws.assign(2, Role::Sarge, "Ben");
        let counts = counts(&ws, &cast);
        let ctx = SuggestionContext {
            index: &idx,
            cast: &cast,
            catalog: &catalog,
            schedule: &ws,
            counts: &counts,
        };

        assert!(ctx.red_date("Ana").unwrap().contains("2024-05-11"));
        assert!(ctx.red_date("Ben").unwrap().contains("2024-05-07"));
        assert_eq!(
            ctx.keep_one_red_date(&[d(7), d(8)]).unwrap(),
            "keep 2024-05-07 as the RED day and clear the flag on 2024-05-08"
        );
        assert!(ctx.keep_one_red_date(&[]).is_none());
    }
}
