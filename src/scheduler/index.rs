//! Show ordering for one attempt.
//!
//! Staffed shows sorted by (date, time) define the global "show order" used
//! for every adjacency question: consecutive runs, double days, weekend
//! spans. A [`ShowIndex`] is built fresh with each attempt and dropped with
//! it, so nothing derived from one attempt leaks into the next.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use std::collections::{BTreeMap, HashMap};

use crate::models::{Show, ShowStatus};

/// Whether two shows are close enough to count as consecutive.
///
/// A gap of up to `gap_days` between start times keeps a run going, so a
/// single dark day does not reset it.
pub fn are_shows_consecutive(a: &Show, b: &Show, gap_days: i64) -> bool {
    let gap = (b.starts_at() - a.starts_at()).abs();
    gap <= Duration::days(gap_days)
}

/// Key of the Friday–Sunday span a date falls in: the Monday of its ISO week.
///
/// Returns `None` for Monday–Thursday.
pub fn weekend_key(date: NaiveDate) -> Option<NaiveDate> {
    match date.weekday() {
        Weekday::Fri | Weekday::Sat | Weekday::Sun => {
            Some(date - Duration::days(date.weekday().num_days_from_monday() as i64))
        }
        _ => None,
    }
}

/// Whether the date is Monday–Friday.
#[inline]
pub fn is_weekday(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Sorted staffed shows and lookups derived from them.
#[derive(Debug, Clone)]
pub struct ShowIndex {
    shows: Vec<Show>,
    positions: HashMap<String, usize>,
    entry_dates: HashMap<String, NaiveDate>,
    by_date: BTreeMap<NaiveDate, Vec<usize>>,
    company_day_off: Option<NaiveDate>,
    day_off_entries: Vec<Show>,
    gap_days: i64,
}

impl ShowIndex {
    /// Builds the index.
    ///
    /// The earliest `DayOff` date becomes the company day off. Entries of
    /// any status on a day-off date are never staffed. Travel entries on
    /// the company day off get no rows.
    pub fn build(shows: &[Show], gap_days: i64) -> Self {
        let day_off_dates: Vec<NaiveDate> = shows
            .iter()
            .filter(|s| s.status == ShowStatus::DayOff)
            .map(|s| s.date)
            .collect();
        let company_day_off = day_off_dates.iter().min().copied();

        let mut active: Vec<Show> = shows
            .iter()
            .filter(|s| s.is_performance() && !day_off_dates.contains(&s.date))
            .cloned()
            .collect();
        active.sort_by(|a, b| (a.date, a.time, &a.id).cmp(&(b.date, b.time, &b.id)));

        let mut day_off_entries: Vec<Show> = match company_day_off {
            Some(d) => shows
                .iter()
                .filter(|s| s.date == d && s.status != ShowStatus::Travel)
                .cloned()
                .collect(),
            None => Vec::new(),
        };
        day_off_entries.sort_by(|a, b| (a.time, &a.id).cmp(&(b.time, &b.id)));

        let mut positions = HashMap::with_capacity(active.len());
        let mut by_date: BTreeMap<NaiveDate, Vec<usize>> = BTreeMap::new();
        for (idx, show) in active.iter().enumerate() {
            positions.insert(show.id.clone(), idx);
            by_date.entry(show.date).or_default().push(idx);
        }

        let entry_dates = shows.iter().map(|s| (s.id.clone(), s.date)).collect();

        Self {
            shows: active,
            positions,
            entry_dates,
            by_date,
            company_day_off,
            day_off_entries,
            gap_days,
        }
    }

    /// Number of staffed shows.
    #[inline]
    pub fn len(&self) -> usize {
        self.shows.len()
    }

    /// Whether there is nothing to staff.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.shows.is_empty()
    }

    /// Staffed shows in show order.
    pub fn shows(&self) -> &[Show] {
        &self.shows
    }

    /// Show at a position.
    #[inline]
    pub fn show(&self, idx: usize) -> &Show {
        &self.shows[idx]
    }

    /// Position of a show id, if it is staffed.
    pub fn position(&self, show_id: &str) -> Option<usize> {
        self.positions.get(show_id).copied()
    }

    /// Date of any input entry, staffed or not.
    pub fn entry_date(&self, show_id: &str) -> Option<NaiveDate> {
        self.entry_dates.get(show_id).copied()
    }

    /// Date of the show at a position.
    #[inline]
    pub fn date_of(&self, idx: usize) -> NaiveDate {
        self.shows[idx].date
    }

    /// Dates with staffed shows, ascending.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.by_date.keys().copied()
    }

    /// Positions of shows on a date.
    pub fn shows_on(&self, date: NaiveDate) -> &[usize] {
        self.by_date.get(&date).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether the date has two or more shows.
    pub fn is_double_date(&self, date: NaiveDate) -> bool {
        self.shows_on(date).len() >= 2
    }

    /// Whether shows at two positions count as consecutive.
    pub fn consecutive(&self, a: usize, b: usize) -> bool {
        are_shows_consecutive(&self.shows[a], &self.shows[b], self.gap_days)
    }

    /// The company-wide day off, if the week has one.
    pub fn company_day_off(&self) -> Option<NaiveDate> {
        self.company_day_off
    }

    /// Non-travel entries on the company day off, in time order.
    pub fn day_off_entries(&self) -> &[Show] {
        &self.day_off_entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn d(day: u32) -> NaiveDate {
        // May 2024: the 6th is a Monday.
        NaiveDate::from_ymd_opt(2024, 5, day).unwrap()
    }

    fn t(h: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, 0, 0).unwrap()
    }

    #[test]
    fn test_sorted_active_order() {
        let shows = vec![
            Show::new("sat-eve", d(11), t(19)),
            Show::new("tue", d(7), t(19)),
            Show::new("sat-mat", d(11), t(14)),
            Show::new("mon-travel", d(6), t(9)).with_status(ShowStatus::Travel),
        ];
        let idx = ShowIndex::build(&shows, 2);
        let ids: Vec<&str> = idx.shows().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["tue", "sat-mat", "sat-eve"]);
        assert_eq!(idx.position("sat-mat"), Some(1));
        assert_eq!(idx.position("mon-travel"), None);
        assert_eq!(idx.position("nope"), None);
        assert!(idx.is_double_date(d(11)));
        assert!(!idx.is_double_date(d(7)));
    }

    #[test]
    fn test_consecutive_tolerates_one_dark_day() {
        let a = Show::new("a", d(6), t(19));
        let b = Show::new("b", d(8), t(19));
        let c = Show::new("c", d(9), t(20));
        assert!(are_shows_consecutive(&a, &b, 2));
        assert!(!are_shows_consecutive(&a, &c, 2));
        assert!(are_shows_consecutive(&c, &b, 2));
    }

    #[test]
    fn test_weekend_key() {
        assert_eq!(weekend_key(d(10)), Some(d(6)));
        assert_eq!(weekend_key(d(12)), Some(d(6)));
        assert_eq!(weekend_key(d(9)), None);
        assert!(is_weekday(d(10)));
        assert!(!is_weekday(d(11)));
    }

    #[test]
    fn test_company_day_off_excluded() {
        let shows = vec![
            Show::new("tue", d(7), t(19)),
            Show::day_off("dark", d(8)),
            Show::new("wed", d(8), t(19)),
            Show::new("thu", d(9), t(19)),
        ];
        let idx = ShowIndex::build(&shows, 2);
        assert_eq!(idx.company_day_off(), Some(d(8)));
        assert_eq!(idx.len(), 2);
        assert_eq!(idx.day_off_entries().len(), 2);
        assert!(idx.shows_on(d(8)).is_empty());
        assert_eq!(idx.entry_date("wed"), Some(d(8)));
        assert_eq!(idx.entry_date("missing"), None);
    }

    #[test]
    fn test_travel_on_day_off_gets_no_entry() {
        let shows = vec![
            Show::new("tue", d(7), t(19)),
            Show::day_off("dark", d(8)),
            Show::new("bus", d(8), t(9)).with_status(ShowStatus::Travel),
        ];
        let idx = ShowIndex::build(&shows, 2);
        let ids: Vec<&str> = idx.day_off_entries().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["dark"]);
        assert_eq!(idx.entry_date("bus"), Some(d(8)));
    }
}
