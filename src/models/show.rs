//! Show model.
//!
//! A show is one scheduled slot in the week. Only shows with
//! [`ShowStatus::Show`] need staffing; `Travel` entries are informational
//! and `DayOff` marks a company-wide day off.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// Kind of calendar entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ShowStatus {
    /// A performance that must be staffed.
    #[default]
    Show,
    /// Company is travelling.
    Travel,
    /// Company-wide day off.
    DayOff,
}

/// A calendar entry for one week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Show {
    /// Unique identifier.
    pub id: String,
    /// Calendar date.
    pub date: NaiveDate,
    /// Curtain-up time.
    pub time: NaiveTime,
    /// Time performers must arrive.
    #[serde(default)]
    pub call_time: Option<NaiveTime>,
    /// Entry kind.
    #[serde(default)]
    pub status: ShowStatus,
}

impl Show {
    /// Creates a performance entry.
    pub fn new(id: impl Into<String>, date: NaiveDate, time: NaiveTime) -> Self {
        Self {
            id: id.into(),
            date,
            time,
            call_time: None,
            status: ShowStatus::Show,
        }
    }

    /// Creates a company day-off entry.
    pub fn day_off(id: impl Into<String>, date: NaiveDate) -> Self {
        Self::new(id, date, NaiveTime::MIN).with_status(ShowStatus::DayOff)
    }

    /// Sets the status.
    pub fn with_status(mut self, status: ShowStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the call time.
    pub fn with_call_time(mut self, call_time: NaiveTime) -> Self {
        self.call_time = Some(call_time);
        self
    }

    /// Whether the entry needs staffing.
    #[inline]
    pub fn is_performance(&self) -> bool {
        self.status == ShowStatus::Show
    }

    /// Date and time combined.
    #[inline]
    pub fn starts_at(&self) -> NaiveDateTime {
        self.date.and_time(self.time)
    }
}
