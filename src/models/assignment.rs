//! Assignment rows and the generation result.
//!
//! A finished week is a flat list of [`Assignment`] rows: one per
//! (staffed show, performer), holding either a role or OFF. OFF rows on a
//! performer's RED day carry `is_red_day = true`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

use super::{Position, Role};

/// One performer's position for one show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    /// Show identifier.
    pub show_id: String,
    /// Role held, or OFF.
    pub role: Position,
    /// Performer name.
    pub performer: String,
    /// Whether this OFF row is the performer's RED day.
    #[serde(default)]
    pub is_red_day: bool,
}

impl Assignment {
    /// A performing row.
    pub fn on_stage(show_id: impl Into<String>, role: Role, performer: impl Into<String>) -> Self {
        Self {
            show_id: show_id.into(),
            role: Position::Role(role),
            performer: performer.into(),
            is_red_day: false,
        }
    }

    /// An OFF row.
    pub fn off(show_id: impl Into<String>, performer: impl Into<String>) -> Self {
        Self {
            show_id: show_id.into(),
            role: Position::Off,
            performer: performer.into(),
            is_red_day: false,
        }
    }

    /// Marks the row as a RED day.
    pub fn with_red_day(mut self, is_red_day: bool) -> Self {
        self.is_red_day = is_red_day;
        self
    }

    /// Whether the performer is on stage.
    #[inline]
    pub fn is_on_stage(&self) -> bool {
        !self.role.is_off()
    }
}

/// Outcome of one call to the generator.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AutoGenerateResult {
    /// Whether any schedule was produced.
    pub success: bool,
    /// The schedule rows.
    pub assignments: Vec<Assignment>,
    /// Hard problems: unfilled slots, broken rules, failures.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
    /// Advisory findings.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
    /// Full days off per performer.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub day_off_stats: BTreeMap<String, usize>,
    /// Random token for tracing a run.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generation_id: Option<Uuid>,
    /// When the run finished.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated_at: Option<DateTime<Utc>>,
}

impl AutoGenerateResult {
    /// A failed run carrying error messages and nothing else.
    pub fn failure(errors: Vec<String>) -> Self {
        Self {
            success: false,
            errors,
            ..Default::default()
        }
    }

    /// Rows for one show.
    pub fn assignments_for_show(&self, show_id: &str) -> Vec<&Assignment> {
        self.assignments
            .iter()
            .filter(|a| a.show_id == show_id)
            .collect()
    }

    /// Rows for one performer.
    pub fn assignments_for_performer(&self, performer: &str) -> Vec<&Assignment> {
        self.assignments
            .iter()
            .filter(|a| a.performer == performer)
            .collect()
    }

    /// Number of shows the performer is on stage for.
    pub fn show_count(&self, performer: &str) -> usize {
        self.assignments
            .iter()
            .filter(|a| a.performer == performer && a.is_on_stage())
            .count()
    }
}
