//! Schedule findings.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    /// A show does not have exactly one performer per role.
    Headcount,
    /// A catalog role has no holder in a show.
    MissingRole,
    /// A performer has more than one row in a show, on stage or OFF.
    DoubleBooking,
    /// A roster performer has no row for a staffed show.
    MissingRow,
    /// A role is held by more than one performer in a show.
    RoleOverbooked,
    /// A performer plays a role they do not know.
    RoleIneligible,
    /// A performer plays a role restricted to another gender.
    GenderIneligible,
    /// A run of consecutive shows is too long.
    Consecutive,
    /// Too many shows in one Friday–Sunday span.
    Weekend,
    /// Double-show days on adjacent dates.
    BackToBack,
    /// Too many shows in the week.
    WeeklyCap,
    /// A row references a show that is not in the week.
    UnknownShow,
    /// A row references a performer not on the roster.
    UnknownPerformer,
    /// A performer holds a role on their RED day.
    RedDayConflict,
    /// A performer has more than one RED day.
    ExtraRedDay,
    /// A performer has no RED day.
    MissingRedDay,
    /// Far fewer shows than the week offers.
    Underutilized,
    /// Far more shows than the roster average.
    Overworked,
}

impl IssueKind {
    /// Whether this kind blocks acceptance of a generated attempt.
    pub fn is_critical(self) -> bool {
        matches!(
            self,
            IssueKind::Headcount
                | IssueKind::RoleIneligible
                | IssueKind::GenderIneligible
                | IssueKind::Consecutive
                | IssueKind::Weekend
                | IssueKind::BackToBack
        )
    }
}

/// One validation finding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleIssue {
    /// What was found.
    pub kind: IssueKind,
    /// Show the finding is about, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_id: Option<String>,
    /// Performer the finding is about, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub performer: Option<String>,
    /// Human-readable description.
    pub message: String,
    /// Advisory remediation text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl ScheduleIssue {
    /// Creates a finding with no show or performer attached.
    pub fn new(kind: IssueKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            show_id: None,
            performer: None,
            message: message.into(),
            suggestion: None,
        }
    }

    /// Attaches the show.
    pub fn with_show(mut self, show_id: impl Into<String>) -> Self {
        self.show_id = Some(show_id.into());
        self
    }

    /// Attaches the performer.
    pub fn with_performer(mut self, performer: impl Into<String>) -> Self {
        self.performer = Some(performer.into());
        self
    }

    /// Sets the remediation text. `None` leaves the finding without one.
    pub fn with_suggestion(mut self, suggestion: Option<String>) -> Self {
        self.suggestion = suggestion;
        self
    }
}

impl fmt::Display for ScheduleIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.suggestion {
            Some(s) => write!(f, "{} (suggestion: {s})", self.message),
            None => f.write_str(&self.message),
        }
    }
}

/// Outcome of validating a schedule.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ConstraintResult {
    /// True when there are no errors. Warnings do not count.
    pub is_valid: bool,
    pub errors: Vec<ScheduleIssue>,
    pub warnings: Vec<ScheduleIssue>,
}

impl ConstraintResult {
    /// Builds a result, deriving `is_valid` from the errors.
    pub fn new(errors: Vec<ScheduleIssue>, warnings: Vec<ScheduleIssue>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
            warnings,
        }
    }

    /// Whether any error blocks acceptance.
    pub fn has_critical_errors(&self) -> bool {
        self.errors.iter().any(|e| e.kind.is_critical())
    }

    /// Number of acceptance-blocking errors.
    pub fn critical_count(&self) -> usize {
        self.errors.iter().filter(|e| e.kind.is_critical()).count()
    }

    /// Warning messages with their suggestions, in report order.
    pub fn warning_messages(&self) -> Vec<String> {
        self.warnings.iter().map(ToString::to_string).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_critical_kinds() {
        assert!(IssueKind::Headcount.is_critical());
        assert!(IssueKind::BackToBack.is_critical());
        assert!(!IssueKind::MissingRole.is_critical());
        assert!(!IssueKind::MissingRow.is_critical());
        assert!(!IssueKind::WeeklyCap.is_critical());
        assert!(!IssueKind::Overworked.is_critical());
    }

    #[test]
    fn test_result_validity() {
        let ok = ConstraintResult::new(
            vec![],
            vec![ScheduleIssue::new(IssueKind::Underutilized, "Ana: 1 show")],
        );
        assert!(ok.is_valid);
        assert!(!ok.has_critical_errors());

        let bad = ConstraintResult::new(
            vec![
                ScheduleIssue::new(IssueKind::MissingRole, "missing Who"),
                ScheduleIssue::new(IssueKind::Headcount, "7 on stage"),
            ],
            vec![],
        );
        assert!(!bad.is_valid);
        assert!(bad.has_critical_errors());
        assert_eq!(bad.critical_count(), 1);
    }

    #[test]
    fn test_message_includes_suggestion() {
        let issue = ScheduleIssue::new(IssueKind::Overworked, "Ana is overworked")
            .with_performer("Ana")
            .with_suggestion(Some("swap with Ben".into()));
        assert_eq!(issue.to_string(), "Ana is overworked (suggestion: swap with Ben)");
    }

    #[test]
    fn test_issue_serialization() {
        let issue = ScheduleIssue::new(IssueKind::MissingRedDay, "Ana has no RED day");
        let json = serde_json::to_string(&issue).unwrap();
        assert!(json.contains("\"missing_red_day\""));
        assert!(!json.contains("show_id"));
    }
}
