use serde::{Deserialize, Serialize};

use crate::models::lenient;
use crate::services::schedule_utils::{self, Minutes, TimeRange};

/// Raw fixed commitment as it arrives from the timetable, possibly one row
/// per weekday flattened into a single day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CommitmentRecord {
    #[serde(
        default,
        alias = "start_time",
        alias = "startTime",
        deserialize_with = "lenient::or_default"
    )]
    pub start: Option<String>,
    #[serde(
        default,
        alias = "end_time",
        alias = "endTime",
        deserialize_with = "lenient::or_default"
    )]
    pub end: Option<String>,
    #[serde(default, alias = "subject", deserialize_with = "lenient::or_default")]
    pub label: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::or_default"
    )]
    pub code: Option<String>,
    #[serde(
        default = "default_attendance_critical",
        alias = "is_attendance_critical",
        alias = "isAttendanceCritical",
        deserialize_with = "lenient::flag_or_true"
    )]
    pub attendance_critical: bool,
}

impl CommitmentRecord {
    pub fn new(start: &str, end: &str, label: &str, attendance_critical: bool) -> Self {
        Self {
            start: Some(start.to_string()),
            end: Some(end.to_string()),
            label: Some(label.to_string()),
            code: None,
            attendance_critical,
        }
    }
}

fn default_attendance_critical() -> bool {
    true
}

/// Candidate task proposed by the external generator. Untrusted: the
/// interval may be malformed and the label may mimic an anchor.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ProposalRecord {
    #[serde(
        default,
        alias = "time_slot",
        alias = "timeSlot",
        deserialize_with = "lenient::or_default"
    )]
    pub interval: String,
    #[serde(
        default,
        alias = "task_name",
        alias = "taskName",
        deserialize_with = "lenient::or_default"
    )]
    pub label: String,
    #[serde(
        default,
        alias = "is_attendance_safe",
        alias = "isAttendanceSafe",
        deserialize_with = "lenient::or_default"
    )]
    pub attendance_safe: bool,
    #[serde(default, alias = "estimatedMinutes", deserialize_with = "lenient::minutes")]
    pub estimated_minutes: Minutes,
}

impl ProposalRecord {
    pub fn new(interval: &str, label: &str, attendance_safe: bool) -> Self {
        let estimated_minutes = schedule_utils::parse_slot(interval)
            .map(|range| range.width())
            .unwrap_or_default();
        Self {
            interval: interval.to_string(),
            label: label.to_string(),
            attendance_safe,
            estimated_minutes,
        }
    }
}

impl From<&ScheduleEntry> for ProposalRecord {
    fn from(entry: &ScheduleEntry) -> Self {
        Self {
            interval: entry.interval.to_string(),
            label: entry.label.clone(),
            attendance_safe: entry.attendance_safe,
            estimated_minutes: entry.estimated_minutes,
        }
    }
}

/// Authoritative fixed commitment for the day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anchor {
    pub range: TimeRange,
    pub label: String,
    pub attendance_critical: bool,
}

/// Parsed proposal; the duration is always the interval width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Proposal {
    pub range: TimeRange,
    pub label: String,
    pub attendance_safe: bool,
}

impl Proposal {
    pub fn from_record(record: &ProposalRecord) -> Option<Self> {
        let range = schedule_utils::parse_slot(&record.interval)?;
        Some(Self {
            range,
            label: record.label.clone(),
            attendance_safe: record.attendance_safe,
        })
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    Anchor,
    Proposal,
}

/// One block of the final day plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScheduleEntry {
    pub interval: TimeRange,
    pub label: String,
    pub attendance_safe: bool,
    pub estimated_minutes: Minutes,
    pub kind: EntryKind,
}

impl ScheduleEntry {
    pub fn from_anchor(anchor: &Anchor, anchor_tag: &str) -> Self {
        Self {
            interval: anchor.range,
            label: format!("{} {}", anchor_tag, anchor.label),
            attendance_safe: !anchor.attendance_critical,
            estimated_minutes: anchor.range.width(),
            kind: EntryKind::Anchor,
        }
    }

    pub fn from_proposal(proposal: &Proposal, range: TimeRange) -> Self {
        Self {
            interval: range,
            label: proposal.label.clone(),
            attendance_safe: proposal.attendance_safe,
            estimated_minutes: range.width(),
            kind: EntryKind::Proposal,
        }
    }

    pub fn is_anchor(&self) -> bool {
        self.kind == EntryKind::Anchor
    }

    pub fn start(&self) -> Minutes {
        self.interval.start()
    }

    pub fn end(&self) -> Minutes {
        self.interval.end()
    }

    /// Same entry moved to `range`, duration recomputed.
    pub fn with_range(&self, range: TimeRange) -> Self {
        Self {
            interval: range,
            estimated_minutes: range.width(),
            ..self.clone()
        }
    }
}
