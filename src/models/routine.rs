use serde::{Deserialize, Serialize};

use crate::models::lenient;
use crate::models::schedule::{ProposalRecord, ScheduleEntry};
use crate::services::schedule_utils::Minutes;

/// One task line of a generated routine, in the generator's wire shape.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScheduledTask {
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub time_slot: String,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub task_name: String,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub is_attendance_safe: bool,
    #[serde(default, deserialize_with = "lenient::minutes")]
    pub estimated_minutes: Minutes,
}

impl From<&ScheduledTask> for ProposalRecord {
    fn from(task: &ScheduledTask) -> Self {
        Self {
            interval: task.time_slot.clone(),
            label: task.task_name.clone(),
            attendance_safe: task.is_attendance_safe,
            estimated_minutes: task.estimated_minutes,
        }
    }
}

impl From<&ScheduleEntry> for ScheduledTask {
    fn from(entry: &ScheduleEntry) -> Self {
        Self {
            time_slot: entry.interval.to_string(),
            task_name: entry.label.clone(),
            is_attendance_safe: entry.attendance_safe,
            estimated_minutes: entry.estimated_minutes,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct RoutineMetadata {
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub confidence_score: f64,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub energy_peak_utilized: bool,
}

/// A full day routine as produced by the external generator. The date is
/// carried through verbatim.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailyRoutine {
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub date: String,
    #[serde(default, deserialize_with = "lenient::records")]
    pub scheduled_tasks: Vec<ScheduledTask>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub metadata: RoutineMetadata,
}
