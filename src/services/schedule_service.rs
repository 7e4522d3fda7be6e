use tracing::{debug, info};

use crate::error::AppResult;
use crate::models::routine::{DailyRoutine, ScheduledTask};
use crate::models::schedule::{CommitmentRecord, ProposalRecord, ScheduleEntry};
use crate::models::settings::EngineSettings;
use crate::services::{anchor_extractor, conflict_resolver, task_fitter};

/// Builds collision-free day plans. Holds only immutable settings, so one
/// instance can serve concurrent requests.
#[derive(Debug, Clone, Default)]
pub struct ScheduleService {
    settings: EngineSettings,
}

impl ScheduleService {
    pub fn new(settings: EngineSettings) -> Self {
        Self { settings }
    }

    /// Reconciles fixed commitments with generated proposals into one
    /// start-ordered, non-overlapping plan. Anchors are never moved or
    /// resized; proposals are trimmed, split or dropped around them.
    pub fn build_day_plan(
        &self,
        commitments: &[CommitmentRecord],
        proposals: &[ProposalRecord],
    ) -> AppResult<Vec<ScheduleEntry>> {
        let anchors =
            anchor_extractor::extract_anchors(commitments, &self.settings.default_anchor_label);

        // the generator does not get to create anchors
        let flexible: Vec<ProposalRecord> = proposals
            .iter()
            .filter(|proposal| !self.is_anchor_label(&proposal.label))
            .cloned()
            .collect();
        if flexible.len() < proposals.len() {
            debug!(
                target: "app::schedule",
                discarded = proposals.len() - flexible.len(),
                "discarded proposals mimicking anchors"
            );
        }

        let fitted = task_fitter::fit_proposals(&flexible, &anchors);

        let mut merged: Vec<ScheduleEntry> = anchors
            .iter()
            .map(|anchor| ScheduleEntry::from_anchor(anchor, &self.settings.anchor_tag))
            .collect();
        merged.extend(fitted);
        merged.sort_by_key(ScheduleEntry::start);

        let plan =
            conflict_resolver::resolve_conflicts(merged, self.settings.anchor_overlap_policy)?;

        info!(
            target: "app::schedule",
            commitments = commitments.len(),
            anchors = anchors.len(),
            proposals = proposals.len(),
            entries = plan.len(),
            "day plan built"
        );

        Ok(plan)
    }

    /// Replaces the task list of a generated routine with the repaired plan,
    /// keeping its date and metadata.
    pub fn repair_routine(
        &self,
        routine: DailyRoutine,
        timetable: &[CommitmentRecord],
    ) -> AppResult<DailyRoutine> {
        let proposals: Vec<ProposalRecord> = routine
            .scheduled_tasks
            .iter()
            .map(ProposalRecord::from)
            .collect();

        let plan = self.build_day_plan(timetable, &proposals)?;
        debug!(target: "app::schedule", date = %routine.date, "routine repaired");

        Ok(DailyRoutine {
            scheduled_tasks: plan.iter().map(ScheduledTask::from).collect(),
            ..routine
        })
    }

    fn is_anchor_label(&self, label: &str) -> bool {
        label.trim_start().starts_with(&self.settings.anchor_tag)
    }
}
