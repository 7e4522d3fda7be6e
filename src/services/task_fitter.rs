use tracing::debug;

use crate::models::schedule::{Anchor, Proposal, ProposalRecord, ScheduleEntry};
use crate::services::window_calculator;

/// Carves every proposal into the free windows left around `anchors`.
///
/// Proposals are fitted independently, so the output may still contain
/// proposal-vs-proposal overlap; it never overlaps an anchor. Unparsable
/// proposals and proposals fully covered by anchors produce no entries.
pub fn fit_proposals(proposals: &[ProposalRecord], anchors: &[Anchor]) -> Vec<ScheduleEntry> {
    let blockers: Vec<_> = anchors.iter().map(|anchor| anchor.range).collect();
    let mut fitted = Vec::with_capacity(proposals.len());

    for record in proposals {
        let Some(proposal) = Proposal::from_record(record) else {
            debug!(
                target: "app::schedule",
                label = %record.label,
                interval = %record.interval,
                "skipping proposal with malformed interval"
            );
            continue;
        };

        let windows = window_calculator::free_windows(proposal.range, &blockers);
        if windows.is_empty() {
            debug!(target: "app::schedule", label = %proposal.label, "proposal fully covered by anchors");
        } else if windows.len() > 1 {
            debug!(
                target: "app::schedule",
                label = %proposal.label,
                pieces = windows.len(),
                "proposal split around anchors"
            );
        }

        fitted.extend(
            windows
                .into_iter()
                .map(|window| ScheduleEntry::from_proposal(&proposal, window)),
        );
    }

    fitted
}
