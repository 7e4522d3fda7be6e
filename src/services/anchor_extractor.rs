use std::collections::HashSet;

use tracing::debug;

use crate::models::schedule::{Anchor, CommitmentRecord};
use crate::services::schedule_utils;

/// Reduces raw commitments into one disjoint, start-ordered set of anchors.
///
/// Exact `(start, end, label)` repeats are dropped after the first
/// occurrence. Remaining candidates are taken greedily in start order and a
/// candidate overlapping an already accepted anchor is discarded, so with a
/// flattened weekly timetable the earliest-listed subject owns each slot.
/// Records without a usable start or end are skipped.
pub fn extract_anchors(records: &[CommitmentRecord], default_label: &str) -> Vec<Anchor> {
    let mut seen = HashSet::new();
    let mut candidates = Vec::with_capacity(records.len());

    for (index, record) in records.iter().enumerate() {
        let start = record.start.as_deref().map(str::trim).unwrap_or_default();
        let end = record.end.as_deref().map(str::trim).unwrap_or_default();
        if start.is_empty() || end.is_empty() {
            debug!(target: "app::schedule", index, "skipping commitment without start or end");
            continue;
        }

        // a blank subject falls back to the default label too, not only a missing one
        let label = record
            .label
            .as_deref()
            .map(str::trim)
            .filter(|label| !label.is_empty())
            .unwrap_or(default_label);

        if !seen.insert((start.to_string(), end.to_string(), label.to_string())) {
            continue;
        }

        let Some(range) = schedule_utils::parse_clock_pair(start, end) else {
            debug!(target: "app::schedule", index, start, end, "skipping commitment with unparsable times");
            continue;
        };

        candidates.push(Anchor {
            range,
            label: label.to_string(),
            attendance_critical: record.attendance_critical,
        });
    }

    // stable: equal starts keep input order, so the first-listed subject wins
    candidates.sort_by_key(|candidate| candidate.range.start());

    let mut anchors: Vec<Anchor> = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        if anchors
            .iter()
            .any(|accepted| accepted.range.overlaps(&candidate.range))
        {
            debug!(
                target: "app::schedule",
                label = %candidate.label,
                slot = %candidate.range,
                "commitment slot already taken"
            );
            continue;
        }
        anchors.push(candidate);
    }

    anchors
}
