use tracing::{debug, warn};

use crate::error::{AppError, AppResult};
use crate::models::schedule::ScheduleEntry;
use crate::models::settings::AnchorOverlapPolicy;

/// Final linear pass over a start-sorted plan that removes residual overlap.
///
/// Every entry is compared with the last kept one only:
/// - an overlapping anchor is kept as is; a preceding proposal is trimmed to
///   end where the anchor starts, or dropped when nothing is left of it;
/// - an overlapping proposal is pushed to start where the previous entry
///   ends, or dropped when nothing is left of it.
///
/// Two overlapping anchors are handled according to `policy`.
pub fn resolve_conflicts(
    entries: Vec<ScheduleEntry>,
    policy: AnchorOverlapPolicy,
) -> AppResult<Vec<ScheduleEntry>> {
    let mut resolved: Vec<ScheduleEntry> = Vec::with_capacity(entries.len());

    for entry in entries {
        let Some(previous) = resolved.last() else {
            resolved.push(entry);
            continue;
        };

        if entry.start() >= previous.end() {
            resolved.push(entry);
            continue;
        }

        if entry.is_anchor() {
            if previous.is_anchor() {
                match policy {
                    AnchorOverlapPolicy::PassThrough => {
                        warn!(
                            target: "app::schedule",
                            kept = %previous.label,
                            incoming = %entry.label,
                            "overlapping anchors passed through uncorrected"
                        );
                    }
                    AnchorOverlapPolicy::Reject => {
                        return Err(AppError::anchor_overlap(
                            format!("{} {}", previous.label, previous.interval),
                            format!("{} {}", entry.label, entry.interval),
                        ));
                    }
                }
            } else {
                match previous.interval.with_end(entry.start()) {
                    Some(trimmed) => {
                        let trimmed = previous.with_range(trimmed);
                        if let Some(last) = resolved.last_mut() {
                            *last = trimmed;
                        }
                    }
                    None => {
                        debug!(target: "app::schedule", label = %previous.label, "proposal displaced by anchor");
                        resolved.pop();
                    }
                }
            }
            resolved.push(entry);
            continue;
        }

        match entry.interval.with_start(previous.end()) {
            Some(pushed) => {
                let pushed = entry.with_range(pushed);
                resolved.push(pushed);
            }
            None => {
                debug!(target: "app::schedule", label = %entry.label, "proposal swallowed by previous entry");
            }
        }
    }

    Ok(resolved)
}
