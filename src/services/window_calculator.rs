use crate::services::schedule_utils::TimeRange;

/// Maximal sub-intervals of `span` not covered by any blocker, left to right.
///
/// Each blocker splits every free window it intersects into zero, one or two
/// remaining pieces. Splitting keeps the windows in order, so the result does
/// not depend on the order of `blockers`; blockers outside `span` are no-ops.
pub fn free_windows<'a, I>(span: TimeRange, blockers: I) -> Vec<TimeRange>
where
    I: IntoIterator<Item = &'a TimeRange>,
{
    let mut free = vec![span];

    for blocker in blockers {
        if free.is_empty() {
            break;
        }

        let mut remaining = Vec::with_capacity(free.len() + 1);
        for window in free {
            if !window.overlaps(blocker) {
                remaining.push(window);
                continue;
            }
            if let Some(left) = window.with_end(blocker.start()) {
                remaining.push(left);
            }
            if let Some(right) = window.with_start(blocker.end()) {
                remaining.push(right);
            }
        }
        free = remaining;
    }

    free
}
