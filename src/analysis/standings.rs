//! Championship standings ordering.

use std::cmp::Ordering;

use crate::models::DriverSeasonSummary;

/// Sort summaries into championship order and assign 1-based positions.
///
/// Every driver gets a distinct position; ties share nothing. The order is
/// total, so the result does not depend on the input order.
pub(crate) fn rank_standings(summaries: &mut [DriverSeasonSummary]) {
    summaries.sort_by(championship_order);
    for (i, summary) in summaries.iter_mut().enumerate() {
        summary.position = (i + 1) as u32;
    }
}

/// Championship comparator: points, then wins, podiums and fastest laps
/// (all descending), then name. Driver ID breaks a full name collision so
/// the order stays total.
pub(crate) fn championship_order(a: &DriverSeasonSummary, b: &DriverSeasonSummary) -> Ordering {
    b.points
        .partial_cmp(&a.points)
        .unwrap_or(Ordering::Equal)
        .then_with(|| b.wins.cmp(&a.wins))
        .then_with(|| b.podiums.cmp(&a.podiums))
        .then_with(|| b.fastest_laps.cmp(&a.fastest_laps))
        .then_with(|| a.name.cmp(&b.name))
        .then_with(|| a.driver_id.as_str().cmp(b.driver_id.as_str()))
}
