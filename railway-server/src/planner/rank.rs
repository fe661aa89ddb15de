//! Journey ranking.
//!
//! Completed journeys are ordered by a two-key comparator: fewest
//! line changes first, shortest total distance second. Journeys tied
//! on both keys have no specified relative order.

use super::journey::Journey;

/// Rank journeys best-first and truncate to the result limit.
///
/// A limit of zero is treated as one, so a caller that mangles the
/// limit still gets a result whenever any journey exists.
pub fn rank_journeys(mut journeys: Vec<Journey>, max_results: usize) -> Vec<Journey> {
    journeys.sort_by(|a, b| {
        let changes_cmp = a.changes().cmp(&b.changes());
        if changes_cmp != std::cmp::Ordering::Equal {
            return changes_cmp;
        }
        a.distance().total_cmp(&b.distance())
    });

    journeys.truncate(max_results.max(1));
    journeys
}
