//! Exhaustive depth-first journey search.
//!
//! Enumerates every simple path (no station visited twice) between
//! two named stations, narrating line changes along the way. The
//! traversal is deliberately unpruned: the ranking comparator is
//! multi-key, so cutting branches off by distance or change count
//! during the walk could drop journeys the ranking would have kept.
//! On densely connected networks this is exponential in the station
//! count; the target datasets are small enough that correctness wins.

use tracing::debug;

use crate::network::{Network, StationId};

use super::journey::Journey;
use super::rank::rank_journeys;

/// Outcome of a journey search.
///
/// An unknown origin or destination is an expected outcome, not an
/// error: `not_found` is set and `journeys` stays empty so callers
/// can render a normal "no results" response.
#[derive(Debug, Clone, Default)]
pub struct SearchOutcome {
    /// True when the origin or destination matched no station.
    pub not_found: bool,

    /// Completed journeys, best first, at most the requested limit.
    pub journeys: Vec<Journey>,
}

impl SearchOutcome {
    fn not_found() -> Self {
        SearchOutcome {
            not_found: true,
            journeys: Vec::new(),
        }
    }
}

/// Find the best journeys from `origin` to `dest`.
///
/// Every simple path between the two stations is enumerated, ranked
/// by fewest line changes then shortest distance, and truncated to
/// `max(1, max_results)`. Station names are matched case-sensitively.
pub fn find_journeys(
    network: &Network,
    origin: &str,
    dest: &str,
    max_results: usize,
) -> SearchOutcome {
    let (Some(origin), Some(dest)) = (network.station_id(origin), network.station_id(dest)) else {
        return SearchOutcome::not_found();
    };

    let mut found = Vec::new();
    explore(network, origin, dest, Journey::new(), &mut found);
    debug!(candidates = found.len(), "path enumeration complete");

    SearchOutcome {
        not_found: false,
        journeys: rank_journeys(found, max_results),
    }
}

/// Depth-first walk from `current` towards `dest`.
///
/// The journey is owned by this branch; every surviving outgoing link
/// gets its own clone, so sibling branches cannot alias each other's
/// visited state. Exploration never continues past the destination.
fn explore(
    network: &Network,
    current: StationId,
    dest: StationId,
    mut journey: Journey,
    found: &mut Vec<Journey>,
) {
    let station = network.station(current);
    journey.visit(&station.name);

    if current == dest {
        journey.finish(&station.name);
        found.push(journey);
        return;
    }

    for link in &station.links {
        // A station may be visited at most once per journey
        if journey.has_visited(&link.to_name) {
            continue;
        }

        let mut next = journey.clone();
        next.add_distance(link.distance);
        next.take_line(&station.name, &link.line);
        explore(network, link.to, dest, next, found);
    }
}
