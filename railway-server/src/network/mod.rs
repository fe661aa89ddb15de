//! In-memory station graph.
//!
//! Each station named in a dataset becomes one node, deduplicated by
//! name across routes; every adjacent pair of stops on a route
//! contributes a link in both directions. The graph is rebuilt from
//! the dataset for every query and never mutated afterwards, so a
//! search can be handed a shared reference.

use std::collections::HashMap;

use crate::dataset::Route;

/// Index of a station within its owning [`Network`].
///
/// Links name their target by id rather than by reference, so a link
/// is meaningful exactly as long as the network that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StationId(pub usize);

/// A directed, line-labelled, distance-weighted edge.
#[derive(Debug, Clone)]
pub struct Link {
    /// Name of the route this link travels on.
    pub line: String,

    /// Target station.
    pub to: StationId,

    /// Display name of the target, denormalized for narration.
    pub to_name: String,

    /// Distance to the target; 0 when the dataset records none.
    pub distance: f64,
}

/// A named node and its outgoing links.
#[derive(Debug, Clone)]
pub struct Station {
    /// Unique name within the network; case-sensitive.
    pub name: String,

    /// Outgoing links in insertion order.
    pub links: Vec<Link>,
}

/// The full station graph for one query.
#[derive(Debug, Clone, Default)]
pub struct Network {
    stations: Vec<Station>,
    by_name: HashMap<String, StationId>,
}

impl Network {
    /// Build a network from route data.
    ///
    /// For each adjacent stop pair a link is added in both directions.
    /// A distance missing on one side of the adjacency falls back to
    /// the other side's declaration, then to 0, so a half-specified
    /// pair still links symmetrically. A station appearing on several
    /// routes is a single node carrying links from every route.
    pub fn build(routes: &[Route]) -> Self {
        let mut network = Network::default();

        for route in routes {
            let stops = &route.stops;
            for (i, stop) in stops.iter().enumerate() {
                let current = network.get_or_create(&stop.station_name);

                // Forward link: current stop -> next stop
                if let Some(next) = stops.get(i + 1) {
                    let distance = next
                        .distance_to_prev
                        .or(stop.distance_to_next)
                        .unwrap_or(0.0);
                    let target = network.get_or_create(&next.station_name);
                    network.add_link(current, target, &route.name, distance);
                }

                // Backward link: current stop -> previous stop
                if i > 0 {
                    let prev = &stops[i - 1];
                    let distance = stop
                        .distance_to_prev
                        .or(prev.distance_to_next)
                        .unwrap_or(0.0);
                    let target = network.get_or_create(&prev.station_name);
                    network.add_link(current, target, &route.name, distance);
                }
            }
        }

        network
    }

    /// Look up a station id by exact name.
    pub fn station_id(&self, name: &str) -> Option<StationId> {
        self.by_name.get(name).copied()
    }

    /// Access a station by id.
    pub fn station(&self, id: StationId) -> &Station {
        &self.stations[id.0]
    }

    /// All stations in creation order.
    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    /// Number of distinct stations.
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    /// Returns true if the network has no stations.
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    fn get_or_create(&mut self, name: &str) -> StationId {
        if let Some(id) = self.by_name.get(name) {
            return *id;
        }
        let id = StationId(self.stations.len());
        self.stations.push(Station {
            name: name.to_string(),
            links: Vec::new(),
        });
        self.by_name.insert(name.to_string(), id);
        id
    }

    fn add_link(&mut self, from: StationId, to: StationId, line: &str, distance: f64) {
        let to_name = self.stations[to.0].name.clone();
        self.stations[from.0].links.push(Link {
            line: line.to_string(),
            to,
            to_name,
            distance,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Stop;

    fn stop(name: &str, next: Option<f64>, prev: Option<f64>) -> Stop {
        Stop {
            station_id: None,
            station_name: name.to_string(),
            distance_to_next: next,
            distance_to_prev: prev,
        }
    }

    fn route(name: &str, stops: Vec<Stop>) -> Route {
        Route {
            name: name.to_string(),
            color: None,
            stops,
        }
    }

    fn link_between<'a>(network: &'a Network, from: &str, to: &str) -> &'a Link {
        let id = network.station_id(from).unwrap();
        network
            .station(id)
            .links
            .iter()
            .find(|l| l.to_name == to)
            .unwrap()
    }

    #[test]
    fn builds_links_in_both_directions() {
        let routes = vec![route(
            "Red",
            vec![
                stop("X", Some(5.0), None),
                stop("Y", Some(7.0), None),
                stop("Z", None, None),
            ],
        )];
        let network = Network::build(&routes);

        assert_eq!(network.len(), 3);
        assert_eq!(link_between(&network, "X", "Y").distance, 5.0);
        assert_eq!(link_between(&network, "Y", "X").distance, 5.0);
        assert_eq!(link_between(&network, "Y", "Z").distance, 7.0);
        assert_eq!(link_between(&network, "Z", "Y").distance, 7.0);
    }

    #[test]
    fn distance_to_prev_wins_over_distance_to_next() {
        // The next stop declares 9 back to us; our own forward value
        // of 5 is the fallback and must lose.
        let routes = vec![route(
            "Red",
            vec![stop("X", Some(5.0), None), stop("Y", None, Some(9.0))],
        )];
        let network = Network::build(&routes);

        assert_eq!(link_between(&network, "X", "Y").distance, 9.0);
        assert_eq!(link_between(&network, "Y", "X").distance, 9.0);
    }

    #[test]
    fn missing_distances_fall_back_to_zero() {
        let routes = vec![route(
            "ZeroLine",
            vec![stop("Zero1", None, None), stop("Zero2", None, None)],
        )];
        let network = Network::build(&routes);

        assert_eq!(link_between(&network, "Zero1", "Zero2").distance, 0.0);
        assert_eq!(link_between(&network, "Zero2", "Zero1").distance, 0.0);
    }

    #[test]
    fn stations_deduplicated_across_routes() {
        let routes = vec![
            route(
                "Red",
                vec![stop("A", Some(5.0), None), stop("Xfer", None, None)],
            ),
            route(
                "Blue",
                vec![stop("Xfer", Some(4.0), None), stop("D", None, None)],
            ),
        ];
        let network = Network::build(&routes);

        assert_eq!(network.len(), 3);

        // Xfer is one node with links from both lines
        let xfer = network.station(network.station_id("Xfer").unwrap());
        let lines: Vec<&str> = xfer.links.iter().map(|l| l.line.as_str()).collect();
        assert!(lines.contains(&"Red"));
        assert!(lines.contains(&"Blue"));
    }

    #[test]
    fn links_carry_their_route_name() {
        let routes = vec![route(
            "Coastal",
            vec![stop("A", Some(1.0), None), stop("B", None, None)],
        )];
        let network = Network::build(&routes);

        assert_eq!(link_between(&network, "A", "B").line, "Coastal");
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let routes = vec![route("Red", vec![stop("Alpha", None, None)])];
        let network = Network::build(&routes);

        assert!(network.station_id("Alpha").is_some());
        assert!(network.station_id("alpha").is_none());
    }

    #[test]
    fn empty_routes_build_empty_network() {
        let network = Network::build(&[]);
        assert!(network.is_empty());
        assert_eq!(network.station_id("A"), None);
    }

    #[test]
    fn single_stop_route_has_no_links() {
        let routes = vec![route("Lonely", vec![stop("Only", None, None)])];
        let network = Network::build(&routes);

        assert_eq!(network.len(), 1);
        let only = network.station(network.station_id("Only").unwrap());
        assert!(only.links.is_empty());
    }
}
