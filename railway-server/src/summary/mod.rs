//! Network and route reporting.
//!
//! Plain field lookups and string formatting over a parsed dataset:
//! the overview of a network, per-route summaries, and distances
//! along a single declared route. None of this touches the station
//! graph; routes are read exactly as the dataset declares them.

use std::collections::HashSet;

use crate::dataset::{RailwayData, Route};

/// Total declared length of a route: the sum of its recorded
/// distance-to-next values.
pub fn route_distance(route: &Route) -> f64 {
    route.stops.iter().filter_map(|s| s.distance_to_next).sum()
}

/// Number of distinct station names across all routes.
pub fn distinct_station_count(data: &RailwayData) -> usize {
    let mut seen = HashSet::new();
    for route in &data.routes {
        for stop in &route.stops {
            seen.insert(stop.station_name.as_str());
        }
    }
    seen.len()
}

/// One-block overview of a dataset: name, route and station counts,
/// and the route names.
pub fn network_overview(data: &RailwayData) -> String {
    let name = data.network_name.as_deref().unwrap_or("Unnamed network");
    let routes = data.routes.len();
    let stations = distinct_station_count(data);

    let route_line = if routes == 1 {
        "There is 1 route on this network".to_string()
    } else {
        format!("There are {routes} routes on this network")
    };
    let station_line = if stations == 1 {
        "There is 1 station in this network".to_string()
    } else {
        format!("There are {stations} stations in this network")
    };

    let names: Vec<&str> = data.routes.iter().map(|r| r.name.as_str()).collect();

    format!(
        "{name}\n{route_line}\n{station_line}\nRoutes: {}",
        names.join(", ")
    )
}

/// `Routes Summary` block: one line per non-empty route with its
/// endpoints and total declared distance.
pub fn routes_summary(data: &RailwayData) -> String {
    let mut lines = vec!["Routes Summary".to_string(), "==============".to_string()];

    for route in &data.routes {
        let (Some(first), Some(last)) = (route.stops.first(), route.stops.last()) else {
            continue;
        };
        lines.push(format!(
            "{} ({}): {} -> {}, {} miles",
            route.name,
            route.color.as_deref().unwrap_or(""),
            first.station_name,
            last.station_name,
            route_distance(route)
        ));
    }

    lines.join("\n")
}

/// Numbered stop listing for one route with cumulative mileage.
pub fn route_details(route: &Route) -> String {
    let mut text = format!(
        "ROUTE: {} ({})\nSTATIONS:",
        route.name,
        route.color.as_deref().unwrap_or("")
    );

    let mut miles = 0.0;
    for (i, stop) in route.stops.iter().enumerate() {
        text.push_str(&format!("\n{} {} {miles} miles", i + 1, stop.station_name));
        if let Some(d) = stop.distance_to_next {
            miles += d;
        }
    }
    text.push_str(&format!("\nTotal Route Distance: {miles} miles"));

    text
}

/// The route with the greatest total declared distance, rendered with
/// its full stop listing. `None` when the dataset has no routes.
pub fn longest_route(data: &RailwayData) -> Option<String> {
    let mut best: Option<&Route> = None;
    for route in &data.routes {
        if best.map_or(true, |b| route_distance(route) > route_distance(b)) {
            best = Some(route);
        }
    }

    best.map(|route| format!("Longest route is: {}", route_details(route)))
}

/// Look up a route by exact name.
pub fn find_route<'a>(data: &'a RailwayData, name: &str) -> Option<&'a Route> {
    data.routes.iter().find(|r| r.name == name)
}

/// Describe a single-route connection between two named stops.
///
/// Scans the routes for one serving both stops and reports the stop
/// count and mileage between them; otherwise a no-direct-route
/// message. Mileage sums the declared distance-to-next values between
/// the two positions, whichever order they appear in.
pub fn direct_route_between(data: &RailwayData, start: &str, end: &str) -> String {
    for route in &data.routes {
        let a = route.stops.iter().position(|s| s.station_name == start);
        let b = route.stops.iter().position(|s| s.station_name == end);
        let (Some(a), Some(b)) = (a, b) else {
            continue;
        };

        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let miles: f64 = route.stops[lo..hi]
            .iter()
            .filter_map(|s| s.distance_to_next)
            .sum();

        return format!(
            "{}: {start} to {end} {} stops and {miles} miles",
            route.name,
            hi - lo
        );
    }

    format!("No direct route found between {start} and {end}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Stop;

    fn stop(name: &str, next: Option<f64>) -> Stop {
        Stop {
            station_id: None,
            station_name: name.to_string(),
            distance_to_next: next,
            distance_to_prev: None,
        }
    }

    fn route(name: &str, color: Option<&str>, stops: Vec<Stop>) -> Route {
        Route {
            name: name.to_string(),
            color: color.map(str::to_string),
            stops,
        }
    }

    fn sample_data() -> RailwayData {
        RailwayData {
            network_name: Some("Test Net".to_string()),
            routes: vec![
                route(
                    "Red",
                    Some("red"),
                    vec![
                        stop("A", Some(5.0)),
                        stop("B", Some(7.0)),
                        stop("Xfer", None),
                    ],
                ),
                route(
                    "Blue",
                    Some("blue"),
                    vec![stop("Xfer", Some(4.0)), stop("D", None)],
                ),
            ],
        }
    }

    #[test]
    fn route_distance_sums_declared_values() {
        let data = sample_data();
        assert_eq!(route_distance(&data.routes[0]), 12.0);
        assert_eq!(route_distance(&data.routes[1]), 4.0);
    }

    #[test]
    fn distinct_stations_counted_once() {
        // Xfer appears on both routes but counts once
        assert_eq!(distinct_station_count(&sample_data()), 5);
    }

    #[test]
    fn overview_lists_counts_and_names() {
        let overview = network_overview(&sample_data());

        assert_eq!(
            overview,
            "Test Net\n\
             There are 2 routes on this network\n\
             There are 5 stations in this network\n\
             Routes: Red, Blue"
        );
    }

    #[test]
    fn overview_grammar_for_single_route() {
        let data = RailwayData {
            network_name: None,
            routes: vec![route("Only", None, vec![stop("Solo", None)])],
        };
        let overview = network_overview(&data);

        assert!(overview.starts_with("Unnamed network\n"));
        assert!(overview.contains("There is 1 route on this network"));
        assert!(overview.contains("There is 1 station in this network"));
    }

    #[test]
    fn routes_summary_block() {
        let summary = routes_summary(&sample_data());

        assert_eq!(
            summary,
            "Routes Summary\n\
             ==============\n\
             Red (red): A -> Xfer, 12 miles\n\
             Blue (blue): Xfer -> D, 4 miles"
        );
    }

    #[test]
    fn routes_summary_skips_empty_routes() {
        let mut data = sample_data();
        data.routes.push(route("Ghost", None, vec![]));

        let summary = routes_summary(&data);
        assert!(!summary.contains("Ghost"));
    }

    #[test]
    fn route_details_numbered_with_cumulative_miles() {
        let data = sample_data();
        let details = route_details(&data.routes[0]);

        assert_eq!(
            details,
            "ROUTE: Red (red)\n\
             STATIONS:\n\
             1 A 0 miles\n\
             2 B 5 miles\n\
             3 Xfer 12 miles\n\
             Total Route Distance: 12 miles"
        );
    }

    #[test]
    fn longest_route_picks_greatest_distance() {
        let text = longest_route(&sample_data()).unwrap();

        assert!(text.starts_with("Longest route is: ROUTE: Red (red)"));
        assert!(text.ends_with("Total Route Distance: 12 miles"));
    }

    #[test]
    fn longest_route_of_empty_dataset_is_none() {
        let data = RailwayData {
            network_name: None,
            routes: vec![],
        };
        assert!(longest_route(&data).is_none());
    }

    #[test]
    fn find_route_is_exact() {
        let data = sample_data();

        assert!(find_route(&data, "Red").is_some());
        assert!(find_route(&data, "red").is_none());
        assert!(find_route(&data, "Green").is_none());
    }

    #[test]
    fn direct_route_reports_stops_and_miles() {
        let data = sample_data();

        assert_eq!(
            direct_route_between(&data, "A", "Xfer"),
            "Red: A to Xfer 2 stops and 12 miles"
        );
        // Same answer when asked in the other direction
        assert_eq!(
            direct_route_between(&data, "Xfer", "A"),
            "Red: Xfer to A 2 stops and 12 miles"
        );
    }

    #[test]
    fn direct_route_missing_pair_is_reported() {
        let data = sample_data();

        assert_eq!(
            direct_route_between(&data, "A", "D"),
            "No direct route found between A and D"
        );
    }
}
