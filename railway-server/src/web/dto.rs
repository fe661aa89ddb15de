//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::planner::{Journey, format_report};

/// Query parameters for the journey search endpoint.
#[derive(Debug, Deserialize)]
pub struct JourneyQuery {
    /// Dataset file name inside the data directory.
    pub file: String,

    /// Origin station name.
    pub origin: String,

    /// Destination station name.
    pub dest: String,

    /// Maximum journeys to return; absent or unparseable values fall
    /// back to 1.
    #[serde(default, rename = "maxResults")]
    pub max_results: Option<String>,
}

impl JourneyQuery {
    /// The requested result limit, with absent, zero, or non-numeric
    /// values treated as 1.
    pub fn limit(&self) -> usize {
        self.max_results
            .as_deref()
            .and_then(|s| s.trim().parse::<usize>().ok())
            .unwrap_or(1)
            .max(1)
    }
}

/// One ranked journey in a response.
#[derive(Debug, Serialize)]
pub struct JourneyReport {
    /// Fixed-format text block for display.
    pub report: String,

    /// Total distance travelled.
    pub distance: f64,

    /// Number of line changes.
    pub changes: usize,

    /// Stations in visiting order.
    pub stations: Vec<String>,
}

impl JourneyReport {
    /// Render a completed journey for the wire.
    pub fn from_journey(journey: &Journey) -> Self {
        Self {
            report: format_report(journey),
            distance: journey.distance(),
            changes: journey.changes(),
            stations: journey.visited().to_vec(),
        }
    }
}

/// Response for the journey search endpoint.
#[derive(Debug, Serialize)]
pub struct JourneysResponse {
    /// True when the origin or destination matched no station.
    #[serde(rename = "notFound")]
    pub not_found: bool,

    /// Ranked journeys, best first.
    pub journeys: Vec<JourneyReport>,
}

/// Query naming just a dataset file.
#[derive(Debug, Deserialize)]
pub struct DatasetQuery {
    /// Dataset file name inside the data directory.
    pub file: String,
}

/// Query for a single named route.
#[derive(Debug, Deserialize)]
pub struct RouteQuery {
    /// Dataset file name inside the data directory.
    pub file: String,

    /// Route name to look up.
    pub route: String,
}

/// Query for a direct connection between two stops.
#[derive(Debug, Deserialize)]
pub struct DirectRouteQuery {
    /// Dataset file name inside the data directory.
    pub file: String,

    /// First stop name.
    pub start: String,

    /// Second stop name.
    pub end: String,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message.
    pub error: String,
}
