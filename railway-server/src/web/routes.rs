//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use tracing::warn;

use crate::dataset::{self, DatasetError, RailwayData};
use crate::network::Network;
use crate::planner::find_journeys;
use crate::summary;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/journeys", get(best_journeys))
        .route("/network/overview", get(network_overview))
        .route("/routes/summary", get(routes_summary))
        .route("/routes/longest", get(longest_route))
        .route("/routes/detail", get(route_detail))
        .route("/routes/direct", get(direct_route))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Load and parse the dataset named by a request.
fn load(state: &AppState, file: &str) -> Result<RailwayData, AppError> {
    dataset::load_dataset(&state.data_dir, file).map_err(AppError::from)
}

/// Best journeys between two stations.
///
/// Builds a fresh network from the dataset, enumerates and ranks the
/// journeys, and returns their formatted reports. Unknown station
/// names are a normal `notFound` response, not an error.
async fn best_journeys(
    State(state): State<AppState>,
    Query(query): Query<JourneyQuery>,
) -> Result<Json<JourneysResponse>, AppError> {
    let data = load(&state, &query.file)?;
    let network = Network::build(&data.routes);

    let outcome = find_journeys(&network, &query.origin, &query.dest, query.limit());

    Ok(Json(JourneysResponse {
        not_found: outcome.not_found,
        journeys: outcome
            .journeys
            .iter()
            .map(JourneyReport::from_journey)
            .collect(),
    }))
}

/// Overview of the network: name, counts, route names.
async fn network_overview(
    State(state): State<AppState>,
    Query(query): Query<DatasetQuery>,
) -> Result<String, AppError> {
    let data = load(&state, &query.file)?;
    Ok(summary::network_overview(&data))
}

/// Per-route endpoints and total distances.
async fn routes_summary(
    State(state): State<AppState>,
    Query(query): Query<DatasetQuery>,
) -> Result<String, AppError> {
    let data = load(&state, &query.file)?;
    Ok(summary::routes_summary(&data))
}

/// The longest declared route, with its stop listing.
async fn longest_route(
    State(state): State<AppState>,
    Query(query): Query<DatasetQuery>,
) -> Result<String, AppError> {
    let data = load(&state, &query.file)?;
    summary::longest_route(&data).ok_or_else(|| AppError::NotFound {
        message: "dataset has no routes".to_string(),
    })
}

/// Stop listing for one named route.
async fn route_detail(
    State(state): State<AppState>,
    Query(query): Query<RouteQuery>,
) -> Result<String, AppError> {
    let data = load(&state, &query.file)?;
    let route = summary::find_route(&data, &query.route).ok_or_else(|| AppError::NotFound {
        message: format!("no route named {}", query.route),
    })?;
    Ok(summary::route_details(route))
}

/// Direct single-route connection between two stops.
async fn direct_route(
    State(state): State<AppState>,
    Query(query): Query<DirectRouteQuery>,
) -> Result<String, AppError> {
    let data = load(&state, &query.file)?;
    Ok(summary::direct_route_between(&data, &query.start, &query.end))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
}

impl From<DatasetError> for AppError {
    fn from(e: DatasetError) -> Self {
        // The dataset reference is client input; any failure to
        // locate, read, or parse it is the client's request at fault.
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
        };

        warn!("[{status}] {message}");

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
