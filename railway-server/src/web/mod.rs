//! Web transport layer.
//!
//! Axum routes, request/response DTOs, and shared state. Handlers
//! load the dataset named by each request, hand it to the core, and
//! serialize the results; no dataset or network outlives its request.

mod dto;
mod routes;
mod state;

pub use routes::{AppError, create_router};
pub use state::AppState;
