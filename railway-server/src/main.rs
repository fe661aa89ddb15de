use std::net::SocketAddr;
use std::path::PathBuf;

use railway_server::web::{AppState, create_router};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Directory the dataset JSON files are served from
    let data_dir = std::env::var("RAILWAY_DATA_DIR").unwrap_or_else(|_| {
        eprintln!("Warning: RAILWAY_DATA_DIR not set. Using ./data.");
        "data".to_string()
    });

    let state = AppState::new(PathBuf::from(data_dir));
    let app = create_router(state);

    let addr = SocketAddr::from(([127, 0, 0, 1], 3005));
    println!("Railway journey service listening on http://{addr}");
    println!();
    println!("API Endpoints:");
    println!("  GET /health            - Health check");
    println!("  GET /journeys          - Best journeys between two stations");
    println!("  GET /network/overview  - Network name and counts");
    println!("  GET /routes/summary    - Per-route endpoints and distances");
    println!("  GET /routes/longest    - Longest route with stop listing");
    println!("  GET /routes/detail     - Stop listing for one route");
    println!("  GET /routes/direct     - Direct connection between two stops");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
