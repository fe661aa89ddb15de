//! Application state for the web layer.

use std::path::PathBuf;
use std::sync::Arc;

/// Shared application state.
///
/// Only the dataset directory is shared between requests. Each
/// request loads its own dataset and builds its own network, so there
/// is no process-wide "currently loaded" dataset to go stale.
#[derive(Clone)]
pub struct AppState {
    /// Directory containing dataset JSON files.
    pub data_dir: Arc<PathBuf>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            data_dir: Arc::new(data_dir),
        }
    }
}
