//! Railway dataset types and file loading.
//!
//! A dataset is a JSON document describing a named network of routes,
//! each an ordered list of stops. Deserialization is strict about
//! structure (a route without a name or a stops list fails to parse),
//! so code that receives these types can trust their shape.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Errors raised while locating, reading, or parsing a dataset file.
///
/// Any of these means no network can be built from the request; they
/// surface before a search begins and are never retried.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    /// File name was empty or tried to escape the data directory
    #[error("invalid dataset name: {0:?}")]
    InvalidName(String),

    /// Could not read the file
    #[error("failed to read dataset {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File contents were not a valid dataset
    #[error("failed to parse dataset {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// One stop on a route.
///
/// Distances may be declared on either side of an adjacency (or both,
/// or neither); the network builder reconciles them.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stop {
    /// Dataset-wide numeric station id, when the dataset records one.
    #[serde(rename = "stationID", default)]
    pub station_id: Option<u32>,

    /// Display name; station identity within the network.
    pub station_name: String,

    /// Distance to the following stop on this route.
    #[serde(default)]
    pub distance_to_next: Option<f64>,

    /// Distance to the preceding stop on this route.
    #[serde(default)]
    pub distance_to_prev: Option<f64>,
}

/// A named route: an ordered sequence of stops.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    /// Route (line) name.
    pub name: String,

    /// Display color.
    #[serde(default)]
    pub color: Option<String>,

    /// Stops in running order.
    pub stops: Vec<Stop>,
}

/// A full railway dataset.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RailwayData {
    /// Network display name.
    #[serde(default)]
    pub network_name: Option<String>,

    /// All declared routes.
    pub routes: Vec<Route>,
}

/// Resolve `file_name` inside `data_dir`, read it, and parse it as a
/// dataset.
///
/// The name must be a bare file name: anything empty or containing a
/// path separator is rejected, so callers cannot reach outside the
/// data directory.
pub fn load_dataset(data_dir: &Path, file_name: &str) -> Result<RailwayData, DatasetError> {
    if file_name.is_empty() || file_name == ".." || file_name.contains(['/', '\\']) {
        return Err(DatasetError::InvalidName(file_name.to_string()));
    }

    let path = data_dir.join(file_name);
    let raw = std::fs::read_to_string(&path).map_err(|source| DatasetError::Io {
        path: path.clone(),
        source,
    })?;

    serde_json::from_str(&raw).map_err(|source| DatasetError::Parse { path, source })
}
