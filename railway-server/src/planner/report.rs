//! Human-readable journey reports.
//!
//! Renders a completed journey as the fixed text block shown to the
//! traveller: a header, the narrative, totals, and the wrapped list
//! of stations passed through.

use super::journey::Journey;

/// Target column width for the wrapped station list.
const WRAP_WIDTH: usize = 80;

/// Render a completed journey as a fixed-format text block.
///
/// ```text
/// Journey Summary
/// ==============
/// Embark at A on Red
/// Arrive at B
/// Total distance: 12
/// Changes: 0
/// Passing though: A, B
/// ```
pub fn format_report(journey: &Journey) -> String {
    let mut lines = vec![
        "Journey Summary".to_string(),
        "==============".to_string(),
        journey.narrative().trim().to_string(),
        format!("Total distance: {}", journey.distance()),
        format!("Changes: {}", journey.changes()),
    ];
    lines.push(wrap_station_list(journey.visited()));
    lines.join("\n")
}

/// Greedily pack the comma-separated station list into lines of at
/// most [`WRAP_WIDTH`] columns.
///
/// Column wrapping, not word wrapping: a station name is never split.
/// When the next name (plus its `", "` separator) would overflow, the
/// line is closed with a trailing comma and the name starts the next
/// line.
fn wrap_station_list(stations: &[String]) -> String {
    let all = format!("Passing though: {}", stations.join(", "));
    let mut wrapped = Vec::new();
    let mut current = String::new();

    for part in all.split(", ") {
        if current.len() + part.len() + 2 > WRAP_WIDTH {
            wrapped.push(format!("{},", current.trim_end()));
            current = part.to_string();
        } else {
            if !current.is_empty() {
                current.push_str(", ");
            }
            current.push_str(part);
        }
    }
    wrapped.push(current);

    wrapped.join("\n")
}
