//! Parsing of user-entered array and target text

use crate::errors::{Result, VisualizerError};

/// Parse comma-separated integers, e.g. `"5, 3, 8, 1"`.
///
/// Whitespace around each entry is ignored. Empty text, empty entries and
/// anything that is not an `i32` are rejected.
pub fn parse_array(text: &str) -> Result<Vec<i32>> {
    if text.trim().is_empty() {
        return Err(VisualizerError::invalid_input(text));
    }

    text.split(',')
        .map(str::trim)
        .map(|part| {
            part.parse::<i32>()
                .map_err(|_| VisualizerError::invalid_input(part))
        })
        .collect()
}

/// Parse a single integer search target
pub fn parse_target(text: &str) -> Result<i32> {
    let trimmed = text.trim();
    trimmed
        .parse::<i32>()
        .map_err(|_| VisualizerError::invalid_target(trimmed))
}
