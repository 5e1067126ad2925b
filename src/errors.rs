//! Error types surfaced to the display layer
//!
//! Every variant of [`VisualizerError`] is recoverable: the front end shows the
//! message and the run controller is left exactly as it was before the failed
//! call.

use thiserror::Error;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, VisualizerError>;

/// Errors reported by the run controller and the search engines
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VisualizerError {
    /// Array text did not parse into a non-empty list of integers
    #[error("Invalid input '{token}': enter integers separated by commas")]
    InvalidInput { token: String },

    /// An algorithm was requested before any array was set
    #[error("Please set the array first")]
    NoArray,

    /// Search target text did not parse into an integer
    #[error("Invalid target '{text}': enter a single integer")]
    InvalidTarget { text: String },

    /// Interpolation search reached `a[low] == a[high]` with `low < high`
    #[error("Interpolation bounds collapsed between indices {low} and {high}; search stopped")]
    DegenerateInterpolationBounds { low: usize, high: usize },
}

impl VisualizerError {
    pub fn invalid_input(token: impl Into<String>) -> Self {
        VisualizerError::InvalidInput {
            token: token.into(),
        }
    }

    pub fn invalid_target(text: impl Into<String>) -> Self {
        VisualizerError::InvalidTarget { text: text.into() }
    }
}
