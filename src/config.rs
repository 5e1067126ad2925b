// Runtime settings for the visualizer

use std::path::PathBuf;
use std::time::Duration;

/// Delay between automatic steps during playback
pub const DEFAULT_PLAYBACK_INTERVAL: Duration = Duration::from_millis(500);

/// Minimum time between two accepted play/stop key presses
pub const PLAY_TOGGLE_DEBOUNCE: Duration = Duration::from_millis(200);

/// How long the event loop waits for input before servicing playback ticks
pub const INPUT_POLL_TIMEOUT: Duration = Duration::from_millis(50);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub playback_interval: Duration,
    /// Comma-separated array loaded before the first frame
    pub initial_array: Option<String>,
    pub log_file: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            playback_interval: DEFAULT_PLAYBACK_INTERVAL,
            initial_array: None,
            log_file: None,
        }
    }
}

impl Settings {
    pub fn with_interval_ms(mut self, millis: u64) -> Self {
        self.playback_interval = Duration::from_millis(millis.max(1));
        self
    }
}
