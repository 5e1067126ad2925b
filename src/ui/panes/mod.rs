//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`menu`]: Mode switch and the four algorithms of the current mode
//! - [`bars`]: Bar chart of the current snapshot with highlighted indices
//! - [`listing`]: Algorithm code listing with syntax highlighting plus the step's action
//! - [`prompt`]: One-line text entry for the array and the search target
//! - [`status`]: Status bar with keybindings and playback state
//!
//! Each pane exports a single `render_*` function taking the frame, its area
//! and plain data; none of them hold state between frames.

pub mod bars;
pub mod listing;
pub mod menu;
pub mod prompt;
pub mod status;

// Re-export render functions for convenience
pub use bars::render_bars_pane;
pub use listing::render_listing_pane;
pub use menu::render_menu_pane;
pub use prompt::render_prompt_pane;
pub use status::render_status_bar;

use crate::ui::theme::DEFAULT_THEME;
use ratatui::style::{Modifier, Style};

pub(crate) fn border_style(is_focused: bool) -> Style {
    if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    }
}
