//! # Introduction
//!
//! Algoscope runs a classic sorting or searching algorithm to completion on a
//! user-supplied integer array, recording a [`step::Step`] at every comparison,
//! swap, shift or probe. The recorded ledger is then navigated forward and
//! backward, or auto-played, through a terminal UI built with
//! [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipeline
//!
//! ```text
//! Input text → RunController → Algorithm engine → Ledger → seek → TUI
//!                                                     ↑
//!                                      Playback ticks ┘
//! ```
//!
//! 1. [`controller`] — parses input, dispatches the selected
//!    [`algorithms::Algorithm`], owns the ledger and the cursor.
//! 2. [`algorithms`] — eight step-recording engines (bubble, selection,
//!    insertion and merge sort; linear, binary, jump and interpolation search).
//! 3. [`step`] — immutable step records and the append-only [`step::Ledger`].
//! 4. [`playback`] — timed auto-advance whose background ticker only requests
//!    seeks; the owning loop applies them.
//! 5. [`ui`] — ratatui-based TUI; not part of the stable library API.

pub mod algorithms;
pub mod config;
pub mod controller;
pub mod errors;
pub mod playback;
pub mod step;
pub mod ui;

pub use algorithms::{Algorithm, Mode};
pub use controller::{Observer, RunController, StepView};
pub use errors::{Result, VisualizerError};
pub use playback::{Playback, PlaybackState, Seek};
pub use step::{Ledger, Outcome, Step};
