//! Run controller: owns the input array, the current ledger and the cursor
//!
//! All cursor movement goes through [`RunController::seek`], whether it comes
//! from manual navigation or from a playback tick. The controller is owned by
//! a single event loop; playback only ever asks it to seek through the
//! [`Seek`](crate::playback::Seek) capability.
//!
//! # Lifecycle
//!
//! ```text
//! set_input → run_algorithm → seek(0) → prev/next/playback … → reset
//! ```

pub mod input;

use crate::algorithms::Algorithm;
use crate::errors::{Result, VisualizerError};
use crate::playback::Seek;
use crate::step::{Ledger, Outcome, Step};

/// Everything a display needs to render the step under the cursor
#[derive(Debug, Clone, Copy)]
pub struct StepView<'a> {
    pub index: usize,
    pub total: usize,
    pub step: &'a Step,
    pub can_go_prev: bool,
    pub can_go_next: bool,
}

/// Display-side hooks called by the controller and by playback
pub trait Observer {
    /// The cursor moved to `view.index`
    fn on_step_changed(&mut self, _view: StepView<'_>) {}

    /// Playback switched between playing and stopped
    fn on_playback_state_changed(&mut self, _is_playing: bool) {}
}

impl Observer for () {}

pub struct RunController<O: Observer = ()> {
    input: Vec<i32>,
    ledger: Option<Ledger>,
    /// `None` until a step has been shown
    cursor: Option<usize>,
    observer: O,
}

impl RunController<()> {
    pub fn new() -> Self {
        RunController::with_observer(())
    }
}

impl Default for RunController<()> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O: Observer> RunController<O> {
    pub fn with_observer(observer: O) -> Self {
        RunController {
            input: Vec::new(),
            ledger: None,
            cursor: None,
            observer,
        }
    }

    /// Parse and install a new input array, dropping any previous run.
    ///
    /// On error nothing changes.
    pub fn set_input(&mut self, text: &str) -> Result<()> {
        let values = input::parse_array(text)?;
        self.set_values(values)
    }

    /// Install an already-parsed input array
    pub fn set_values(&mut self, values: Vec<i32>) -> Result<()> {
        if values.is_empty() {
            return Err(VisualizerError::invalid_input(""));
        }

        tracing::info!(len = values.len(), "input array set");
        self.input = values;
        self.ledger = None;
        self.cursor = None;
        Ok(())
    }

    /// Clear input, ledger and cursor
    pub fn reset(&mut self) {
        tracing::info!("visualizer reset");
        self.input.clear();
        self.ledger = None;
        self.cursor = None;
    }

    /// Run `algorithm` over the current input and show its first step.
    ///
    /// `target` is the raw target text; it is only read for search variants.
    /// Fails without touching any state if no array is set or the target does
    /// not parse.
    pub fn run_algorithm(
        &mut self,
        algorithm: Algorithm,
        target: Option<&str>,
    ) -> Result<Outcome> {
        let target = self.check_run(algorithm, target)?;

        self.ledger = None;
        self.cursor = None;

        let ledger = algorithm.run(&self.input, target);
        let outcome = ledger.outcome().clone();
        tracing::info!(
            %algorithm,
            ?target,
            steps = ledger.len(),
            ?outcome,
            "algorithm run complete"
        );
        if let Outcome::Halted(reason) = &outcome {
            tracing::warn!(%algorithm, %reason, "search halted");
        }

        self.ledger = Some(ledger);
        self.seek(0);
        Ok(outcome)
    }

    /// Check whether `run_algorithm` would accept these arguments, without
    /// touching any state.
    ///
    /// A missing array is reported before a bad target.
    pub fn validate_run(&self, algorithm: Algorithm, target: Option<&str>) -> Result<()> {
        self.check_run(algorithm, target).map(|_| ())
    }

    fn check_run(&self, algorithm: Algorithm, target: Option<&str>) -> Result<Option<i32>> {
        if self.input.is_empty() {
            tracing::warn!(%algorithm, "run requested without an array");
            return Err(VisualizerError::NoArray);
        }

        if algorithm.requires_target() {
            input::parse_target(target.unwrap_or_default()).map(Some)
        } else {
            Ok(None)
        }
    }

    /// Move the cursor to `index` and return the step there.
    ///
    /// Out-of-range indices and an empty ledger are no-ops returning `None`.
    pub fn seek(&mut self, index: usize) -> Option<&Step> {
        let ledger = self.ledger.as_ref()?;
        let step = ledger.get(index)?;
        let total = ledger.len();

        self.cursor = Some(index);
        tracing::debug!(index, total, "seek");
        self.observer.on_step_changed(StepView {
            index,
            total,
            step,
            can_go_prev: index > 0,
            can_go_next: index + 1 < total,
        });
        Some(step)
    }

    pub fn prev(&mut self) -> Option<&Step> {
        let target = self.cursor?.checked_sub(1)?;
        self.seek(target)
    }

    pub fn next(&mut self) -> Option<&Step> {
        let target = self.cursor.map_or(0, |c| c + 1);
        self.seek(target)
    }

    pub fn first(&mut self) -> Option<&Step> {
        self.seek(0)
    }

    pub fn last(&mut self) -> Option<&Step> {
        let target = self.total_steps().checked_sub(1)?;
        self.seek(target)
    }

    pub fn can_go_prev(&self) -> bool {
        self.cursor.is_some_and(|c| c > 0)
    }

    pub fn can_go_next(&self) -> bool {
        match self.cursor {
            Some(c) => c + 1 < self.total_steps(),
            None => self.total_steps() > 0,
        }
    }

    // ========== Getters for the display ==========

    pub fn input(&self) -> &[i32] {
        &self.input
    }

    pub fn ledger(&self) -> Option<&Ledger> {
        self.ledger.as_ref()
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// The step under the cursor
    pub fn current(&self) -> Option<&Step> {
        self.ledger.as_ref()?.get(self.cursor?)
    }

    pub fn total_steps(&self) -> usize {
        self.ledger.as_ref().map_or(0, Ledger::len)
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }
}

impl<O: Observer> Seek for RunController<O> {
    fn position(&self) -> Option<usize> {
        self.cursor
    }

    fn seek_to(&mut self, index: usize) -> bool {
        self.seek(index).is_some()
    }

    fn can_advance(&self) -> bool {
        self.can_go_next()
    }

    fn playback_changed(&mut self, is_playing: bool) {
        self.observer.on_playback_state_changed(is_playing);
    }
}
