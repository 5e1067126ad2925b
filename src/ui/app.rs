//! Main TUI application state and logic

use crate::algorithms::{Algorithm, Mode};
use crate::config::{Settings, INPUT_POLL_TIMEOUT, PLAY_TOGGLE_DEBOUNCE};
use crate::controller::{input, Observer, RunController, StepView};
use crate::errors::VisualizerError;
use crate::playback::Playback;
use crate::step::Outcome;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Menu,
    Visualizer,
    Code,
}

impl FocusedPane {
    /// Move focus to the next pane (menu -> visualizer -> code)
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Menu => FocusedPane::Visualizer,
            FocusedPane::Visualizer => FocusedPane::Code,
            FocusedPane::Code => FocusedPane::Menu,
        }
    }
}

/// Observer that turns controller callbacks into the status line
#[derive(Debug, Clone, Default)]
pub struct StatusFeed {
    pub message: String,
    pub is_error: bool,
    pub is_playing: bool,
}

impl StatusFeed {
    pub fn new(message: impl Into<String>) -> Self {
        StatusFeed {
            message: message.into(),
            ..StatusFeed::default()
        }
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.message = message.into();
        self.is_error = false;
    }

    pub fn error(&mut self, error: &VisualizerError) {
        self.message = error.to_string();
        self.is_error = true;
    }
}

impl Observer for StatusFeed {
    fn on_step_changed(&mut self, view: StepView<'_>) {
        self.info(view.step.action.clone());
    }

    fn on_playback_state_changed(&mut self, is_playing: bool) {
        self.is_playing = is_playing;
        self.info(if is_playing { "Playing..." } else { "Stopped" });
    }
}

/// What the open prompt is collecting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    Array,
    Target(Algorithm),
}

#[derive(Debug, Clone)]
pub struct Prompt {
    pub kind: PromptKind,
    pub buffer: String,
}

/// The main application state
pub struct App {
    pub controller: RunController<StatusFeed>,
    pub playback: Playback,

    /// Which algorithm family the menu shows
    pub mode: Mode,

    /// Index into `mode.algorithms()`
    pub selected: usize,

    pub focused_pane: FocusedPane,

    /// Open text entry, if any; keys go to it while it is open
    pub prompt: Option<Prompt>,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,
}

impl App {
    pub fn new(settings: &Settings) -> Self {
        let mut app = App {
            controller: RunController::with_observer(StatusFeed::new(
                "Ready! Press 'a' to set an array",
            )),
            playback: Playback::new(settings.playback_interval),
            mode: Mode::Sorting,
            selected: 0,
            focused_pane: FocusedPane::Menu,
            prompt: None,
            should_quit: false,
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or_else(Instant::now),
        };

        if let Some(text) = &settings.initial_array {
            app.submit_array(text);
        }
        app
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Playback ticks are applied here, on the same thread as key handling
            self.playback.pump(&mut self.controller);

            if event::poll(INPUT_POLL_TIMEOUT)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        self.playback.stop(&mut self.controller);
        Ok(())
    }

    pub fn selected_algorithm(&self) -> Algorithm {
        let algorithms = self.mode.algorithms();
        algorithms[self.selected.min(algorithms.len() - 1)]
    }

    pub fn status(&self) -> &StatusFeed {
        self.controller.observer()
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        let prompt_height = if self.prompt.is_some() { 3 } else { 0 };
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(prompt_height),
                Constraint::Length(1),
            ])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(28),
                Constraint::Percentage(55),
                Constraint::Percentage(45),
            ])
            .split(main_chunks[0]);

        super::panes::render_menu_pane(
            frame,
            columns[0],
            self.mode,
            self.selected,
            self.focused_pane == FocusedPane::Menu,
        );

        let step = self.controller.current();
        let (values, highlights) = match step {
            Some(step) => (
                step.snapshot.as_slice(),
                (step.highlight_a, step.highlight_b),
            ),
            None => (self.controller.input(), (None, None)),
        };
        super::panes::render_bars_pane(
            frame,
            columns[1],
            values,
            highlights,
            self.focused_pane == FocusedPane::Visualizer,
        );

        let outcome = if self.controller.can_go_next() {
            None
        } else {
            self.controller.ledger().map(|ledger| ledger.outcome())
        };
        super::panes::render_listing_pane(
            frame,
            columns[2],
            step,
            outcome,
            self.focused_pane == FocusedPane::Code,
        );

        if let Some(prompt) = &self.prompt {
            let (title, hint) = match prompt.kind {
                PromptKind::Array => ("Set Array", "Numbers separated by commas:"),
                PromptKind::Target(_) => ("Search", "Number to search:"),
            };
            super::panes::render_prompt_pane(frame, main_chunks[1], title, hint, &prompt.buffer);
        }

        let status = self.controller.observer();
        let position = self
            .controller
            .cursor()
            .map(|cursor| (cursor, self.controller.total_steps()));
        super::panes::render_status_bar(
            frame,
            main_chunks[2],
            &status.message,
            position,
            status.is_error,
            self.playback.is_playing(),
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if self.prompt.is_some() {
            self.handle_prompt_key(key);
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::Char('m') => {
                self.mode = self.mode.toggle();
                self.selected = 0;
                let label = self.mode.label();
                self.controller.observer_mut().info(format!("{} mode", label));
            }
            KeyCode::Up => {
                self.selected = self.selected.saturating_sub(1);
            }
            KeyCode::Down => {
                self.selected = (self.selected + 1).min(self.mode.algorithms().len() - 1);
            }
            KeyCode::Enter => self.run_selected(),
            KeyCode::Char('a') => {
                self.prompt = Some(Prompt {
                    kind: PromptKind::Array,
                    buffer: String::new(),
                });
            }
            KeyCode::Char('r') => self.reset(),
            KeyCode::Left => {
                if self.controller.prev().is_none() {
                    self.controller
                        .observer_mut()
                        .info("Already at the first step");
                }
            }
            KeyCode::Right => {
                if self.controller.next().is_none() {
                    self.controller.observer_mut().info("Already at the last step");
                }
            }
            KeyCode::Home => {
                self.controller.first();
            }
            KeyCode::End => {
                self.controller.last();
            }
            KeyCode::Char(' ') => {
                // Toggle playback (with debounce to prevent key repeat spam)
                if self.last_space_press.elapsed() >= PLAY_TOGGLE_DEBOUNCE {
                    self.last_space_press = Instant::now();
                    self.playback.toggle(&mut self.controller);
                }
            }
            _ => {}
        }
    }

    fn handle_prompt_key(&mut self, key: KeyEvent) {
        let Some(prompt) = self.prompt.as_mut() else {
            return;
        };

        match key.code {
            KeyCode::Esc => {
                self.prompt = None;
                self.controller.observer_mut().info("Cancelled");
            }
            KeyCode::Backspace => {
                prompt.buffer.pop();
            }
            KeyCode::Char(c) if c.is_ascii_digit() || matches!(c, ',' | '-' | '+' | ' ') => {
                prompt.buffer.push(c);
            }
            KeyCode::Enter => {
                if let Some(prompt) = self.prompt.take() {
                    // Empty entry behaves like a cancelled dialog
                    if prompt.buffer.trim().is_empty() {
                        return;
                    }
                    match prompt.kind {
                        PromptKind::Array => self.submit_array(&prompt.buffer),
                        PromptKind::Target(algorithm) => {
                            self.execute_run(algorithm, Some(&prompt.buffer))
                        }
                    }
                }
            }
            _ => {}
        }
    }

    /// Run the highlighted algorithm, asking for a target first when needed
    fn run_selected(&mut self) {
        let algorithm = self.selected_algorithm();
        if algorithm.requires_target() && !self.controller.input().is_empty() {
            self.prompt = Some(Prompt {
                kind: PromptKind::Target(algorithm),
                buffer: String::new(),
            });
        } else {
            self.execute_run(algorithm, None);
        }
    }

    fn execute_run(&mut self, algorithm: Algorithm, target: Option<&str>) {
        // A rejected run leaves playback untouched
        if let Err(e) = self.controller.validate_run(algorithm, target) {
            self.controller.observer_mut().error(&e);
            return;
        }

        self.playback.stop(&mut self.controller);
        match self.controller.run_algorithm(algorithm, target) {
            Ok(outcome) => {
                let total = self.controller.total_steps();
                let summary = match outcome {
                    Outcome::Found(index) => format!(", target at index {}", index),
                    Outcome::NotFound => ", target not found".to_string(),
                    Outcome::Halted(_) => ", search halted".to_string(),
                    Outcome::Sorted => String::new(),
                };
                self.controller
                    .observer_mut()
                    .info(format!("{}: {} steps recorded{}", algorithm, total, summary));
            }
            Err(e) => self.controller.observer_mut().error(&e),
        }
    }

    fn submit_array(&mut self, text: &str) {
        let values = match input::parse_array(text) {
            Ok(values) => values,
            Err(e) => {
                self.controller.observer_mut().error(&e);
                return;
            }
        };

        self.playback.stop(&mut self.controller);
        match self.controller.set_values(values) {
            Ok(()) => {
                let len = self.controller.input().len();
                self.controller
                    .observer_mut()
                    .info(format!("Array set ({} values)", len));
            }
            Err(e) => self.controller.observer_mut().error(&e),
        }
    }

    fn reset(&mut self) {
        self.playback.stop(&mut self.controller);
        self.controller.reset();
        self.controller.observer_mut().info("Reset");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_set_array_and_run_bubble_sort() {
        let mut app = App::new(&Settings::default());
        press(&mut app, KeyCode::Char('a'));
        type_text(&mut app, "5,3,8,1");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.controller.input(), &[5, 3, 8, 1]);

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.controller.cursor(), Some(0));
        assert!(app.status().message.starts_with("Bubble Sort:"));

        press(&mut app, KeyCode::End);
        let last = app.controller.current().expect("step at end");
        assert_eq!(last.snapshot, vec![1, 3, 5, 8]);
    }

    #[test]
    fn test_search_prompts_for_target() {
        let settings = Settings {
            initial_array: Some("2,7,4,1,9".to_string()),
            ..Settings::default()
        };
        let mut app = App::new(&settings);
        press(&mut app, KeyCode::Char('m'));
        assert_eq!(app.selected_algorithm(), Algorithm::LinearSearch);

        press(&mut app, KeyCode::Enter);
        assert!(matches!(
            app.prompt.as_ref().map(|p| p.kind),
            Some(PromptKind::Target(Algorithm::LinearSearch))
        ));

        type_text(&mut app, "4");
        press(&mut app, KeyCode::Enter);
        assert!(app.prompt.is_none());
        assert!(app.status().message.contains("target at index 2"));
    }

    #[test]
    fn test_run_without_array_reports_error() {
        let mut app = App::new(&Settings::default());
        press(&mut app, KeyCode::Enter);
        assert!(app.status().is_error);
        assert_eq!(app.status().message, VisualizerError::NoArray.to_string());
        assert!(app.controller.ledger().is_none());
    }

    #[test]
    fn test_escape_cancels_prompt() {
        let mut app = App::new(&Settings::default());
        press(&mut app, KeyCode::Char('a'));
        type_text(&mut app, "1,2");
        press(&mut app, KeyCode::Esc);
        assert!(app.prompt.is_none());
        assert!(app.controller.input().is_empty());
    }

    #[test]
    fn test_rejected_entries_keep_playback_running() {
        let settings = Settings {
            initial_array: Some("9,8,7,6".to_string()),
            ..Settings::default()
        };
        let mut app = App::new(&settings);
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char(' '));
        assert!(app.playback.is_playing());
        assert!(app.status().is_playing);

        press(&mut app, KeyCode::Char('a'));
        type_text(&mut app, "1,,3");
        press(&mut app, KeyCode::Enter);
        assert!(app.status().is_error);
        assert!(app.playback.is_playing());
        assert!(app.status().is_playing);
        assert_eq!(app.controller.input(), &[9, 8, 7, 6]);
        assert_eq!(
            app.controller.ledger().map(|l| l.algorithm()),
            Some(Algorithm::BubbleSort)
        );

        press(&mut app, KeyCode::Char('m'));
        press(&mut app, KeyCode::Enter);
        type_text(&mut app, "4-");
        press(&mut app, KeyCode::Enter);
        assert!(app.status().is_error);
        assert_eq!(
            app.status().message,
            VisualizerError::invalid_target("4-").to_string()
        );
        assert!(app.playback.is_playing());
        assert_eq!(
            app.controller.ledger().map(|l| l.algorithm()),
            Some(Algorithm::BubbleSort)
        );
    }

    #[test]
    fn test_reset_clears_everything() {
        let settings = Settings {
            initial_array: Some("3,1,2".to_string()),
            ..Settings::default()
        };
        let mut app = App::new(&settings);
        press(&mut app, KeyCode::Enter);
        assert!(app.controller.ledger().is_some());

        press(&mut app, KeyCode::Char('r'));
        assert!(app.controller.input().is_empty());
        assert!(app.controller.ledger().is_none());
        assert_eq!(app.controller.cursor(), None);
    }
}
