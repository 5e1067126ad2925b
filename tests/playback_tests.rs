// Integration tests for timed playback

use std::time::Duration;

use algoscope::{Algorithm, Observer, Playback, PlaybackState, RunController, StepView};

const FAST: Duration = Duration::from_millis(1);
const GUARD: Duration = Duration::from_secs(2);

#[derive(Default)]
struct Transitions {
    steps: usize,
    playing: Vec<bool>,
}

impl Observer for Transitions {
    fn on_step_changed(&mut self, _view: StepView<'_>) {
        self.steps += 1;
    }

    fn on_playback_state_changed(&mut self, is_playing: bool) {
        self.playing.push(is_playing);
    }
}

fn sorted_run(text: &str) -> RunController<Transitions> {
    let mut controller = RunController::with_observer(Transitions::default());
    controller.set_input(text).expect("valid array");
    controller
        .run_algorithm(Algorithm::BubbleSort, None)
        .expect("sort runs");
    controller
}

/// Drive playback until it stops, returning the number of advances
fn play_to_end(playback: &mut Playback, controller: &mut RunController<Transitions>) -> usize {
    let mut advanced = 0;
    let mut rounds = 0;
    while playback.is_playing() {
        advanced += playback.wait(controller, GUARD);
        rounds += 1;
        assert!(rounds < 1_000, "playback never stopped");
    }
    advanced
}

#[test]
fn test_playback_runs_to_last_step() {
    let mut controller = sorted_run("5,3,8,1");
    let total = controller.total_steps();
    let mut playback = Playback::new(FAST);

    assert!(playback.start(&mut controller));
    assert_eq!(playback.state(), PlaybackState::Playing);

    let advanced = play_to_end(&mut playback, &mut controller);

    assert_eq!(advanced, total - 1);
    assert_eq!(controller.cursor(), Some(total - 1));
    assert_eq!(playback.state(), PlaybackState::Stopped);
    assert_eq!(controller.observer().playing, vec![true, false]);
}

#[test]
fn test_playback_from_middle() {
    let mut controller = sorted_run("4,3,2,1");
    let total = controller.total_steps();
    controller.seek(3);
    let mut playback = Playback::new(FAST);

    playback.start(&mut controller);
    let advanced = play_to_end(&mut playback, &mut controller);

    assert_eq!(advanced, total - 1 - 3);
    assert_eq!(controller.cursor(), Some(total - 1));
}

#[test]
fn test_playback_at_end_stops_without_advancing() {
    let mut controller = sorted_run("2,1");
    controller.last();
    let mut playback = Playback::new(FAST);

    playback.start(&mut controller);
    let advanced = play_to_end(&mut playback, &mut controller);

    assert_eq!(advanced, 0);
    assert_eq!(controller.cursor(), Some(1));
}

#[test]
fn test_playback_without_ledger_stops() {
    let mut controller = RunController::with_observer(Transitions::default());
    let mut playback = Playback::new(FAST);

    playback.start(&mut controller);
    let advanced = play_to_end(&mut playback, &mut controller);

    assert_eq!(advanced, 0);
    assert_eq!(controller.cursor(), None);
}

#[test]
fn test_toggle_stops_and_discards_pending_ticks() {
    let mut controller = sorted_run("9,8,7,6,5");
    let mut playback = Playback::new(FAST);

    assert_eq!(playback.toggle(&mut controller), PlaybackState::Playing);
    // Give the ticker time to queue a tick
    std::thread::sleep(Duration::from_millis(20));
    assert_eq!(playback.toggle(&mut controller), PlaybackState::Stopped);

    let cursor = controller.cursor();
    assert_eq!(playback.pump(&mut controller), 0);
    assert_eq!(playback.wait(&mut controller, Duration::from_millis(20)), 0);
    assert_eq!(controller.cursor(), cursor);
    assert_eq!(controller.observer().playing, vec![true, false]);
}

#[test]
fn test_start_while_playing_is_rejected() {
    let mut controller = sorted_run("3,2,1");
    let mut playback = Playback::new(Duration::from_secs(60));

    assert!(playback.start(&mut controller));
    assert!(!playback.start(&mut controller));
    assert!(playback.stop(&mut controller));
    assert!(!playback.stop(&mut controller));
    assert_eq!(controller.observer().playing, vec![true, false]);
}

#[test]
fn test_manual_navigation_between_ticks() {
    let mut controller = sorted_run("5,3,8,1");
    let total = controller.total_steps();
    let mut playback = Playback::new(FAST);

    playback.start(&mut controller);
    playback.wait(&mut controller, GUARD);
    // A manual step in between is just another seek on the same thread
    controller.next();
    let at = controller.cursor().unwrap();
    let advanced = play_to_end(&mut playback, &mut controller);

    assert_eq!(advanced, total - 1 - at);
    assert_eq!(controller.cursor(), Some(total - 1));
}

#[test]
fn test_stop_is_prompt_with_long_interval() {
    let mut controller = sorted_run("3,2,1");
    let mut playback = Playback::new(Duration::from_secs(3600));

    playback.start(&mut controller);
    let started = std::time::Instant::now();
    playback.stop(&mut controller);
    assert!(started.elapsed() < Duration::from_secs(5));
}
