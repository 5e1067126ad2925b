//! Timed auto-advance through a ledger
//!
//! A background ticker thread only *requests* steps: every interval it puts a
//! tick on a channel. The loop that owns the run controller drains that channel
//! with [`Playback::pump`] (or blocks on [`Playback::wait`]) and applies each
//! tick through [`Seek`], so playback and manual navigation are serialized on
//! the owner's thread.
//!
//! Stopping drops both ends of the current ticker's channels: the thread wakes
//! from its wait at once, and ticks it already queued are discarded with the
//! receiver.

use std::sync::mpsc::{
    self, Receiver, RecvTimeoutError, SyncSender, TryRecvError, TrySendError,
};
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// The navigation capability playback holds over the run controller
pub trait Seek {
    fn position(&self) -> Option<usize>;

    /// Move to `index`; returns `false` (and changes nothing) if out of range
    fn seek_to(&mut self, index: usize) -> bool;

    /// Whether a step exists after the current position
    fn can_advance(&self) -> bool;

    fn playback_changed(&mut self, _is_playing: bool) {}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    Stopped,
    Playing,
}

struct Ticker {
    ticks: Receiver<()>,
    /// Dropping this wakes the thread and ends it
    cancel: mpsc::Sender<()>,
    handle: JoinHandle<()>,
}

impl Ticker {
    fn spawn(interval: Duration) -> std::io::Result<Self> {
        // One slot: a slow owner sees at most one pending tick, never a burst
        let (tick_tx, ticks) = mpsc::sync_channel(1);
        let (cancel, cancel_rx) = mpsc::channel();

        let handle = thread::Builder::new()
            .name("playback-ticker".to_string())
            .spawn(move || run_ticker(interval, &tick_tx, &cancel_rx))?;

        Ok(Ticker {
            ticks,
            cancel,
            handle,
        })
    }

    fn halt(self) {
        let Ticker {
            ticks,
            cancel,
            handle,
        } = self;
        drop(cancel);
        drop(ticks);
        if handle.join().is_err() {
            tracing::error!("playback ticker panicked");
        }
    }
}

fn run_ticker(interval: Duration, ticks: &SyncSender<()>, cancel: &Receiver<()>) {
    loop {
        match cancel.recv_timeout(interval) {
            Err(RecvTimeoutError::Timeout) => match ticks.try_send(()) {
                Ok(()) | Err(TrySendError::Full(())) => {}
                Err(TrySendError::Disconnected(())) => break,
            },
            Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
        }
    }
}

/// Play/stop state machine driving timed seeks
pub struct Playback {
    interval: Duration,
    ticker: Option<Ticker>,
}

impl Playback {
    pub fn new(interval: Duration) -> Self {
        Playback {
            interval,
            ticker: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn state(&self) -> PlaybackState {
        if self.ticker.is_some() {
            PlaybackState::Playing
        } else {
            PlaybackState::Stopped
        }
    }

    pub fn is_playing(&self) -> bool {
        self.ticker.is_some()
    }

    /// Play/stop button: starts when stopped, stops when playing
    pub fn toggle<N: Seek>(&mut self, nav: &mut N) -> PlaybackState {
        if self.is_playing() {
            self.stop(nav);
        } else {
            self.start(nav);
        }
        self.state()
    }

    /// Begin playback. Returns `false` if already playing or the ticker
    /// thread could not be spawned.
    pub fn start<N: Seek>(&mut self, nav: &mut N) -> bool {
        if self.is_playing() {
            return false;
        }

        match Ticker::spawn(self.interval) {
            Ok(ticker) => {
                self.ticker = Some(ticker);
                tracing::debug!(
                    interval_ms = self.interval.as_millis() as u64,
                    "playback started"
                );
                nav.playback_changed(true);
                true
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to spawn playback ticker");
                false
            }
        }
    }

    /// Stop playback. Returns `false` if it was not playing.
    pub fn stop<N: Seek>(&mut self, nav: &mut N) -> bool {
        match self.ticker.take() {
            Some(ticker) => {
                ticker.halt();
                tracing::debug!(position = ?nav.position(), "playback stopped");
                nav.playback_changed(false);
                true
            }
            None => false,
        }
    }

    /// Apply every tick already delivered, without blocking.
    ///
    /// Returns how many steps were advanced.
    pub fn pump<N: Seek>(&mut self, nav: &mut N) -> usize {
        let mut advanced = 0;
        loop {
            let received = match &self.ticker {
                Some(ticker) => ticker.ticks.try_recv(),
                None => break,
            };
            match received {
                Ok(()) => advanced += self.apply_tick(nav),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    self.stop(nav);
                    break;
                }
            }
        }
        advanced
    }

    /// Block until the next tick (or `timeout`) and apply it.
    ///
    /// Returns how many steps were advanced (0 or 1).
    pub fn wait<N: Seek>(&mut self, nav: &mut N, timeout: Duration) -> usize {
        let received = match &self.ticker {
            Some(ticker) => ticker.ticks.recv_timeout(timeout),
            None => return 0,
        };
        match received {
            Ok(()) => self.apply_tick(nav),
            Err(RecvTimeoutError::Timeout) => 0,
            Err(RecvTimeoutError::Disconnected) => {
                self.stop(nav);
                0
            }
        }
    }

    fn apply_tick<N: Seek>(&mut self, nav: &mut N) -> usize {
        let next = nav.position().map_or(0, |c| c + 1);
        if !nav.seek_to(next) {
            self.stop(nav);
            return 0;
        }
        if !nav.can_advance() {
            self.stop(nav);
        }
        1
    }
}

impl Drop for Playback {
    fn drop(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.halt();
        }
    }
}
