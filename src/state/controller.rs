//! Timer widget controller: start, pause, reset and the per-second tick

use std::sync::{Arc, Mutex, MutexGuard};
use tokio::{
    sync::{broadcast, watch},
    task::JoinHandle,
};
use tracing::{debug, info, warn};

use super::{CompletionEvent, Readout, RunState, Step, TimerSnapshot, TimerState};
use crate::tasks::spawn_ticker;

/// What the ticker should do after a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Continue,
    Stop,
}

/// Everything guarded by the controller lock
#[derive(Debug)]
struct Countdown {
    timer: TimerState,
    /// Generation of the current ticker, bumped on every effective start
    epoch: u64,
    ticker: Option<JoinHandle<()>>,
    completed_sessions: u64,
}

impl Countdown {
    fn snapshot(&self) -> TimerSnapshot {
        TimerSnapshot::capture(&self.timer, self.completed_sessions)
    }

    fn cancel_ticker(&mut self) {
        if let Some(handle) = self.ticker.take() {
            handle.abort();
        }
    }
}

/// One countdown timer instance.
///
/// Every operation runs as a single critical section with no await inside,
/// so a tick can never interleave with start, pause or reset.
#[derive(Debug)]
pub struct TimerController {
    countdown: Mutex<Countdown>,
    /// Rendering surface
    display_tx: watch::Sender<TimerSnapshot>,
    /// Notification surface
    completion_tx: broadcast::Sender<CompletionEvent>,
}

impl TimerController {
    /// Create a paused timer and render its initial value
    pub fn new(configured_seconds: u64) -> Self {
        let timer = TimerState::new(configured_seconds);
        let initial = TimerSnapshot::capture(&timer, 0);
        let (display_tx, _) = watch::channel(initial.clone());
        let (completion_tx, _) = broadcast::channel(16);

        info!("Timer initialized at {}", initial.display());

        Self {
            countdown: Mutex::new(Countdown {
                timer,
                epoch: 0,
                ticker: None,
                completed_sessions: 0,
            }),
            display_tx,
            completion_tx,
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Countdown>, String> {
        self.countdown
            .lock()
            .map_err(|e| format!("Failed to lock timer state: {}", e))
    }

    fn publish(&self, snapshot: TimerSnapshot) {
        debug!("Rendering {}", snapshot.display());
        self.display_tx.send_replace(snapshot);
    }

    /// Begin ticking once per second. A second call while running is a no-op.
    pub fn start(self: &Arc<Self>) -> Result<TimerSnapshot, String> {
        let mut countdown = self.lock()?;

        if countdown.timer.is_running() {
            debug!("Start ignored, timer already running");
            return Ok(countdown.snapshot());
        }

        countdown.timer.run_state = RunState::Running;
        countdown.epoch += 1;
        countdown.cancel_ticker();
        countdown.ticker = Some(spawn_ticker(Arc::clone(self), countdown.epoch));

        info!(
            "Timer started at {} (epoch {})",
            countdown.timer.readout(),
            countdown.epoch
        );
        Ok(countdown.snapshot())
    }

    /// Stop ticking and freeze the remaining duration
    pub fn pause(&self) -> Result<TimerSnapshot, String> {
        let mut countdown = self.lock()?;
        Self::pause_locked(&mut countdown);
        Ok(countdown.snapshot())
    }

    fn pause_locked(countdown: &mut Countdown) {
        if countdown.timer.is_running() {
            info!("Timer paused at {}", countdown.timer.readout());
        }
        countdown.timer.run_state = RunState::Paused;
        countdown.cancel_ticker();
    }

    /// Pause, restore the configured duration and render
    pub fn reset(&self) -> Result<TimerSnapshot, String> {
        let mut countdown = self.lock()?;
        Self::pause_locked(&mut countdown);
        countdown.timer.reset();

        let snapshot = countdown.snapshot();
        info!("Timer reset to {}", snapshot.display());
        self.publish(snapshot.clone());
        Ok(snapshot)
    }

    /// Decrement-and-render step, invoked by the ticker of generation `epoch`.
    ///
    /// A tick from a ticker that was cancelled in the meantime changes nothing.
    pub fn tick(&self, epoch: u64) -> Result<TickOutcome, String> {
        let mut countdown = self.lock()?;

        if !countdown.timer.is_running() || countdown.epoch != epoch {
            debug!(
                "Dropping stale tick (epoch {}, current {})",
                epoch, countdown.epoch
            );
            return Ok(TickOutcome::Stop);
        }

        let step = countdown.timer.step();
        self.publish(countdown.snapshot());

        match step {
            Step::Decremented => Ok(TickOutcome::Continue),
            Step::Exhausted => {
                self.complete(&mut countdown);
                Ok(TickOutcome::Stop)
            }
        }
    }

    fn complete(&self, countdown: &mut Countdown) {
        // The ticker calling us is about to return; detach rather than abort it
        countdown.ticker = None;
        countdown.timer.run_state = RunState::Paused;
        countdown.completed_sessions += 1;

        let event = CompletionEvent::new(countdown.completed_sessions);
        info!("Countdown finished (session {})", event.session);
        if self.completion_tx.send(event).is_err() {
            warn!("No completion listeners attached");
        }

        countdown.timer.reset();
        self.publish(countdown.snapshot());
    }

    /// Current display value; same as the last published render
    pub fn render(&self) -> Result<Readout, String> {
        Ok(self.lock()?.timer.readout())
    }

    pub fn snapshot(&self) -> Result<TimerSnapshot, String> {
        Ok(self.lock()?.snapshot())
    }

    /// Receive every render
    pub fn subscribe_display(&self) -> watch::Receiver<TimerSnapshot> {
        self.display_tx.subscribe()
    }

    /// Receive one event per completed countdown
    pub fn subscribe_completions(&self) -> broadcast::Receiver<CompletionEvent> {
        self.completion_tx.subscribe()
    }

    #[cfg(test)]
    fn set_remaining(&self, seconds: u64) {
        let mut countdown = self.countdown.lock().unwrap();
        countdown.timer.remaining_seconds = seconds;
    }

    #[cfg(test)]
    fn epoch(&self) -> u64 {
        self.countdown.lock().unwrap().epoch
    }
}

impl Default for TimerController {
    fn default() -> Self {
        Self::new(super::DEFAULT_DURATION_SECONDS)
    }
}
