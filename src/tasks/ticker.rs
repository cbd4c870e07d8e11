//! Periodic decrement-and-render task

use std::{sync::Arc, time::Duration};
use tokio::{
    task::JoinHandle,
    time::{interval_at, Instant, MissedTickBehavior},
};
use tracing::{debug, error};

use crate::state::{TickOutcome, TimerController};

/// Interval between two ticks
pub const TICK_PERIOD: Duration = Duration::from_millis(1000);

/// Spawn the ticker for generation `epoch`; the first tick fires one period from now
pub fn spawn_ticker(timer: Arc<TimerController>, epoch: u64) -> JoinHandle<()> {
    let first_tick = Instant::now() + TICK_PERIOD;

    tokio::spawn(async move {
        debug!("Ticker {} started", epoch);

        let mut interval = interval_at(first_tick, TICK_PERIOD);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            interval.tick().await;

            match timer.tick(epoch) {
                Ok(TickOutcome::Continue) => {}
                Ok(TickOutcome::Stop) => break,
                Err(e) => {
                    error!("Ticker {} failed: {}", epoch, e);
                    break;
                }
            }
        }

        debug!("Ticker {} stopped", epoch);
    })
}
