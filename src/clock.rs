//! Turn clock: the autonomous one-second tick source for Plus Mode.
//!
//! The clock is the only background activity in the whole game. It knows
//! nothing about game state; it delivers unit ticks over a channel once
//! per second until stopped, and the session owner decides what a tick
//! means. Re-arming on reset is the session's job (the countdown lives in
//! [`crate::game::TimerState`]); the clock just keeps ticking.

use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tracing::{debug, instrument};

/// Handle to a running one-second tick task.
///
/// Stopping the clock aborts the task and releases its resources; the
/// clock also stops itself when the receiving end of the channel goes
/// away, or when the handle is dropped.
#[derive(Debug)]
pub struct TurnClock {
    handle: Option<JoinHandle<()>>,
}

impl TurnClock {
    /// Spawns the tick task, delivering one tick per second on `sender`.
    ///
    /// The first tick arrives one second after the clock starts.
    #[instrument(skip(sender))]
    pub fn start(sender: UnboundedSender<()>) -> Self {
        debug!("starting turn clock");
        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(1));
            interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
            // The first interval tick completes immediately; swallow it so
            // delivery starts a full second after start().
            interval.tick().await;
            loop {
                interval.tick().await;
                if sender.send(()).is_err() {
                    debug!("tick receiver dropped, clock stopping");
                    break;
                }
            }
        });
        Self {
            handle: Some(handle),
        }
    }

    /// Stops the clock. No further ticks are delivered.
    #[instrument(skip(self))]
    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            debug!("stopping turn clock");
            handle.abort();
        }
    }
}

impl Drop for TurnClock {
    fn drop(&mut self) {
        self.stop();
    }
}
