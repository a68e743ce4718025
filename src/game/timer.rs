//! Turn timer for Plus Mode.
//!
//! Plus Mode puts each player on a three-second clock: make a move before
//! the countdown runs out or the turn passes to the opponent with no mark
//! placed. The timer never re-arms on a move; only expiry and reset do.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Seconds a player gets before forfeiting the turn.
pub const TURN_SECONDS: u8 = 3;

/// Countdown state for Plus Mode.
///
/// Two phases: Counting (`active`) and Suspended. Suspension happens once
/// the game is over; suspended timers ignore ticks entirely. The counter
/// stays within 0..=3: it walks 3, 2, 1, 0, and the tick that arrives with
/// the counter already at zero forfeits the turn and re-arms to 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerState {
    seconds_remaining: u8,
    active: bool,
}

impl TimerState {
    /// Creates a freshly armed timer: 3 seconds, counting.
    pub fn new() -> Self {
        Self {
            seconds_remaining: TURN_SECONDS,
            active: true,
        }
    }

    /// Returns the seconds left on the countdown.
    pub fn seconds_remaining(&self) -> u8 {
        self.seconds_remaining
    }

    /// Returns true while the timer is counting (game not over).
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Advances the countdown by one tick.
    ///
    /// Returns `true` when the countdown expired on this tick: the caller
    /// must pass the turn to the opponent, and the counter has already
    /// re-armed to [`TURN_SECONDS`]. Suspended timers ignore ticks and
    /// always return `false`.
    #[instrument(skip(self), fields(seconds = self.seconds_remaining))]
    pub fn tick(&mut self) -> bool {
        if !self.active {
            return false;
        }
        if self.seconds_remaining > 0 {
            self.seconds_remaining -= 1;
            false
        } else {
            debug!("countdown expired, turn forfeited");
            self.seconds_remaining = TURN_SECONDS;
            true
        }
    }

    /// Stops the countdown; further ticks are ignored.
    pub fn suspend(&mut self) {
        self.active = false;
    }

    /// Re-arms the timer to its initial state.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for TimerState {
    fn default() -> Self {
        Self::new()
    }
}
