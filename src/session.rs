//! Game session: one screen's worth of game and timer state.
//!
//! A session owns exactly one [`GameState`] and, in Plus Mode, one
//! [`TimerState`]. The presentation layer drives it with discrete events
//! (a move, a tick, a reset) delivered one at a time, and receives an
//! immutable snapshot back from every operation; no mutable state is
//! shared between the session and its observers.

use crate::game::{GameState, MoveError, TimerState};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Which variant of the game a session plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    /// Classic tic-tac-toe.
    Normal,
    /// Tic-tac-toe with the three-second turn timer.
    Plus,
}

impl std::fmt::Display for GameMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameMode::Normal => write!(f, "Normal Mode"),
            GameMode::Plus => write!(f, "Plus Mode"),
        }
    }
}

/// A single game session from initial state to the next reset.
///
/// Sessions are single-threaded: events arrive strictly one at a time from
/// the surrounding event loop, so no locking is needed.
#[derive(Debug, Clone)]
pub struct GameSession {
    mode: GameMode,
    state: GameState,
    timer: Option<TimerState>,
}

impl GameSession {
    /// Creates a new session for the given mode.
    ///
    /// Plus Mode sessions carry an armed turn timer; Normal Mode sessions
    /// have none and ignore ticks.
    #[instrument]
    pub fn new(mode: GameMode) -> Self {
        info!(%mode, "creating game session");
        Self {
            mode,
            state: GameState::new(),
            timer: match mode {
                GameMode::Normal => None,
                GameMode::Plus => Some(TimerState::new()),
            },
        }
    }

    /// Returns the session's mode.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the turn timer, if this session has one.
    pub fn timer(&self) -> Option<&TimerState> {
        self.timer.as_ref()
    }

    /// Places the current player's mark at the given position (0-8).
    ///
    /// Returns a snapshot of the resulting state. A move never touches the
    /// countdown: Plus Mode players inherit whatever time is left on the
    /// clock when the turn reaches them.
    ///
    /// # Errors
    ///
    /// Propagates [`MoveError`] from the rule engine; the session state is
    /// unchanged on error.
    #[instrument(skip(self), fields(mode = %self.mode))]
    pub fn apply_move(&mut self, pos: usize) -> Result<GameState, MoveError> {
        self.state.apply_move(pos).inspect_err(|e| {
            warn!(pos, error = %e, "move rejected");
        })?;
        info!(
            pos,
            winner = ?self.state.winner(),
            next = %self.state.current_player(),
            "move applied"
        );
        Ok(self.state.clone())
    }

    /// Delivers one turn-clock tick to the session.
    ///
    /// Normal Mode sessions return `None` for the timer and change nothing.
    /// In Plus Mode, while the game is live, a tick either decrements the
    /// countdown or, once the countdown has run out, forfeits the turn:
    /// the current player switches with no mark placed and the clock
    /// re-arms. After a winner exists the timer suspends and further ticks
    /// alter neither the player nor the countdown.
    #[instrument(skip(self), fields(mode = %self.mode))]
    pub fn tick(&mut self) -> (GameState, Option<TimerState>) {
        if let Some(timer) = &mut self.timer {
            if self.state.is_over() {
                timer.suspend();
            } else if timer.tick() {
                self.state.switch_player();
                info!(now_to_move = %self.state.current_player(), "turn forfeited on timeout");
            } else {
                debug!(seconds = timer.seconds_remaining(), "countdown");
            }
        }
        (self.state.clone(), self.timer)
    }

    /// Resets the session to its initial state.
    ///
    /// The board clears, X is to move, and any timer re-arms to a full
    /// countdown. Returns a snapshot of the fresh state.
    #[instrument(skip(self), fields(mode = %self.mode))]
    pub fn reset(&mut self) -> GameState {
        info!("resetting session");
        self.state.reset();
        if let Some(timer) = &mut self.timer {
            timer.reset();
        }
        self.state.clone()
    }
}
