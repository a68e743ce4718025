//! Tic-Tac-Toe + game core.
//!
//! Two game variants over the same 9-cell board:
//!
//! - **Normal Mode**: classic tic-tac-toe.
//! - **Plus Mode**: each player has three seconds to move; when the
//!   countdown runs out the turn passes to the opponent with no mark
//!   placed.
//!
//! # Architecture
//!
//! - **Game**: board state, move application, and win detection
//! - **Session**: owns one game (and in Plus Mode its timer), hands
//!   immutable state snapshots to the presentation layer
//! - **Clock**: cancellable one-second tick source driving the timer
//!
//! The presentation layer (the `tictactoe_plus` binary ships a terminal
//! UI) drives a session with discrete events and renders the snapshots it
//! gets back.
//!
//! # Example
//!
//! ```
//! use tictactoe_plus::{GameMode, GameSession, Player};
//!
//! let mut session = GameSession::new(GameMode::Normal);
//! let state = session.apply_move(4).unwrap();
//! assert_eq!(state.current_player(), Player::O);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod clock;
mod game;
mod session;

pub use clock::TurnClock;
pub use game::{Board, GameState, MoveError, Player, Square, TURN_SECONDS, TimerState, rules};
pub use session::{GameMode, GameSession};
