//! Game core: board state, rule engine, and the Plus Mode turn timer.

mod error;
pub mod rules;
mod timer;
mod types;

pub use error::MoveError;
pub use timer::{TURN_SECONDS, TimerState};
pub use types::{Board, GameState, Player, Square};
