//! Core domain types for tic-tac-toe.

use super::error::MoveError;
use super::rules;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::X => write!(f, "X"),
            Player::O => write!(f, "O"),
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

/// 3x3 tic-tac-toe board.
///
/// Squares are stored in row-major order: index = row * 3 + col.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given position (0-8).
    pub fn get(&self, pos: usize) -> Option<Square> {
        self.squares.get(pos).copied()
    }

    /// Sets the square at the given position.
    pub fn set(&mut self, pos: usize, square: Square) -> Result<(), MoveError> {
        if pos >= 9 {
            return Err(MoveError::OutOfBounds(pos));
        }
        self.squares[pos] = square;
        Ok(())
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: usize) -> bool {
        matches!(self.get(pos), Some(Square::Empty))
    }

    /// Checks if the board is full.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|s| *s != Square::Empty)
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty squares show their 1-based key binding.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.squares[pos] {
                    Square::Empty => (pos + 1).to_string(),
                    Square::Occupied(player) => player.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Complete state of one game.
///
/// Snapshots of this type are what the presentation layer observes;
/// every session operation hands back a fresh clone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    current_player: Player,
    winner: Option<Player>,
    winning_line: Option<[usize; 3]>,
}

impl GameState {
    /// Creates a new game: empty board, X to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            winner: None,
            winning_line: None,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose turn it is.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the winner, if the game has one.
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// Returns the completed winning line, if the game has one.
    pub fn winning_line(&self) -> Option<[usize; 3]> {
        self.winning_line
    }

    /// Returns true once a winner exists.
    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    /// Places the current player's mark at the given position (0-8).
    ///
    /// On success the winner scan runs over the whole board and the turn
    /// passes to the opponent. The turn passes even when the move just won
    /// the game, so callers that show "whose turn" must check `winner()`
    /// first.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameAlreadyOver`] if a winner already exists.
    /// - [`MoveError::OutOfBounds`] if the position is not in 0-8.
    /// - [`MoveError::CellOccupied`] if the square is taken.
    ///
    /// No state changes on any error path.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn apply_move(&mut self, pos: usize) -> Result<(), MoveError> {
        if self.winner.is_some() {
            return Err(MoveError::GameAlreadyOver);
        }
        if pos >= 9 {
            return Err(MoveError::OutOfBounds(pos));
        }
        if !self.board.is_empty(pos) {
            return Err(MoveError::CellOccupied(pos));
        }

        let player = self.current_player;
        self.board.set(pos, Square::Occupied(player))?;
        debug_assert!(self.marks_balanced(), "mark counts out of balance");

        if let Some((winner, line)) = rules::check_winner(&self.board) {
            info!(%winner, ?line, "game won");
            self.winner = Some(winner);
            self.winning_line = Some(line);
        }

        // Unconditional: the turn passes even on the winning move.
        self.current_player = player.opponent();

        debug!(pos, %player, "mark placed");
        Ok(())
    }

    /// Passes the turn to the opponent without placing a mark.
    ///
    /// This is the Plus Mode forfeit path, driven by the turn timer.
    #[instrument(skip(self))]
    pub fn switch_player(&mut self) {
        self.current_player = self.current_player.opponent();
        debug!(now_to_move = %self.current_player, "turn switched");
    }

    /// Returns the game to its initial state.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// X leads O by zero or one mark on any board reached through legal play.
    fn marks_balanced(&self) -> bool {
        let count = |p: Player| {
            self.board
                .squares()
                .iter()
                .filter(|s| **s == Square::Occupied(p))
                .count()
        };
        let (x, o) = (count(Player::X), count(Player::O));
        x == o || x == o + 1
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_is_empty_with_x_to_move() {
        let state = GameState::new();
        assert!(state.board().squares().iter().all(|s| *s == Square::Empty));
        assert_eq!(state.current_player(), Player::X);
        assert_eq!(state.winner(), None);
        assert_eq!(state.winning_line(), None);
    }

    #[test]
    fn test_board_set_out_of_bounds() {
        let mut board = Board::new();
        assert_eq!(
            board.set(9, Square::Occupied(Player::X)),
            Err(MoveError::OutOfBounds(9))
        );
    }

    #[test]
    fn test_board_display_shows_marks_and_keys() {
        let mut board = Board::new();
        board.set(0, Square::Occupied(Player::X)).unwrap();
        board.set(4, Square::Occupied(Player::O)).unwrap();
        assert_eq!(board.display(), "X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9");
    }

    #[test]
    fn test_state_snapshot_round_trips_through_json() {
        let mut state = GameState::new();
        state.apply_move(4).unwrap();
        let json = serde_json::to_string(&state).unwrap();
        let back: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }
}
