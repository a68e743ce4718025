//! Win detection for tic-tac-toe.

use super::types::{Board, Player, Square};
use tracing::instrument;

/// The eight winning triples, in tie-break order: rows, columns, diagonals.
///
/// `check_winner` reports the first completed triple in this order. In
/// legal play at most one line can complete on a single move, so the order
/// only decides which line gets highlighted, never who wins.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Checks if there is a winner on the board.
///
/// Returns the winning player together with the completed line, or `None`.
/// The scan always covers the whole board; eight fixed triples are cheap,
/// and a full rescan keeps the check stateless and trivially idempotent.
///
/// A full board with no completed triple is NOT a terminal state here:
/// the engine reports no winner and leaves the stalemate to the caller.
/// No further move can succeed anyway, since every square is occupied.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<(Player, [usize; 3])> {
    for line in WINNING_LINES {
        let [a, b, c] = line;
        let sq = board.get(a);
        if let Some(Square::Occupied(player)) = sq
            && sq == board.get(b)
            && sq == board.get(c)
        {
            return Some((player, line));
        }
    }

    None
}

/// Checks if every square is occupied.
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}
