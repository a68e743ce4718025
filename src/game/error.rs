//! Errors for move application.

/// Error that can occur when applying a move.
///
/// All variants are recoverable precondition failures. The presentation
/// layer ignores the rejected move rather than surfacing a message, so
/// nothing here is fatal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The position is outside the 9-cell board.
    #[display("Position {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(usize),

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    CellOccupied(usize),

    /// A winner already exists.
    #[display("Game is already over")]
    GameAlreadyOver,
}

impl std::error::Error for MoveError {}
