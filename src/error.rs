//! Typed rejections for every caller-visible operation
//!
//! All errors are local and recoverable: the engine never mutates state on a
//! rejected call, and the UI shell translates these into user feedback.

use thiserror::Error;

use crate::board::Side;
use crate::engine::GamePhase;

/// Rejection reasons returned by the game engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    /// Coordinates outside the 15x15 board
    #[error("position ({row}, {col}) is outside the board")]
    OutOfBounds { row: i32, col: i32 },

    /// Target cell already holds a stone
    #[error("cell ({row}, {col}) is already occupied")]
    CellOccupied { row: u8, col: u8 },

    /// Operation not allowed in the current game phase
    #[error("operation requires phase {expected:?}, game is {actual:?}")]
    WrongPhase {
        expected: GamePhase,
        actual: GamePhase,
    },

    /// Caller tried to act on the opponent's turn
    #[error("{side:?} cannot act, it is not the active side's turn")]
    NotActiveSide { side: Side },

    /// Computer-controlled turn reached without a configured evaluator
    #[error("no move evaluator is configured for the computer side")]
    AiUnavailable,
}
