//! Errors raised when an action would break board invariants.
//!
//! The engine validates every placement before touching the board, so an
//! `Err` always means the board is exactly as it was before the call.

use thiserror::Error;

use super::action::Side;
use super::board::{Position, Value};
use crate::rules::Outcome;

/// Contract violation by a caller of `apply_action` or `step`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Position index is not in `0..9`.
    #[error("position {0} is outside the board (expected 0-8)")]
    PositionOutOfRange(usize),

    /// Target cell already holds a value.
    #[error("cell {0} is already occupied")]
    CellOccupied(Position),

    /// Value is not in `1..=9`.
    #[error("value {0} is outside the number pool (expected 1-9)")]
    ValueOutOfRange(u8),

    /// Value is already on the board.
    #[error("value {0} has already been played")]
    ValueAlreadyUsed(Value),

    /// Value belongs to the other side's parity pool.
    #[error("{side} cannot play {value}")]
    WrongParity { side: Side, value: Value },

    /// The game continues but the environment has no empty cell or even
    /// value to reply with.
    #[error("environment has no legal reply")]
    NoLegalReply,

    /// The board is already in a terminal state.
    #[error("game is over ({0})")]
    GameOver(Outcome),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let pos = Position::new(4).unwrap();
        let value = Value::new(2).unwrap();

        assert_eq!(
            ActionError::PositionOutOfRange(12).to_string(),
            "position 12 is outside the board (expected 0-8)"
        );
        assert_eq!(ActionError::CellOccupied(pos).to_string(), "cell 4 is already occupied");
        assert_eq!(
            ActionError::WrongParity { side: Side::Agent, value }.to_string(),
            "agent cannot play 2"
        );
        assert_eq!(ActionError::NoLegalReply.to_string(), "environment has no legal reply");
        assert_eq!(ActionError::GameOver(Outcome::Tie).to_string(), "game is over (Tie)");
    }

    #[test]
    fn test_error_kinds_are_distinguishable() {
        let pos = Position::new(0).unwrap();
        let value = Value::new(1).unwrap();

        assert_ne!(ActionError::CellOccupied(pos), ActionError::ValueAlreadyUsed(value));
        assert_ne!(
            ActionError::WrongParity { side: Side::Agent, value },
            ActionError::WrongParity { side: Side::Environment, value }
        );
    }
}
