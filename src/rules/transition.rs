//! State transition and terminal detection.

use tracing::trace;

use super::legal::validate_action;
use super::win::is_winning;
use super::Outcome;
use crate::core::{Action, ActionError, Board, Side};

/// Place `action.value` into `action.position`.
///
/// The action is validated for `side` first; on error the board is left
/// untouched. On success exactly one cell changes.
pub fn apply_action(board: &mut Board, side: Side, action: Action) -> Result<(), ActionError> {
    validate_action(board, side, action)?;
    board.place(action.position, action.value);
    trace!(%side, %action, "placed value");
    Ok(())
}

/// Classify a board.
///
/// Returns `(true, Win)` if some line sums to 15, else `(true, Tie)` if the
/// board is full, else `(false, Resume)`. A full board with a winning line is
/// a `Win`.
#[must_use]
pub fn is_terminal(board: &Board) -> (bool, Outcome) {
    if is_winning(board) {
        (true, Outcome::Win)
    } else if board.is_full() {
        (true, Outcome::Tie)
    } else {
        (false, Outcome::Resume)
    }
}
