//! Conversions between Python values and core types.
//!
//! Boards cross the boundary as a list of 9 `Optional[int]` (`None` = empty),
//! actions as `(position, value)` tuples.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{Action, ActionError, Board, BOARD_SIZE};

/// Map a rules error to `ValueError`.
pub fn to_py_err(err: ActionError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

/// Parse a Python board list.
pub fn board_from_py(values: Vec<Option<u8>>) -> PyResult<Board> {
    let values: [Option<u8>; BOARD_SIZE] = values.try_into().map_err(|v: Vec<Option<u8>>| {
        PyValueError::new_err(format!("board must have {} cells, got {}", BOARD_SIZE, v.len()))
    })?;
    Board::from_values(values).map_err(to_py_err)
}

/// Board as a Python list.
pub fn board_to_py(board: &Board) -> Vec<Option<u8>> {
    board.to_values().to_vec()
}

/// Parse a `(position, value)` tuple.
pub fn action_from_py((position, value): (usize, u8)) -> PyResult<Action> {
    Action::try_new(position, value).map_err(to_py_err)
}

/// Action as a `(position, value)` tuple.
pub fn action_to_py(action: Action) -> (usize, u8) {
    (action.position.index(), action.value.get())
}
