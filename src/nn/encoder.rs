//! State encoding for value tables and neural network input.
//!
//! Transforms boards into tensor representations and maps actions to flat
//! policy indices.

use serde::{Deserialize, Serialize};

use crate::core::{Action, Board, Cell, BOARD_SIZE, MAX_VALUE};

/// Channels per cell: one for empty, one per value 1-9.
pub const CHANNELS: usize = MAX_VALUE as usize + 1;

/// Number of distinct `(position, value)` pairs.
pub const ACTION_SPACE_SIZE: usize = BOARD_SIZE * MAX_VALUE as usize;

/// Encoded board ready for a network.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EncodedState {
    /// Flat tensor data (row-major).
    pub tensor: Vec<f32>,

    /// Tensor shape.
    pub shape: Vec<usize>,
}

impl EncodedState {
    /// Create an encoded state.
    pub fn new(tensor: Vec<f32>, shape: Vec<usize>) -> Self {
        Self { tensor, shape }
    }

    /// Total number of elements.
    pub fn len(&self) -> usize {
        self.tensor.len()
    }

    /// Check if the tensor is empty.
    pub fn is_empty(&self) -> bool {
        self.tensor.is_empty()
    }
}

/// Encodes boards into tensors.
pub trait StateEncoder: Send + Sync {
    /// Encode a board.
    fn encode(&self, board: &Board) -> EncodedState;

    /// Get the shape of encoded states.
    fn output_shape(&self) -> Vec<usize>;

    /// Size of the policy output vector.
    fn action_space_size(&self) -> usize {
        ACTION_SPACE_SIZE
    }
}

/// One-hot encoder: 9 cells × 10 channels.
///
/// Channel 0 marks an empty cell, channel `v` marks value `v`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BoardEncoder;

impl StateEncoder for BoardEncoder {
    fn encode(&self, board: &Board) -> EncodedState {
        let mut tensor = vec![0.0f32; BOARD_SIZE * CHANNELS];

        for (i, cell) in board.cells().iter().enumerate() {
            let channel = match cell {
                Cell::Empty => 0,
                Cell::Filled(v) => v.get() as usize,
            };
            tensor[i * CHANNELS + channel] = 1.0;
        }

        EncodedState::new(tensor, vec![BOARD_SIZE, CHANNELS])
    }

    fn output_shape(&self) -> Vec<usize> {
        vec![BOARD_SIZE, CHANNELS]
    }
}

/// Flat index of an action: `position * 9 + (value - 1)`.
#[must_use]
pub fn action_index(action: Action) -> usize {
    action.position.index() * MAX_VALUE as usize + (action.value.get() as usize - 1)
}

/// Inverse of [`action_index`]. `None` if out of range.
#[must_use]
pub fn action_from_index(index: usize) -> Option<Action> {
    if index >= ACTION_SPACE_SIZE {
        return None;
    }
    let per_cell = MAX_VALUE as usize;
    Action::try_new(index / per_cell, (index % per_cell) as u8 + 1).ok()
}

/// String key for tabular methods: cells joined by `-`, `x` for empty.
///
/// ```
/// use numeric_tictactoe::core::Board;
/// use numeric_tictactoe::nn::state_key;
///
/// let board = Board::from_values([Some(1), None, Some(2), None, None, None, None, None, None]).unwrap();
/// assert_eq!(state_key(&board), "1-x-2-x-x-x-x-x-x");
/// ```
#[must_use]
pub fn state_key(board: &Board) -> String {
    board
        .cells()
        .iter()
        .map(|cell| match cell {
            Cell::Empty => "x".to_string(),
            Cell::Filled(v) => v.to_string(),
        })
        .collect::<Vec<_>>()
        .join("-")
}
