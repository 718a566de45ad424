//! Environment bindings for Python.

use numpy::PyArray1;
use pyo3::prelude::*;

use crate::core::EnvConfig;
use crate::env::TicTacToeEnv;
use crate::nn::{state_key, BoardEncoder, StateEncoder};
use crate::rules;

use super::py_core::{action_from_py, action_to_py, board_from_py, board_to_py, to_py_err};

type PyBoard = Vec<Option<u8>>;
type PyAction = (usize, u8);

/// Python wrapper for TicTacToeEnv.
///
/// Each instance owns its own seeded opponent RNG.
#[pyclass(name = "TicTacToeEnv")]
pub struct PyTicTacToeEnv {
    inner: TicTacToeEnv,
}

#[pymethods]
impl PyTicTacToeEnv {
    /// Create a new environment.
    ///
    /// # Arguments
    /// - seed: RNG seed for the opponent's moves
    #[new]
    #[pyo3(signature = (seed = 42))]
    fn new(seed: u64) -> Self {
        Self {
            inner: TicTacToeEnv::new(EnvConfig::default().with_seed(seed)),
        }
    }

    /// Fresh all-empty board.
    fn reset(&self) -> PyBoard {
        board_to_py(&self.inner.reset())
    }

    /// Empty positions, ascending.
    fn allowed_positions(&self, board: PyBoard) -> PyResult<Vec<usize>> {
        let board = board_from_py(board)?;
        Ok(rules::allowed_positions(&board)
            .iter()
            .map(|p| p.index())
            .collect())
    }

    /// Unused values as `(agent_values, env_values)`.
    fn allowed_values(&self, board: PyBoard) -> PyResult<(Vec<u8>, Vec<u8>)> {
        let values = rules::allowed_values(&board_from_py(board)?);
        Ok((
            values.agent.iter().map(|v| v.get()).collect(),
            values.env.iter().map(|v| v.get()).collect(),
        ))
    }

    /// Legal actions as `(agent_actions, env_actions)`.
    fn action_space(&self, board: PyBoard) -> PyResult<(Vec<PyAction>, Vec<PyAction>)> {
        let space = self.inner.action_space(&board_from_py(board)?);
        Ok((
            space.agent.into_iter().map(action_to_py).collect(),
            space.env.into_iter().map(action_to_py).collect(),
        ))
    }

    /// Check if any line sums to 15.
    fn is_winning(&self, board: PyBoard) -> PyResult<bool> {
        Ok(rules::is_winning(&board_from_py(board)?))
    }

    /// Returns `(terminal, "Win" | "Tie" | "Resume")`.
    fn is_terminal(&self, board: PyBoard) -> PyResult<(bool, String)> {
        let (done, outcome) = self.inner.is_terminal(&board_from_py(board)?);
        Ok((done, outcome.to_string()))
    }

    /// Agent move plus random reply.
    ///
    /// Returns `(next_board, reward, outcome)`. Raises `ValueError` for an
    /// illegal action or a finished game.
    fn step(&mut self, board: PyBoard, action: PyAction) -> PyResult<(PyBoard, i32, String)> {
        let mut board = board_from_py(board)?;
        let action = action_from_py(action)?;
        let result = self.inner.step(&mut board, action).map_err(to_py_err)?;
        Ok((board_to_py(&result.board), result.reward, result.outcome.to_string()))
    }

    /// One-hot encoding as a flat numpy array (9 × 10).
    fn encode<'py>(&self, py: Python<'py>, board: PyBoard) -> PyResult<Bound<'py, PyArray1<f32>>> {
        let encoded = BoardEncoder.encode(&board_from_py(board)?);
        Ok(PyArray1::from_slice_bound(py, &encoded.tensor))
    }

    /// Q-table key such as `"1-x-3-x-x-x-x-x-x"`.
    fn state_key(&self, board: PyBoard) -> PyResult<String> {
        Ok(state_key(&board_from_py(board)?))
    }

    /// Seed of the opponent RNG.
    #[getter]
    fn seed(&self) -> u64 {
        self.inner.config().seed
    }

    fn __repr__(&self) -> String {
        format!("TicTacToeEnv(seed={})", self.inner.config().seed)
    }
}
