//! Python bindings for the numeric Tic-Tac-Toe engine.
//!
//! Built with the `python` feature. Training loops written in Python drive
//! the env directly.
//!
//! # Quick Start
//!
//! ```python
//! import numeric_tictactoe as ntt
//!
//! env = ntt.TicTacToeEnv(seed=42)
//! board = env.reset()
//!
//! agent_actions, _ = env.action_space(board)
//! board, reward, outcome = env.step(board, agent_actions[0])
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_env;

pub use py_core::*;
pub use py_env::*;

/// numeric_tictactoe: sum-to-15 Tic-Tac-Toe environment for RL training.
#[pymodule]
fn numeric_tictactoe(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyTicTacToeEnv>()?;

    Ok(())
}
