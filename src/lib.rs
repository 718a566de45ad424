//! # numeric-tictactoe
//!
//! Rules engine for numeric Tic-Tac-Toe, used as a reinforcement-learning
//! environment.
//!
//! Players fill the 9 cells with distinct numbers 1-9. The agent plays odd
//! numbers, the environment plays even numbers uniformly at random, and any
//! row, column or diagonal summing to 15 wins.
//!
//! ## Design Principles
//!
//! 1. **Exact Semantics**: Empty cells are a tagged variant, never a number,
//!    so a partially filled line can never sum to 15.
//!
//! 2. **Validate Before Mutate**: Illegal placements fail with a distinct
//!    `ActionError` and leave the board untouched.
//!
//! 3. **Explicit Randomness**: The opponent's RNG is owned by the env and
//!    built from a seed. Same seed, same episode.
//!
//! ## Modules
//!
//! - `core`: Board, cells, actions, sides, RNG, configuration, errors
//! - `rules`: Legal moves, win and terminal detection, transitions
//! - `env`: `TicTacToeEnv::step` (agent move + random reply), episodes
//! - `training`: Transition and trajectory records
//! - `nn`: Board encodings and action indices
//! - `python`: PyO3 bindings (`python` feature)

pub mod core;
pub mod env;
pub mod nn;
pub mod rules;
pub mod training;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionError, ActionRecord, Board, Cell, EnvConfig, GameRng, GameRngState, Position,
    RewardConfig, Side, Value,
};

pub use crate::rules::{
    action_space, allowed_positions, allowed_values, apply_action, is_terminal, is_winning,
    ActionSpace, AllowedValues, Outcome,
};

pub use crate::env::{Episode, OpponentPolicy, StepResult, TicTacToeEnv, UniformOpponent};

pub use crate::training::{Trajectory, Transition};

pub use crate::nn::{state_key, BoardEncoder, EncodedState, StateEncoder};
