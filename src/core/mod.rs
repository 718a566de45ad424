//! Core types: board, cells, actions, sides, RNG, configuration, errors.
//!
//! Everything here is plain data. Game semantics (legality, wins, terminal
//! detection) live in `rules`.

pub mod action;
pub mod board;
pub mod config;
pub mod error;
pub mod rng;

pub use action::{Action, ActionRecord, Side};
pub use board::{Board, Cell, Position, Value, BOARD_SIZE, MAX_VALUE};
pub use config::{EnvConfig, RewardConfig};
pub use error::ActionError;
pub use rng::{GameRng, GameRngState};
