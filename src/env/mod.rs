//! The reinforcement-learning environment.
//!
//! - `TicTacToeEnv`: `reset`, `action_space`, `step`, `is_terminal`
//! - `OpponentPolicy` / `UniformOpponent`: the environment's random reply
//! - `Episode`: drives one game and records its trajectory
//!
//! `step` is two-ply: the agent's odd number, then (unless that move ended
//! the game) one uniformly random even reply, all in one call.

pub mod episode;
pub mod game;
pub mod opponent;

pub use episode::Episode;
pub use game::{StepResult, TicTacToeEnv};
pub use opponent::{OpponentPolicy, UniformOpponent};
