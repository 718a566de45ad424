//! Training data records.
//!
//! - **Transition**: one agent decision, its reward and the resulting board
//! - **Trajectory**: all transitions of an episode plus its outcome
//!
//! Episodes are driven by `env::Episode`, which fills a `Trajectory` as it
//! steps.
//!
//! ```
//! use numeric_tictactoe::core::EnvConfig;
//! use numeric_tictactoe::env::{Episode, TicTacToeEnv};
//!
//! let mut env = TicTacToeEnv::new(EnvConfig::default());
//! let mut episode = Episode::start(&env);
//!
//! while !episode.is_over() {
//!     let action = episode.legal_actions()[0];
//!     episode.step(&mut env, action).unwrap();
//! }
//!
//! let trajectory = episode.into_trajectory();
//! assert!(trajectory.is_complete());
//! ```

pub mod trajectory;

pub use trajectory::{Trajectory, Transition};
