//! Game semantics for numeric Tic-Tac-Toe.
//!
//! - `legal`: empty positions, value pools, action spaces, validation
//! - `win`: the 8 lines and the sum-to-15 check
//! - `transition`: applying actions and terminal detection
//!
//! All functions are free functions over `&Board`; the only stateful piece
//! of the engine (the opponent's RNG) lives in `env`.

pub mod legal;
pub mod transition;
pub mod win;

pub use legal::{
    action_space, allowed_positions, allowed_values, allowed_values_for, legal_actions,
    validate_action, ActionSpace, AllowedValues,
};
pub use transition::{apply_action, is_terminal};
pub use win::{is_winning, line_sum, winning_line, LINES, WIN_SUM};

use serde::{Deserialize, Serialize};

/// Status of a board after a placement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The episode continues.
    Resume,
    /// Some line sums to 15.
    Win,
    /// No line sums to 15 and no empty cell remains.
    Tie,
}

impl Outcome {
    /// Check if this outcome ends the episode.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Outcome::Resume)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Resume => write!(f, "Resume"),
            Outcome::Win => write!(f, "Win"),
            Outcome::Tie => write!(f, "Tie"),
        }
    }
}
