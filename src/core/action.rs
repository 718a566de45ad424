//! Actions: a number placed into a cell by one of the two sides.
//!
//! The agent owns the odd numbers and the environment owns the even ones.
//! `Side` carries that parity rule so legality checks never hardcode it.

use serde::{Deserialize, Serialize};

use super::board::{Position, Value};
use super::error::ActionError;

/// Which side is moving.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// The learning player (odd values).
    Agent,
    /// The random counter-player (even values).
    Environment,
}

impl Side {
    /// Check if a value belongs to this side's pool.
    #[must_use]
    pub const fn owns(self, value: Value) -> bool {
        match self {
            Side::Agent => value.is_odd(),
            Side::Environment => !value.is_odd(),
        }
    }

    /// The full value pool of this side, ascending.
    pub fn pool(self) -> impl Iterator<Item = Value> {
        Value::all().filter(move |v| self.owns(*v))
    }

    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Side::Agent => Side::Environment,
            Side::Environment => Side::Agent,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Agent => write!(f, "agent"),
            Side::Environment => write!(f, "environment"),
        }
    }
}

/// A placement: put `value` into the cell at `position`.
///
/// ## Example
///
/// ```
/// use numeric_tictactoe::core::Action;
///
/// let action = Action::try_new(7, 9).unwrap();
/// assert_eq!(action.position.index(), 7);
/// assert_eq!(action.value.get(), 9);
///
/// assert!(Action::try_new(9, 1).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Action {
    /// Target cell.
    pub position: Position,

    /// Number to place.
    pub value: Value,
}

impl Action {
    /// Create an action from already-validated parts.
    #[must_use]
    pub const fn new(position: Position, value: Value) -> Self {
        Self { position, value }
    }

    /// Create an action from raw numbers, checking ranges only.
    ///
    /// Whether the action is legal on a given board is decided by
    /// `rules::validate_action`.
    pub fn try_new(position: usize, value: u8) -> Result<Self, ActionError> {
        Ok(Self {
            position: Position::new(position)?,
            value: Value::new(value)?,
        })
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.position, self.value)
    }
}

/// A recorded action with metadata for episode history.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// Side that made the move.
    pub side: Side,

    /// The action taken.
    pub action: Action,

    /// Ply number within the episode (0-indexed, counts both sides).
    pub ply: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub const fn new(side: Side, action: Action, ply: u32) -> Self {
        Self { side, action, ply }
    }
}
