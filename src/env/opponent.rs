//! Opponent (environment) move selection.
//!
//! The environment has no intelligence: `UniformOpponent` draws an empty
//! position and an unused even value independently and uniformly. The trait
//! exists so the RNG and the draw can be exercised in isolation.

use crate::core::{Action, Board, GameRng, Side};
use crate::rules::{allowed_positions, allowed_values_for};

/// Policy for choosing the environment's reply.
pub trait OpponentPolicy: Send + Sync {
    /// Choose an action for the environment.
    ///
    /// Returns `None` if no empty cell or no even value remains.
    fn choose_action(&self, board: &Board, rng: &mut GameRng) -> Option<Action>;
}

/// Uniform random opponent.
///
/// Position and value are drawn independently, each uniformly from its
/// legal set, so every legal `(position, value)` pair is equally likely.
#[derive(Clone, Copy, Debug, Default)]
pub struct UniformOpponent;

impl OpponentPolicy for UniformOpponent {
    fn choose_action(&self, board: &Board, rng: &mut GameRng) -> Option<Action> {
        let positions = allowed_positions(board);
        let values = allowed_values_for(board, Side::Environment);

        let position = *rng.choose(&positions)?;
        let value = *rng.choose(&values)?;
        Some(Action::new(position, value))
    }
}
