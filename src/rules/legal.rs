//! Legal move enumeration and validation.
//!
//! A move is legal for a side iff:
//! - its position is empty,
//! - its value is not yet on the board,
//! - its value is in the side's parity pool (odd for the agent, even for the
//!   environment).
//!
//! Every list returned here is in ascending order so enumeration is
//! deterministic.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Action, ActionError, Board, Position, Side, Value, BOARD_SIZE};

/// Empty positions, ascending. Empty on a full board.
#[must_use]
pub fn allowed_positions(board: &Board) -> SmallVec<[Position; BOARD_SIZE]> {
    Position::all().filter(|p| board.is_empty_at(*p)).collect()
}

/// Unused values per side.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllowedValues {
    /// Unused odd values, ascending.
    pub agent: SmallVec<[Value; 5]>,

    /// Unused even values, ascending.
    pub env: SmallVec<[Value; 5]>,
}

impl AllowedValues {
    /// Values available to one side.
    #[must_use]
    pub fn for_side(&self, side: Side) -> &[Value] {
        match side {
            Side::Agent => &self.agent,
            Side::Environment => &self.env,
        }
    }
}

/// Unused values of one side, ascending.
#[must_use]
pub fn allowed_values_for(board: &Board, side: Side) -> SmallVec<[Value; 5]> {
    side.pool().filter(|v| !board.contains_value(*v)).collect()
}

/// Unused values for both sides.
#[must_use]
pub fn allowed_values(board: &Board) -> AllowedValues {
    AllowedValues {
        agent: allowed_values_for(board, Side::Agent),
        env: allowed_values_for(board, Side::Environment),
    }
}

/// Every currently legal action, per side.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionSpace {
    /// Empty positions × unused odd values.
    pub agent: Vec<Action>,

    /// Empty positions × unused even values.
    pub env: Vec<Action>,
}

impl ActionSpace {
    /// Actions available to one side.
    #[must_use]
    pub fn for_side(&self, side: Side) -> &[Action] {
        match side {
            Side::Agent => &self.agent,
            Side::Environment => &self.env,
        }
    }
}

/// Legal actions for one side: the Cartesian product of empty positions and
/// that side's unused values, position-major.
#[must_use]
pub fn legal_actions(board: &Board, side: Side) -> Vec<Action> {
    let positions = allowed_positions(board);
    let values = allowed_values_for(board, side);

    let mut actions = Vec::with_capacity(positions.len() * values.len());
    for &position in &positions {
        for &value in &values {
            actions.push(Action::new(position, value));
        }
    }
    actions
}

/// Legal actions for both sides.
#[must_use]
pub fn action_space(board: &Board) -> ActionSpace {
    ActionSpace {
        agent: legal_actions(board, Side::Agent),
        env: legal_actions(board, Side::Environment),
    }
}

/// Check that `side` may play `action` on `board`.
///
/// Checks run in order: occupied cell, reused value, wrong parity.
pub fn validate_action(board: &Board, side: Side, action: Action) -> Result<(), ActionError> {
    if !board.is_empty_at(action.position) {
        return Err(ActionError::CellOccupied(action.position));
    }
    if board.contains_value(action.value) {
        return Err(ActionError::ValueAlreadyUsed(action.value));
    }
    if !side.owns(action.value) {
        return Err(ActionError::WrongParity {
            side,
            value: action.value,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(values: [Option<u8>; 9]) -> Board {
        Board::from_values(values).unwrap()
    }

    fn raw_positions(board: &Board) -> Vec<usize> {
        allowed_positions(board).iter().map(|p| p.index()).collect()
    }

    fn raw(values: &[Value]) -> Vec<u8> {
        values.iter().map(|v| v.get()).collect()
    }

    #[test]
    fn test_empty_board_positions() {
        assert_eq!(raw_positions(&Board::new()), (0..9).collect::<Vec<_>>());
    }

    #[test]
    fn test_positions_skip_filled() {
        let b = board([Some(1), Some(2), Some(3), Some(4), None, None, None, None, None]);
        assert_eq!(raw_positions(&b), vec![4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_full_board_has_nothing_allowed() {
        let b = board([Some(1), Some(2), Some(3), Some(4), Some(5), Some(7), Some(6), Some(9), Some(8)]);

        assert!(allowed_positions(&b).is_empty());
        let values = allowed_values(&b);
        assert!(values.agent.is_empty());
        assert!(values.env.is_empty());
        let space = action_space(&b);
        assert!(space.agent.is_empty());
        assert!(space.env.is_empty());
    }

    #[test]
    fn test_allowed_values_by_parity() {
        let b = board([Some(1), Some(2), Some(3), Some(4), None, None, None, None, None]);
        let values = allowed_values(&b);

        assert_eq!(raw(&values.agent), vec![5, 7, 9]);
        assert_eq!(raw(&values.env), vec![6, 8]);
        assert_eq!(raw(values.for_side(Side::Environment)), vec![6, 8]);
    }

    #[test]
    fn test_action_space_is_product() {
        let b = board([Some(1), Some(2), Some(3), Some(4), None, None, None, None, None]);
        let space = action_space(&b);

        // 5 empty cells × {5, 7, 9} and × {6, 8}
        assert_eq!(space.agent.len(), 15);
        assert_eq!(space.env.len(), 10);
        assert_eq!(space.agent[0], Action::try_new(4, 5).unwrap());
        assert_eq!(space.agent[1], Action::try_new(4, 7).unwrap());
        assert_eq!(space.env.last(), Some(&Action::try_new(8, 8).unwrap()));
        assert_eq!(space.for_side(Side::Agent), space.agent.as_slice());
    }

    #[test]
    fn test_initial_action_space_size() {
        let space = action_space(&Board::new());
        assert_eq!(space.agent.len(), 45);
        assert_eq!(space.env.len(), 36);
    }

    #[test]
    fn test_validate_accepts_legal() {
        let b = board([Some(1), None, None, None, None, None, None, None, None]);
        assert!(validate_action(&b, Side::Agent, Action::try_new(4, 5).unwrap()).is_ok());
        assert!(validate_action(&b, Side::Environment, Action::try_new(4, 2).unwrap()).is_ok());
    }

    #[test]
    fn test_validate_rejects_occupied() {
        let b = board([Some(1), None, None, None, None, None, None, None, None]);
        let action = Action::try_new(0, 3).unwrap();

        assert_eq!(
            validate_action(&b, Side::Agent, action),
            Err(ActionError::CellOccupied(action.position))
        );
    }

    #[test]
    fn test_validate_rejects_reused_value() {
        let b = board([Some(1), None, None, None, None, None, None, None, None]);
        let action = Action::try_new(5, 1).unwrap();

        assert_eq!(
            validate_action(&b, Side::Agent, action),
            Err(ActionError::ValueAlreadyUsed(action.value))
        );
    }

    #[test]
    fn test_validate_rejects_wrong_parity() {
        let action = Action::try_new(5, 4).unwrap();

        assert_eq!(
            validate_action(&Board::new(), Side::Agent, action),
            Err(ActionError::WrongParity {
                side: Side::Agent,
                value: action.value
            })
        );
    }
}
