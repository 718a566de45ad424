//! Board representation: 9 cells, each empty or holding a distinct number.
//!
//! ## Layout
//!
//! Cells are stored row-major:
//!
//! ```text
//!  0 | 1 | 2
//! ---+---+---
//!  3 | 4 | 5
//! ---+---+---
//!  6 | 7 | 8
//! ```
//!
//! ## Invariants
//!
//! - Every value 1-9 appears at most once.
//! - Empty is a distinct variant, never a number, so it cannot take part in
//!   line arithmetic by accident.
//!
//! Mutation goes through `rules::apply_action`, which validates before
//! writing. `Board` is `Copy` (9 bytes of payload), so callers that want to
//! keep the previous position simply copy it.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::ops::Index;

use super::error::ActionError;

/// Number of cells on the board.
pub const BOARD_SIZE: usize = 9;

/// Largest value that may be placed.
pub const MAX_VALUE: u8 = 9;

/// Cell index in `0..9`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Position(u8);

impl Position {
    /// Create a position, rejecting indices outside the board.
    pub fn new(index: usize) -> Result<Self, ActionError> {
        if index < BOARD_SIZE {
            Ok(Self(index as u8))
        } else {
            Err(ActionError::PositionOutOfRange(index))
        }
    }

    /// Get the cell index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Row (0-2).
    #[must_use]
    pub const fn row(self) -> usize {
        self.0 as usize / 3
    }

    /// Column (0-2).
    #[must_use]
    pub const fn col(self) -> usize {
        self.0 as usize % 3
    }

    /// Iterate over all 9 positions in ascending order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..BOARD_SIZE as u8).map(Position)
    }
}

impl TryFrom<u8> for Position {
    type Error = ActionError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Self::new(index as usize)
    }
}

impl From<Position> for u8 {
    fn from(pos: Position) -> Self {
        pos.0
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A number in `1..=9`.
///
/// Odd values belong to the agent, even values to the environment.
/// See [`Side`](super::action::Side).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Value(u8);

impl Value {
    /// Create a value, rejecting anything outside `1..=9`.
    pub fn new(value: u8) -> Result<Self, ActionError> {
        if (1..=MAX_VALUE).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ActionError::ValueOutOfRange(value))
        }
    }

    /// Get the raw number.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Check if the value is odd (agent pool).
    #[must_use]
    pub const fn is_odd(self) -> bool {
        self.0 % 2 == 1
    }

    /// Iterate over all values 1-9 in ascending order.
    pub fn all() -> impl Iterator<Item = Value> {
        (1..=MAX_VALUE).map(Value)
    }

    /// Bit used for this value in a used-value mask.
    pub(crate) const fn bit(self) -> u16 {
        1 << self.0
    }
}

impl TryFrom<u8> for Value {
    type Error = ActionError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Value> for u8 {
    fn from(value: Value) -> Self {
        value.0
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Contents of a single cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// No value placed yet.
    #[default]
    Empty,
    /// Holds a placed value.
    Filled(Value),
}

impl Cell {
    /// Check if the cell is empty.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Get the placed value, if any.
    #[must_use]
    pub const fn value(self) -> Option<Value> {
        match self {
            Cell::Empty => None,
            Cell::Filled(v) => Some(v),
        }
    }
}

/// The 9-cell game position.
///
/// Serializes as 9 `Option<u8>` entries; deserializing re-checks that no
/// value repeats.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "[Option<u8>; BOARD_SIZE]", into = "[Option<u8>; BOARD_SIZE]")]
pub struct Board {
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create an all-empty board.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [Cell::Empty; BOARD_SIZE],
        }
    }

    /// Build a board from explicit cells.
    ///
    /// Fails with `ValueAlreadyUsed` if any value appears twice.
    pub fn from_cells(cells: [Cell; BOARD_SIZE]) -> Result<Self, ActionError> {
        let mut used = 0u16;
        for value in cells.iter().filter_map(|c| c.value()) {
            if used & value.bit() != 0 {
                return Err(ActionError::ValueAlreadyUsed(value));
            }
            used |= value.bit();
        }
        Ok(Self { cells })
    }

    /// Build a board from raw numbers, `None` meaning empty.
    ///
    /// ```
    /// use numeric_tictactoe::core::Board;
    ///
    /// let board = Board::from_values([Some(1), Some(2), None, None, None, None, None, None, None]).unwrap();
    /// assert_eq!(board.filled_count(), 2);
    /// ```
    pub fn from_values(values: [Option<u8>; BOARD_SIZE]) -> Result<Self, ActionError> {
        let mut cells = [Cell::Empty; BOARD_SIZE];
        for (cell, raw) in cells.iter_mut().zip(values) {
            if let Some(raw) = raw {
                *cell = Cell::Filled(Value::new(raw)?);
            }
        }
        Self::from_cells(cells)
    }

    /// Raw numbers per cell, `None` meaning empty.
    #[must_use]
    pub fn to_values(&self) -> [Option<u8>; BOARD_SIZE] {
        self.cells.map(|c| c.value().map(Value::get))
    }

    /// All cells in row-major order.
    #[must_use]
    pub const fn cells(&self) -> &[Cell; BOARD_SIZE] {
        &self.cells
    }

    /// Get the cell at a position.
    #[must_use]
    pub const fn get(&self, pos: Position) -> Cell {
        self.cells[pos.index()]
    }

    /// Check if the cell at a position is empty.
    #[must_use]
    pub const fn is_empty_at(&self, pos: Position) -> bool {
        self.get(pos).is_empty()
    }

    /// Number of filled cells.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// Check if no empty cell remains.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    /// Check if a value is already on the board.
    #[must_use]
    pub fn contains_value(&self, value: Value) -> bool {
        self.used_mask() & value.bit() != 0
    }

    /// Values currently on the board, in ascending order.
    #[must_use]
    pub fn used_values(&self) -> SmallVec<[Value; BOARD_SIZE]> {
        let mask = self.used_mask();
        Value::all().filter(|v| mask & v.bit() != 0).collect()
    }

    /// Bit set of values on the board (bit `n` set = value `n` used).
    pub(crate) fn used_mask(&self) -> u16 {
        self.cells
            .iter()
            .filter_map(|c| c.value())
            .fold(0, |mask, v| mask | v.bit())
    }

    /// Write a value without validation.
    ///
    /// Only `rules::apply_action` calls this, after checking legality.
    pub(crate) fn place(&mut self, pos: Position, value: Value) {
        self.cells[pos.index()] = Cell::Filled(value);
    }
}

impl TryFrom<[Option<u8>; BOARD_SIZE]> for Board {
    type Error = ActionError;

    fn try_from(values: [Option<u8>; BOARD_SIZE]) -> Result<Self, Self::Error> {
        Self::from_values(values)
    }
}

impl From<Board> for [Option<u8>; BOARD_SIZE] {
    fn from(board: Board) -> Self {
        board.to_values()
    }
}

impl Index<Position> for Board {
    type Output = Cell;

    fn index(&self, pos: Position) -> &Cell {
        &self.cells[pos.index()]
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            if row > 0 {
                writeln!(f, "---+---+---")?;
            }
            let cells: Vec<String> = self.cells[row * 3..row * 3 + 3]
                .iter()
                .map(|c| match c {
                    Cell::Empty => " . ".to_string(),
                    Cell::Filled(v) => format!(" {} ", v),
                })
                .collect();
            writeln!(f, "{}", cells.join("|"))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(i: usize) -> Position {
        Position::new(i).unwrap()
    }

    fn val(v: u8) -> Value {
        Value::new(v).unwrap()
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();

        assert_eq!(board.filled_count(), 0);
        assert!(!board.is_full());
        assert!(Position::all().all(|p| board.is_empty_at(p)));
        assert!(board.used_values().is_empty());
    }

    #[test]
    fn test_position_bounds() {
        assert!(Position::new(0).is_ok());
        assert!(Position::new(8).is_ok());
        assert_eq!(Position::new(9), Err(ActionError::PositionOutOfRange(9)));
    }

    #[test]
    fn test_position_row_col() {
        assert_eq!((pos(0).row(), pos(0).col()), (0, 0));
        assert_eq!((pos(5).row(), pos(5).col()), (1, 2));
        assert_eq!((pos(7).row(), pos(7).col()), (2, 1));
    }

    #[test]
    fn test_value_bounds() {
        assert_eq!(Value::new(0), Err(ActionError::ValueOutOfRange(0)));
        assert_eq!(Value::new(10), Err(ActionError::ValueOutOfRange(10)));
        assert_eq!(val(9).get(), 9);
        assert!(val(7).is_odd());
        assert!(!val(4).is_odd());
    }

    #[test]
    fn test_from_values_rejects_duplicates() {
        let result = Board::from_values([Some(3), None, Some(3), None, None, None, None, None, None]);
        assert_eq!(result, Err(ActionError::ValueAlreadyUsed(val(3))));
    }

    #[test]
    fn test_from_values_rejects_out_of_range() {
        let result = Board::from_values([Some(11), None, None, None, None, None, None, None, None]);
        assert_eq!(result, Err(ActionError::ValueOutOfRange(11)));
    }

    #[test]
    fn test_used_values_sorted() {
        let board =
            Board::from_values([Some(8), None, Some(1), None, Some(5), None, None, None, None]).unwrap();

        assert_eq!(board.used_values().as_slice(), &[val(1), val(5), val(8)]);
        assert!(board.contains_value(val(5)));
        assert!(!board.contains_value(val(2)));
    }

    #[test]
    fn test_values_round_trip() {
        let values = [Some(1), Some(2), Some(3), Some(4), None, None, None, Some(9), None];
        let board = Board::from_values(values).unwrap();
        assert_eq!(board.to_values(), values);
    }

    #[test]
    fn test_index_and_get_agree() {
        let board = Board::from_values([None, None, None, None, Some(6), None, None, None, None]).unwrap();
        assert_eq!(board[pos(4)], Cell::Filled(val(6)));
        assert_eq!(board.get(pos(4)).value(), Some(val(6)));
        assert!(board[pos(0)].is_empty());
    }

    #[test]
    fn test_display() {
        let board =
            Board::from_values([Some(1), None, None, None, Some(5), None, None, None, Some(9)]).unwrap();
        let text = board.to_string();

        assert_eq!(text.lines().count(), 5);
        assert!(text.starts_with(" 1 | . | . "));
    }

    #[test]
    fn test_serde_rejects_invalid_position() {
        assert!(serde_json::from_str::<Position>("9").is_err());
        assert_eq!(serde_json::from_str::<Position>("3").unwrap(), pos(3));
    }

    #[test]
    fn test_board_serialization() {
        let board = Board::from_values([Some(1), Some(2), None, None, None, None, None, None, None]).unwrap();
        let json = serde_json::to_string(&board).unwrap();
        let deserialized: Board = serde_json::from_str(&json).unwrap();

        assert_eq!(json, "[1,2,null,null,null,null,null,null,null]");
        assert_eq!(board, deserialized);
    }

    #[test]
    fn test_board_deserialization_checks_duplicates() {
        let json = "[4,null,null,4,null,null,null,null,null]";
        assert!(serde_json::from_str::<Board>(json).is_err());
    }
}
