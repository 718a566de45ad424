//! Win detection: a row, column or diagonal summing to exactly 15.

use crate::core::{Board, Position};

/// Target sum for a winning line.
pub const WIN_SUM: u8 = 15;

/// The 8 lines as cell indices: 3 rows, 3 columns, 2 diagonals.
pub const LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Sum of a line, or `None` if any of its cells is empty.
#[must_use]
pub fn line_sum(board: &Board, line: [usize; 3]) -> Option<u8> {
    let cells = board.cells();
    line.iter()
        .map(|&i| cells[i].value().map(|v| v.get()))
        .sum()
}

/// Check if any fully filled line sums to exactly 15.
///
/// Lines that still contain an empty cell never count, whatever the sum of
/// their filled cells.
#[must_use]
pub fn is_winning(board: &Board) -> bool {
    LINES.iter().any(|&line| line_sum(board, line) == Some(WIN_SUM))
}

/// The first winning line, if any (rows, then columns, then diagonals).
#[must_use]
pub fn winning_line(board: &Board) -> Option<[Position; 3]> {
    LINES
        .iter()
        .find(|&&line| line_sum(board, line) == Some(WIN_SUM))
        .and_then(|line| {
            Some([
                Position::new(line[0]).ok()?,
                Position::new(line[1]).ok()?,
                Position::new(line[2]).ok()?,
            ])
        })
}
