//! Winning line analysis for Tic-Tac-Toe

use super::{Cell, Side};

/// Winning line indices on the 3x3 board, rows first, then columns, then diagonals
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Mark tally for a single line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineCounts {
    pub computer: usize,
    pub player: usize,
    pub empty: usize,
}

impl LineCounts {
    /// Exactly one mark of `side` and nothing else on the line
    pub fn is_lone_mark(&self, side: Side) -> bool {
        let own = match side {
            Side::Computer => self.computer,
            Side::Player => self.player,
        };
        own == 1 && self.empty == 2
    }
}

/// Utility for analyzing winning lines in Tic-Tac-Toe
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// Check if a side holds all three cells of any line
    pub fn has_won(cells: &[Cell; 9], side: Side) -> bool {
        let target = side.to_cell();
        WINNING_LINES
            .iter()
            .any(|line| line.iter().all(|&idx| cells[idx] == target))
    }

    /// First completed line in row, column, diagonal order
    pub fn winner(cells: &[Cell; 9]) -> Option<Side> {
        WINNING_LINES.iter().find_map(|&[a, b, c]| {
            if cells[a] != Cell::Empty && cells[a] == cells[b] && cells[b] == cells[c] {
                cells[a].owner()
            } else {
                None
            }
        })
    }

    /// Count computer marks, player marks and empty cells on a line
    pub fn line_counts(cells: &[Cell; 9], line: &[usize; 3]) -> LineCounts {
        let mut counts = LineCounts::default();
        for &idx in line {
            match cells[idx] {
                Cell::Computer => counts.computer += 1,
                Cell::Player => counts.player += 1,
                Cell::Empty => counts.empty += 1,
            }
        }
        counts
    }
}
