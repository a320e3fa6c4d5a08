//! Board state representation and basic operations

use std::fmt;

use serde::{Deserialize, Serialize};

use super::lines::LineAnalyzer;

/// Glyph used for an empty cell when rendering or parsing boards
pub const EMPTY_GLYPH: char = '_';

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    Player,
    Computer,
}

impl Cell {
    /// The side owning this cell, if any
    pub fn owner(self) -> Option<Side> {
        match self {
            Cell::Player => Some(Side::Player),
            Cell::Computer => Some(Side::Computer),
            Cell::Empty => None,
        }
    }

    pub fn to_char(self, symbols: &Symbols) -> char {
        match self {
            Cell::Empty => EMPTY_GLYPH,
            Cell::Player => symbols.player,
            Cell::Computer => symbols.computer,
        }
    }
}

/// One of the two participants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Player,
    Computer,
}

impl Side {
    /// Get the other side
    pub fn opponent(self) -> Side {
        match self {
            Side::Player => Side::Computer,
            Side::Computer => Side::Player,
        }
    }

    /// Convert side to the cell it marks
    pub fn to_cell(self) -> Cell {
        match self {
            Side::Player => Cell::Player,
            Side::Computer => Cell::Computer,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Player => write!(f, "player"),
            Side::Computer => write!(f, "computer"),
        }
    }
}

/// Display characters for the two sides, fixed for the lifetime of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Symbols {
    pub player: char,
    pub computer: char,
}

impl Symbols {
    /// Create a validated symbol pair.
    ///
    /// # Errors
    ///
    /// Returns error if the marks are equal, whitespace, or an empty-cell glyph.
    pub fn new(player: char, computer: char) -> Result<Self, crate::Error> {
        let invalid = |reason: &str| crate::Error::InvalidSymbols {
            player,
            computer,
            reason: reason.to_string(),
        };

        if player.eq_ignore_ascii_case(&computer) {
            return Err(invalid("the two marks must differ, ignoring case"));
        }
        if player.is_whitespace() || computer.is_whitespace() {
            return Err(invalid("marks must be visible characters"));
        }
        if [player, computer]
            .iter()
            .any(|&c| c == EMPTY_GLYPH || c == '.')
        {
            return Err(invalid("'_' and '.' are reserved for empty cells"));
        }

        Ok(Symbols { player, computer })
    }

    /// Symbols derived from the mark the human picks: choosing `X` hands the
    /// computer `O`, any other mark hands it `X`.
    pub fn from_player_choice(choice: char) -> Result<Self, crate::Error> {
        let player = choice.to_ascii_uppercase();
        let computer = if player == 'X' { 'O' } else { 'X' };
        Self::new(player, computer)
    }

    pub fn for_side(&self, side: Side) -> char {
        match side {
            Side::Player => self.player,
            Side::Computer => self.computer,
        }
    }

    /// Map a board glyph back to a cell
    pub fn cell_for(&self, c: char) -> Option<Cell> {
        if c == EMPTY_GLYPH || c == '.' {
            Some(Cell::Empty)
        } else if c.eq_ignore_ascii_case(&self.player) {
            Some(Cell::Player)
        } else if c.eq_ignore_ascii_case(&self.computer) {
            Some(Cell::Computer)
        } else {
            None
        }
    }
}

impl Default for Symbols {
    fn default() -> Self {
        Symbols {
            player: 'X',
            computer: 'O',
        }
    }
}

/// The 3x3 grid, row-major.
///
/// Search explores the tree by placing a mark, recursing and clearing the same
/// cell again, so every write made through [`Board::place`] must be paired
/// with a [`Board::clear`] before the caller observes the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; 9],
}

impl Board {
    /// Create an empty board
    pub fn new() -> Self {
        Board {
            cells: [Cell::Empty; 9],
        }
    }

    /// Parse a board from its glyphs.
    ///
    /// Whitespace, `|` and `/` separators are ignored, `_` and `.` mark empty
    /// cells and the two marks are looked up case-insensitively in `symbols`.
    ///
    /// # Errors
    ///
    /// Returns error unless exactly 9 glyphs remain, or if a glyph is unknown.
    pub fn from_string(s: &str, symbols: &Symbols) -> Result<Self, crate::Error> {
        let glyphs: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '/' && *c != '|')
            .collect();

        if glyphs.len() != 9 {
            return Err(crate::Error::InvalidBoardLength {
                expected: 9,
                got: glyphs.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [Cell::Empty; 9];
        for (i, &c) in glyphs.iter().enumerate() {
            cells[i] = symbols
                .cell_for(c)
                .ok_or_else(|| crate::Error::InvalidCellCharacter {
                    character: c,
                    position: i,
                    context: s.to_string(),
                })?;
        }

        Ok(Board { cells })
    }

    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Get cell at position (0-8)
    pub fn get(&self, pos: usize) -> Cell {
        self.cells[pos]
    }

    /// Check if a position is empty
    pub fn is_empty(&self, pos: usize) -> bool {
        self.cells[pos] == Cell::Empty
    }

    /// Get all empty positions
    pub fn empty_positions(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| i)
            .collect()
    }

    /// Number of marks `side` has on the board
    pub fn count(&self, side: Side) -> usize {
        let target = side.to_cell();
        self.cells.iter().filter(|&&c| c == target).count()
    }

    pub fn moves_remaining(&self) -> usize {
        self.cells.iter().filter(|&&c| c == Cell::Empty).count()
    }

    /// The side holding three in a row, checking rows, columns, then diagonals
    pub fn winner(&self) -> Option<Side> {
        LineAnalyzer::winner(&self.cells)
    }

    /// True when no cell is empty
    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }

    /// Check if the game is over (win or draw)
    pub fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.is_full()
    }

    /// +1 when the computer has won, -1 when the player has won, 0 otherwise.
    ///
    /// Ongoing boards score 0 as well.
    pub fn score(&self) -> i32 {
        match self.winner() {
            Some(Side::Computer) => 1,
            Some(Side::Player) => -1,
            None => 0,
        }
    }

    /// Write a mark without validation. Used by search, which only ever
    /// targets empty cells and clears them again on the way out.
    pub fn place(&mut self, pos: usize, side: Side) {
        debug_assert!(self.is_empty(pos), "search placed on occupied cell {pos}");
        self.cells[pos] = side.to_cell();
    }

    /// Undo a [`Board::place`]
    pub fn clear(&mut self, pos: usize) {
        self.cells[pos] = Cell::Empty;
    }

    /// Apply a move after checking range and occupancy
    pub fn apply_move(&mut self, pos: usize, side: Side) -> Result<(), crate::Error> {
        if pos >= 9 {
            return Err(crate::Error::PositionOutOfBounds { position: pos });
        }
        if !self.is_empty(pos) {
            return Err(crate::Error::InvalidMove { position: pos });
        }
        self.cells[pos] = side.to_cell();
        Ok(())
    }

    /// Render the board with the game's symbols
    pub fn display<'a>(&'a self, symbols: &'a Symbols) -> BoardDisplay<'a> {
        BoardDisplay {
            board: self,
            symbols,
        }
    }

    /// Compact single-line form, e.g. `XO_/_X_/__O`
    pub fn to_compact(&self, symbols: &Symbols) -> String {
        let chars: Vec<char> = self.cells.iter().map(|c| c.to_char(symbols)).collect();
        format!(
            "{}{}{}/{}{}{}/{}{}{}",
            chars[0], chars[1], chars[2], chars[3], chars[4], chars[5], chars[6], chars[7], chars[8]
        )
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Board paired with the symbols used to draw it
pub struct BoardDisplay<'a> {
    board: &'a Board,
    symbols: &'a Symbols,
}

impl fmt::Display for BoardDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &cell) in self.board.cells.iter().enumerate() {
            write!(f, "{}", cell.to_char(self.symbols))?;
            if (i + 1).is_multiple_of(3) {
                if i < 8 {
                    writeln!(f)?;
                }
            } else {
                write!(f, " | ")?;
            }
        }
        Ok(())
    }
}

/// Numbered grid showing which index addresses which cell
pub fn position_guide() -> String {
    (0..3)
        .map(|row| {
            let start = row * 3;
            format!("{} | {} | {}", start, start + 1, start + 2)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
