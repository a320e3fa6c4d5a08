//! Tic-Tac-Toe board, winning lines and game session

pub mod board;
pub mod game;
pub mod lines;

pub use board::{Board, BoardDisplay, Cell, EMPTY_GLYPH, Side, Symbols, position_guide};
pub use game::{FirstMover, Game, GameOutcome, GameRecord, Move};
pub use lines::{LineAnalyzer, LineCounts, WINNING_LINES};
