//! Tic-Tac-Toe against a searching computer opponent
//!
//! This crate provides:
//! - A 3x3 board model with win, draw and score queries
//! - Minimax, alpha-beta and depth-limited heuristic search for the computer side
//! - A game session that alternates human and computer turns
//! - A command-line front end for playing and analyzing positions

pub mod cli;
pub mod error;
pub mod search;
pub mod tictactoe;

pub use error::{Error, Result};
pub use search::{
    CallCounters, Engine, SearchConfig, SearchMode, SearchResult, Strategy, heuristic,
};
pub use tictactoe::{Board, Cell, FirstMover, Game, GameOutcome, GameRecord, Side, Symbols};
