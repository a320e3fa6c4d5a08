//! Shared configuration types for CLI commands

use serde::{Deserialize, Serialize};

use crate::{
    search::{SearchConfig, SearchMode},
    tictactoe::{FirstMover, Symbols},
};

/// Settings for one interactive game, filled from flags and prompts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Mark chosen by the human
    pub symbol: char,

    /// Search algorithm for the computer
    pub mode: SearchMode,

    /// Fixed depth limit for alpha-beta
    pub depth: Option<usize>,

    /// Ask for the depth before every computer move
    pub ask_depth: bool,

    /// Who opens the game
    pub first: FirstMover,

    /// Random seed for reproducibility
    pub seed: Option<u64>,
}

impl SessionConfig {
    pub fn symbols(&self) -> crate::Result<Symbols> {
        Symbols::from_player_choice(self.symbol)
    }

    /// Engine configuration for the session
    pub fn search_config(&self) -> SearchConfig {
        let config = SearchConfig::new(self.mode);
        match self.depth {
            Some(depth) => config.with_max_depth(depth),
            None => config,
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            symbol: 'X',
            mode: SearchMode::AlphaBeta,
            depth: None,
            ask_depth: false,
            first: FirstMover::Random,
            seed: None,
        }
    }
}
