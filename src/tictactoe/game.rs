//! High-level game management

use std::{
    fmt,
    fs::File,
    io::{BufReader, BufWriter},
    path::Path,
    str::FromStr,
};

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::board::{Board, Side, Symbols};
use crate::search::{CallCounters, Engine, SearchConfig, SearchMode};

/// A move in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub position: usize,
    pub side: Side,
}

/// Outcome of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Side),
    Draw,
}

/// Who opens the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FirstMover {
    Player,
    Computer,
    #[default]
    Random,
}

impl FirstMover {
    pub const VARIANTS: &'static str = "player, computer, random";

    /// Settle the opener, flipping a fair coin for [`FirstMover::Random`]
    pub fn resolve<R: Rng + ?Sized>(self, rng: &mut R) -> Side {
        match self {
            FirstMover::Player => Side::Player,
            FirstMover::Computer => Side::Computer,
            FirstMover::Random => {
                if rng.random_bool(0.5) {
                    Side::Player
                } else {
                    Side::Computer
                }
            }
        }
    }
}

impl fmt::Display for FirstMover {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FirstMover::Player => write!(f, "player"),
            FirstMover::Computer => write!(f, "computer"),
            FirstMover::Random => write!(f, "random"),
        }
    }
}

impl FromStr for FirstMover {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "player" | "human" | "me" => Ok(FirstMover::Player),
            "computer" | "cpu" | "engine" => Ok(FirstMover::Computer),
            "random" => Ok(FirstMover::Random),
            _ => Err(crate::Error::ParseFirstMover {
                input: s.to_string(),
                expected: Self::VARIANTS.to_string(),
            }),
        }
    }
}

/// A game between the human player and the search engine.
///
/// The session owns the board and the engine, so call counters accumulate over
/// every computer move of the game.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    symbols: Symbols,
    config: SearchConfig,
    engine: Engine,
    first: Side,
    to_move: Side,
    moves: Vec<Move>,
    outcome: Option<GameOutcome>,
}

impl Game {
    /// Start a game on an empty board.
    ///
    /// # Errors
    ///
    /// Returns error if the search configuration is inconsistent.
    pub fn new(symbols: Symbols, config: SearchConfig, first: Side) -> Result<Self, crate::Error> {
        config.validate()?;
        Ok(Game {
            board: Board::new(),
            symbols,
            config,
            engine: Engine::new(),
            first,
            to_move: first,
            moves: Vec::new(),
            outcome: None,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn symbols(&self) -> &Symbols {
        &self.symbols
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn first(&self) -> Side {
        self.first
    }

    pub fn to_move(&self) -> Side {
        self.to_move
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn counters(&self) -> CallCounters {
        self.engine.counters()
    }

    /// Counter for the mode this game searches with
    pub fn search_calls(&self) -> u64 {
        self.engine.counters().for_mode(self.config.mode)
    }

    fn ensure_turn(&self, side: Side) -> Result<(), crate::Error> {
        if self.is_over() {
            return Err(crate::Error::GameOver);
        }
        if self.to_move != side {
            return Err(crate::Error::OutOfTurn {
                side: side.to_string(),
            });
        }
        Ok(())
    }

    /// Apply the human's move.
    ///
    /// # Errors
    ///
    /// Returns error if the game is over, it is the computer's turn, or the
    /// position is out of range or occupied. The board is unchanged on error.
    pub fn play_player(&mut self, position: usize) -> Result<(), crate::Error> {
        self.ensure_turn(Side::Player)?;
        self.board.apply_move(position, Side::Player)?;
        info!(position, "player moved");
        self.finish_turn(position, Side::Player);
        Ok(())
    }

    /// Let the engine move with the configured search.
    ///
    /// A configured depth larger than the number of empty cells is reduced to
    /// that number.
    pub fn play_computer(&mut self) -> Result<usize, crate::Error> {
        let config = match self.config.max_depth {
            Some(depth) => self
                .config
                .with_max_depth(depth.min(self.board.moves_remaining())),
            None => self.config,
        };
        self.computer_turn(&config)
    }

    /// Let the engine move with a depth chosen for this turn only.
    ///
    /// # Errors
    ///
    /// Returns error unless the game searches with alpha-beta and `depth` lies
    /// in `[1, moves remaining]`.
    pub fn play_computer_with_depth(&mut self, depth: usize) -> Result<usize, crate::Error> {
        if self.config.mode != SearchMode::AlphaBeta {
            return Err(crate::Error::InvalidConfiguration {
                message: format!("a depth limit requires alpha-beta search, not {}", self.config.mode),
            });
        }
        let config = self.config.with_max_depth(depth);
        self.computer_turn(&config)
    }

    fn computer_turn(&mut self, config: &SearchConfig) -> Result<usize, crate::Error> {
        self.ensure_turn(Side::Computer)?;
        let position = self.engine.make_best_move(&mut self.board, config)?;
        info!(
            position,
            strategy = %config.strategy(),
            calls = self.engine.counters().for_mode(config.mode),
            "computer moved"
        );
        self.finish_turn(position, Side::Computer);
        Ok(position)
    }

    fn finish_turn(&mut self, position: usize, side: Side) {
        self.moves.push(Move { position, side });
        self.to_move = side.opponent();

        if let Some(winner) = self.board.winner() {
            self.outcome = Some(GameOutcome::Win(winner));
        } else if self.board.is_full() {
            self.outcome = Some(GameOutcome::Draw);
        }

        if let Some(outcome) = self.outcome {
            info!(?outcome, moves = self.moves.len(), "game finished");
        }
    }

    /// Snapshot of the game for export
    pub fn record(&self) -> GameRecord {
        GameRecord {
            symbols: self.symbols,
            search: self.config,
            first: self.first,
            moves: self.moves.clone(),
            final_board: self.board.to_compact(&self.symbols),
            outcome: self.outcome,
            counters: self.engine.counters(),
        }
    }
}

/// Serializable summary of a finished (or abandoned) game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub symbols: Symbols,
    pub search: SearchConfig,
    pub first: Side,
    pub moves: Vec<Move>,
    pub final_board: String,
    pub outcome: Option<GameOutcome>,
    pub counters: CallCounters,
}

impl GameRecord {
    /// Rebuild the final board by replaying the moves
    pub fn replay(&self) -> Result<Board, crate::Error> {
        let mut board = Board::new();
        for mv in &self.moves {
            board.apply_move(mv.position, mv.side)?;
        }
        Ok(board)
    }

    /// Save the record as pretty-printed JSON
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), crate::Error> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|source| crate::Error::Io {
            operation: format!("create {}", path.display()),
            source,
        })?;
        serde_json::to_writer_pretty(BufWriter::new(file), self)?;
        Ok(())
    }

    /// Load a record written by [`GameRecord::save_to_file`]
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, crate::Error> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| crate::Error::Io {
            operation: format!("open {}", path.display()),
            source,
        })?;
        Ok(serde_json::from_reader(BufReader::new(file))?)
    }
}
