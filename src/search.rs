//! Move selection for the computer side
//!
//! The engine evaluates positions with one of three strategies:
//! - exhaustive minimax
//! - minimax with alpha-beta pruning
//! - alpha-beta cut off at a fixed depth, scored by a static heuristic
//!
//! Every strategy explores the tree by mutating the caller's board in place
//! and undoing each mark before moving on to the next sibling, so the board is
//! left exactly as it was handed in. Only the root wrappers (`make_best_move*`)
//! commit a mark.

pub mod alpha_beta;
pub mod heuristic;
pub mod minimax;

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use tracing::debug;

pub use heuristic::heuristic;

use crate::{
    Error, Result,
    tictactoe::{Board, Side},
};

/// Bound used for the open alpha-beta window and initial best scores
pub const INFINITY: i32 = i32::MAX;

/// Search algorithm requested by the driver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SearchMode {
    Minimax,
    #[default]
    AlphaBeta,
}

impl SearchMode {
    pub const VARIANTS: &'static str = "minimax, alpha-beta";
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchMode::Minimax => write!(f, "minimax"),
            SearchMode::AlphaBeta => write!(f, "alpha-beta"),
        }
    }
}

impl FromStr for SearchMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" | "minimax" => Ok(SearchMode::Minimax),
            "2" | "alpha-beta" | "alphabeta" | "alpha_beta" | "ab" => Ok(SearchMode::AlphaBeta),
            _ => Err(Error::ParseSearchMode {
                input: s.to_string(),
                expected: Self::VARIANTS.to_string(),
            }),
        }
    }
}

/// The concrete algorithm a single search call runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Minimax,
    AlphaBeta,
    DepthLimited { max_depth: usize },
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Minimax => write!(f, "minimax"),
            Strategy::AlphaBeta => write!(f, "alpha-beta"),
            Strategy::DepthLimited { max_depth } => write!(f, "alpha-beta (depth {max_depth})"),
        }
    }
}

/// Search mode plus the optional depth limit.
///
/// A depth limit is only meaningful with [`SearchMode::AlphaBeta`], where it
/// switches to the heuristic-backed variant.
///
/// # Examples
///
/// ```
/// use ttt_minimax::search::{SearchConfig, SearchMode, Strategy};
///
/// let config = SearchConfig::new(SearchMode::AlphaBeta).with_max_depth(3);
/// assert_eq!(config.strategy(), Strategy::DepthLimited { max_depth: 3 });
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SearchConfig {
    pub mode: SearchMode,
    pub max_depth: Option<usize>,
}

impl SearchConfig {
    pub fn new(mode: SearchMode) -> Self {
        Self {
            mode,
            max_depth: None,
        }
    }

    /// Set the depth limit.
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Check the combination independent of any board.
    ///
    /// # Errors
    ///
    /// Returns error if a depth is combined with plain minimax or is zero.
    pub fn validate(&self) -> Result<()> {
        match (self.mode, self.max_depth) {
            (SearchMode::Minimax, Some(_)) => Err(Error::InvalidConfiguration {
                message: "a depth limit requires alpha-beta search".to_string(),
            }),
            (_, Some(0)) => Err(Error::InvalidDepth { depth: 0, max: 9 }),
            _ => Ok(()),
        }
    }

    pub fn strategy(&self) -> Strategy {
        match (self.mode, self.max_depth) {
            (SearchMode::Minimax, _) => Strategy::Minimax,
            (SearchMode::AlphaBeta, None) => Strategy::AlphaBeta,
            (SearchMode::AlphaBeta, Some(max_depth)) => Strategy::DepthLimited { max_depth },
        }
    }

    /// Strategy for a concrete position; the depth must lie in `[1, moves remaining]`.
    pub fn strategy_for(&self, board: &Board) -> Result<Strategy> {
        self.validate()?;
        let strategy = self.strategy();
        if let Strategy::DepthLimited { max_depth } = strategy {
            let remaining = board.moves_remaining();
            if max_depth == 0 || max_depth > remaining {
                return Err(Error::InvalidDepth {
                    depth: max_depth,
                    max: remaining,
                });
            }
        }
        Ok(strategy)
    }
}

/// Per-session invocation counts of the recursive routines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CallCounters {
    pub minimax: u64,
    pub alpha_beta: u64,
}

impl CallCounters {
    /// The counter that a given mode drives
    pub fn for_mode(&self, mode: SearchMode) -> u64 {
        match mode {
            SearchMode::Minimax => self.minimax,
            SearchMode::AlphaBeta => self.alpha_beta,
        }
    }
}

/// Outcome of a root search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Chosen cell
    pub position: usize,
    /// Score of the chosen cell
    pub score: i32,
    /// Score of every candidate, `None` for occupied cells
    pub move_scores: [Option<i32>; 9],
}

/// Search context carrying the call counters through the recursion
#[derive(Debug, Clone, Default)]
pub struct Engine {
    counters: CallCounters,
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn counters(&self) -> CallCounters {
        self.counters
    }

    pub fn reset_counters(&mut self) {
        self.counters = CallCounters::default();
    }

    /// Score every empty cell for the computer and pick the best one without
    /// committing it.
    ///
    /// Each candidate gets a fresh search window; the first strictly greatest
    /// score wins, so ties go to the lowest index.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoLegalMoves`] on a full board.
    pub fn best_move(&mut self, board: &mut Board, strategy: Strategy) -> Result<SearchResult> {
        if board.is_full() {
            return Err(Error::NoLegalMoves);
        }

        let calls_before = self.counters;
        let mut best: Option<(usize, i32)> = None;
        let mut move_scores = [None; 9];

        for pos in 0..9 {
            if !board.is_empty(pos) {
                continue;
            }

            board.place(pos, Side::Computer);
            let score = match strategy {
                Strategy::Minimax => self.minimax(board, false),
                Strategy::AlphaBeta => self.alpha_beta(board, -INFINITY, INFINITY, false),
                // positions after the root move sit at depth 0
                Strategy::DepthLimited { max_depth } => {
                    self.alpha_beta_limited(board, -INFINITY, INFINITY, false, 0, max_depth)
                }
            };
            board.clear(pos);

            move_scores[pos] = Some(score);
            if best.is_none_or(|(_, best_score)| score > best_score) {
                best = Some((pos, score));
            }
        }

        let (position, score) = best.ok_or(Error::NoLegalMoves)?;
        debug!(
            %strategy,
            position,
            score,
            minimax_calls = self.counters.minimax - calls_before.minimax,
            alpha_beta_calls = self.counters.alpha_beta - calls_before.alpha_beta,
            "root search finished"
        );

        Ok(SearchResult {
            position,
            score,
            move_scores,
        })
    }

    /// Search with `strategy` and commit the chosen computer move
    pub fn make_best_move_with(&mut self, board: &mut Board, strategy: Strategy) -> Result<usize> {
        let result = self.best_move(board, strategy)?;
        board.apply_move(result.position, Side::Computer)?;
        Ok(result.position)
    }

    /// Validate `config` against the board, search, and commit the move
    pub fn make_best_move(&mut self, board: &mut Board, config: &SearchConfig) -> Result<usize> {
        let strategy = config.strategy_for(board)?;
        self.make_best_move_with(board, strategy)
    }

    pub fn make_best_move_minimax(&mut self, board: &mut Board) -> Result<usize> {
        self.make_best_move_with(board, Strategy::Minimax)
    }

    pub fn make_best_move_alpha_beta_minimax(&mut self, board: &mut Board) -> Result<usize> {
        self.make_best_move_with(board, Strategy::AlphaBeta)
    }

    /// Depth-limited alpha-beta at the root. `max_depth = 1` looks one reply
    /// ahead of each candidate and `max_depth = moves remaining` is exact.
    pub fn make_best_move_depth_limited(
        &mut self,
        board: &mut Board,
        max_depth: usize,
    ) -> Result<usize> {
        self.make_best_move_with(board, Strategy::DepthLimited { max_depth })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::{Cell, Symbols};

    fn board(s: &str) -> Board {
        Board::from_string(s, &Symbols::default()).unwrap()
    }

    #[test]
    fn test_search_mode_parsing() {
        assert_eq!("minimax".parse::<SearchMode>().unwrap(), SearchMode::Minimax);
        assert_eq!("1".parse::<SearchMode>().unwrap(), SearchMode::Minimax);
        assert_eq!(
            "Alpha-Beta".parse::<SearchMode>().unwrap(),
            SearchMode::AlphaBeta
        );
        assert_eq!("2".parse::<SearchMode>().unwrap(), SearchMode::AlphaBeta);

        let err = "mcts".parse::<SearchMode>().unwrap_err();
        assert!(err.to_string().contains("minimax, alpha-beta"));
    }

    #[test]
    fn test_config_strategy() {
        assert_eq!(
            SearchConfig::new(SearchMode::Minimax).strategy(),
            Strategy::Minimax
        );
        assert_eq!(SearchConfig::default().strategy(), Strategy::AlphaBeta);
        assert!(
            SearchConfig::new(SearchMode::Minimax)
                .with_max_depth(2)
                .validate()
                .is_err()
        );
        assert!(
            SearchConfig::new(SearchMode::AlphaBeta)
                .with_max_depth(0)
                .validate()
                .is_err()
        );
    }

    #[test]
    fn test_depth_must_fit_remaining_moves() {
        // 3 empty cells
        let b = board("XOX OO_ X__");
        let config = SearchConfig::new(SearchMode::AlphaBeta).with_max_depth(4);
        assert!(matches!(
            config.strategy_for(&b),
            Err(Error::InvalidDepth { depth: 4, max: 3 })
        ));

        let config = SearchConfig::new(SearchMode::AlphaBeta).with_max_depth(3);
        assert_eq!(
            config.strategy_for(&b).unwrap(),
            Strategy::DepthLimited { max_depth: 3 }
        );
    }

    #[test]
    fn test_full_board_has_no_best_move() {
        let mut b = board("XOX XOO OXX");
        let before = b;
        let mut engine = Engine::new();

        for strategy in [
            Strategy::Minimax,
            Strategy::AlphaBeta,
            Strategy::DepthLimited { max_depth: 1 },
        ] {
            assert!(matches!(
                engine.best_move(&mut b, strategy),
                Err(Error::NoLegalMoves)
            ));
        }
        assert!(matches!(
            engine.make_best_move_minimax(&mut b),
            Err(Error::NoLegalMoves)
        ));
        assert_eq!(b, before);
        assert_eq!(engine.counters(), CallCounters::default());
    }

    #[test]
    fn test_best_move_does_not_commit() {
        let mut b = board("X__ ___ ___");
        let before = b;
        let mut engine = Engine::new();

        let result = engine.best_move(&mut b, Strategy::AlphaBeta).unwrap();
        assert_eq!(b, before);
        assert!(before.is_empty(result.position));
        assert_eq!(result.move_scores[0], None);
        assert_eq!(
            result.move_scores.iter().filter(|s| s.is_some()).count(),
            8
        );
    }

    #[test]
    fn test_make_best_move_takes_immediate_win() {
        // X X _
        // O O _
        // X _ _
        let mut b = board("XX_ OO_ X__");
        let mut engine = Engine::new();

        let pos = engine.make_best_move_alpha_beta_minimax(&mut b).unwrap();
        assert_eq!(pos, 5);
        assert_eq!(b.winner(), Some(Side::Computer));
        assert_eq!(b.score(), 1);
    }

    #[test]
    fn test_make_best_move_rejects_out_of_range_depth() {
        let mut b = board("XOX OO_ X__");
        let before = b;
        let mut engine = Engine::new();
        let config = SearchConfig::new(SearchMode::AlphaBeta).with_max_depth(9);

        assert!(engine.make_best_move(&mut b, &config).is_err());
        assert_eq!(b, before);
    }

    #[test]
    fn test_make_best_move_depth_limited_commits_and_counts_alpha_beta() {
        // X X _
        // O _ _
        // _ _ _   computer must block at 2
        let mut b = board("XX_ O__ ___");
        let mut engine = Engine::new();

        let pos = engine.make_best_move_depth_limited(&mut b, 2).unwrap();

        assert_eq!(pos, 2);
        assert_eq!(b.get(2), Cell::Computer);
        assert_eq!(b.moves_remaining(), 5);
        assert!(engine.counters().alpha_beta > 0);
        assert_eq!(engine.counters().minimax, 0);
    }

    #[test]
    fn test_depth_one_sees_the_reply() {
        // X X _
        // O O _
        // X _ _   computer wins at 5, and must not leave 2 open
        let mut b = board("XX_ OO_ X__");
        let mut engine = Engine::new();

        let result = engine
            .best_move(&mut b, Strategy::DepthLimited { max_depth: 1 })
            .unwrap();
        assert_eq!(result.position, 5);
        assert_eq!(result.move_scores[5], Some(1));
    }

    #[test]
    fn test_counters_for_mode() {
        let counters = CallCounters {
            minimax: 7,
            alpha_beta: 3,
        };
        assert_eq!(counters.for_mode(SearchMode::Minimax), 7);
        assert_eq!(counters.for_mode(SearchMode::AlphaBeta), 3);
    }
}
