//! Error types for the tic-tac-toe engine

use thiserror::Error;

/// Main error type for the crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid move: position {position} is already occupied")]
    InvalidMove { position: usize },

    #[error("position {position} is out of bounds (must be 0-8)")]
    PositionOutOfBounds { position: usize },

    #[error("no legal moves available: the board is full")]
    NoLegalMoves,

    #[error("game already over")]
    GameOver,

    #[error("it is not the {side}'s turn")]
    OutOfTurn { side: String },

    #[error("search depth {depth} is out of range (must be between 1 and {max})")]
    InvalidDepth { depth: usize, max: usize },

    #[error("invalid symbols '{player}' and '{computer}': {reason}")]
    InvalidSymbols {
        player: char,
        computer: char,
        reason: String,
    },

    #[error("board string must hold {expected} cells, got {got} in '{context}'")]
    InvalidBoardLength {
        expected: usize,
        got: usize,
        context: String,
    },

    #[error("impossible mark counts: {player} player and {computer} computer marks with the computer to move")]
    InvalidPieceCounts { player: usize, computer: usize },

    #[error("invalid character '{character}' at position {position} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        position: usize,
        context: String,
    },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("invalid search mode '{input}'. Expected one of: {expected}")]
    ParseSearchMode { input: String, expected: String },

    #[error("invalid first mover '{input}'. Expected one of: {expected}")]
    ParseFirstMover { input: String, expected: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
