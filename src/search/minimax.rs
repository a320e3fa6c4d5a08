//! Exhaustive minimax

use super::{Engine, INFINITY};
use crate::tictactoe::{Board, Side};

impl Engine {
    /// Game-theoretic value of `board` with the computer maximizing and the
    /// player minimizing. Explores the whole remaining tree.
    ///
    /// Every call counts once on the minimax counter, including calls that
    /// return straight away on a decided or full board.
    pub fn minimax(&mut self, board: &mut Board, maximizing: bool) -> i32 {
        self.counters.minimax += 1;

        if board.winner().is_some() {
            return board.score();
        }
        if board.is_full() {
            return 0;
        }

        let (mover, mut best_score) = if maximizing {
            (Side::Computer, -INFINITY)
        } else {
            (Side::Player, INFINITY)
        };

        for pos in 0..9 {
            if !board.is_empty(pos) {
                continue;
            }

            board.place(pos, mover);
            let score = self.minimax(board, !maximizing);
            board.clear(pos);

            best_score = if maximizing {
                best_score.max(score)
            } else {
                best_score.min(score)
            };
        }

        best_score
    }
}
