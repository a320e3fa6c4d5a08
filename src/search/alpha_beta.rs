//! Minimax with alpha-beta pruning, full depth and depth-limited

use super::{Engine, INFINITY, heuristic};
use crate::tictactoe::{Board, Side};

impl Engine {
    /// Same value as [`Engine::minimax`], skipping siblings once `beta <= alpha`.
    ///
    /// `alpha` and `beta` are passed by value, so a child's window never leaks
    /// back into its siblings. Counts once per call on the alpha-beta counter.
    pub fn alpha_beta(&mut self, board: &mut Board, alpha: i32, beta: i32, maximizing: bool) -> i32 {
        self.counters.alpha_beta += 1;

        if board.winner().is_some() {
            return board.score();
        }
        if board.is_full() {
            return 0;
        }

        self.expand(board, alpha, beta, maximizing, |engine, board, alpha, beta| {
            engine.alpha_beta(board, alpha, beta, !maximizing)
        })
    }

    /// Alpha-beta that stops at `max_depth` and scores the position with
    /// [`heuristic`].
    ///
    /// The depth check runs before the win/draw check: a decided board reached
    /// exactly at the cutoff is scored heuristically, not as +1/-1.
    pub fn alpha_beta_limited(
        &mut self,
        board: &mut Board,
        alpha: i32,
        beta: i32,
        maximizing: bool,
        current_depth: usize,
        max_depth: usize,
    ) -> i32 {
        self.counters.alpha_beta += 1;

        if current_depth == max_depth {
            return heuristic(board);
        }
        if board.winner().is_some() {
            return board.score();
        }
        if board.is_full() {
            return 0;
        }

        self.expand(board, alpha, beta, maximizing, |engine, board, alpha, beta| {
            engine.alpha_beta_limited(board, alpha, beta, !maximizing, current_depth + 1, max_depth)
        })
    }

    /// Try every empty cell for the side to move, keeping the window updated
    /// and stopping at the first cutoff.
    fn expand<F>(
        &mut self,
        board: &mut Board,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
        mut child: F,
    ) -> i32
    where
        F: FnMut(&mut Engine, &mut Board, i32, i32) -> i32,
    {
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
            let score = child(self, board, alpha, beta);
            board.clear(pos);

            if maximizing {
                best_score = best_score.max(score);
                alpha = alpha.max(best_score);
            } else {
                best_score = best_score.min(score);
                beta = beta.min(best_score);
            }
            if beta <= alpha {
                break;
            }
        }

        best_score
    }
}
