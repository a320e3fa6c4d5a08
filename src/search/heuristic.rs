//! Static evaluation used at the depth cutoff

use crate::tictactoe::{Board, LineAnalyzer, Side, WINNING_LINES};

/// Reward for each cell where the computer would complete a line
pub const IMMEDIATE_WIN: i32 = 10;

/// Reward for a line holding one computer mark and two empty cells
pub const OPEN_LINE: i32 = 2;

/// Score a position from the computer's point of view.
///
/// - `+10` for every empty cell that would win on the spot for the computer,
///   `-10` for every such cell for the player
/// - per line, `+2` when it holds exactly one computer mark and two empty
///   cells, otherwise `-2` when it holds exactly one player mark and two empty
///   cells
///
/// The result is not normalized to `[-1, 1]`.
pub fn heuristic(board: &Board) -> i32 {
    let mut scratch = *board;
    let mut total = 0;

    for side in [Side::Computer, Side::Player] {
        let weight = match side {
            Side::Computer => IMMEDIATE_WIN,
            Side::Player => -IMMEDIATE_WIN,
        };
        for pos in 0..9 {
            if !scratch.is_empty(pos) {
                continue;
            }
            scratch.place(pos, side);
            if scratch.winner() == Some(side) {
                total += weight;
            }
            scratch.clear(pos);
        }
    }

    for line in &WINNING_LINES {
        let counts = LineAnalyzer::line_counts(board.cells(), line);
        if counts.is_lone_mark(Side::Computer) {
            total += OPEN_LINE;
        } else if counts.is_lone_mark(Side::Player) {
            total -= OPEN_LINE;
        }
    }

    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::Symbols;

    fn board(s: &str) -> Board {
        Board::from_string(s, &Symbols::default()).unwrap()
    }

    #[test]
    fn empty_board_is_neutral() {
        assert_eq!(heuristic(&Board::new()), 0);
    }

    #[test]
    fn centre_opens_four_lines() {
        // row 1, column 1 and both diagonals
        assert_eq!(heuristic(&board("___ _O_ ___")), 8);
        assert_eq!(heuristic(&board("___ _X_ ___")), -8);
    }

    #[test]
    fn corner_opens_three_lines() {
        assert_eq!(heuristic(&board("O__ ___ ___")), 6);
    }

    #[test]
    fn player_threat_outweighs_open_lines() {
        // X X _
        // _ O _
        // _ _ _
        // -10 for the threat at 2, -2 for column 0, +2 for row 1 and the anti-diagonal
        assert_eq!(heuristic(&board("XX_ _O_ ___")), -8);
    }

    #[test]
    fn each_winning_cell_counts() {
        // O O _
        // O _ _
        // _ _ _
        // wins at 2 and 6, lone O on row 1, column 1 and the main diagonal
        assert_eq!(heuristic(&board("OO_ O__ ___")), 2 * IMMEDIATE_WIN + 3 * OPEN_LINE);
    }

    #[test]
    fn board_is_untouched() {
        let b = board("XO_ _X_ __O");
        let before = b;
        let _ = heuristic(&b);
        assert_eq!(b, before);
    }
}
