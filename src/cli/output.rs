//! Output formatting for CLI

use std::io::{self, Write};

use crate::tictactoe::{Board, GameOutcome, Side, Symbols, position_guide};

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Print a subsection header
pub fn print_subsection(title: &str) {
    println!("\n{title}");
    println!("{}", "-".repeat(40));
}

/// Format a number with thousands separators
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i.is_multiple_of(3) {
            result.insert(0, ',');
        }
        result.insert(0, c);
    }
    result
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// Draw the numbered guide followed by the current board
pub fn write_board<W: Write>(out: &mut W, board: &Board, symbols: &Symbols) -> io::Result<()> {
    writeln!(out, "{}", position_guide())?;
    writeln!(out)?;
    writeln!(out, "{}", board.display(symbols))?;
    writeln!(out)
}

/// Message shown to the human at the end of a game
pub fn outcome_message(outcome: GameOutcome) -> &'static str {
    match outcome {
        GameOutcome::Win(Side::Player) => "You won!",
        GameOutcome::Win(Side::Computer) => "You lost!",
        GameOutcome::Draw => "It's a draw!",
    }
}

/// Render a per-move score grid, `.` for occupied cells
pub fn format_move_scores(scores: &[Option<i32>; 9]) -> String {
    scores
        .chunks(3)
        .map(|row| {
            row.iter()
                .map(|score| match score {
                    Some(value) => format!("{value:>4}"),
                    None => format!("{:>4}", "."),
                })
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(549_945), "549,945");
        assert_eq!(format_number(1_000_000), "1,000,000");
    }

    #[test]
    fn test_format_move_scores() {
        let mut scores = [None; 9];
        scores[0] = Some(0);
        scores[4] = Some(-1);
        scores[8] = Some(12);

        assert_eq!(
            format_move_scores(&scores),
            "   0    .    .\n   .   -1    .\n   .    .   12"
        );
    }

    #[test]
    fn test_write_board() {
        let mut out = Vec::new();
        write_board(&mut out, &Board::new(), &Symbols::default()).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("0 | 1 | 2\n"));
        assert!(text.contains("_ | _ | _\n_ | _ | _\n_ | _ | _\n"));
    }
}
