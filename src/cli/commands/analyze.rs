//! Analyze command - Score a position with every search strategy
//!
//! Each strategy runs on its own engine so the reported call counts are
//! directly comparable.

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use crate::{
    cli::output::{format_move_scores, format_number, print_kv, print_section, print_subsection},
    search::{Engine, SearchConfig, SearchMode, Strategy, heuristic},
    tictactoe::{Board, Side, Symbols},
};

#[derive(Parser, Debug)]
#[command(about = "Score a position for the computer with every search strategy")]
pub struct AnalyzeArgs {
    /// Board as nine glyphs, e.g. "XOX/OX_/__O" (`_` or `.` for empty cells)
    pub board: String,

    /// Mark used by the human player; the other mark belongs to the computer
    #[arg(long, short = 's', default_value_t = 'X')]
    pub symbol: char,

    /// Also run alpha-beta with this depth limit
    #[arg(long, short = 'd')]
    pub depth: Option<usize>,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

/// Result of one strategy on the analyzed position
#[derive(Debug, Clone, Serialize)]
pub struct StrategyReport {
    pub strategy: String,
    pub position: usize,
    pub score: i32,
    pub move_scores: [Option<i32>; 9],
    pub calls: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct PositionReport {
    pub board: String,
    pub heuristic: i32,
    pub strategies: Vec<StrategyReport>,
}

pub fn execute(args: AnalyzeArgs) -> Result<()> {
    let symbols = Symbols::from_player_choice(args.symbol)?;
    let board = Board::from_string(&args.board, &symbols)?;
    let report = analyze_position(&board, &symbols, args.depth)?;

    if args.json {
        let json = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
        println!("{json}");
        return Ok(());
    }

    print_section("Position Analysis");
    println!("{}", board.display(&symbols));
    print_kv("Computer plays", &symbols.computer.to_string());
    print_kv("Heuristic", &report.heuristic.to_string());

    for entry in &report.strategies {
        print_subsection(&entry.strategy);
        print_kv("Best move", &entry.position.to_string());
        print_kv("Score", &entry.score.to_string());
        print_kv("Calls", &format_number(entry.calls));
        println!("{}", format_move_scores(&entry.move_scores));
    }

    Ok(())
}

/// Run minimax, alpha-beta and, when `depth` is given, depth-limited
/// alpha-beta on `board` with the computer to move.
///
/// # Errors
///
/// Returns error if the position is already decided, cannot have the computer
/// to move, or the depth does not fit the number of empty cells.
pub fn analyze_position(
    board: &Board,
    symbols: &Symbols,
    depth: Option<usize>,
) -> crate::Result<PositionReport> {
    if let Some(winner) = board.winner() {
        return Err(crate::Error::InvalidConfiguration {
            message: format!("position is already won by the {winner}"),
        });
    }

    // either side may have opened, so the player is level or one mark ahead
    let player = board.count(Side::Player);
    let computer = board.count(Side::Computer);
    if player != computer && player != computer + 1 {
        return Err(crate::Error::InvalidPieceCounts { player, computer });
    }

    let mut strategies = vec![Strategy::Minimax, Strategy::AlphaBeta];
    if let Some(depth) = depth {
        let config = SearchConfig::new(SearchMode::AlphaBeta).with_max_depth(depth);
        strategies.push(config.strategy_for(board)?);
    }

    let mut reports = Vec::with_capacity(strategies.len());
    for strategy in strategies {
        let mut engine = Engine::new();
        let mut scratch = *board;
        let result = engine.best_move(&mut scratch, strategy)?;
        let counters = engine.counters();

        reports.push(StrategyReport {
            strategy: strategy.to_string(),
            position: result.position,
            score: result.score,
            move_scores: result.move_scores,
            calls: counters.minimax + counters.alpha_beta,
        });
    }

    Ok(PositionReport {
        board: board.to_compact(symbols),
        heuristic: heuristic(board),
        strategies: reports,
    })
}
