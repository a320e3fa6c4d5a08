//! Play command - Interactive game against the computer

use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
};

use anyhow::{Context, Result, bail};
use clap::Parser;
use rand::{SeedableRng, rngs::StdRng};

use crate::{
    Error,
    cli::{
        config::SessionConfig,
        output::{format_number, outcome_message, write_board},
        prompt::Prompter,
    },
    search::SearchMode,
    tictactoe::{FirstMover, Game, GameOutcome, Side, Symbols},
};

const MOVE_PROMPT: &str = "Your move (0-8): ";
const MOVE_RETRY: &str = "Invalid move. Your move (0-8): ";

#[derive(Parser, Debug)]
#[command(about = "Play a game against the computer")]
pub struct PlayArgs {
    /// Mark to play with (`X` or `O`), asked for when omitted
    #[arg(long, short = 's')]
    pub symbol: Option<char>,

    /// Search algorithm (`minimax` or `alpha-beta`), asked for when omitted
    #[arg(long, short = 'm')]
    pub mode: Option<SearchMode>,

    /// Depth limit for alpha-beta; positions at the limit are scored heuristically
    #[arg(long, short = 'd', conflicts_with = "ask_depth")]
    pub depth: Option<usize>,

    /// Ask for the search depth before every computer move
    #[arg(long)]
    pub ask_depth: bool,

    /// Who moves first (`player`, `computer` or `random`)
    #[arg(long, default_value = "random")]
    pub first: FirstMover,

    /// Random seed for the first-mover coin flip
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write the finished game to this JSON file
    #[arg(long)]
    pub record: Option<PathBuf>,
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());

    let config = resolve_config(&args, &mut prompter)?;
    let symbols = config.symbols()?;
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let first = config.first.resolve(&mut rng);

    let mut game = Game::new(symbols, config.search_config(), first)?;
    run_session(&mut game, &mut prompter, config.ask_depth)?;

    if let Some(path) = &args.record {
        game.record()
            .save_to_file(path)
            .with_context(|| format!("Failed to write game record to {}", path.display()))?;
        writeln!(prompter.output(), "Game record written to {}", path.display())?;
    }

    Ok(())
}

/// Fill in whatever the flags left open by asking on the prompter
pub fn resolve_config<R: BufRead, W: Write>(
    args: &PlayArgs,
    prompter: &mut Prompter<R, W>,
) -> Result<SessionConfig> {
    let symbol = match args.symbol {
        Some(symbol) => symbol,
        None => prompter.ask_until(
            "Choose 'X' or 'O': ",
            "Pick a single visible character: ",
            |c: &char| Symbols::from_player_choice(*c).is_ok(),
        )?,
    };

    let mode = match args.mode {
        Some(mode) => mode,
        None => prompter.ask_until(
            "Choose '1' for Minimax or '2' for Alpha-Beta Minimax: ",
            "Please answer '1' or '2': ",
            |_: &SearchMode| true,
        )?,
    };

    if mode == SearchMode::Minimax && (args.depth.is_some() || args.ask_depth) {
        bail!("a search depth can only be used with alpha-beta search");
    }

    let config = SessionConfig {
        symbol,
        mode,
        depth: args.depth,
        ask_depth: args.ask_depth,
        first: args.first,
        seed: args.seed,
    };
    config.search_config().validate()?;
    Ok(config)
}

/// Alternate turns until the game ends, then report the outcome and the
/// number of search calls.
pub fn run_session<R: BufRead, W: Write>(
    game: &mut Game,
    prompter: &mut Prompter<R, W>,
    ask_depth: bool,
) -> Result<GameOutcome> {
    let symbols = *game.symbols();
    writeln!(
        prompter.output(),
        "You play {}, the computer plays {} ({} opens)",
        symbols.for_side(Side::Player),
        symbols.for_side(Side::Computer),
        game.first()
    )?;

    while !game.is_over() {
        match game.to_move() {
            Side::Player => player_turn(game, prompter)?,
            Side::Computer => {
                let position = if ask_depth {
                    let remaining = game.board().moves_remaining();
                    let depth = prompter.ask_until(
                        &format!("Search depth (1-{remaining}): "),
                        &format!("Depth must be between 1 and {remaining}: "),
                        |d: &usize| (1..=remaining).contains(d),
                    )?;
                    game.play_computer_with_depth(depth)?
                } else {
                    game.play_computer()?
                };
                writeln!(prompter.output(), "Computer played {position}")?;
            }
        }
    }

    let outcome = game
        .outcome()
        .context("game loop ended without an outcome")?;

    let out = prompter.output();
    writeln!(out, "{}", game.board().display(game.symbols()))?;
    writeln!(out, "{}", outcome_message(outcome))?;
    let label = match game.config().mode {
        SearchMode::Minimax => "Minimax",
        SearchMode::AlphaBeta => "Alpha-Beta Minimax",
    };
    writeln!(
        out,
        "{label} called {} times",
        format_number(game.search_calls())
    )?;

    Ok(outcome)
}

fn player_turn<R: BufRead, W: Write>(game: &mut Game, prompter: &mut Prompter<R, W>) -> Result<()> {
    write_board(prompter.output(), game.board(), game.symbols())?;

    let mut question = MOVE_PROMPT;
    loop {
        let answer = prompter.ask(question)?;
        question = MOVE_RETRY;

        let Ok(position) = answer.parse::<usize>() else {
            continue;
        };
        match game.play_player(position) {
            Ok(()) => return Ok(()),
            Err(Error::InvalidMove { .. } | Error::PositionOutOfBounds { .. }) => {
                writeln!(prompter.output(), "{}", game.board().display(game.symbols()))?;
            }
            Err(other) => return Err(other.into()),
        }
    }
}
