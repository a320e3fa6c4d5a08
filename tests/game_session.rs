//! End-to-end games through the session API

use ttt_minimax::{
    Board, Engine, Error, Game, GameOutcome, GameRecord, SearchConfig, SearchMode, Side, Strategy,
    Symbols,
};

/// Player policy: best reply for the human, found by searching with the
/// roles swapped
fn optimal_player_move(board: &Board) -> usize {
    let mirrored: Vec<char> = board
        .cells()
        .iter()
        .map(|cell| match cell.owner() {
            Some(Side::Player) => 'O',
            Some(Side::Computer) => 'X',
            None => '_',
        })
        .collect();
    let mut mirrored =
        Board::from_string(&mirrored.into_iter().collect::<String>(), &Symbols::default())
            .unwrap();
    Engine::new()
        .best_move(&mut mirrored, Strategy::AlphaBeta)
        .unwrap()
        .position
}

fn play_out(game: &mut Game, mut player: impl FnMut(&Board) -> usize) -> GameOutcome {
    while !game.is_over() {
        match game.to_move() {
            Side::Player => {
                let pos = player(game.board());
                game.play_player(pos).unwrap();
            }
            Side::Computer => {
                game.play_computer().unwrap();
            }
        }
    }
    game.outcome().unwrap()
}

mod full_games {
    use super::*;

    #[test]
    fn optimal_play_on_both_sides_draws() {
        for mode in [SearchMode::Minimax, SearchMode::AlphaBeta] {
            for first in [Side::Player, Side::Computer] {
                let mut game =
                    Game::new(Symbols::default(), SearchConfig::new(mode), first).unwrap();
                let outcome = play_out(&mut game, optimal_player_move);

                assert_eq!(outcome, GameOutcome::Draw, "{mode} with {first} first");
                assert!(game.search_calls() > 0);
            }
        }
    }

    #[test]
    fn naive_player_never_beats_full_search() {
        let first_empty = |board: &Board| board.empty_positions()[0];
        let mut game =
            Game::new(Symbols::default(), SearchConfig::default(), Side::Player).unwrap();

        let outcome = play_out(&mut game, first_empty);
        assert_eq!(outcome, GameOutcome::Win(Side::Computer));
    }

    #[test]
    fn depth_limited_game_completes() {
        let config = SearchConfig::new(SearchMode::AlphaBeta).with_max_depth(2);
        let mut game = Game::new(Symbols::default(), config, Side::Computer).unwrap();

        play_out(&mut game, optimal_player_move);
        assert!(game.is_over());
        assert_eq!(game.counters().minimax, 0);
        assert!(game.counters().alpha_beta > 0);
    }

    #[test]
    fn no_moves_after_the_end() {
        let mut game =
            Game::new(Symbols::default(), SearchConfig::default(), Side::Player).unwrap();
        play_out(&mut game, |board: &Board| board.empty_positions()[0]);

        assert!(matches!(game.play_computer(), Err(Error::GameOver)));
        assert!(matches!(game.play_player(0), Err(Error::GameOver)));
    }
}

mod records {
    use super::*;

    #[test]
    fn record_round_trips_through_json_file() {
        let symbols = Symbols::new('O', 'X').unwrap();
        let mut game = Game::new(symbols, SearchConfig::default(), Side::Player).unwrap();
        play_out(&mut game, optimal_player_move);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("game.json");
        game.record().save_to_file(&path).unwrap();

        let loaded = GameRecord::load_from_file(&path).unwrap();
        assert_eq!(loaded, game.record());
        assert_eq!(loaded.replay().unwrap(), *game.board());
        assert_eq!(loaded.symbols.player, 'O');
        assert_eq!(loaded.outcome, Some(GameOutcome::Draw));
    }

    #[test]
    fn missing_record_reports_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = GameRecord::load_from_file(dir.path().join("absent.json"));
        assert!(matches!(result, Err(Error::Io { .. })));
    }
}
