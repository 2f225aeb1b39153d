//! Integration tests for the Tic-Tac-Toe core

use quickplay::core::tictactoe::check_win;
use quickplay::core::{GameCore, TicTacToeConfig, TicTacToeGame};
use quickplay::types::{Outcome, Player, Tile, TicTacToeInput, BOT_DELAY_MS};

const X: Tile = Some(Player::Human);
const O: Tile = Some(Player::Bot);
const E: Tile = None;

fn tap(game: &mut TicTacToeGame, row: usize, col: usize) -> bool {
    game.apply_input(TicTacToeInput::Tap { row, col })
}

#[test]
fn test_check_win_top_row() {
    let board = [[X, X, X], [E, E, E], [E, E, E]];
    assert!(check_win(&board, Player::Human));
    assert!(!check_win(&board, Player::Bot));
}

#[test]
fn test_full_game_against_first_empty_bot() {
    let mut game = TicTacToeGame::new();

    assert!(tap(&mut game, 0, 0));
    game.tick(BOT_DELAY_MS);
    assert_eq!(*game.board(), [[X, O, E], [E, E, E], [E, E, E]]);

    assert!(tap(&mut game, 0, 2));
    game.tick(BOT_DELAY_MS);
    assert_eq!(*game.board(), [[X, O, X], [O, E, E], [E, E, E]]);

    assert!(tap(&mut game, 1, 1));
    game.tick(BOT_DELAY_MS);
    assert_eq!(*game.board(), [[X, O, X], [O, X, O], [E, E, E]]);
    assert_eq!(game.result(), None);

    // (0,2), (1,1), (2,0): the anti-diagonal
    assert!(tap(&mut game, 2, 0));
    assert_eq!(game.result(), Some(Outcome::HumanWin));
    assert_eq!(game.result().unwrap().message(), "You Win!");
    assert!(game.is_terminal());

    // No bot reply after a win, and the board is frozen.
    assert!(!game.tick(BOT_DELAY_MS));
    assert!(!tap(&mut game, 0, 1));
    assert!(!tap(&mut game, 2, 2));
    assert_eq!(*game.board(), [[X, O, X], [O, X, O], [X, E, E]]);
}

#[test]
fn test_bot_wins_row_zero() {
    let mut game = TicTacToeGame::new();
    // Human plays away from row 0; the bot fills it left to right.
    for (row, col) in [(1, 0), (2, 1)] {
        assert!(tap(&mut game, row, col));
        game.tick(BOT_DELAY_MS);
    }
    assert_eq!(*game.board(), [[O, O, E], [X, E, E], [E, X, E]]);

    assert!(tap(&mut game, 2, 2));
    game.tick(BOT_DELAY_MS);
    assert_eq!(game.board()[0][2], O);
    assert_eq!(game.result(), Some(Outcome::BotWin));
    assert_eq!(game.current_player(), Player::Human);
}

#[test]
fn test_draw() {
    let mut game = TicTacToeGame::new();
    let human_moves = [(0, 1), (1, 0), (1, 1), (2, 0), (2, 2)];
    for (row, col) in human_moves {
        assert!(tap(&mut game, row, col), "tap ({}, {})", row, col);
        game.tick(BOT_DELAY_MS);
    }
    // The last human move fills the board without completing a line.
    assert_eq!(*game.board(), [[O, X, O], [X, X, O], [X, O, X]]);
    assert_eq!(game.result(), Some(Outcome::Draw));
}

#[test]
fn test_occupied_and_out_of_range_taps_are_noops() {
    let mut game = TicTacToeGame::new();
    tap(&mut game, 1, 1);
    game.tick(BOT_DELAY_MS);

    let before = game.snapshot();
    assert!(!tap(&mut game, 1, 1));
    assert!(!tap(&mut game, 0, 0));
    assert!(!tap(&mut game, 3, 1));
    assert_eq!(game.snapshot(), before);
}

#[test]
fn test_bot_waits_for_its_delay() {
    let mut game = TicTacToeGame::with_config(TicTacToeConfig { bot_delay_ms: 200 });
    tap(&mut game, 2, 2);

    for _ in 0..12 {
        assert!(!game.tick(16));
    }
    assert_eq!(game.board()[0][0], E);
    assert!(game.snapshot().bot_pending);

    // 12 * 16 = 192 ms so far
    assert!(game.tick(16));
    assert_eq!(game.board()[0][0], O);
    assert!(!game.snapshot().bot_pending);
}

#[test]
fn test_stale_bot_move_is_dropped_after_reset() {
    let mut game = TicTacToeGame::new();
    tap(&mut game, 0, 0);
    game.tick(BOT_DELAY_MS / 2);

    let old_epoch = game.epoch();
    game.apply_input(TicTacToeInput::Restart);
    assert!(game.epoch() > old_epoch);

    // New game: the human moves, then the old reply comes due first.
    assert!(tap(&mut game, 2, 2));
    game.tick(BOT_DELAY_MS / 2);
    assert_eq!(*game.board(), [[E, E, E], [E, E, E], [E, E, X]]);
    assert_eq!(game.current_player(), Player::Bot);

    // The reply belonging to this game fires on schedule.
    game.tick(BOT_DELAY_MS / 2);
    assert_eq!(*game.board(), [[O, E, E], [E, E, E], [E, E, X]]);
    assert_eq!(game.current_player(), Player::Human);
}
