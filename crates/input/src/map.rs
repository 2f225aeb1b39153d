//! Key mapping from terminal events to shell commands and game inputs.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::types::{Direction, GameKind, SnakeInput, TicTacToeInput, TILE_COUNT};

/// Home menu navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    /// Jump straight into a game (`1`/`2`/`3`).
    Pick(GameKind),
    Previous,
    Next,
    Confirm,
}

/// Commands available on every game screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenCommand {
    /// Leave the game and return to the menu.
    Back,
    Restart,
}

/// Map keyboard input on the home menu.
pub fn handle_menu_key(key: KeyEvent) -> Option<MenuCommand> {
    match key.code {
        KeyCode::Char(c @ '1'..='3') => {
            let index = c as usize - '1' as usize;
            Some(MenuCommand::Pick(GameKind::ALL[index]))
        }
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(MenuCommand::Previous)
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(MenuCommand::Next)
        }
        KeyCode::Enter | KeyCode::Char(' ') => Some(MenuCommand::Confirm),
        _ => None,
    }
}

/// Map keyboard input shared by all game screens.
pub fn handle_screen_key(key: KeyEvent) -> Option<ScreenCommand> {
    match key.code {
        KeyCode::Esc | KeyCode::Char('m') | KeyCode::Char('M') => Some(ScreenCommand::Back),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(ScreenCommand::Restart),
        _ => None,
    }
}

/// Map keyboard input to a snake heading.
pub fn snake_direction(key: KeyEvent) -> Option<Direction> {
    match key.code {
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(Direction::Left)
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(Direction::Right)
        }
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(Direction::Up)
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(Direction::Down)
        }
        _ => None,
    }
}

pub fn handle_snake_key(key: KeyEvent) -> Option<SnakeInput> {
    snake_direction(key).map(SnakeInput::Turn)
}

/// Map digits `1`..=`9` to tiles in row-major order.
///
/// ```text
/// 1 2 3
/// 4 5 6
/// 7 8 9
/// ```
pub fn tile_for_key(key: KeyEvent) -> Option<(usize, usize)> {
    match key.code {
        KeyCode::Char(c @ '1'..='9') => {
            let index = c as usize - '1' as usize;
            Some((index / TILE_COUNT, index % TILE_COUNT))
        }
        _ => None,
    }
}

pub fn handle_tictactoe_key(key: KeyEvent) -> Option<TicTacToeInput> {
    tile_for_key(key).map(|(row, col)| TicTacToeInput::Tap { row, col })
}

/// Check if key should quit the program.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
