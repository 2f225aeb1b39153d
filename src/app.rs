//! App shell: home menu and game screens.
//!
//! The shell owns one instance of each core and routes terminal events and
//! elapsed time to whichever screen is showing. It never decides anything
//! about a game; it only forwards inputs and renders snapshots.
//!
//! | Screen | Keys |
//! |--------|------|
//! | Menu | `1`/`2`/`3`, arrows + Enter, `q` |
//! | Snake | arrows / WASD / HJKL, mouse drag |
//! | Tic-Tac-Toe | `1`..`9`, mouse click |
//! | Tetris | - |
//! | any game | `r` restart, `Esc`/`m` menu, `q` quit |

use crossterm::event::{KeyEvent, MouseEvent};

use crate::core::{GameCore, SnakeGame, TetrisGame, TicTacToeGame};
use crate::input::{
    click_position, handle_menu_key, handle_screen_key, handle_snake_key, handle_tictactoe_key,
    should_quit, DragTracker, MenuCommand, ScreenCommand,
};
use crate::term::{FrameBuffer, MenuView, SnakeView, TetrisView, TicTacToeView, Viewport};
use crate::types::{GameKind, SnakeInput, TetrisInput, TicTacToeInput};

/// Environment variable holding a fixed RNG seed.
pub const SEED_ENV: &str = "QUICKPLAY_SEED";

/// Parse a seed as given in [`SEED_ENV`].
pub fn parse_seed(value: Option<&str>) -> Option<u32> {
    value.and_then(|v| v.trim().parse().ok())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Menu,
    Playing(GameKind),
}

pub struct App {
    screen: Screen,
    /// Highlighted menu entry, an index into `GameKind::ALL`.
    selected: usize,
    snake: SnakeGame,
    tetris: TetrisGame,
    tictactoe: TicTacToeGame,
    drag: DragTracker,
    quit: bool,
    menu_view: MenuView,
    snake_view: SnakeView,
    tetris_view: TetrisView,
    tictactoe_view: TicTacToeView,
}

impl App {
    pub fn new(seed: u32) -> Self {
        Self {
            screen: Screen::Menu,
            selected: 0,
            snake: SnakeGame::new(seed),
            tetris: TetrisGame::new(seed.wrapping_add(1)),
            tictactoe: TicTacToeGame::new(),
            drag: DragTracker::new(),
            quit: false,
            menu_view: MenuView,
            snake_view: SnakeView::default(),
            tetris_view: TetrisView::default(),
            tictactoe_view: TicTacToeView::default(),
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn selected(&self) -> GameKind {
        GameKind::ALL[self.selected]
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn snake(&self) -> &SnakeGame {
        &self.snake
    }

    pub fn tetris(&self) -> &TetrisGame {
        &self.tetris
    }

    pub fn tictactoe(&self) -> &TicTacToeGame {
        &self.tictactoe
    }

    /// Show a game screen. Every visit starts a fresh round.
    pub fn open(&mut self, kind: GameKind) {
        log::info!("opening {}", kind.as_str());
        self.screen = Screen::Playing(kind);
        if let Some(i) = GameKind::ALL.iter().position(|k| *k == kind) {
            self.selected = i;
        }
        self.drag.cancel();
        match kind {
            GameKind::Snake => self.snake.start(),
            GameKind::TicTacToe => self.tictactoe.start(),
            GameKind::Tetris => self.tetris.start(),
        }
    }

    pub fn back_to_menu(&mut self) {
        self.screen = Screen::Menu;
        self.drag.cancel();
    }

    /// Route a key press. Returns true if anything visible changed.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if should_quit(key) {
            self.quit = true;
            return true;
        }

        match self.screen {
            Screen::Menu => self.handle_menu(key),
            Screen::Playing(kind) => match handle_screen_key(key) {
                Some(ScreenCommand::Back) => {
                    self.back_to_menu();
                    true
                }
                Some(ScreenCommand::Restart) => {
                    self.restart(kind);
                    true
                }
                None => match kind {
                    GameKind::Snake => handle_snake_key(key)
                        .map(|input| self.snake.apply_input(input))
                        .unwrap_or(false),
                    GameKind::TicTacToe => handle_tictactoe_key(key)
                        .map(|input| self.tictactoe.apply_input(input))
                        .unwrap_or(false),
                    GameKind::Tetris => false,
                },
            },
        }
    }

    fn handle_menu(&mut self, key: KeyEvent) -> bool {
        let count = GameKind::ALL.len();
        match handle_menu_key(key) {
            Some(MenuCommand::Pick(kind)) => self.open(kind),
            Some(MenuCommand::Previous) => self.selected = (self.selected + count - 1) % count,
            Some(MenuCommand::Next) => self.selected = (self.selected + 1) % count,
            Some(MenuCommand::Confirm) => self.open(self.selected()),
            None => return false,
        }
        true
    }

    fn restart(&mut self, kind: GameKind) {
        match kind {
            GameKind::Snake => {
                self.snake.apply_input(SnakeInput::Restart);
            }
            GameKind::TicTacToe => {
                self.tictactoe.apply_input(TicTacToeInput::Restart);
            }
            GameKind::Tetris => {
                self.tetris.apply_input(TetrisInput::Restart);
            }
        }
    }

    /// Route a mouse event. `viewport` must match the last rendered frame so
    /// clicks land on the tiles the player sees.
    pub fn handle_mouse(&mut self, event: MouseEvent, viewport: Viewport) -> bool {
        match self.screen {
            Screen::Playing(GameKind::Snake) => match self.drag.handle(event) {
                Some(direction) => self.snake.apply_input(SnakeInput::Turn(direction)),
                None => false,
            },
            Screen::Playing(GameKind::TicTacToe) => {
                let tile = click_position(event)
                    .and_then(|(x, y)| self.tictactoe_view.tile_at(viewport, x, y));
                match tile {
                    Some((row, col)) => self
                        .tictactoe
                        .apply_input(TicTacToeInput::Tap { row, col }),
                    None => false,
                }
            }
            _ => false,
        }
    }

    /// Advance the visible game. Games off screen are paused.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        match self.screen {
            Screen::Menu => false,
            Screen::Playing(GameKind::Snake) => self.snake.tick(elapsed_ms),
            Screen::Playing(GameKind::TicTacToe) => self.tictactoe.tick(elapsed_ms),
            Screen::Playing(GameKind::Tetris) => self.tetris.tick(elapsed_ms),
        }
    }

    pub fn render_into(&self, viewport: Viewport, fb: &mut FrameBuffer) {
        match self.screen {
            Screen::Menu => self.menu_view.render_into(self.selected, viewport, fb),
            Screen::Playing(GameKind::Snake) => {
                self.snake_view
                    .render_into(&self.snake.snapshot(), viewport, fb)
            }
            Screen::Playing(GameKind::TicTacToe) => {
                self.tictactoe_view
                    .render_into(&self.tictactoe.snapshot(), viewport, fb)
            }
            Screen::Playing(GameKind::Tetris) => {
                let mut snap = crate::core::TetrisSnapshot::default();
                self.tetris.snapshot_into(&mut snap);
                self.tetris_view.render_into(&snap, viewport, fb)
            }
        }
    }
}
