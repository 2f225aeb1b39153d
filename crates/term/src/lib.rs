//! Terminal rendering for the game screens.
//!
//! A small, game-oriented rendering layer: views paint core snapshots into a
//! framebuffer, and the renderer flushes the changed cells to the terminal.
//! No widget toolkit is involved, which keeps precise control over aspect
//! ratio (2 chars wide per board cell).

pub mod fb;
pub mod game_view;
pub mod menu_view;
pub mod renderer;
pub mod snake_view;
pub mod tictactoe_view;

pub use quickplay_core as core;
pub use quickplay_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, Rect, TetrisView, Viewport, GAME_HINT};
pub use menu_view::{MenuView, MENU_HINT};
pub use renderer::{changed_runs, encode_diff_into, encode_full_into, Run, TerminalRenderer};
pub use snake_view::SnakeView;
pub use tictactoe_view::TicTacToeView;
