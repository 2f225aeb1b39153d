//! Terminal input module.
//!
//! Maps `crossterm` key and mouse events into menu commands and per-game
//! inputs. Nothing here touches game state; the shell forwards the results.

pub mod drag;
pub mod map;

pub use quickplay_types as types;

pub use drag::{click_position, DragTracker};
pub use map::{
    handle_menu_key, handle_screen_key, handle_snake_key, handle_tictactoe_key, should_quit,
    snake_direction, tile_for_key, MenuCommand, ScreenCommand,
};
