//! Core game logic - pure, deterministic, and testable
//!
//! This crate holds the rules and state of the three mini-games. It has **no
//! dependencies** on terminal, input devices, or wall-clock time:
//!
//! - **Deterministic**: the same seed and the same tick/input sequence produce
//!   identical games.
//! - **Tick driven**: the presentation layer measures elapsed time and calls
//!   `tick(elapsed_ms)`; each core converts it into discrete steps.
//! - **Epoch guarded**: every reset bumps the core's [`Epoch`]. Delayed work
//!   tagged with an older epoch is discarded.
//!
//! # Module Structure
//!
//! - [`snake`]: grid snake with delayed eating and a session high score
//! - [`tetris`]: falling pieces, line clears, and the uniform-row bonus
//! - [`tictactoe`]: human vs. first-empty-tile bot with a delayed reply
//! - [`schedule`]: step clocks, delayed continuations, and epochs
//! - [`snapshot`]: render-ready copies of each core's state
//! - [`game`]: the [`GameCore`] trait shared by all three
//! - [`rng`]: small LCG used for food placement and piece selection
//!
//! # Example
//!
//! ```
//! use quickplay_core::{GameCore, TicTacToeGame};
//! use quickplay_core::types::{Player, TicTacToeInput, BOT_DELAY_MS};
//!
//! let mut game = TicTacToeGame::new();
//! game.apply_input(TicTacToeInput::Tap { row: 0, col: 0 });
//! game.tick(BOT_DELAY_MS);
//! assert_eq!(game.board()[0][1], Some(Player::Bot));
//! assert!(!game.is_terminal());
//! ```

pub mod game;
pub mod rng;
pub mod schedule;
pub mod snake;
pub mod snapshot;
pub mod tetris;
pub mod tictactoe;

pub use quickplay_types as types;

pub use game::GameCore;
pub use rng::SimpleRng;
pub use schedule::{Epoch, StepClock, TimerQueue};
pub use snake::{SnakeConfig, SnakeGame};
pub use snapshot::{ActiveSnapshot, SnakeSnapshot, TetrisSnapshot, TicTacToeSnapshot};
pub use tetris::{FallingPiece, TetrisConfig, TetrisGame};
pub use tictactoe::{TicTacToeConfig, TicTacToeGame};
