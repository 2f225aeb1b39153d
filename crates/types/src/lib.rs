//! Shared types module - data structures and constants for all three games
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (simulation cores, input mapping, terminal rendering).
//!
//! # Play Field Dimensions
//!
//! | Game | Size | Notes |
//! |------|------|-------|
//! | Snake | 30x20 cells of `SNAKE_CELL_SIZE` units | head starts at (100, 100) |
//! | Tetris | 10 columns x 20 rows | spawn row 0, centred on the piece matrix |
//! | Tic-Tac-Toe | 3x3 tiles | human always moves first |
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Frame interval of the terminal shell (~60 FPS) |
//! | `SNAKE_STEP_MS` | 300 | One snake move |
//! | `TETRIS_STEP_MS` | 500 | One row of gravity |
//! | `BOT_DELAY_MS` | 500 | Tic-Tac-Toe bot "thinking" pause |
//!
//! # Scoring
//!
//! - Snake: one point per food eaten.
//! - Tetris: `LINE_CLEAR_POINTS` per cleared row, plus `UNIFORM_ROW_BONUS_PER_CELL`
//!   per column for every remaining row whose blocks share one colour. All
//!   pieces use the same block colour.
//!
//! # Examples
//!
//! ```
//! use quickplay_types::{Direction, GameKind, PieceKind, Player, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! // Drags resolve to the dominant axis
//! assert_eq!(Direction::from_drag(12, -3), Some(Direction::Right));
//! assert_eq!(Direction::Right.opposite(), Direction::Left);
//!
//! assert_eq!(GameKind::ALL[2].title(), "Tetris");
//!
//! assert_eq!(Player::Human.symbol(), 'X');
//! assert_eq!(PieceKind::ALL.len(), 7);
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Tetris board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Tetris board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Frame interval of the terminal shell (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Snake grid unit, in play-field units
pub const SNAKE_CELL_SIZE: i32 = 10;

/// Snake play field width in cells
pub const SNAKE_COLUMNS: i32 = 30;

/// Snake play field height in cells
pub const SNAKE_ROWS: i32 = 20;

/// Snake head position after a reset, in play-field units
pub const SNAKE_START: Point = Point::new(100, 100);

/// Snake movement period (one cell every 300ms)
pub const SNAKE_STEP_MS: u32 = 300;

/// Tetris gravity period (one row every 500ms)
pub const TETRIS_STEP_MS: u32 = 500;

/// Points per cleared Tetris row
pub const LINE_CLEAR_POINTS: u32 = 10;

/// Bonus per column for a Tetris row made of a single piece kind
pub const UNIFORM_ROW_BONUS_PER_CELL: u32 = 5;

/// Tic-Tac-Toe board side length
pub const TILE_COUNT: usize = 3;

/// Delay before the Tic-Tac-Toe bot answers a human move
pub const BOT_DELAY_MS: u32 = 500;

/// A point on the snake play field.
///
/// Coordinates are in play-field units; the snake only ever occupies
/// multiples of its cell size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move `distance` units along `direction`.
    pub fn offset(self, direction: Direction, distance: i32) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx * distance,
            y: self.y + dy * distance,
        }
    }
}

/// Snake heading. A unit vector in screen space (y grows downwards).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit vector `(dx, dy)`
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Resolve a drag displacement into a direction.
    ///
    /// The axis with the larger magnitude wins and the sign of the displacement
    /// picks the direction. Ties go to the vertical axis. A zero displacement
    /// carries no direction.
    ///
    /// ```
    /// use quickplay_types::Direction;
    ///
    /// assert_eq!(Direction::from_drag(-5, 2), Some(Direction::Left));
    /// assert_eq!(Direction::from_drag(3, 3), Some(Direction::Down));
    /// assert_eq!(Direction::from_drag(0, -1), Some(Direction::Up));
    /// assert_eq!(Direction::from_drag(0, 0), None);
    /// ```
    pub fn from_drag(dx: i32, dy: i32) -> Option<Self> {
        if dx == 0 && dy == 0 {
            return None;
        }
        if dx.unsigned_abs() > dy.unsigned_abs() {
            Some(if dx > 0 {
                Direction::Right
            } else {
                Direction::Left
            })
        } else if dy > 0 {
            Some(Direction::Down)
        } else {
            Some(Direction::Up)
        }
    }
}

/// The seven tetromino piece kinds
///
/// Kinds differ only in shape; every block is drawn in the same colour.
/// - **I**: horizontal bar
/// - **J**: J-shaped
/// - **L**: L-shaped (mirror of J)
/// - **O**: 2x2 square
/// - **S**: S-shaped
/// - **T**: T-shaped
/// - **Z**: Z-shaped (mirror of S)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// Every kind, in the order the random spawn indexes them.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];
}

/// A cell on the Tetris board
///
/// - `None`: Empty cell
/// - `Some(PieceKind)`: Cell filled by a locked piece of that kind
pub type Cell = Option<PieceKind>;

/// What happens after a piece locks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TopOutPolicy {
    /// Keep the board; the game ends when the next piece collides at spawn.
    #[default]
    GameOver,
    /// Wipe the board and score and start over after every lock.
    ResetBoard,
}

/// Tic-Tac-Toe participant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    Human,
    Bot,
}

impl Player {
    /// Board glyph: `X` for the human, `O` for the bot
    pub fn symbol(&self) -> char {
        match self {
            Player::Human => 'X',
            Player::Bot => 'O',
        }
    }
}

/// A Tic-Tac-Toe tile: `None` while unclaimed
pub type Tile = Option<Player>;

/// Terminal result of a Tic-Tac-Toe round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    HumanWin,
    BotWin,
    Draw,
}

impl Outcome {
    /// Message shown by the game-over overlay
    pub fn message(&self) -> &'static str {
        match self {
            Outcome::HumanWin => "You Win!",
            Outcome::BotWin => "Bot Wins!",
            Outcome::Draw => "It's a Draw!",
        }
    }
}

/// Inputs accepted by the snake core
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnakeInput {
    Turn(Direction),
    Restart,
}

/// Inputs accepted by the Tetris core (no move or rotate in this design)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TetrisInput {
    Restart,
}

/// Inputs accepted by the Tic-Tac-Toe core
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TicTacToeInput {
    Tap { row: usize, col: usize },
    Restart,
}

/// The games offered by the home menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameKind {
    Snake,
    TicTacToe,
    Tetris,
}

impl GameKind {
    /// Menu order
    pub const ALL: [GameKind; 3] = [GameKind::Snake, GameKind::TicTacToe, GameKind::Tetris];

    pub fn as_str(&self) -> &'static str {
        match self {
            GameKind::Snake => "snake",
            GameKind::TicTacToe => "tictactoe",
            GameKind::Tetris => "tetris",
        }
    }

    /// Human-readable title
    pub fn title(&self) -> &'static str {
        match self {
            GameKind::Snake => "Snake",
            GameKind::TicTacToe => "Tic Tac Toe",
            GameKind::Tetris => "Tetris",
        }
    }
}
