//! Tetris core - gravity-only falling blocks
//!
//! Pieces spawn at the top centre of a 10x20 board and fall one row per step.
//! There is no rotation or horizontal movement: when the next row would
//! collide, the piece locks where it is, full rows clear, and a new random
//! piece spawns. What happens when a piece cannot spawn is decided by
//! [`TopOutPolicy`].

pub mod board;
pub mod pieces;
pub mod scoring;

use quickplay_types::{PieceKind, TetrisInput, TopOutPolicy, BOARD_WIDTH, TETRIS_STEP_MS};

use crate::game::GameCore;
use crate::rng::SimpleRng;
use crate::schedule::{Epoch, StepClock};
use crate::snapshot::{ActiveSnapshot, TetrisSnapshot};

pub use board::Board;
pub use pieces::{shape, spawn_column, PieceShape};
pub use scoring::{clear_and_score, line_clear_score, uniform_row_bonus, ScoreResult};

/// Tunables for a Tetris round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TetrisConfig {
    /// Gravity period in milliseconds
    pub step_ms: u32,
    pub top_out: TopOutPolicy,
}

impl Default for TetrisConfig {
    fn default() -> Self {
        Self {
            step_ms: TETRIS_STEP_MS,
            top_out: TopOutPolicy::default(),
        }
    }
}

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FallingPiece {
    pub kind: PieceKind,
    pub row: i8,
    pub column: i8,
}

impl FallingPiece {
    /// Create a piece at its spawn position (row 0, centred)
    pub fn spawn(kind: PieceKind) -> Self {
        Self {
            kind,
            row: 0,
            column: spawn_column(kind, BOARD_WIDTH),
        }
    }

    pub fn shape(&self) -> PieceShape {
        shape(self.kind)
    }

    /// Check if the piece would fit with its anchor on `row`
    pub fn fits_at(&self, board: &Board, row: i8) -> bool {
        self.shape()
            .cells
            .iter()
            .all(|&(dc, dr)| board.accepts(self.column + dc, row + dr))
    }
}

impl From<FallingPiece> for ActiveSnapshot {
    fn from(value: FallingPiece) -> Self {
        Self {
            kind: value.kind,
            row: value.row,
            column: value.column,
        }
    }
}

/// Complete Tetris state
#[derive(Debug, Clone)]
pub struct TetrisGame {
    config: TetrisConfig,
    board: Board,
    active: Option<FallingPiece>,
    rng: SimpleRng,
    clock: StepClock,
    /// Generation of the current round (increments on every start).
    epoch: Epoch,
    score: u32,
    lines: u32,
    started: bool,
    game_over: bool,
}

impl TetrisGame {
    /// Create a new game with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self::with_config(TetrisConfig::default(), seed)
    }

    pub fn with_config(config: TetrisConfig, seed: u32) -> Self {
        Self {
            config,
            board: Board::new(),
            active: None,
            rng: SimpleRng::new(seed),
            clock: StepClock::new(config.step_ms),
            epoch: Epoch::default(),
            score: 0,
            lines: 0,
            started: false,
            game_over: false,
        }
    }

    pub fn config(&self) -> &TetrisConfig {
        &self.config
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn active(&self) -> Option<FallingPiece> {
        self.active
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn epoch(&self) -> Epoch {
        self.epoch
    }

    /// Start (or restart) a round: empty board, zero score, fresh piece
    pub fn start(&mut self) {
        self.board.clear();
        self.active = None;
        self.score = 0;
        self.lines = 0;
        self.game_over = false;
        self.started = true;
        self.clock.rewind();
        self.epoch = self.epoch.next();
        log::debug!("tetris round started (epoch {})", self.epoch.value());
        self.spawn_piece();
    }

    /// Spawn a new random piece at the top of the board
    ///
    /// Returns false (and ends the game) if the spawn position is blocked.
    pub fn spawn_piece(&mut self) -> bool {
        let piece = FallingPiece::spawn(self.rng.next_piece());

        if !piece.fits_at(&self.board, piece.row) {
            self.active = None;
            self.game_over = true;
            log::info!(
                "tetris topped out with {:?} (score {}, lines {})",
                piece.kind,
                self.score,
                self.lines
            );
            return false;
        }

        self.active = Some(piece);
        true
    }

    /// One row of gravity. Locks the piece when the next row collides.
    ///
    /// Returns true if the state changed.
    pub fn step(&mut self) -> bool {
        if !self.started || self.game_over {
            return false;
        }
        let Some(piece) = self.active else {
            return false;
        };

        let candidate = piece.row + 1;
        if piece.fits_at(&self.board, candidate) {
            self.active = Some(FallingPiece {
                row: candidate,
                ..piece
            });
        } else {
            self.lock_piece();
        }
        true
    }

    /// Lock the active piece onto the board, clear lines, and bring in the next piece
    pub fn lock_piece(&mut self) {
        let Some(piece) = self.active.take() else {
            return;
        };

        self.board
            .lock_cells(&piece.shape().cells, piece.column, piece.row, piece.kind);

        let result = clear_and_score(&mut self.board);
        self.score += result.total();
        self.lines += result.lines_cleared;

        if result.lines_cleared > 0 {
            log::debug!(
                "cleared {} line(s), {} uniform row(s), +{}",
                result.lines_cleared,
                result.uniform_rows,
                result.total()
            );
        }

        match self.config.top_out {
            TopOutPolicy::GameOver => {
                self.spawn_piece();
            }
            TopOutPolicy::ResetBoard => self.start(),
        }
    }

    /// Advance gravity by `elapsed_ms`
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if !self.started || self.game_over {
            return false;
        }

        let mut changed = false;
        for _ in 0..self.clock.advance(elapsed_ms) {
            if !self.step() {
                break;
            }
            changed = true;
        }
        changed
    }

    pub fn apply_input(&mut self, input: TetrisInput) -> bool {
        match input {
            TetrisInput::Restart => {
                self.start();
                true
            }
        }
    }

    pub fn snapshot_into(&self, out: &mut TetrisSnapshot) {
        self.board.write_grid(&mut out.board);
        out.active = self.active.map(ActiveSnapshot::from);
        out.score = self.score;
        out.lines = self.lines;
        out.game_over = self.game_over;
        out.epoch = self.epoch;
    }

    pub fn snapshot(&self) -> TetrisSnapshot {
        let mut s = TetrisSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for TetrisGame {
    fn default() -> Self {
        Self::new(1)
    }
}

impl GameCore for TetrisGame {
    type Input = TetrisInput;
    type Snapshot = TetrisSnapshot;

    fn start(&mut self) {
        TetrisGame::start(self);
    }

    fn reset(&mut self) {
        TetrisGame::start(self);
    }

    fn tick(&mut self, elapsed_ms: u32) -> bool {
        TetrisGame::tick(self, elapsed_ms)
    }

    fn apply_input(&mut self, input: TetrisInput) -> bool {
        TetrisGame::apply_input(self, input)
    }

    fn snapshot(&self) -> TetrisSnapshot {
        TetrisGame::snapshot(self)
    }

    fn epoch(&self) -> Epoch {
        self.epoch
    }

    fn is_terminal(&self) -> bool {
        self.game_over
    }
}
