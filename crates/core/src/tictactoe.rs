//! Tic-Tac-Toe core
//!
//! The human (X) always moves first. After each human move that does not end
//! the game, the bot (O) answers after a fixed delay by claiming the first
//! empty tile in row-major order. The delayed reply is tagged with the game
//! epoch, so a reset before it fires cancels it.

use quickplay_types::{Outcome, Player, Tile, TicTacToeInput, BOT_DELAY_MS, TILE_COUNT};

use crate::game::GameCore;
use crate::schedule::{Epoch, TimerQueue};
use crate::snapshot::TicTacToeSnapshot;

/// 3x3 grid indexed `[row][col]`
pub type Grid = [[Tile; TILE_COUNT]; TILE_COUNT];

/// The eight winning lines as `(row, col)` triples.
const LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TicTacToeConfig {
    /// Delay before the bot answers a human move
    pub bot_delay_ms: u32,
}

impl Default for TicTacToeConfig {
    fn default() -> Self {
        Self {
            bot_delay_ms: BOT_DELAY_MS,
        }
    }
}

/// Pending bot reply
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BotMove;

/// True if `player` owns any complete line.
pub fn check_win(board: &Grid, player: Player) -> bool {
    LINES
        .iter()
        .any(|line| line.iter().all(|&(r, c)| board[r][c] == Some(player)))
}

/// True if no tile is empty.
pub fn is_full(board: &Grid) -> bool {
    board.iter().flatten().all(|tile| tile.is_some())
}

/// First empty tile in row-major order.
pub fn first_empty(board: &Grid) -> Option<(usize, usize)> {
    (0..TILE_COUNT)
        .flat_map(|r| (0..TILE_COUNT).map(move |c| (r, c)))
        .find(|&(r, c)| board[r][c].is_none())
}

#[derive(Debug, Clone)]
pub struct TicTacToeGame {
    config: TicTacToeConfig,
    board: Grid,
    current_player: Player,
    result: Option<Outcome>,
    pending: TimerQueue<BotMove>,
    epoch: Epoch,
}

impl TicTacToeGame {
    pub fn new() -> Self {
        Self::with_config(TicTacToeConfig::default())
    }

    pub fn with_config(config: TicTacToeConfig) -> Self {
        Self {
            config,
            board: [[None; TILE_COUNT]; TILE_COUNT],
            current_player: Player::Human,
            result: None,
            pending: TimerQueue::new(),
            epoch: Epoch::default(),
        }
    }

    pub fn board(&self) -> &Grid {
        &self.board
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn result(&self) -> Option<Outcome> {
        self.result
    }

    pub fn epoch(&self) -> Epoch {
        self.epoch
    }

    /// A bot reply for the current game is waiting to fire.
    pub fn bot_pending(&self) -> bool {
        self.pending.has_pending_for(self.epoch)
    }

    /// Human claims the tile at (`row`, `col`).
    ///
    /// Rejected when out of range, occupied, after the game ended, or while
    /// the bot is still to move.
    pub fn tile_tapped(&mut self, row: usize, col: usize) -> bool {
        if row >= TILE_COUNT || col >= TILE_COUNT {
            return false;
        }
        if self.result.is_some() || self.current_player != Player::Human {
            return false;
        }
        if self.board[row][col].is_some() {
            return false;
        }

        self.board[row][col] = Some(Player::Human);
        self.current_player = Player::Bot;

        if check_win(&self.board, Player::Human) {
            self.finish(Outcome::HumanWin);
        } else if is_full(&self.board) {
            self.finish(Outcome::Draw);
        } else {
            self.pending
                .schedule(self.epoch, self.config.bot_delay_ms, BotMove);
        }
        true
    }

    /// Advance time; fires the bot reply once its delay has elapsed.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        let due = self.pending.advance(elapsed_ms, self.epoch);
        let mut changed = false;
        for _ in due {
            changed |= self.make_bot_move();
        }
        changed
    }

    fn make_bot_move(&mut self) -> bool {
        if self.result.is_some() {
            return false;
        }
        let Some((row, col)) = first_empty(&self.board) else {
            return false;
        };

        self.board[row][col] = Some(Player::Bot);
        self.current_player = Player::Human;
        log::debug!("bot claims ({}, {})", row, col);

        if check_win(&self.board, Player::Bot) {
            self.finish(Outcome::BotWin);
        } else if is_full(&self.board) {
            self.finish(Outcome::Draw);
        }
        true
    }

    fn finish(&mut self, outcome: Outcome) {
        self.result = Some(outcome);
        log::info!("tic-tac-toe finished: {}", outcome.message());
    }

    /// Clear the board and start a new game with the human to move.
    ///
    /// A bot reply still in flight stays queued but belongs to the previous
    /// epoch and is dropped when it comes due.
    pub fn reset(&mut self) {
        self.board = [[None; TILE_COUNT]; TILE_COUNT];
        self.current_player = Player::Human;
        self.result = None;
        self.epoch = self.epoch.next();
        log::debug!("tic-tac-toe reset (epoch {})", self.epoch.value());
    }

    pub fn apply_input(&mut self, input: TicTacToeInput) -> bool {
        match input {
            TicTacToeInput::Tap { row, col } => self.tile_tapped(row, col),
            TicTacToeInput::Restart => {
                self.reset();
                true
            }
        }
    }

    pub fn snapshot(&self) -> TicTacToeSnapshot {
        TicTacToeSnapshot {
            board: self.board,
            current_player: self.current_player,
            result: self.result,
            bot_pending: self.bot_pending(),
            epoch: self.epoch,
        }
    }
}

impl Default for TicTacToeGame {
    fn default() -> Self {
        Self::new()
    }
}

impl GameCore for TicTacToeGame {
    type Input = TicTacToeInput;
    type Snapshot = TicTacToeSnapshot;

    fn start(&mut self) {
        TicTacToeGame::reset(self);
    }

    fn reset(&mut self) {
        TicTacToeGame::reset(self);
    }

    fn tick(&mut self, elapsed_ms: u32) -> bool {
        TicTacToeGame::tick(self, elapsed_ms)
    }

    fn apply_input(&mut self, input: TicTacToeInput) -> bool {
        TicTacToeGame::apply_input(self, input)
    }

    fn snapshot(&self) -> TicTacToeSnapshot {
        TicTacToeGame::snapshot(self)
    }

    fn epoch(&self) -> Epoch {
        self.epoch
    }

    fn is_terminal(&self) -> bool {
        self.result.is_some()
    }
}
