use crate::schedule::Epoch;
use crate::tetris::pieces::{shape, PieceShape};
use quickplay_types::{
    Cell, Direction, Outcome, PieceKind, Player, Point, Tile, BOARD_HEIGHT, BOARD_WIDTH,
    TILE_COUNT,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnakeSnapshot {
    pub head: Point,
    pub body: Vec<Point>,
    pub length: usize,
    pub direction: Direction,
    pub food: Option<Point>,
    pub score: u32,
    pub high_score: u32,
    pub game_over: bool,
    pub cell_size: i32,
    pub columns: i32,
    pub rows: i32,
    pub epoch: Epoch,
}

impl SnakeSnapshot {
    /// Visible segments: the head followed by at most `length - 1` trailing
    /// body positions.
    pub fn segments(&self) -> impl Iterator<Item = Point> + '_ {
        std::iter::once(self.head).chain(
            self.body
                .iter()
                .copied()
                .take(self.length.saturating_sub(1)),
        )
    }

    /// Convert a play-field point into `(column, row)` cell coordinates.
    pub fn cell_of(&self, p: Point) -> (i32, i32) {
        (p.x.div_euclid(self.cell_size), p.y.div_euclid(self.cell_size))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub row: i8,
    pub column: i8,
}

impl ActiveSnapshot {
    pub fn shape(&self) -> PieceShape {
        shape(self.kind)
    }

    /// Board coordinates `(column, row)` of the filled cells.
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> {
        let (row, column) = (self.row, self.column);
        self.shape()
            .cells
            .into_iter()
            .map(move |(dc, dr)| (column + dc, row + dr))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TetrisSnapshot {
    pub board: [[Cell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub active: Option<ActiveSnapshot>,
    pub score: u32,
    pub lines: u32,
    pub game_over: bool,
    pub epoch: Epoch,
}

impl TetrisSnapshot {
    /// Board contents with the active piece drawn in.
    pub fn composed(&self) -> [[Cell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize] {
        let mut grid = self.board;
        if let Some(active) = self.active {
            for (x, y) in active.cells() {
                if (0..BOARD_WIDTH as i8).contains(&x) && (0..BOARD_HEIGHT as i8).contains(&y) {
                    grid[y as usize][x as usize] = Some(active.kind);
                }
            }
        }
        grid
    }
}

impl Default for TetrisSnapshot {
    fn default() -> Self {
        Self {
            board: [[None; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: None,
            score: 0,
            lines: 0,
            game_over: false,
            epoch: Epoch::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TicTacToeSnapshot {
    pub board: [[Tile; TILE_COUNT]; TILE_COUNT],
    pub current_player: Player,
    pub result: Option<Outcome>,
    /// A bot reply is scheduled but has not fired yet.
    pub bot_pending: bool,
    pub epoch: Epoch,
}
