//! Scoring module - line clears and the uniform-colour bonus
//!
//! - Each cleared row is worth `LINE_CLEAR_POINTS` (10).
//! - After a clear, every remaining row whose blocks are all one colour earns
//!   `columns * UNIFORM_ROW_BONUS_PER_CELL` (50). All pieces share a single
//!   block colour, so that is every row still holding a block.
//!   The bonus pass only runs when at least one row was cleared.

use quickplay_types::{BOARD_HEIGHT, LINE_CLEAR_POINTS, UNIFORM_ROW_BONUS_PER_CELL};

use super::board::Board;

/// Result of the clear-and-score pass after a lock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreResult {
    pub lines_cleared: u32,
    pub line_score: u32,
    pub uniform_rows: u32,
    pub bonus_score: u32,
}

impl ScoreResult {
    pub fn total(&self) -> u32 {
        self.line_score + self.bonus_score
    }
}

/// Points for clearing `lines` rows at once
pub fn line_clear_score(lines: u32) -> u32 {
    lines * LINE_CLEAR_POINTS
}

/// Bonus earned by the single-colour rows of `board`
///
/// Returns `(uniform_row_count, bonus)`.
pub fn uniform_row_bonus(board: &Board) -> (u32, u32) {
    let per_row = board.width() as u32 * UNIFORM_ROW_BONUS_PER_CELL;
    let rows = (0..BOARD_HEIGHT as usize)
        .filter(|&y| board.is_single_colour_row(y))
        .count() as u32;
    (rows, rows * per_row)
}

/// Clear full rows on `board` and compute the points they earn.
pub fn clear_and_score(board: &mut Board) -> ScoreResult {
    let cleared = board.clear_full_rows();
    if cleared.is_empty() {
        return ScoreResult::default();
    }

    let lines_cleared = cleared.len() as u32;
    let (uniform_rows, bonus_score) = uniform_row_bonus(board);

    ScoreResult {
        lines_cleared,
        line_score: line_clear_score(lines_cleared),
        uniform_rows,
        bonus_score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickplay_types::{PieceKind, BOARD_WIDTH};

    fn fill_row(board: &mut Board, y: i8, kind: PieceKind) {
        for x in 0..BOARD_WIDTH as i8 {
            board.set(x, y, Some(kind));
        }
    }

    #[test]
    fn test_line_clear_score() {
        assert_eq!(line_clear_score(0), 0);
        assert_eq!(line_clear_score(1), 10);
        assert_eq!(line_clear_score(4), 40);
    }

    #[test]
    fn test_no_clear_no_bonus() {
        let mut board = Board::new();
        // A uniform row alone does not earn anything without a clear.
        board.set(0, 19, Some(PieceKind::O));
        assert_eq!(clear_and_score(&mut board), ScoreResult::default());
    }

    #[test]
    fn test_two_rows_cleared() {
        let mut board = Board::new();
        fill_row(&mut board, 19, PieceKind::I);
        fill_row(&mut board, 18, PieceKind::J);
        board.set(0, 17, Some(PieceKind::S));
        board.set(1, 17, Some(PieceKind::Z));

        let result = clear_and_score(&mut board);
        assert_eq!(result.lines_cleared, 2);
        assert_eq!(result.line_score, 20);
        assert_eq!(result.uniform_rows, 1);
        assert_eq!(result.total(), 20 + 50);
    }

    #[test]
    fn test_mixed_kinds_still_one_colour() {
        let mut board = Board::new();
        fill_row(&mut board, 19, PieceKind::I);
        board.set(0, 18, Some(PieceKind::T));
        board.set(1, 18, Some(PieceKind::O));

        let result = clear_and_score(&mut board);
        assert_eq!(result.lines_cleared, 1);
        assert_eq!(result.uniform_rows, 1);
        assert_eq!(result.total(), 10 + 50);
    }

    #[test]
    fn test_clear_that_empties_board_has_no_bonus() {
        let mut board = Board::new();
        fill_row(&mut board, 19, PieceKind::L);

        let result = clear_and_score(&mut board);
        assert_eq!(result.lines_cleared, 1);
        assert_eq!(result.uniform_rows, 0);
        assert_eq!(result.total(), 10);
    }

    #[test]
    fn test_uniform_row_after_clear() {
        let mut board = Board::new();
        fill_row(&mut board, 19, PieceKind::I);
        board.set(3, 18, Some(PieceKind::T));
        board.set(4, 18, Some(PieceKind::T));

        let result = clear_and_score(&mut board);
        assert_eq!(result.line_score, 10);
        assert_eq!(result.uniform_rows, 1);
        assert_eq!(result.bonus_score, 50);
        assert_eq!(result.total(), 60);
    }
}
