//! Pieces module - the seven fixed tetromino shapes
//!
//! Each shape is described by the width of its square bounding matrix and the
//! `(column, row)` offsets of its four filled cells relative to the matrix's
//! top-left corner. Shapes never rotate.
//!
//! ```text
//! I: . . . .   J: # . .   L: . . #   O: # #
//!    # # # #      # # #      # # #      # #
//!    . . . .      . . .      . . .
//!    . . . .
//!
//! S: . # #     T: . # .   Z: # # .
//!    # # .        # # #      . # #
//!    . . .        . . .      . . .
//! ```

use quickplay_types::PieceKind;

/// Offset of a single cell relative to the piece anchor: `(column, row)`
pub type CellOffset = (i8, i8);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceShape {
    /// Width of the bounding matrix (used to centre the spawn column)
    pub width: u8,
    pub cells: [CellOffset; 4],
}

/// Get the shape for a piece kind
pub fn shape(kind: PieceKind) -> PieceShape {
    match kind {
        PieceKind::I => PieceShape {
            width: 4,
            cells: [(0, 1), (1, 1), (2, 1), (3, 1)],
        },
        PieceKind::J => PieceShape {
            width: 3,
            cells: [(0, 0), (0, 1), (1, 1), (2, 1)],
        },
        PieceKind::L => PieceShape {
            width: 3,
            cells: [(2, 0), (0, 1), (1, 1), (2, 1)],
        },
        PieceKind::O => PieceShape {
            width: 2,
            cells: [(0, 0), (1, 0), (0, 1), (1, 1)],
        },
        PieceKind::S => PieceShape {
            width: 3,
            cells: [(1, 0), (2, 0), (0, 1), (1, 1)],
        },
        PieceKind::T => PieceShape {
            width: 3,
            cells: [(1, 0), (0, 1), (1, 1), (2, 1)],
        },
        PieceKind::Z => PieceShape {
            width: 3,
            cells: [(0, 0), (1, 0), (1, 1), (2, 1)],
        },
    }
}

/// Spawn column that centres the piece matrix on a board `columns` wide
pub fn spawn_column(kind: PieceKind, columns: u8) -> i8 {
    ((columns as i16 - shape(kind).width as i16) / 2) as i8
}
