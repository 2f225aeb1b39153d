//! Game views: pure mappings from core snapshots into a framebuffer.
//!
//! Nothing here does I/O, so every view can be unit-tested by rendering into
//! a `FrameBuffer` and inspecting the cells. This module holds the shared
//! layout helpers and the Tetris view; the other games live next to it.

use crate::core::TetrisSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Vertical placement of a game frame inside the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Screen rectangle in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub w: u16,
    pub h: u16,
}

impl Rect {
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x
            && y >= self.y
            && (x as u32) < self.x as u32 + self.w as u32
            && (y as u32) < self.y as u32 + self.h as u32
    }
}

pub(crate) const SCREEN: CellStyle = CellStyle::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0));
pub(crate) const BORDER: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
pub(crate) const FIELD: CellStyle = CellStyle::new(Rgb::new(90, 90, 100), Rgb::new(30, 30, 40)).dim();
pub(crate) const LABEL: CellStyle = CellStyle::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0)).bold();
pub(crate) const VALUE: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
pub(crate) const HINT: CellStyle = CellStyle::new(Rgb::new(140, 140, 140), Rgb::new(0, 0, 0)).dim();
pub(crate) const OVERLAY: CellStyle = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();

/// Hint line shown at the bottom of every game screen.
pub const GAME_HINT: &str = "r restart  m menu  q quit";

/// Top-left corner of a `frame_w` x `frame_h` frame placed in `viewport`.
pub(crate) fn place_frame(viewport: Viewport, frame_w: u16, frame_h: u16, anchor: AnchorY) -> Rect {
    let x = viewport.width.saturating_sub(frame_w) / 2;
    let y = match anchor {
        AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
        AnchorY::Top => 0,
    };
    Rect {
        x,
        y,
        w: frame_w,
        h: frame_h,
    }
}

/// Clear the framebuffer to the screen background at the viewport size.
pub(crate) fn begin_frame(fb: &mut FrameBuffer, viewport: Viewport) {
    fb.resize(viewport.width, viewport.height);
    fb.clear(SCREEN.cell(' '));
}

/// Centre `lines` over the middle of `frame`.
pub(crate) fn draw_overlay(fb: &mut FrameBuffer, frame: Rect, lines: &[&str]) {
    let top = (frame.y + frame.h / 2).saturating_sub(lines.len() as u16 / 2);
    for (i, line) in lines.iter().enumerate() {
        let width = line.chars().count() as u16;
        let x = frame.x + frame.w.saturating_sub(width) / 2;
        let y = top + i as u16;
        // Pad one cell either side so the text stands out from the field.
        fb.fill_rect(x.saturating_sub(1), y, width + 2, 1, ' ', OVERLAY);
        fb.put_str(x, y, line, OVERLAY);
    }
}

/// Bottom hint line.
pub(crate) fn draw_hint(fb: &mut FrameBuffer, viewport: Viewport, text: &str) {
    if viewport.height == 0 {
        return;
    }
    fb.put_str_centered(0, viewport.height - 1, viewport.width, text, HINT);
}

/// Labelled numbers stacked in a side panel to the right of `frame`.
///
/// Skipped when the viewport is too narrow.
pub(crate) fn draw_side_panel(
    fb: &mut FrameBuffer,
    viewport: Viewport,
    frame: Rect,
    entries: &[(&str, u32)],
) {
    let panel_x = frame.x.saturating_add(frame.w).saturating_add(2);
    if panel_x >= viewport.width || viewport.width - panel_x < 6 {
        return;
    }

    let mut y = frame.y;
    for &(label, value) in entries {
        fb.put_str(panel_x, y, label, LABEL);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, value, VALUE);
        y = y.saturating_add(2);
    }
}

/// Every Tetris block, locked or falling, is drawn in this one colour.
pub(crate) const BLOCK: CellStyle =
    CellStyle::new(Rgb::new(255, 165, 0), Rgb::new(30, 30, 40)).bold();

/// Terminal renderer for the Tetris board.
pub struct TetrisView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for TetrisView {
    fn default() -> Self {
        // 2x1 compensates for the usual terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

impl TetrisView {
    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Bordered board frame for `viewport`.
    pub fn frame(&self, viewport: Viewport) -> Rect {
        let frame_w = BOARD_WIDTH as u16 * self.cell_w + 2;
        let frame_h = BOARD_HEIGHT as u16 * self.cell_h + 2;
        place_frame(viewport, frame_w, frame_h, self.anchor_y)
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &TetrisSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        begin_frame(fb, viewport);
        let frame = self.frame(viewport);

        fb.draw_border(frame.x, frame.y, frame.w, frame.h, BORDER);

        let grid = snap.composed();
        for (y, row) in grid.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                let (ch, style) = match cell {
                    Some(_) => ('█', BLOCK),
                    None => ('·', FIELD),
                };
                self.fill_cell(fb, frame, x as u16, y as u16, ch, style);
            }
        }

        draw_side_panel(
            fb,
            viewport,
            frame,
            &[("SCORE", snap.score), ("LINES", snap.lines)],
        );

        if snap.game_over {
            draw_overlay(fb, frame, &["GAME OVER", "press r"]);
        }
        draw_hint(fb, viewport, GAME_HINT);
    }

    pub fn render(&self, snap: &TetrisSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn fill_cell(&self, fb: &mut FrameBuffer, frame: Rect, x: u16, y: u16, ch: char, style: CellStyle) {
        let px = frame.x + 1 + x * self.cell_w;
        let py = frame.y + 1 + y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ActiveSnapshot;
    use crate::types::PieceKind;

    #[test]
    fn border_corners_fill_exact_viewport() {
        let view = TetrisView::default();
        // 10*2 by 20*1 board plus border => 22x22
        let fb = view.render(&TetrisSnapshot::default(), Viewport::new(22, 23));

        assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
        assert_eq!(fb.get(21, 0).unwrap().ch, '┐');
        assert_eq!(fb.get(0, 21).unwrap().ch, '└');
        assert_eq!(fb.get(21, 21).unwrap().ch, '┘');
    }

    #[test]
    fn locked_and_active_cells_are_two_chars_wide() {
        let mut snap = TetrisSnapshot::default();
        snap.board[19][0] = Some(PieceKind::I);
        snap.active = Some(ActiveSnapshot {
            kind: PieceKind::O,
            row: 0,
            column: 4,
        });

        let fb = TetrisView::default()
            .with_anchor_y(AnchorY::Top)
            .render(&snap, Viewport::new(22, 24));

        assert_eq!(fb.get(1, 20).unwrap().ch, '█');
        assert_eq!(fb.get(2, 20).unwrap().ch, '█');
        assert_eq!(fb.get(3, 20).unwrap().ch, '·');
        // O piece at column 4 => x = 1 + 4*2
        assert_eq!(fb.get(9, 1).unwrap().ch, '█');
        assert_eq!(fb.get(12, 2).unwrap().ch, '█');
        // Locked and falling blocks share the block colour.
        assert_eq!(fb.get(9, 1).unwrap().style, BLOCK);
        assert_eq!(fb.get(1, 20).unwrap().style, BLOCK);
    }

    #[test]
    fn side_panel_and_game_over_overlay() {
        let mut snap = TetrisSnapshot::default();
        snap.score = 1234;
        snap.lines = 7;
        snap.game_over = true;

        let text = TetrisView::default()
            .render(&snap, Viewport::new(60, 24))
            .to_text();
        assert!(text.contains("SCORE"));
        assert!(text.contains("1234"));
        assert!(text.contains("LINES"));
        assert!(text.contains("GAME OVER"));
        assert!(text.contains(GAME_HINT));
    }

    #[test]
    fn rect_contains() {
        let r = Rect {
            x: 2,
            y: 3,
            w: 4,
            h: 2,
        };
        assert!(r.contains(2, 3));
        assert!(r.contains(5, 4));
        assert!(!r.contains(6, 4));
        assert!(!r.contains(2, 5));
    }
}
