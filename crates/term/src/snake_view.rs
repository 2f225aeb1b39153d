//! Snake play field view.

use crate::core::SnakeSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::game_view::{
    begin_frame, draw_hint, draw_overlay, draw_side_panel, place_frame, AnchorY, Rect, Viewport,
    BORDER, FIELD, GAME_HINT,
};

const HEAD: CellStyle = CellStyle::new(Rgb::new(140, 255, 140), Rgb::new(30, 30, 40)).bold();
const BODY: CellStyle = CellStyle::new(Rgb::new(60, 190, 80), Rgb::new(30, 30, 40));
const FOOD: CellStyle = CellStyle::new(Rgb::new(230, 70, 70), Rgb::new(30, 30, 40)).bold();

pub struct SnakeView {
    cell_w: u16,
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for SnakeView {
    fn default() -> Self {
        Self {
            cell_w: 2,
            cell_h: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

impl SnakeView {
    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    pub fn frame(&self, snap: &SnakeSnapshot, viewport: Viewport) -> Rect {
        let frame_w = (snap.columns.max(0) as u16) * self.cell_w + 2;
        let frame_h = (snap.rows.max(0) as u16) * self.cell_h + 2;
        place_frame(viewport, frame_w, frame_h, self.anchor_y)
    }

    pub fn render_into(&self, snap: &SnakeSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        begin_frame(fb, viewport);
        let frame = self.frame(snap, viewport);

        fb.draw_border(frame.x, frame.y, frame.w, frame.h, BORDER);
        fb.fill_rect(
            frame.x + 1,
            frame.y + 1,
            frame.w.saturating_sub(2),
            frame.h.saturating_sub(2),
            ' ',
            FIELD,
        );

        if let Some(food) = snap.food {
            let (cx, cy) = snap.cell_of(food);
            self.fill_cell(fb, snap, frame, cx, cy, '●', FOOD);
        }

        // Tail first so the head is drawn on top after a collision.
        let segments: Vec<_> = snap.segments().collect();
        for (i, p) in segments.iter().enumerate().rev() {
            let (cx, cy) = snap.cell_of(*p);
            let style = if i == 0 { HEAD } else { BODY };
            self.fill_cell(fb, snap, frame, cx, cy, '█', style);
        }

        draw_side_panel(
            fb,
            viewport,
            frame,
            &[("SCORE", snap.score), ("HIGH", snap.high_score)],
        );

        if snap.game_over {
            let scored = format!("You scored {} points.", snap.score);
            draw_overlay(fb, frame, &["GAME OVER", &scored, "press r to play again"]);
        }
        draw_hint(fb, viewport, GAME_HINT);
    }

    pub fn render(&self, snap: &SnakeSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    /// Paint one play-field cell. Cells outside the field (a head that just
    /// left it) are skipped.
    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        snap: &SnakeSnapshot,
        frame: Rect,
        cx: i32,
        cy: i32,
        ch: char,
        style: CellStyle,
    ) {
        if cx < 0 || cy < 0 || cx >= snap.columns || cy >= snap.rows {
            return;
        }
        let px = frame.x + 1 + cx as u16 * self.cell_w;
        let py = frame.y + 1 + cy as u16 * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Epoch;
    use crate::types::{Direction, Point};

    fn snapshot() -> SnakeSnapshot {
        SnakeSnapshot {
            head: Point::new(20, 10),
            body: vec![Point::new(10, 10), Point::new(0, 10)],
            length: 2,
            direction: Direction::Right,
            food: Some(Point::new(40, 0)),
            score: 3,
            high_score: 9,
            game_over: false,
            cell_size: 10,
            columns: 5,
            rows: 3,
            epoch: Epoch::default(),
        }
    }

    #[test]
    fn draws_head_body_and_food() {
        let view = SnakeView::default().with_anchor_y(AnchorY::Top);
        // 5*2 + 2 wide, 3 + 2 tall
        let fb = view.render(&snapshot(), Viewport::new(12, 6));

        assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
        assert_eq!(fb.get(11, 4).unwrap().ch, '┘');

        // head at cell (2, 1)
        assert_eq!(fb.get(5, 2).unwrap().ch, '█');
        assert_eq!(fb.get(5, 2).unwrap().style, HEAD);
        // one trailing segment at cell (1, 1)
        assert_eq!(fb.get(3, 2).unwrap().style, BODY);
        // body[1] is beyond `length` and not drawn
        assert_eq!(fb.get(1, 2).unwrap().ch, ' ');
        // food at cell (4, 0)
        assert_eq!(fb.get(9, 1).unwrap().ch, '●');
    }

    #[test]
    fn head_outside_field_is_not_drawn() {
        let mut snap = snapshot();
        snap.head = Point::new(50, 20);
        let view = SnakeView::default().with_anchor_y(AnchorY::Top);
        let viewport = Viewport::new(40, 8);
        let frame = view.frame(&snap, viewport);
        let fb = view.render(&snap, viewport);
        // the head's cell would be drawn over the right border
        assert_eq!(fb.get(frame.x + frame.w - 1, frame.y + 3).unwrap().ch, '│');
    }

    #[test]
    fn game_over_overlay_reports_score() {
        let mut snap = snapshot();
        snap.game_over = true;
        let text = SnakeView::default()
            .render(&snap, Viewport::new(40, 8))
            .to_text();
        assert!(text.contains("GAME OVER"));
        assert!(text.contains("You scored 3 points."));
        assert!(text.contains("play again"));
    }

    #[test]
    fn side_panel_shows_scores() {
        let text = SnakeView::default()
            .render(&snapshot(), Viewport::new(40, 10))
            .to_text();
        assert!(text.contains("SCORE"));
        assert!(text.contains("HIGH"));
        assert!(text.contains('9'));
    }
}
