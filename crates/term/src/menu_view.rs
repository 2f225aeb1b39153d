//! Home menu listing the games.

use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::game_view::{begin_frame, draw_hint, place_frame, AnchorY, Rect, Viewport, BORDER, LABEL, VALUE};
use crate::types::GameKind;

const SELECTED: CellStyle = CellStyle::new(Rgb::new(0, 0, 0), Rgb::new(120, 200, 255)).bold();

pub const MENU_HINT: &str = "1-3 or arrows + enter  q quit";

#[derive(Debug, Clone, Copy, Default)]
pub struct MenuView;

impl MenuView {
    pub fn frame(&self, viewport: Viewport) -> Rect {
        let frame_w = 30;
        let frame_h = GameKind::ALL.len() as u16 * 2 + 5;
        place_frame(viewport, frame_w, frame_h, AnchorY::Center)
    }

    /// Render the menu with `selected` (an index into `GameKind::ALL`)
    /// highlighted.
    pub fn render_into(&self, selected: usize, viewport: Viewport, fb: &mut FrameBuffer) {
        begin_frame(fb, viewport);
        let frame = self.frame(viewport);

        fb.draw_border(frame.x, frame.y, frame.w, frame.h, BORDER);
        fb.put_str_centered(frame.x, frame.y + 1, frame.w, "QuickPlay", LABEL);

        for (i, kind) in GameKind::ALL.iter().enumerate() {
            let y = frame.y + 3 + i as u16 * 2;
            let x = frame.x + 4;
            let style = if i == selected { SELECTED } else { VALUE };
            if i == selected {
                fb.fill_rect(frame.x + 2, y, frame.w - 4, 1, ' ', style);
                fb.put_char(frame.x + 2, y, '▶', style);
            }
            fb.put_u32(x, y, i as u32 + 1, style);
            fb.put_str(x + 3, y, kind.title(), style);
        }

        draw_hint(fb, viewport, MENU_HINT);
    }

    pub fn render(&self, selected: usize, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(selected, viewport, &mut fb);
        fb
    }
}
