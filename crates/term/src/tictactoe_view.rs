//! Tic-Tac-Toe board view and click hit-testing.

use crate::core::TicTacToeSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::game_view::{
    begin_frame, draw_hint, draw_overlay, place_frame, AnchorY, Rect, Viewport, BORDER, HINT,
    LABEL, GAME_HINT,
};
use crate::types::{Player, TILE_COUNT};

const HUMAN: CellStyle = CellStyle::new(Rgb::new(90, 170, 255), Rgb::new(0, 0, 0)).bold();
const BOT: CellStyle = CellStyle::new(Rgb::new(255, 120, 90), Rgb::new(0, 0, 0)).bold();

pub struct TicTacToeView {
    /// Tile interior width in terminal columns.
    tile_w: u16,
    /// Tile interior height in terminal rows.
    tile_h: u16,
    anchor_y: AnchorY,
}

impl Default for TicTacToeView {
    fn default() -> Self {
        Self {
            tile_w: 7,
            tile_h: 3,
            anchor_y: AnchorY::Center,
        }
    }
}

impl TicTacToeView {
    pub fn new(tile_w: u16, tile_h: u16) -> Self {
        Self {
            tile_w: tile_w.max(1),
            tile_h: tile_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    pub fn frame(&self, viewport: Viewport) -> Rect {
        let n = TILE_COUNT as u16;
        let frame_w = n * self.tile_w + n + 1;
        let frame_h = n * self.tile_h + n + 1;
        place_frame(viewport, frame_w, frame_h, self.anchor_y)
    }

    /// Screen rectangle covered by tile (`row`, `col`).
    pub fn tile_rect(&self, viewport: Viewport, row: usize, col: usize) -> Rect {
        let frame = self.frame(viewport);
        Rect {
            x: frame.x + 1 + col as u16 * (self.tile_w + 1),
            y: frame.y + 1 + row as u16 * (self.tile_h + 1),
            w: self.tile_w,
            h: self.tile_h,
        }
    }

    /// Tile under the terminal position (`x`, `y`), if any. Grid lines
    /// belong to no tile.
    pub fn tile_at(&self, viewport: Viewport, x: u16, y: u16) -> Option<(usize, usize)> {
        (0..TILE_COUNT)
            .flat_map(|r| (0..TILE_COUNT).map(move |c| (r, c)))
            .find(|&(r, c)| self.tile_rect(viewport, r, c).contains(x, y))
    }

    pub fn render_into(&self, snap: &TicTacToeSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        begin_frame(fb, viewport);
        let frame = self.frame(viewport);
        self.draw_grid(fb, frame);

        for (r, row) in snap.board.iter().enumerate() {
            for (c, tile) in row.iter().enumerate() {
                let rect = self.tile_rect(viewport, r, c);
                let mid_y = rect.y + rect.h / 2;
                match tile {
                    Some(player) => {
                        let style = match player {
                            Player::Human => HUMAN,
                            Player::Bot => BOT,
                        };
                        let mut buf = [0u8; 4];
                        let symbol = player.symbol().encode_utf8(&mut buf);
                        fb.put_str_centered(rect.x, mid_y, rect.w, symbol, style);
                    }
                    None => {
                        // keypad digit that claims this tile
                        let digit = char::from(b'1' + (r * TILE_COUNT + c) as u8);
                        fb.put_char(rect.x + rect.w / 2, mid_y, digit, HINT);
                    }
                }
            }
        }

        let status_y = frame.y.saturating_add(frame.h);
        fb.put_str_centered(frame.x, status_y, frame.w, status_line(snap), LABEL);

        if let Some(outcome) = snap.result {
            draw_overlay(fb, frame, &[outcome.message(), "press r"]);
        }
        draw_hint(fb, viewport, GAME_HINT);
    }

    pub fn render(&self, snap: &TicTacToeSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_grid(&self, fb: &mut FrameBuffer, frame: Rect) {
        fb.draw_border(frame.x, frame.y, frame.w, frame.h, BORDER);

        for i in 1..TILE_COUNT as u16 {
            let x = frame.x + i * (self.tile_w + 1);
            let y = frame.y + i * (self.tile_h + 1);

            for dy in 1..frame.h - 1 {
                fb.put_char(x, frame.y + dy, '│', BORDER);
            }
            for dx in 1..frame.w - 1 {
                fb.put_char(frame.x + dx, y, '─', BORDER);
            }
            fb.put_char(x, frame.y, '┬', BORDER);
            fb.put_char(x, frame.y + frame.h - 1, '┴', BORDER);
            fb.put_char(frame.x, y, '├', BORDER);
            fb.put_char(frame.x + frame.w - 1, y, '┤', BORDER);
        }

        for i in 1..TILE_COUNT as u16 {
            for j in 1..TILE_COUNT as u16 {
                let x = frame.x + i * (self.tile_w + 1);
                let y = frame.y + j * (self.tile_h + 1);
                fb.put_char(x, y, '┼', BORDER);
            }
        }
    }
}

fn status_line(snap: &TicTacToeSnapshot) -> &'static str {
    match (snap.result, snap.current_player) {
        (Some(outcome), _) => outcome.message(),
        (None, Player::Bot) => "Bot is thinking...",
        (None, Player::Human) => "Your move (X)",
    }
}
