//! Mouse gestures: drags that steer the snake and clicks that pick a tile.
//!
//! A drag is measured from the cell where the left button went down. Every
//! movement while the button is held re-resolves the heading from the total
//! displacement, so a long drag can change its mind halfway.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::types::Direction;

/// Terminal cells are roughly twice as tall as they are wide; vertical
/// displacement is scaled by this factor before comparing axes.
pub const ROW_ASPECT: i32 = 2;

/// Tracks one left-button drag at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DragTracker {
    origin: Option<(u16, u16)>,
}

impl DragTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start of the drag in progress, if any.
    pub fn origin(&self) -> Option<(u16, u16)> {
        self.origin
    }

    pub fn is_dragging(&self) -> bool {
        self.origin.is_some()
    }

    /// Feed a mouse event; returns the heading implied by the drag so far.
    pub fn handle(&mut self, event: MouseEvent) -> Option<Direction> {
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.origin = Some((event.column, event.row));
                None
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                let origin = match self.origin {
                    Some(origin) => origin,
                    None => {
                        // Some terminals skip the press; start from here.
                        self.origin = Some((event.column, event.row));
                        return None;
                    }
                };
                let dx = event.column as i32 - origin.0 as i32;
                let dy = (event.row as i32 - origin.1 as i32) * ROW_ASPECT;
                Direction::from_drag(dx, dy)
            }
            MouseEventKind::Up(MouseButton::Left) => {
                self.origin = None;
                None
            }
            _ => None,
        }
    }

    pub fn cancel(&mut self) {
        self.origin = None;
    }
}

/// Terminal position `(column, row)` of a left click.
pub fn click_position(event: MouseEvent) -> Option<(u16, u16)> {
    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => Some((event.column, event.row)),
        _ => None,
    }
}
