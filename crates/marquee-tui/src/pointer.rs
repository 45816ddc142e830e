//! Terminal mouse events to ticker pointer events
//!
//! Terminals report raw mouse positions only, so enter/leave are synthesized
//! from hit-testing the band area.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use marquee_core::motion::{PointerEvent, PointerKind};
use ratatui::layout::{Position, Rect};

/// Tracks whether the mouse is over the ticker band
#[derive(Debug, Clone, Copy, Default)]
pub struct PointerTracker {
    inside: bool,
}

impl PointerTracker {
    #[inline]
    pub fn is_inside(&self) -> bool {
        self.inside
    }

    /// Translate one mouse event over `area` into zero or more pointer events
    pub fn translate(&mut self, event: &MouseEvent, area: Rect) -> Vec<PointerEvent> {
        let hit = area.contains(Position::new(event.column, event.row));
        let x = event.column as f64;
        let mut out = Vec::new();

        match event.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(MouseButton::Left) => {
                self.cross_boundary(hit, x, &mut out);
                if hit {
                    out.push(PointerEvent::mouse(PointerKind::Move, x));
                }
            }
            MouseEventKind::Down(MouseButton::Left) => {
                self.cross_boundary(hit, x, &mut out);
                if hit {
                    out.push(PointerEvent::mouse(PointerKind::Down, x));
                }
            }
            MouseEventKind::Up(MouseButton::Left) => {
                // A release anywhere ends a drag; the controller ignores it otherwise
                out.push(PointerEvent::mouse(PointerKind::Up, x));
                self.cross_boundary(hit, x, &mut out);
            }
            _ => {}
        }

        out
    }

    /// The terminal lost focus or the band disappeared
    pub fn release(&mut self) -> Option<PointerEvent> {
        if self.inside {
            self.inside = false;
            Some(PointerEvent::mouse(PointerKind::Leave, 0.0))
        } else {
            None
        }
    }

    fn cross_boundary(&mut self, hit: bool, x: f64, out: &mut Vec<PointerEvent>) {
        if hit && !self.inside {
            self.inside = true;
            out.push(PointerEvent::mouse(PointerKind::Enter, x));
        } else if !hit && self.inside {
            self.inside = false;
            out.push(PointerEvent::mouse(PointerKind::Leave, x));
        }
    }
}
