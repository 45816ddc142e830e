//! Pointer and touch interaction state machine

use tracing::debug;

use super::controller::TickerMotionController;
use super::scheduler::Scheduler;

/// Device that produced a pointer event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerSource {
    Mouse,
    Touch,
}

/// Kind of pointer event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    /// Pointer entered the ticker region
    Enter,
    /// Pointer left the ticker region
    Leave,
    /// Button press or touch start
    Down,
    /// Pointer or touch moved
    Move,
    /// Button release or touch end
    Up,
    /// Gesture aborted by the platform
    Cancel,
}

/// A pointer event carrying the horizontal client position
///
/// Mouse and touch report the same axis, so drag math ignores the source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub x: f64,
    pub source: PointerSource,
}

impl PointerEvent {
    pub fn mouse(kind: PointerKind, x: f64) -> Self {
        Self {
            kind,
            x,
            source: PointerSource::Mouse,
        }
    }

    pub fn touch(kind: PointerKind, x: f64) -> Self {
        Self {
            kind,
            x,
            source: PointerSource::Touch,
        }
    }
}

/// What the controller did with an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResponse {
    /// Precondition not met, nothing changed
    Ignored,
    /// State changed
    Handled,
    /// The event belongs to a drag; the host should suppress its default gesture
    Captured,
}

impl EventResponse {
    #[inline]
    pub fn suppress_default(self) -> bool {
        self == EventResponse::Captured
    }
}

/// Pointer position and offset captured at drag start
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragOrigin {
    pub pointer_x: f64,
    pub origin_offset: f64,
}

impl DragOrigin {
    /// Offset for the pointer at `x`, clamped to `[0, length]`
    ///
    /// Clamped rather than wrapped so one gesture cannot skip across the
    /// loop boundary.
    #[inline]
    pub fn offset_at(&self, x: f64, length: f64) -> f64 {
        let delta = x - self.pointer_x;
        (self.origin_offset - delta).clamp(0.0, length.max(0.0))
    }
}

/// Observable phase of the interaction state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionPhase {
    /// Driver running, no pointer engaged
    Auto,
    /// Pointer over the region, driver paused
    Hovering,
    /// Manual offset tracking
    Dragging,
    /// Driver paused, waiting for the idle timer
    IdlePending,
    /// Stopped by the host or waiting for content
    Paused,
    TornDown,
}

impl<S: Scheduler> TickerMotionController<S> {
    /// Feed one pointer or touch event through the state machine
    pub fn handle_pointer(&mut self, event: PointerEvent) -> EventResponse {
        if self.torn_down {
            return EventResponse::Ignored;
        }

        match event.kind {
            PointerKind::Enter => self.pointer_enter(),
            PointerKind::Leave => self.pointer_leave(),
            PointerKind::Down => self.drag_start(event.x),
            PointerKind::Move => self.pointer_move(event.x),
            PointerKind::Up | PointerKind::Cancel => self.drag_end(),
        }
    }

    /// Current phase derived from the motion flags
    pub fn phase(&self) -> InteractionPhase {
        if self.torn_down {
            InteractionPhase::TornDown
        } else if self.state.is_dragging {
            InteractionPhase::Dragging
        } else if self.state.is_auto_scrolling {
            // A host start overrides the hover pause
            InteractionPhase::Auto
        } else if self.state.is_hovered {
            InteractionPhase::Hovering
        } else if self.state.pending_resume.is_some() {
            InteractionPhase::IdlePending
        } else {
            InteractionPhase::Paused
        }
    }

    fn pointer_enter(&mut self) -> EventResponse {
        self.halt_driver();
        self.state.is_hovered = true;
        debug!("pointer entered ticker");
        EventResponse::Handled
    }

    fn pointer_leave(&mut self) -> EventResponse {
        self.state.is_hovered = false;
        debug!(dragging = self.state.is_dragging, "pointer left ticker");

        if self.state.is_dragging {
            // Leaving mid-drag releases the drag; autoplay waits for the idle timer
            self.drag_end();
        } else {
            self.start();
        }
        EventResponse::Handled
    }

    fn drag_start(&mut self, x: f64) -> EventResponse {
        self.halt_driver();
        self.state.is_dragging = true;
        self.state.drag_origin = Some(DragOrigin {
            pointer_x: x,
            origin_offset: self.state.scroll_offset,
        });
        self.record_interaction();
        debug!(x, offset = self.state.scroll_offset, "drag started");
        EventResponse::Captured
    }

    fn pointer_move(&mut self, x: f64) -> EventResponse {
        let origin = match self.state.drag_origin {
            Some(origin) if self.state.is_dragging => origin,
            _ => {
                // Passive movement still defers auto-resume
                self.record_interaction();
                return EventResponse::Handled;
            }
        };

        self.state.scroll_offset = origin.offset_at(x, self.state.track_length);
        self.tracks.apply(self.state.scroll_offset);
        self.record_interaction();
        EventResponse::Captured
    }

    fn drag_end(&mut self) -> EventResponse {
        if !self.state.is_dragging {
            return EventResponse::Ignored;
        }

        self.state.is_dragging = false;
        self.state.drag_origin = None;
        self.record_interaction();
        debug!(offset = self.state.scroll_offset, "drag ended");
        EventResponse::Handled
    }
}
