//! Motion controller owning the state of one ticker
//!
//! The driver, idle timer and interaction transitions are implemented in
//! their own modules as further `impl` blocks on [`TickerMotionController`].

use std::time::Instant;

use tracing::debug;

use super::config::MotionConfig;
use super::driver::wrap_offset;
use super::interaction::DragOrigin;
use super::scheduler::{FrameHandle, QueueScheduler, Scheduler, TimerHandle, Wakeup};
use super::tracks::DualTrack;
use crate::Result;

/// Mutable motion record, owned exclusively by one controller
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MotionState {
    /// Whether the frame driver is advancing the offset
    pub is_auto_scrolling: bool,
    /// Current horizontal displacement of both tracks
    pub scroll_offset: f64,
    /// Measured extent of one track
    pub track_length: f64,
    pub is_dragging: bool,
    pub is_hovered: bool,
    /// Captured at drag start, dropped at drag end
    pub drag_origin: Option<DragOrigin>,
    /// Timestamp of the last driver step
    pub last_frame: Option<Instant>,
    pub pending_frame: Option<FrameHandle>,
    pub pending_resume: Option<TimerHandle>,
    /// A start was requested before the track had a usable length
    pub start_deferred: bool,
}

/// Seamless-loop motion controller
///
/// Owns the [`MotionState`], the [`DualTrack`] projection and the scheduler
/// that delivers frame and timer wakeups. Dropping the controller tears it
/// down.
#[derive(Debug)]
pub struct TickerMotionController<S: Scheduler> {
    pub(crate) state: MotionState,
    pub(crate) config: MotionConfig,
    pub(crate) tracks: DualTrack,
    pub(crate) scheduler: S,
    pub(crate) torn_down: bool,
}

impl<S: Scheduler> TickerMotionController<S> {
    /// Create an idle controller; call [`set_content`](Self::set_content) and
    /// [`start`](Self::start) to begin scrolling
    pub fn new(config: MotionConfig, scheduler: S) -> Self {
        Self {
            state: MotionState::default(),
            config,
            tracks: DualTrack::default(),
            scheduler,
            torn_down: false,
        }
    }

    /// Content was (re)generated with a new measured track length
    pub fn set_content(&mut self, track_length: f64) {
        debug!(track_length, "ticker content updated");
        self.set_track_length(track_length);
    }

    /// Layout changed; re-measured track length
    ///
    /// The offset is kept, only wrapped back into range if the track shrank.
    pub fn resize(&mut self, track_length: f64) {
        debug!(track_length, "ticker resized");
        self.set_track_length(track_length);
    }

    fn set_track_length(&mut self, track_length: f64) {
        if self.torn_down {
            return;
        }

        let length = if track_length.is_finite() && track_length > 0.0 {
            track_length
        } else {
            0.0
        };

        self.state.track_length = length;
        self.tracks.set_length(length);

        if length == 0.0 {
            // Not measured yet; stop and retry once a real length arrives
            if self.state.is_auto_scrolling {
                self.halt_driver();
                self.state.start_deferred = true;
            }
            self.state.scroll_offset = 0.0;
        } else {
            self.state.scroll_offset = wrap_offset(self.state.scroll_offset, length);
        }
        self.tracks.apply(self.state.scroll_offset);

        if length > 0.0
            && self.state.start_deferred
            && !self.state.is_dragging
            && !self.state.is_hovered
        {
            self.start();
        }
    }

    /// Change the traversal period; the previous value stays on error
    pub fn set_scroll_config(&mut self, period_secs: f64) -> Result<()> {
        self.config.set_scroll_period(period_secs)?;
        debug!(period_secs, "scroll period updated");
        Ok(())
    }

    /// Route a wakeup to the matching handler
    pub fn dispatch(&mut self, wakeup: Wakeup) {
        match wakeup {
            Wakeup::Frame(handle) => self.on_frame(handle),
            Wakeup::Timer(handle) => self.on_idle_timeout(handle),
        }
    }

    /// Cancel all scheduled work and release content; idempotent
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }

        self.halt_driver();
        self.cancel_resume_timer();
        self.state = MotionState::default();
        self.tracks.clear();
        self.torn_down = true;
        debug!("ticker torn down");
    }

    #[inline]
    pub fn state(&self) -> &MotionState {
        &self.state
    }

    #[inline]
    pub fn tracks(&self) -> &DualTrack {
        &self.tracks
    }

    #[inline]
    pub fn config(&self) -> &MotionConfig {
        &self.config
    }

    #[inline]
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    #[inline]
    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    #[inline]
    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }
}

impl TickerMotionController<QueueScheduler> {
    /// Dispatch every wakeup due on the queue; returns how many ran
    pub fn pump(&mut self) -> usize {
        let due = self.scheduler.drain_due();
        let count = due.len();
        for wakeup in due {
            self.dispatch(wakeup);
        }
        count
    }
}

impl<S: Scheduler> Drop for TickerMotionController<S> {
    fn drop(&mut self) {
        self.teardown();
    }
}
