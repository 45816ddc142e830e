//! Frame driver: time-based autoplay of the scroll offset

use std::time::Duration;

use tracing::{debug, trace};

use super::controller::TickerMotionController;
use super::scheduler::{FrameHandle, Scheduler};

/// Wrap an offset into `[0, length)`
///
/// Overflow carries forward, so a frame that crosses the end of the track
/// lands at the same distance into the next lap.
#[inline]
pub fn wrap_offset(offset: f64, length: f64) -> f64 {
    if !(length > 0.0) || !offset.is_finite() {
        return 0.0;
    }
    let wrapped = offset.rem_euclid(length);
    // rem_euclid may round up to `length` for tiny negative inputs
    if wrapped >= length {
        0.0
    } else {
        wrapped
    }
}

/// Advance an offset by `elapsed` at `speed` units per second, wrapped
#[inline]
pub fn advance_offset(offset: f64, length: f64, elapsed: Duration, speed: f64) -> f64 {
    wrap_offset(offset + elapsed.as_secs_f64() * speed, length)
}

impl<S: Scheduler> TickerMotionController<S> {
    /// Start autoplay
    ///
    /// No-op when already running, while a drag is active, or after teardown.
    /// Without a measured track the start is deferred until content arrives.
    pub fn start(&mut self) {
        if self.torn_down || self.state.is_auto_scrolling {
            return;
        }
        if self.state.is_dragging {
            debug!("start ignored while dragging");
            return;
        }
        if !(self.state.track_length > 0.0) {
            debug!("track not measured yet, deferring start");
            self.state.start_deferred = true;
            return;
        }

        self.state.start_deferred = false;
        self.state.scroll_offset = wrap_offset(self.state.scroll_offset, self.state.track_length);
        self.tracks.apply(self.state.scroll_offset);

        self.state.is_auto_scrolling = true;
        self.state.last_frame = Some(self.scheduler.now());
        if let Some(stale) = self.state.pending_frame.take() {
            self.scheduler.cancel_frame(stale);
        }
        self.state.pending_frame = Some(self.scheduler.request_frame());
        debug!(offset = self.state.scroll_offset, "autoplay started");
    }

    /// Stop autoplay and drop any deferred start; idempotent
    pub fn pause(&mut self) {
        self.state.start_deferred = false;
        self.halt_driver();
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.state.is_auto_scrolling
    }

    pub(crate) fn halt_driver(&mut self) {
        if self.state.is_auto_scrolling {
            debug!(offset = self.state.scroll_offset, "autoplay paused");
        }
        self.state.is_auto_scrolling = false;
        if let Some(handle) = self.state.pending_frame.take() {
            self.scheduler.cancel_frame(handle);
        }
        self.state.last_frame = None;
    }

    /// Frame callback: advance, project, reschedule
    pub fn on_frame(&mut self, handle: FrameHandle) {
        if self.state.pending_frame != Some(handle) {
            trace!(?handle, "stale frame ignored");
            return;
        }
        self.state.pending_frame = None;

        if !self.state.is_auto_scrolling {
            return;
        }

        let now = self.scheduler.now();
        let elapsed = self
            .state
            .last_frame
            .map(|last| now.saturating_duration_since(last))
            .unwrap_or_default();
        self.state.last_frame = Some(now);

        let length = self.state.track_length;
        let speed = self.config.speed_for(length);
        self.state.scroll_offset = advance_offset(self.state.scroll_offset, length, elapsed, speed);
        self.tracks.apply(self.state.scroll_offset);

        self.state.pending_frame = Some(self.scheduler.request_frame());
    }
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use super::*;
    use crate::motion::{MotionConfig, QueueScheduler};

    #[test]
    fn test_wrap_offset() {
        assert_eq!(wrap_offset(0.0, 100.0), 0.0);
        assert_eq!(wrap_offset(99.5, 100.0), 99.5);
        assert_eq!(wrap_offset(100.0, 100.0), 0.0);
        assert_eq!(wrap_offset(105.0, 100.0), 5.0);
        assert_eq!(wrap_offset(350.0, 100.0), 50.0);
        assert_eq!(wrap_offset(-10.0, 100.0), 90.0);
        assert_eq!(wrap_offset(42.0, 0.0), 0.0);
        assert_eq!(wrap_offset(f64::NAN, 100.0), 0.0);
    }

    #[test]
    fn test_advance_carries_overflow() {
        let offset = advance_offset(95.0, 100.0, Duration::from_millis(500), 20.0);
        assert!((offset - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_start_is_noop_when_running() {
        let mut ticker = TickerMotionController::new(
            MotionConfig::new(10.0, 3.0).unwrap(),
            QueueScheduler::new(Instant::now()),
        );
        ticker.set_content(100.0);
        ticker.start();
        let frame = ticker.state().pending_frame;
        ticker.start();
        assert_eq!(ticker.state().pending_frame, frame);
        assert_eq!(ticker.scheduler().pending_frames(), 1);
    }

    #[test]
    fn test_pause_is_idempotent() {
        let mut ticker = TickerMotionController::new(
            MotionConfig::new(10.0, 3.0).unwrap(),
            QueueScheduler::new(Instant::now()),
        );
        ticker.set_content(100.0);
        ticker.start();
        ticker.pause();
        ticker.pause();
        assert!(!ticker.is_running());
        assert!(ticker.state().last_frame.is_none());
        assert_eq!(ticker.scheduler().pending_frames(), 0);
    }

    #[test]
    fn test_stale_frame_does_not_advance() {
        let mut ticker = TickerMotionController::new(
            MotionConfig::new(1.0, 3.0).unwrap(),
            QueueScheduler::new(Instant::now()),
        );
        ticker.set_content(100.0);
        ticker.start();
        let old = ticker.state().pending_frame.unwrap();
        ticker.pause();
        ticker.start();

        ticker.scheduler_mut().advance(Duration::from_millis(100));
        ticker.on_frame(old);
        assert_eq!(ticker.state().scroll_offset, 0.0);
        assert_eq!(ticker.scheduler().pending_frames(), 1);
    }

    #[test]
    fn test_paused_driver_stops_moving() {
        let mut ticker = TickerMotionController::new(
            MotionConfig::new(1.0, 3.0).unwrap(),
            QueueScheduler::new(Instant::now()),
        );
        ticker.set_content(100.0);
        ticker.start();
        ticker.scheduler_mut().advance(Duration::from_millis(100));
        ticker.pump();
        let offset = ticker.state().scroll_offset;
        assert!((offset - 10.0).abs() < 1e-6);

        ticker.pause();
        ticker.scheduler_mut().advance(Duration::from_secs(1));
        assert_eq!(ticker.pump(), 0);
        assert_eq!(ticker.state().scroll_offset, offset);
    }
}
