//! Debounced idle timer that hands control back to autoplay

use tracing::{debug, trace};

use super::controller::TickerMotionController;
use super::scheduler::{Scheduler, TimerHandle};

impl<S: Scheduler> TickerMotionController<S> {
    /// Restart the idle countdown
    ///
    /// Any pending resume timer is cancelled first, so at most one is ever
    /// outstanding and the countdown always runs from the latest interaction.
    pub fn record_interaction(&mut self) {
        if self.torn_down {
            return;
        }

        self.cancel_resume_timer();
        if let Some(delay) = self.config.idle_timeout() {
            self.state.pending_resume = Some(self.scheduler.set_timeout(delay));
        }
    }

    /// Idle timer expiry: resume unless a drag or hover still blocks it
    pub fn on_idle_timeout(&mut self, handle: TimerHandle) {
        if self.state.pending_resume != Some(handle) {
            trace!(?handle, "stale idle timer ignored");
            return;
        }
        self.state.pending_resume = None;

        if self.state.is_dragging || self.state.is_hovered {
            debug!(
                dragging = self.state.is_dragging,
                hovered = self.state.is_hovered,
                "idle timeout elapsed but interaction still active"
            );
            return;
        }

        debug!("idle timeout elapsed, resuming autoplay");
        self.start();
    }

    /// Change the idle-resume delay; zero or negative disables idle resume
    ///
    /// Disabling cancels a pending resume. A new positive delay applies from
    /// the next interaction on.
    pub fn set_idle_timeout(&mut self, secs: f64) {
        self.config.set_idle_timeout(secs);
        if self.config.idle_timeout().is_none() {
            self.cancel_resume_timer();
        }
        debug!(secs, "idle timeout updated");
    }

    #[inline]
    pub fn idle_timer_pending(&self) -> bool {
        self.state.pending_resume.is_some()
    }

    pub(crate) fn cancel_resume_timer(&mut self) {
        if let Some(handle) = self.state.pending_resume.take() {
            self.scheduler.clear_timeout(handle);
        }
    }
}
