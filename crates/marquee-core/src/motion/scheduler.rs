//! Frame and timer scheduling primitives
//!
//! The controller never stores callbacks. It asks a [`Scheduler`] for a frame
//! or a timeout and keeps the returned handle; the host later reports the
//! wakeup back with the same handle. A handle that no longer matches the
//! pending one is stale and gets ignored.

use std::time::{Duration, Instant};

/// Handle of a requested animation frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(u64);

/// Handle of a scheduled timeout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

/// A due wakeup reported back to the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wakeup {
    Frame(FrameHandle),
    Timer(TimerHandle),
}

/// Cooperative scheduling primitives used by the motion controller
pub trait Scheduler {
    /// Current time on this scheduler's clock
    fn now(&self) -> Instant;

    /// Request a callback on the next frame
    fn request_frame(&mut self) -> FrameHandle;

    /// Cancel a pending frame request (no-op if already fired)
    fn cancel_frame(&mut self, handle: FrameHandle);

    /// Schedule a timeout `delay` from now
    fn set_timeout(&mut self, delay: Duration) -> TimerHandle;

    /// Cancel a pending timeout (no-op if already fired)
    fn clear_timeout(&mut self, handle: TimerHandle);
}

/// Queue-backed scheduler driven by its owner
///
/// Time only moves when the owner calls [`set_now`](Self::set_now) or
/// [`advance`](Self::advance), so the same type serves the terminal loop
/// (fed with `Instant::now()`) and tests (fed with virtual time).
#[derive(Debug, Clone)]
pub struct QueueScheduler {
    now: Instant,
    next_id: u64,
    frames: Vec<FrameHandle>,
    timers: Vec<(TimerHandle, Instant)>,
}

impl QueueScheduler {
    pub fn new(now: Instant) -> Self {
        Self {
            now,
            next_id: 0,
            frames: Vec::new(),
            timers: Vec::new(),
        }
    }

    /// Move the clock forward to `now` (never backwards)
    pub fn set_now(&mut self, now: Instant) {
        if now > self.now {
            self.now = now;
        }
    }

    /// Move the clock forward by `delta`
    pub fn advance(&mut self, delta: Duration) {
        self.now += delta;
    }

    /// Take every wakeup that is due at the current time
    ///
    /// All frame requests made before this call fire; frames requested while
    /// handling them wait for the next drain. Timers fire in deadline order.
    pub fn drain_due(&mut self) -> Vec<Wakeup> {
        let mut due: Vec<Wakeup> = self.frames.drain(..).map(Wakeup::Frame).collect();

        let now = self.now;
        let mut expired: Vec<(TimerHandle, Instant)> = Vec::new();
        self.timers.retain(|&(handle, deadline)| {
            if deadline <= now {
                expired.push((handle, deadline));
                false
            } else {
                true
            }
        });
        expired.sort_by_key(|&(_, deadline)| deadline);
        due.extend(expired.into_iter().map(|(handle, _)| Wakeup::Timer(handle)));

        due
    }

    /// Number of outstanding frame requests
    #[inline]
    pub fn pending_frames(&self) -> usize {
        self.frames.len()
    }

    /// Number of outstanding timeouts
    #[inline]
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Whether any work is scheduled
    #[inline]
    pub fn is_idle(&self) -> bool {
        self.frames.is_empty() && self.timers.is_empty()
    }

    /// Earliest timer deadline, if any
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.iter().map(|&(_, deadline)| deadline).min()
    }

    fn next_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }
}

impl Scheduler for QueueScheduler {
    #[inline]
    fn now(&self) -> Instant {
        self.now
    }

    fn request_frame(&mut self) -> FrameHandle {
        let handle = FrameHandle(self.next_id());
        self.frames.push(handle);
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        self.frames.retain(|&h| h != handle);
    }

    fn set_timeout(&mut self, delay: Duration) -> TimerHandle {
        let handle = TimerHandle(self.next_id());
        self.timers.push((handle, self.now + delay));
        handle
    }

    fn clear_timeout(&mut self, handle: TimerHandle) {
        self.timers.retain(|&(h, _)| h != handle);
    }
}
