//! Seamless-loop motion for the ticker band
//!
//! A single [`TickerMotionController`] owns all motion state for one ticker and
//! arbitrates between three drivers of the scroll offset:
//!
//! - `driver` - per-frame autoplay advancing the offset from elapsed time
//! - `interaction` - pointer/touch drag and hover pause
//! - `idle` - debounced timer handing control back to autoplay
//!
//! The offset is projected onto two mirrored tracks by `tracks`. Frame and
//! timer wakeups come from a [`Scheduler`]; the controller only ever holds the
//! handles, so cancelling work is a matter of dropping or cancelling a handle.
//!
//! # Usage
//!
//! ```ignore
//! use marquee_core::motion::{MotionConfig, QueueScheduler, TickerMotionController};
//!
//! let config = MotionConfig::new(30.0, 3.0)?;
//! let mut ticker = TickerMotionController::new(config, QueueScheduler::new(Instant::now()));
//! ticker.set_content(track_width);
//! ticker.start();
//!
//! // In the main loop
//! ticker.scheduler_mut().set_now(Instant::now());
//! ticker.pump();
//! let offset = ticker.tracks().primary().translation();
//! ```

pub mod config;
pub mod controller;
pub mod driver;
pub mod idle;
pub mod interaction;
pub mod scheduler;
pub mod tracks;

pub use config::MotionConfig;
pub use controller::{MotionState, TickerMotionController};
pub use interaction::{DragOrigin, EventResponse, InteractionPhase, PointerEvent, PointerKind, PointerSource};
pub use scheduler::{FrameHandle, QueueScheduler, Scheduler, TimerHandle, Wakeup};
pub use tracks::{DualTrack, Track};
