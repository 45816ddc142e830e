use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind, MouseEvent};
use marquee_core::TickerItem;

/// Event handler for terminal events
pub struct EventHandler {
    frame_interval: Duration,
}

/// Result of a background items file reload
#[derive(Debug)]
pub enum ReloadResult {
    /// Items file changed and parsed
    Loaded {
        path: PathBuf,
        items: Vec<TickerItem>,
    },
    /// Items file could not be read or parsed
    Failure {
        path: PathBuf,
        error: String,
    },
}

impl EventHandler {
    /// Poll at the render loop frequency
    pub fn new(frame_rate: u32) -> Self {
        let frame_interval = if frame_rate == 0 {
            Duration::from_millis(16) // ~60fps fallback
        } else {
            Duration::from_millis((1000 / frame_rate as u64).max(1))
        };
        Self { frame_interval }
    }

    #[inline]
    pub fn frame_interval(&self) -> Duration {
        self.frame_interval
    }

    /// Poll for the next event, yielding `Tick` when a frame interval passes quietly
    pub fn next(&self) -> Result<Option<AppEvent>> {
        if event::poll(self.frame_interval)? {
            match event::read()? {
                Event::Key(key) => {
                    // Only handle key press events, ignore release events
                    if key.kind == KeyEventKind::Press {
                        Ok(Some(AppEvent::Key(key)))
                    } else {
                        Ok(None)
                    }
                }
                Event::Mouse(mouse) => Ok(Some(AppEvent::Mouse(mouse))),
                Event::Resize(w, h) => Ok(Some(AppEvent::Resize(w, h))),
                Event::FocusLost => Ok(Some(AppEvent::FocusLost)),
                _ => Ok(None),
            }
        } else {
            Ok(Some(AppEvent::Tick))
        }
    }
}

/// Application events
#[derive(Debug)]
pub enum AppEvent {
    /// A key was pressed
    Key(KeyEvent),
    /// Mouse moved, pressed, dragged or released
    Mouse(MouseEvent),
    /// Terminal was resized
    Resize(u16, u16),
    /// Terminal window lost focus
    FocusLost,
    /// No input during one frame interval
    Tick,
}
