use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use crossterm::event::MouseEvent;
use marquee_core::config::ThemeConfig;
use marquee_core::motion::{InteractionPhase, MotionConfig, QueueScheduler};
use marquee_core::{AppConfig, TickerItem, TickerMotionController};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use tracing::{debug, info, warn};

use crate::content::{ContentOptions, TrackContent};
use crate::event::ReloadResult;
use crate::input::Action;
use crate::pointer::PointerTracker;
use crate::theme::Theme;
use crate::themes::{cycle_theme, load_theme};

/// Period multiplier for one speed step
const SPEED_STEP: f64 = 0.8;

/// Screen regions of the ticker app
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppLayout {
    pub band: Rect,
    pub status: Rect,
}

impl AppLayout {
    /// Band centered vertically, status bar on the last row
    pub fn split(area: Rect, band_height: u16) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(area);

        let body = rows[0];
        let height = band_height.max(1).min(body.height);
        let y = body.y + body.height.saturating_sub(height) / 2;

        Self {
            band: Rect::new(body.x, y, body.width, height),
            status: rows[1],
        }
    }
}

/// Application state
pub struct App {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Motion controller for the band
    pub ticker: TickerMotionController<QueueScheduler>,
    /// Items currently shown
    pub items: Vec<TickerItem>,
    /// Laid-out track for `items`
    pub content: TrackContent,
    pub theme: Theme,
    pub theme_name: String,
    theme_config: ThemeConfig,
    options: ContentOptions,
    /// Items file to re-read on reload
    pub items_path: Option<PathBuf>,
    /// Band rect from the last layout pass
    pub band_area: Rect,
    pointer: PointerTracker,
    /// Idle timeout to restore when idle resume is re-enabled
    idle_timeout_secs: f64,
    /// Status message
    pub status_message: Option<String>,
    /// Whether the app should quit
    pub should_quit: bool,
}

impl App {
    pub fn new(
        config: Arc<AppConfig>,
        motion: MotionConfig,
        theme_config: ThemeConfig,
        items: Vec<TickerItem>,
        items_path: Option<PathBuf>,
    ) -> Self {
        let theme = load_theme(&theme_config);
        let options = ContentOptions::from_config(&config);
        let idle_timeout_secs = motion
            .idle_timeout()
            .map(|d| d.as_secs_f64())
            .unwrap_or(config.ticker.idle_timeout_secs);
        let autoplay = config.ticker.autoplay;

        let mut app = Self {
            ticker: TickerMotionController::new(motion, QueueScheduler::new(Instant::now())),
            items: Vec::new(),
            content: TrackContent::default(),
            theme,
            theme_name: theme_config.name.clone(),
            theme_config,
            options,
            items_path,
            band_area: Rect::default(),
            pointer: PointerTracker::default(),
            idle_timeout_secs,
            status_message: None,
            should_quit: false,
            config,
        };

        app.set_items(items);
        if autoplay {
            // Deferred until the first layout pass measures the band
            app.ticker.start();
        }
        app
    }

    /// Width available to the tracks inside the band border
    pub fn viewport_width(&self) -> u16 {
        self.band_area.width.saturating_sub(2)
    }

    /// Replace the items and hand the new track length to the controller
    pub fn set_items(&mut self, items: Vec<TickerItem>) {
        self.items = items;
        self.rebuild_content();
        self.ticker.set_content(self.content.width() as f64);
    }

    /// Record the band rect from the latest layout; re-measures on width change
    pub fn set_band_area(&mut self, area: Rect) {
        if area == self.band_area {
            return;
        }
        let width_changed = area.width != self.band_area.width;
        self.band_area = area;

        if width_changed {
            self.rebuild_content();
            self.ticker.resize(self.content.width() as f64);
        }
        if area.width == 0 || area.height == 0 {
            if let Some(leave) = self.pointer.release() {
                self.ticker.handle_pointer(leave);
            }
        }
    }

    fn rebuild_content(&mut self) {
        self.content = TrackContent::build(
            &self.items,
            &self.theme,
            &self.options,
            self.viewport_width(),
        );
    }

    /// Advance the controller clock and run due frames and timers
    pub fn tick(&mut self, now: Instant) {
        self.ticker.scheduler_mut().set_now(now);
        self.ticker.pump();
    }

    /// Route a mouse event through hit testing into the controller
    pub fn handle_mouse(&mut self, event: MouseEvent) {
        for pointer_event in self.pointer.translate(&event, self.band_area) {
            let response = self.ticker.handle_pointer(pointer_event);
            debug!(?pointer_event, ?response, "pointer event");
        }
    }

    /// Terminal lost focus: treat as the pointer leaving the band
    pub fn handle_focus_lost(&mut self) {
        if let Some(leave) = self.pointer.release() {
            self.ticker.handle_pointer(leave);
        }
    }

    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::TogglePlayback => {
                if self.ticker.is_running() {
                    self.ticker.pause();
                    self.set_status("Paused");
                } else {
                    self.ticker.start();
                    if self.ticker.is_running() {
                        self.set_status("Playing");
                    } else {
                        self.set_status("Waiting for content");
                    }
                }
            }
            Action::NextTheme => self.switch_theme(true),
            Action::PrevTheme => self.switch_theme(false),
            Action::Faster => self.scale_period(SPEED_STEP),
            Action::Slower => self.scale_period(1.0 / SPEED_STEP),
            Action::Reload => self.reload_items(),
            Action::ToggleIdle => {
                if self.ticker.config().idle_timeout().is_some() {
                    self.ticker.set_idle_timeout(0.0);
                    self.set_status("Idle resume off");
                } else {
                    self.ticker.set_idle_timeout(self.idle_timeout_secs);
                    self.set_status(format!("Idle resume after {:.1}s", self.idle_timeout_secs));
                }
            }
            Action::None => {}
        }
    }

    fn switch_theme(&mut self, forward: bool) {
        let name = cycle_theme(&self.theme_name, forward);
        self.theme_config.name = name.to_string();
        self.theme = load_theme(&self.theme_config);
        self.theme_name = name.to_string();
        self.rebuild_content();
        self.ticker.set_content(self.content.width() as f64);
        self.set_status(format!("Theme: {}", name));
    }

    fn scale_period(&mut self, factor: f64) {
        let period = self.ticker.config().scroll_period_secs() * factor;
        match self.ticker.set_scroll_config(period) {
            Ok(()) => self.set_status(format!("Lap time {:.1}s", period)),
            Err(e) => self.set_status(e.to_string()),
        }
    }

    /// Re-read the items file synchronously
    pub fn reload_items(&mut self) {
        let Some(path) = self.items_path.clone() else {
            self.set_status("No items file configured");
            return;
        };
        match marquee_core::content::load_items(&path) {
            Ok(items) => self.apply_reloaded(items),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "reload failed");
                self.set_status(format!("Reload failed: {}", e));
            }
        }
    }

    /// Take a message from the background reloader
    pub fn handle_reload(&mut self, result: ReloadResult) {
        match result {
            ReloadResult::Loaded { path, items } => {
                debug!(path = %path.display(), "items file changed");
                self.apply_reloaded(items);
            }
            ReloadResult::Failure { path, error } => {
                warn!(path = %path.display(), %error, "background reload failed");
                self.set_status(format!("Reload failed: {}", error));
            }
        }
    }

    /// Install freshly read items, keeping the scroll position
    pub fn apply_reloaded(&mut self, items: Vec<TickerItem>) {
        let count = items.len();
        self.set_items(items);
        info!(count, "ticker items reloaded");
        self.set_status(format!("Loaded {} items", count));
    }

    pub fn phase(&self) -> InteractionPhase {
        self.ticker.phase()
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Stop all scheduled motion work
    pub fn shutdown(&mut self) {
        self.ticker.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyModifiers, MouseButton, MouseEventKind};
    use std::time::Duration;

    fn app(items: Vec<TickerItem>) -> App {
        let config = Arc::new(AppConfig::default());
        let motion = MotionConfig::new(10.0, 2.0).unwrap();
        App::new(config, motion, ThemeConfig::default(), items, None)
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_layout_centers_band() {
        let layout = AppLayout::split(Rect::new(0, 0, 80, 24), 3);
        assert_eq!(layout.status, Rect::new(0, 23, 80, 1));
        assert_eq!(layout.band, Rect::new(0, 10, 80, 3));
    }

    #[test]
    fn test_starts_once_band_is_measured() {
        let mut app = app(vec![TickerItem::new("hello")]);
        // Track is unpadded until the band is known, but already non-empty
        assert!(app.ticker.is_running());

        app.set_band_area(Rect::new(0, 10, 80, 3));
        assert_eq!(app.content.width(), 78);
        assert_eq!(app.ticker.state().track_length, 78.0);
        assert!(app.ticker.is_running());
    }

    #[test]
    fn test_empty_items_defer_start() {
        let mut app = app(Vec::new());
        app.set_band_area(Rect::new(0, 10, 80, 3));
        assert!(!app.ticker.is_running());

        app.set_items(vec![TickerItem::new("late news")]);
        assert!(app.ticker.is_running());
    }

    #[test]
    fn test_mouse_drag_moves_ticker() {
        let mut app = app(vec![TickerItem::new("x".repeat(200))]);
        app.set_band_area(Rect::new(0, 10, 80, 3));

        app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 40, 11));
        assert_eq!(app.phase(), InteractionPhase::Dragging);
        app.handle_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), 30, 11));
        assert_eq!(app.ticker.state().scroll_offset, 10.0);

        app.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 30, 11));
        assert_eq!(app.phase(), InteractionPhase::Hovering);

        app.handle_mouse(mouse(MouseEventKind::Moved, 30, 2));
        assert_eq!(app.phase(), InteractionPhase::Auto);
    }

    #[test]
    fn test_focus_lost_releases_hover() {
        let mut app = app(vec![TickerItem::new("hello")]);
        app.set_band_area(Rect::new(0, 10, 80, 3));
        app.handle_mouse(mouse(MouseEventKind::Moved, 5, 11));
        assert_eq!(app.phase(), InteractionPhase::Hovering);

        app.handle_focus_lost();
        assert_eq!(app.phase(), InteractionPhase::Auto);
    }

    #[test]
    fn test_toggle_playback() {
        let mut app = app(vec![TickerItem::new("hello")]);
        app.set_band_area(Rect::new(0, 10, 80, 3));
        app.handle_action(Action::TogglePlayback);
        assert!(!app.ticker.is_running());
        app.handle_action(Action::TogglePlayback);
        assert!(app.ticker.is_running());
    }

    #[test]
    fn test_speed_steps() {
        let mut app = app(vec![TickerItem::new("hello")]);
        app.handle_action(Action::Faster);
        assert!((app.ticker.config().scroll_period_secs() - 8.0).abs() < 1e-9);
        app.handle_action(Action::Slower);
        assert!((app.ticker.config().scroll_period_secs() - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_theme_cycle_keeps_offset() {
        let mut app = app(vec![TickerItem::new("x".repeat(200))]);
        app.set_band_area(Rect::new(0, 10, 80, 3));
        let start = Instant::now();
        app.tick(start + Duration::from_secs(1));
        app.tick(start + Duration::from_secs(2));
        let offset = app.ticker.state().scroll_offset;
        assert!(offset > 0.0);

        app.handle_action(Action::NextTheme);
        assert_eq!(app.theme_name, "gruvbox-light");
        assert_eq!(app.ticker.state().scroll_offset, offset);
    }

    #[test]
    fn test_toggle_idle() {
        let mut app = app(vec![TickerItem::new("hello")]);
        app.handle_action(Action::ToggleIdle);
        assert!(app.ticker.config().idle_timeout().is_none());
        app.handle_action(Action::ToggleIdle);
        assert_eq!(app.ticker.config().idle_timeout(), Some(Duration::from_secs(2)));
    }

    #[test]
    fn test_reload_without_path() {
        let mut app = app(vec![TickerItem::new("hello")]);
        app.handle_action(Action::Reload);
        assert_eq!(app.status_message.as_deref(), Some("No items file configured"));
    }

    #[test]
    fn test_reload_keeps_offset_and_reports_failures() {
        let mut app = app(vec![TickerItem::new("x".repeat(200))]);
        app.set_band_area(Rect::new(0, 10, 80, 3));
        app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 40, 11));
        app.handle_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), 10, 11));
        app.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 10, 11));
        assert_eq!(app.ticker.state().scroll_offset, 30.0);

        app.handle_reload(ReloadResult::Loaded {
            path: PathBuf::from("news.toml"),
            items: vec![TickerItem::new("y".repeat(300))],
        });
        assert_eq!(app.items.len(), 1);
        assert_eq!(app.ticker.state().scroll_offset, 30.0);
        assert_eq!(app.status_message.as_deref(), Some("Loaded 1 items"));

        app.handle_reload(ReloadResult::Failure {
            path: PathBuf::from("news.toml"),
            error: "bad toml".to_string(),
        });
        assert_eq!(app.items.len(), 1);
        assert_eq!(app.status_message.as_deref(), Some("Reload failed: bad toml"));
    }

    #[test]
    fn test_shutdown_clears_schedule() {
        let mut app = app(vec![TickerItem::new("hello")]);
        app.set_band_area(Rect::new(0, 10, 80, 3));
        app.shutdown();
        assert!(app.ticker.scheduler().is_idle());
    }
}
