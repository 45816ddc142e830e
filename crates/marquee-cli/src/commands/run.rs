use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::{
    event::{DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;
use tracing::{debug, info};

use marquee_core::{
    content::{default_items, load_items},
    AppConfig,
};
use marquee_tui::{
    event::{AppEvent, EventHandler, ReloadResult},
    input::handle_key_event,
    reload::{spawn_reloader, ReloadWatcher},
    widgets::{BackgroundWidget, StatusBarWidget, TickerWidget},
    App, AppLayout,
};

type Tui = Terminal<CrosstermBackend<io::Stdout>>;

pub async fn run(config: Arc<AppConfig>) -> Result<()> {
    let motion = config.ticker.motion_config()?;
    let items_path = config.ticker.items_path();
    let items = match &items_path {
        Some(path) => load_items(path)
            .with_context(|| format!("failed to load items from {}", path.display()))?,
        None => default_items(),
    };
    info!(count = items.len(), path = ?items_path, "starting ticker");

    let mut app = App::new(
        config.clone(),
        motion,
        config.ui.theme.clone(),
        items,
        items_path.clone(),
    );

    // Create channel for background reload results
    let (reload_tx, mut reload_rx) = mpsc::unbounded_channel::<ReloadResult>();
    let reloader = match items_path {
        Some(path) if config.ticker.reload_interval_secs > 0 => {
            let watcher = ReloadWatcher::new(path).await;
            Some(spawn_reloader(
                watcher,
                Duration::from_secs(config.ticker.reload_interval_secs),
                reload_tx,
            ))
        }
        _ => None,
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableFocusChange,
        SetTitle("marquee")
    )?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_loop(&mut terminal, &mut app, &mut reload_rx);

    app.shutdown();
    if let Some(handle) = reloader {
        handle.abort();
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableFocusChange
    )?;
    terminal.show_cursor()?;

    result
}

fn run_loop(
    terminal: &mut Tui,
    app: &mut App,
    reload_rx: &mut mpsc::UnboundedReceiver<ReloadResult>,
) -> Result<()> {
    let event_handler = EventHandler::new(app.config.ui.frame_rate);
    let band_height = app.config.ui.band_height;

    loop {
        // Process any completed reloads (non-blocking)
        while let Ok(result) = reload_rx.try_recv() {
            app.handle_reload(result);
        }

        // Run due frames and idle timers against the wall clock
        app.tick(Instant::now());

        // Draw UI
        terminal.draw(|frame| {
            let area = frame.area();
            let layout = AppLayout::split(area, band_height);
            app.set_band_area(layout.band);

            BackgroundWidget::render(frame, area, app);
            TickerWidget::render(frame, layout.band, app);
            StatusBarWidget::render(frame, layout.status, app);
        })?;

        if let Some(event) = event_handler.next()? {
            match event {
                AppEvent::Key(key) => {
                    let action = handle_key_event(key);
                    app.handle_action(action);
                }
                AppEvent::Mouse(mouse) => app.handle_mouse(mouse),
                AppEvent::FocusLost => app.handle_focus_lost(),
                AppEvent::Resize(width, height) => {
                    // Band is re-measured on the next draw
                    debug!(width, height, "terminal resized");
                }
                AppEvent::Tick => {}
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
