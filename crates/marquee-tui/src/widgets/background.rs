use ratatui::{layout::Rect, style::Style, widgets::Block, Frame};

use crate::app::App;

/// Fills the screen behind the band and status bar with the theme background
pub struct BackgroundWidget;

impl BackgroundWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let block = Block::default().style(Style::default().bg(app.theme.bg));
        frame.render_widget(block, area);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use marquee_core::config::ThemeConfig;
    use marquee_core::motion::MotionConfig;
    use marquee_core::AppConfig;
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;
    use crate::input::Action;

    #[test]
    fn test_background_follows_theme() {
        let mut app = App::new(
            Arc::new(AppConfig::default()),
            MotionConfig::new(10.0, 3.0).unwrap(),
            ThemeConfig::default(),
            Vec::new(),
            None,
        );
        let mut terminal = Terminal::new(TestBackend::new(8, 4)).unwrap();

        terminal
            .draw(|frame| BackgroundWidget::render(frame, frame.area(), &app))
            .unwrap();
        assert_eq!(terminal.backend().buffer()[(3, 2)].bg, app.theme.bg);

        app.handle_action(Action::NextTheme);
        terminal
            .draw(|frame| BackgroundWidget::render(frame, frame.area(), &app))
            .unwrap();
        assert_eq!(terminal.backend().buffer()[(3, 2)].bg, app.theme.bg);
        assert_ne!(app.theme.bg, crate::themes::gruvbox_dark().bg);
    }
}
