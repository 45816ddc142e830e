use marquee_core::motion::InteractionPhase;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::App;

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;

        let mode_str = match app.phase() {
            InteractionPhase::Auto => "AUTO",
            InteractionPhase::Hovering => "HOVER",
            InteractionPhase::Dragging => "DRAG",
            InteractionPhase::IdlePending => "IDLE",
            InteractionPhase::Paused => "PAUSED",
            InteractionPhase::TornDown => "DONE",
        };

        let state = app.ticker.state();
        let idle = match app.ticker.config().idle_timeout() {
            Some(d) => format!("{:.1}s", d.as_secs_f64()),
            None => "off".to_string(),
        };

        let status_text = if let Some(msg) = &app.status_message {
            format!(" {} | {}", mode_str, msg)
        } else {
            format!(
                " {} | {:.0}/{:.0} | lap {:.1}s | idle {} | {} | {} items",
                mode_str,
                state.scroll_offset,
                state.track_length,
                app.ticker.config().scroll_period_secs(),
                idle,
                app.theme_name,
                app.items.len(),
            )
        };

        let help_hint = " q:quit space:play t:theme +/-:speed i:idle r:reload ";
        let padding_len = padding_between(area.width, &status_text, help_hint);

        let line = Line::from(vec![
            Span::styled(
                status_text,
                Style::default().fg(theme.status_fg).bg(theme.status_bg),
            ),
            Span::styled(" ".repeat(padding_len), Style::default().bg(theme.status_bg)),
            Span::styled(
                help_hint,
                Style::default().fg(theme.muted).bg(theme.status_bg),
            ),
        ]);

        let paragraph = Paragraph::new(line);
        frame.render_widget(paragraph, area);
    }
}

/// Blank cells needed to push `right` against the right edge
fn padding_between(width: u16, left: &str, right: &str) -> usize {
    (width as usize).saturating_sub(left.width() + right.width())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_padding_counts_cells_not_chars() {
        assert_eq!(padding_between(20, " AUTO", " q "), 12);
        // Each CJK glyph takes two cells
        assert_eq!(padding_between(20, " 読込失敗", " q "), 8);
        assert_eq!(padding_between(4, " AUTO", " q "), 0);
    }
}
