use marquee_core::motion::InteractionPhase;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, Borders},
    Frame,
};

use crate::app::App;

pub struct TickerWidget;

impl TickerWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let phase = app.phase();

        let border_color = match phase {
            InteractionPhase::Hovering => theme.hover,
            InteractionPhase::Dragging => theme.drag,
            _ => theme.border,
        };

        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .style(Style::default().bg(theme.band_bg));
        if let Some(label) = phase_label(phase) {
            block = block
                .title(Span::styled(
                    format!(" {} ", label),
                    Style::default()
                        .fg(border_color)
                        .add_modifier(Modifier::BOLD),
                ))
                .title_alignment(Alignment::Right);
        }

        let inner = block.inner(area);
        frame.render_widget(block, area);

        if inner.width == 0 || inner.height == 0 || app.content.is_empty() {
            return;
        }

        // Single text row, vertically centered
        let row = Rect::new(inner.x, inner.y + inner.height / 2, inner.width, 1);
        let buf = frame.buffer_mut();
        for track in app.ticker.tracks().iter() {
            app.content
                .render_row(buf, row, track.position().floor() as i64);
        }
    }
}

fn phase_label(phase: InteractionPhase) -> Option<&'static str> {
    match phase {
        InteractionPhase::Auto => None,
        InteractionPhase::Hovering => Some("paused"),
        InteractionPhase::Dragging => Some("drag"),
        InteractionPhase::IdlePending => Some("resuming…"),
        InteractionPhase::Paused => Some("stopped"),
        InteractionPhase::TornDown => None,
    }
}
