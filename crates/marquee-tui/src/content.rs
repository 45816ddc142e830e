//! Track content: styled text for one lap of the ticker
//!
//! A track is the full item sequence laid out once, each item followed by the
//! separator. Its cell width is the track length handed to the motion
//! controller.

use marquee_core::{AppConfig, TickerItem};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::theme::Theme;

/// Layout options for building a track
#[derive(Debug, Clone, PartialEq)]
pub struct ContentOptions {
    pub separator: String,
    pub show_source: bool,
    pub show_timestamps: bool,
    pub pad_to_viewport: bool,
}

impl Default for ContentOptions {
    fn default() -> Self {
        Self {
            separator: "  •  ".to_string(),
            show_source: true,
            show_timestamps: true,
            pad_to_viewport: true,
        }
    }
}

impl ContentOptions {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            separator: config.ticker.separator.clone(),
            show_source: config.ui.show_source,
            show_timestamps: config.ui.show_timestamps,
            pad_to_viewport: config.ticker.pad_to_viewport,
        }
    }
}

/// A run of text sharing one style
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub text: String,
    pub style: Style,
}

/// One lap of styled ticker content
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TrackContent {
    segments: Vec<Segment>,
    width: usize,
}

impl TrackContent {
    /// Lay out `items` as one track
    ///
    /// With `pad_to_viewport`, a non-empty track is padded to at least
    /// `viewport_width` so the mirrored copy always fills the band. Empty
    /// item lists produce a zero-width track.
    pub fn build(
        items: &[TickerItem],
        theme: &Theme,
        options: &ContentOptions,
        viewport_width: u16,
    ) -> Self {
        let mut content = Self::default();
        if items.is_empty() {
            return content;
        }

        let base = Style::default().bg(theme.band_bg);
        for item in items {
            if options.show_source {
                if let Some(source) = item.source.as_deref().filter(|s| !s.trim().is_empty()) {
                    content.push(
                        format!("{} ", source.trim().to_uppercase()),
                        base.fg(theme.source).add_modifier(Modifier::BOLD),
                    );
                }
            }
            if options.show_timestamps {
                if let Some(label) = item.time_label() {
                    content.push(format!("{} ", label), base.fg(theme.timestamp));
                }
            }
            content.push(item.display_title(), base.fg(theme.item));
            content.push(options.separator.clone(), base.fg(theme.separator));
        }

        let viewport = viewport_width as usize;
        if options.pad_to_viewport && content.width < viewport {
            content.push(" ".repeat(viewport - content.width), base);
        }

        content
    }

    fn push(&mut self, text: String, style: Style) {
        if text.is_empty() {
            return;
        }
        self.width += text.width();
        self.segments.push(Segment { text, style });
    }

    /// Cell width of one track
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Draw the track on the first row of `area` with its first cell at
    /// column `area.x + origin`, clipping everything outside `area`
    pub fn render_row(&self, buf: &mut Buffer, area: Rect, origin: i64) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let left = area.left() as i64;
        let right = area.right() as i64;
        let y = area.top();
        let mut x = left + origin;

        for segment in &self.segments {
            // Skip whole segments that end before the visible area
            let seg_width = segment.text.width() as i64;
            if x + seg_width <= left {
                x += seg_width;
                continue;
            }

            for ch in segment.text.chars() {
                if x >= right {
                    return;
                }
                let w = ch.width().unwrap_or(0) as i64;
                if w == 0 {
                    continue;
                }
                if x >= left && x + w <= right {
                    let col = x as u16;
                    if let Some(cell) = buf.cell_mut((col, y)) {
                        cell.set_char(ch).set_style(segment.style);
                    }
                    // Cells covered by a wide glyph
                    for extra in 1..w {
                        if let Some(cell) = buf.cell_mut((col + extra as u16, y)) {
                            cell.reset();
                            cell.set_style(segment.style);
                        }
                    }
                }
                x += w;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_text(buf: &Buffer, area: Rect) -> String {
        (area.left()..area.right())
            .map(|x| buf[(x, area.top())].symbol().to_string())
            .collect()
    }

    fn plain() -> ContentOptions {
        ContentOptions {
            separator: " | ".to_string(),
            show_source: false,
            show_timestamps: false,
            pad_to_viewport: false,
        }
    }

    #[test]
    fn test_empty_items_have_zero_width() {
        let content = TrackContent::build(&[], &Theme::default(), &ContentOptions::default(), 80);
        assert!(content.is_empty());
        assert_eq!(content.width(), 0);
    }

    #[test]
    fn test_width_counts_items_and_separators() {
        let items = vec![TickerItem::new("abc"), TickerItem::new("de")];
        let content = TrackContent::build(&items, &Theme::default(), &plain(), 0);
        assert_eq!(content.width(), "abc | de | ".len());
    }

    #[test]
    fn test_source_label() {
        let items = vec![TickerItem::new("Headline").with_source("wire")];
        let options = ContentOptions {
            show_source: true,
            ..plain()
        };
        let content = TrackContent::build(&items, &Theme::default(), &options, 0);
        assert_eq!(content.segments()[0].text, "WIRE ");
    }

    #[test]
    fn test_padding_to_viewport() {
        let items = vec![TickerItem::new("hi")];
        let options = ContentOptions {
            pad_to_viewport: true,
            ..plain()
        };
        let content = TrackContent::build(&items, &Theme::default(), &options, 40);
        assert_eq!(content.width(), 40);
    }

    #[test]
    fn test_wide_chars_measured_in_cells() {
        let items = vec![TickerItem::new("日本")];
        let content = TrackContent::build(&items, &Theme::default(), &plain(), 0);
        assert_eq!(content.width(), 4 + 3);
    }

    #[test]
    fn test_render_row_clips_and_translates() {
        let items = vec![TickerItem::new("abcdef")];
        let content = TrackContent::build(&items, &Theme::default(), &plain(), 0);
        let area = Rect::new(0, 0, 4, 1);
        let mut buf = Buffer::empty(area);

        content.render_row(&mut buf, area, -2);
        assert_eq!(row_text(&buf, area), "cdef");

        let mut buf = Buffer::empty(area);
        content.render_row(&mut buf, area, 2);
        assert_eq!(row_text(&buf, area), "  ab");
    }

    #[test]
    fn test_primary_and_mirror_join_seamlessly() {
        let items = vec![TickerItem::new("ab")];
        let content = TrackContent::build(&items, &Theme::default(), &plain(), 0);
        let length = content.width() as i64; // "ab | " = 5
        let area = Rect::new(0, 0, 6, 1);
        let mut buf = Buffer::empty(area);

        let offset = 3;
        content.render_row(&mut buf, area, -offset);
        content.render_row(&mut buf, area, length - offset);
        assert_eq!(row_text(&buf, area), "| ab |");
    }
}
