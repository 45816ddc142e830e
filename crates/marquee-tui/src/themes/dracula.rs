//! Dracula theme
//! https://draculatheme.com/

use ratatui::style::Color;
use crate::theme::Theme;

pub fn default() -> Theme {
    Theme {
        bg: Color::Rgb(0x28, 0x2a, 0x36),        // Background
        band_bg: Color::Rgb(0x21, 0x22, 0x2c),   // Current Line (darker)
        item: Color::Rgb(0xf8, 0xf8, 0xf2),      // Foreground
        source: Color::Rgb(0xff, 0x79, 0xc6),    // Pink
        timestamp: Color::Rgb(0x62, 0x72, 0xa4), // Comment
        separator: Color::Rgb(0xbd, 0x93, 0xf9), // Purple
        border: Color::Rgb(0x44, 0x47, 0x5a),    // Selection
        hover: Color::Rgb(0x8b, 0xe9, 0xfd),     // Cyan
        drag: Color::Rgb(0x50, 0xfa, 0x7b),      // Green
        status_bg: Color::Rgb(0x44, 0x47, 0x5a),
        status_fg: Color::Rgb(0xf8, 0xf8, 0xf2),
        muted: Color::Rgb(0x7a, 0x7c, 0x8d),
    }
}
