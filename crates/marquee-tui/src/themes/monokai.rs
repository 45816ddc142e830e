//! Monokai theme

use ratatui::style::Color;
use crate::theme::Theme;

pub fn default() -> Theme {
    Theme {
        bg: Color::Rgb(0x27, 0x28, 0x22),        // background
        band_bg: Color::Rgb(0x3e, 0x3d, 0x32),   // selection
        item: Color::Rgb(0xf8, 0xf8, 0xf2),      // foreground
        source: Color::Rgb(0xe6, 0xdb, 0x74),    // yellow
        timestamp: Color::Rgb(0x90, 0x8c, 0x77),
        separator: Color::Rgb(0xf9, 0x26, 0x72), // magenta
        border: Color::Rgb(0x49, 0x48, 0x3e),
        hover: Color::Rgb(0x66, 0xd9, 0xef),     // cyan
        drag: Color::Rgb(0xa6, 0xe2, 0x2e),      // green
        status_bg: Color::Rgb(0x49, 0x48, 0x3e),
        status_fg: Color::Rgb(0xd0, 0xd0, 0xc0),
        muted: Color::Rgb(0x75, 0x71, 0x5e),     // comment
    }
}
