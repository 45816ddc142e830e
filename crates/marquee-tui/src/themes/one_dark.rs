//! One Dark theme (Atom)

use ratatui::style::Color;
use crate::theme::Theme;

pub fn default() -> Theme {
    Theme {
        bg: Color::Rgb(0x28, 0x2c, 0x34),
        band_bg: Color::Rgb(0x21, 0x25, 0x2b),
        item: Color::Rgb(0xab, 0xb2, 0xbf),
        source: Color::Rgb(0xe5, 0xc0, 0x7b),    // yellow
        timestamp: Color::Rgb(0x7f, 0x84, 0x8e),
        separator: Color::Rgb(0xc6, 0x78, 0xdd), // purple
        border: Color::Rgb(0x3e, 0x44, 0x51),
        hover: Color::Rgb(0x61, 0xaf, 0xef),     // blue
        drag: Color::Rgb(0x98, 0xc3, 0x79),      // green
        status_bg: Color::Rgb(0x3e, 0x44, 0x51),
        status_fg: Color::Rgb(0x9d, 0xa5, 0xb4),
        muted: Color::Rgb(0x5c, 0x63, 0x70),     // comment
    }
}
