//! Nord theme
//! https://www.nordtheme.com/

use ratatui::style::Color;
use crate::theme::Theme;

/// Nord default theme
pub fn default() -> Theme {
    Theme {
        bg: Color::Rgb(0x2e, 0x34, 0x40),        // nord0
        band_bg: Color::Rgb(0x3b, 0x42, 0x52),   // nord1
        item: Color::Rgb(0xec, 0xef, 0xf4),      // nord6
        source: Color::Rgb(0xeb, 0xcb, 0x8b),    // nord13
        timestamp: Color::Rgb(0xd8, 0xde, 0xe9), // nord4
        separator: Color::Rgb(0x81, 0xa1, 0xc1), // nord9
        border: Color::Rgb(0x4c, 0x56, 0x6a),    // nord3
        hover: Color::Rgb(0x88, 0xc0, 0xd0),     // nord8
        drag: Color::Rgb(0xa3, 0xbe, 0x8c),      // nord14
        status_bg: Color::Rgb(0x43, 0x4c, 0x5e), // nord2
        status_fg: Color::Rgb(0xe5, 0xe9, 0xf0), // nord5
        muted: Color::Rgb(0x5e, 0x68, 0x7a),
    }
}
