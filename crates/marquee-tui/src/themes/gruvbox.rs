//! Gruvbox Material themes
//! https://github.com/sainnhe/gruvbox-material

use ratatui::style::Color;
use crate::theme::Theme;

/// Gruvbox dark (medium contrast)
pub fn dark() -> Theme {
    Theme {
        bg: Color::Rgb(0x28, 0x28, 0x28),
        band_bg: Color::Rgb(0x32, 0x30, 0x2f),
        item: Color::Rgb(0xd4, 0xbe, 0x98),
        source: Color::Rgb(0xd8, 0xa6, 0x57),   // yellow
        timestamp: Color::Rgb(0x92, 0x83, 0x74), // grey1
        separator: Color::Rgb(0xe7, 0x8a, 0x4e), // orange
        border: Color::Rgb(0x50, 0x49, 0x45),
        hover: Color::Rgb(0x7d, 0xae, 0xa3),     // blue
        drag: Color::Rgb(0xa9, 0xb6, 0x65),      // green
        status_bg: Color::Rgb(0x45, 0x40, 0x3d),
        status_fg: Color::Rgb(0xdd, 0xc7, 0xa1),
        muted: Color::Rgb(0xa8, 0x99, 0x84),
    }
}

/// Gruvbox light (medium contrast)
pub fn light() -> Theme {
    Theme {
        bg: Color::Rgb(0xfb, 0xf1, 0xc7),
        band_bg: Color::Rgb(0xf4, 0xe8, 0xbe),
        item: Color::Rgb(0x65, 0x47, 0x35),
        source: Color::Rgb(0xb4, 0x71, 0x09),
        timestamp: Color::Rgb(0x92, 0x83, 0x74),
        separator: Color::Rgb(0xc3, 0x5e, 0x0a),
        border: Color::Rgb(0xe5, 0xd5, 0xad),
        hover: Color::Rgb(0x45, 0x70, 0x7a),
        drag: Color::Rgb(0x6c, 0x78, 0x2e),
        status_bg: Color::Rgb(0xe5, 0xd5, 0xad),
        status_fg: Color::Rgb(0x4f, 0x38, 0x29),
        muted: Color::Rgb(0x7c, 0x6f, 0x64),
    }
}
