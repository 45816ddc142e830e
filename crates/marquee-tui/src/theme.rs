use ratatui::style::Color;

/// Ticker palette
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Screen background around the band
    pub bg: Color,
    /// Ticker band background
    pub band_bg: Color,

    // Track content
    pub item: Color,
    pub source: Color,
    pub timestamp: Color,
    pub separator: Color,

    // Band border per interaction phase
    pub border: Color,
    pub hover: Color,
    pub drag: Color,

    // Status bar
    pub status_bg: Color,
    pub status_fg: Color,
    pub muted: Color,
}

impl Default for Theme {
    fn default() -> Self {
        crate::themes::gruvbox_dark()
    }
}
