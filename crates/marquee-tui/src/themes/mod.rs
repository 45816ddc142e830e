//! Theme registry and loader
//!
//! Built-in ticker palettes with user color overrides.

mod dracula;
mod gruvbox;
mod monokai;
mod nord;
mod one_dark;

use marquee_core::config::{ThemeColorOverrides, ThemeConfig};
use ratatui::style::Color;

use crate::theme::Theme;

/// Default palette, also the fallback for unknown names
pub fn gruvbox_dark() -> Theme {
    gruvbox::dark()
}

/// Parse a hex color string into a ratatui Color
/// Accepts formats: "#RRGGBB", "RRGGBB", "#RGB", "RGB"
pub fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.trim().trim_start_matches('#');
    if !hex.is_ascii() {
        return None;
    }

    match hex.len() {
        // Short form: RGB -> RRGGBB
        3 => {
            let r = u8::from_str_radix(&hex[0..1], 16).ok()? * 17;
            let g = u8::from_str_radix(&hex[1..2], 16).ok()? * 17;
            let b = u8::from_str_radix(&hex[2..3], 16).ok()? * 17;
            Some(Color::Rgb(r, g, b))
        }
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some(Color::Rgb(r, g, b))
        }
        _ => None,
    }
}

/// Look up a built-in theme by name (case-insensitive, with aliases)
pub fn builtin_theme(name: &str) -> Option<Theme> {
    let theme = match name.to_lowercase().as_str() {
        "gruvbox-dark" | "gruvbox" => gruvbox::dark(),
        "gruvbox-light" => gruvbox::light(),
        "nord" => nord::default(),
        "dracula" => dracula::default(),
        "monokai" => monokai::default(),
        "one-dark" | "onedark" => one_dark::default(),
        _ => return None,
    };
    Some(theme)
}

/// Load a theme by name from config
pub fn load_theme(config: &ThemeConfig) -> Theme {
    let base = builtin_theme(&config.name).unwrap_or_else(|| {
        tracing::warn!(name = %config.name, "unknown theme, falling back to gruvbox-dark");
        gruvbox::dark()
    });

    apply_overrides(base, &config.colors)
}

/// Apply user color overrides to a base theme
fn apply_overrides(mut theme: Theme, overrides: &ThemeColorOverrides) -> Theme {
    let slots: [(&Option<String>, &mut Color); 10] = [
        (&overrides.band_bg, &mut theme.band_bg),
        (&overrides.item, &mut theme.item),
        (&overrides.source, &mut theme.source),
        (&overrides.timestamp, &mut theme.timestamp),
        (&overrides.separator, &mut theme.separator),
        (&overrides.hover, &mut theme.hover),
        (&overrides.drag, &mut theme.drag),
        (&overrides.border, &mut theme.border),
        (&overrides.status_bg, &mut theme.status_bg),
        (&overrides.status_fg, &mut theme.status_fg),
    ];

    for (hex, slot) in slots {
        if let Some(color) = hex.as_deref().and_then(parse_hex_color) {
            *slot = color;
        }
    }

    theme
}

/// Get list of available theme names
pub fn available_themes() -> Vec<&'static str> {
    vec![
        "gruvbox-dark",
        "gruvbox-light",
        "nord",
        "dracula",
        "monokai",
        "one-dark",
    ]
}

/// Name following `current` in [`available_themes`], wrapping around
///
/// Unknown names start the cycle from the first theme.
pub fn cycle_theme(current: &str, forward: bool) -> &'static str {
    let themes = available_themes();
    let len = themes.len();
    let current = current.to_lowercase();
    let index = themes.iter().position(|name| *name == current);

    let next = match (index, forward) {
        (None, _) => 0,
        (Some(i), true) => (i + 1) % len,
        (Some(i), false) => (i + len - 1) % len,
    };
    themes[next]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color_6digit() {
        let color = parse_hex_color("#ff5500").unwrap();
        assert!(matches!(color, Color::Rgb(255, 85, 0)));
    }

    #[test]
    fn test_parse_hex_color_3digit() {
        let color = parse_hex_color("#f50").unwrap();
        assert!(matches!(color, Color::Rgb(255, 85, 0)));
    }

    #[test]
    fn test_parse_hex_color_invalid() {
        assert!(parse_hex_color("invalid").is_none());
        assert!(parse_hex_color("#gg0000").is_none());
        assert!(parse_hex_color("#ééé").is_none());
    }

    #[test]
    fn test_load_theme_default() {
        let theme = load_theme(&ThemeConfig::default());
        assert!(matches!(theme.bg, Color::Rgb(0x28, 0x28, 0x28)));
    }

    #[test]
    fn test_unknown_theme_falls_back() {
        let theme = load_theme(&ThemeConfig::named("no-such-theme"));
        assert_eq!(theme, gruvbox::dark());
    }

    #[test]
    fn test_load_theme_with_override() {
        let config = ThemeConfig {
            name: "nord".to_string(),
            colors: ThemeColorOverrides {
                item: Some("#ff0000".to_string()),
                drag: Some("bogus".to_string()),
                ..Default::default()
            },
        };
        let theme = load_theme(&config);
        assert!(matches!(theme.item, Color::Rgb(255, 0, 0)));
        assert_eq!(theme.drag, nord::default().drag);
    }

    #[test]
    fn test_every_listed_theme_resolves() {
        for name in available_themes() {
            assert!(builtin_theme(name).is_some(), "{} missing", name);
        }
    }

    #[test]
    fn test_cycle_theme_wraps() {
        assert_eq!(cycle_theme("gruvbox-dark", true), "gruvbox-light");
        assert_eq!(cycle_theme("one-dark", true), "gruvbox-dark");
        assert_eq!(cycle_theme("gruvbox-dark", false), "one-dark");
        assert_eq!(cycle_theme("unknown", true), "gruvbox-dark");
    }
}
