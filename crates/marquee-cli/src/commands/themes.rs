use anyhow::Result;

use marquee_core::AppConfig;
use marquee_tui::themes::{available_themes, builtin_theme};

pub fn run(config: &AppConfig) -> Result<()> {
    let current = config.ui.theme.name.to_lowercase();
    if builtin_theme(&current).is_none() {
        println!("Configured theme '{}' is unknown, gruvbox-dark is used instead.\n", current);
    }

    println!("Themes:\n");
    for name in available_themes() {
        let marker = if name == current { "*" } else { " " };
        println!("  {} {}", marker, name);
    }

    Ok(())
}
