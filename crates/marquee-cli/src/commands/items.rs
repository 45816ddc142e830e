use anyhow::{Context, Result};

use marquee_core::content::{default_items, load_items};
use marquee_core::AppConfig;

pub fn run(config: &AppConfig) -> Result<()> {
    let items = match config.ticker.items_path() {
        Some(path) => load_items(&path)
            .with_context(|| format!("failed to load items from {}", path.display()))?,
        None => {
            println!("No items file configured, showing built-in items.");
            println!("\nTo use your own, set ticker.items_path or run:");
            println!("  marquee items --items <file.toml|file.json>\n");
            default_items()
        }
    };

    if items.is_empty() {
        println!("No items.");
        return Ok(());
    }

    println!("Items ({}):\n", items.len());

    for item in &items {
        let source = item
            .source
            .as_deref()
            .map(|s| format!("[{}] ", s))
            .unwrap_or_default();
        let time = item
            .time_label()
            .map(|t| format!(" ({})", t))
            .unwrap_or_default();

        println!("  {}{}{}", source, item.display_title(), time);
        if let Some(url) = &item.url {
            println!("    URL: {}", url);
        }
    }

    Ok(())
}
