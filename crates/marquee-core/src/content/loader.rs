//! Ticker item files
//!
//! Two formats are accepted, picked by file extension:
//!
//! - TOML: `[[items]]` tables
//! - JSON: either a bare array or an object with an `items` array
//!
//! Timestamps are RFC 3339 strings (quoted in TOML).

use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use super::models::TickerItem;
use crate::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemsFormat {
    Toml,
    Json,
}

impl ItemsFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()?.to_lowercase().as_str() {
            "toml" => Some(Self::Toml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    /// Like [`from_path`](Self::from_path), with an error naming the file
    pub fn for_path(path: &Path) -> Result<Self> {
        Self::from_path(path).ok_or_else(|| {
            Error::Content(format!(
                "unsupported items file {} (expected .toml or .json)",
                path.display()
            ))
        })
    }
}

#[derive(Debug, Deserialize)]
struct ItemsDocument {
    #[serde(default)]
    items: Vec<TickerItem>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum JsonItems {
    List(Vec<TickerItem>),
    Document(ItemsDocument),
}

/// Read items from a TOML or JSON file
pub fn load_items(path: &Path) -> Result<Vec<TickerItem>> {
    let format = ItemsFormat::for_path(path)?;
    let content = std::fs::read_to_string(path)?;
    let items = parse_items(&content, format)?;
    debug!(path = %path.display(), count = items.len(), "loaded ticker items");
    Ok(items)
}

/// Parse items from text, dropping entries with a blank title
pub fn parse_items(content: &str, format: ItemsFormat) -> Result<Vec<TickerItem>> {
    let items = match format {
        ItemsFormat::Toml => toml::from_str::<ItemsDocument>(content)?.items,
        ItemsFormat::Json => match serde_json::from_str::<JsonItems>(content)? {
            JsonItems::List(items) => items,
            JsonItems::Document(doc) => doc.items,
        },
    };

    Ok(items
        .into_iter()
        .filter(|item| !item.title.trim().is_empty())
        .collect())
}

/// Items shown when no items file is configured
pub fn default_items() -> Vec<TickerItem> {
    vec![
        TickerItem::new("Drag the ticker to scrub through headlines").with_source("marquee"),
        TickerItem::new("Hover to pause, move away to resume").with_source("marquee"),
        TickerItem::new("Press t to cycle themes, + and - to change speed").with_source("marquee"),
        TickerItem::new("Point items_path at a TOML or JSON file to show your own news")
            .with_source("marquee"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_format_from_path() {
        assert_eq!(ItemsFormat::from_path(&PathBuf::from("news.toml")), Some(ItemsFormat::Toml));
        assert_eq!(ItemsFormat::from_path(&PathBuf::from("NEWS.JSON")), Some(ItemsFormat::Json));
        assert_eq!(ItemsFormat::from_path(&PathBuf::from("news.txt")), None);
        assert_eq!(ItemsFormat::from_path(&PathBuf::from("news")), None);
    }

    #[test]
    fn test_parse_toml() {
        let toml = r#"
[[items]]
title = "Markets open higher"
source = "Wire"
published = "2024-05-01T09:30:00Z"

[[items]]
title = "Rain expected tonight"
"#;
        let items = parse_items(toml, ItemsFormat::Toml).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].source.as_deref(), Some("Wire"));
        assert!(items[0].published.is_some());
        assert!(items[1].source.is_none());
    }

    #[test]
    fn test_parse_json_array_and_document() {
        let array = r#"[{"title": "One"}, {"title": "Two", "url": "https://example.com"}]"#;
        let items = parse_items(array, ItemsFormat::Json).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].url.as_deref(), Some("https://example.com"));

        let doc = r#"{"items": [{"title": "Three"}]}"#;
        let items = parse_items(doc, ItemsFormat::Json).unwrap();
        assert_eq!(items, vec![TickerItem::new("Three")]);
    }

    #[test]
    fn test_blank_titles_dropped() {
        let json = r#"[{"title": "  "}, {"title": "Kept"}]"#;
        let items = parse_items(json, ItemsFormat::Json).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, "Kept");
    }

    #[test]
    fn test_invalid_document_is_error() {
        assert!(parse_items("[[items]]\nsource = 1\n", ItemsFormat::Toml).is_err());
        assert!(parse_items("{not json", ItemsFormat::Json).is_err());
    }

    #[test]
    fn test_unsupported_extension() {
        let result = load_items(&PathBuf::from("/nonexistent/items.csv"));
        assert!(matches!(result, Err(Error::Content(_))));
    }

    fn write_temp(name: &str, content: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("marquee-loader-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_items_from_files() {
        let toml_path = write_temp(
            "items.toml",
            "[[items]]\ntitle = \"Markets open\"\nsource = \"Wire\"\n\n[[items]]\ntitle = \" \"\n",
        );
        let items = load_items(&toml_path).unwrap();
        assert_eq!(items, vec![TickerItem::new("Markets open").with_source("Wire")]);

        let json_path = write_temp("items.json", r#"{"items": [{"title": "One"}, {"title": "Two"}]}"#);
        let items = load_items(&json_path).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].title, "Two");

        std::fs::remove_file(toml_path).unwrap();
        std::fs::remove_file(json_path).unwrap();
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let result = load_items(&PathBuf::from("/nonexistent/marquee/items.toml"));
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn test_display_title_collapses_whitespace() {
        let item = TickerItem::new("  Breaking:\n  big   news ");
        assert_eq!(item.display_title(), "Breaking: big news");
    }
}
