use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single headline shown in the ticker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickerItem {
    pub title: String,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub published: Option<DateTime<Utc>>,
}

impl TickerItem {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            source: None,
            url: None,
            published: None,
        }
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Title with surrounding and repeated whitespace collapsed
    pub fn display_title(&self) -> String {
        self.title.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    /// Short local-time label for the publish timestamp
    pub fn time_label(&self) -> Option<String> {
        self.published
            .map(|ts| ts.with_timezone(&chrono::Local).format("%H:%M").to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_time_label_needs_timestamp() {
        let mut item = TickerItem::new("Headline");
        assert!(item.time_label().is_none());

        item.published = Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).single();
        let label = item.time_label().unwrap();
        assert_eq!(label.len(), 5);
        assert_eq!(&label[2..3], ":");
    }
}
