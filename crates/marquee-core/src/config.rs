use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::motion::MotionConfig;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub ticker: TickerConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Data directory path (log file lives here)
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: default_log_level(),
        }
    }
}

/// Motion and content settings for the ticker band
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TickerConfig {
    /// Seconds needed to traverse one full track
    #[serde(default = "default_scroll_period")]
    pub scroll_period_secs: f64,
    /// Quiet period before autoplay resumes after an interaction (<= 0 = never)
    #[serde(default = "default_idle_timeout")]
    pub idle_timeout_secs: f64,
    /// Start scrolling as soon as content is available
    #[serde(default = "default_true")]
    pub autoplay: bool,
    /// Text placed between two items
    #[serde(default = "default_separator")]
    pub separator: String,
    /// Pad each track to at least the band width so the loop never shows a gap
    #[serde(default = "default_true")]
    pub pad_to_viewport: bool,
    /// Items file (TOML or JSON); built-in items are used when unset
    #[serde(default)]
    pub items_path: Option<PathBuf>,
    /// Items file polling interval in seconds (0 = disabled)
    #[serde(default = "default_reload_interval")]
    pub reload_interval_secs: u64,
}

impl Default for TickerConfig {
    fn default() -> Self {
        Self {
            scroll_period_secs: default_scroll_period(),
            idle_timeout_secs: default_idle_timeout(),
            autoplay: default_true(),
            separator: default_separator(),
            pad_to_viewport: default_true(),
            items_path: None,
            reload_interval_secs: default_reload_interval(),
        }
    }
}

impl TickerConfig {
    /// Validate the motion settings and build the controller configuration
    pub fn motion_config(&self) -> crate::Result<MotionConfig> {
        MotionConfig::new(self.scroll_period_secs, self.idle_timeout_secs)
    }

    /// Items file path with tilde expansion
    pub fn items_path(&self) -> Option<PathBuf> {
        self.items_path.as_deref().map(expand_tilde)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Render loop frequency
    #[serde(default = "default_frame_rate")]
    pub frame_rate: u32,
    /// Height of the ticker band in rows (including border)
    #[serde(default = "default_band_height")]
    pub band_height: u16,
    /// Show item source labels
    #[serde(default = "default_true")]
    pub show_source: bool,
    /// Show item timestamps
    #[serde(default = "default_true")]
    pub show_timestamps: bool,
    /// Theme configuration
    #[serde(default)]
    pub theme: ThemeConfig,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            frame_rate: default_frame_rate(),
            band_height: default_band_height(),
            show_source: default_true(),
            show_timestamps: default_true(),
            theme: ThemeConfig::default(),
        }
    }
}

/// Theme configuration
/// Can be specified as a simple string (theme name) or as a full struct with overrides
#[derive(Debug, Clone, Serialize)]
pub struct ThemeConfig {
    /// Theme name (e.g., "gruvbox-dark", "nord")
    pub name: String,
    /// Optional color overrides for semantic colors
    pub colors: ThemeColorOverrides,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: default_theme_name(),
            colors: ThemeColorOverrides::default(),
        }
    }
}

impl ThemeConfig {
    /// Theme config selecting `name` with no overrides
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            colors: ThemeColorOverrides::default(),
        }
    }
}

// Accept either a string or a table
impl<'de> Deserialize<'de> for ThemeConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::{self, MapAccess, Visitor};
        use std::fmt;

        struct ThemeConfigVisitor;

        impl<'de> Visitor<'de> for ThemeConfigVisitor {
            type Value = ThemeConfig;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string (theme name) or a map with 'name' and optional 'colors'")
            }

            fn visit_str<E>(self, value: &str) -> Result<ThemeConfig, E>
            where
                E: de::Error,
            {
                Ok(ThemeConfig::named(value))
            }

            fn visit_map<M>(self, mut map: M) -> Result<ThemeConfig, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut name: Option<String> = None;
                let mut colors: Option<ThemeColorOverrides> = None;

                while let Some(key) = map.next_key::<String>()? {
                    match key.as_str() {
                        "name" => {
                            name = Some(map.next_value()?);
                        }
                        "colors" => {
                            colors = Some(map.next_value()?);
                        }
                        _ => {
                            let _: serde::de::IgnoredAny = map.next_value()?;
                        }
                    }
                }

                Ok(ThemeConfig {
                    name: name.unwrap_or_else(default_theme_name),
                    colors: colors.unwrap_or_default(),
                })
            }
        }

        deserializer.deserialize_any(ThemeConfigVisitor)
    }
}

fn default_theme_name() -> String {
    "gruvbox-dark".to_string()
}

/// Optional color overrides for theme customization
/// Each color is a hex string (e.g., "#ff0000" or "ff0000")
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThemeColorOverrides {
    /// Ticker band background
    pub band_bg: Option<String>,
    /// Item headline color
    pub item: Option<String>,
    /// Source label color
    pub source: Option<String>,
    /// Timestamp color
    pub timestamp: Option<String>,
    /// Separator glyph color
    pub separator: Option<String>,
    /// Border color while the pointer hovers the band
    pub hover: Option<String>,
    /// Border color while dragging
    pub drag: Option<String>,
    /// Idle border color
    pub border: Option<String>,
    /// Status bar background
    pub status_bg: Option<String>,
    /// Status bar text
    pub status_fg: Option<String>,
}

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("marquee")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_scroll_period() -> f64 {
    30.0
}

fn default_idle_timeout() -> f64 {
    3.0
}

fn default_separator() -> String {
    "  •  ".to_string()
}

fn default_reload_interval() -> u64 {
    5
}

fn default_frame_rate() -> u32 {
    60
}

fn default_band_height() -> u16 {
    3
}

/// Expand tilde (~) in path to user's home directory
fn expand_tilde(path: &std::path::Path) -> PathBuf {
    if let Some(path_str) = path.to_str() {
        if let Some(stripped) = path_str.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(stripped);
            }
        } else if path_str == "~" {
            if let Some(home) = dirs::home_dir() {
                return home;
            }
        }
    }
    path.to_path_buf()
}

impl AppConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            Self::from_toml(&content)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse and validate a TOML document
    pub fn from_toml(content: &str) -> crate::Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| crate::Error::Config(e.to_string()))?;
        // Surface bad motion settings at load time rather than in the render loop
        config.ticker.motion_config()?;
        Ok(config)
    }

    /// Get the configuration file path
    /// Always uses ~/.config/marquee/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("marquee")
            .join("config.toml")
    }

    /// Get the log file path
    pub fn log_path(&self) -> PathBuf {
        self.data_dir().join("marquee.log")
    }

    /// Get the data directory (with tilde expansion)
    pub fn data_dir(&self) -> PathBuf {
        expand_tilde(&self.general.data_dir)
    }
}
