pub mod config;
pub mod content;
pub mod error;
pub mod motion;

pub use config::{AppConfig, ThemeColorOverrides, ThemeConfig, TickerConfig};
pub use content::TickerItem;
pub use error::{Error, Result};
pub use motion::{MotionConfig, TickerMotionController};
