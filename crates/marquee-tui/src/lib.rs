pub mod app;
pub mod content;
pub mod event;
pub mod input;
pub mod pointer;
pub mod reload;
pub mod theme;
pub mod themes;
pub mod widgets;

pub use app::{App, AppLayout};
pub use theme::Theme;
pub use themes::load_theme;
