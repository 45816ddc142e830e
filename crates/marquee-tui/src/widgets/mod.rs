mod background;
mod status_bar;
mod ticker;

pub use background::BackgroundWidget;
pub use status_bar::StatusBarWidget;
pub use ticker::TickerWidget;
