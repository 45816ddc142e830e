mod loader;
mod models;

pub use loader::{default_items, load_items, parse_items, ItemsFormat};
pub use models::TickerItem;
