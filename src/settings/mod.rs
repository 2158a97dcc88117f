//! Durable user settings — currently just the light/dark theme flag

pub mod handler;
pub mod store;
pub mod types;

pub use handler::{settings_router, SettingsState};
pub use store::SettingsStore;
pub use types::{Theme, UserSettings};
