// Settings service - TOML file in the platform config directory

mod service;

pub use service::{load_settings_or_default, SettingsService};
