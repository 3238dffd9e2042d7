mod app;
pub mod fonts;
pub mod screen;
pub mod theme;
pub mod views;

pub use app::{native_options, DashboardApp};
