// Test fixtures - reusable test data
// Provides consistent screens and settings across all test files

#![allow(dead_code)]

use progress_dashboard::models::settings::{DashboardSettings, HeaderStyle, TodoMode};
use progress_dashboard::ui_egui::screen::{ProgressDashboardScreen, ScreenOptions};
use std::time::{Duration, Instant};

/// Mount animation length used by the dashboard
pub const ANIMATION: Duration = Duration::from_millis(1500);

/// Sample settings for testing
pub mod settings {
    use super::*;

    /// The interactive four-item screen
    pub fn interactive() -> DashboardSettings {
        DashboardSettings::default()
    }

    /// The draft screen: read-only two-item list, gradient header
    pub fn draft() -> DashboardSettings {
        DashboardSettings {
            header_style: HeaderStyle::Gradient,
            todo_mode: TodoMode::ReadOnly,
            ..Default::default()
        }
    }

    /// Rings only
    pub fn rings_only() -> DashboardSettings {
        DashboardSettings {
            todo_mode: TodoMode::Hidden,
            show_action_buttons: false,
            ..Default::default()
        }
    }
}

/// A screen built from `settings` and mounted at the returned instant
pub fn mounted_screen(settings: &DashboardSettings) -> (ProgressDashboardScreen, Instant) {
    let mut screen = ProgressDashboardScreen::new(ScreenOptions::from_settings(settings));
    let mounted_at = Instant::now();
    screen.mount(mounted_at);
    (screen, mounted_at)
}
