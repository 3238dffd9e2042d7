//! User-facing dashboard settings.
//!
//! Loaded from `settings.toml` in the platform config directory. Every field
//! has a default so partial files keep working.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

pub const DEFAULT_ANIMATION_DURATION_MS: u64 = 1500;
pub const MAX_ANIMATION_DURATION_MS: u64 = 60_000;
pub const DEFAULT_WINDOW_WIDTH: f32 = 390.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 844.0;
pub const MIN_WINDOW_WIDTH: f32 = 320.0;
pub const MIN_WINDOW_HEIGHT: f32 = 480.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
    /// Follow the operating system preference
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeaderStyle {
    #[default]
    Plain,
    Gradient,
}

/// How the checklist is presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TodoMode {
    Hidden,
    ReadOnly,
    #[default]
    Interactive,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardSettings {
    pub theme: ThemePreference,
    pub header_style: HeaderStyle,
    pub todo_mode: TodoMode,
    pub animation_duration_ms: u64,
    pub window_width: f32,
    pub window_height: f32,
    pub show_action_buttons: bool,
    /// Font with Hangul coverage; system fonts are probed when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_path: Option<PathBuf>,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            theme: ThemePreference::Light,
            header_style: HeaderStyle::Plain,
            todo_mode: TodoMode::Interactive,
            animation_duration_ms: DEFAULT_ANIMATION_DURATION_MS,
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            show_action_buttons: true,
            font_path: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SettingsValidationError {
    #[error("Animation duration must be between 1 and 60000 ms, got {0}")]
    AnimationDuration(u64),
    #[error("Window size must be finite and at least 320x480, got {0}x{1}")]
    WindowTooSmall(f32, f32),
}

impl DashboardSettings {
    pub fn validate(&self) -> Result<(), SettingsValidationError> {
        if self.animation_duration_ms == 0
            || self.animation_duration_ms > MAX_ANIMATION_DURATION_MS
        {
            return Err(SettingsValidationError::AnimationDuration(
                self.animation_duration_ms,
            ));
        }

        // NaN fails both comparisons; TOML also accepts `inf`
        let width_ok = self.window_width.is_finite() && self.window_width >= MIN_WINDOW_WIDTH;
        let height_ok = self.window_height.is_finite() && self.window_height >= MIN_WINDOW_HEIGHT;
        if !(width_ok && height_ok) {
            return Err(SettingsValidationError::WindowTooSmall(
                self.window_width,
                self.window_height,
            ));
        }

        Ok(())
    }

    pub fn animation_duration(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.animation_duration_ms)
    }
}
