//! Theme module for the dashboard
//!
//! Defines the DashboardTheme structure and the conversion from the model's
//! RGB triples to egui::Color32.

use crate::models::ring::RgbColor;
use crate::models::settings::ThemePreference;
use egui::Color32;

/// All colors used by the dashboard screen
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardTheme {
    /// Whether this is a dark theme (affects base egui::Visuals)
    pub is_dark: bool,

    /// Screen background color
    pub app_background: Color32,

    /// Primary text color (day numbers, todo text)
    pub text_primary: Color32,

    /// Secondary text color (completed todos, section hints)
    pub text_secondary: Color32,

    /// Track drawn underneath each progress arc
    pub ring_track: Color32,

    /// Selected day circle and its text
    pub selected_day_background: Color32,
    pub selected_day_text: Color32,

    /// Todo row card background
    pub todo_row_background: Color32,

    /// "AI recommendation" button
    pub recommend_button_background: Color32,
    pub recommend_button_text: Color32,

    /// "Screen time" button
    pub screen_time_button_background: Color32,
    pub screen_time_button_text: Color32,

    /// Gradient header stops (top to bottom)
    pub header_gradient_top: Color32,
    pub header_gradient_bottom: Color32,
}

impl DashboardTheme {
    /// Create the default Light theme
    pub fn light() -> Self {
        Self {
            is_dark: false,
            app_background: Color32::WHITE,
            text_primary: Color32::from_rgb(33, 33, 33),
            text_secondary: Color32::from_rgb(140, 140, 140),
            ring_track: Color32::from_rgb(0xF1, 0xF1, 0xF1),
            selected_day_background: Color32::from_rgb(0x4C, 0xAF, 0x50),
            selected_day_text: Color32::WHITE,
            todo_row_background: Color32::from_rgb(0xF5, 0xF5, 0xF5),
            recommend_button_background: Color32::from_rgb(0xE8, 0xF5, 0xE9),
            recommend_button_text: Color32::from_rgb(0x4C, 0xAF, 0x50),
            screen_time_button_background: Color32::from_rgb(0x2E, 0x7D, 0x32),
            screen_time_button_text: Color32::WHITE,
            header_gradient_top: Color32::from_rgb(0xC8, 0xE6, 0xC9),
            header_gradient_bottom: Color32::WHITE,
        }
    }

    /// Create the default Dark theme
    pub fn dark() -> Self {
        Self {
            is_dark: true,
            app_background: Color32::from_rgb(24, 24, 24),
            text_primary: Color32::from_rgb(236, 236, 236),
            text_secondary: Color32::from_rgb(150, 150, 150),
            ring_track: Color32::from_rgb(52, 52, 52),
            selected_day_background: Color32::from_rgb(0x4C, 0xAF, 0x50),
            selected_day_text: Color32::WHITE,
            todo_row_background: Color32::from_rgb(38, 38, 38),
            recommend_button_background: Color32::from_rgb(30, 56, 34),
            recommend_button_text: Color32::from_rgb(129, 199, 132),
            screen_time_button_background: Color32::from_rgb(0x2E, 0x7D, 0x32),
            screen_time_button_text: Color32::WHITE,
            header_gradient_top: Color32::from_rgb(27, 64, 32),
            header_gradient_bottom: Color32::from_rgb(24, 24, 24),
        }
    }

    /// Resolve a settings preference, asking the OS when it says "system"
    pub fn for_preference(preference: ThemePreference) -> Self {
        match preference {
            ThemePreference::Light => Self::light(),
            ThemePreference::Dark => Self::dark(),
            ThemePreference::System => match dark_light::detect() {
                dark_light::Mode::Dark => Self::dark(),
                dark_light::Mode::Light => Self::light(),
                dark_light::Mode::Default => {
                    log::warn!("System theme could not be detected, using light theme");
                    Self::light()
                }
            },
        }
    }

    /// Apply this theme to an egui context
    pub fn apply_to_context(&self, ctx: &egui::Context) {
        let mut visuals = if self.is_dark {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };

        visuals.window_fill = self.app_background;
        visuals.panel_fill = self.app_background;
        visuals.override_text_color = Some(self.text_primary);

        // Checkbox fill follows the selected-day accent
        visuals.selection.bg_fill = self.selected_day_background;
        visuals.selection.stroke.color = self.selected_day_text;

        ctx.set_visuals(visuals);
    }

    pub fn ring_color(color: RgbColor) -> Color32 {
        Color32::from_rgb(color.r, color.g, color.b)
    }
}
