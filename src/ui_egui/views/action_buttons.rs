//! The two call-to-action buttons under the checklist.
//!
//! Neither button has a feature behind it yet; clicks are only logged.

use crate::ui_egui::theme::DashboardTheme;
use egui::{Color32, RichText, Vec2};

pub const RECOMMEND_LABEL: &str = "AI 추천 활동 받기";
pub const SCREEN_TIME_LABEL: &str = "스크린 타임 분석하기";

const BUTTON_HEIGHT: f32 = 48.0;

fn full_width_button(ui: &mut egui::Ui, label: &str, fill: Color32, text: Color32) -> egui::Response {
    let width = ui.available_width();
    ui.add(
        egui::Button::new(RichText::new(label).color(text))
            .fill(fill)
            .stroke(egui::Stroke::NONE)
            .rounding(10.0)
            .min_size(Vec2::new(width, BUTTON_HEIGHT)),
    )
}

pub fn render_action_buttons(ui: &mut egui::Ui, theme: &DashboardTheme) {
    ui.add_space(10.0);
    let recommend = full_width_button(
        ui,
        RECOMMEND_LABEL,
        theme.recommend_button_background,
        theme.recommend_button_text,
    );
    ui.add_space(10.0);
    let screen_time = full_width_button(
        ui,
        SCREEN_TIME_LABEL,
        theme.screen_time_button_background,
        theme.screen_time_button_text,
    );

    for (label, response) in [(RECOMMEND_LABEL, recommend), (SCREEN_TIME_LABEL, screen_time)] {
        if response.clicked() {
            log::debug!("'{}' clicked; no action is attached", label);
        }
    }
}
