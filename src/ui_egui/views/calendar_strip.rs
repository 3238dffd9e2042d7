use super::palette::DayStripPalette;
use crate::models::calendar::CalendarStrip;
use crate::ui_egui::theme::DashboardTheme;
use egui::{Align2, FontId, Sense, Stroke, Vec2};

const DAY_CIRCLE_DIAMETER: f32 = 35.0;
const DAY_FONT_SIZE: f32 = 16.0;

/// Render the week strip, spreading the days evenly across the width.
pub fn render_calendar_strip(ui: &mut egui::Ui, strip: &CalendarStrip, theme: &DashboardTheme) {
    let palette = DayStripPalette::from_theme(theme);
    let days = strip.days();
    if days.is_empty() {
        return;
    }

    let available = ui.available_width();
    let cell_width = (available / days.len() as f32).max(DAY_CIRCLE_DIAMETER);

    ui.add_space(10.0);
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 0.0;
        for day in days {
            let (rect, response) =
                ui.allocate_exact_size(Vec2::new(cell_width, DAY_CIRCLE_DIAMETER), Sense::hover());
            let painter = ui.painter();
            let center = rect.center();
            let radius = DAY_CIRCLE_DIAMETER / 2.0;

            let text_color = if day.is_selected {
                painter.circle_filled(center, radius, palette.selected_bg);
                palette.selected_text
            } else {
                if response.hovered() {
                    painter.circle_stroke(center, radius - 1.0, Stroke::new(1.5, palette.hover_ring));
                }
                palette.text
            };

            painter.text(
                center,
                Align2::CENTER_CENTER,
                day.day_number.to_string(),
                FontId::proportional(DAY_FONT_SIZE),
                text_color,
            );
        }
    });
    ui.add_space(10.0);
}
