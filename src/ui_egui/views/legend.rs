use crate::models::ring::RingValue;
use crate::ui_egui::theme::DashboardTheme;
use egui::{Sense, Vec2};

const DOT_DIAMETER: f32 = 10.0;
const ITEM_GAP: f32 = 20.0;
const DOT_GAP: f32 = 5.0;

/// Colored dot plus label for each ring, outermost first, centered.
pub fn render_legend(ui: &mut egui::Ui, rings: &[RingValue]) {
    let entries = RingValue::legend_order(rings);

    // Measure first so the row can be centered
    let font_id = egui::TextStyle::Body.resolve(ui.style());
    let text_color = ui.visuals().text_color();
    let galleys: Vec<_> = entries
        .iter()
        .map(|ring| {
            ui.painter().layout_no_wrap(
                ring.category.legend_label().to_owned(),
                font_id.clone(),
                text_color,
            )
        })
        .collect();
    let row_width: f32 = galleys
        .iter()
        .map(|galley| DOT_DIAMETER + DOT_GAP + galley.size().x)
        .sum::<f32>()
        + ITEM_GAP * entries.len().saturating_sub(1) as f32;
    let row_height = galleys
        .iter()
        .map(|galley| galley.size().y)
        .fold(DOT_DIAMETER, f32::max);

    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 0.0;
        ui.add_space(((ui.available_width() - row_width) / 2.0).max(0.0));

        for (index, (ring, galley)) in entries.iter().zip(galleys).enumerate() {
            if index > 0 {
                ui.add_space(ITEM_GAP);
            }
            let (dot_rect, _) =
                ui.allocate_exact_size(Vec2::new(DOT_DIAMETER, row_height), Sense::hover());
            ui.painter().circle_filled(
                dot_rect.center(),
                DOT_DIAMETER / 2.0,
                DashboardTheme::ring_color(ring.color),
            );
            ui.add_space(DOT_GAP);

            let (text_rect, _) = ui.allocate_exact_size(
                Vec2::new(galley.size().x, row_height),
                Sense::hover(),
            );
            let text_pos = egui::pos2(
                text_rect.left(),
                text_rect.center().y - galley.size().y / 2.0,
            );
            ui.painter().galley(text_pos, galley, text_color);
        }
    });
}
