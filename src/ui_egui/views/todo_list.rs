use super::palette::TodoRowPalette;
use crate::models::settings::TodoMode;
use crate::models::todo::TodoList;
use crate::ui_egui::theme::DashboardTheme;
use egui::{Margin, RichText, Sense, Stroke};

const ROW_ROUNDING: f32 = 10.0;
const ROW_PADDING: f32 = 15.0;

/// Render the checklist and report which item, if any, the user toggled.
///
/// Rows are only clickable in [`TodoMode::Interactive`]; the caller applies
/// the toggle so this view never mutates the list itself.
pub fn render_todo_list(
    ui: &mut egui::Ui,
    list: &TodoList,
    mode: TodoMode,
    theme: &DashboardTheme,
) -> Option<u32> {
    if mode == TodoMode::Hidden {
        return None;
    }

    let palette = TodoRowPalette::from_theme(theme);
    let interactive = mode == TodoMode::Interactive;
    let mut toggled = None;

    ui.label(RichText::new("To-Do List").size(18.0).strong());
    ui.add_space(10.0);

    for item in list.items() {
        let row_id = ui.id().with(("todo_row", item.id));
        let frame = egui::Frame::none()
            .fill(palette.background)
            .rounding(ROW_ROUNDING)
            .inner_margin(Margin::same(ROW_PADDING))
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());

                let text = if item.completed {
                    RichText::new(&item.text)
                        .strikethrough()
                        .color(palette.completed_text)
                } else {
                    RichText::new(&item.text).color(palette.text)
                };

                let mut checked = item.completed;
                let response =
                    ui.add_enabled(interactive, egui::Checkbox::new(&mut checked, text));
                if response.changed() {
                    toggled = Some(item.id);
                }
            });

        // Clicking anywhere on the row toggles too
        if interactive {
            let row = ui.interact(frame.response.rect, row_id, Sense::click());
            if row.hovered() {
                ui.painter().rect_stroke(
                    frame.response.rect,
                    ROW_ROUNDING,
                    Stroke::new(1.0, palette.hover_border),
                );
            }
            if toggled.is_none() && row.clicked() {
                toggled = Some(item.id);
            }
        }
        ui.add_space(10.0);
    }

    toggled
}
