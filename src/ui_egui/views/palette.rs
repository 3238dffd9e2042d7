use crate::ui_egui::theme::DashboardTheme;
use egui::Color32;

fn blend(a: Color32, b: Color32, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let lerp = |c1: u8, c2: u8| -> u8 { ((c1 as f32 * (1.0 - t)) + (c2 as f32 * t)).round() as u8 };
    Color32::from_rgb(lerp(a.r(), b.r()), lerp(a.g(), b.g()), lerp(a.b(), b.b()))
}

#[derive(Clone, Copy)]
pub(crate) struct DayStripPalette {
    pub text: Color32,
    pub selected_bg: Color32,
    pub selected_text: Color32,
    pub hover_ring: Color32,
}

impl DayStripPalette {
    pub fn from_theme(theme: &DashboardTheme) -> Self {
        Self {
            text: theme.text_primary,
            selected_bg: theme.selected_day_background,
            selected_text: theme.selected_day_text,
            hover_ring: blend(theme.selected_day_background, theme.app_background, 0.6),
        }
    }
}

#[derive(Clone, Copy)]
pub(crate) struct TodoRowPalette {
    pub background: Color32,
    pub hover_border: Color32,
    pub text: Color32,
    pub completed_text: Color32,
}

impl TodoRowPalette {
    pub fn from_theme(theme: &DashboardTheme) -> Self {
        let hover_target = if theme.is_dark {
            Color32::WHITE
        } else {
            Color32::BLACK
        };
        Self {
            background: theme.todo_row_background,
            hover_border: blend(theme.todo_row_background, hover_target, 0.25),
            text: theme.text_primary,
            completed_text: theme.text_secondary,
        }
    }
}
