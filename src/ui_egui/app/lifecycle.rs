use super::DashboardApp;
use crate::models::settings::{DashboardSettings, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};
use crate::ui_egui::fonts::install_fonts;
use crate::ui_egui::screen::{ProgressDashboardScreen, ScreenOptions};
use crate::ui_egui::theme::DashboardTheme;

impl DashboardApp {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: &DashboardSettings) -> Self {
        Self::with_settings(&cc.egui_ctx, settings)
    }

    pub fn with_settings(ctx: &egui::Context, settings: &DashboardSettings) -> Self {
        log::info!(
            "Dashboard settings: theme={:?}, header={:?}, todos={:?}, animation={}ms",
            settings.theme,
            settings.header_style,
            settings.todo_mode,
            settings.animation_duration_ms
        );

        install_fonts(ctx, settings.font_path.as_deref());

        let active_theme = DashboardTheme::for_preference(settings.theme);
        active_theme.apply_to_context(ctx);

        let screen = ProgressDashboardScreen::new(ScreenOptions::from_settings(settings));

        Self {
            active_theme,
            screen,
        }
    }
}

/// Window options derived from the settings
pub fn native_options(settings: &DashboardSettings) -> eframe::NativeOptions {
    eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Progress Dashboard")
            .with_inner_size([settings.window_width, settings.window_height])
            .with_min_inner_size([MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT]),
        ..Default::default()
    }
}
