mod lifecycle;

use crate::ui_egui::screen::ProgressDashboardScreen;
use crate::ui_egui::theme::DashboardTheme;
use std::time::Instant;

pub use self::lifecycle::native_options;

pub struct DashboardApp {
    /// Currently applied theme colors
    active_theme: DashboardTheme,
    screen: ProgressDashboardScreen,
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let theme = &self.active_theme;
        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(theme.app_background))
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        self.screen.show(ui, theme, Instant::now());
                    });
            });
    }
}
