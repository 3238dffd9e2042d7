// Progress Dashboard Application
// Main entry point

use progress_dashboard::services::settings::load_settings_or_default;
use progress_dashboard::ui_egui::{native_options, DashboardApp};

fn main() -> eframe::Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Progress Dashboard");

    let settings = load_settings_or_default();
    let options = native_options(&settings);

    eframe::run_native(
        "Progress Dashboard",
        options,
        Box::new(move |cc| Ok(Box::new(DashboardApp::new(cc, &settings)))),
    )
}
