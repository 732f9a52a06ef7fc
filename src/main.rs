// Weather History Application
// Main entry point

use weather_history::ui_egui::WeatherHistoryApp;

fn main() -> eframe::Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Weather History");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([460.0, 220.0])
            .with_min_inner_size([360.0, 180.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Get Weather History",
        options,
        Box::new(|cc| Ok(Box::new(WeatherHistoryApp::new(cc)))),
    )
}
