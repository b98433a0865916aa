use eframe::egui;
use log::{error, info};

mod app;
mod backend;
mod ui;

use app::HopeForOrphansApp;

fn main() -> Result<(), eframe::Error> {
    // Initialize logging for debugging
    env_logger::init();
    info!("Starting Hope for Orphans egui application");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])      // Room for the card grids
            .with_min_inner_size([800.0, 600.0])   // Minimum usable size
            .with_title("Hope for Orphans")
            .with_resizable(true),
        ..Default::default()
    };

    info!("Launching egui window");
    eframe::run_native(
        "Hope for Orphans",
        options,
        Box::new(|cc| {
            match HopeForOrphansApp::new(cc) {
                Ok(app) => {
                    info!("Successfully initialized Hope for Orphans app");
                    Ok(Box::new(app))
                }
                Err(e) => {
                    error!("Failed to initialize app: {}", e);
                    Err(format!("Failed to initialize app: {}", e).into())
                }
            }
        }),
    )
}
