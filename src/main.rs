//! RustZones - Training Zone Calculator
//!
//! Main entry point for the application.

use eframe::egui;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod app;

fn main() -> eframe::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting RustZones v{}", env!("CARGO_PKG_VERSION"));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([820.0, 760.0])
            .with_min_inner_size([600.0, 480.0])
            .with_title("RustZones"),
        ..Default::default()
    };

    eframe::run_native(
        "RustZones",
        options,
        Box::new(|cc| Ok(Box::new(app::RustZonesApp::new(cc)))),
    )
}
