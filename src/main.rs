use eframe::egui;
use tracing_subscriber::EnvFilter;

use fittrack::ui::TrackerApp;
use fittrack::{AppState, Config, HttpTransport, RemoteApi};

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env();
    tracing::info!(backend = %config.base_url, "starting tracker");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size(config.window_size),
        ..Default::default()
    };

    eframe::run_native(
        "Workout Tracker",
        options,
        Box::new(move |cc| {
            let transport = HttpTransport::new(config.base_url.clone())?;
            let state = AppState::new(RemoteApi::new(transport));
            Ok(Box::new(TrackerApp::new(cc, state, config.base_url)))
        }),
    )
}
