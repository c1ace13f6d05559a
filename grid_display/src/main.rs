// main.rs - Desktop viewer for the conway engine
// Optional first argument: path to a YAML simulation config

use anyhow::{Context, Result, anyhow};
use eframe::egui;
use log::info;

use conway::SimulationConfig;

mod patterns; // Named seed patterns
mod ui;       // eframe::App implementation

use ui::LifeApp;

fn main() -> Result<()> {
    simple_logger::init_with_level(log::Level::Info).context("could not install logger")?;
    info!("Starting grid_display v{} ...", env!("CARGO_PKG_VERSION"));

    let config = match std::env::args().nth(1) {
        Some(path) => SimulationConfig::load(&path)
            .with_context(|| format!("could not load config from {}", path))?,
        None => SimulationConfig::default(),
    };
    let app = LifeApp::new(&config).context("could not create simulation")?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([800.0, 950.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Conway's Game of Life",
        options,
        Box::new(|_cc| Box::new(app)),
    )
    .map_err(|err| anyhow!("viewer exited with an error: {}", err))
}
