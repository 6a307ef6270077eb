use alpha_motors::application::data::{DatasetCache, ListingLoader};
use alpha_motors::application::ml::PredictionService;
use alpha_motors::config::Config;
use alpha_motors::infrastructure::FileArtifactSource;
use alpha_motors::interfaces::app::DashboardApp;
use alpha_motors::interfaces::design_system::DesignSystem;

use std::sync::Arc;
use tracing::{Level, info};
use tracing_subscriber::prelude::*;

fn main() -> anyhow::Result<()> {
    // 0. Load Env
    dotenvy::dotenv().ok();

    // 1. Logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    info!("Initializing Alpha Motors Dashboard...");

    // 2. Config
    let config = Config::from_env()?;
    info!(
        "Dataset: {} (reference year {})",
        config.dataset.path.display(),
        config.dataset.reference_year
    );

    // 3. Services
    let cache = Arc::new(DatasetCache::new());
    let loader = ListingLoader::from_config(&config.dataset, cache);
    let artifacts = Arc::new(FileArtifactSource::from_config(&config.artifacts));
    let predictor = PredictionService::new(artifacts);

    let app = DashboardApp::new(config, loader, predictor);

    // 4. Run UI (blocks main thread)
    let native_options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 860.0])
            .with_title("Alpha Motors Dashboard"),
        ..Default::default()
    };

    eframe::run_native(
        "Alpha Motors Dashboard",
        native_options,
        Box::new(|cc| {
            cc.egui_ctx.set_visuals(DesignSystem::theme());
            Ok(Box::new(app))
        }),
    )
    .map_err(|e| anyhow::anyhow!("Eframe error: {}", e))?;

    Ok(())
}
