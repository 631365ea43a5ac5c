use crate::app_config::AppConfig;
use crate::inventory::{load_devices_from, sample_fleet};
use crate::report::log_fleet_report;
use tracing::{info, warn};

mod aggregate;
mod app_config;
mod chart;
mod domain;
mod filter;
mod inventory;
mod report;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

    info!("🪵 Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load();
    info!("✅  Loaded configuration");

    let devices = match load_devices_from(config.inventory().directory(), config.inventory().extension()).await {
        Ok(devices) if !devices.is_empty() => devices,
        Ok(_) => {
            warn!("⚠️ Inventory is empty, using the sample fleet");
            sample_fleet()
        }
        Err(err) => {
            warn!("⚠️ Could not load the inventory: {}, using the sample fleet", err);
            sample_fleet()
        }
    };
    info!("✅  Loaded {} device(s)", devices.len());

    log_fleet_report(&devices);

    Ok(())
}
