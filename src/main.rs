use appliance_resolver::app_config::AppConfig;
use appliance_resolver::thinq::load_devices_from;
use appliance_resolver::{Resolver, plan_registrations};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    tracing_subscriber::fmt()
        .with_max_level(config.core().log_level())
        .with_writer(std::io::stderr)
        .init();

    info!("🪵 Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    info!("✅  Loaded configuration");

    let devices = load_devices_from(config.discovery().directory(), config.discovery().extension()).await?;
    info!("✅  Discovered {} device(s)", devices.len());

    let resolver = Resolver::new();
    let registrations = plan_registrations(&resolver, &devices);
    println!("{}", serde_json::to_string_pretty(&registrations)?);

    info!(
        "🔥 {} registered {} device(s), skipped {}",
        env!("CARGO_PKG_NAME"),
        registrations.len(),
        devices.len() - registrations.len()
    );

    Ok(())
}
