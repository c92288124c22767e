#![forbid(unsafe_code)]

mod color;
mod config;
mod constants;
mod generator;
mod gui;
mod platform;

use tracing::{Level as TraceLevel, error, info, warn};
use tracing_subscriber::FmtSubscriber;

use config::Config;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse log level from environment variable
    let log_level = match std::env::var("LOG_LEVEL")
        .unwrap_or_else(|_| "info".to_string())
        .to_lowercase()
        .as_str()
    {
        "trace" => TraceLevel::TRACE,
        "debug" => TraceLevel::DEBUG,
        "warn" => TraceLevel::WARN,
        "error" => TraceLevel::ERROR,
        _ => TraceLevel::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    // A broken config file is reported and left alone; defaults are used instead
    let (config, config_writable) = match Config::load() {
        Ok(config) => (config, true),
        Err(err) => {
            error!(path = %Config::path().display(), error = ?err, "Failed to load config, using defaults");
            error!(path = %Config::path().display(), "The file has been preserved - fix it and restart to apply your settings.");
            (Config::default(), false)
        }
    };
    info!("config={:#?}", config);

    let output_dir = config.output.ensure_dir().unwrap_or_else(|err| {
        let fallback = config.output.resolved_dir();
        warn!(error = ?err, path = %fallback.display(), "Output directory unavailable, save dialog may start elsewhere");
        fallback
    });

    gui::run_gui(config, config_writable, output_dir)?;
    Ok(())
}
