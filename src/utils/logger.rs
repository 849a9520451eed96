use anyhow::Result;
use std::fs;
use std::path::Path;
use std::sync::Mutex;
use chrono::Local;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::settings::LoggingConfig;

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` wins over `config.level` when set. With `log_dir` set, output
/// goes to `<log_dir>/href_kit_<timestamp>.log` instead of stderr.
pub fn init_logger(config: &LoggingConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.level));

    let builder = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_file(true)
        .with_line_number(true)
        .with_target(false);

    match &config.log_dir {
        Some(log_dir) => {
            if !Path::new(log_dir).exists() {
                fs::create_dir_all(log_dir)?;
            }

            let timestamp = Local::now().format("%Y%m%d_%H%M%S");
            let log_file = format!("{}/href_kit_{}.log", log_dir, timestamp);

            let subscriber = builder
                .with_ansi(false)
                .with_writer(Mutex::new(fs::File::create(log_file)?))
                .finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }
        None => {
            let subscriber = builder
                .with_ansi(config.ansi)
                .with_writer(std::io::stderr)
                .finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }
    }

    info!("Logger initialized");
    Ok(())
}
