use std::path::PathBuf;

use color_eyre::Result;
use directories::ProjectDirs;
use lazy_static::lazy_static;
use tracing_error::ErrorLayer;
use tracing_subscriber::{Layer, layer::SubscriberExt, util::SubscriberInitExt};

lazy_static! {
    static ref LOG_ENV: String = format!("{}_LOG_LEVEL", env!("CARGO_CRATE_NAME").to_uppercase());
    static ref LOG_FILE: String = format!("{}.log", env!("CARGO_PKG_NAME"));
}

fn data_dir() -> PathBuf {
    ProjectDirs::from("dev", "lyrin", env!("CARGO_PKG_NAME"))
        .map(|dirs| dirs.data_local_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(".").join(".data"))
}

/// Log to a file under the platform data dir; the terminal itself belongs to
/// the TUI. Filter comes from `RUST_LOG`, then `LYRIN_LOG_LEVEL`, then a
/// crate-level info default.
pub fn initialize_logging() -> Result<()> {
    let directory = data_dir();
    std::fs::create_dir_all(&directory)?;
    let log_file = std::fs::File::create(directory.join(LOG_FILE.as_str()))?;

    let filter = tracing_subscriber::filter::EnvFilter::try_from_default_env()
        .or_else(|_| {
            tracing_subscriber::filter::EnvFilter::try_new(
                std::env::var(LOG_ENV.as_str())
                    .unwrap_or_else(|_| format!("{}=info", env!("CARGO_CRATE_NAME"))),
            )
        })?;

    let file_subscriber = tracing_subscriber::fmt::layer()
        .with_file(true)
        .with_line_number(true)
        .with_writer(log_file)
        .with_target(false)
        .with_ansi(false)
        .with_filter(filter);

    tracing_subscriber::registry()
        .with(file_subscriber)
        .with(ErrorLayer::default())
        .init();

    Ok(())
}
