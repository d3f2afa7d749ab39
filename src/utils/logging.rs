//! Tracing setup.
//!
//! The one-shot CLI logs to stderr. The interactive UI owns the terminal, so it
//! logs to a file under the platform cache directory instead. The filter comes
//! from `RUST_LOG` when set.

use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

/// Default filter for interactive sessions (file output)
pub const DEFAULT_FILE_FILTER: &str = "civicly=info";
/// Default filter for the one-shot CLI (stderr output)
pub const DEFAULT_STDERR_FILTER: &str = "civicly=warn";

fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Log to stderr
pub fn init_stderr_logging() -> Result<()> {
    tracing_subscriber::registry()
        .with(env_filter(DEFAULT_STDERR_FILTER))
        .with(fmt::layer().with_writer(io::stderr).with_target(false))
        .try_init()
        .context("Failed to initialize logging")
}

/// Log to `path`, appending; parent directories are created as needed
pub fn init_file_logging(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    tracing_subscriber::registry()
        .with(env_filter(DEFAULT_FILE_FILTER))
        .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
        .try_init()
        .context("Failed to initialize logging")
}

/// `<cache_dir>/civicly/civicly.log`
pub fn default_log_path() -> Result<PathBuf> {
    let cache_base = dirs::cache_dir().context("Failed to get platform cache directory")?;
    Ok(cache_base.join("civicly").join("civicly.log"))
}
