// src/log.rs
use std::{
    fs::OpenOptions,
    path::{Path, PathBuf},
    sync::Mutex,
};

use tracing_subscriber::{fmt::time::Uptime, EnvFilter};

use crate::config::consts::LOG_FILE;

/// `debug.log` in the same directory as the snapshot file.
pub fn log_path(store_path: &Path) -> PathBuf {
    match store_path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.join(LOG_FILE),
        _ => PathBuf::from(LOG_FILE),
    }
}

/// Install the global subscriber: `debug.log` next to `store_path`,
/// elapsed-time stamps, level from `RUST_LOG` (else `info`, or `debug` when
/// `verbose`). Falls back to stderr if the log file can't be opened.
/// A second call leaves the first subscriber in place.
pub fn init(verbose: bool, store_path: &Path) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(Uptime::default())
        .with_target(false);

    let path = log_path(store_path);
    let file = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => std::fs::create_dir_all(dir),
        _ => Ok(()),
    }
    .and_then(|_| OpenOptions::new().create(true).append(true).open(&path));

    let installed = match file {
        Ok(f) => builder.with_ansi(false).with_writer(Mutex::new(f)).try_init(),
        Err(e) => {
            let r = builder.with_writer(std::io::stderr).try_init();
            tracing::warn!("could not open {}: {e}; logging to stderr", path.display());
            r
        }
    };
    if installed.is_err() {
        tracing::debug!("subscriber already installed");
    }
}
