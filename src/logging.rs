//! Diagnostic log file.
//!
//! Stdout belongs to the UI, so diagnostics go to an append-only file.
//! Events come from `tracing` macros across the crate; the level filter is
//! read from `RUST_LOG` and defaults to `info`.
//!
//! # Example
//!
//! ```ignore
//! tad::logging::init("tad.log")?;
//! tracing::info!(screen = "home", "switched screen");
//! ```

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::Result;

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "info";

/// Install a global subscriber appending timestamped lines to `path`.
///
/// Only the first successful call installs anything; later calls still
/// open (and create) the file but otherwise do nothing.
pub fn init(path: impl AsRef<Path>) -> Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path.as_ref())?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .is_ok();

    if installed {
        tracing::info!(path = %path.as_ref().display(), "logging started");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_log_file_and_tolerates_repeat_calls() {
        let path = std::env::temp_dir().join(format!("tad-log-{}.log", std::process::id()));
        init(&path).unwrap();
        init(&path).unwrap();
        assert!(path.exists());
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn unopenable_path_is_an_error() {
        let dir = std::env::temp_dir();
        assert!(init(&dir).is_err());
    }
}
