//! Tracing setup for the `urldrop` binary.
//!
//! Log lines go to `$XDG_STATE_HOME/urldrop/urldrop.log` so stdout carries only
//! the extracted links. When that file cannot be opened, stderr is used.

use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,urldrop_core=debug,urldrop_cli=debug";
const LOG_FILE: &str = "urldrop.log";

/// `~/.local/state/urldrop/urldrop.log`, creating the directory if needed.
pub fn log_file_path() -> Result<PathBuf> {
    let dirs = xdg::BaseDirectories::with_prefix("urldrop")?;
    dirs.place_state_file(LOG_FILE)
        .context("create log directory")
}

fn open_append(path: &Path) -> Result<File> {
    fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open log file {}", path.display()))
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs the global subscriber. Returns false if one was already set.
fn install(writer: BoxMakeWriter) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .is_ok()
}

/// Initialize logging to the XDG state file, falling back to stderr.
///
/// `RUST_LOG` overrides the default filter.
pub fn init_logging() {
    let opened = log_file_path().and_then(|path| open_append(&path).map(|file| (path, file)));
    match opened {
        Ok((path, file)) => {
            if install(BoxMakeWriter::new(Mutex::new(file))) {
                tracing::info!("urldrop logging initialized at {}", path.display());
            }
        }
        Err(err) => {
            if install(BoxMakeWriter::new(io::stderr)) {
                tracing::warn!("file logging unavailable: {:#}", err);
            }
        }
    }
}
