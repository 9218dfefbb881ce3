use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::extract::ExtractOptions;
use crate::session::{SelectionMode, ViewOptions};

/// Configuration loaded from `~/.config/urldrop/config.toml`.
///
/// Every key is optional; missing keys take their default value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UrldropConfig {
    /// Keep the list sorted.
    pub sorted: bool,
    /// Keep the window above others.
    pub topmost: bool,
    /// Selection mode: "none", "one", "multi-simple" or "multi-extended".
    pub selection_mode: SelectionMode,
    /// Only keep HTML links whose `href` contains the letter `a`.
    pub html_require_letter_a: bool,
    /// Validate the `URL=` target of `.url` files.
    pub validate_shortcuts: bool,
}

impl Default for UrldropConfig {
    fn default() -> Self {
        let extract = ExtractOptions::default();
        let view = ViewOptions::default();
        Self {
            sorted: view.sorted,
            topmost: view.topmost,
            selection_mode: view.selection_mode,
            html_require_letter_a: extract.html_require_letter_a,
            validate_shortcuts: extract.validate_shortcuts,
        }
    }
}

impl UrldropConfig {
    pub fn extract_options(&self) -> ExtractOptions {
        ExtractOptions {
            html_require_letter_a: self.html_require_letter_a,
            validate_shortcuts: self.validate_shortcuts,
        }
    }

    pub fn view_options(&self) -> ViewOptions {
        ViewOptions {
            sorted: self.sorted,
            topmost: self.topmost,
            selection_mode: self.selection_mode,
        }
    }
}

/// Existing config file in the XDG config dirs, if any.
pub fn config_path() -> Result<Option<PathBuf>> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("urldrop")?;
    Ok(xdg_dirs.find_config_file("config.toml"))
}

/// Load configuration from `path`, or from the XDG config dir when `path` is
/// `None`. A missing XDG file yields defaults; nothing is written to disk.
pub fn load(path: Option<&Path>) -> Result<UrldropConfig> {
    match path {
        Some(p) => load_from(p),
        None => match config_path()? {
            Some(p) => load_from(&p),
            None => {
                tracing::debug!("no config file found, using defaults");
                Ok(UrldropConfig::default())
            }
        },
    }
}

pub fn load_from(path: &Path) -> Result<UrldropConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("read config: {}", path.display()))?;
    let cfg: UrldropConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    tracing::debug!("loaded config from {}", path.display());
    Ok(cfg)
}
