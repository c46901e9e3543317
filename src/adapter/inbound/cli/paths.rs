//! Path utilities for bipagem.
//!
//! Configuration lives under `~/.bipagem/`:
//! - `~/.bipagem/config.toml` - main configuration

use std::path::{Path, PathBuf};

/// Returns the bipagem home directory (`~/.bipagem/`).
pub fn home_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".bipagem")
}

/// Returns the default config file path (`~/.bipagem/config.toml`).
pub fn default_config() -> PathBuf {
    home_dir().join("config.toml")
}

/// The explicit path when given, otherwise the default location.
pub fn config_or_default(explicit: Option<&Path>) -> PathBuf {
    explicit.map_or_else(default_config, Path::to_path_buf)
}
