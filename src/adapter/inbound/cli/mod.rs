//! CLI module graph.

pub mod command;
pub mod config;
pub mod output;
pub mod paths;
pub mod report;

use crate::error::Result;
use crate::infrastructure::config::settings::Config;

use command::ConfigPathArg;

/// Load the configuration a command asked for.
///
/// An explicit `--config` must exist; the default location is optional.
pub fn load_config(arg: &ConfigPathArg) -> Result<Config> {
    match &arg.config {
        Some(path) => Config::load(path),
        None => Config::load_or_default(paths::default_config()),
    }
}
