//! Handler for the `config` command group.

use std::path::Path;

use serde_json::json;

use crate::adapter::inbound::cli::output;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;

/// Non-fatal observations about a valid configuration.
fn warnings(config: &Config) -> Vec<String> {
    let mut warnings = Vec::new();
    if let Some(seed) = config.report.seed {
        warnings.push(format!(
            "report.seed = {seed}: every report for the same period will be identical"
        ));
    }
    if config.report.default_days == 0 {
        warnings.push("report.default_days = 0: default reports cover today only".to_string());
    }
    warnings
}

/// Execute `config show`.
pub fn execute_show(config: &Config, path: &Path) -> Result<()> {
    if output::is_json() {
        output::json_output(json!({
            "command": "config.show",
            "path": path.display().to_string(),
            "loaded": path.exists(),
            "config": serde_json::to_value(config)?,
        }));
        return Ok(());
    }

    output::section("Effective Configuration");
    output::field("Path", path.display());
    if !path.exists() {
        output::note("(file not found, showing defaults)");
    }

    output::section("Logging");
    output::field("Level", &config.logging.level);
    output::field("Format", &config.logging.format);

    output::section("Report");
    output::field("Default days", config.report.default_days);
    output::field("Platform", config.report.platform_filter());
    output::field(
        "Seed",
        config
            .report
            .seed
            .map_or_else(|| "random".to_string(), |seed| seed.to_string()),
    );

    Ok(())
}

/// Execute `config validate`.
///
/// The caller has already loaded (and thereby validated) `config`.
pub fn execute_validate(config: &Config, path: &Path) -> Result<()> {
    let warnings = warnings(config);

    if output::is_json() {
        output::json_output(json!({
            "command": "config.validate",
            "path": path.display().to_string(),
            "valid": true,
            "warnings": warnings,
        }));
        return Ok(());
    }

    output::section("Config Validation");
    output::field("Path", path.display());
    output::success("Config file is valid");

    if !warnings.is_empty() {
        output::section("Warnings");
        for warning in &warnings {
            output::warning(warning);
        }
    }

    output::field("Next", format!("bipagem config show -c {}", path.display()));
    Ok(())
}
