use std::io::Write;

use bipagem::domain::{PlatformFilter, PlatformId};
use bipagem::error::{ConfigError, Error};
use bipagem::infrastructure::config::settings::Config;
use bipagem::testkit::config::VALID_TOML;
use tempfile::NamedTempFile;

fn write_temp_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp config");
    file.write_all(contents.as_bytes()).expect("write temp config");
    file
}

#[test]
fn config_loads_from_file() {
    let file = write_temp_config(VALID_TOML);
    let config = Config::load(file.path()).expect("valid config");

    assert_eq!(config.logging.format, "json");
    assert_eq!(config.report.default_days, 14);
    assert_eq!(
        config.report.platform_filter(),
        PlatformFilter::Only(PlatformId::Shopee)
    );
}

#[test]
fn config_rejects_invalid_platform() {
    let file = write_temp_config("[report]\nplatform = \"magalu\"\n");
    let result = Config::load(file.path());

    match result {
        Err(Error::Config(ConfigError::InvalidValue {
            field: "platform",
            reason,
        })) => assert!(reason.contains("magalu")),
        Err(err) => panic!("Expected invalid platform error, got {err}"),
        Ok(config) => panic!(
            "Expected invalid platform to be rejected, got {}",
            config.report.platform
        ),
    }
}

#[test]
fn missing_explicit_file_is_a_read_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let result = Config::load(dir.path().join("absent.toml"));
    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::ReadFile(_)))
    ));
}

#[test]
fn missing_default_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().expect("temp dir");
    let config = Config::load_or_default(dir.path().join("absent.toml")).expect("defaults");
    assert_eq!(config, Config::default());
    assert_eq!(config.report.default_days, 7);
    assert_eq!(config.report.platform_filter(), PlatformFilter::All);
}
