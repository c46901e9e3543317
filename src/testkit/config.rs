//! Canonical configuration snippets.

/// A complete, valid configuration file.
pub const VALID_TOML: &str = r#"
[logging]
level = "debug"
format = "json"

[report]
default_days = 14
platform = "shopee"
seed = 42
"#;

/// A configuration with only the logging section.
pub const MINIMAL_TOML: &str = r#"
[logging]
level = "info"
format = "pretty"
"#;
