//! Report defaults applied when the command line leaves them out.

use serde::{Deserialize, Serialize};

use crate::domain::PlatformFilter;

/// Longest default window accepted, in days.
pub const MAX_DEFAULT_DAYS: u32 = 366;

/// `[report]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Window used when no `--from` is given: `[today - default_days, today]`.
    pub default_days: u32,
    /// Platform filter key: `all` or a platform key.
    pub platform: String,
    /// Fixed seed for reproducible reports.
    pub seed: Option<u64>,
}

impl ReportConfig {
    /// Parsed platform filter; only valid after [`Config::load`](super::settings::Config::load).
    #[must_use]
    pub fn platform_filter(&self) -> PlatformFilter {
        self.platform.parse().unwrap_or_default()
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            default_days: 7,
            platform: PlatformFilter::ALL_KEY.into(),
            seed: None,
        }
    }
}
