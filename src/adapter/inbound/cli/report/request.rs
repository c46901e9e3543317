//! Resolution of command-line filters into a report request.

use chrono::NaiveDate;

use crate::adapter::inbound::cli::command::ReportArgs;
use crate::domain::{DateRange, PlatformFilter};
use crate::error::Result;
use crate::infrastructure::config::report::ReportConfig;

/// A fully resolved report request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRequest {
    pub range: DateRange,
    /// Validated and echoed back; synthesis covers every platform.
    pub filter: PlatformFilter,
    pub seed: Option<u64>,
}

impl ReportRequest {
    /// Merge flags with configured defaults.
    ///
    /// `--to` defaults to `today`; `--from` defaults to `default_days` before
    /// the end date. Flags win over the config file.
    ///
    /// # Errors
    ///
    /// Fails with a domain error when the start is after the end, the range
    /// is too long or runs off the calendar, or `--platform` is unknown.
    pub fn resolve(args: &ReportArgs, defaults: &ReportConfig, today: NaiveDate) -> Result<Self> {
        let end = args.to.unwrap_or(today);
        let range = match args.from {
            Some(start) => DateRange::try_new(start, end)?,
            None => DateRange::last_days(end, defaults.default_days)?,
        };

        let filter = match &args.platform {
            Some(key) => key.parse::<PlatformFilter>()?,
            None => defaults.platform_filter(),
        };

        Ok(Self {
            range,
            filter,
            seed: args.seed.or(defaults.seed),
        })
    }
}
