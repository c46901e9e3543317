//! Human-readable observations derived from a report.

use std::fmt;

use super::platform::PlatformId;

/// Direction of the trend between the two halves of a period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendDirection {
    Growth,
    Decline,
}

impl fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Growth => f.write_str("growth"),
            Self::Decline => f.write_str("decline"),
        }
    }
}

/// What an insight measured, with its numbers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InsightKind {
    /// Second-half mean compared to first-half mean.
    Trend {
        direction: TrendDirection,
        /// Absolute change in percent, one decimal.
        percentage: f64,
    },
    /// Busiest hour of the day.
    PeakHour { hour: usize, count: u32 },
    /// Platform with the largest share of the period.
    DominantPlatform {
        platform: PlatformId,
        /// Share of all scans in percent, one decimal.
        share: f64,
    },
}

impl InsightKind {
    /// Short machine-readable tag.
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::Trend { .. } => "trend",
            Self::PeakHour { .. } => "peak_hour",
            Self::DominantPlatform { .. } => "dominant_platform",
        }
    }
}

/// A short observation rendered on the reports page.
#[derive(Debug, Clone, PartialEq)]
pub struct Insight {
    pub kind: InsightKind,
    pub icon: &'static str,
    pub title: &'static str,
    pub description: String,
}
