//! Synthetic report generation.
//!
//! Scan counts are drawn at random: weekdays are busier than weekends and
//! business hours busier than the rest of the day. Each day's draw is split
//! across platforms by fixed ratios with truncation, so a day's total can sit
//! up to two scans below the drawn value.

use chrono::NaiveDate;
use tracing::debug;

use crate::domain::{
    is_weekend, AggregateReport, DailyRecord, DateRange, DomainError, PlatformCounts, PlatformId,
    HOURS_PER_DAY,
};
use crate::port::RandomSource;

/// Weekend draws fall in `[0, 20)`.
const WEEKEND_RANGE: (u32, u32) = (0, 20);
/// Weekday draws fall in `[20, 70)`.
const WEEKDAY_RANGE: (u32, u32) = (20, 70);
/// Business hours, inclusive.
const BUSY_HOURS: std::ops::RangeInclusive<usize> = 8..=18;
const BUSY_HOUR_RANGE: (u32, u32) = (10, 40);
const QUIET_HOUR_RANGE: (u32, u32) = (0, 10);

/// Builds reports from an owned random source.
#[derive(Debug)]
pub struct ReportSynthesizer<R> {
    rng: R,
}

impl<R: RandomSource> ReportSynthesizer<R> {
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Synthesize a report for a validated range.
    pub fn synthesize(&mut self, range: &DateRange) -> AggregateReport {
        synthesize(range, &mut self.rng)
    }

    /// Validate raw dates, then synthesize.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidRange`] when `end` precedes `start` and
    /// [`DomainError::RangeTooLong`] past the maximum report length.
    pub fn synthesize_between(
        &mut self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<AggregateReport, DomainError> {
        let range = DateRange::try_new(start, end)?;
        Ok(self.synthesize(&range))
    }

    /// Give the random source back.
    pub fn into_inner(self) -> R {
        self.rng
    }
}

/// Split a day's drawn count across platforms, truncating each share.
#[must_use]
pub fn split_base_count(base: u32) -> PlatformCounts {
    let mut counts = PlatformCounts::default();
    for platform in PlatformId::ALL {
        counts[platform] = base * platform.split_percent() / 100;
    }
    counts
}

/// Synthesize the daily, hourly and platform breakdown for `range`.
///
/// Days are drawn first in chronological order, then the 24 hourly buckets
/// starting at midnight.
pub fn synthesize<R: RandomSource + ?Sized>(range: &DateRange, rng: &mut R) -> AggregateReport {
    let daily: Vec<DailyRecord> = range
        .days()
        .map(|day| {
            let (low, high) = if is_weekend(day) {
                WEEKEND_RANGE
            } else {
                WEEKDAY_RANGE
            };
            let base = rng.next_in_range(low, high);
            DailyRecord::new(day, split_base_count(base))
        })
        .collect();

    let mut hourly = [0u32; HOURS_PER_DAY];
    for (hour, slot) in hourly.iter_mut().enumerate() {
        let (low, high) = if BUSY_HOURS.contains(&hour) {
            BUSY_HOUR_RANGE
        } else {
            QUIET_HOUR_RANGE
        };
        *slot = rng.next_in_range(low, high);
    }

    let report = AggregateReport::from_daily(*range, daily, hourly);
    debug!(
        start = %range.start(),
        end = %range.end(),
        days = report.day_count(),
        total = report.total_count,
        "Synthesized report"
    );
    report
}
