//! Report aggregates: daily records and the period rollup.

use chrono::NaiveDate;

use super::platform::PlatformCounts;
use super::range::DateRange;

/// Number of hour-of-day buckets in a report.
pub const HOURS_PER_DAY: usize = 24;

/// Scan counts for a single calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyRecord {
    pub date: NaiveDate,
    pub counts: PlatformCounts,
    /// Always `counts.total()`.
    pub total: u32,
}

impl DailyRecord {
    #[must_use]
    pub fn new(date: NaiveDate, counts: PlatformCounts) -> Self {
        Self {
            date,
            counts,
            total: counts.total(),
        }
    }
}

/// Rollup of scan counts over a date range, by day, hour and platform.
///
/// Built fresh for every request and never cached.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateReport {
    pub range: DateRange,
    pub total_count: u32,
    pub average_per_day: u32,
    /// Earliest record holding the maximum total.
    pub best_day: DailyRecord,
    pub platform_totals: PlatformCounts,
    pub daily: Vec<DailyRecord>,
    pub hourly: [u32; HOURS_PER_DAY],
}

impl AggregateReport {
    /// Roll up chronologically ordered daily records.
    ///
    /// `daily` holds one record per day of `range`; an empty slice yields an
    /// all-zero report whose best day is the range start.
    #[must_use]
    pub fn from_daily(
        range: DateRange,
        daily: Vec<DailyRecord>,
        hourly: [u32; HOURS_PER_DAY],
    ) -> Self {
        let mut total_count = 0u32;
        let mut platform_totals = PlatformCounts::default();
        let mut best_day: Option<DailyRecord> = None;

        for record in &daily {
            total_count += record.total;
            platform_totals.add(&record.counts);
            // Strictly greater: the first day to reach the max keeps the title.
            if best_day.map_or(true, |best| record.total > best.total) {
                best_day = Some(*record);
            }
        }

        let best_day = best_day
            .unwrap_or_else(|| DailyRecord::new(range.start(), PlatformCounts::default()));
        let average_per_day = (f64::from(total_count) / f64::from(range.day_count())).round() as u32;

        Self {
            range,
            total_count,
            average_per_day,
            best_day,
            platform_totals,
            daily,
            hourly,
        }
    }

    /// Number of days covered by the report.
    #[must_use]
    pub fn day_count(&self) -> u32 {
        self.range.day_count()
    }
}
