//! Report builders.
//!
//! Reports built here start on Monday 2024-03-04 and cover one day per
//! entry.

use chrono::{Duration, NaiveDate};

use crate::domain::{AggregateReport, DailyRecord, DateRange, PlatformCounts, HOURS_PER_DAY};

/// First day of every built report (a Monday).
pub fn first_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 4).expect("valid date")
}

/// Hourly distribution that is zero except for `count` at `hour`.
pub fn hourly_with_peak(hour: usize, count: u32) -> [u32; HOURS_PER_DAY] {
    let mut hourly = [0; HOURS_PER_DAY];
    hourly[hour] = count;
    hourly
}

/// Report whose days have the given totals, all attributed to Mercado Livre.
pub fn report_from_totals(totals: &[u32]) -> AggregateReport {
    ReportBuilder::new().totals(totals).build()
}

/// Builder for reports with explicit per-day platform counts.
#[derive(Debug, Clone)]
pub struct ReportBuilder {
    start: NaiveDate,
    days: Vec<PlatformCounts>,
    hourly: [u32; HOURS_PER_DAY],
}

impl Default for ReportBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportBuilder {
    pub fn new() -> Self {
        Self {
            start: first_day(),
            days: Vec::new(),
            hourly: [0; HOURS_PER_DAY],
        }
    }

    pub fn starting(mut self, start: NaiveDate) -> Self {
        self.start = start;
        self
    }

    /// Append a day with explicit counts.
    pub fn day(mut self, mercadolivre: u32, shopee: u32, loja_integrada: u32) -> Self {
        self.days
            .push(PlatformCounts::new(mercadolivre, shopee, loja_integrada));
        self
    }

    /// Append one day per total, attributed to Mercado Livre.
    pub fn totals(mut self, totals: &[u32]) -> Self {
        self.days
            .extend(totals.iter().map(|&total| PlatformCounts::new(total, 0, 0)));
        self
    }

    pub fn hourly(mut self, hourly: [u32; HOURS_PER_DAY]) -> Self {
        self.hourly = hourly;
        self
    }

    pub fn build(self) -> AggregateReport {
        let span = self.days.len().saturating_sub(1) as i64;
        let range = DateRange::try_new(self.start, self.start + Duration::days(span))
            .expect("forward range");
        let daily = self
            .days
            .iter()
            .zip(range.days())
            .map(|(counts, date)| DailyRecord::new(date, *counts))
            .collect();
        AggregateReport::from_daily(range, daily, self.hourly)
    }
}
