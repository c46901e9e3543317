//! Summary-card figures and display helpers shared by renderers.

use chrono::NaiveDate;

use crate::domain::{AggregateReport, DailyRecord, PlatformId};

/// Round to one decimal place, half away from zero.
#[must_use]
pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Share of the period's scans that fell on `day`, in percent.
///
/// Returns `None` when the period has no scans at all.
#[must_use]
pub fn daily_share(day: &DailyRecord, report: &AggregateReport) -> Option<f64> {
    if report.total_count == 0 {
        return None;
    }
    Some(round_one_decimal(
        f64::from(day.total) / f64::from(report.total_count) * 100.0,
    ))
}

/// Leading platform and its share of all scans, in percent.
///
/// Returns `None` when the period has no scans at all.
#[must_use]
pub fn top_platform(report: &AggregateReport) -> Option<(PlatformId, f64)> {
    if report.total_count == 0 {
        return None;
    }
    let (platform, count) = report.platform_totals.leader();
    let share = round_one_decimal(f64::from(count) / f64::from(report.total_count) * 100.0);
    Some((platform, share))
}

/// Brazilian calendar format, `dd/mm/yyyy`.
#[must_use]
pub fn format_date_br(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}
