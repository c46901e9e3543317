//! CSV export of the daily detail table.

use std::fmt::Write as _;

use chrono::NaiveDate;

use crate::domain::{AggregateReport, PlatformId};

use super::summary::{daily_share, format_date_br};

/// Header row of the exported table.
pub const CSV_HEADER: &str = "Date,Mercado Livre,Shopee,Loja Integrada,Total,% of Period";

/// Render the daily detail table as CSV, one row per day.
///
/// Rows are joined with `\n` and the output has no trailing newline.
#[must_use]
pub fn daily_csv(report: &AggregateReport) -> String {
    let mut csv = String::from(CSV_HEADER);
    for day in &report.daily {
        let share = daily_share(day, report).unwrap_or(0.0);
        // Writing to a String cannot fail.
        let _ = write!(
            csv,
            "\n{},{},{},{},{},{share:.1}%",
            format_date_br(day.date),
            day.counts.get(PlatformId::MercadoLivre),
            day.counts.get(PlatformId::Shopee),
            day.counts.get(PlatformId::LojaIntegrada),
            day.total,
        );
    }
    csv
}

/// Default file name for an export made on `today`.
#[must_use]
pub fn export_file_name(today: NaiveDate) -> String {
    format!("bipagem-report-{}.csv", today.format("%Y-%m-%d"))
}
