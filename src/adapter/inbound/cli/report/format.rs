//! Formatting and printing functions for report output.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::adapter::inbound::cli::output;
use crate::application::report::{daily_share, format_date_br, top_platform};
use crate::domain::{AggregateReport, Insight, InsightKind, PlatformId, TrendDirection};

use super::request::ReportRequest;

#[derive(Tabled)]
struct DailyRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Mercado Livre")]
    mercadolivre: u32,
    #[tabled(rename = "Shopee")]
    shopee: u32,
    #[tabled(rename = "Loja Integrada")]
    loja_integrada: u32,
    #[tabled(rename = "Total")]
    total: u32,
    #[tabled(rename = "% of Period")]
    share: String,
}

fn daily_rows(report: &AggregateReport) -> Vec<DailyRow> {
    report
        .daily
        .iter()
        .map(|day| DailyRow {
            date: format_date_br(day.date),
            mercadolivre: day.counts.get(PlatformId::MercadoLivre),
            shopee: day.counts.get(PlatformId::Shopee),
            loja_integrada: day.counts.get(PlatformId::LojaIntegrada),
            total: day.total,
            share: format!("{:.1}%", daily_share(day, report).unwrap_or(0.0)),
        })
        .collect()
}

/// Render the daily detail table as text.
pub fn daily_table(report: &AggregateReport) -> String {
    Table::new(daily_rows(report)).with(Style::rounded()).to_string()
}

/// Print the period and filter a report was built for.
pub fn print_request(request: &ReportRequest) {
    output::section("Period");
    output::field(
        "Range",
        format!(
            "{} - {} ({} days)",
            format_date_br(request.range.start()),
            format_date_br(request.range.end()),
            request.range.day_count()
        ),
    );
    output::field("Platform", request.filter);
    if let Some(seed) = request.seed {
        output::field("Seed", seed);
    }
}

/// Print the summary cards.
pub fn print_summary(report: &AggregateReport) {
    output::section("Summary");
    output::field("Total scans", output::highlight(report.total_count));
    output::field("Daily average", report.average_per_day);
    output::field(
        "Best day",
        format!(
            "{} ({})",
            report.best_day.total,
            format_date_br(report.best_day.date)
        ),
    );
    match top_platform(report) {
        Some((platform, share)) => {
            output::field("Top platform", format!("{platform} ({share:.1}%)"));
        }
        None => output::field("Top platform", "N/A"),
    }

    output::section("By Platform");
    for (platform, count) in report.platform_totals.iter() {
        output::field(platform.display_name(), count);
    }
}

/// Print the daily detail table.
pub fn print_daily(report: &AggregateReport) {
    output::section("Daily Breakdown");
    if report.daily.is_empty() {
        output::note("No data for the selected period.");
        return;
    }
    output::lines(&daily_table(report));
}

/// Print insights, one per line.
pub fn print_insights(insights: &[Insight]) {
    output::section("Insights");
    if insights.is_empty() {
        output::note("Not enough data for insights.");
        return;
    }

    for insight in insights {
        let description = match insight.kind {
            InsightKind::Trend {
                direction: TrendDirection::Growth,
                ..
            } => output::positive(&insight.description),
            InsightKind::Trend {
                direction: TrendDirection::Decline,
                ..
            } => output::negative(&insight.description),
            _ => insight.description.clone(),
        };
        output::field(&format!("{} {}", insight.icon, insight.title), description);
    }
}
