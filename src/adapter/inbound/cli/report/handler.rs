//! Handler for the `report` command group.
//!
//! Each command resolves its filters, synthesizes a fresh report and renders
//! it. Nothing is cached between invocations.

use std::path::Path;

use chrono::{Local, NaiveDate};
use serde_json::json;
use tracing::info;

use crate::adapter::inbound::cli::command::ReportArgs;
use crate::adapter::inbound::cli::output;
use crate::adapter::outbound::random::random_source;
use crate::application::report::{daily_csv, export_file_name, generate_insights, synthesize};
use crate::domain::AggregateReport;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;

use super::format::{print_daily, print_insights, print_request, print_summary};
use super::json::{daily_to_json, insights_to_json, request_to_json, summary_to_json};
use super::request::ReportRequest;

fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Resolve filters and synthesize the report they describe.
pub fn build_report(
    args: &ReportArgs,
    config: &Config,
    today: NaiveDate,
) -> Result<(ReportRequest, AggregateReport)> {
    let request = ReportRequest::resolve(args, &config.report, today)?;
    let mut rng = random_source(request.seed);
    let report = synthesize(&request.range, &mut rng);

    info!(
        from = %request.range.start(),
        to = %request.range.end(),
        platform = request.filter.key(),
        total = report.total_count,
        "Report built"
    );
    Ok((request, report))
}

/// Execute `report show`.
pub fn execute_show(args: &ReportArgs, config: &Config) -> Result<()> {
    let (request, report) = build_report(args, config, today())?;
    let insights = generate_insights(&report);

    if output::is_json() {
        output::json_output(json!({
            "command": "report.show",
            "filter": request_to_json(&request),
            "summary": summary_to_json(&report),
            "daily": daily_to_json(&report),
            "hourly": report.hourly.to_vec(),
            "insights": insights_to_json(&insights),
        }));
        return Ok(());
    }
    if output::is_quiet() {
        return Ok(());
    }

    output::header(env!("CARGO_PKG_VERSION"));
    print_request(&request);
    print_summary(&report);
    print_daily(&report);
    print_insights(&insights);
    Ok(())
}

/// Execute `report insights`.
pub fn execute_insights(args: &ReportArgs, config: &Config) -> Result<()> {
    let (request, report) = build_report(args, config, today())?;
    let insights = generate_insights(&report);

    if output::is_json() {
        output::json_output(json!({
            "command": "report.insights",
            "filter": request_to_json(&request),
            "insights": insights_to_json(&insights),
        }));
        return Ok(());
    }
    if output::is_quiet() {
        return Ok(());
    }

    print_request(&request);
    print_insights(&insights);
    Ok(())
}

/// Execute `report export [-o PATH]`.
///
/// Without `-o` the CSV goes to stdout. When `PATH` is a directory the file
/// is named after today's date inside it.
pub fn execute_export(args: &ReportArgs, output_path: Option<&Path>, config: &Config) -> Result<()> {
    let today = today();
    let (request, report) = build_report(args, config, today)?;
    let csv = daily_csv(&report);

    let Some(path) = output_path else {
        if output::is_json() {
            output::json_output(json!({
                "command": "report.export",
                "status": "stdout",
                "filter": request_to_json(&request),
                "csv": csv,
            }));
        } else {
            println!("{csv}");
        }
        return Ok(());
    };

    let path = if path.is_dir() {
        path.join(export_file_name(today))
    } else {
        path.to_path_buf()
    };
    std::fs::write(&path, &csv)?;
    info!(path = %path.display(), bytes = csv.len(), "Report exported");

    if output::is_json() {
        output::json_output(json!({
            "command": "report.export",
            "status": "written",
            "filter": request_to_json(&request),
            "path": path.display().to_string(),
            "rows": report.daily.len(),
            "bytes": csv.len(),
        }));
        return Ok(());
    }

    output::success("Report export complete");
    output::field("Rows", report.daily.len());
    output::field("Path", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, m, d).unwrap()
    }

    #[test]
    fn test_build_report_covers_requested_days() {
        let args = ReportArgs {
            from: Some(date(2, 1)),
            to: Some(date(2, 29)),
            seed: Some(3),
            ..Default::default()
        };
        let (request, report) = build_report(&args, &Config::default(), date(6, 1)).unwrap();
        assert_eq!(request.range.day_count(), 29);
        assert_eq!(report.daily.len(), 29);
    }

    #[test]
    fn test_build_report_with_seed_is_stable() {
        let args = ReportArgs {
            seed: Some(11),
            ..Default::default()
        };
        let (_, a) = build_report(&args, &Config::default(), date(6, 1)).unwrap();
        let (_, b) = build_report(&args, &Config::default(), date(6, 1)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_build_report_uses_config_seed() {
        let config = Config::parse_toml("[report]\nseed = 5\n").unwrap();
        let (request, _) = build_report(&ReportArgs::default(), &config, date(6, 1)).unwrap();
        assert_eq!(request.seed, Some(5));
    }
}
