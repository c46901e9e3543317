//! JSON serialization for report output.

use serde_json::{json, Value};

use crate::application::report::{daily_share, top_platform};
use crate::domain::{AggregateReport, Insight, InsightKind};

use super::request::ReportRequest;

/// Convert the request filters to JSON.
pub fn request_to_json(request: &ReportRequest) -> Value {
    json!({
        "from": request.range.start().to_string(),
        "to": request.range.end().to_string(),
        "days": request.range.day_count(),
        "platform": request.filter.key(),
        "seed": request.seed,
    })
}

/// Convert the summary cards to JSON.
pub fn summary_to_json(report: &AggregateReport) -> Value {
    let top = top_platform(report).map(|(platform, share)| {
        json!({
            "platform": platform.key(),
            "name": platform.display_name(),
            "share_pct": share,
        })
    });

    json!({
        "total": report.total_count,
        "average_per_day": report.average_per_day,
        "best_day": {
            "date": report.best_day.date.to_string(),
            "total": report.best_day.total,
        },
        "top_platform": top,
        "platform_totals": report.platform_totals,
    })
}

/// Convert the daily rows to JSON.
pub fn daily_to_json(report: &AggregateReport) -> Value {
    let payload: Vec<_> = report
        .daily
        .iter()
        .map(|day| {
            json!({
                "date": day.date.to_string(),
                "platforms": day.counts,
                "total": day.total,
                "share_pct": daily_share(day, report),
            })
        })
        .collect();
    json!(payload)
}

/// Convert insights to JSON.
pub fn insights_to_json(insights: &[Insight]) -> Value {
    let payload: Vec<_> = insights
        .iter()
        .map(|insight| {
            let details = match insight.kind {
                InsightKind::Trend {
                    direction,
                    percentage,
                } => json!({
                    "direction": direction.to_string(),
                    "percentage": percentage,
                }),
                InsightKind::PeakHour { hour, count } => json!({
                    "hour": hour,
                    "count": count,
                }),
                InsightKind::DominantPlatform { platform, share } => json!({
                    "platform": platform.key(),
                    "share_pct": share,
                }),
            };

            json!({
                "kind": insight.kind.tag(),
                "icon": insight.icon,
                "title": insight.title,
                "description": insight.description,
                "details": details,
            })
        })
        .collect();
    json!(payload)
}
