//! Insight generation.
//!
//! Produces up to three observations, always in the order trend, peak hour,
//! dominant platform. An insight whose denominator would be zero is left
//! out instead of reporting NaN or infinity.

use tracing::debug;

use crate::domain::{AggregateReport, Insight, InsightKind, TrendDirection};

use super::summary::{round_one_decimal, top_platform};

/// Derive the insights shown under a report.
#[must_use]
pub fn generate_insights(report: &AggregateReport) -> Vec<Insight> {
    let insights: Vec<Insight> = [trend(report), peak_hour(report), dominant_platform(report)]
        .into_iter()
        .flatten()
        .collect();

    debug!(count = insights.len(), "Generated insights");
    insights
}

fn mean(totals: impl ExactSizeIterator<Item = u32>) -> f64 {
    let len = totals.len();
    let sum: u64 = totals.map(u64::from).sum();
    sum as f64 / len as f64
}

fn trend(report: &AggregateReport) -> Option<Insight> {
    let days = &report.daily;
    if days.len() < 2 {
        return None;
    }

    let (first, second) = days.split_at(days.len() / 2);
    let first_mean = mean(first.iter().map(|d| d.total));
    let second_mean = mean(second.iter().map(|d| d.total));

    if first_mean == 0.0 {
        debug!("Skipping trend insight: first half has no scans");
        return None;
    }

    let direction = if second_mean > first_mean {
        TrendDirection::Growth
    } else {
        TrendDirection::Decline
    };
    let percentage = round_one_decimal(((second_mean - first_mean) / first_mean * 100.0).abs());

    let (icon, word) = match direction {
        TrendDirection::Growth => ("📈", "Growth"),
        TrendDirection::Decline => ("📉", "Decline"),
    };

    Some(Insight {
        kind: InsightKind::Trend {
            direction,
            percentage,
        },
        icon,
        title: "Overall Trend",
        description: format!(
            "{word} of {percentage:.1}% in the second half of the period compared to the first."
        ),
    })
}

fn peak_hour(report: &AggregateReport) -> Option<Insight> {
    let mut hour = 0;
    for (index, &count) in report.hourly.iter().enumerate() {
        if count > report.hourly[hour] {
            hour = index;
        }
    }
    let count = report.hourly[hour];

    Some(Insight {
        kind: InsightKind::PeakHour { hour, count },
        icon: "⏰",
        title: "Peak Hour",
        description: format!(
            "Highest activity recorded at {hour:02}:00, with {count} scans on average."
        ),
    })
}

fn dominant_platform(report: &AggregateReport) -> Option<Insight> {
    let (platform, share) = top_platform(report)?;

    Some(Insight {
        kind: InsightKind::DominantPlatform { platform, share },
        icon: "🏪",
        title: "Dominant Platform",
        description: format!(
            "{} accounts for {share:.1}% of all scans in the period.",
            platform.display_name()
        ),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PlatformId;
    use crate::testkit::report::{hourly_with_peak, report_from_totals, ReportBuilder};

    #[test]
    fn two_day_growth_is_two_hundred_percent() {
        let report = report_from_totals(&[10, 30]);
        let insights = generate_insights(&report);

        assert_eq!(
            insights[0].kind,
            InsightKind::Trend {
                direction: TrendDirection::Growth,
                percentage: 200.0,
            }
        );
        assert_eq!(insights[0].icon, "📈");
        assert!(insights[0].description.starts_with("Growth of 200.0%"));
    }

    #[test]
    fn decline_reports_absolute_change() {
        let report = report_from_totals(&[40, 40, 10, 10]);
        let insights = generate_insights(&report);

        assert_eq!(
            insights[0].kind,
            InsightKind::Trend {
                direction: TrendDirection::Decline,
                percentage: 75.0,
            }
        );
        assert!(insights[0].description.starts_with("Decline of 75.0%"));
    }

    #[test]
    fn flat_period_is_reported_as_decline_of_zero() {
        let report = report_from_totals(&[20, 20]);
        let insights = generate_insights(&report);
        assert_eq!(
            insights[0].kind,
            InsightKind::Trend {
                direction: TrendDirection::Decline,
                percentage: 0.0,
            }
        );
    }

    #[test]
    fn odd_length_puts_middle_day_in_second_half() {
        // first = [10], second = [20, 30] -> 25 vs 10 = +150%
        let report = report_from_totals(&[10, 20, 30]);
        let insights = generate_insights(&report);
        assert_eq!(
            insights[0].kind,
            InsightKind::Trend {
                direction: TrendDirection::Growth,
                percentage: 150.0,
            }
        );
    }

    #[test]
    fn trend_rounds_to_one_decimal() {
        // 10 -> 13.3333 = +33.3%
        let report = report_from_totals(&[10, 10, 10, 20, 10, 10]);
        let insights = generate_insights(&report);
        match insights[0].kind {
            InsightKind::Trend { percentage, .. } => assert_eq!(percentage, 33.3),
            other => panic!("expected trend, got {other:?}"),
        }
    }

    #[test]
    fn single_day_has_no_trend() {
        let report = report_from_totals(&[25]);
        let insights = generate_insights(&report);
        assert_eq!(insights.len(), 2);
        assert_eq!(insights[0].kind.tag(), "peak_hour");
        assert_eq!(insights[1].kind.tag(), "dominant_platform");
    }

    #[test]
    fn zero_first_half_omits_trend() {
        let report = report_from_totals(&[0, 30]);
        let insights = generate_insights(&report);
        assert!(insights.iter().all(|i| i.kind.tag() != "trend"));
        assert_eq!(insights.len(), 2);
    }

    #[test]
    fn zero_total_omits_dominant_platform() {
        let report = report_from_totals(&[0, 0, 0]);
        let insights = generate_insights(&report);

        let tags: Vec<_> = insights.iter().map(|i| i.kind.tag()).collect();
        assert_eq!(tags, vec!["peak_hour"]);
    }

    #[test]
    fn peak_hour_at_fourteen() {
        let report = ReportBuilder::new()
            .totals(&[10])
            .hourly(hourly_with_peak(14, 50))
            .build();
        let insights = generate_insights(&report);
        let peak = insights
            .iter()
            .find(|i| i.kind.tag() == "peak_hour")
            .unwrap();

        assert_eq!(peak.kind, InsightKind::PeakHour { hour: 14, count: 50 });
        assert!(peak.description.contains("14:00"));
        assert!(peak.description.contains("50 scans"));
    }

    #[test]
    fn peak_hour_tie_picks_earliest_and_pads() {
        let mut hourly = [0; 24];
        hourly[3] = 9;
        hourly[20] = 9;
        let report = ReportBuilder::new().totals(&[10]).hourly(hourly).build();
        let insights = generate_insights(&report);
        let peak = insights
            .iter()
            .find(|i| i.kind.tag() == "peak_hour")
            .unwrap();

        assert_eq!(peak.kind, InsightKind::PeakHour { hour: 3, count: 9 });
        assert!(peak.description.contains("03:00"));
    }

    #[test]
    fn all_zero_hourly_peaks_at_midnight() {
        let report = report_from_totals(&[0]);
        let insights = generate_insights(&report);
        assert_eq!(insights[0].kind, InsightKind::PeakHour { hour: 0, count: 0 });
    }

    #[test]
    fn dominant_platform_share() {
        let report = ReportBuilder::new()
            .day(9, 7, 4)
            .day(9, 7, 4)
            .build();
        let insights = generate_insights(&report);
        let dominant = insights.last().unwrap();

        assert_eq!(
            dominant.kind,
            InsightKind::DominantPlatform {
                platform: PlatformId::MercadoLivre,
                share: 45.0,
            }
        );
        assert_eq!(
            dominant.description,
            "Mercado Livre accounts for 45.0% of all scans in the period."
        );
    }

    #[test]
    fn dominant_platform_tie_uses_canonical_order() {
        let report = ReportBuilder::new().day(1, 4, 4).build();
        let insights = generate_insights(&report);
        assert_eq!(
            insights.last().unwrap().kind,
            InsightKind::DominantPlatform {
                platform: PlatformId::Shopee,
                share: 44.4,
            }
        );
    }

    #[test]
    fn insights_come_in_fixed_order() {
        let report = report_from_totals(&[10, 30]);
        let tags: Vec<_> = generate_insights(&report)
            .iter()
            .map(|i| i.kind.tag())
            .collect();
        assert_eq!(tags, vec!["trend", "peak_hour", "dominant_platform"]);
    }
}
