//! Report domain types: platforms, date ranges, aggregates and insights.

pub mod error;

mod insight;
mod platform;
mod range;
mod report;

pub use error::DomainError;
pub use insight::{Insight, InsightKind, TrendDirection};
pub use platform::{PlatformCounts, PlatformFilter, PlatformId};
pub use range::{is_weekend, DateRange, MAX_RANGE_DAYS};
pub use report::{AggregateReport, DailyRecord, HOURS_PER_DAY};
