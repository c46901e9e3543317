//! Bipagem - scan report synthesis and insights.
//!
//! Builds the reporting view of a barcode scan-logging ("bipagem") back
//! office: a per-day, per-hour and per-platform breakdown of scans over a
//! date range, plus a handful of human-readable insights about it.
//!
//! Report data is synthetic. Counts are drawn from an injectable
//! [`RandomSource`](port::RandomSource), so a seeded source reproduces a
//! report exactly.
//!
//! # Modules
//!
//! - [`domain`] - Platforms, date ranges, aggregates and insights
//! - [`port`] - The random source trait
//! - [`application`] - Report synthesis, insight generation, CSV export
//! - [`adapter`] - `rand`-backed sources and the command-line front end
//! - [`infrastructure`] - Configuration loading and logging setup
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```
//! use bipagem::adapter::outbound::random::SeededRandom;
//! use bipagem::application::report::{generate_insights, ReportSynthesizer};
//! use chrono::NaiveDate;
//!
//! let start = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
//! let end = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
//!
//! let mut synthesizer = ReportSynthesizer::new(SeededRandom::new(42));
//! let report = synthesizer.synthesize_between(start, end).unwrap();
//! assert_eq!(report.daily.len(), 7);
//!
//! let insights = generate_insights(&report);
//! assert!(!insights.is_empty());
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
