//! Domain validation errors.
//!
//! Returned by `try_new` constructors and parsers when a domain invariant is
//! violated.
//!
//! # Examples
//!
//! ```
//! use bipagem::domain::error::DomainError;
//! use bipagem::domain::DateRange;
//! use chrono::NaiveDate;
//!
//! let start = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
//! let end = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
//!
//! assert!(matches!(
//!     DateRange::try_new(start, end),
//!     Err(DomainError::InvalidRange { .. })
//! ));
//! ```

use chrono::NaiveDate;
use thiserror::Error;

/// Errors that occur when domain invariants are violated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The end of a date range precedes its start.
    #[error("invalid date range: end {end} precedes start {start}")]
    InvalidRange {
        /// Requested first day.
        start: NaiveDate,
        /// Requested last day.
        end: NaiveDate,
    },

    /// The range covers more days than a report may span.
    #[error("date range {start} to {end} is too long: at most {max_days} days per report")]
    RangeTooLong {
        start: NaiveDate,
        end: NaiveDate,
        max_days: u32,
    },

    /// Counting back from `end` leaves the supported calendar.
    #[error("cannot go back {days} days from {end}: date out of range")]
    DateOutOfRange { end: NaiveDate, days: u32 },

    /// A platform key outside the supported set.
    #[error("unknown platform '{0}' (expected mercadolivre, shopee, loja_integrada or all)")]
    UnknownPlatform(String),
}
