//! Inclusive calendar date ranges for report queries.

use chrono::{Datelike, Days, NaiveDate, Weekday};

use super::error::DomainError;

/// Longest range a report may cover, roughly a century.
///
/// Keeps every period total well inside `u32`.
pub const MAX_RANGE_DAYS: u32 = 36_600;

/// A validated, inclusive range of calendar days.
///
/// `start <= end` always holds; use [`DateRange::try_new`] to build one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Build a range, rejecting an end date that precedes the start.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidRange`] when `end < start` and
    /// [`DomainError::RangeTooLong`] when the range spans more than
    /// [`MAX_RANGE_DAYS`] days.
    pub fn try_new(start: NaiveDate, end: NaiveDate) -> Result<Self, DomainError> {
        if end < start {
            return Err(DomainError::InvalidRange { start, end });
        }
        if (end - start).num_days() >= i64::from(MAX_RANGE_DAYS) {
            return Err(DomainError::RangeTooLong {
                start,
                end,
                max_days: MAX_RANGE_DAYS,
            });
        }
        Ok(Self { start, end })
    }

    /// A single-day range.
    #[must_use]
    pub const fn single(day: NaiveDate) -> Self {
        Self {
            start: day,
            end: day,
        }
    }

    /// The range `[today - days, today]`.
    ///
    /// The dashboard opens on `last_days(today, 7)`, which spans eight
    /// calendar days.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::DateOutOfRange`] when the start would fall
    /// before the earliest representable date, and whatever
    /// [`DateRange::try_new`] rejects.
    pub fn last_days(today: NaiveDate, days: u32) -> Result<Self, DomainError> {
        let start = today
            .checked_sub_days(Days::new(u64::from(days)))
            .ok_or(DomainError::DateOutOfRange { end: today, days })?;
        Self::try_new(start, today)
    }

    #[must_use]
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    #[must_use]
    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    /// Number of calendar days covered, both ends included.
    #[must_use]
    pub fn day_count(&self) -> u32 {
        // At most MAX_RANGE_DAYS.
        ((self.end - self.start).num_days() + 1) as u32
    }

    /// Each day of the range in chronological order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |day| *day <= end)
    }
}

/// Whether `day` falls on Saturday or Sunday.
#[must_use]
pub fn is_weekend(day: NaiveDate) -> bool {
    matches!(day.weekday(), Weekday::Sat | Weekday::Sun)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_try_new_rejects_inverted_range() {
        let err = DateRange::try_new(date(2024, 5, 2), date(2024, 5, 1)).unwrap_err();
        assert_eq!(
            err,
            DomainError::InvalidRange {
                start: date(2024, 5, 2),
                end: date(2024, 5, 1),
            }
        );
    }

    #[test]
    fn test_single_day_range_counts_one_day() {
        let range = DateRange::try_new(date(2024, 5, 1), date(2024, 5, 1)).unwrap();
        assert_eq!(range.day_count(), 1);
        assert_eq!(range.days().collect::<Vec<_>>(), vec![date(2024, 5, 1)]);
    }

    #[test]
    fn test_day_count_is_inclusive() {
        let range = DateRange::try_new(date(2024, 1, 1), date(2024, 1, 31)).unwrap();
        assert_eq!(range.day_count(), 31);
        assert_eq!(range.days().count(), 31);
    }

    #[test]
    fn test_days_cross_month_and_leap_day() {
        let range = DateRange::try_new(date(2024, 2, 28), date(2024, 3, 1)).unwrap();
        let days: Vec<_> = range.days().collect();
        assert_eq!(days, vec![date(2024, 2, 28), date(2024, 2, 29), date(2024, 3, 1)]);
    }

    #[test]
    fn test_last_days_spans_days_plus_one() {
        let range = DateRange::last_days(date(2024, 6, 15), 7).unwrap();
        assert_eq!(range.start(), date(2024, 6, 8));
        assert_eq!(range.end(), date(2024, 6, 15));
        assert_eq!(range.day_count(), 8);
    }

    #[test]
    fn test_last_zero_days_is_today() {
        let today = date(2024, 6, 15);
        assert_eq!(DateRange::last_days(today, 0).unwrap(), DateRange::single(today));
    }

    #[test]
    fn test_last_days_before_min_date_is_an_error() {
        let err = DateRange::last_days(NaiveDate::MIN, 7).unwrap_err();
        assert_eq!(
            err,
            DomainError::DateOutOfRange {
                end: NaiveDate::MIN,
                days: 7,
            }
        );
        assert_eq!(
            DateRange::last_days(NaiveDate::MIN, 0).unwrap(),
            DateRange::single(NaiveDate::MIN)
        );
    }

    #[test]
    fn test_range_length_is_capped() {
        let start = date(2000, 1, 1);
        let longest = start + Days::new(u64::from(MAX_RANGE_DAYS - 1));
        assert_eq!(
            DateRange::try_new(start, longest).unwrap().day_count(),
            MAX_RANGE_DAYS
        );

        let err = DateRange::try_new(start, longest + Days::new(1)).unwrap_err();
        assert!(matches!(
            err,
            DomainError::RangeTooLong { max_days, .. } if max_days == MAX_RANGE_DAYS
        ));
    }

    #[test]
    fn test_full_calendar_span_is_rejected() {
        let err = DateRange::try_new(NaiveDate::MIN, NaiveDate::MAX).unwrap_err();
        assert!(matches!(err, DomainError::RangeTooLong { .. }));
    }

    #[test]
    fn test_weekend_detection() {
        // 2024-06-15 is a Saturday.
        assert!(is_weekend(date(2024, 6, 15)));
        assert!(is_weekend(date(2024, 6, 16)));
        assert!(!is_weekend(date(2024, 6, 17)));
        assert!(!is_weekend(date(2024, 6, 14)));
    }
}
