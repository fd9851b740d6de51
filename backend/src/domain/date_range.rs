//! Inclusive calendar date ranges.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Inclusive range of calendar dates `[start, end]`.
///
/// The range carries no time-of-day semantics. A range whose `end` precedes
/// its `start` is representable but contains no dates.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use hotel_booking::domain::DateRange;
///
/// let day = |d| NaiveDate::from_ymd_opt(2024, 1, d).expect("valid date");
/// let stay = DateRange::new(day(1), day(3));
/// assert!(stay.contains(day(3)));
/// assert_eq!(stay.days().count(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Build a range from its first and last date.
    #[must_use]
    pub const fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// First date of the range.
    #[must_use]
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    /// Last date of the range.
    #[must_use]
    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    /// True when `end` precedes `start`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.end < self.start
    }

    /// True when `date` falls within `[start, end]`.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// True when both ranges share at least one date.
    ///
    /// `[a1, a2]` and `[b1, b2]` overlap iff `a1 <= b2 && b1 <= a2`.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// Iterate over every date in the range in chronological order.
    ///
    /// The last yielded date is `end`, including `NaiveDate::MAX`.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + use<> {
        let end = self.end;
        let first = (!self.is_empty()).then_some(self.start);
        std::iter::successors(first, move |day| day.succ_opt().filter(|next| *next <= end))
    }
}
