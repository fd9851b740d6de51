//! Occupancy reports over a window of consecutive dates.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::domain::ports::BookingManager;
use crate::domain::{AllocationError, DateRange};

/// A validated reporting window of at least one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportWindow {
    range: DateRange,
}

impl ReportWindow {
    /// Window covering `days` consecutive dates starting at `from`.
    ///
    /// # Examples
    /// ```
    /// use chrono::NaiveDate;
    /// use hotel_booking::report::ReportWindow;
    ///
    /// let from = NaiveDate::from_ymd_opt(2030, 1, 30).expect("valid date");
    /// let window = ReportWindow::new(from, 3)?;
    /// assert_eq!(window.to(), NaiveDate::from_ymd_opt(2030, 2, 1).expect("valid date"));
    /// # Ok::<(), hotel_booking::domain::AllocationError>(())
    /// ```
    pub fn new(from: NaiveDate, days: u32) -> Result<Self, AllocationError> {
        let span = days.checked_sub(1).ok_or_else(|| {
            AllocationError::invalid_argument("report window must cover at least one day")
        })?;
        let to = from
            .checked_add_days(Days::new(u64::from(span)))
            .ok_or_else(|| {
                AllocationError::invalid_argument(format!(
                    "report window of {days} days from {from} exceeds the calendar"
                ))
            })?;
        Ok(Self {
            range: DateRange::new(from, to),
        })
    }

    /// First reported date.
    #[must_use]
    pub const fn from(&self) -> NaiveDate {
        self.range.start()
    }

    /// Last reported date.
    #[must_use]
    pub const fn to(&self) -> NaiveDate {
        self.range.end()
    }
}

/// Fully-occupied dates within a reporting window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OccupancyReport {
    /// First reported date.
    pub from: NaiveDate,
    /// Last reported date.
    pub to: NaiveDate,
    /// Dates on which every room is held, in chronological order.
    pub fully_occupied: Vec<NaiveDate>,
}

/// Ask `manager` for the fully-occupied dates in `window`.
pub fn build_report(
    manager: &impl BookingManager,
    window: &ReportWindow,
) -> Result<OccupancyReport, AllocationError> {
    let fully_occupied = manager.fully_occupied_dates(window.from(), window.to())?;
    Ok(OccupancyReport {
        from: window.from(),
        to: window.to(),
        fully_occupied,
    })
}

#[cfg(test)]
mod tests {
    //! Window validation and report assembly.

    use mockall::predicate::eq;
    use rstest::rstest;

    use super::*;
    use crate::domain::ErrorCode;
    use crate::domain::ports::{MockBookingManager, RoomSourceError};

    fn date(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2030, m, d).expect("valid fixture date")
    }

    #[rstest]
    #[case::single_day(1, date(3, 1))]
    #[case::fortnight(14, date(3, 14))]
    #[case::month_boundary(32, date(4, 1))]
    fn window_end_is_inclusive(#[case] days: u32, #[case] expected_to: NaiveDate) {
        let window = ReportWindow::new(date(3, 1), days).expect("valid window");
        assert_eq!(window.from(), date(3, 1));
        assert_eq!(window.to(), expected_to);
    }

    #[rstest]
    fn zero_day_window_is_rejected() {
        let err = ReportWindow::new(date(3, 1), 0).expect_err("zero days should fail");
        assert_eq!(err.code(), ErrorCode::InvalidArgument);
    }

    #[rstest]
    fn window_past_the_calendar_is_rejected() {
        let err = ReportWindow::new(NaiveDate::MAX, 2).expect_err("overflow should fail");
        assert_eq!(err.code(), ErrorCode::InvalidArgument);
    }

    #[rstest]
    fn report_carries_window_and_manager_dates() {
        let window = ReportWindow::new(date(3, 1), 5).expect("valid window");
        let mut manager = MockBookingManager::new();
        manager
            .expect_fully_occupied_dates()
            .with(eq(date(3, 1)), eq(date(3, 5)))
            .times(1)
            .returning(|_, _| Ok(vec![date(3, 2), date(3, 3)]));

        let report = build_report(&manager, &window).expect("report should build");

        assert_eq!(
            report,
            OccupancyReport {
                from: date(3, 1),
                to: date(3, 5),
                fully_occupied: vec![date(3, 2), date(3, 3)],
            }
        );
    }

    #[rstest]
    fn manager_failures_propagate() {
        let window = ReportWindow::new(date(3, 1), 1).expect("valid window");
        let mut manager = MockBookingManager::new();
        manager
            .expect_fully_occupied_dates()
            .returning(|_, _| Err(RoomSourceError::connection("offline").into()));

        let err = build_report(&manager, &window).expect_err("report should fail");

        assert_eq!(err.code(), ErrorCode::RoomSourceUnavailable);
    }

    #[rstest]
    fn report_serializes_with_camel_case_fields() {
        let report = OccupancyReport {
            from: date(3, 1),
            to: date(3, 2),
            fully_occupied: vec![date(3, 2)],
        };

        let json = serde_json::to_value(&report).expect("serialize report");

        assert_eq!(
            json,
            serde_json::json!({
                "from": "2030-03-01",
                "to": "2030-03-02",
                "fullyOccupied": ["2030-03-02"],
            })
        );
    }
}
