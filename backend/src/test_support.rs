//! Test utilities for the hotel-booking crate.
//!
//! This module provides shared helpers for both unit tests (in `src/`) and
//! integration tests (in `tests/`). It is only compiled for tests or when the
//! `test-support` feature is enabled.

pub mod clock {
    //! Deterministic clocks pinned to a calendar date.

    use std::sync::Arc;

    use chrono::{DateTime, Local, NaiveDate, NaiveTime, TimeDelta, TimeZone, Utc};
    use mockable::Clock;

    const NOON: NaiveTime = match NaiveTime::from_hms_opt(12, 0, 0) {
        Some(time) => time,
        None => NaiveTime::MIN,
    };

    /// Clock whose local date is always `today`.
    ///
    /// The reported instant is local noon so the local calendar date matches
    /// `today` regardless of the host timezone.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chrono::NaiveDate;
    /// use hotel_booking::test_support::clock::FixtureClock;
    /// use mockable::Clock;
    ///
    /// let today = NaiveDate::from_ymd_opt(2030, 1, 15).expect("valid date");
    /// assert_eq!(FixtureClock::new(today).local().date_naive(), today);
    /// ```
    #[derive(Debug, Clone, Copy)]
    pub struct FixtureClock {
        today: NaiveDate,
    }

    impl FixtureClock {
        /// Pin the clock to `today`.
        #[must_use]
        pub const fn new(today: NaiveDate) -> Self {
            Self { today }
        }

        /// Pin the clock to `today` and erase its type for service wiring.
        #[must_use]
        pub fn shared(today: NaiveDate) -> Arc<dyn Clock> {
            Arc::new(Self::new(today))
        }

        /// The pinned date shifted by `offset` days.
        #[must_use]
        pub fn days_from_today(&self, offset: i64) -> NaiveDate {
            self.today + TimeDelta::days(offset)
        }
    }

    impl Clock for FixtureClock {
        fn local(&self) -> DateTime<Local> {
            let noon = self.today.and_time(NOON);
            Local
                .from_local_datetime(&noon)
                .earliest()
                .unwrap_or_else(|| Local.from_utc_datetime(&noon))
        }

        fn utc(&self) -> DateTime<Utc> {
            self.local().with_timezone(&Utc)
        }
    }
}

pub mod snapshot_files {
    //! Temporary inventory snapshot files for loader and CLI tests.

    use std::io::{self, Write};

    use tempfile::NamedTempFile;

    /// Write `contents` to a fresh temporary file.
    ///
    /// The file is removed when the returned handle is dropped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hotel_booking::test_support::snapshot_files::write_snapshot;
    ///
    /// let file = write_snapshot(r#"{"rooms": [], "bookings": []}"#)?;
    /// assert!(file.path().exists());
    /// # Ok::<(), std::io::Error>(())
    /// ```
    pub fn write_snapshot(contents: &str) -> io::Result<NamedTempFile> {
        let mut file = NamedTempFile::new()?;
        file.write_all(contents.as_bytes())?;
        file.flush()?;
        Ok(file)
    }
}
