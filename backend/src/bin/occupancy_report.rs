//! Report the dates on which every room in an inventory snapshot is booked.
//!
//! # Examples
//! ```sh
//! cargo run --manifest-path backend/Cargo.toml --bin occupancy-report -- --from 2030-07-01 --days 14
//! ```
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

use std::ffi::OsString;
use std::fmt::Display;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use hotel_booking::config::ReportSettings;
use hotel_booking::domain::AllocationEngine;
use hotel_booking::outbound::snapshot::{InventorySnapshot, load_snapshot};
use hotel_booking::report::{OccupancyReport, ReportWindow, build_report};
use mockable::{Clock, DefaultClock};
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

/// `occupancy-report` command arguments.
///
/// Flags override values loaded from `OCCUPANCY_*` environment variables and
/// configuration files.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "occupancy-report",
    about = "Print the dates on which every room in an inventory snapshot is booked",
    version
)]
struct CliArgs {
    /// Path to a JSON inventory snapshot.
    #[arg(long = "snapshot", value_name = "path")]
    snapshot_path: Option<PathBuf>,
    /// First reported date. Defaults to tomorrow.
    #[arg(long, value_name = "YYYY-MM-DD")]
    from: Option<String>,
    /// Number of consecutive days to report.
    #[arg(long, value_name = "count")]
    days: Option<u32>,
}

fn main() -> io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .with_writer(io::stderr)
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let args = CliArgs::parse();
    let settings = ReportSettings::load_from_iter([OsString::from("occupancy-report")])
        .map_err(|error| io::Error::other(format!("load settings: {error}")))?
        .with_overrides(args.snapshot_path, args.from, args.days);

    let report = run(&settings, Arc::new(DefaultClock))?;
    let json = serde_json::to_string_pretty(&report)
        .map_err(|error| io::Error::other(format!("encode report: {error}")))?;
    writeln!(io::stdout().lock(), "{json}")
}

fn run(settings: &ReportSettings, clock: Arc<dyn Clock>) -> io::Result<OccupancyReport> {
    let today = clock.local().date_naive();
    let from = settings.start_date(today).map_err(invalid_input)?;
    let days = settings.days().map_err(invalid_input)?;
    let window = ReportWindow::new(from, days).map_err(invalid_input)?;

    let path = settings.snapshot_path();
    let (rooms, bookings) = load_snapshot(&path)
        .and_then(InventorySnapshot::into_repositories)
        .map_err(|error| io::Error::other(format!("load inventory: {error}")))?;
    info!(
        path = %path.display(),
        from = %window.from(),
        to = %window.to(),
        "building occupancy report"
    );

    let engine = AllocationEngine::new(Arc::new(rooms), Arc::new(bookings), clock);
    build_report(&engine, &window)
        .map_err(|error| io::Error::other(format!("build report: {error}")))
}

fn invalid_input(error: impl Display) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidInput, error.to_string())
}

#[cfg(test)]
mod tests {
    //! Unit tests for report wiring.

    use std::path::PathBuf;

    use chrono::NaiveDate;
    use hotel_booking::test_support::clock::FixtureClock;
    use hotel_booking::test_support::snapshot_files::write_snapshot;
    use rstest::rstest;

    use super::*;

    fn july(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2030, 7, d).expect("valid fixture date")
    }

    fn bundled_snapshot() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("fixtures")
            .join("inventory.json")
    }

    fn settings(from: Option<&str>, days: u32) -> ReportSettings {
        ReportSettings {
            snapshot_path: Some(bundled_snapshot()),
            from: from.map(str::to_owned),
            days,
        }
    }

    #[rstest]
    fn bundled_snapshot_reports_days_with_every_room_taken() {
        let clock = FixtureClock::shared(july(1));

        let report = run(&settings(Some("2030-07-01"), 14), clock).expect("report should build");

        assert_eq!(report.from, july(1));
        assert_eq!(report.to, july(14));
        assert_eq!(report.fully_occupied, vec![july(8), july(9)]);
    }

    #[rstest]
    fn window_defaults_to_starting_tomorrow() {
        let clock = FixtureClock::shared(july(7));

        let report = run(&settings(None, 3), clock).expect("report should build");

        assert_eq!(report.from, july(8));
        assert_eq!(report.fully_occupied, vec![july(8), july(9)]);
    }

    #[rstest]
    fn zero_day_window_is_invalid_input() {
        let err = run(&settings(None, 0), FixtureClock::shared(july(1)))
            .expect_err("zero days should fail");
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }

    #[rstest]
    fn unreadable_snapshot_is_reported() {
        let file = write_snapshot("not json").expect("write snapshot");
        let broken = ReportSettings {
            snapshot_path: Some(file.path().to_path_buf()),
            ..settings(None, 1)
        };

        let err = run(&broken, FixtureClock::shared(july(1))).expect_err("load should fail");

        assert!(err.to_string().starts_with("load inventory:"));
    }
}
