//! Occupancy report configuration loaded via OrthoConfig.

use std::path::PathBuf;

use chrono::{Days, NaiveDate};
use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;

const DEFAULT_WINDOW_DAYS: u32 = 14;

fn default_snapshot_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join("inventory.json")
}

fn parse_start_date(raw: &str) -> Result<NaiveDate, SettingsError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|source| SettingsError::InvalidDate {
        value: raw.to_owned(),
        source,
    })
}

/// Problems with configured report values.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// `from` is not an ISO 8601 calendar date.
    #[error("invalid report start date '{value}': {source}")]
    InvalidDate {
        /// Raw configured value.
        value: String,
        /// Parser failure.
        #[source]
        source: chrono::ParseError,
    },
    /// `days` is zero.
    #[error("report window must cover at least one day")]
    EmptyWindow,
    /// The default start date cannot be represented.
    #[error("no calendar date follows {today}")]
    EndOfCalendar {
        /// Date the default was derived from.
        today: NaiveDate,
    },
}

/// Configuration values controlling the occupancy report.
///
/// `days` always carries a value so the merged configuration document is
/// never empty, even with no environment variables or files present.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "OCCUPANCY")]
pub struct ReportSettings {
    /// JSON inventory snapshot to load.
    pub snapshot_path: Option<PathBuf>,
    /// First reported date (`YYYY-MM-DD`).
    pub from: Option<String>,
    /// Number of consecutive days to report.
    #[ortho_config(default = 14)]
    pub days: u32,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            snapshot_path: None,
            from: None,
            days: DEFAULT_WINDOW_DAYS,
        }
    }
}

impl ReportSettings {
    /// Return the configured snapshot path, falling back to the bundled fixture.
    #[must_use]
    pub fn snapshot_path(&self) -> PathBuf {
        self.snapshot_path
            .clone()
            .unwrap_or_else(default_snapshot_path)
    }

    /// Return the configured window length, rejecting an empty window.
    pub const fn days(&self) -> Result<u32, SettingsError> {
        match self.days {
            0 => Err(SettingsError::EmptyWindow),
            days => Ok(days),
        }
    }

    /// Return the configured start date, falling back to the day after `today`.
    pub fn start_date(&self, today: NaiveDate) -> Result<NaiveDate, SettingsError> {
        self.from.as_deref().map_or_else(
            || {
                today
                    .checked_add_days(Days::new(1))
                    .ok_or(SettingsError::EndOfCalendar { today })
            },
            parse_start_date,
        )
    }

    /// Replace configured values with any explicitly supplied overrides.
    #[must_use]
    pub fn with_overrides(
        self,
        snapshot_path: Option<PathBuf>,
        from: Option<String>,
        days: Option<u32>,
    ) -> Self {
        Self {
            snapshot_path: snapshot_path.or(self.snapshot_path),
            from: from.or(self.from),
            days: days.unwrap_or(self.days),
        }
    }
}
