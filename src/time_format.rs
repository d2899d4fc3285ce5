use chrono::{DateTime, Utc};
use chrono_tz::Tz;

use crate::error::{Result, ReportError};

/// Civil time zone the report is rendered in unless configured otherwise.
pub const DEFAULT_TIME_ZONE: &str = "Europe/Vienna";
/// Cell value used for instants that are not known.
pub const PLACEHOLDER: &str = "-";

const PATTERN: &str = "%Y-%m-%d %H:%M:%S %Z";

/// Renders instants in a single fixed time zone, e.g. `2024-01-15 13:00:00 CET`.
#[derive(Debug, Clone, Copy)]
pub struct TimestampFormatter {
    zone: Tz,
}

impl TimestampFormatter {
    /// Resolves the named tz database zone.
    pub fn new(zone: &str) -> Result<Self> {
        let zone = zone
            .parse::<Tz>()
            .map_err(|_| ReportError::UnknownTimeZone(zone.to_string()))?;
        Ok(Self { zone })
    }

    pub fn format(&self, instant: Option<DateTime<Utc>>) -> String {
        match instant {
            Some(instant) => instant.with_timezone(&self.zone).format(PATTERN).to_string(),
            None => PLACEHOLDER.to_string(),
        }
    }
}
