//! # Temporal Types — UTC-Only Timestamps
//!
//! Defines [`Timestamp`], a UTC-only timestamp with seconds precision,
//! used for sequence creation and expiry dates.
//!
//! ## Design
//!
//! Expiry comparison between two peers must not depend on local timezone
//! or sub-second jitter. Timestamps are therefore always UTC, truncated
//! to whole seconds, and rendered as RFC 3339 with a `Z` suffix
//! (`YYYY-MM-DDTHH:MM:SSZ`). Inputs carrying an offset are converted to
//! UTC at construction; there is no local-time representation anywhere
//! in the stack.

use chrono::{DateTime, Duration, Timelike, Utc};
use serde::{Deserialize, Serialize};

use crate::error::PlinkError;

/// A UTC timestamp, truncated to seconds precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Current UTC time, truncated to seconds.
    pub fn now() -> Self {
        Self(truncate_to_seconds(Utc::now()))
    }

    /// From a `chrono::DateTime<Utc>`, truncating sub-seconds.
    pub fn from_utc(dt: DateTime<Utc>) -> Self {
        Self(truncate_to_seconds(dt))
    }

    /// From a Unix epoch timestamp in seconds.
    pub fn from_epoch_secs(secs: i64) -> Result<Self, PlinkError> {
        let dt = DateTime::from_timestamp(secs, 0)
            .ok_or_else(|| PlinkError::InvalidTimestamp(format!("epoch out of range: {secs}")))?;
        Ok(Self(dt))
    }

    /// Parse an RFC 3339 string, converting any offset to UTC.
    pub fn parse(s: &str) -> Result<Self, PlinkError> {
        let dt = DateTime::parse_from_rfc3339(s)
            .map_err(|e| PlinkError::InvalidTimestamp(format!("{s:?}: {e}")))?;
        Ok(Self(truncate_to_seconds(dt.with_timezone(&Utc))))
    }

    /// This timestamp shifted forward by `ttl`.
    ///
    /// Saturates at the representable maximum rather than wrapping, so a
    /// pathological TTL cannot produce an expiry in the past.
    pub fn plus(&self, ttl: Duration) -> Self {
        match self.0.checked_add_signed(ttl) {
            Some(dt) => Self(truncate_to_seconds(dt)),
            None => Self(truncate_to_seconds(DateTime::<Utc>::MAX_UTC)),
        }
    }

    /// Unix epoch timestamp in seconds.
    pub fn epoch_secs(&self) -> i64 {
        self.0.timestamp()
    }

    /// Access the inner `DateTime<Utc>`.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Render as RFC 3339 with Z suffix (e.g. `2026-01-15T12:00:00Z`).
    pub fn to_rfc3339(&self) -> String {
        self.0.format("%Y-%m-%dT%H:%M:%SZ").to_string()
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_rfc3339())
    }
}

/// Truncate a `DateTime<Utc>` to seconds precision.
fn truncate_to_seconds(dt: DateTime<Utc>) -> DateTime<Utc> {
    dt.with_nanosecond(0).unwrap_or(dt)
}
