//! Engine boundary errors
//!
//! The algorithms themselves never fail - bad or missing data degrades to
//! "no event" (a single malformed order must not abort a batch report).
//! These errors only guard the caller-facing construction boundary.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    /// Date string did not match YYYY-MM-DD
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    /// Not an IANA timezone name
    #[error("Unknown timezone: {0}")]
    UnknownTimezone(String),

    /// Reporting window with inverted bounds
    #[error("Invalid report range: start {start} is after end {end}")]
    InvalidRange { start: i64, end: i64 },
}
