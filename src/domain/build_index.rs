//! CI build index derived from a build timestamp.
//!
//! The index packs the day count since 2000-01-01 (UTC) into the high 16 bits
//! and half the seconds elapsed since UTC midnight into the low 16 bits, so
//! later builds get lexically larger indices.

use chrono::{DateTime, TimeZone, Timelike, Utc};

use crate::error::{CsemverError, Result};

/// 2000-01-01T00:00:00Z as a Unix timestamp.
const BASE_DATE_SECONDS: i64 = 946_684_800;
const SECONDS_PER_DAY: i64 = 86_400;
/// The day count has to fit the high 16 bits of the index.
const MAX_DAYS: i64 = u16::MAX as i64;

/// Build index for the given instant, as eight upper-case hex digits.
///
/// Only instants from 2000-01-01 up to the end of day 65535 (mid 2179, UTC)
/// can be represented; anything else is a configuration error.
pub fn build_index_from_timestamp<Tz: TimeZone>(timestamp: &DateTime<Tz>) -> Result<String> {
    let utc = timestamp.with_timezone(&Utc);
    let days = (utc.timestamp() - BASE_DATE_SECONDS).div_euclid(SECONDS_PER_DAY);
    if !(0..=MAX_DAYS).contains(&days) {
        return Err(CsemverError::config(format!(
            "Build time {} is outside the representable range 2000-01-01 to day {} after it",
            utc.to_rfc3339(),
            MAX_DAYS
        )));
    }

    let half_seconds = utc.num_seconds_from_midnight() / 2;
    Ok(format!("{:08X}", ((days as u32) << 16) | half_seconds))
}

/// Parse an RFC 3339 timestamp and derive its build index.
pub fn build_index_from_rfc3339(timestamp: &str) -> Result<String> {
    let parsed = DateTime::parse_from_rfc3339(timestamp.trim()).map_err(|e| {
        CsemverError::config(format!("Invalid build time '{}': {}", timestamp, e))
    })?;
    build_index_from_timestamp(&parsed)
}
