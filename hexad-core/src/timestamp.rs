//! UTC timestamps for report generation
//!
//! Second-precision UTC timestamps backed by Unix seconds. Reports embed
//! the generation time both as an ISO 8601 field and in their filename.
//!
//! Design principles (kept from the core's origins):
//! - No external datetime crates
//! - Gregorian proleptic calendar, UTC only
//! - Never panics - all fallible operations return Results

use crate::HexadError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

pub const SECS_PER_MINUTE: i64 = 60;
pub const SECS_PER_HOUR: i64 = 60 * SECS_PER_MINUTE;
pub const SECS_PER_DAY: i64 = 24 * SECS_PER_HOUR;

/// Days from year 0 to 1970-01-01
const UNIX_EPOCH_DAYS: i64 = 719_468;

/// A UTC timestamp with second precision
///
/// Internally stores seconds since Unix epoch (1970-01-01T00:00:00Z).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp {
    secs: i64,
}

impl Timestamp {
    /// Create a timestamp from seconds since Unix epoch
    pub fn from_unix_secs(secs: i64) -> Self {
        Self { secs }
    }

    /// Get current UTC time from the system clock
    pub fn now() -> Self {
        let duration = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default();
        Self {
            secs: duration.as_secs() as i64,
        }
    }

    /// Get seconds since Unix epoch
    pub fn as_unix_secs(&self) -> i64 {
        self.secs
    }

    /// Decompose into year, month, day
    pub fn to_ymd(&self) -> (i32, u32, u32) {
        let days = self.secs.div_euclid(SECS_PER_DAY);
        civil_from_days(days)
    }

    /// Get hour component (0-23)
    pub fn hour(&self) -> u32 {
        let day_secs = self.secs.rem_euclid(SECS_PER_DAY);
        (day_secs / SECS_PER_HOUR) as u32
    }

    /// Get minute component (0-59)
    pub fn minute(&self) -> u32 {
        let day_secs = self.secs.rem_euclid(SECS_PER_DAY);
        ((day_secs % SECS_PER_HOUR) / SECS_PER_MINUTE) as u32
    }

    /// Get second component (0-59)
    pub fn second(&self) -> u32 {
        (self.secs.rem_euclid(SECS_PER_MINUTE)) as u32
    }

    /// Render as ISO 8601: 2026-08-06T14:30:00Z
    pub fn iso8601(&self) -> String {
        let (year, month, day) = self.to_ymd();
        format!(
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
            year,
            month,
            day,
            self.hour(),
            self.minute(),
            self.second()
        )
    }

    /// Render in the compact form used in report filenames: 20260806_143000
    pub fn compact(&self) -> String {
        let (year, month, day) = self.to_ymd();
        format!(
            "{:04}{:02}{:02}_{:02}{:02}{:02}",
            year,
            month,
            day,
            self.hour(),
            self.minute(),
            self.second()
        )
    }

    /// Parse an ISO 8601 timestamp: 2026-08-06T14:30:00Z
    pub fn parse(s: &str) -> Result<Self, HexadError> {
        let s = s.trim().trim_end_matches('Z');
        let (date, time) = match s.split_once('T') {
            Some(pair) => pair,
            None => return Err(HexadError::parse_error(format!("expected ISO 8601 timestamp: {}", s))),
        };

        let date_parts: Vec<&str> = date.split('-').collect();
        let time_parts: Vec<&str> = time.split(':').collect();
        if date_parts.len() != 3 || time_parts.len() != 3 {
            return Err(HexadError::parse_error(format!("expected ISO 8601 timestamp: {}", s)));
        }

        let year: i32 = date_parts[0]
            .parse()
            .map_err(|_| HexadError::parse_error(format!("invalid year: {}", date_parts[0])))?;
        let month: u32 = date_parts[1]
            .parse()
            .map_err(|_| HexadError::parse_error(format!("invalid month: {}", date_parts[1])))?;
        let day: u32 = date_parts[2]
            .parse()
            .map_err(|_| HexadError::parse_error(format!("invalid day: {}", date_parts[2])))?;
        let hour: u32 = time_parts[0]
            .parse()
            .map_err(|_| HexadError::parse_error(format!("invalid hour: {}", time_parts[0])))?;
        let minute: u32 = time_parts[1]
            .parse()
            .map_err(|_| HexadError::parse_error(format!("invalid minute: {}", time_parts[1])))?;
        let second: u32 = time_parts[2]
            .parse()
            .map_err(|_| HexadError::parse_error(format!("invalid second: {}", time_parts[2])))?;

        if month < 1 || month > 12 {
            return Err(HexadError::parse_error(format!("month {} out of range 1-12", month)));
        }
        if day < 1 || day > days_in_month(year, month) {
            return Err(HexadError::parse_error(format!("day {} invalid for {}-{}", day, year, month)));
        }
        if hour > 23 || minute > 59 || second > 59 {
            return Err(HexadError::parse_error(format!("time out of range: {}", time)));
        }

        let days = days_from_civil(year, month, day);
        Ok(Self {
            secs: days * SECS_PER_DAY
                + hour as i64 * SECS_PER_HOUR
                + minute as i64 * SECS_PER_MINUTE
                + second as i64,
        })
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.iso8601())
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.iso8601())
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// Check if a year is a leap year
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

/// Get days in a month
pub fn days_in_month(year: i32, month: u32) -> u32 {
    const DAYS_IN_MONTH: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        m if m >= 1 && m <= 12 => DAYS_IN_MONTH[(m - 1) as usize],
        _ => 0,
    }
}

/// Convert civil date to days since Unix epoch
/// Algorithm from Howard Hinnant: http://howardhinnant.github.io/date_algorithms.html
fn days_from_civil(year: i32, month: u32, day: u32) -> i64 {
    let y = if month <= 2 { year - 1 } else { year } as i64;
    let era = if y >= 0 { y } else { y - 399 } / 400;
    let yoe = (y - era * 400) as u32; // [0, 399]
    let m = month as i64;
    let doy = (153 * (if m > 2 { m - 3 } else { m + 9 }) + 2) / 5 + day as i64 - 1; // [0, 365]
    let doe = yoe as i64 * 365 + yoe as i64 / 4 - yoe as i64 / 100 + doy; // [0, 146096]
    era * 146097 + doe - UNIX_EPOCH_DAYS
}

/// Convert days since Unix epoch to civil date
/// Algorithm from Howard Hinnant: http://howardhinnant.github.io/date_algorithms.html
fn civil_from_days(days: i64) -> (i32, u32, u32) {
    let z = days + UNIX_EPOCH_DAYS;
    let era = if z >= 0 { z } else { z - 146096 } / 146097;
    let doe = (z - era * 146097) as u32; // [0, 146096]
    let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146096) / 365; // [0, 399]
    let y = yoe as i64 + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100); // [0, 365]
    let mp = (5 * doy + 2) / 153; // [0, 11]
    let d = doy - (153 * mp + 2) / 5 + 1; // [1, 31]
    let m = if mp < 10 { mp + 3 } else { mp - 9 }; // [1, 12]
    let year = if m <= 2 { y + 1 } else { y };
    (year as i32, m as u32, d as u32)
}
