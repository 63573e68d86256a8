//! Time string parsing.
//!
//! Parses strings like "02:30:45", "02:30", or "30:45" into whole seconds,
//! tagging each result with the shape it matched.

use chrono::Duration;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::error::{TimeUnit, TsumError};

/// The input shape a time string matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeFormat {
    /// Three fields, read as hours:minutes:seconds.
    HoursMinutesSeconds,
    /// Two fields with a leading value of 60 or more, read as hours:minutes.
    HoursMinutes,
    /// Two fields with a leading value below 60, read as minutes:seconds.
    MinutesSeconds,
}

impl TimeFormat {
    /// Get display name.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::HoursMinutesSeconds => "HH:MM:SS",
            Self::HoursMinutes => "HH:MM",
            Self::MinutesSeconds => "MM:SS",
        }
    }
}

impl std::fmt::Display for TimeFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A successfully parsed time value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedTime {
    /// Total whole seconds the input represents.
    pub seconds: i64,
    /// The shape the input matched.
    pub format: TimeFormat,
}

impl ParsedTime {
    /// Get the value as a Duration.
    #[must_use]
    pub const fn duration(&self) -> Duration {
        Duration::seconds(self.seconds)
    }
}

// Compiled time patterns. Fields are ASCII digits; \d would also match
// other Unicode digits, which the field converter cannot read.
static THREE_FIELD_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]{1,2}):([0-9]{2}):([0-9]{2})$")
        .unwrap_or_else(|e| panic!("Invalid time regex: {e}"))
});

static TWO_FIELD_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]{1,2}):([0-9]{2})$").unwrap_or_else(|e| panic!("Invalid time regex: {e}"))
});

/// Parse a time string into whole seconds.
///
/// Three shapes are accepted. A three-field string reads as
/// hours:minutes:seconds, with a one- or two-digit leading field. A
/// two-field string is disambiguated by its leading value: below 60 it
/// reads as minutes:seconds, otherwise as hours:minutes. Fields are ASCII
/// digits; the second and third must be exactly two of them, so "5:05" is
/// valid and "5:5" is not.
///
/// The disambiguation is deliberate: "23:45" is always 23 minutes 45
/// seconds, never 23 hours 45 minutes. Enter hours as "23:45:00".
///
/// # Examples
///
/// ```
/// use tsum::core::{parse_time, TimeFormat};
///
/// let time = parse_time("02:30:45").unwrap();
/// assert_eq!(time.seconds, 9045);
/// assert_eq!(time.format, TimeFormat::HoursMinutesSeconds);
///
/// let time = parse_time("30:45").unwrap();
/// assert_eq!(time.seconds, 1845);
/// assert_eq!(time.format, TimeFormat::MinutesSeconds);
/// ```
///
/// # Errors
///
/// Returns [`TsumError::InvalidFormat`] when the input matches no accepted
/// shape, [`TsumError::OutOfRange`] when a field breaks the bound for its
/// unit, and [`TsumError::InvalidNumber`] when a captured field fails
/// numeric conversion.
pub fn parse_time(input: &str) -> Result<ParsedTime, TsumError> {
    if let Some(caps) = THREE_FIELD_PATTERN.captures(input) {
        return parse_hours_minutes_seconds(&caps);
    }

    if let Some(caps) = TWO_FIELD_PATTERN.captures(input) {
        return parse_two_field(&caps);
    }

    Err(TsumError::InvalidFormat)
}

/// Parse a three-field match.
///
/// Bounds are checked in minutes, seconds, hours order, so a string that
/// breaks several bounds at once reports minutes first.
fn parse_hours_minutes_seconds(caps: &Captures<'_>) -> Result<ParsedTime, TsumError> {
    let hours = field(caps, 1, TimeUnit::Hours)?;
    let minutes = field(caps, 2, TimeUnit::Minutes)?;
    let seconds = field(caps, 3, TimeUnit::Seconds)?;

    check_bound(minutes, TimeUnit::Minutes)?;
    check_bound(seconds, TimeUnit::Seconds)?;
    check_bound(hours, TimeUnit::Hours)?;

    Ok(ParsedTime {
        seconds: hours * 3600 + minutes * 60 + seconds,
        format: TimeFormat::HoursMinutesSeconds,
    })
}

/// Decide how to read a two-field match.
///
/// A leading value below 60 reads as minutes:seconds; anything else falls
/// through to the hours:minutes branch, where leading values of 60-99 then
/// fail the hours bound.
fn parse_two_field(caps: &Captures<'_>) -> Result<ParsedTime, TsumError> {
    match field(caps, 1, TimeUnit::Hours) {
        Ok(first) if first < 60 => parse_minutes_seconds(caps),
        _ => parse_hours_minutes(caps),
    }
}

/// Parse a two-field match as hours:minutes.
fn parse_hours_minutes(caps: &Captures<'_>) -> Result<ParsedTime, TsumError> {
    let hours = field(caps, 1, TimeUnit::Hours)?;
    let minutes = field(caps, 2, TimeUnit::Minutes)?;

    check_bound(minutes, TimeUnit::Minutes)?;
    check_bound(hours, TimeUnit::Hours)?;

    Ok(ParsedTime {
        seconds: hours * 3600 + minutes * 60,
        format: TimeFormat::HoursMinutes,
    })
}

/// Parse a two-field match as minutes:seconds.
fn parse_minutes_seconds(caps: &Captures<'_>) -> Result<ParsedTime, TsumError> {
    let minutes = field(caps, 1, TimeUnit::Minutes)?;
    let seconds = field(caps, 2, TimeUnit::Seconds)?;

    check_bound(minutes, TimeUnit::Minutes)?;
    check_bound(seconds, TimeUnit::Seconds)?;

    Ok(ParsedTime {
        seconds: minutes * 60 + seconds,
        format: TimeFormat::MinutesSeconds,
    })
}

/// Extract and convert a capture group, naming the field on failure.
fn field(caps: &Captures<'_>, index: usize, unit: TimeUnit) -> Result<i64, TsumError> {
    let text = caps.get(index).map_or("", |m| m.as_str());
    text.parse()
        .map_err(|source| TsumError::InvalidNumber { unit, source })
}

/// Check a field value against the bound for its unit.
fn check_bound(value: i64, unit: TimeUnit) -> Result<(), TsumError> {
    if value >= unit.bound() {
        return Err(TsumError::OutOfRange { unit });
    }
    Ok(())
}
