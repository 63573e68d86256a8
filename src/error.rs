//! Error types for tsum.

use thiserror::Error;

/// The time field an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    /// An hours field (bounded below 24).
    Hours,
    /// A minutes field (bounded below 60).
    Minutes,
    /// A seconds field (bounded below 60).
    Seconds,
}

impl TimeUnit {
    /// The exclusive upper bound for fields of this unit.
    #[must_use]
    pub const fn bound(self) -> i64 {
        match self {
            Self::Hours => 24,
            Self::Minutes | Self::Seconds => 60,
        }
    }
}

impl std::fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Hours => "hours",
            Self::Minutes => "minutes",
            Self::Seconds => "seconds",
        })
    }
}

/// tsum error types
#[derive(Error, Debug)]
pub enum TsumError {
    /// The input matched none of the accepted time shapes.
    #[error("invalid time format. Use HH:MM:SS, HH:MM, or MM:SS (e.g., 02:30:45, 02:30, 30:45)")]
    InvalidFormat,

    /// A field value broke the bound for its unit.
    #[error("{} must be less than {}", .unit, .unit.bound())]
    OutOfRange {
        /// The unit whose bound was broken.
        unit: TimeUnit,
    },

    /// A captured field failed numeric conversion.
    #[error("invalid {}: {}", .unit, .source)]
    InvalidNumber {
        /// The field that failed to convert.
        unit: TimeUnit,
        /// The underlying conversion error.
        source: std::num::ParseIntError,
    },

    /// A terminal read or flush failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
