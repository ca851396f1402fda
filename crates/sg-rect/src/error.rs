//! Rectangle error types.

use std::fmt;

use thiserror::Error;

/// Which rectangle invariant a pair of intervals breaks.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Violation {
    /// A latitude endpoint lies outside `[-π/2, π/2]`.
    LatitudeOutOfRange,
    /// The longitude interval is not a valid circular interval (an endpoint
    /// outside `[-π, π]`, or `-π` outside the full/empty sentinels).
    InvalidLongitude,
    /// Exactly one of the two intervals is empty.
    MixedEmptiness,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Violation::LatitudeOutOfRange => "latitude outside [-90, 90] degrees",
            Violation::InvalidLongitude => "longitude interval is not a valid circular interval",
            Violation::MixedEmptiness => "latitude and longitude must be both empty or both non-empty",
        };
        f.write_str(s)
    }
}

/// Errors produced by `sg-rect`.
#[derive(Debug, Error)]
pub enum RectError {
    /// Checked construction rejected the intervals.
    #[error("invalid rectangle: {0}")]
    Invalid(Violation),

    #[error("malformed input: unsupported encoding version {0}")]
    UnsupportedVersion(u8),

    #[error("malformed input: expected {expected} bytes, got {got}")]
    Truncated { expected: usize, got: usize },

    /// Decoded bytes were well-formed but describe an invalid rectangle.
    #[error("malformed input: decoded intervals are invalid ({0})")]
    InvalidEncoding(Violation),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl RectError {
    /// `true` for every failure caused by untrusted encoded input, including
    /// a stream that ends before a full encoding was read.
    pub fn is_malformed(&self) -> bool {
        match self {
            RectError::UnsupportedVersion(_)
            | RectError::Truncated { .. }
            | RectError::InvalidEncoding(_) => true,
            RectError::Io(e) => e.kind() == std::io::ErrorKind::UnexpectedEof,
            RectError::Invalid(_) => false,
        }
    }
}

pub type RectResult<T> = Result<T, RectError>;
