//! Duration expressions for settings values.
//!
//! The format is one or more magnitude-plus-unit segments run together:
//! `"300ms"`, `"2h45m"`, `"1.5h"`. Supported units are `ns`, `us` (or
//! `µs`), `ms`, `s`, `m`, and `h`. The bare string `"0"` is the zero
//! duration.

use std::time::Duration;
use thiserror::Error;

/// Duration expression errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DurationError {
    #[error("empty duration string")]
    Empty,
    #[error("missing unit in duration '{0}'")]
    MissingUnit(String),
    #[error("unknown unit '{0}' in duration")]
    UnknownUnit(String),
    #[error("invalid magnitude '{0}' in duration")]
    InvalidMagnitude(String),
    #[error("duration overflows the nanosecond range")]
    Overflow,
}

/// Parse a duration expression into a [`Duration`].
///
/// Negative durations are not representable and fail to parse, as does a
/// magnitude with no unit (other than the literal `"0"`).
pub fn parse_duration(s: &str) -> Result<Duration, DurationError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(DurationError::Empty);
    }
    if s == "0" {
        return Ok(Duration::ZERO);
    }

    let mut rest = s;
    let mut nanos: u64 = 0;
    while !rest.is_empty() {
        let magnitude_end = rest
            .find(|c: char| !c.is_ascii_digit() && c != '.')
            .ok_or_else(|| DurationError::MissingUnit(s.to_string()))?;
        if magnitude_end == 0 {
            return Err(DurationError::InvalidMagnitude(rest.to_string()));
        }
        let (magnitude, tail) = rest.split_at(magnitude_end);
        let unit_end = tail
            .find(|c: char| c.is_ascii_digit() || c == '.')
            .unwrap_or(tail.len());
        let (unit, tail) = tail.split_at(unit_end);
        let scale = unit_nanos(unit).ok_or_else(|| DurationError::UnknownUnit(unit.to_string()))?;
        nanos = add_segment(nanos, magnitude, scale)?;
        rest = tail;
    }
    Ok(Duration::from_nanos(nanos))
}

fn unit_nanos(unit: &str) -> Option<u64> {
    match unit {
        "ns" => Some(1),
        "us" | "µs" => Some(1_000),
        "ms" => Some(1_000_000),
        "s" => Some(1_000_000_000),
        "m" => Some(60_000_000_000),
        "h" => Some(3_600_000_000_000),
        _ => None,
    }
}

/// Add one `<magnitude> * <scale>` segment to the running total.
fn add_segment(total: u64, magnitude: &str, scale: u64) -> Result<u64, DurationError> {
    let add = if let Ok(whole) = magnitude.parse::<u64>() {
        whole.checked_mul(scale).ok_or(DurationError::Overflow)?
    } else {
        let value: f64 = magnitude
            .parse()
            .map_err(|_| DurationError::InvalidMagnitude(magnitude.to_string()))?;
        let scaled = value * scale as f64;
        if !scaled.is_finite() || scaled > u64::MAX as f64 {
            return Err(DurationError::Overflow);
        }
        scaled as u64
    };
    total.checked_add(add).ok_or(DurationError::Overflow)
}
