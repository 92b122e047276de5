//! Byte counts with binary-unit parsing and formatting
//!
//! Sizes are parsed from strings like `10kb` or `3TB` (no space, no decimals)
//! and rendered with the largest fitting unit and two decimal places, e.g.
//! `1536` bytes renders as `1.50KB`.

use std::fmt;
use std::iter::Sum;
use std::ops::AddAssign;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use thiserror::Error;

/// Digits immediately followed by a unit suffix, matched against the whole string.
static SIZE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^([0-9]+)(b|kb|mb|gb|tb|pb)$").expect("SIZE_PATTERN regex is invalid")
});

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SizeError {
    #[error("invalid size '{0}'")]
    InvalidSize(String),
}

/// Binary size units, 1024-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Byte,
    Kilobyte,
    Megabyte,
    Gigabyte,
    Terabyte,
    Petabyte,
}

impl Unit {
    /// Largest unit first, the order used when picking a display unit.
    pub const DESCENDING: [Unit; 6] = [
        Unit::Petabyte,
        Unit::Terabyte,
        Unit::Gigabyte,
        Unit::Megabyte,
        Unit::Kilobyte,
        Unit::Byte,
    ];

    pub fn multiplier(self) -> u64 {
        match self {
            Unit::Byte => 1,
            Unit::Kilobyte => 1 << 10,
            Unit::Megabyte => 1 << 20,
            Unit::Gigabyte => 1 << 30,
            Unit::Terabyte => 1 << 40,
            Unit::Petabyte => 1 << 50,
        }
    }

    pub fn suffix(self) -> &'static str {
        match self {
            Unit::Byte => "B",
            Unit::Kilobyte => "KB",
            Unit::Megabyte => "MB",
            Unit::Gigabyte => "GB",
            Unit::Terabyte => "TB",
            Unit::Petabyte => "PB",
        }
    }

    /// Look up a unit by suffix, ignoring case.
    pub fn from_suffix(suffix: &str) -> Option<Unit> {
        Unit::DESCENDING
            .into_iter()
            .find(|unit| unit.suffix().eq_ignore_ascii_case(suffix))
    }

    /// The largest unit whose multiplier does not exceed `bytes`.
    fn for_bytes(bytes: u64) -> Unit {
        Unit::DESCENDING
            .into_iter()
            .find(|unit| bytes >= unit.multiplier())
            .unwrap_or(Unit::Byte)
    }
}

/// A non-negative byte count.
///
/// `Display` renders the human-readable form; the conversion is lossy, so
/// keep the `Size` around when the exact value matters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Size(u64);

impl Size {
    pub const ZERO: Size = Size(0);

    /// Build a size from a signed byte count, clamping negatives to zero.
    pub fn from_bytes(bytes: i64) -> Self {
        Size(bytes.max(0) as u64)
    }

    pub fn bytes(self) -> u64 {
        self.0
    }

    /// Parse an optional threshold.
    ///
    /// An empty string means "no threshold" and yields `Ok(None)`; anything
    /// else must match the size grammar exactly.
    pub fn parse_threshold(text: &str) -> Result<Option<Size>, SizeError> {
        if text.is_empty() {
            return Ok(None);
        }
        text.parse().map(Some)
    }

    /// Accumulate another size in place. Absent sizes are ignored.
    pub fn add(&mut self, other: Option<Size>) {
        if let Some(other) = other {
            *self += other;
        }
    }
}

impl From<u64> for Size {
    fn from(bytes: u64) -> Self {
        Size(bytes)
    }
}

impl FromStr for Size {
    type Err = SizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SizeError::InvalidSize(s.to_string());

        let captures = SIZE_PATTERN.captures(s).ok_or_else(invalid)?;
        let count: u64 = captures[1].parse().map_err(|_| invalid())?;
        let unit = Unit::from_suffix(&captures[2]).ok_or_else(invalid)?;

        count
            .checked_mul(unit.multiplier())
            .map(Size)
            .ok_or_else(invalid)
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let unit = Unit::for_bytes(self.0);
        let value = self.0 as f64 / unit.multiplier() as f64;
        write!(f, "{:.2}{}", value, unit.suffix())
    }
}

impl AddAssign for Size {
    fn add_assign(&mut self, rhs: Size) {
        self.0 = self.0.saturating_add(rhs.0);
    }
}

impl Sum for Size {
    fn sum<I: Iterator<Item = Size>>(iter: I) -> Self {
        iter.fold(Size::ZERO, |mut acc, size| {
            acc += size;
            acc
        })
    }
}
