//! File descriptors and human-readable byte sizes
//!
//! File rules never touch the filesystem. They read [`FileMeta`] records
//! handed over by whatever accepted the upload.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::foundation::ConfigError;

// ============================================================================
// FILE META
// ============================================================================

/// Name and size of an already-received file.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FileMeta {
    /// File name as supplied by the client, including extension.
    pub name: String,
    /// Size in bytes.
    pub size: u64,
}

impl FileMeta {
    /// Creates a descriptor.
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }

    /// Returns the text after the last `.` in the name, if any.
    #[must_use]
    pub fn extension(&self) -> Option<&str> {
        self.name
            .rsplit_once('.')
            .map(|(_, ext)| ext)
            .filter(|ext| !ext.is_empty())
    }
}

/// Sums the sizes of `files`, saturating instead of overflowing.
#[must_use]
pub fn total_size(files: &[FileMeta]) -> u64 {
    files.iter().fold(0u64, |acc, f| acc.saturating_add(f.size))
}

// ============================================================================
// BYTE SIZE
// ============================================================================

const UNITS: [(&str, u64); 5] = [
    ("B", 1),
    ("KB", 1 << 10),
    ("MB", 1 << 20),
    ("GB", 1 << 30),
    ("TB", 1 << 40),
];

/// A byte count parsed from strings such as `"500KB"` or `"1.5 MB"`.
///
/// Units are case-insensitive and binary (`1KB` = 1024 bytes). A bare number
/// is a byte count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ByteSize(pub u64);

impl ByteSize {
    /// Returns the byte count.
    #[must_use]
    pub const fn bytes(self) -> u64 {
        self.0
    }

    /// Parses a human-readable size.
    pub fn parse(input: &str) -> Result<Self, ConfigError> {
        let invalid = |reason| ConfigError::InvalidSize {
            input: input.to_owned(),
            reason,
        };

        let trimmed = input.trim();
        let split = trimmed
            .find(|c: char| !(c.is_ascii_digit() || c == '.'))
            .unwrap_or(trimmed.len());
        let (number, unit) = trimmed.split_at(split);
        if number.is_empty() {
            return Err(invalid("missing number"));
        }

        let value: f64 = number.parse().map_err(|_| invalid("malformed number"))?;
        let unit = unit.trim();
        let multiplier = if unit.is_empty() {
            1
        } else {
            UNITS
                .iter()
                .find(|(name, _)| name.eq_ignore_ascii_case(unit))
                .map(|(_, m)| *m)
                .ok_or_else(|| invalid("unknown unit"))?
        };

        let bytes = value * multiplier as f64;
        if !bytes.is_finite() || bytes > u64::MAX as f64 {
            return Err(invalid("size too large"));
        }
        Ok(Self(bytes.floor() as u64))
    }
}

impl FromStr for ByteSize {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for ByteSize {
    /// Uses the largest unit that divides the count exactly.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (name, divisor) = UNITS
            .iter()
            .rev()
            .find(|(_, m)| self.0 != 0 && self.0 % m == 0)
            .copied()
            .unwrap_or(UNITS[0]);
        write!(f, "{}{}", self.0 / divisor, name)
    }
}

// ============================================================================
// TESTS
// ============================================================================
