//! Structured date and time values
//!
//! [`Ymd`] and [`Hms`] hold independently nullable components, as produced by
//! split date/time inputs where the user may have filled in only some boxes.
//! `None` means "not supplied", not zero.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::foundation::ConfigError;

/// Year every day component is checked in.
///
/// A leap year, so 29 February is always accepted. The supplied year is
/// only range-checked on its own.
pub const REFERENCE_YEAR: i32 = 2020;

// ============================================================================
// YMD
// ============================================================================

/// A date split into nullable year, month and day components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Ymd {
    /// Calendar year, `1..=9999` when valid.
    pub year: Option<i32>,
    /// Month of year, `1..=12` when valid.
    pub month: Option<i32>,
    /// Day of month.
    #[serde(alias = "date")]
    pub day: Option<i32>,
}

impl Ymd {
    /// Creates a record from its components.
    #[must_use]
    pub const fn new(year: Option<i32>, month: Option<i32>, day: Option<i32>) -> Self {
        Self { year, month, day }
    }

    /// A record with every component supplied.
    #[must_use]
    pub const fn full(year: i32, month: i32, day: i32) -> Self {
        Self::new(Some(year), Some(month), Some(day))
    }

    /// Returns the component selected by `part`.
    #[must_use]
    pub const fn get(&self, part: YmdPart) -> Option<i32> {
        match part {
            YmdPart::Year => self.year,
            YmdPart::Month => self.month,
            YmdPart::Day => self.day,
        }
    }

    /// Builds the calendar date the day component is checked against.
    ///
    /// An absent month counts as January and the year is always
    /// [`REFERENCE_YEAR`]. Returns `None` when the day does not exist in
    /// that month, including day-of-month overflow such as 31 April.
    #[must_use]
    pub fn day_in_month(&self, day: i32) -> Option<NaiveDate> {
        let month_u = u32::try_from(self.month.unwrap_or(1)).ok()?;
        let day_u = u32::try_from(day).ok()?;
        NaiveDate::from_ymd_opt(REFERENCE_YEAR, month_u, day_u)
            .filter(|date| date.month() == month_u)
    }

    /// Converts to a calendar date when all components are supplied and valid.
    #[must_use]
    pub fn to_date(&self) -> Option<NaiveDate> {
        let (year, month, day) = (self.year?, self.month?, self.day?);
        NaiveDate::from_ymd_opt(year, u32::try_from(month).ok()?, u32::try_from(day).ok()?)
    }
}

impl From<NaiveDate> for Ymd {
    fn from(date: NaiveDate) -> Self {
        Self::full(date.year(), date.month() as i32, date.day() as i32)
    }
}

/// A component of [`Ymd`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum YmdPart {
    /// `y`
    #[serde(rename = "y")]
    Year,
    /// `m`
    #[serde(rename = "m")]
    Month,
    /// `d`
    #[serde(rename = "d")]
    Day,
}

impl YmdPart {
    /// All components, in checking order.
    pub const ALL: [Self; 3] = [Self::Year, Self::Month, Self::Day];
}

impl FromStr for YmdPart {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "y" => Ok(Self::Year),
            "m" => Ok(Self::Month),
            "d" => Ok(Self::Day),
            other => Err(ConfigError::Parse(format!("unknown date component '{other}'"))),
        }
    }
}

impl fmt::Display for YmdPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Year => "y",
            Self::Month => "m",
            Self::Day => "d",
        })
    }
}

// ============================================================================
// HMS
// ============================================================================

/// A time of day split into nullable hour, minute and second components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Hms {
    /// Hour, `0..=23` when valid.
    pub hour: Option<i32>,
    /// Minute, `0..=59` when valid.
    pub minute: Option<i32>,
    /// Second, `0..=59` when valid.
    pub second: Option<i32>,
}

impl Hms {
    /// Creates a record from its components.
    #[must_use]
    pub const fn new(hour: Option<i32>, minute: Option<i32>, second: Option<i32>) -> Self {
        Self {
            hour,
            minute,
            second,
        }
    }

    /// A record with every component supplied.
    #[must_use]
    pub const fn full(hour: i32, minute: i32, second: i32) -> Self {
        Self::new(Some(hour), Some(minute), Some(second))
    }

    /// Returns the component selected by `part`.
    #[must_use]
    pub const fn get(&self, part: HmsPart) -> Option<i32> {
        match part {
            HmsPart::Hour => self.hour,
            HmsPart::Minute => self.minute,
            HmsPart::Second => self.second,
        }
    }

    /// Converts to a time of day when all components are supplied and valid.
    #[must_use]
    pub fn to_time(&self) -> Option<NaiveTime> {
        let (h, m, s) = (self.hour?, self.minute?, self.second?);
        NaiveTime::from_hms_opt(
            u32::try_from(h).ok()?,
            u32::try_from(m).ok()?,
            u32::try_from(s).ok()?,
        )
    }
}

impl From<NaiveTime> for Hms {
    fn from(time: NaiveTime) -> Self {
        Self::full(time.hour() as i32, time.minute() as i32, time.second() as i32)
    }
}

/// A component of [`Hms`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum HmsPart {
    /// `h`
    #[serde(rename = "h")]
    Hour,
    /// `m`
    #[serde(rename = "m")]
    Minute,
    /// `s`
    #[serde(rename = "s")]
    Second,
}

impl HmsPart {
    /// All components, in checking order.
    pub const ALL: [Self; 3] = [Self::Hour, Self::Minute, Self::Second];

    /// Largest valid value of this component.
    #[must_use]
    pub const fn max(self) -> i32 {
        match self {
            Self::Hour => 23,
            Self::Minute | Self::Second => 59,
        }
    }
}

impl FromStr for HmsPart {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "h" => Ok(Self::Hour),
            "m" => Ok(Self::Minute),
            "s" => Ok(Self::Second),
            other => Err(ConfigError::Parse(format!("unknown time component '{other}'"))),
        }
    }
}

impl fmt::Display for HmsPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Hour => "h",
            Self::Minute => "m",
            Self::Second => "s",
        })
    }
}

// ============================================================================
// TESTS
// ============================================================================
