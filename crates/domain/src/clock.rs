// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! `HH:MM` values carried by flight templates.
//!
//! Start times and durations arrive from the page as `HH:MM` strings. They
//! are parsed once, here, and travel through the scheduler as typed values.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Largest hour accepted for a time of day or a duration.
pub const MAX_HOURS: u8 = 23;
/// Largest minute accepted for a time of day or a duration.
pub const MAX_MINUTES: u8 = 59;

/// Splits an `HH:MM` string into its hour and minute fields.
///
/// Each field must be one or two ASCII digits.
fn split_hh_mm(value: &str) -> Option<(u8, u8)> {
    let (hours, minutes) = value.trim().split_once(':')?;
    let is_field = |s: &str| (1..=2).contains(&s.len()) && s.bytes().all(|b| b.is_ascii_digit());
    if !is_field(hours) || !is_field(minutes) {
        return None;
    }
    Some((hours.parse().ok()?, minutes.parse().ok()?))
}

/// A time of day with minute precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClockTime {
    hour: u8,
    minute: u8,
}

impl ClockTime {
    /// Creates a new `ClockTime`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidClockTime` if the hour is above 23 or the
    /// minute is above 59.
    pub fn new(hour: u8, minute: u8) -> Result<Self, DomainError> {
        if hour > MAX_HOURS || minute > MAX_MINUTES {
            return Err(DomainError::InvalidClockTime(format!(
                "{hour:02}:{minute:02}"
            )));
        }
        Ok(Self { hour, minute })
    }

    /// Returns the hour field.
    #[must_use]
    pub const fn hour(&self) -> u8 {
        self.hour
    }

    /// Returns the minute field.
    #[must_use]
    pub const fn minute(&self) -> u8 {
        self.minute
    }

    /// Converts to a `time::Time`.
    #[must_use]
    pub fn to_time(&self) -> time::Time {
        // Fields are range-checked at construction.
        time::Time::from_hms(self.hour, self.minute, 0).unwrap_or(time::Time::MIDNIGHT)
    }
}

impl FromStr for ClockTime {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (hour, minute) =
            split_hh_mm(s).ok_or_else(|| DomainError::InvalidClockTime(s.to_string()))?;
        Self::new(hour, minute).map_err(|_| DomainError::InvalidClockTime(s.to_string()))
    }
}

impl TryFrom<String> for ClockTime {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ClockTime> for String {
    fn from(value: ClockTime) -> Self {
        value.to_string()
    }
}

impl std::fmt::Display for ClockTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// The length of a timeslot, as hours and minutes.
///
/// A zero-length duration cannot be constructed, so a span built from a
/// `SlotDuration` always ends after it starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SlotDuration {
    hours: u8,
    minutes: u8,
}

impl SlotDuration {
    /// Creates a new `SlotDuration`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The hours are above 23 or the minutes above 59
    /// - Both fields are zero
    pub fn new(hours: u8, minutes: u8) -> Result<Self, DomainError> {
        if hours > MAX_HOURS || minutes > MAX_MINUTES {
            return Err(DomainError::InvalidDuration(format!(
                "{hours:02}:{minutes:02}"
            )));
        }
        if hours == 0 && minutes == 0 {
            return Err(DomainError::EmptyDuration);
        }
        Ok(Self { hours, minutes })
    }

    /// Returns the hours field.
    #[must_use]
    pub const fn hours(&self) -> u8 {
        self.hours
    }

    /// Returns the minutes field.
    #[must_use]
    pub const fn minutes(&self) -> u8 {
        self.minutes
    }

    /// Returns the total length in minutes.
    #[must_use]
    pub fn total_minutes(&self) -> i64 {
        i64::from(self.hours) * 60 + i64::from(self.minutes)
    }

    /// Converts to a `time::Duration`.
    #[must_use]
    pub fn to_duration(&self) -> time::Duration {
        time::Duration::minutes(self.total_minutes())
    }
}

impl FromStr for SlotDuration {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (hours, minutes) =
            split_hh_mm(s).ok_or_else(|| DomainError::InvalidDuration(s.to_string()))?;
        Self::new(hours, minutes)
    }
}

impl TryFrom<String> for SlotDuration {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SlotDuration> for String {
    fn from(value: SlotDuration) -> Self {
        value.to_string()
    }
}

impl std::fmt::Display for SlotDuration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hours, self.minutes)
    }
}
