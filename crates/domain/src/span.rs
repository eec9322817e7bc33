// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Wall-clock time spans for timeslots.
//!
//! ## Invariants
//!
//! - A `TimeSpan` always ends strictly after it starts
//! - Arithmetic is plain wall-clock addition: there is no time zone or DST
//!   adjustment, and hours past midnight roll into the next day

use crate::clock::{ClockTime, SlotDuration};
use crate::error::DomainError;
use time::macros::format_description;
use time::{Date, PrimitiveDateTime};

/// A time range on the calendar, in local wall-clock time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeSpan {
    start: PrimitiveDateTime,
    end: PrimitiveDateTime,
}

impl TimeSpan {
    /// Creates a new `TimeSpan`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidSpan` if `end` is not after `start`.
    pub fn new(start: PrimitiveDateTime, end: PrimitiveDateTime) -> Result<Self, DomainError> {
        if end <= start {
            return Err(DomainError::InvalidSpan { start, end });
        }
        Ok(Self { start, end })
    }

    /// Builds the span of a timeslot dropped on `date`.
    ///
    /// The start is `date` at `start`; the end adds `duration` as hours and
    /// minutes. `23:00` plus `02:30` ends at `01:30` on the following day.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::DateArithmeticOverflow` if the end falls outside
    /// the representable date range.
    pub fn starting_at(
        date: Date,
        start: ClockTime,
        duration: SlotDuration,
    ) -> Result<Self, DomainError> {
        let start: PrimitiveDateTime = PrimitiveDateTime::new(date, start.to_time());
        let end: PrimitiveDateTime = start.checked_add(duration.to_duration()).ok_or_else(|| {
            DomainError::DateArithmeticOverflow {
                operation: format!("adding {duration} to {start}"),
            }
        })?;
        Self::new(start, end)
    }

    /// Returns the start of the span.
    #[must_use]
    pub const fn start(&self) -> PrimitiveDateTime {
        self.start
    }

    /// Returns the end of the span.
    #[must_use]
    pub const fn end(&self) -> PrimitiveDateTime {
        self.end
    }

    /// Returns the length of the span.
    #[must_use]
    pub fn length(&self) -> time::Duration {
        self.end - self.start
    }

    /// Returns a span with the same start and a new end.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidSpan` if `end` is not after the start.
    pub fn with_end(&self, end: PrimitiveDateTime) -> Result<Self, DomainError> {
        Self::new(self.start, end)
    }
}

impl std::fmt::Display for TimeSpan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.start, self.end)
    }
}

/// Parses a calendar date in `YYYY-MM-DD` form.
///
/// # Errors
///
/// Returns `DomainError::DateParseError` if the string is not a valid date.
pub fn parse_date(value: &str) -> Result<Date, DomainError> {
    Date::parse(value.trim(), format_description!("[year]-[month]-[day]")).map_err(|e| {
        DomainError::DateParseError {
            date_string: value.to_string(),
            error: e.to_string(),
        }
    })
}

/// Parses a local date-time in `YYYY-MM-DDTHH:MM` or `YYYY-MM-DDTHH:MM:SS`
/// form.
///
/// # Errors
///
/// Returns `DomainError::DateParseError` if the string matches neither form.
pub fn parse_wall_clock(value: &str) -> Result<PrimitiveDateTime, DomainError> {
    let trimmed: &str = value.trim();
    PrimitiveDateTime::parse(
        trimmed,
        format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]"),
    )
    .or_else(|_| {
        PrimitiveDateTime::parse(
            trimmed,
            format_description!("[year]-[month]-[day]T[hour]:[minute]"),
        )
    })
    .map_err(|e| DomainError::DateParseError {
        date_string: value.to_string(),
        error: e.to_string(),
    })
}

/// Serde adapter for local date-times written as `YYYY-MM-DDTHH:MM:SS`.
pub mod wall_clock {
    use serde::{Deserialize, Deserializer, Serializer};
    use time::PrimitiveDateTime;
    use time::macros::format_description;

    /// Serializes a local date-time.
    ///
    /// # Errors
    ///
    /// Returns a serializer error if formatting fails.
    pub fn serialize<S: Serializer>(
        value: &PrimitiveDateTime,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        let text: String = value
            .format(format_description!(
                "[year]-[month]-[day]T[hour]:[minute]:[second]"
            ))
            .map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(&text)
    }

    /// Deserializes a local date-time with or without seconds.
    ///
    /// # Errors
    ///
    /// Returns a deserializer error if the string is not a local date-time.
    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<PrimitiveDateTime, D::Error> {
        let text: String = String::deserialize(deserializer)?;
        super::parse_wall_clock(&text).map_err(serde::de::Error::custom)
    }
}
