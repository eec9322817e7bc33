// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A time of day was not a valid `HH:MM` value.
    InvalidClockTime(String),
    /// A duration was not a valid `HH:MM` value.
    InvalidDuration(String),
    /// A duration of zero length was supplied.
    EmptyDuration,
    /// A time span does not end after it starts.
    InvalidSpan {
        /// The span start.
        start: time::PrimitiveDateTime,
        /// The span end.
        end: time::PrimitiveDateTime,
    },
    /// A template identifier is empty.
    InvalidTemplateId,
    /// A timeslot identifier is empty.
    InvalidTimeslotId,
    /// Date arithmetic overflow.
    DateArithmeticOverflow {
        /// Description of the operation that failed.
        operation: String,
    },
    /// Failed to parse a date or date-time from a string.
    DateParseError {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidClockTime(value) => {
                write!(f, "Invalid time of day '{value}': expected HH:MM")
            }
            Self::InvalidDuration(value) => {
                write!(f, "Invalid duration '{value}': expected HH:MM")
            }
            Self::EmptyDuration => write!(f, "Duration must be longer than 00:00"),
            Self::InvalidSpan { start, end } => {
                write!(f, "Time span must end after it starts ({start} to {end})")
            }
            Self::InvalidTemplateId => write!(f, "Flight template id cannot be empty"),
            Self::InvalidTimeslotId => write!(f, "Timeslot id cannot be empty"),
            Self::DateArithmeticOverflow { operation } => {
                write!(f, "Date arithmetic overflow while {operation}")
            }
            Self::DateParseError { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
