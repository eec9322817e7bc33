// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Wire types for the timeslot endpoints.

use crate::error::ApiError;
use flight_sched_domain::{ResourceSelection, TimeSpan, TimeslotId};
use serde::{Deserialize, Serialize};
use time::macros::format_description;
use time::{Duration, PrimitiveDateTime, UtcOffset};

/// Request body for creating or updating a timeslot.
///
/// `start` and `end` are UTC instants in the form
/// `2024-06-01T07:00:00.000Z`. `timeZoneOffset` is the client's offset in
/// minutes, positive west of UTC.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeslotPayload {
    /// Start instant, UTC.
    pub start: String,
    /// End instant, UTC.
    pub end: String,
    /// The courts the timeslot occupies.
    pub resources: ResourceSelection,
    /// Minutes to add to local time to reach UTC.
    #[serde(rename = "timeZoneOffset")]
    pub time_zone_offset: i32,
    /// The server id. Sent on update only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<TimeslotId>,
}

impl TimeslotPayload {
    /// Builds the payload for an entry.
    ///
    /// # Arguments
    ///
    /// * `span` - The entry's wall-clock span
    /// * `resources` - The entry's courts
    /// * `offset` - The client's UTC offset
    /// * `id` - The server id, present for updates
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Timestamp` if a bound cannot be moved to UTC.
    pub fn new(
        span: TimeSpan,
        resources: ResourceSelection,
        offset: UtcOffset,
        id: Option<TimeslotId>,
    ) -> Result<Self, ApiError> {
        Ok(Self {
            start: format_utc_timestamp(span.start(), offset)?,
            end: format_utc_timestamp(span.end(), offset)?,
            resources,
            time_zone_offset: time_zone_offset_minutes(offset),
            id,
        })
    }
}

/// Response body of the create endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateTimeslotResponse {
    /// The id issued for the new timeslot.
    #[serde(default)]
    pub timeslot_id: Option<TimeslotId>,
    /// Outcome reported by the server.
    #[serde(default)]
    pub status: Option<String>,
}

/// Response body of the edit and delete endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusResponse {
    /// Outcome reported by the server.
    #[serde(default)]
    pub status: Option<String>,
}

/// Formats a wall-clock time at `offset` as a UTC instant with millisecond
/// precision.
///
/// # Errors
///
/// Returns `ApiError::Timestamp` if the shifted value leaves the supported
/// date range.
pub fn format_utc_timestamp(
    value: PrimitiveDateTime,
    offset: UtcOffset,
) -> Result<String, ApiError> {
    let utc: PrimitiveDateTime = value
        .checked_sub(Duration::seconds(i64::from(offset.whole_seconds())))
        .ok_or(ApiError::Timestamp { value })?;
    utc.format(format_description!(
        "[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]Z"
    ))
    .map_err(|_| ApiError::Timestamp { value })
}

/// Returns the offset in minutes with the sign browsers use: positive west
/// of UTC, so `+02:00` is `-120`.
#[must_use]
pub fn time_zone_offset_minutes(offset: UtcOffset) -> i32 {
    -i32::from(offset.whole_minutes())
}

/// Returns whether a response `status` field reports success.
///
/// A missing status counts as success. `error` and `failure` in any case do
/// not.
#[must_use]
pub fn is_reported_success(status: Option<&str>) -> bool {
    status.is_none_or(|s| {
        let s: &str = s.trim();
        !s.eq_ignore_ascii_case("error") && !s.eq_ignore_ascii_case("failure")
    })
}
