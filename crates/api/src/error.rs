// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use flight_sched::CoreError;
use time::PrimitiveDateTime;

/// Errors from the timeslot API layer.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server returned a non-2xx status code.
    #[error("Timeslot API error ({status}): {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The server answered 2xx but reported a failure in the body.
    #[error("Timeslot API reported status '{status}'")]
    Rejected {
        /// The `status` field of the response body.
        status: String,
    },

    /// A create response did not carry the new timeslot id.
    #[error("Create response did not include a timeslot_id")]
    MissingTimeslotId,

    /// The response body was not the expected JSON.
    #[error("Invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// A wall-clock time could not be expressed in UTC.
    #[error("Cannot express {value} as a UTC timestamp")]
    Timestamp {
        /// The wall-clock time.
        value: PrimitiveDateTime,
    },
}

/// Errors from synchronizing a calendar entry.
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    /// The calendar refused the change.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The remote request failed.
    #[error(transparent)]
    Api(#[from] ApiError),
}
