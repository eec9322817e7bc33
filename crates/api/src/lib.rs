// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

//! Remote persistence for the flight timeslot scheduler.
//!
//! The `TimeslotApi` trait is the seam to the server. `HttpTimeslotApi`
//! implements it over HTTP. The `Synchronizer` drives requests for calendar
//! entries and applies the responses to the shared `Board`, and the
//! `Scheduler` turns page events into calendar changes and requests.

mod client;
mod error;
mod request_response;
mod scheduler;
mod sync;

#[cfg(test)]
mod tests;

pub use client::{ClientConfig, HttpTimeslotApi, TimeslotApi};
pub use error::{ApiError, SyncError};
pub use request_response::{
    CreateTimeslotResponse, StatusResponse, TimeslotPayload, format_utc_timestamp,
    is_reported_success, time_zone_offset_minutes,
};
pub use scheduler::{Notice, Notifier, Placement, Scheduler};
pub use sync::{SharedBoard, SyncConfig, SyncTask, Synchronizer};
