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

mod clock;
mod error;
mod label;
mod span;
mod types;

#[cfg(test)]
mod tests;

// Re-export public types
pub use clock::{ClockTime, MAX_HOURS, MAX_MINUTES, SlotDuration};
pub use error::DomainError;
pub use label::format_row_label;
pub use span::{TimeSpan, parse_date, parse_wall_clock, wall_clock};
pub use types::{
    FlightColors, FlightTemplate, ResourceId, ResourceSelection, TemplateId, TimeslotId,
};
