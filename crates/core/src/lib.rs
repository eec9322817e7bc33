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

mod board;
mod calendar;
mod catalog;
mod error;
mod highlight;
mod pending;
mod registry;
mod side_panel;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use board::{Board, PageBootstrap};
pub use calendar::{
    Calendar, CalendarChange, DiscardReason, DropOutcome, EntryDisplay, EntryKey, EntryPhase,
    InitialEvent, Selection, TimeslotEntry,
};
pub use catalog::{DraggableFlight, FlightCatalog, Stepper};
pub use error::CoreError;
pub use highlight::Highlights;
pub use pending::{Admission, PendingOps, SyncOp};
pub use registry::{ResourceRegistry, ResourceToggle};
pub use side_panel::{SidePanel, SidePanelRow};
