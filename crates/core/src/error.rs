// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::calendar::EntryKey;
use flight_sched_domain::{DomainError, ResourceId, TemplateId, TimeslotId};

/// Errors that can occur while changing calendar state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A domain rule was violated.
    DomainViolation(DomainError),
    /// A draggable referenced a template the palette does not hold.
    UnknownTemplate(TemplateId),
    /// Two palette templates share one id.
    DuplicateTemplate(TemplateId),
    /// A court id is not part of the rendered toggle list.
    UnknownResource(ResourceId),
    /// Two court toggles share one id.
    DuplicateResource(ResourceId),
    /// Two calendar entries share one server id.
    DuplicateTimeslot(TimeslotId),
    /// No calendar entry carries the server id.
    UnknownTimeslot(TimeslotId),
    /// No calendar entry exists for the key.
    EntryNotFound(EntryKey),
    /// The entry has already left the draft state.
    NotADraft(EntryKey),
    /// The entry has no time span or resources yet.
    NotFinalized(EntryKey),
    /// The entry has not been confirmed by the server.
    NotConfirmed(EntryKey),
    /// An entry cannot be confirmed without resources.
    NoResources(EntryKey),
    /// A delete for the entry is already queued or in flight.
    EntryBeingDeleted(EntryKey),
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::UnknownTemplate(id) => write!(f, "Flight template '{id}' is not in the palette"),
            Self::DuplicateTemplate(id) => write!(f, "Flight template '{id}' is listed twice"),
            Self::UnknownResource(id) => write!(f, "Court {id} is not in the court list"),
            Self::DuplicateResource(id) => write!(f, "Court {id} is listed twice"),
            Self::DuplicateTimeslot(id) => write!(f, "Timeslot {id} is already on the calendar"),
            Self::UnknownTimeslot(id) => write!(f, "Timeslot {id} is not on the calendar"),
            Self::EntryNotFound(key) => write!(f, "Calendar entry {key} not found"),
            Self::NotADraft(key) => write!(f, "Calendar entry {key} is not a draft"),
            Self::NotFinalized(key) => write!(f, "Calendar entry {key} has not been finalized"),
            Self::NotConfirmed(key) => write!(f, "Calendar entry {key} is not confirmed"),
            Self::NoResources(key) => {
                write!(f, "Calendar entry {key} cannot be confirmed without courts")
            }
            Self::EntryBeingDeleted(key) => {
                write!(f, "Calendar entry {key} is being deleted")
            }
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
