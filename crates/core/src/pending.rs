// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Per-entry request slots.
//!
//! ## Invariants
//!
//! - At most one request is in flight for an entry
//! - At most one follow-up is queued behind it
//! - Nothing is accepted for an entry once its delete is queued or in flight
//!
//! ## Admission rules
//!
//! | In flight | Queued   | Incoming | Result                      |
//! |-----------|----------|----------|-----------------------------|
//! | none      | -        | any      | dispatch now                |
//! | any       | none     | any      | queue                       |
//! | any       | `Save`   | `Save`   | coalesce into the queued one |
//! | any       | `Save`   | `Delete` | replace the queued save     |
//! | `Delete`  | -        | `Delete` | coalesce                    |
//! | any       | `Delete` | `Delete` | coalesce                    |
//! | `Delete`  | -        | `Save`   | reject                      |
//! | any       | `Delete` | `Save`   | reject                      |

use crate::calendar::EntryKey;
use crate::error::CoreError;
use std::collections::HashMap;
use std::collections::hash_map::Entry;

/// A request against the remote store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SyncOp {
    /// Create the timeslot, or update it once it has an id.
    Save,
    /// Delete the timeslot.
    Delete,
}

/// How a requested operation was admitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    /// Nothing was in flight; the caller sends the request now.
    Dispatch,
    /// Queued behind the in-flight request.
    Queued,
    /// Merged into an equivalent operation already pending.
    Coalesced,
    /// Replaced the queued save with a delete.
    Replaced,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PendingSlot {
    in_flight: SyncOp,
    follow_up: Option<SyncOp>,
}

/// Request slots for every entry with work outstanding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PendingOps {
    slots: HashMap<EntryKey, PendingSlot>,
}

impl PendingOps {
    /// Creates an empty set of slots.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Admits an operation for an entry.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::EntryBeingDeleted` for a save requested after a
    /// delete was queued or sent.
    pub fn admit(&mut self, key: EntryKey, op: SyncOp) -> Result<Admission, CoreError> {
        let slot: &mut PendingSlot = match self.slots.entry(key) {
            Entry::Vacant(vacant) => {
                vacant.insert(PendingSlot {
                    in_flight: op,
                    follow_up: None,
                });
                return Ok(Admission::Dispatch);
            }
            Entry::Occupied(occupied) => occupied.into_mut(),
        };

        let deleting: bool =
            slot.in_flight == SyncOp::Delete || slot.follow_up == Some(SyncOp::Delete);

        match (op, slot.follow_up) {
            (SyncOp::Save, _) if deleting => Err(CoreError::EntryBeingDeleted(key)),
            (SyncOp::Delete, _) if deleting => Ok(Admission::Coalesced),
            (_, None) => {
                slot.follow_up = Some(op);
                Ok(Admission::Queued)
            }
            (SyncOp::Save, Some(_)) => Ok(Admission::Coalesced),
            (SyncOp::Delete, Some(_)) => {
                slot.follow_up = Some(SyncOp::Delete);
                Ok(Admission::Replaced)
            }
        }
    }

    /// Marks the in-flight request for an entry as finished.
    ///
    /// Returns the queued follow-up, which becomes the new in-flight request,
    /// or `None` when the slot is now free.
    pub fn complete(&mut self, key: EntryKey) -> Option<SyncOp> {
        let slot: &mut PendingSlot = self.slots.get_mut(&key)?;
        if let Some(next) = slot.follow_up.take() {
            slot.in_flight = next;
            return Some(next);
        }
        self.slots.remove(&key);
        None
    }

    /// Returns the in-flight request for an entry.
    #[must_use]
    pub fn in_flight(&self, key: EntryKey) -> Option<SyncOp> {
        self.slots.get(&key).map(|slot| slot.in_flight)
    }

    /// Returns the queued follow-up for an entry.
    #[must_use]
    pub fn follow_up(&self, key: EntryKey) -> Option<SyncOp> {
        self.slots.get(&key).and_then(|slot| slot.follow_up)
    }

    /// Returns whether a delete for the entry is queued or in flight.
    #[must_use]
    pub fn is_deleting(&self, key: EntryKey) -> bool {
        self.slots.get(&key).is_some_and(|slot| {
            slot.in_flight == SyncOp::Delete || slot.follow_up == Some(SyncOp::Delete)
        })
    }

    /// Returns whether no entry has work outstanding.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.slots.is_empty()
    }
}
