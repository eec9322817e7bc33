// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The in-memory calendar.
//!
//! The calendar exclusively owns every `TimeslotEntry`. Other components
//! refer to entries by `EntryKey` or by server id and never hold copies.
//!
//! ## Entry lifecycle
//!
//! ```text
//! on_drop -> Draft -> finalize -> Finalized -> Submitting -> Confirmed
//!                  \-> discarded (no courts selected)
//! ```
//!
//! A failed create returns a `Submitting` entry to `Finalized`.

use crate::catalog::DraggableFlight;
use crate::error::CoreError;
use crate::registry::ResourceRegistry;
use flight_sched_domain::{ResourceSelection, TimeSpan, TimeslotId, wall_clock};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use time::{Date, PrimitiveDateTime};

/// Local identity of a calendar entry.
///
/// Keys are assigned by the calendar when an entry appears and stay the same
/// for the entry's lifetime, including before the server issues an id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntryKey(u64);

impl EntryKey {
    /// Creates a key from its raw value.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw value.
    #[must_use]
    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for EntryKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Where an entry is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryPhase {
    /// Dropped on the calendar, no times or courts yet.
    Draft,
    /// Times and courts assigned, not yet sent.
    Finalized,
    /// Create request in flight.
    Submitting,
    /// Persisted by the server.
    Confirmed,
}

/// Calendar display mode of an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryDisplay {
    /// Widget default, used for drafts.
    Auto,
    /// Rendered as a block in the time grid.
    Block,
}

/// A timeslot on the calendar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeslotEntry {
    key: EntryKey,
    id: Option<TimeslotId>,
    title: String,
    span: Option<TimeSpan>,
    resources: ResourceSelection,
    phase: EntryPhase,
    display: EntryDisplay,
    all_day: bool,
    drop_date: Option<Date>,
    origin: Option<DraggableFlight>,
}

impl TimeslotEntry {
    /// Returns the local key.
    #[must_use]
    pub const fn key(&self) -> EntryKey {
        self.key
    }

    /// Returns the server id, if the entry has been persisted.
    #[must_use]
    pub const fn id(&self) -> Option<&TimeslotId> {
        self.id.as_ref()
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the time span. Drafts have none.
    #[must_use]
    pub const fn span(&self) -> Option<TimeSpan> {
        self.span
    }

    /// Returns the court snapshot taken when the entry was finalized.
    #[must_use]
    pub const fn resources(&self) -> &ResourceSelection {
        &self.resources
    }

    /// Returns the lifecycle phase.
    #[must_use]
    pub const fn phase(&self) -> EntryPhase {
        self.phase
    }

    /// Returns whether the server has confirmed the entry.
    #[must_use]
    pub fn confirmed(&self) -> bool {
        self.phase == EntryPhase::Confirmed
    }

    /// Returns the display mode.
    #[must_use]
    pub const fn display(&self) -> EntryDisplay {
        self.display
    }

    /// Returns whether the entry is shown as an all-day event.
    #[must_use]
    pub const fn all_day(&self) -> bool {
        self.all_day
    }
}

/// An already-persisted timeslot embedded in the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InitialEvent {
    /// The server id.
    pub id: TimeslotId,
    /// The title.
    pub title: String,
    /// Start, local wall-clock time.
    #[serde(with = "wall_clock")]
    pub start: PrimitiveDateTime,
    /// End, local wall-clock time.
    #[serde(with = "wall_clock")]
    pub end: PrimitiveDateTime,
    /// The courts the timeslot occupies.
    pub resources: ResourceSelection,
}

/// Why a dropped draft was thrown away.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscardReason {
    /// No court toggle was ticked at drop time.
    NoActiveResources,
}

/// The result of finalizing a draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// The entry has times and courts and can be submitted.
    Finalized(EntryKey),
    /// The draft was removed from the calendar.
    Discarded(DiscardReason),
}

/// A user-driven change to an entry's bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarChange {
    /// The changed entry.
    pub key: EntryKey,
    /// The bounds before the change.
    pub old_span: TimeSpan,
    /// The bounds after the change.
    pub new_span: TimeSpan,
}

/// What a click on an entry reports to the highlight coordinator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// The clicked entry.
    pub key: EntryKey,
    /// Its server id, if persisted.
    pub id: Option<TimeslotId>,
    /// Its courts.
    pub resources: ResourceSelection,
}

/// The calendar state model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Calendar {
    entries: Vec<TimeslotEntry>,
    next_key: u64,
}

impl Calendar {
    /// Creates an empty calendar.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_key: 1,
        }
    }

    /// Renders the calendar from the events embedded in the page.
    ///
    /// Every initial event is already persisted, so each becomes a confirmed
    /// entry.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Two events share an id
    /// - An event does not end after it starts
    /// - An event has no courts
    pub fn from_initial_events(events: Vec<InitialEvent>) -> Result<Self, CoreError> {
        let mut calendar: Self = Self::new();
        let mut seen: HashSet<TimeslotId> = HashSet::new();

        for event in events {
            if !seen.insert(event.id.clone()) {
                return Err(CoreError::DuplicateTimeslot(event.id));
            }
            let span: TimeSpan = TimeSpan::new(event.start, event.end)?;
            let key: EntryKey = calendar.allocate_key();
            if event.resources.is_empty() {
                return Err(CoreError::NoResources(key));
            }
            calendar.entries.push(TimeslotEntry {
                key,
                id: Some(event.id),
                title: event.title,
                span: Some(span),
                resources: event.resources,
                phase: EntryPhase::Confirmed,
                display: EntryDisplay::Block,
                all_day: false,
                drop_date: None,
                origin: None,
            });
        }

        Ok(calendar)
    }

    const fn allocate_key(&mut self) -> EntryKey {
        let key: EntryKey = EntryKey(self.next_key);
        self.next_key += 1;
        key
    }

    /// Returns all entries in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[TimeslotEntry] {
        &self.entries
    }

    /// Looks up an entry by key.
    #[must_use]
    pub fn get(&self, key: EntryKey) -> Option<&TimeslotEntry> {
        self.entries.iter().find(|e| e.key == key)
    }

    /// Looks up an entry by server id.
    #[must_use]
    pub fn get_by_id(&self, id: &TimeslotId) -> Option<&TimeslotEntry> {
        self.entries.iter().find(|e| e.id.as_ref() == Some(id))
    }

    fn entry_mut(&mut self, key: EntryKey) -> Result<&mut TimeslotEntry, CoreError> {
        self.entries
            .iter_mut()
            .find(|e| e.key == key)
            .ok_or(CoreError::EntryNotFound(key))
    }

    /// Places a dropped flight on the calendar as a draft.
    ///
    /// The draft has no id, no times and no courts.
    pub fn on_drop(&mut self, flight: DraggableFlight, date: Date) -> EntryKey {
        let key: EntryKey = self.allocate_key();
        self.entries.push(TimeslotEntry {
            key,
            id: None,
            title: flight.title.clone(),
            span: None,
            resources: ResourceSelection::new(),
            phase: EntryPhase::Draft,
            display: EntryDisplay::Auto,
            all_day: true,
            drop_date: Some(date),
            origin: Some(flight),
        });
        key
    }

    /// Turns a draft into a schedulable entry.
    ///
    /// With no court ticked the draft is removed and reported as discarded.
    /// Otherwise the span is computed from the drop date and the draggable's
    /// start and duration, and the active courts are copied into the entry.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No entry exists for `key`
    /// - The entry is not a draft
    /// - The span cannot be computed, in which case the draft is removed
    pub fn finalize(
        &mut self,
        key: EntryKey,
        registry: &ResourceRegistry,
    ) -> Result<DropOutcome, CoreError> {
        let entry: &TimeslotEntry = self.get(key).ok_or(CoreError::EntryNotFound(key))?;
        if entry.phase != EntryPhase::Draft {
            return Err(CoreError::NotADraft(key));
        }
        let (Some(date), Some(flight)) = (entry.drop_date, entry.origin.clone()) else {
            return Err(CoreError::NotADraft(key));
        };

        let resources: ResourceSelection = registry.get_active_resources();
        if resources.is_empty() {
            self.remove(key);
            return Ok(DropOutcome::Discarded(DiscardReason::NoActiveResources));
        }

        let span: TimeSpan = match TimeSpan::starting_at(date, flight.start, flight.duration) {
            Ok(span) => span,
            Err(err) => {
                self.remove(key);
                return Err(err.into());
            }
        };
        let title: String = flight.title;

        let entry: &mut TimeslotEntry = self.entry_mut(key)?;
        entry.span = Some(span);
        entry.resources = resources;
        entry.display = EntryDisplay::Block;
        entry.all_day = false;
        entry.title = title;
        entry.phase = EntryPhase::Finalized;

        Ok(DropOutcome::Finalized(key))
    }

    /// Moves an entry to a new time range.
    ///
    /// # Errors
    ///
    /// Returns an error if the entry does not exist or is still a draft.
    pub fn move_entry(
        &mut self,
        key: EntryKey,
        span: TimeSpan,
    ) -> Result<CalendarChange, CoreError> {
        let entry: &mut TimeslotEntry = self.entry_mut(key)?;
        let old_span: TimeSpan = entry.span.ok_or(CoreError::NotFinalized(key))?;
        entry.span = Some(span);
        Ok(CalendarChange {
            key,
            old_span,
            new_span: span,
        })
    }

    /// Moves the end of an entry, keeping its start.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The entry does not exist or is still a draft
    /// - `end` is not after the entry's start
    pub fn resize_entry(
        &mut self,
        key: EntryKey,
        end: PrimitiveDateTime,
    ) -> Result<CalendarChange, CoreError> {
        let old_span: TimeSpan = self
            .get(key)
            .ok_or(CoreError::EntryNotFound(key))?
            .span
            .ok_or(CoreError::NotFinalized(key))?;
        self.move_entry(key, old_span.with_end(end)?)
    }

    /// Reports a click on an entry.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::EntryNotFound` if no entry exists for `key`.
    pub fn on_select(&self, key: EntryKey) -> Result<Selection, CoreError> {
        let entry: &TimeslotEntry = self.get(key).ok_or(CoreError::EntryNotFound(key))?;
        Ok(Selection {
            key,
            id: entry.id.clone(),
            resources: entry.resources.clone(),
        })
    }

    /// Marks a finalized entry as having a create request in flight.
    ///
    /// Entries in other phases are left alone.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::EntryNotFound` if no entry exists for `key`.
    pub fn mark_submitting(&mut self, key: EntryKey) -> Result<(), CoreError> {
        let entry: &mut TimeslotEntry = self.entry_mut(key)?;
        if entry.phase == EntryPhase::Finalized {
            entry.phase = EntryPhase::Submitting;
        }
        Ok(())
    }

    /// Returns an entry whose create request failed to `Finalized`.
    ///
    /// The entry stays on the calendar unconfirmed.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::EntryNotFound` if no entry exists for `key`.
    pub fn mark_submit_failed(&mut self, key: EntryKey) -> Result<(), CoreError> {
        let entry: &mut TimeslotEntry = self.entry_mut(key)?;
        if entry.phase == EntryPhase::Submitting {
            entry.phase = EntryPhase::Finalized;
        }
        Ok(())
    }

    /// Records the server id and marks the entry confirmed.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No entry exists for `key`
    /// - The entry is still a draft
    /// - The entry has no courts
    /// - Another entry already holds `id`
    pub fn confirm(&mut self, key: EntryKey, id: TimeslotId) -> Result<&TimeslotEntry, CoreError> {
        if self.get_by_id(&id).is_some_and(|e| e.key != key) {
            return Err(CoreError::DuplicateTimeslot(id));
        }
        let entry: &mut TimeslotEntry = self.entry_mut(key)?;
        if entry.span.is_none() {
            return Err(CoreError::NotFinalized(key));
        }
        if entry.resources.is_empty() {
            return Err(CoreError::NoResources(key));
        }
        entry.id = Some(id);
        entry.phase = EntryPhase::Confirmed;
        Ok(entry)
    }

    /// Removes an entry from the calendar and returns it.
    pub fn remove(&mut self, key: EntryKey) -> Option<TimeslotEntry> {
        let index: usize = self.entries.iter().position(|e| e.key == key)?;
        Some(self.entries.remove(index))
    }
}

impl Default for Calendar {
    fn default() -> Self {
        Self::new()
    }
}
