// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Page event handlers.
//!
//! The `Scheduler` applies each page event to the board and hands the
//! resulting saves and deletes to the `Synchronizer` as spawned tasks.

use crate::error::SyncError;
use crate::sync::{SharedBoard, SyncTask, Synchronizer};
use flight_sched::{
    Board, CoreError, DiscardReason, DraggableFlight, DropOutcome, EntryKey, Selection,
    TimeslotEntry,
};
use flight_sched_domain::{ClockTime, ResourceId, TemplateId, TimeSpan, TimeslotId};
use time::{Date, PrimitiveDateTime};
use tracing::{info, warn};

/// A message for the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// A flight was dropped while no court was ticked.
    NoCourtsSelected,
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoCourtsSelected => {
                write!(f, "Select at least one court before adding a flight.")
            }
        }
    }
}

/// Shows notices to the user, as a toast or modal.
pub trait Notifier: Send + Sync {
    /// Displays a notice.
    fn show(&self, notice: Notice);
}

/// What became of a dropped flight.
#[derive(Debug)]
pub enum Placement {
    /// The entry was finalized and its create request spawned.
    Scheduled {
        /// The new entry.
        key: EntryKey,
        /// The create request.
        task: SyncTask,
    },
    /// The draft was thrown away and the user notified.
    Discarded(DiscardReason),
}

/// Handles the events of the scheduling page.
pub struct Scheduler<N: Notifier> {
    sync: Synchronizer,
    notifier: N,
}

impl<N: Notifier> Scheduler<N> {
    /// Creates a scheduler.
    #[must_use]
    pub const fn new(sync: Synchronizer, notifier: N) -> Self {
        Self { sync, notifier }
    }

    /// Returns the shared board.
    #[must_use]
    pub const fn board(&self) -> &SharedBoard {
        self.sync.board()
    }

    /// Returns the notifier.
    #[must_use]
    pub const fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Drops a palette flight on a calendar day.
    ///
    /// The draggable is stamped with `start` and the stepper values, placed
    /// as a draft, and finalized against the ticked courts. With no court
    /// ticked the draft is discarded, the user is notified and nothing is
    /// sent.
    ///
    /// # Arguments
    ///
    /// * `template` - The palette item being dragged
    /// * `date` - The calendar day it was dropped on
    /// * `start` - The start time for the new instance
    /// * `duration_hours` - Hour stepper input
    /// * `duration_minutes` - Minute stepper input
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The palette has no such template
    /// - The duration is zero after clamping
    /// - The span cannot be computed
    pub async fn drop_flight(
        &self,
        template: &TemplateId,
        date: Date,
        start: ClockTime,
        duration_hours: i32,
        duration_minutes: i32,
    ) -> Result<Placement, SyncError> {
        let outcome: DropOutcome = {
            let mut guard = self.board().lock().await;
            let board: &mut Board = &mut guard;
            let flight: DraggableFlight = board.catalog.create_draggable_instance(
                template,
                start,
                duration_hours,
                duration_minutes,
            )?;
            let key: EntryKey = board.calendar.on_drop(flight, date);
            board.calendar.finalize(key, &board.registry)?
        };

        match outcome {
            DropOutcome::Finalized(key) => {
                info!(key = %key, template = %template, date = %date, "Flight placed");
                Ok(Placement::Scheduled {
                    key,
                    task: self.sync.spawn_submit(key),
                })
            }
            DropOutcome::Discarded(reason) => {
                warn!(template = %template, reason = ?reason, "Flight dropped with no courts");
                self.notifier.show(Notice::NoCourtsSelected);
                Ok(Placement::Discarded(reason))
            }
        }
    }

    /// Moves an entry to a new time range and saves it.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The entry does not exist or is still a draft
    /// - A delete for the entry is queued or in flight
    pub async fn move_entry(&self, key: EntryKey, span: TimeSpan) -> Result<SyncTask, SyncError> {
        {
            let mut board = self.board().lock().await;
            if board.pending.is_deleting(key) {
                return Err(CoreError::EntryBeingDeleted(key).into());
            }
            board.calendar.move_entry(key, span)?;
        }
        Ok(self.sync.spawn_submit(key))
    }

    /// Moves the end of an entry and saves it.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The entry does not exist or is still a draft
    /// - `end` is not after the entry's start
    /// - A delete for the entry is queued or in flight
    pub async fn resize_entry(
        &self,
        key: EntryKey,
        end: PrimitiveDateTime,
    ) -> Result<SyncTask, SyncError> {
        {
            let mut board = self.board().lock().await;
            if board.pending.is_deleting(key) {
                return Err(CoreError::EntryBeingDeleted(key).into());
            }
            board.calendar.resize_entry(key, end)?;
        }
        Ok(self.sync.spawn_submit(key))
    }

    /// Highlights an entry and its courts.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::EntryNotFound` if no entry exists for `key`.
    pub async fn select_entry(&self, key: EntryKey) -> Result<Selection, SyncError> {
        Ok(self.board().lock().await.select(key)?)
    }

    /// Deletes an entry.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::EntryNotFound` if no entry exists for `key`.
    pub async fn delete_entry(&self, key: EntryKey) -> Result<SyncTask, SyncError> {
        if self.board().lock().await.calendar.get(key).is_none() {
            return Err(CoreError::EntryNotFound(key).into());
        }
        Ok(self.sync.spawn_delete(key))
    }

    /// Deletes the entry behind a side panel row.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::UnknownTimeslot` if no entry carries `id`.
    pub async fn delete_row(&self, id: &TimeslotId) -> Result<SyncTask, SyncError> {
        let key: EntryKey = self
            .board()
            .lock()
            .await
            .calendar
            .get_by_id(id)
            .map(TimeslotEntry::key)
            .ok_or_else(|| CoreError::UnknownTimeslot(id.clone()))?;
        Ok(self.sync.spawn_delete(key))
    }

    /// Ticks or clears a court toggle.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::UnknownResource` if the court is not listed.
    pub async fn toggle_court(&self, id: ResourceId, enabled: bool) -> Result<(), SyncError> {
        self.board()
            .lock()
            .await
            .registry
            .set_enabled(id, enabled)?;
        Ok(())
    }
}
