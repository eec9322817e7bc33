// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Keeps the remote store in step with the calendar.
//!
//! Each entry has one pending slot on the board. The first request for an
//! entry is sent at once. Later requests wait in the slot and are sent from
//! the entry's latest state when the earlier one resolves, so a move made
//! while the create is still in flight goes out as an update carrying the
//! new id.
//!
//! The board lock is released before every network call and taken again to
//! apply the result.

use crate::client::TimeslotApi;
use crate::error::{ApiError, SyncError};
use crate::request_response::TimeslotPayload;
use flight_sched::{Admission, Board, CoreError, EntryKey, EntryPhase, SyncOp, TimeslotEntry};
use flight_sched_domain::{TimeSpan, TimeslotId};
use std::sync::Arc;
use time::UtcOffset;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

/// The board shared between page events and in-flight requests.
pub type SharedBoard = Arc<Mutex<Board>>;

/// A spawned synchronization request.
pub type SyncTask = JoinHandle<Result<Admission, SyncError>>;

/// Settings for building request payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncConfig {
    /// The offset of the wall-clock times shown on the calendar.
    pub utc_offset: UtcOffset,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            utc_offset: UtcOffset::UTC,
        }
    }
}

enum SaveRequest {
    Create(TimeslotPayload),
    Update(TimeslotId, TimeslotPayload),
}

/// Sends create, update and delete requests for calendar entries.
#[derive(Clone)]
pub struct Synchronizer {
    board: SharedBoard,
    api: Arc<dyn TimeslotApi>,
    config: SyncConfig,
}

impl Synchronizer {
    /// Creates a synchronizer over a shared board.
    #[must_use]
    pub fn new(board: SharedBoard, api: Arc<dyn TimeslotApi>, config: SyncConfig) -> Self {
        Self { board, api, config }
    }

    /// Returns the shared board.
    #[must_use]
    pub const fn board(&self) -> &SharedBoard {
        &self.board
    }

    /// Persists an entry: creates it when it has no id, updates it otherwise.
    ///
    /// When another request for the entry is outstanding the save is queued
    /// or merged and this returns at once. Otherwise the requests for the
    /// entry run until its slot is empty, and the result reflects the last
    /// one.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The entry does not exist or is still a draft
    /// - A delete for the entry is queued or in flight
    /// - The last request sent for the entry failed
    pub async fn submit(&self, key: EntryKey) -> Result<Admission, SyncError> {
        let admission: Admission = {
            let mut board = self.board.lock().await;
            let entry: &TimeslotEntry = board
                .calendar
                .get(key)
                .ok_or(CoreError::EntryNotFound(key))?;
            if entry.phase() == EntryPhase::Draft {
                return Err(CoreError::NotFinalized(key).into());
            }
            board.pending.admit(key, SyncOp::Save)?
        };

        self.dispatch(key, SyncOp::Save, admission).await
    }

    /// Removes an entry from the remote store and then from the board.
    ///
    /// An entry that never received an id is removed locally.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The entry does not exist
    /// - The last request sent for the entry failed
    pub async fn delete(&self, key: EntryKey) -> Result<Admission, SyncError> {
        let admission: Admission = {
            let mut board = self.board.lock().await;
            if board.calendar.get(key).is_none() {
                return Err(CoreError::EntryNotFound(key).into());
            }
            board.pending.admit(key, SyncOp::Delete)?
        };

        self.dispatch(key, SyncOp::Delete, admission).await
    }

    /// Runs `submit` on the runtime without waiting for it.
    #[must_use]
    pub fn spawn_submit(&self, key: EntryKey) -> SyncTask {
        let sync: Self = self.clone();
        tokio::spawn(async move { sync.submit(key).await })
    }

    /// Runs `delete` on the runtime without waiting for it.
    #[must_use]
    pub fn spawn_delete(&self, key: EntryKey) -> SyncTask {
        let sync: Self = self.clone();
        tokio::spawn(async move { sync.delete(key).await })
    }

    async fn dispatch(
        &self,
        key: EntryKey,
        op: SyncOp,
        admission: Admission,
    ) -> Result<Admission, SyncError> {
        if admission != Admission::Dispatch {
            debug!(key = %key, op = ?op, admission = ?admission, "Request deferred");
            return Ok(admission);
        }
        self.drain(key, op).await?;
        Ok(admission)
    }

    /// Sends `op` and every follow-up queued behind it.
    async fn drain(&self, key: EntryKey, mut op: SyncOp) -> Result<(), SyncError> {
        loop {
            let result: Result<(), SyncError> = match op {
                SyncOp::Save => self.save(key).await,
                SyncOp::Delete => self.remove(key).await,
            };
            if let Err(err) = &result {
                error!(key = %key, op = ?op, error = %err, "Timeslot request failed");
            }

            let next: Option<SyncOp> = self.board.lock().await.pending.complete(key);
            match next {
                Some(follow_up) => {
                    debug!(key = %key, op = ?follow_up, "Sending queued request");
                    op = follow_up;
                }
                None => return result,
            }
        }
    }

    async fn save(&self, key: EntryKey) -> Result<(), SyncError> {
        let request: SaveRequest = {
            let mut board = self.board.lock().await;
            let entry: &TimeslotEntry = board
                .calendar
                .get(key)
                .ok_or(CoreError::EntryNotFound(key))?;
            let span: TimeSpan = entry.span().ok_or(CoreError::NotFinalized(key))?;
            let id: Option<TimeslotId> = entry.id().cloned();
            let payload: TimeslotPayload = TimeslotPayload::new(
                span,
                entry.resources().clone(),
                self.config.utc_offset,
                id.clone(),
            )?;
            match id {
                Some(id) => SaveRequest::Update(id, payload),
                None => {
                    board.calendar.mark_submitting(key)?;
                    SaveRequest::Create(payload)
                }
            }
        };

        match request {
            SaveRequest::Create(payload) => self.create(key, &payload).await,
            SaveRequest::Update(id, payload) => self.update(key, &id, &payload).await,
        }
    }

    async fn create(&self, key: EntryKey, payload: &TimeslotPayload) -> Result<(), SyncError> {
        let result: Result<TimeslotId, ApiError> = self.api.create(payload).await;

        let mut guard = self.board.lock().await;
        let board: &mut Board = &mut guard;
        match result {
            Ok(id) => match board.calendar.confirm(key, id.clone()) {
                Ok(entry) => {
                    board.side_panel.add_row(entry)?;
                    info!(key = %key, id = %id, start = %payload.start, "Timeslot created");
                    Ok(())
                }
                Err(err) => {
                    error!(
                        key = %key,
                        orphaned_id = %id,
                        error = %err,
                        "Server created a timeslot the calendar could not take"
                    );
                    if board.calendar.mark_submit_failed(key).is_err() {
                        warn!(key = %key, "Entry left the calendar during create");
                    }
                    Err(err.into())
                }
            },
            Err(err) => {
                if board.calendar.mark_submit_failed(key).is_err() {
                    warn!(key = %key, "Entry left the calendar during create");
                }
                Err(err.into())
            }
        }
    }

    async fn update(
        &self,
        key: EntryKey,
        id: &TimeslotId,
        payload: &TimeslotPayload,
    ) -> Result<(), SyncError> {
        self.api.update(id, payload).await?;

        let mut guard = self.board.lock().await;
        let board: &mut Board = &mut guard;
        let entry: &TimeslotEntry = board
            .calendar
            .get(key)
            .ok_or(CoreError::EntryNotFound(key))?;
        board.side_panel.add_row(entry)?;
        info!(key = %key, id = %id, start = %payload.start, "Timeslot updated");
        Ok(())
    }

    async fn remove(&self, key: EntryKey) -> Result<(), SyncError> {
        let id: Option<TimeslotId> = {
            let board = self.board.lock().await;
            board
                .calendar
                .get(key)
                .ok_or(CoreError::EntryNotFound(key))?
                .id()
                .cloned()
        };

        let Some(id) = id else {
            self.board.lock().await.remove_entry(key);
            debug!(key = %key, "Removed unsaved entry");
            return Ok(());
        };

        self.api.delete(&id).await?;
        self.board.lock().await.remove_entry(key);
        info!(key = %key, id = %id, "Timeslot deleted");
        Ok(())
    }
}
