// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test doubles and fixtures.

use crate::{
    ApiError, Notice, Notifier, Scheduler, SharedBoard, SyncConfig, Synchronizer, TimeslotApi,
    TimeslotPayload,
};
use async_trait::async_trait;
use flight_sched::{Board, DraggableFlight, DropOutcome, EntryKey, PageBootstrap, ResourceToggle};
use flight_sched_domain::{
    ClockTime, FlightColors, FlightTemplate, ResourceId, ResourceSelection, SlotDuration,
    TemplateId, TimeslotId,
};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};
use time::macros::date;
use tokio::sync::Semaphore;

/// A request seen by `RecordingApi`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiCall {
    Create(TimeslotPayload),
    Update(TimeslotId, TimeslotPayload),
    Delete(TimeslotId),
}

/// In-memory `TimeslotApi` that records every request.
///
/// Issued ids are `ts-1`, `ts-2`, ... A gated api holds each request until
/// `release` hands out a permit.
pub struct RecordingApi {
    calls: Mutex<Vec<ApiCall>>,
    issued: AtomicU32,
    failure: Mutex<Option<u16>>,
    gate: Option<Semaphore>,
}

impl RecordingApi {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            issued: AtomicU32::new(0),
            failure: Mutex::new(None),
            gate: None,
        }
    }

    pub fn failing(status: u16) -> Self {
        let api: Self = Self::new();
        api.set_failure(Some(status));
        api
    }

    pub fn gated() -> Self {
        Self {
            gate: Some(Semaphore::new(0)),
            ..Self::new()
        }
    }

    /// Makes later requests fail with `status`, or succeed with `None`.
    pub fn set_failure(&self, status: Option<u16>) {
        *self.failure.lock().unwrap() = status;
    }

    /// Lets `count` gated requests through.
    pub fn release(&self, count: usize) {
        if let Some(gate) = &self.gate {
            gate.add_permits(count);
        }
    }

    pub fn calls(&self) -> Vec<ApiCall> {
        self.calls.lock().unwrap().clone()
    }

    async fn pass(&self, call: ApiCall) -> Result<(), ApiError> {
        self.calls.lock().unwrap().push(call);
        if let Some(gate) = &self.gate {
            gate.acquire().await.unwrap().forget();
        }
        let failure: Option<u16> = *self.failure.lock().unwrap();
        match failure {
            Some(status) => Err(ApiError::Status {
                status,
                body: String::from("{\"status\":\"error\"}"),
            }),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl TimeslotApi for RecordingApi {
    async fn create(&self, payload: &TimeslotPayload) -> Result<TimeslotId, ApiError> {
        self.pass(ApiCall::Create(payload.clone())).await?;
        let n: u32 = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
        Ok(TimeslotId::new(&format!("ts-{n}")).unwrap())
    }

    async fn update(&self, id: &TimeslotId, payload: &TimeslotPayload) -> Result<(), ApiError> {
        self.pass(ApiCall::Update(id.clone(), payload.clone()))
            .await
    }

    async fn delete(&self, id: &TimeslotId) -> Result<(), ApiError> {
        self.pass(ApiCall::Delete(id.clone())).await
    }
}

/// Notifier that keeps every notice shown.
#[derive(Default)]
pub struct RecordingNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingNotifier {
    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn show(&self, notice: Notice) {
        self.notices.lock().unwrap().push(notice);
    }
}

pub fn singles() -> TemplateId {
    TemplateId::new("singles").unwrap()
}

pub fn selection(ids: &[u32]) -> ResourceSelection {
    ids.iter().copied().map(ResourceId::new).collect()
}

/// Courts 1, 3 and 7 with `enabled` ticked, and the singles template.
pub fn create_test_page(enabled: &[u32]) -> PageBootstrap {
    PageBootstrap {
        flight_id: String::from("42"),
        courts: [1, 3, 7]
            .into_iter()
            .map(|id| ResourceToggle {
                id: ResourceId::new(id),
                label: format!("Court {id}"),
                enabled: enabled.contains(&id),
            })
            .collect(),
        templates: vec![FlightTemplate::new(
            singles(),
            String::from("Singles Match"),
            ClockTime::new(9, 0).unwrap(),
            SlotDuration::new(1, 30).unwrap(),
            FlightColors {
                foreground: String::from("#ffffff"),
                background: String::from("#1b5e20"),
            },
        )],
        events: Vec::new(),
    }
}

pub fn create_test_board(enabled: &[u32]) -> SharedBoard {
    Arc::new(tokio::sync::Mutex::new(
        Board::from_bootstrap(create_test_page(enabled)).unwrap(),
    ))
}

pub fn create_test_sync(board: &SharedBoard, api: &Arc<RecordingApi>) -> Synchronizer {
    Synchronizer::new(board.clone(), api.clone(), SyncConfig::default())
}

pub fn create_test_scheduler(
    enabled: &[u32],
    api: &Arc<RecordingApi>,
) -> Scheduler<RecordingNotifier> {
    let board: SharedBoard = create_test_board(enabled);
    Scheduler::new(create_test_sync(&board, api), RecordingNotifier::default())
}

/// Drops the singles flight on 2024-06-01 and finalizes it, without sending
/// anything.
pub async fn place_singles(board: &SharedBoard) -> EntryKey {
    let mut guard = board.lock().await;
    let board: &mut Board = &mut guard;
    let flight: DraggableFlight = board.catalog.draggable(&singles()).unwrap();
    let key: EntryKey = board.calendar.on_drop(flight, date!(2024 - 06 - 01));
    match board.calendar.finalize(key, &board.registry).unwrap() {
        DropOutcome::Finalized(finalized) => finalized,
        DropOutcome::Discarded(reason) => panic!("unexpected discard: {reason:?}"),
    }
}

/// Yields until the api has seen `count` requests.
pub async fn wait_for_calls(api: &RecordingApi, count: usize) {
    for _ in 0..10_000 {
        if api.calls().len() >= count {
            return;
        }
        tokio::task::yield_now().await;
    }
    panic!(
        "expected {count} requests, saw {}: {:?}",
        api.calls().len(),
        api.calls()
    );
}
