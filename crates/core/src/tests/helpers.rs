// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    Calendar, DraggableFlight, DropOutcome, EntryKey, FlightCatalog, InitialEvent,
    ResourceRegistry, ResourceToggle,
};
use flight_sched_domain::{
    ClockTime, FlightColors, FlightTemplate, ResourceId, ResourceSelection, SlotDuration,
    TemplateId, TimeslotId,
};
use time::macros::{date, datetime};

pub fn create_test_template() -> FlightTemplate {
    FlightTemplate::new(
        TemplateId::new("singles").unwrap(),
        String::from("Singles Match"),
        ClockTime::new(9, 0).unwrap(),
        SlotDuration::new(1, 30).unwrap(),
        FlightColors {
            foreground: String::from("#ffffff"),
            background: String::from("#1b5e20"),
        },
    )
}

pub fn create_test_catalog() -> FlightCatalog {
    FlightCatalog::new(vec![create_test_template()]).unwrap()
}

pub fn create_test_flight() -> DraggableFlight {
    create_test_catalog()
        .draggable(&TemplateId::new("singles").unwrap())
        .unwrap()
}

/// Courts 1, 3 and 7, with `enabled` ticked.
pub fn create_test_registry(enabled: &[u32]) -> ResourceRegistry {
    ResourceRegistry::new(
        [1, 3, 7]
            .into_iter()
            .map(|id| ResourceToggle {
                id: ResourceId::new(id),
                label: format!("Court {id}"),
                enabled: enabled.contains(&id),
            })
            .collect(),
    )
    .unwrap()
}

pub fn selection(ids: &[u32]) -> ResourceSelection {
    ids.iter().copied().map(ResourceId::new).collect()
}

pub fn create_test_event(id: &str) -> InitialEvent {
    InitialEvent {
        id: TimeslotId::new(id).unwrap(),
        title: String::from("Doubles"),
        start: datetime!(2024-06-02 14:00),
        end: datetime!(2024-06-02 15:00),
        resources: selection(&[1]),
    }
}

/// Drops the singles flight on 2024-06-01 and finalizes it.
pub fn drop_and_finalize(calendar: &mut Calendar, registry: &ResourceRegistry) -> EntryKey {
    let key: EntryKey = calendar.on_drop(create_test_flight(), date!(2024 - 06 - 01));
    match calendar.finalize(key, registry).unwrap() {
        DropOutcome::Finalized(finalized) => finalized,
        DropOutcome::Discarded(reason) => panic!("unexpected discard: {reason:?}"),
    }
}
