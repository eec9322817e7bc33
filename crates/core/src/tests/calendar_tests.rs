// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{
    create_test_catalog, create_test_event, create_test_flight, create_test_registry,
    drop_and_finalize, selection,
};
use crate::{
    Calendar, CalendarChange, CoreError, DiscardReason, DraggableFlight, DropOutcome,
    EntryDisplay, EntryKey, EntryPhase, ResourceRegistry, TimeslotEntry,
};
use flight_sched_domain::{ClockTime, DomainError, TemplateId, TimeSpan, TimeslotId};
use time::macros::{date, datetime};

#[test]
fn test_on_drop_creates_unconfirmed_draft() {
    let mut calendar: Calendar = Calendar::new();
    let key: EntryKey = calendar.on_drop(create_test_flight(), date!(2024 - 06 - 01));

    let entry: &TimeslotEntry = calendar.get(key).unwrap();
    assert_eq!(entry.phase(), EntryPhase::Draft);
    assert!(entry.id().is_none());
    assert!(entry.span().is_none());
    assert!(entry.resources().is_empty());
    assert!(!entry.confirmed());
}

#[test]
fn test_finalize_singles_match_scenario() {
    let mut calendar: Calendar = Calendar::new();
    let registry: ResourceRegistry = create_test_registry(&[3, 7]);

    let key: EntryKey = drop_and_finalize(&mut calendar, &registry);

    let entry: &TimeslotEntry = calendar.get(key).unwrap();
    let span: TimeSpan = entry.span().unwrap();
    assert_eq!(span.start(), datetime!(2024-06-01 09:00));
    assert_eq!(span.end(), datetime!(2024-06-01 10:30));
    assert_eq!(entry.resources(), &selection(&[3, 7]));
    assert_eq!(entry.title(), "Singles Match");
    assert_eq!(entry.display(), EntryDisplay::Block);
    assert!(!entry.all_day());
    assert_eq!(entry.phase(), EntryPhase::Finalized);
    assert!(!entry.confirmed());
}

#[test]
fn test_finalize_without_courts_discards_draft() {
    let mut calendar: Calendar = Calendar::new();
    let registry: ResourceRegistry = create_test_registry(&[]);
    let key: EntryKey = calendar.on_drop(create_test_flight(), date!(2024 - 06 - 01));

    let outcome: DropOutcome = calendar.finalize(key, &registry).unwrap();

    assert_eq!(
        outcome,
        DropOutcome::Discarded(DiscardReason::NoActiveResources)
    );
    assert!(calendar.get(key).is_none());
    assert!(calendar.entries().is_empty());
}

#[test]
fn test_finalize_past_last_date_removes_draft() {
    let mut calendar: Calendar = Calendar::new();
    let registry: ResourceRegistry = create_test_registry(&[3]);
    let flight: DraggableFlight = create_test_catalog()
        .create_draggable_instance(
            &TemplateId::new("singles").unwrap(),
            ClockTime::new(23, 0).unwrap(),
            2,
            0,
        )
        .unwrap();
    let key: EntryKey = calendar.on_drop(flight, date!(9999 - 12 - 31));

    let result = calendar.finalize(key, &registry);

    assert!(matches!(
        result,
        Err(CoreError::DomainViolation(
            DomainError::DateArithmeticOverflow { .. }
        ))
    ));
    assert!(calendar.get(key).is_none());
    assert!(calendar.entries().is_empty());
}

#[test]
fn test_finalize_twice_is_rejected() {
    let mut calendar: Calendar = Calendar::new();
    let registry: ResourceRegistry = create_test_registry(&[1]);
    let key: EntryKey = drop_and_finalize(&mut calendar, &registry);

    let result: Result<DropOutcome, CoreError> = calendar.finalize(key, &registry);
    assert_eq!(result, Err(CoreError::NotADraft(key)));
}

#[test]
fn test_resources_are_a_snapshot() {
    let mut calendar: Calendar = Calendar::new();
    let mut registry: ResourceRegistry = create_test_registry(&[3]);
    let key: EntryKey = drop_and_finalize(&mut calendar, &registry);

    registry
        .set_enabled(flight_sched_domain::ResourceId::new(7), true)
        .unwrap();
    registry
        .set_enabled(flight_sched_domain::ResourceId::new(3), false)
        .unwrap();

    assert_eq!(calendar.get(key).unwrap().resources(), &selection(&[3]));
}

#[test]
fn test_confirm_assigns_id_and_confirms() {
    let mut calendar: Calendar = Calendar::new();
    let registry: ResourceRegistry = create_test_registry(&[3, 7]);
    let key: EntryKey = drop_and_finalize(&mut calendar, &registry);

    calendar.mark_submitting(key).unwrap();
    assert_eq!(calendar.get(key).unwrap().phase(), EntryPhase::Submitting);

    let id: TimeslotId = TimeslotId::new("55").unwrap();
    let entry: &TimeslotEntry = calendar.confirm(key, id.clone()).unwrap();
    assert!(entry.confirmed());
    assert_eq!(entry.id(), Some(&id));
    assert_eq!(calendar.get_by_id(&id).unwrap().key(), key);
}

#[test]
fn test_confirm_rejects_draft() {
    let mut calendar: Calendar = Calendar::new();
    let key: EntryKey = calendar.on_drop(create_test_flight(), date!(2024 - 06 - 01));

    let result: Result<&TimeslotEntry, CoreError> =
        calendar.confirm(key, TimeslotId::new("1").unwrap());
    assert!(matches!(result, Err(CoreError::NotFinalized(_))));
}

#[test]
fn test_confirm_rejects_id_held_by_other_entry() {
    let mut calendar: Calendar =
        Calendar::from_initial_events(vec![create_test_event("9")]).unwrap();
    let registry: ResourceRegistry = create_test_registry(&[1]);
    let key: EntryKey = drop_and_finalize(&mut calendar, &registry);

    let result: Result<&TimeslotEntry, CoreError> =
        calendar.confirm(key, TimeslotId::new("9").unwrap());
    assert!(matches!(result, Err(CoreError::DuplicateTimeslot(_))));
}

#[test]
fn test_submit_failure_returns_entry_to_finalized() {
    let mut calendar: Calendar = Calendar::new();
    let registry: ResourceRegistry = create_test_registry(&[1]);
    let key: EntryKey = drop_and_finalize(&mut calendar, &registry);

    calendar.mark_submitting(key).unwrap();
    calendar.mark_submit_failed(key).unwrap();

    let entry: &TimeslotEntry = calendar.get(key).unwrap();
    assert_eq!(entry.phase(), EntryPhase::Finalized);
    assert!(entry.id().is_none());
}

#[test]
fn test_move_entry_reports_old_and_new_span() {
    let mut calendar: Calendar = Calendar::new();
    let registry: ResourceRegistry = create_test_registry(&[3]);
    let key: EntryKey = drop_and_finalize(&mut calendar, &registry);
    let new_span: TimeSpan =
        TimeSpan::new(datetime!(2024-06-03 11:00), datetime!(2024-06-03 12:30)).unwrap();

    let change: CalendarChange = calendar.move_entry(key, new_span).unwrap();

    assert_eq!(change.key, key);
    assert_eq!(change.old_span.start(), datetime!(2024-06-01 09:00));
    assert_eq!(change.new_span, new_span);
    assert_eq!(calendar.get(key).unwrap().span(), Some(new_span));
    assert_eq!(calendar.get(key).unwrap().resources(), &selection(&[3]));
}

#[test]
fn test_move_draft_is_rejected() {
    let mut calendar: Calendar = Calendar::new();
    let key: EntryKey = calendar.on_drop(create_test_flight(), date!(2024 - 06 - 01));
    let span: TimeSpan =
        TimeSpan::new(datetime!(2024-06-03 11:00), datetime!(2024-06-03 12:30)).unwrap();

    assert_eq!(
        calendar.move_entry(key, span),
        Err(CoreError::NotFinalized(key))
    );
}

#[test]
fn test_resize_entry_keeps_start() {
    let mut calendar: Calendar = Calendar::new();
    let registry: ResourceRegistry = create_test_registry(&[3]);
    let key: EntryKey = drop_and_finalize(&mut calendar, &registry);

    let change: CalendarChange = calendar
        .resize_entry(key, datetime!(2024-06-01 11:00))
        .unwrap();

    assert_eq!(change.new_span.start(), datetime!(2024-06-01 09:00));
    assert_eq!(change.new_span.end(), datetime!(2024-06-01 11:00));
}

#[test]
fn test_resize_before_start_is_rejected() {
    let mut calendar: Calendar = Calendar::new();
    let registry: ResourceRegistry = create_test_registry(&[3]);
    let key: EntryKey = drop_and_finalize(&mut calendar, &registry);

    let result: Result<CalendarChange, CoreError> =
        calendar.resize_entry(key, datetime!(2024-06-01 08:00));
    assert!(matches!(
        result,
        Err(CoreError::DomainViolation(DomainError::InvalidSpan { .. }))
    ));
}

#[test]
fn test_on_select_reports_id_and_resources() {
    let calendar: Calendar = Calendar::from_initial_events(vec![create_test_event("9")]).unwrap();
    let key: EntryKey = calendar.entries()[0].key();

    let selection_result = calendar.on_select(key).unwrap();
    assert_eq!(selection_result.id, Some(TimeslotId::new("9").unwrap()));
    assert_eq!(selection_result.resources, selection(&[1]));
}

#[test]
fn test_initial_events_are_confirmed() {
    let calendar: Calendar = Calendar::from_initial_events(vec![
        create_test_event("9"),
        create_test_event("10"),
    ])
    .unwrap();

    assert_eq!(calendar.entries().len(), 2);
    for entry in calendar.entries() {
        assert!(entry.confirmed());
        assert!(entry.id().is_some());
        assert!(!entry.resources().is_empty());
    }
}

#[test]
fn test_initial_events_reject_duplicates_and_empty_courts() {
    let result: Result<Calendar, CoreError> =
        Calendar::from_initial_events(vec![create_test_event("9"), create_test_event("9")]);
    assert!(matches!(result, Err(CoreError::DuplicateTimeslot(_))));

    let mut event = create_test_event("11");
    event.resources = selection(&[]);
    let result: Result<Calendar, CoreError> = Calendar::from_initial_events(vec![event]);
    assert!(matches!(result, Err(CoreError::NoResources(_))));
}

#[test]
fn test_initial_events_deserialize_from_page_json() {
    let json: &str = r#"[
        {"id": 12, "title": "Ladder", "start": "2024-06-01T18:00:00",
         "end": "2024-06-01T19:00:00", "resources": [2, 4]}
    ]"#;
    let events: Vec<crate::InitialEvent> = serde_json::from_str(json).unwrap();
    let calendar: Calendar = Calendar::from_initial_events(events).unwrap();

    let entry: &TimeslotEntry = calendar
        .get_by_id(&TimeslotId::new("12").unwrap())
        .unwrap();
    assert_eq!(entry.span().unwrap().end(), datetime!(2024-06-01 19:00));
    assert_eq!(entry.resources(), &selection(&[2, 4]));
}

#[test]
fn test_confirmed_entries_always_have_id_and_courts() {
    let mut calendar: Calendar =
        Calendar::from_initial_events(vec![create_test_event("1")]).unwrap();
    let registry: ResourceRegistry = create_test_registry(&[7]);
    let confirmed: EntryKey = drop_and_finalize(&mut calendar, &registry);
    calendar
        .confirm(confirmed, TimeslotId::new("2").unwrap())
        .unwrap();
    drop_and_finalize(&mut calendar, &registry);
    calendar.on_drop(create_test_flight(), date!(2024 - 06 - 04));

    for entry in calendar.entries().iter().filter(|e| e.confirmed()) {
        assert!(entry.id().is_some_and(|id| !id.value().is_empty()));
        assert!(!entry.resources().is_empty());
    }
}

#[test]
fn test_remove_returns_entry() {
    let mut calendar: Calendar = Calendar::new();
    let key: EntryKey = calendar.on_drop(create_test_flight(), date!(2024 - 06 - 01));

    assert!(calendar.remove(key).is_some());
    assert!(calendar.remove(key).is_none());
}
