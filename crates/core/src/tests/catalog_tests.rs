// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{create_test_catalog, create_test_template};
use crate::{CoreError, DraggableFlight, FlightCatalog, Stepper};
use flight_sched_domain::{ClockTime, DomainError, SlotDuration, TemplateId};

#[test]
fn test_stepper_clamps_and_pads() {
    let mut hours: Stepper = Stepper::hours();
    assert_eq!(hours.set(7), 7);
    assert_eq!(hours.display(), "07");
    assert_eq!(hours.set(30), 23);
    assert_eq!(hours.set(-4), 0);
    assert_eq!(hours.display(), "00");

    let mut minutes: Stepper = Stepper::minutes();
    assert_eq!(minutes.set(75), 59);
    assert_eq!(minutes.display(), "59");
}

#[test]
fn test_draggable_uses_template_defaults() {
    let catalog: FlightCatalog = create_test_catalog();
    let flight: DraggableFlight = catalog
        .draggable(&TemplateId::new("singles").unwrap())
        .unwrap();

    assert_eq!(flight.title, "Singles Match");
    assert_eq!(flight.start, ClockTime::new(9, 0).unwrap());
    assert_eq!(flight.duration, SlotDuration::new(1, 30).unwrap());
}

#[test]
fn test_create_draggable_instance_stamps_time_and_duration() {
    let catalog: FlightCatalog = create_test_catalog();
    let flight: DraggableFlight = catalog
        .create_draggable_instance(
            &TemplateId::new("singles").unwrap(),
            ClockTime::new(17, 15).unwrap(),
            2,
            5,
        )
        .unwrap();

    assert_eq!(flight.start, ClockTime::new(17, 15).unwrap());
    assert_eq!(flight.duration.to_string(), "02:05");
    assert_eq!(
        catalog.templates()[0].default_duration(),
        SlotDuration::new(1, 30).unwrap()
    );
}

#[test]
fn test_create_draggable_instance_clamps_stepper_input() {
    let catalog: FlightCatalog = create_test_catalog();
    let flight: DraggableFlight = catalog
        .create_draggable_instance(
            &TemplateId::new("singles").unwrap(),
            ClockTime::new(8, 0).unwrap(),
            99,
            -3,
        )
        .unwrap();

    assert_eq!(flight.duration.to_string(), "23:00");
}

#[test]
fn test_create_draggable_instance_rejects_zero_duration() {
    let catalog: FlightCatalog = create_test_catalog();
    let result: Result<DraggableFlight, CoreError> = catalog.create_draggable_instance(
        &TemplateId::new("singles").unwrap(),
        ClockTime::new(8, 0).unwrap(),
        0,
        0,
    );

    assert_eq!(
        result,
        Err(CoreError::DomainViolation(DomainError::EmptyDuration))
    );
}

#[test]
fn test_unknown_template_fails_loudly() {
    let catalog: FlightCatalog = create_test_catalog();
    let missing: TemplateId = TemplateId::new("mixed").unwrap();

    assert_eq!(
        catalog.draggable(&missing),
        Err(CoreError::UnknownTemplate(missing.clone()))
    );
    assert!(matches!(
        catalog.create_draggable_instance(&missing, ClockTime::new(8, 0).unwrap(), 1, 0),
        Err(CoreError::UnknownTemplate(_))
    ));
}

#[test]
fn test_duplicate_templates_rejected() {
    let result: Result<FlightCatalog, CoreError> =
        FlightCatalog::new(vec![create_test_template(), create_test_template()]);
    assert!(matches!(result, Err(CoreError::DuplicateTemplate(_))));
}
