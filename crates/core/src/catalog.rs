// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The palette of draggable flights.
//!
//! Each template renders one palette item. Dragging creates a
//! `DraggableFlight`, a typed copy of the template stamped with the start
//! time and duration chosen with the hour and minute steppers.

use crate::error::CoreError;
use flight_sched_domain::{
    ClockTime, FlightColors, FlightTemplate, MAX_HOURS, MAX_MINUTES, SlotDuration, TemplateId,
};
use std::collections::HashSet;

/// A numeric spinner bound to an inclusive range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stepper {
    min: u8,
    max: u8,
    value: u8,
}

impl Stepper {
    /// Creates a stepper over `[min, max]` starting at `min`.
    #[must_use]
    pub const fn new(min: u8, max: u8) -> Self {
        Self {
            min,
            max,
            value: min,
        }
    }

    /// The duration hour stepper, `[0, 23]`.
    #[must_use]
    pub const fn hours() -> Self {
        Self::new(0, MAX_HOURS)
    }

    /// The duration minute stepper, `[0, 59]`.
    #[must_use]
    pub const fn minutes() -> Self {
        Self::new(0, MAX_MINUTES)
    }

    /// Sets the value, clamped into the stepper range, and returns it.
    pub fn set(&mut self, value: i32) -> u8 {
        let clamped: i32 = value.clamp(i32::from(self.min), i32::from(self.max));
        self.value = u8::try_from(clamped).unwrap_or(self.min);
        self.value
    }

    /// Returns the current value.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.value
    }

    /// Returns the value zero-padded to two digits.
    #[must_use]
    pub fn display(&self) -> String {
        format!("{:02}", self.value)
    }
}

/// A flight being dragged onto the calendar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraggableFlight {
    /// The template this instance was created from.
    pub template_id: TemplateId,
    /// The title the timeslot will carry.
    pub title: String,
    /// The start time applied to the drop date.
    pub start: ClockTime,
    /// The timeslot length.
    pub duration: SlotDuration,
    /// Display colors copied from the template.
    pub colors: FlightColors,
}

/// The palette of flight templates, in render order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlightCatalog {
    templates: Vec<FlightTemplate>,
}

impl FlightCatalog {
    /// Creates a catalog from templates.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::DuplicateTemplate` if two templates share an id.
    pub fn new(templates: Vec<FlightTemplate>) -> Result<Self, CoreError> {
        let mut seen: HashSet<&TemplateId> = HashSet::new();
        for template in &templates {
            if !seen.insert(template.id()) {
                return Err(CoreError::DuplicateTemplate(template.id().clone()));
            }
        }
        Ok(Self { templates })
    }

    /// Returns the templates in render order.
    #[must_use]
    pub fn templates(&self) -> &[FlightTemplate] {
        &self.templates
    }

    /// Looks up a template by id.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::UnknownTemplate` if the palette has no such template.
    pub fn template(&self, id: &TemplateId) -> Result<&FlightTemplate, CoreError> {
        self.templates
            .iter()
            .find(|t| t.id() == id)
            .ok_or_else(|| CoreError::UnknownTemplate(id.clone()))
    }

    /// Creates a draggable carrying the template's own defaults.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::UnknownTemplate` if the palette has no such template.
    pub fn draggable(&self, id: &TemplateId) -> Result<DraggableFlight, CoreError> {
        let template: &FlightTemplate = self.template(id)?;
        Ok(DraggableFlight {
            template_id: template.id().clone(),
            title: template.name().to_string(),
            start: template.default_start(),
            duration: template.default_duration(),
            colors: template.colors().clone(),
        })
    }

    /// Creates a new draggable stamped with a start time and duration.
    ///
    /// The duration fields pass through the hour and minute steppers, so
    /// values outside `[0, 23]` and `[0, 59]` are clamped. The template
    /// itself is not changed.
    ///
    /// # Arguments
    ///
    /// * `id` - The template to instantiate
    /// * `time` - The start time for the new instance
    /// * `duration_hours` - Hour stepper input
    /// * `duration_minutes` - Minute stepper input
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The palette has no such template
    /// - Both duration fields are zero after clamping
    pub fn create_draggable_instance(
        &self,
        id: &TemplateId,
        time: ClockTime,
        duration_hours: i32,
        duration_minutes: i32,
    ) -> Result<DraggableFlight, CoreError> {
        let template: &FlightTemplate = self.template(id)?;

        let mut hours: Stepper = Stepper::hours();
        let mut minutes: Stepper = Stepper::minutes();
        let duration: SlotDuration =
            SlotDuration::new(hours.set(duration_hours), minutes.set(duration_minutes))?;

        Ok(DraggableFlight {
            template_id: template.id().clone(),
            title: template.name().to_string(),
            start: time,
            duration,
            colors: template.colors().clone(),
        })
    }
}
