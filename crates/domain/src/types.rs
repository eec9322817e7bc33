// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::clock::{ClockTime, SlotDuration};
use crate::error::DomainError;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeSet;

/// Identifier of a schedulable resource (a court).
///
/// Court ids are issued by the server and are read-only to the scheduler.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ResourceId(u32);

impl ResourceId {
    /// Creates a new `ResourceId`.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the numeric value.
    #[must_use]
    pub const fn value(&self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for ResourceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The set of courts enabled at one moment.
///
/// A selection is a snapshot: it is built fresh from the toggles on every
/// query and copied into entries, so later toggle changes never alter an
/// entry that already holds one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceSelection(BTreeSet<ResourceId>);

impl ResourceSelection {
    /// Creates an empty selection.
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeSet::new())
    }

    /// Returns whether no court is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of selected courts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns whether `id` is selected.
    #[must_use]
    pub fn contains(&self, id: ResourceId) -> bool {
        self.0.contains(&id)
    }

    /// Adds a court to the selection.
    pub fn insert(&mut self, id: ResourceId) {
        self.0.insert(id);
    }

    /// Iterates the selected courts in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = ResourceId> + '_ {
        self.0.iter().copied()
    }

    /// Returns the selected courts as an ascending list.
    #[must_use]
    pub fn to_vec(&self) -> Vec<ResourceId> {
        self.iter().collect()
    }
}

impl FromIterator<ResourceId> for ResourceSelection {
    fn from_iter<I: IntoIterator<Item = ResourceId>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Identifier of a flight template in the palette.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TemplateId(String);

impl TemplateId {
    /// Creates a new `TemplateId`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTemplateId` if the value is empty.
    pub fn new(value: &str) -> Result<Self, DomainError> {
        let trimmed: &str = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidTemplateId);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the identifier value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for TemplateId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<TemplateId> for String {
    fn from(value: TemplateId) -> Self {
        value.0
    }
}

impl std::fmt::Display for TemplateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Server-issued identifier of a persisted timeslot.
///
/// The server may send the id as a JSON string or a JSON number; both are
/// held as the decimal string form.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(into = "String")]
pub struct TimeslotId(String);

impl TimeslotId {
    /// Creates a new `TimeslotId`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTimeslotId` if the value is empty.
    pub fn new(value: &str) -> Result<Self, DomainError> {
        let trimmed: &str = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidTimeslotId);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the identifier value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for TimeslotId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Number(i64),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Text(text) => Self::new(&text).map_err(serde::de::Error::custom),
            Raw::Number(number) => Ok(Self(number.to_string())),
        }
    }
}

impl From<TimeslotId> for String {
    fn from(value: TimeslotId) -> Self {
        value.0
    }
}

impl std::fmt::Display for TimeslotId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Foreground and background colors of a flight on the palette and calendar.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FlightColors {
    /// Text color.
    #[serde(rename = "foreground_color")]
    pub foreground: String,
    /// Fill color.
    #[serde(rename = "background_color")]
    pub background: String,
}

/// A draggable flight template from the palette.
///
/// Templates are rendered once by the server and never change afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightTemplate {
    id: TemplateId,
    name: String,
    default_start: ClockTime,
    default_duration: SlotDuration,
    #[serde(flatten)]
    colors: FlightColors,
}

impl FlightTemplate {
    /// Creates a new `FlightTemplate`.
    ///
    /// # Arguments
    ///
    /// * `id` - The template identifier
    /// * `name` - The flight name, used as the timeslot title
    /// * `default_start` - Start time stamped on new draggables
    /// * `default_duration` - Duration stamped on new draggables
    /// * `colors` - Display colors
    #[must_use]
    pub const fn new(
        id: TemplateId,
        name: String,
        default_start: ClockTime,
        default_duration: SlotDuration,
        colors: FlightColors,
    ) -> Self {
        Self {
            id,
            name,
            default_start,
            default_duration,
            colors,
        }
    }

    /// Returns the template identifier.
    #[must_use]
    pub const fn id(&self) -> &TemplateId {
        &self.id
    }

    /// Returns the flight name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the default start time.
    #[must_use]
    pub const fn default_start(&self) -> ClockTime {
        self.default_start
    }

    /// Returns the default duration.
    #[must_use]
    pub const fn default_duration(&self) -> SlotDuration {
        self.default_duration
    }

    /// Returns the display colors.
    #[must_use]
    pub const fn colors(&self) -> &FlightColors {
        &self.colors
    }
}
