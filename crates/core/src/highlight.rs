// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Cross-highlighting of a selected timeslot and its courts.
//!
//! Both markers are recomputed from scratch on every call.

use crate::calendar::Calendar;
use crate::registry::ResourceRegistry;
use flight_sched_domain::{ResourceId, ResourceSelection, TimeslotId};
use std::collections::BTreeSet;

/// The highlighted calendar entry and court rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Highlights {
    entry: Option<TimeslotId>,
    resources: BTreeSet<ResourceId>,
}

impl Highlights {
    /// Creates a state with nothing highlighted.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entry: None,
            resources: BTreeSet::new(),
        }
    }

    /// Highlights the calendar entry with `id` and clears every other one.
    ///
    /// When `id` is `None` or no entry on the calendar carries it, nothing is
    /// highlighted afterwards.
    pub fn highlight_entry(&mut self, calendar: &Calendar, id: Option<&TimeslotId>) {
        self.entry = id
            .filter(|id| calendar.get_by_id(id).is_some())
            .cloned();
    }

    /// Highlights every court row listed in `ids` and clears the rest.
    ///
    /// Ids without a row in the registry are ignored.
    pub fn highlight_resources(&mut self, registry: &ResourceRegistry, ids: &ResourceSelection) {
        self.resources = registry
            .toggles()
            .iter()
            .map(|t| t.id)
            .filter(|id| ids.contains(*id))
            .collect();
    }

    /// Clears the entry marker if it points at `id`.
    pub fn clear_entry_if(&mut self, id: &TimeslotId) {
        if self.entry.as_ref() == Some(id) {
            self.entry = None;
        }
    }

    /// Returns the highlighted entry id.
    #[must_use]
    pub const fn highlighted_entry(&self) -> Option<&TimeslotId> {
        self.entry.as_ref()
    }

    /// Returns whether the entry with `id` is highlighted.
    #[must_use]
    pub fn is_entry_highlighted(&self, id: &TimeslotId) -> bool {
        self.entry.as_ref() == Some(id)
    }

    /// Returns the highlighted court ids.
    #[must_use]
    pub const fn highlighted_resources(&self) -> &BTreeSet<ResourceId> {
        &self.resources
    }

    /// Returns whether the court row for `id` is highlighted.
    #[must_use]
    pub fn is_resource_highlighted(&self, id: ResourceId) -> bool {
        self.resources.contains(&id)
    }
}
