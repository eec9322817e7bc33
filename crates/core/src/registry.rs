// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use flight_sched_domain::{ResourceId, ResourceSelection};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One court checkbox in the court list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceToggle {
    /// The court id.
    pub id: ResourceId,
    /// The court name shown next to the checkbox.
    pub label: String,
    /// Whether the checkbox is ticked.
    #[serde(default)]
    pub enabled: bool,
}

/// The server-rendered list of court toggles.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceRegistry {
    toggles: Vec<ResourceToggle>,
}

impl ResourceRegistry {
    /// Creates a registry from toggles in render order.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::DuplicateResource` if two toggles share an id.
    pub fn new(toggles: Vec<ResourceToggle>) -> Result<Self, CoreError> {
        let mut seen: HashSet<ResourceId> = HashSet::new();
        for toggle in &toggles {
            if !seen.insert(toggle.id) {
                return Err(CoreError::DuplicateResource(toggle.id));
            }
        }
        Ok(Self { toggles })
    }

    /// Returns the toggles in render order.
    #[must_use]
    pub fn toggles(&self) -> &[ResourceToggle] {
        &self.toggles
    }

    /// Returns whether a toggle exists for `id`.
    #[must_use]
    pub fn contains(&self, id: ResourceId) -> bool {
        self.toggles.iter().any(|t| t.id == id)
    }

    /// Ticks or clears one court toggle.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::UnknownResource` if no toggle exists for `id`.
    pub fn set_enabled(&mut self, id: ResourceId, enabled: bool) -> Result<(), CoreError> {
        let toggle: &mut ResourceToggle = self
            .toggles
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(CoreError::UnknownResource(id))?;
        toggle.enabled = enabled;
        Ok(())
    }

    /// Returns the courts whose toggles are currently ticked.
    ///
    /// The selection is computed from the toggles on every call.
    #[must_use]
    pub fn get_active_resources(&self) -> ResourceSelection {
        self.toggles
            .iter()
            .filter(|t| t.enabled)
            .map(|t| t.id)
            .collect()
    }
}
