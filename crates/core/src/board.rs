// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::calendar::{Calendar, EntryKey, InitialEvent, Selection, TimeslotEntry};
use crate::catalog::FlightCatalog;
use crate::error::CoreError;
use crate::highlight::Highlights;
use crate::pending::PendingOps;
use crate::registry::{ResourceRegistry, ResourceToggle};
use crate::side_panel::SidePanel;
use flight_sched_domain::FlightTemplate;
use serde::{Deserialize, Serialize};

/// The data the server renders into the scheduling page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageBootstrap {
    /// The flight whose timeslots are being scheduled.
    pub flight_id: String,
    /// The court toggles.
    pub courts: Vec<ResourceToggle>,
    /// The palette templates.
    #[serde(default)]
    pub templates: Vec<FlightTemplate>,
    /// Timeslots already persisted.
    #[serde(default)]
    pub events: Vec<InitialEvent>,
}

/// Everything on the scheduling page that holds state.
///
/// The board is the single owner of the calendar and the views that mirror
/// it. It is handed to the synchronizer explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// The calendar state model.
    pub calendar: Calendar,
    /// The court toggles.
    pub registry: ResourceRegistry,
    /// The flight palette.
    pub catalog: FlightCatalog,
    /// The list of confirmed timeslots.
    pub side_panel: SidePanel,
    /// Highlight markers.
    pub highlights: Highlights,
    /// Outstanding remote requests.
    pub pending: PendingOps,
}

impl Board {
    /// Creates a board, adding a side panel row for every confirmed entry.
    ///
    /// # Errors
    ///
    /// Returns an error if a confirmed entry cannot be mirrored.
    pub fn new(
        calendar: Calendar,
        registry: ResourceRegistry,
        catalog: FlightCatalog,
    ) -> Result<Self, CoreError> {
        let mut side_panel: SidePanel = SidePanel::new();
        for entry in calendar.entries().iter().filter(|e| e.confirmed()) {
            side_panel.add_row(entry)?;
        }
        Ok(Self {
            calendar,
            registry,
            catalog,
            side_panel,
            highlights: Highlights::new(),
            pending: PendingOps::new(),
        })
    }

    /// Builds the board from the page bootstrap document.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Two courts, templates or events share an id
    /// - An event is not a valid confirmed timeslot
    pub fn from_bootstrap(page: PageBootstrap) -> Result<Self, CoreError> {
        let registry: ResourceRegistry = ResourceRegistry::new(page.courts)?;
        let catalog: FlightCatalog = FlightCatalog::new(page.templates)?;
        let calendar: Calendar = Calendar::from_initial_events(page.events)?;
        Self::new(calendar, registry, catalog)
    }

    /// Handles a click on an entry: highlights it and its courts.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::EntryNotFound` if no entry exists for `key`.
    pub fn select(&mut self, key: EntryKey) -> Result<Selection, CoreError> {
        let selection: Selection = self.calendar.on_select(key)?;
        self.highlights
            .highlight_entry(&self.calendar, selection.id.as_ref());
        self.highlights
            .highlight_resources(&self.registry, &selection.resources);
        Ok(selection)
    }

    /// Removes an entry along with its side panel row and highlight.
    pub fn remove_entry(&mut self, key: EntryKey) -> Option<TimeslotEntry> {
        let entry: TimeslotEntry = self.calendar.remove(key)?;
        if let Some(id) = entry.id() {
            self.side_panel.remove_row(id);
            self.highlights.clear_entry_if(id);
        }
        Some(entry)
    }
}
