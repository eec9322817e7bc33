// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::calendar::TimeslotEntry;
use crate::error::CoreError;
use flight_sched_domain::{TimeslotId, format_row_label};

/// One line of the side panel: a confirmed timeslot and its delete control.
///
/// The row refers to its entry only through the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidePanelRow {
    /// The timeslot the row mirrors.
    pub id: TimeslotId,
    /// Human-readable start, see `format_row_label`.
    pub label: String,
}

/// The list of confirmed timeslots shown beside the calendar.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SidePanel {
    rows: Vec<SidePanelRow>,
}

impl SidePanel {
    /// Creates an empty side panel.
    #[must_use]
    pub const fn new() -> Self {
        Self { rows: Vec::new() }
    }

    /// Adds the row for a confirmed entry, replacing any row for the same id.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotConfirmed` if the entry has not been confirmed.
    pub fn add_row(&mut self, entry: &TimeslotEntry) -> Result<(), CoreError> {
        let (Some(id), Some(span)) = (entry.id(), entry.span()) else {
            return Err(CoreError::NotConfirmed(entry.key()));
        };
        if !entry.confirmed() {
            return Err(CoreError::NotConfirmed(entry.key()));
        }

        self.remove_row(id);
        self.rows.push(SidePanelRow {
            id: id.clone(),
            label: format_row_label(span.start()),
        });
        Ok(())
    }

    /// Removes the row for `id`. Returns whether a row was removed.
    pub fn remove_row(&mut self, id: &TimeslotId) -> bool {
        let before: usize = self.rows.len();
        self.rows.retain(|row| &row.id != id);
        self.rows.len() != before
    }

    /// Returns the rows in display order.
    #[must_use]
    pub fn rows(&self) -> &[SidePanelRow] {
        &self.rows
    }

    /// Returns the row for `id`, if any.
    #[must_use]
    pub fn row(&self, id: &TimeslotId) -> Option<&SidePanelRow> {
        self.rows.iter().find(|row| &row.id == id)
    }
}
