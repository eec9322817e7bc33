// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Plain-text views of the board.

use flight_sched::{Board, TimeslotEntry};
use time::PrimitiveDateTime;

fn wall(value: PrimitiveDateTime) -> String {
    format!("{} {:02}:{:02}", value.date(), value.hour(), value.minute())
}

fn court_ids(entry: &TimeslotEntry) -> String {
    let ids: Vec<String> = entry.resources().iter().map(|id| id.to_string()).collect();
    if ids.is_empty() {
        String::from("-")
    } else {
        ids.join(",")
    }
}

/// One line per calendar entry. The highlighted entry is starred.
#[must_use]
pub fn entries(board: &Board) -> Vec<String> {
    board
        .calendar
        .entries()
        .iter()
        .map(|entry| {
            let marker: char = match entry.id() {
                Some(id) if board.highlights.is_entry_highlighted(id) => '*',
                _ => ' ',
            };
            let id: String = entry
                .id()
                .map_or_else(|| String::from("-"), ToString::to_string);
            let when: String = entry.span().map_or_else(
                || String::from("unscheduled"),
                |span| format!("{} - {}", wall(span.start()), wall(span.end())),
            );
            format!(
                "{marker}{} {id} {:?} \"{}\" {when} courts {}",
                entry.key(),
                entry.phase(),
                entry.title(),
                court_ids(entry)
            )
        })
        .collect()
}

/// One line per side panel row.
#[must_use]
pub fn rows(board: &Board) -> Vec<String> {
    board
        .side_panel
        .rows()
        .iter()
        .map(|row| format!("{} {}", row.id, row.label))
        .collect()
}

/// One line per palette template.
#[must_use]
pub fn palette(board: &Board) -> Vec<String> {
    board
        .catalog
        .templates()
        .iter()
        .map(|t| {
            format!(
                "{} \"{}\" {} for {}",
                t.id(),
                t.name(),
                t.default_start(),
                t.default_duration()
            )
        })
        .collect()
}

/// One line per court toggle. Highlighted courts are starred.
#[must_use]
pub fn courts_list(board: &Board) -> Vec<String> {
    board
        .registry
        .toggles()
        .iter()
        .map(|toggle| {
            let marker: char = if board.highlights.is_resource_highlighted(toggle.id) {
                '*'
            } else {
                ' '
            };
            let state: &str = if toggle.enabled { "on" } else { "off" };
            format!("{marker}{} {} {state}", toggle.id, toggle.label)
        })
        .collect()
}
