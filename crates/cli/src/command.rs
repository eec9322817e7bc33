// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Line commands read from stdin.
//!
//! Each command maps to one page event, or to a query of the board:
//!
//! ```text
//! drop <template> <YYYY-MM-DD> <HH:MM> <hours> <minutes>
//! move <key> <YYYY-MM-DDTHH:MM> <YYYY-MM-DDTHH:MM>
//! resize <key> <YYYY-MM-DDTHH:MM>
//! select <key>
//! delete <key>
//! delete-row <timeslot-id>
//! court <id> on|off
//! entries | rows | palette | courts | wait | help | quit
//! ```

use flight_sched::EntryKey;
use flight_sched_domain::{
    ClockTime, DomainError, ResourceId, TemplateId, TimeSpan, TimeslotId, parse_date,
    parse_wall_clock,
};
use std::str::FromStr;
use time::{Date, PrimitiveDateTime};

/// Usage text printed by `help`.
pub const USAGE: &str = "\
drop <template> <YYYY-MM-DD> <HH:MM> <hours> <minutes>
move <key> <YYYY-MM-DDTHH:MM> <YYYY-MM-DDTHH:MM>
resize <key> <YYYY-MM-DDTHH:MM>
select <key>
delete <key>
delete-row <timeslot-id>
court <id> on|off
entries | rows | palette | courts | wait | help | quit";

/// A parsed line command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Drop a palette flight on a day.
    Drop {
        template: TemplateId,
        date: Date,
        start: ClockTime,
        duration_hours: i32,
        duration_minutes: i32,
    },
    /// Move an entry to a new range.
    Move { key: EntryKey, span: TimeSpan },
    /// Move the end of an entry.
    Resize { key: EntryKey, end: PrimitiveDateTime },
    /// Click an entry.
    Select(EntryKey),
    /// Delete an entry.
    Delete(EntryKey),
    /// Press the delete control of a side panel row.
    DeleteRow(TimeslotId),
    /// Tick or clear a court.
    Court { id: ResourceId, enabled: bool },
    /// List calendar entries.
    Entries,
    /// List side panel rows.
    Rows,
    /// List palette templates.
    Palette,
    /// List court toggles.
    Courts,
    /// Wait for outstanding requests.
    Wait,
    /// Print usage.
    Help,
    /// Wait for outstanding requests and exit.
    Quit,
}

/// Errors from parsing a line command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// The command word is not known.
    Unknown(String),
    /// A required argument is missing.
    MissingArgument {
        /// The command word.
        command: &'static str,
        /// The missing argument.
        argument: &'static str,
    },
    /// More arguments than the command takes.
    UnexpectedArgument(String),
    /// An argument could not be parsed.
    InvalidArgument {
        /// The argument name.
        argument: &'static str,
        /// The value given.
        value: String,
        /// Why it was refused.
        reason: String,
    },
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unknown(word) => write!(f, "Unknown command '{word}', try 'help'"),
            Self::MissingArgument { command, argument } => {
                write!(f, "'{command}' needs <{argument}>")
            }
            Self::UnexpectedArgument(value) => write!(f, "Unexpected argument '{value}'"),
            Self::InvalidArgument {
                argument,
                value,
                reason,
            } => write!(f, "Invalid <{argument}> '{value}': {reason}"),
        }
    }
}

impl std::error::Error for CommandError {}

struct Words<'a> {
    command: &'static str,
    words: std::str::SplitWhitespace<'a>,
}

impl<'a> Words<'a> {
    fn next(&mut self, argument: &'static str) -> Result<&'a str, CommandError> {
        self.words.next().ok_or(CommandError::MissingArgument {
            command: self.command,
            argument,
        })
    }

    fn parse<T>(&mut self, argument: &'static str) -> Result<T, CommandError>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        let value: &str = self.next(argument)?;
        value.parse::<T>().map_err(|e| invalid(argument, value, &e))
    }

    fn key(&mut self) -> Result<EntryKey, CommandError> {
        let value: &str = self.next("key")?;
        value
            .trim_start_matches('#')
            .parse::<u64>()
            .map(EntryKey::new)
            .map_err(|e| invalid("key", value, &e))
    }

    fn with<T>(
        &mut self,
        argument: &'static str,
        parse: impl FnOnce(&str) -> Result<T, DomainError>,
    ) -> Result<T, CommandError> {
        let value: &str = self.next(argument)?;
        parse(value).map_err(|e| invalid(argument, value, &e))
    }

    fn finish<T>(mut self, command: T) -> Result<T, CommandError> {
        match self.words.next() {
            Some(extra) => Err(CommandError::UnexpectedArgument(extra.to_string())),
            None => Ok(command),
        }
    }
}

fn invalid(argument: &'static str, value: &str, reason: &dyn std::fmt::Display) -> CommandError {
    CommandError::InvalidArgument {
        argument,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Parses one input line. Blank lines and `#` comments yield `None`.
///
/// # Errors
///
/// Returns a `CommandError` if the command word is unknown or an argument
/// is missing or invalid.
pub fn parse_line(line: &str) -> Result<Option<Command>, CommandError> {
    let line: &str = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let mut words = line.split_whitespace();
    let word: &str = words.next().unwrap_or_default();
    let command: &'static str = match word {
        "drop" => "drop",
        "move" => "move",
        "resize" => "resize",
        "select" => "select",
        "delete" => "delete",
        "delete-row" => "delete-row",
        "court" => "court",
        "entries" => "entries",
        "rows" => "rows",
        "palette" => "palette",
        "courts" => "courts",
        "wait" => "wait",
        "help" => "help",
        "quit" | "exit" => "quit",
        other => return Err(CommandError::Unknown(other.to_string())),
    };
    let mut args: Words<'_> = Words { command, words };

    let parsed: Command = match command {
        "drop" => Command::Drop {
            template: args.with("template", TemplateId::new)?,
            date: args.with("date", parse_date)?,
            start: args.parse("start")?,
            duration_hours: args.parse("hours")?,
            duration_minutes: args.parse("minutes")?,
        },
        "move" => {
            let key: EntryKey = args.key()?;
            let start: PrimitiveDateTime = args.with("start", parse_wall_clock)?;
            let end: PrimitiveDateTime = args.with("end", parse_wall_clock)?;
            let span: TimeSpan =
                TimeSpan::new(start, end).map_err(|e| invalid("end", &end.to_string(), &e))?;
            Command::Move { key, span }
        }
        "resize" => Command::Resize {
            key: args.key()?,
            end: args.with("end", parse_wall_clock)?,
        },
        "select" => Command::Select(args.key()?),
        "delete" => Command::Delete(args.key()?),
        "delete-row" => Command::DeleteRow(args.with("timeslot-id", TimeslotId::new)?),
        "court" => {
            let id: ResourceId = ResourceId::new(args.parse("id")?);
            let state: &str = args.next("state")?;
            let enabled: bool = match state {
                "on" => true,
                "off" => false,
                other => return Err(invalid("state", other, &"expected on or off")),
            };
            Command::Court { id, enabled }
        }
        "entries" => Command::Entries,
        "rows" => Command::Rows,
        "palette" => Command::Palette,
        "courts" => Command::Courts,
        "wait" => Command::Wait,
        "help" => Command::Help,
        _ => Command::Quit,
    };

    args.finish(parsed).map(Some)
}
