// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::{Command, CommandError, parse_line};
use flight_sched::EntryKey;
use flight_sched_domain::{ClockTime, ResourceId, TemplateId, TimeSpan, TimeslotId};
use time::macros::{date, datetime};

fn parse(line: &str) -> Command {
    parse_line(line).unwrap().unwrap()
}

#[test]
fn test_blank_lines_and_comments_are_skipped() {
    assert_eq!(parse_line(""), Ok(None));
    assert_eq!(parse_line("   "), Ok(None));
    assert_eq!(parse_line("# set up courts"), Ok(None));
}

#[test]
fn test_parse_drop() {
    assert_eq!(
        parse("drop singles 2024-06-01 9:00 1 30"),
        Command::Drop {
            template: TemplateId::new("singles").unwrap(),
            date: date!(2024 - 06 - 01),
            start: ClockTime::new(9, 0).unwrap(),
            duration_hours: 1,
            duration_minutes: 30,
        }
    );
}

#[test]
fn test_drop_keeps_out_of_range_stepper_values() {
    let Command::Drop {
        duration_hours,
        duration_minutes,
        ..
    } = parse("drop singles 2024-06-01 09:00 -2 90")
    else {
        panic!("expected drop");
    };
    assert_eq!(duration_hours, -2);
    assert_eq!(duration_minutes, 90);
}

#[test]
fn test_parse_move_and_resize() {
    assert_eq!(
        parse("move #3 2024-06-01T10:00 2024-06-01T11:30"),
        Command::Move {
            key: EntryKey::new(3),
            span: TimeSpan::new(datetime!(2024-06-01 10:00), datetime!(2024-06-01 11:30))
                .unwrap(),
        }
    );
    assert_eq!(
        parse("resize 3 2024-06-01T12:00"),
        Command::Resize {
            key: EntryKey::new(3),
            end: datetime!(2024-06-01 12:00),
        }
    );
}

#[test]
fn test_move_backwards_is_invalid() {
    let result = parse_line("move 3 2024-06-01T11:00 2024-06-01T10:00");
    assert!(matches!(
        result,
        Err(CommandError::InvalidArgument { argument: "end", .. })
    ));
}

#[test]
fn test_parse_entry_and_row_commands() {
    assert_eq!(parse("select 2"), Command::Select(EntryKey::new(2)));
    assert_eq!(parse("delete #2"), Command::Delete(EntryKey::new(2)));
    assert_eq!(
        parse("delete-row 17"),
        Command::DeleteRow(TimeslotId::new("17").unwrap())
    );
}

#[test]
fn test_parse_court_toggle() {
    assert_eq!(
        parse("court 7 on"),
        Command::Court {
            id: ResourceId::new(7),
            enabled: true,
        }
    );
    assert_eq!(
        parse("court 7 off"),
        Command::Court {
            id: ResourceId::new(7),
            enabled: false,
        }
    );
    assert!(matches!(
        parse_line("court 7 maybe"),
        Err(CommandError::InvalidArgument { argument: "state", .. })
    ));
}

#[test]
fn test_parse_queries() {
    assert_eq!(parse("entries"), Command::Entries);
    assert_eq!(parse("rows"), Command::Rows);
    assert_eq!(parse("palette"), Command::Palette);
    assert_eq!(parse("courts"), Command::Courts);
    assert_eq!(parse("wait"), Command::Wait);
    assert_eq!(parse("help"), Command::Help);
    assert_eq!(parse("quit"), Command::Quit);
    assert_eq!(parse("exit"), Command::Quit);
}

#[test]
fn test_unknown_command() {
    assert_eq!(
        parse_line("book 1"),
        Err(CommandError::Unknown(String::from("book")))
    );
}

#[test]
fn test_missing_argument_names_it() {
    let err: CommandError = parse_line("drop singles 2024-06-01").unwrap_err();
    assert_eq!(
        err,
        CommandError::MissingArgument {
            command: "drop",
            argument: "start",
        }
    );
    assert_eq!(err.to_string(), "'drop' needs <start>");
}

#[test]
fn test_invalid_arguments() {
    assert!(matches!(
        parse_line("drop singles 2024-13-01 09:00 1 0"),
        Err(CommandError::InvalidArgument { argument: "date", .. })
    ));
    assert!(matches!(
        parse_line("drop singles 2024-06-01 25:00 1 0"),
        Err(CommandError::InvalidArgument { argument: "start", .. })
    ));
    assert!(matches!(
        parse_line("select one"),
        Err(CommandError::InvalidArgument { argument: "key", .. })
    ));
}

#[test]
fn test_extra_arguments_are_refused() {
    assert_eq!(
        parse_line("rows now"),
        Err(CommandError::UnexpectedArgument(String::from("now")))
    );
}
