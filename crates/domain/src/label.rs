// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::{Month, PrimitiveDateTime, Weekday};

const fn day_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Sunday => "Sun",
        Weekday::Monday => "Mon",
        Weekday::Tuesday => "Tue",
        Weekday::Wednesday => "Wed",
        Weekday::Thursday => "Thu",
        Weekday::Friday => "Fri",
        Weekday::Saturday => "Sat",
    }
}

const fn month_name(month: Month) -> &'static str {
    match month {
        Month::January => "Jan",
        Month::February => "Feb",
        Month::March => "Mar",
        Month::April => "Apr",
        Month::May => "May",
        Month::June => "Jun",
        Month::July => "Jul",
        Month::August => "Aug",
        Month::September => "Sep",
        Month::October => "Oct",
        Month::November => "Nov",
        Month::December => "Dec",
    }
}

/// Formats a timeslot start for the side panel.
///
/// The layout is `Ddd Mon D YY HH:MM` with English three-letter names, an
/// unpadded day of month, a two-digit year and a zero-padded 24-hour time.
///
/// ```text
/// 2024-06-01T09:00 => "Sat Jun 1 24 09:00"
/// ```
#[must_use]
pub fn format_row_label(value: PrimitiveDateTime) -> String {
    format!(
        "{} {} {} {:02} {:02}:{:02}",
        day_name(value.weekday()),
        month_name(value.month()),
        value.day(),
        value.year().rem_euclid(100),
        value.hour(),
        value.minute()
    )
}
