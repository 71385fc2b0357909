// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Dates, weekdays and clock times in Reuters style.
//!
//! Responsibilities:
//! - Abbreviate months the way the style guide does (`Sept.`, but `March`).
//! - Spell out or abbreviate weekdays.
//! - Render 12-hour clock times with `a.m.`/`p.m.`, `noon` and `midnight`,
//!   followed by the zone or a bracketed GMT equivalent.

use crate::models::Moment;

/// Month names indexed from January. Short months are spelled out.
const MONTHS: [&str; 12] = [
    "Jan.", "Feb.", "March", "April", "May", "June", "July", "Aug.", "Sept.", "Oct.", "Nov.",
    "Dec.",
];

/// Weekday names indexed from Monday.
const DAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Three-letter weekday names for tables, indexed from Monday.
const DAYS_TABULAR: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Name printed for UTC and for timestamps without a zone.
const GMT: &str = "GMT";

/// Format a date according to Reuters style, e.g. `Sept. 1, 2021`.
///
/// # Examples
///
/// ```rust,ignore
/// use jiff::civil::date;
/// assert_eq!(reuters_style::format_date(date(2021, 3, 1)), "March 1, 2021");
/// ```
pub fn format_date(moment: impl Into<Moment>) -> String {
    let dt = moment.into().civil();
    let month = MONTHS[(dt.month() - 1) as usize];
    format!("{} {}, {:04}", month, dt.day(), dt.year())
}

/// Format the day of the week, in full or as a three-letter tabular form.
pub fn format_dayofweek(moment: impl Into<Moment>, tabular: bool) -> String {
    let index = moment.into().civil().weekday().to_monday_zero_offset() as usize;
    let days = if tabular { &DAYS_TABULAR } else { &DAYS };
    days[index].to_string()
}

/// Format a time of day according to Reuters style.
///
/// Noon and midnight are always written as words. Everything else uses the
/// 12-hour clock with `a.m.` or `p.m.`, dropping `:00` on the hour.
///
/// With `include_timezone` the zone abbreviation follows (`UTC` is printed as
/// `GMT`; timestamps without a zone are taken to be GMT). Without it, zoned
/// timestamps outside UTC get their GMT equivalent in brackets instead, as in
/// `12:30 p.m. (1030 GMT)`.
pub fn format_time(moment: impl Into<Moment>, include_timezone: bool) -> String {
    let moment = moment.into();
    let mut formatted = clock_phrase(moment.civil().hour(), moment.civil().minute());

    if include_timezone {
        let abbreviation = match moment.abbreviation() {
            Some(abbr) if abbr == "UTC" => GMT.to_string(),
            Some(abbr) => abbr,
            None => GMT.to_string(),
        };
        formatted.push(' ');
        formatted.push_str(&abbreviation);
    } else if !moment.is_utc()
        && let Some(utc) = moment.to_utc()
    {
        tracing::trace!(%utc, "appending GMT equivalent");
        formatted.push_str(&format!(" ({:02}{:02} {GMT})", utc.hour(), utc.minute()));
    }

    formatted
}

/// Render the wall-clock part without any zone information.
fn clock_phrase(hour: i8, minute: i8) -> String {
    match (hour, minute) {
        (0, 0) => "midnight".to_string(),
        (12, 0) => "noon".to_string(),
        _ => {
            let (hour, period) = match hour {
                0 => (12, "a.m."),
                1..=11 => (hour, "a.m."),
                12 => (12, "p.m."),
                _ => (hour - 12, "p.m."),
            };
            if minute == 0 {
                format!("{hour} {period}")
            } else {
                format!("{hour}:{minute:02} {period}")
            }
        }
    }
}
