// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Timestamp input accepted by the date/time formatters.
//!
//! A [`Moment`] is either a civil (timezone-naive) datetime or a zoned one.
//! Naive values are assumed to already be in the display zone, which the
//! formatters treat as GMT. Zoned values carry their tz database entry so the
//! formatters can print the zone abbreviation and convert to UTC.

use chrono::{Datelike, Timelike};
use jiff::civil;
use jiff::tz::{Offset, TimeZone};
use jiff::{Timestamp, Zoned};

use crate::models::error::MomentError;

/// A point in time with an optional timezone attached.
#[derive(Clone, Debug, PartialEq)]
pub enum Moment {
    /// No timezone; the wall clock is taken as-is.
    Naive(civil::DateTime),
    /// Wall clock plus the zone it was observed in.
    Zoned(Zoned),
}

impl Moment {
    /// Wall-clock reading in the moment's own zone.
    pub fn civil(&self) -> civil::DateTime {
        match self {
            Moment::Naive(dt) => *dt,
            Moment::Zoned(zdt) => zdt.datetime(),
        }
    }

    /// The zoned value, if a timezone is attached.
    pub fn zoned(&self) -> Option<&Zoned> {
        match self {
            Moment::Naive(_) => None,
            Moment::Zoned(zdt) => Some(zdt),
        }
    }

    /// Short zone abbreviation from the tz database (`SAST`, `JST`, `UTC`, ...).
    pub fn abbreviation(&self) -> Option<String> {
        self.zoned().map(|zdt| zdt.strftime("%Z").to_string())
    }

    /// True when a zone is attached and that zone is UTC itself.
    ///
    /// Zones that merely sit at a zero offset (London in winter) do not count.
    pub fn is_utc(&self) -> bool {
        self.zoned().is_some_and(|zdt| is_utc_zone(zdt.time_zone()))
    }

    /// The same instant expressed in UTC. `None` for naive moments.
    pub fn to_utc(&self) -> Option<civil::DateTime> {
        self.zoned()
            .map(|zdt| zdt.with_time_zone(TimeZone::UTC).datetime())
    }
}

fn is_utc_zone(tz: &TimeZone) -> bool {
    match tz.iana_name() {
        Some(name) => matches!(name, "UTC" | "Etc/UTC"),
        None => tz.to_fixed_offset().is_ok_and(|offset| offset == Offset::UTC),
    }
}

fn civil_from_parts(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
    nanosecond: u32,
) -> Result<civil::DateTime, MomentError> {
    let year = i16::try_from(year).map_err(|_| MomentError::YearOutOfRange(year))?;
    // Leap seconds surface as nanosecond values past one second in chrono.
    let nanosecond = nanosecond.min(999_999_999);
    Ok(civil::DateTime::new(
        year,
        month as i8,
        day as i8,
        hour as i8,
        minute as i8,
        second as i8,
        nanosecond as i32,
    )?)
}

impl From<civil::DateTime> for Moment {
    fn from(dt: civil::DateTime) -> Self {
        Moment::Naive(dt)
    }
}

impl From<civil::Date> for Moment {
    fn from(date: civil::Date) -> Self {
        Moment::Naive(civil::DateTime::from(date))
    }
}

impl From<Zoned> for Moment {
    fn from(zdt: Zoned) -> Self {
        Moment::Zoned(zdt)
    }
}

impl From<&Zoned> for Moment {
    fn from(zdt: &Zoned) -> Self {
        Moment::Zoned(zdt.clone())
    }
}

impl From<Timestamp> for Moment {
    fn from(ts: Timestamp) -> Self {
        Moment::Zoned(ts.to_zoned(TimeZone::UTC))
    }
}

impl From<&Moment> for Moment {
    fn from(moment: &Moment) -> Self {
        moment.clone()
    }
}

impl TryFrom<chrono::NaiveDateTime> for Moment {
    type Error = MomentError;

    fn try_from(dt: chrono::NaiveDateTime) -> Result<Self, Self::Error> {
        civil_from_parts(
            dt.year(),
            dt.month(),
            dt.day(),
            dt.hour(),
            dt.minute(),
            dt.second(),
            dt.nanosecond(),
        )
        .map(Moment::Naive)
    }
}

impl TryFrom<chrono::NaiveDate> for Moment {
    type Error = MomentError;

    fn try_from(date: chrono::NaiveDate) -> Result<Self, Self::Error> {
        civil_from_parts(date.year(), date.month(), date.day(), 0, 0, 0, 0).map(Moment::Naive)
    }
}

impl TryFrom<chrono::DateTime<chrono::Utc>> for Moment {
    type Error = MomentError;

    fn try_from(dt: chrono::DateTime<chrono::Utc>) -> Result<Self, Self::Error> {
        let nanos = dt.timestamp_subsec_nanos().min(999_999_999) as i32;
        let ts = Timestamp::new(dt.timestamp(), nanos)?;
        Ok(Moment::from(ts))
    }
}

impl TryFrom<time::PrimitiveDateTime> for Moment {
    type Error = MomentError;

    fn try_from(dt: time::PrimitiveDateTime) -> Result<Self, Self::Error> {
        civil_from_parts(
            dt.year(),
            u8::from(dt.month()) as u32,
            dt.day() as u32,
            dt.hour() as u32,
            dt.minute() as u32,
            dt.second() as u32,
            dt.nanosecond(),
        )
        .map(Moment::Naive)
    }
}

impl TryFrom<time::OffsetDateTime> for Moment {
    type Error = MomentError;

    /// Offset zero maps to UTC; any other offset becomes a fixed-offset zone.
    fn try_from(dt: time::OffsetDateTime) -> Result<Self, Self::Error> {
        let ts = Timestamp::new(dt.unix_timestamp(), dt.nanosecond() as i32)?;
        let seconds = dt.offset().whole_seconds();
        let tz = if seconds == 0 {
            TimeZone::UTC
        } else {
            TimeZone::fixed(Offset::from_seconds(seconds)?)
        };
        Ok(Moment::Zoned(ts.to_zoned(tz)))
    }
}
