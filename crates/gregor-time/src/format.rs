//! Fixed text renderings and ISO 8601 parsing for [`Date`] and [`Time`].
//!
//! Only the two fixed layouts below are supported; there is no format-token
//! interpretation here.

use crate::date::{write_iso, Date};
use crate::month::Month;
use crate::time::Time;
use gregor_core::errors::{Error, Result};
use gregor_core::fail;
use std::fmt::Write as _;
use std::str::FromStr;

/// Built-in layouts for [`Date::to_string_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DateFormat {
    /// `"Sat Jan 1 2000"`.
    #[default]
    TextDate,
    /// `"2000-01-01"`.
    IsoDate,
}

impl Date {
    /// Render in one of the built-in layouts.
    ///
    /// An invalid date renders as the empty string.
    pub fn to_string_with(&self, format: DateFormat) -> String {
        let (Ok((year, month, day)), Some(weekday)) = (self.ymd(), self.day_of_week()) else {
            return String::new();
        };
        let mut out = String::new();
        // Writing into a `String` cannot fail.
        let _ = match format {
            DateFormat::IsoDate => write_iso(&mut out, year, month, day),
            DateFormat::TextDate => {
                let month_name = Month::from_number(month).map_or("", |m| m.short_name());
                write!(out, "{} {month_name} {day} {year}", weekday.short_name())
            }
        };
        out
    }
}

impl FromStr for Date {
    type Err = Error;

    /// Parse `[-]YYYY-MM-DD`. The year has at least four digits.
    fn from_str(s: &str) -> Result<Self> {
        let (negative, rest) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        let mut parts = rest.splitn(3, '-');
        let (Some(y), Some(m), Some(d)) = (parts.next(), parts.next(), parts.next()) else {
            fail!("expected YYYY-MM-DD, got {s:?}");
        };
        if y.len() < 4 || m.len() != 2 || d.len() != 2 {
            fail!("expected YYYY-MM-DD, got {s:?}");
        }
        let year: i32 = digits(y, s)?;
        let year = if negative { -year } else { year };
        Date::try_new(year, digits(m, s)?, digits(d, s)?)
    }
}

impl FromStr for Time {
    type Err = Error;

    /// Parse `HH:MM`, `HH:MM:SS` or `HH:MM:SS.mmm` (one to three fraction
    /// digits).
    fn from_str(s: &str) -> Result<Self> {
        let (clock, fraction) = match s.split_once('.') {
            Some((clock, fraction)) => (clock, Some(fraction)),
            None => (s, None),
        };
        let fields: Vec<&str> = clock.split(':').collect();
        if !(2..=3).contains(&fields.len()) || fields.iter().any(|f| f.len() != 2) {
            fail!("expected HH:MM[:SS[.mmm]], got {s:?}");
        }
        if fraction.is_some() && fields.len() != 3 {
            fail!("fractional seconds need a seconds field in {s:?}");
        }
        let msec = match fraction {
            Some(f) if (1..=3).contains(&f.len()) => {
                let value: u16 = digits(f, s)?;
                value * 10u16.pow(3 - f.len() as u32)
            }
            Some(_) => fail!("expected one to three fraction digits in {s:?}"),
            None => 0,
        };
        let second = match fields.get(2) {
            Some(sec) => digits(sec, s)?,
            None => 0,
        };
        Time::try_new(digits(fields[0], s)?, digits(fields[1], s)?, second, msec)
    }
}

/// Parse an all-ASCII-digit field.
fn digits<T: FromStr>(field: &str, input: &str) -> Result<T> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        fail!("non-numeric field {field:?} in {input:?}");
    }
    match field.parse() {
        Ok(v) => Ok(v),
        Err(_) => fail!("field {field:?} out of range in {input:?}"),
    }
}
