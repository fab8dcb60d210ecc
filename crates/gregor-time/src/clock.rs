//! Platform clock adapter backed by chrono.
//!
//! The value types never read a clock themselves. The functions here take a
//! chrono snapshot, break it down into a [`Tm`] and hand it to the usual
//! `from_tm` constructors. chrono does not report whether DST is in effect,
//! so every value produced here carries [`Dst::Unknown`].

use crate::date::Date;
use crate::dst::Dst;
use crate::time::Time;
use crate::tm::Tm;
use chrono::{Datelike, Local, NaiveDate, NaiveDateTime, NaiveTime, Timelike, Utc};

/// Break a chrono date-time down into C `struct tm` fields.
pub fn tm_from_naive(dt: &NaiveDateTime) -> Tm {
    Tm {
        tm_sec: dt.second() as i32,
        tm_min: dt.minute() as i32,
        tm_hour: dt.hour() as i32,
        tm_mday: dt.day() as i32,
        tm_mon: dt.month0() as i32,
        tm_year: dt.year() - Tm::YEAR_BASE,
        tm_wday: dt.weekday().num_days_from_sunday() as i32,
        tm_yday: dt.ordinal0() as i32,
        tm_isdst: Dst::Unknown.flag(),
    }
}

impl Date {
    /// Today's date in the local time zone.
    pub fn current_local_date() -> Date {
        Date::from_tm(&tm_from_naive(&Local::now().naive_local()))
    }

    /// Today's date in UTC.
    pub fn current_utc_date() -> Date {
        Date::from_tm(&tm_from_naive(&Utc::now().naive_utc()))
    }

    /// Convert to a chrono date, if chrono can represent it.
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        let (y, m, d) = self.ymd().ok()?;
        NaiveDate::from_ymd_opt(y, u32::from(m), u32::from(d))
    }
}

impl Time {
    /// The current local wall-clock time.
    pub fn current_local_time() -> Time {
        Time::from(Local::now().time())
    }

    /// The current UTC wall-clock time.
    pub fn current_utc_time() -> Time {
        Time::from(Utc::now().time())
    }

    /// Convert to a chrono time; `None` for the null time.
    pub fn to_naive_time(&self) -> Option<NaiveTime> {
        let (h, m, s, ms) = self.hms().ok()?;
        NaiveTime::from_hms_milli_opt(u32::from(h), u32::from(m), u32::from(s), u32::from(ms))
    }
}

impl From<NaiveDate> for Date {
    fn from(d: NaiveDate) -> Self {
        Date::new(d.year(), d.month() as u8, d.day() as u8)
    }
}

impl From<NaiveTime> for Time {
    /// Sub-millisecond digits are dropped; a leap second is folded into the
    /// last millisecond of its minute.
    fn from(t: NaiveTime) -> Self {
        let msec = (t.nanosecond() / 1_000_000).min(999) as u16;
        Time::new(t.hour() as u8, t.minute() as u8, t.second() as u8, msec)
    }
}
