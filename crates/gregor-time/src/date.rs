//! `Date` type: a proleptic-Gregorian calendar date.
//!
//! Dates are anchored on the astronomical **Julian Day Number** (JDN): a
//! continuous count of days in which JDN 0 is 24 November 4714 BCE
//! (proleptic Gregorian) and JDN 2 451 545 is 1 January 2000. Every
//! conversion, difference and day-based shift goes through the
//! `civil_to_julian_day` / `julian_day_to_civil` pair, which are exact
//! inverses over the whole `i32` year range.
//!
//! # Year numbering
//! Years are astronomical: year 0 is 1 BCE and is a leap year, year -1 is
//! 2 BCE, and so on. Dates before the Gregorian reform (15 October 1582) are
//! still computed with Gregorian rules; see [`before_gregorian_calendar`].
//!
//! # Invalid dates
//! A `Date` is either valid or invalid. Lenient constructors such as
//! [`Date::new`] return the invalid state instead of failing, every accessor
//! returns `None` for it, and arithmetic on it yields another invalid date.
//! [`Date::try_new`] is the strict counterpart that reports an error.

use crate::dst::Dst;
use crate::month::Month;
use crate::tm::Tm;
use crate::weekday::Weekday;
use gregor_core::errors::{Error, Result};
use gregor_core::{ensure, JulianDay, Year};
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

/// First day of the Gregorian calendar as (year, month, day).
pub const GREGORIAN_CUTOVER: (Year, u8, u8) = (1582, 10, 15);

/// Julian Day of the earliest representable date, `i32::MIN`-01-01.
pub const MIN_JULIAN_DAY: JulianDay = civil_to_julian_day(Year::MIN, 1, 1);

/// Julian Day of the latest representable date, `i32::MAX`-12-31.
pub const MAX_JULIAN_DAY: JulianDay = civil_to_julian_day(Year::MAX, 12, 31);

/// Fields of a valid date. Built only by [`Civil::new`], which derives the
/// weekday, day of year and Julian Day together.
#[derive(Clone, Copy)]
struct Civil {
    year: Year,
    month: u8,
    day: u8,
    weekday: Weekday,
    day_of_year: u16,
    julian_day: JulianDay,
}

impl Civil {
    /// `(year, month, day)` must already be valid.
    fn new(year: Year, month: u8, day: u8) -> Self {
        debug_assert!(is_valid(year, month, day), "invalid civil date");
        let julian_day = civil_to_julian_day(year, month, day);
        Civil {
            year,
            month,
            day,
            weekday: Weekday::from_julian_day(julian_day),
            day_of_year: (julian_day - civil_to_julian_day(year, 1, 1)) as u16,
            julian_day,
        }
    }
}

/// A calendar date in the proleptic Gregorian calendar.
///
/// Equality, ordering and hashing look only at the calendar day; the DST
/// flag is compared separately with [`Date::is_dst_flag_same_to`]. Invalid
/// dates are all equal to each other and order before every valid date.
#[derive(Clone, Copy)]
pub struct Date {
    civil: Option<Civil>,
    dst: Dst,
}

impl Date {
    /// The invalid date.
    pub const INVALID: Date = Date {
        civil: None,
        dst: Dst::Unknown,
    };

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from year, month (1–12) and day-of-month.
    ///
    /// Returns [`Date::INVALID`] if the triple does not name a real day.
    pub fn new(year: Year, month: u8, day: u8) -> Self {
        if !is_valid(year, month, day) {
            debug!("rejecting invalid date {year}-{month:02}-{day:02}");
            return Date::INVALID;
        }
        Date {
            civil: Some(Civil::new(year, month, day)),
            dst: Dst::Unknown,
        }
    }

    /// Create a date, reporting why the triple is not a real day.
    pub fn try_new(year: Year, month: u8, day: u8) -> Result<Self> {
        ensure!(
            (1..=12).contains(&month),
            "month {month} out of range [1, 12]"
        );
        let days_in = month_length(year, month);
        ensure!(
            (1..=days_in).contains(&day),
            "day {day} out of range [1, {days_in}] for {year}-{month:02}"
        );
        Ok(Date::new(year, month, day))
    }

    /// Return this date carrying the given DST flag.
    pub fn with_dst(mut self, dst: Dst) -> Self {
        self.dst = dst;
        self
    }

    /// Create a date from a Julian Day Number.
    ///
    /// Returns [`Date::INVALID`] if the year would not fit in an `i32`.
    pub fn from_julian_day(julian_day: JulianDay) -> Self {
        match julian_day_to_civil(julian_day) {
            Some((y, m, d)) => Date::new(y, m, d),
            None => {
                trace!("julian day {julian_day} outside the representable range");
                Date::INVALID
            }
        }
    }

    /// Create a date from the calendar fields of a broken-down time.
    ///
    /// `tm_mday`, `tm_mon` and `tm_year` are re-validated; `tm_wday` and
    /// `tm_yday` are ignored and recomputed. `tm_isdst` becomes the DST flag.
    pub fn from_tm(tm: &Tm) -> Self {
        let dst = Dst::from_flag(tm.tm_isdst);
        let fields = tm
            .year()
            .zip(tm.month())
            .zip(u8::try_from(tm.tm_mday).ok());
        match fields {
            Some(((year, month), day)) => Date::new(year, month, day).with_dst(dst),
            None => {
                debug!(
                    "rejecting broken-down date tm_year={} tm_mon={} tm_mday={}",
                    tm.tm_year,
                    tm.tm_mon,
                    tm.tm_mday
                );
                Date::INVALID.with_dst(dst)
            }
        }
    }

    /// Convert to a broken-down time at midnight.
    ///
    /// Returns `None` for an invalid date or a year below `i32::MIN + 1900`.
    pub fn to_tm(&self) -> Option<Tm> {
        let c = self.civil?;
        Some(Tm {
            tm_mday: i32::from(c.day),
            tm_mon: i32::from(c.month) - 1,
            tm_year: c.year.checked_sub(Tm::YEAR_BASE)?,
            tm_wday: i32::from(c.weekday.days_since_sunday()),
            tm_yday: i32::from(c.day_of_year),
            tm_isdst: self.dst.flag(),
            ..Tm::default()
        })
    }

    /// Replace the date in place.
    ///
    /// On invalid input the date becomes invalid and `false` is returned.
    pub fn set_date(&mut self, year: Year, month: u8, day: u8, dst: Dst) -> bool {
        *self = Date::new(year, month, day).with_dst(dst);
        self.is_valid()
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return `true` unless this is the invalid date.
    pub fn is_valid(&self) -> bool {
        self.civil.is_some()
    }

    /// Return `(year, month, day)`.
    pub fn ymd(&self) -> Result<(Year, u8, u8)> {
        self.civil
            .map(|c| (c.year, c.month, c.day))
            .ok_or(Error::NullValue)
    }

    /// Return the year.
    pub fn year(&self) -> Option<Year> {
        self.civil.map(|c| c.year)
    }

    /// Return the month (1–12).
    pub fn month(&self) -> Option<u8> {
        self.civil.map(|c| c.month)
    }

    /// Return the day of the month (1–31).
    pub fn day(&self) -> Option<u8> {
        self.civil.map(|c| c.day)
    }

    /// Return the DST flag.
    pub fn dst(&self) -> Dst {
        self.dst
    }

    /// Return the weekday.
    pub fn day_of_week(&self) -> Option<Weekday> {
        self.civil.map(|c| c.weekday)
    }

    /// Return the number of days since January 1 (0–365).
    pub fn day_of_year(&self) -> Option<u16> {
        self.civil.map(|c| c.day_of_year)
    }

    /// Return the length of this date's month.
    pub fn days_in_month(&self) -> Option<u8> {
        self.civil.map(|c| month_length(c.year, c.month))
    }

    /// Return the length of this date's year.
    pub fn days_in_year(&self) -> Option<u16> {
        self.civil.map(|c| days_in_year(c.year))
    }

    /// Return `true` if this date precedes 15 October 1582.
    ///
    /// Informational only: the date is still computed with Gregorian rules.
    /// An invalid date returns `false`.
    pub fn is_before_gregorian_calendar(&self) -> bool {
        self.civil
            .map_or(false, |c| before_gregorian_calendar(c.year, c.month, c.day))
    }

    /// Return `true` if both dates carry the same DST flag.
    pub fn is_dst_flag_same_to(&self, other: &Date) -> bool {
        self.dst == other.dst
    }

    // ── Julian Day ────────────────────────────────────────────────────────────

    /// Return the Julian Day Number.
    pub fn to_julian_day(&self) -> Option<JulianDay> {
        self.civil.map(|c| c.julian_day)
    }

    /// Return the signed number of days from `self` to `other`.
    ///
    /// Positive if `other` is later.
    pub fn days_to(&self, other: &Date) -> Option<i64> {
        Some(other.to_julian_day()? - self.to_julian_day()?)
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────
    //
    // Results carry `Dst::Unknown`: the receiver's flag says nothing about
    // whether DST is in effect on the shifted day.

    /// Advance by `n` days (negative to go back).
    pub fn add_days(&self, n: i64) -> Date {
        let Some(c) = self.civil else {
            trace!("add_days on invalid date");
            return Date::INVALID;
        };
        match c.julian_day.checked_add(n) {
            Some(jd) => Date::from_julian_day(jd),
            None => Date::INVALID,
        }
    }

    /// Advance by `n` months, clamping the day to the target month's length.
    ///
    /// January 31 plus one month is the last day of February.
    pub fn add_months(&self, n: i32) -> Date {
        let Some(c) = self.civil else {
            trace!("add_months on invalid date");
            return Date::INVALID;
        };
        let total = i64::from(c.year) * 12 + i64::from(c.month) - 1 + i64::from(n);
        let Ok(year) = Year::try_from(total.div_euclid(12)) else {
            trace!("add_months({n}) overflows the year range");
            return Date::INVALID;
        };
        let month = (total.rem_euclid(12) + 1) as u8;
        let day = c.day.min(month_length(year, month));
        Date::new(year, month, day)
    }

    /// Advance by `n` years.
    ///
    /// February 29 becomes February 28 when the target year is not leap.
    pub fn add_years(&self, n: i32) -> Date {
        let Some(c) = self.civil else {
            trace!("add_years on invalid date");
            return Date::INVALID;
        };
        let Some(year) = c.year.checked_add(n) else {
            trace!("add_years({n}) overflows the year range");
            return Date::INVALID;
        };
        let day = c.day.min(month_length(year, c.month));
        Date::new(year, c.month, day)
    }

    fn sort_key(&self) -> Option<JulianDay> {
        self.to_julian_day()
    }
}

impl Default for Date {
    fn default() -> Self {
        Date::INVALID
    }
}

// ── Comparison ────────────────────────────────────────────────────────────────

impl Ord for Date {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sort_key().cmp(&other.sort_key())
    }
}

impl PartialOrd for Date {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Date {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Date {}

impl Hash for Date {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.sort_key().hash(state);
    }
}

// ── Arithmetic operators ──────────────────────────────────────────────────────

impl std::ops::Add<i64> for Date {
    type Output = Self;
    fn add(self, rhs: i64) -> Self {
        self.add_days(rhs)
    }
}

impl std::ops::Sub<i64> for Date {
    type Output = Self;
    fn sub(self, rhs: i64) -> Self {
        match rhs.checked_neg() {
            Some(n) => self.add_days(n),
            None => Date::INVALID,
        }
    }
}

impl std::ops::Sub<Date> for Date {
    type Output = Option<i64>;
    fn sub(self, rhs: Date) -> Option<i64> {
        rhs.days_to(&self)
    }
}

impl std::ops::AddAssign<i64> for Date {
    fn add_assign(&mut self, rhs: i64) {
        *self = *self + rhs;
    }
}

impl std::ops::SubAssign<i64> for Date {
    fn sub_assign(&mut self, rhs: i64) {
        *self = *self - rhs;
    }
}

// ── Display ───────────────────────────────────────────────────────────────────

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.civil {
            Some(c) => write_iso(f, c.year, c.month, c.day),
            None => write!(f, "invalid date"),
        }
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.civil {
            Some(c) => {
                write!(f, "Date(")?;
                write_iso(f, c.year, c.month, c.day)?;
                write!(f, ")")
            }
            None => write!(f, "Date(invalid)"),
        }
    }
}

/// Write `YYYY-MM-DD`, with a leading `-` for negative years.
pub(crate) fn write_iso(
    f: &mut impl std::fmt::Write,
    year: Year,
    month: u8,
    day: u8,
) -> std::fmt::Result {
    if year < 0 {
        write!(f, "-")?;
    }
    write!(f, "{:04}-{month:02}-{day:02}", year.unsigned_abs())
}

// ── Calendar rules ────────────────────────────────────────────────────────────

/// Whether a given year is a leap year.
pub fn is_leap_year(year: Year) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Whether `(year, month, day)` names a real day.
pub fn is_valid(year: Year, month: u8, day: u8) -> bool {
    (1..=12).contains(&month) && day >= 1 && day <= month_length(year, month)
}

/// Whether `month` always has 31 days.
pub fn is_31_days(month: u8) -> bool {
    Month::from_number(month).map_or(false, |m| m.has_31_days())
}

/// Whether `month` always has 30 days.
pub fn is_30_days(month: u8) -> bool {
    Month::from_number(month).map_or(false, |m| m.has_30_days())
}

/// Number of days in a given month/year.
pub fn days_in_month(year: Year, month: u8) -> Option<u8> {
    (1..=12)
        .contains(&month)
        .then(|| month_length(year, month))
}

/// Number of days in a given year.
pub fn days_in_year(year: Year) -> u16 {
    if is_leap_year(year) {
        366
    } else {
        365
    }
}

/// Days since January 1 (0–365), or `None` for an invalid triple.
pub fn day_of_year(year: Year, month: u8, day: u8) -> Option<u16> {
    Date::new(year, month, day).day_of_year()
}

/// Weekday of a date, or `None` for an invalid triple.
pub fn day_of_week(year: Year, month: u8, day: u8) -> Option<Weekday> {
    Date::new(year, month, day).day_of_week()
}

/// Whether the date falls before the Gregorian reform of 15 October 1582.
pub fn before_gregorian_calendar(year: Year, month: u8, day: u8) -> bool {
    (year, month, day) < GREGORIAN_CUTOVER
}

/// Month length; `month` must be in 1..=12.
fn month_length(year: Year, month: u8) -> u8 {
    debug_assert!((1..=12).contains(&month));
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// Convert a valid (year, month, day) to its Julian Day Number.
///
/// The year is shifted to start in March so that the leap day falls at the
/// end; floor division keeps the formula correct for negative years.
const fn civil_to_julian_day(year: Year, month: u8, day: u8) -> JulianDay {
    let a = (14 - month as i64).div_euclid(12);
    let y = year as i64 + 4800 - a;
    let m = month as i64 + 12 * a - 3;
    day as i64 + (153 * m + 2).div_euclid(5) + 365 * y + y.div_euclid(4) - y.div_euclid(100)
        + y.div_euclid(400)
        - 32045
}

/// Inverse of [`civil_to_julian_day`].
///
/// Returns `None` if the year would not fit in an `i32`.
fn julian_day_to_civil(julian_day: JulianDay) -> Option<(Year, u8, u8)> {
    if !(MIN_JULIAN_DAY..=MAX_JULIAN_DAY).contains(&julian_day) {
        return None;
    }
    let a = julian_day + 32044;
    let b = (4 * a + 3).div_euclid(146_097);
    let c = a - (146_097 * b).div_euclid(4);
    let d = (4 * c + 3).div_euclid(1461);
    let e = c - (1461 * d).div_euclid(4);
    let m = (5 * e + 2).div_euclid(153);
    let day = e - (153 * m + 2).div_euclid(5) + 1;
    let month = m + 3 - 12 * m.div_euclid(10);
    let year = 100 * b + d - 4800 + m.div_euclid(10);
    Some((Year::try_from(year).ok()?, month as u8, day as u8))
}

// ── Tests ─────────────────────────────────────────────────────────────────────
