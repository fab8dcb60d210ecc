//! `Tm`: a broken-down calendar time in the layout of C's `struct tm`.
//!
//! This is the hand-off format between a platform clock (or any other
//! producer of broken-down time) and the [`Date`](crate::Date) and
//! [`Time`](crate::Time) value types. Fields are deliberately plain `i32`s
//! with the C conventions, so a producer can fill them in without knowing
//! anything about this crate. Consumers re-validate every field.

/// Broken-down calendar time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Tm {
    /// Seconds after the minute, normally `0..=59` (60 for a leap second).
    pub tm_sec: i32,
    /// Minutes after the hour, `0..=59`.
    pub tm_min: i32,
    /// Hours since midnight, `0..=23`.
    pub tm_hour: i32,
    /// Day of the month, `1..=31`.
    pub tm_mday: i32,
    /// Months since January, `0..=11`.
    pub tm_mon: i32,
    /// Years since 1900.
    pub tm_year: i32,
    /// Days since Sunday, `0..=6`.
    pub tm_wday: i32,
    /// Days since January 1, `0..=365`.
    pub tm_yday: i32,
    /// Daylight saving flag: positive, zero, or negative for unknown.
    pub tm_isdst: i32,
}

impl Tm {
    /// Offset between `tm_year` and the calendar year.
    pub const YEAR_BASE: i32 = 1900;

    /// Calendar year, or `None` if `tm_year + 1900` overflows.
    pub fn year(&self) -> Option<i32> {
        self.tm_year.checked_add(Self::YEAR_BASE)
    }

    /// Calendar month, 1-based, or `None` if `tm_mon` is not `0..=11`.
    pub fn month(&self) -> Option<u8> {
        u8::try_from(self.tm_mon)
            .ok()
            .filter(|m| *m < 12)
            .map(|m| m + 1)
    }
}
