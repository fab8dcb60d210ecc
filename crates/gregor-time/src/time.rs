//! `Time` type: a wall-clock time of day with millisecond resolution.
//!
//! A `Time` is a count of milliseconds since midnight in
//! `[0, 86_400_000)`, or the distinguished *null* time, which is not the same
//! thing as midnight. There is no calendar here: adding past midnight wraps
//! around to the start of the day.

use crate::dst::Dst;
use crate::tm::Tm;
use gregor_core::errors::{Error, Result};
use gregor_core::{ensure, Milliseconds, MSECS_PER_DAY};
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

const MSECS_PER_HOUR: Milliseconds = 3_600_000;
const MSECS_PER_MINUTE: Milliseconds = 60_000;
const MSECS_PER_SECOND: Milliseconds = 1_000;

/// A time of day.
///
/// Equality, ordering and hashing look only at the millisecond count; the
/// null time orders before every valid time. Use
/// [`Time::is_dst_flag_equal`] to compare DST flags.
#[derive(Clone, Copy)]
pub struct Time {
    msecs: Option<Milliseconds>,
    dst: Dst,
}

impl Time {
    /// The null time.
    pub const NULL: Time = Time {
        msecs: None,
        dst: Dst::Unknown,
    };

    /// 00:00:00.000.
    pub const MIDNIGHT: Time = Time {
        msecs: Some(0),
        dst: Dst::Unknown,
    };

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a time from hour, minute, second and millisecond.
    ///
    /// Returns [`Time::NULL`] if any field is out of range.
    pub fn new(hour: u8, minute: u8, second: u8, msec: u16) -> Self {
        if !Time::is_valid_hms(hour, minute, second, msec) {
            debug!("rejecting invalid time {hour:02}:{minute:02}:{second:02}.{msec:03}");
            return Time::NULL;
        }
        Time {
            msecs: Some(
                Milliseconds::from(hour) * MSECS_PER_HOUR
                    + Milliseconds::from(minute) * MSECS_PER_MINUTE
                    + Milliseconds::from(second) * MSECS_PER_SECOND
                    + Milliseconds::from(msec),
            ),
            dst: Dst::Unknown,
        }
    }

    /// Create a time, reporting which field is out of range.
    pub fn try_new(hour: u8, minute: u8, second: u8, msec: u16) -> Result<Self> {
        ensure!(hour < 24, "hour {hour} out of range [0, 23]");
        ensure!(minute < 60, "minute {minute} out of range [0, 59]");
        ensure!(second < 60, "second {second} out of range [0, 59]");
        ensure!(msec < 1000, "millisecond {msec} out of range [0, 999]");
        Ok(Time::new(hour, minute, second, msec))
    }

    /// Create a time from milliseconds since midnight.
    ///
    /// Returns [`Time::NULL`] unless `0 <= msecs < 86_400_000`.
    pub fn from_msecs(msecs: Milliseconds) -> Self {
        if !Time::is_valid_msecs(msecs) {
            debug!("rejecting millisecond count {msecs}");
            return Time::NULL;
        }
        Time {
            msecs: Some(msecs),
            dst: Dst::Unknown,
        }
    }

    /// Return this time carrying the given DST flag.
    pub fn with_dst(mut self, dst: Dst) -> Self {
        self.dst = dst;
        self
    }

    /// Create a time from the clock fields of a broken-down time.
    ///
    /// A leap second (`tm_sec == 60`) or any other out-of-range field gives
    /// the null time. `tm_isdst` becomes the DST flag.
    pub fn from_tm(tm: &Tm) -> Self {
        let field = |v: i32| u8::try_from(v).ok();
        let time = match (field(tm.tm_hour), field(tm.tm_min), field(tm.tm_sec)) {
            (Some(h), Some(m), Some(s)) => Time::new(h, m, s, 0),
            _ => {
                debug!(
                    "rejecting broken-down time {}:{}:{}",
                    tm.tm_hour,
                    tm.tm_min,
                    tm.tm_sec
                );
                Time::NULL
            }
        };
        time.with_dst(Dst::from_flag(tm.tm_isdst))
    }

    /// Replace the time in place.
    ///
    /// On invalid input the time becomes null and `false` is returned.
    pub fn set_time(&mut self, hour: u8, minute: u8, second: u8, msec: u16, dst: Dst) -> bool {
        *self = Time::new(hour, minute, second, msec).with_dst(dst);
        self.is_valid()
    }

    // ── Validation ───────────────────────────────────────────────────────────

    /// Whether the fields name a time of day.
    pub fn is_valid_hms(hour: u8, minute: u8, second: u8, msec: u16) -> bool {
        hour < 24 && minute < 60 && second < 60 && msec < 1000
    }

    /// Whether `msecs` lies in `[0, 86_400_000)`.
    pub fn is_valid_msecs(msecs: Milliseconds) -> bool {
        (0..MSECS_PER_DAY).contains(&msecs)
    }

    /// Return `true` for the null time.
    pub fn is_null(&self) -> bool {
        self.msecs.is_none()
    }

    /// Return `true` for any non-null time.
    pub fn is_valid(&self) -> bool {
        self.msecs.map_or(false, Time::is_valid_msecs)
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the hour (0–23).
    pub fn hour(&self) -> Option<u8> {
        self.msecs.map(|ms| (ms / MSECS_PER_HOUR) as u8)
    }

    /// Return the minute (0–59).
    pub fn minute(&self) -> Option<u8> {
        self.msecs
            .map(|ms| (ms % MSECS_PER_HOUR / MSECS_PER_MINUTE) as u8)
    }

    /// Return the second (0–59).
    pub fn second(&self) -> Option<u8> {
        self.msecs
            .map(|ms| (ms % MSECS_PER_MINUTE / MSECS_PER_SECOND) as u8)
    }

    /// Return the millisecond (0–999).
    pub fn msec(&self) -> Option<u16> {
        self.msecs.map(|ms| (ms % MSECS_PER_SECOND) as u16)
    }

    /// Return the milliseconds since midnight.
    pub fn to_milliseconds(&self) -> Option<Milliseconds> {
        self.msecs
    }

    /// Return `(hour, minute, second, msec)`.
    pub fn hms(&self) -> Result<(u8, u8, u8, u16)> {
        match (self.hour(), self.minute(), self.second(), self.msec()) {
            (Some(h), Some(m), Some(s), Some(ms)) => Ok((h, m, s, ms)),
            _ => Err(Error::NullValue),
        }
    }

    /// Return the DST flag.
    pub fn dst(&self) -> Dst {
        self.dst
    }

    /// Return `true` if both times carry the same DST flag.
    pub fn is_dst_flag_equal(&self, other: &Time) -> bool {
        self.dst == other.dst
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Add `secs` seconds, wrapping around midnight in either direction.
    pub fn add_secs(&self, secs: i32) -> Time {
        self.shifted(i64::from(secs) * i64::from(MSECS_PER_SECOND))
    }

    /// Add `msecs` milliseconds, wrapping around midnight in either direction.
    pub fn add_msecs(&self, msecs: Milliseconds) -> Time {
        self.shifted(i64::from(msecs))
    }

    /// Signed milliseconds from `self` to `other`, without wrap-around.
    pub fn msecs_to(&self, other: &Time) -> Option<Milliseconds> {
        Some(other.msecs? - self.msecs?)
    }

    /// Signed whole seconds from `self` to `other`, without wrap-around.
    ///
    /// The millisecond difference is truncated toward zero.
    pub fn secs_to(&self, other: &Time) -> Option<i32> {
        self.msecs_to(other).map(|ms| ms / MSECS_PER_SECOND)
    }

    // Results carry `Dst::Unknown`, as the shifted time may be on the other
    // side of a DST transition.
    fn shifted(&self, delta: i64) -> Time {
        let Some(ms) = self.msecs else {
            trace!("arithmetic on null time");
            return Time::NULL;
        };
        let wrapped = (i64::from(ms) + delta).rem_euclid(i64::from(MSECS_PER_DAY));
        Time {
            msecs: Some(wrapped as Milliseconds),
            dst: Dst::Unknown,
        }
    }
}

impl Default for Time {
    fn default() -> Self {
        Time::NULL
    }
}

// ── Comparison ────────────────────────────────────────────────────────────────

impl Ord for Time {
    fn cmp(&self, other: &Self) -> Ordering {
        self.msecs.cmp(&other.msecs)
    }
}

impl PartialOrd for Time {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Time {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Time {}

impl Hash for Time {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.msecs.hash(state);
    }
}

// ── Display ───────────────────────────────────────────────────────────────────

impl std::fmt::Display for Time {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.hms() {
            Ok((h, m, s, ms)) => write!(f, "{h:02}:{m:02}:{s:02}.{ms:03}"),
            Err(_) => write!(f, "null time"),
        }
    }
}

impl std::fmt::Debug for Time {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_null() {
            return write!(f, "Time(null)");
        }
        write!(f, "Time({self})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fields() {
        let t = Time::new(13, 45, 7, 89);
        assert_eq!(t.to_milliseconds(), Some(49_507_089));
        assert_eq!(t.hms(), Ok((13, 45, 7, 89)));
        assert_eq!(Time::from_msecs(MSECS_PER_DAY - 1).hms(), Ok((23, 59, 59, 999)));
    }

    #[test]
    fn test_null_is_not_midnight() {
        assert!(Time::NULL.is_null());
        assert!(!Time::NULL.is_valid());
        assert!(!Time::MIDNIGHT.is_null());
        assert!(Time::MIDNIGHT.is_valid());
        assert_ne!(Time::NULL, Time::MIDNIGHT);
        assert!(Time::NULL < Time::MIDNIGHT);
        assert_eq!(Time::default(), Time::NULL);
    }

    #[test]
    fn test_range_checks() {
        assert!(Time::is_valid_msecs(0));
        assert!(!Time::is_valid_msecs(-1));
        assert!(!Time::is_valid_msecs(MSECS_PER_DAY));
        assert!(Time::from_msecs(MSECS_PER_DAY).is_null());
        assert!(Time::new(24, 0, 0, 0).is_null());
        assert!(Time::new(0, 0, 0, 1000).is_null());
    }

    #[test]
    fn test_try_new_messages() {
        assert_eq!(
            Time::try_new(12, 60, 0, 0),
            Err(Error::InvalidInput("minute 60 out of range [0, 59]".into()))
        );
        assert_eq!(Time::try_new(12, 0, 0, 0), Ok(Time::new(12, 0, 0, 0)));
    }

    #[test]
    fn test_add_secs_extremes() {
        // i32::MAX seconds would overflow a naive i32 millisecond sum.
        let t = Time::MIDNIGHT.add_secs(i32::MAX);
        let expected = (i64::from(i32::MAX) * 1000).rem_euclid(86_400_000) as i32;
        assert_eq!(t.to_milliseconds(), Some(expected));
        assert!(Time::MIDNIGHT.add_secs(i32::MIN).is_valid());
    }

    #[test]
    fn test_display() {
        assert_eq!(Time::new(9, 5, 3, 7).to_string(), "09:05:03.007");
        assert_eq!(Time::NULL.to_string(), "null time");
        assert_eq!(format!("{:?}", Time::MIDNIGHT), "Time(00:00:00.000)");
        assert_eq!(format!("{:?}", Time::NULL), "Time(null)");
    }
}
