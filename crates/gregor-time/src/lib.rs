//! # gregor-time
//!
//! Proleptic-Gregorian [`Date`] and millisecond-resolution [`Time`] value
//! types, plus the small enums they are built from.
//!
//! The two value types are independent: a full date-time is simply a `Date`
//! next to a `Time`.
//!
//! ```
//! use gregor_time::{Date, Time};
//!
//! let d = Date::new(2024, 1, 31).add_months(1);
//! assert_eq!(d, Date::new(2024, 2, 29));
//!
//! let t = Time::new(23, 59, 59, 999).add_msecs(2);
//! assert_eq!(t, Time::new(0, 0, 0, 1));
//! ```
//!
//! # Features
//! * `serde`: (de)serialize dates and times as ISO text.
//! * `clock`: read the current date and time through chrono, and convert
//!   to and from chrono's naive types.
//! * `logging`: emit `log` records when input is rejected or invalid
//!   values propagate.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

#[macro_use]
mod logging;

// ── Modules ───────────────────────────────────────────────────────────────────

/// Platform clock adapter.
#[cfg(feature = "clock")]
pub mod clock;

/// `Date` type and calendar rules.
pub mod date;

/// `Dst`: daylight saving time flag.
pub mod dst;

/// Fixed text layouts and ISO parsing.
pub mod format;

/// `Month`: month of the year.
pub mod month;

#[cfg(feature = "serde")]
mod serde_impls;

/// `Time` type.
pub mod time;

/// `Tm`: C-style broken-down time.
pub mod tm;

/// `Weekday`: day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use date::Date;
pub use dst::Dst;
pub use format::DateFormat;
pub use month::Month;
pub use time::Time;
pub use tm::Tm;
pub use weekday::Weekday;
