//! # gregor
//!
//! Proleptic-Gregorian calendar dates and millisecond wall-clock times.
//!
//! This crate is a **façade** that re-exports the public items of the
//! workspace crates. Application code should depend on this crate rather
//! than on the individual `gregor-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! gregor = "0.1"
//! ```
//!
//! ```rust
//! use gregor::{Date, Time, Weekday};
//!
//! let d = Date::new(2023, 12, 31).add_days(1);
//! assert_eq!(d, Date::new(2024, 1, 1));
//! assert_eq!(d.day_of_week(), Some(Weekday::Monday));
//!
//! let t = Time::new(0, 0, 0, 0).add_secs(-1);
//! assert_eq!(t, Time::new(23, 59, 59, 0));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error definitions and primitive aliases.
pub use gregor_core as core;

/// Date and time value types.
pub use gregor_time as time;

pub use gregor_core::{Error, Result};
pub use gregor_time::{Date, DateFormat, Dst, Month, Time, Tm, Weekday};
