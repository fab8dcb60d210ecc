//! # gregor-core
//!
//! Error definitions and primitive aliases shared by the gregor crates.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` / `fail!` macros.
pub mod errors;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Astronomical year number (year 0 is 1 BCE).
pub type Year = i32;

/// Julian Day Number: continuous count of days, JDN 2 451 545 = 2000-01-01.
pub type JulianDay = i64;

/// Milliseconds, as counted from midnight or as a signed difference.
pub type Milliseconds = i32;

/// Milliseconds in one day.
pub const MSECS_PER_DAY: Milliseconds = 86_400_000;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
