//! # dc-core
//!
//! Core definitions shared by every daycal crate: the error enum with its
//! `ensure!` macro, and the clock sources used to anchor "today".

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Clock sources (`Clock`, `SystemClock`, `FixedClock`).
#[cfg(feature = "chrono")]
pub mod clock;

/// Error types and the `ensure!` macro.
pub mod errors;

// ── Re-exports for convenience ────────────────────────────────────────────────

#[cfg(feature = "chrono")]
pub use clock::{Clock, FixedClock, SystemClock};
pub use errors::{Error, Result};
