//! # dc-time
//!
//! The epoch-day [`Date`] type and the calendar arithmetic built on it:
//! field conversion, weekday, ISO week, Western Easter, and layout-driven
//! parsing and formatting.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `Date` type.
pub mod date;

/// Western Easter Sunday (Gregorian and Julian computus).
pub mod easter;

/// Layout-driven parsing and formatting.
pub mod layout;

/// `Month` enum.
pub mod month;

/// `Weekday` enum.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use date::{days_in_month, is_leap_year, Date};
pub use easter::{easter_sunday, western_easter};
pub use month::Month;
pub use weekday::Weekday;
