//! # dc-holidays
//!
//! Holiday rules, rule-based holiday calendars and the region registry.
//!
//! ```rust
//! use dc_holidays::{Calendar, HolidayRegistry};
//! use dc_time::Date;
//!
//! let stockholm = HolidayRegistry::global().calendar_or_empty("Europe/Stockholm");
//! let easter = Date::from_ymd(2017, 4, 16)?;
//! assert_eq!(stockholm.matches(easter), vec!["Easter Sunday"]);
//! assert_eq!(stockholm.next_workday(easter), Date::from_ymd(2017, 4, 18).ok());
//! # Ok::<(), dc_core::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `Calendar` trait and `HolidayCalendar`.
pub mod calendar;

/// Regional calendars.
pub mod calendars;

/// Predefined holiday rules.
pub mod predefined;

/// Region registry.
pub mod registry;

/// Holiday rule types.
pub mod rule;

/// Workday adjustment conventions.
pub mod workday_convention;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use calendar::{Calendar, HolidayCalendar};
pub use registry::HolidayRegistry;
pub use rule::{ChangingHolidayRule, ComputedRule, FixedHolidayRule, HolidayRule, MonthDay};
pub use workday_convention::WorkdayConvention;
