//! # daycal
//!
//! Civil dates as day counts, calendar arithmetic, and regional holiday
//! calendars.
//!
//! This crate is a façade that re-exports the public items of the
//! underlying workspace crates.  Application code should depend on this
//! crate rather than the individual `dc-*` crates.
//!
//! ## Quick start
//!
//! ```rust
//! use daycal::prelude::*;
//!
//! let d = Date::parse("02 Jan 2006", "16 Apr 2017")?;
//! assert_eq!(d.weekday(), Weekday::Sunday);
//!
//! let stockholm = HolidayRegistry::global().calendar_or_empty("Europe/Stockholm");
//! assert_eq!(stockholm.matches(d), vec!["Easter Sunday"]);
//! assert_eq!(
//!     stockholm.adjust(d, WorkdayConvention::Following),
//!     Date::from_ymd(2017, 4, 18).ok()
//! );
//! # Ok::<(), daycal::core::Error>(())
//! ```
//!
//! ## Features
//!
//! * `chrono` (default): clock sources and conversions to and from `chrono`.
//! * `serde`: serialisation of dates, holiday rules and calendars.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error definitions and clock sources.
pub use dc_core as core;

/// Dates, weekdays, months, ISO weeks and Easter.
pub use dc_time as time;

/// Holiday rules, calendars and the region registry.
pub use dc_holidays as holidays;

/// The commonly used types.
pub mod prelude {
    #[cfg(feature = "chrono")]
    pub use dc_core::clock::{Clock, FixedClock, SystemClock};
    pub use dc_core::{Error, Result};
    pub use dc_holidays::{
        Calendar, ChangingHolidayRule, FixedHolidayRule, HolidayCalendar, HolidayRegistry,
        HolidayRule, WorkdayConvention,
    };
    pub use dc_time::{Date, Month, Weekday};
}
