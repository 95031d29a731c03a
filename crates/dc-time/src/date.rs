//! `Date` type.
//!
//! A date is a serial number of days since an epoch, with a resolution of
//! one day.
//!
//! # Serial number convention
//! * Serial 0 is January 1 of year 1 in the proleptic Gregorian calendar, a
//!   Monday.  The Gregorian leap-year rule is applied to every year, before
//!   and after 1582.
//! * Negative serials are dates before year 1 (year 0, -1, … are counted
//!   astronomically).
//! * Every `i32` value is a valid date, which covers roughly 5.8 million
//!   years on either side of the epoch.

use dc_core::errors::{Error, Result};

use crate::layout;
use crate::month::Month;
use crate::weekday::Weekday;

/// A calendar date represented as a day count.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Date(i32);

/// Serial of 1970-01-01.
const UNIX_EPOCH_SERIAL: i32 = 719_162;

/// Days between the civil algorithm's March-based era origin and the epoch.
const MARCH_SHIFT: i64 = 306;

const DAYS_PER_ERA: i64 = 146_097;

#[cfg(feature = "chrono")]
const SECONDS_PER_DAY: i64 = 86_400;

// ── Constants ─────────────────────────────────────────────────────────────────

impl Date {
    /// The earliest representable date.
    pub const MIN: Date = Date(i32::MIN);

    /// The latest representable date.
    pub const MAX: Date = Date(i32::MAX);

    /// January 1, 1970.
    pub const UNIX_EPOCH: Date = Date(UNIX_EPOCH_SERIAL);

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from its serial number.
    pub const fn from_serial(serial: i32) -> Self {
        Date(serial)
    }

    /// Create a date from year, month (1–12), and day-of-month.
    ///
    /// Fields are never normalised: a month outside `1..=12` or a day outside
    /// the month's length is rejected, as is a year whose serial does not fit
    /// in an `i32`.
    pub fn from_ymd(year: i32, month: u8, day: u8) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(Error::Construction(format!(
                "month {month} out of range [1, 12]"
            )));
        }
        let days_in = days_in_month(year, month);
        if day == 0 || day > days_in {
            return Err(Error::Construction(format!(
                "day {day} out of range [1, {days_in}] for {year}-{month:02}"
            )));
        }
        Self::from_i64(serial_from_ymd(year, month, day))
    }

    /// Create a date for the current day of `clock`.
    ///
    /// The date is taken in the clock's own UTC offset.
    #[cfg(feature = "chrono")]
    pub fn today(clock: &impl dc_core::clock::Clock) -> Self {
        Self::from_naive_date(clock.now().date_naive())
    }

    /// Parse `text` according to `layout`.
    ///
    /// See [`crate::layout`] for the layout syntax.
    pub fn parse(layout: &str, text: &str) -> Result<Self> {
        layout::parse(layout, text)
    }

    fn from_i64(serial: i64) -> Result<Self> {
        i32::try_from(serial)
            .map(Date)
            .map_err(|_| Error::Construction(format!("serial {serial} out of range")))
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the serial number.
    pub const fn serial(self) -> i32 {
        self.0
    }

    /// Return `(year, month, day)`.
    pub fn ymd(self) -> (i32, u8, u8) {
        ymd_from_serial(self.0)
    }

    /// Return the year.
    pub fn year(self) -> i32 {
        self.ymd().0
    }

    /// Return the month.
    pub fn month(self) -> Month {
        let m = self.ymd().1;
        Month::ALL[m as usize - 1]
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(self) -> u8 {
        self.ymd().2
    }

    /// Return the day of the year (1–366).
    pub fn day_of_year(self) -> u16 {
        let (y, _, _) = self.ymd();
        (i64::from(self.0) - serial_from_ymd(y, 1, 1) + 1) as u16
    }

    /// Return the weekday.
    pub fn weekday(self) -> Weekday {
        // serial 0 → Monday, serial 1 → Tuesday, …
        Weekday::ALL[self.0.rem_euclid(7) as usize]
    }

    /// Return `true` if the date falls on `weekday`.
    pub fn is_weekday(self, weekday: Weekday) -> bool {
        self.weekday() == weekday
    }

    /// Return the ISO-8601 `(year, week)` the date belongs to.
    ///
    /// Week 1 is the week containing the year's first Thursday, so late
    /// December may belong to week 1 of the following year and early January
    /// to week 52 or 53 of the previous one.
    pub fn iso_week(self) -> (i32, u8) {
        let from_monday = i32::from(self.weekday().num_days_from_monday());
        let thursday = self + (3 - from_monday);
        let week = (thursday.day_of_year() - 1) / 7 + 1;
        (thursday.year(), week as u8)
    }

    // ── Comparisons ───────────────────────────────────────────────────────────

    /// Return `true` if `self` is earlier than `other`.
    pub fn before(self, other: Date) -> bool {
        self < other
    }

    /// Return `true` if `self` is later than `other`.
    pub fn after(self, other: Date) -> bool {
        self > other
    }

    /// Number of days elapsed from `other` to `self`.
    ///
    /// Negative if `other` is later.
    pub fn days_since(self, other: Date) -> i64 {
        i64::from(self.0) - i64::from(other.0)
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` days, or `None` if the result is out of range.
    pub fn checked_add_days(self, n: i32) -> Option<Self> {
        self.0.checked_add(n).map(Date)
    }

    /// Advance by `n` days.  Returns an error if the result is out of range.
    pub fn add_days(self, n: i32) -> Result<Self> {
        self.checked_add_days(n).ok_or_else(|| {
            Error::Construction(format!("{self} + {n} days is out of range"))
        })
    }

    /// Apply a calendar offset of `years`, `months` and `days`.
    ///
    /// Years and months are applied first to the `(year, month)` pair,
    /// carrying month overflow into the year.  The day of the month is kept
    /// and rolls into the following month when the target month is too
    /// short, so 2023-01-31 plus one month is 2023-03-03.  `days` is then
    /// added as a flat day count.
    pub fn add(self, years: i32, months: i32, days: i32) -> Result<Self> {
        let (y, m, d) = self.ymd();
        let total_months =
            (i64::from(y) + i64::from(years)) * 12 + i64::from(m) - 1 + i64::from(months);
        let year = i32::try_from(total_months.div_euclid(12)).map_err(|_| {
            Error::Construction(format!("{self} + {years}y {months}m: year out of range"))
        })?;
        let month = (total_months.rem_euclid(12) + 1) as u8;
        Self::from_i64(serial_from_ymd(year, month, 1) + i64::from(d) - 1 + i64::from(days))
    }

    /// Return the closest date on or before `self` that falls on `weekday`.
    ///
    /// Returns `self` if it already falls on `weekday`.  Saturates at
    /// [`Date::MIN`], which may then be on another weekday; use
    /// [`Date::previous_weekday`] for a checked search.
    pub fn previous_or_same_weekday(self, weekday: Weekday) -> Self {
        let back = (i32::from(self.weekday().num_days_from_monday())
            - i32::from(weekday.num_days_from_monday()))
        .rem_euclid(7);
        self - back
    }

    /// Return the closest date strictly before `self` that falls on
    /// `weekday`.
    ///
    /// If `self` already falls on `weekday` the result is one week earlier.
    /// Returns `None` if no such date is representable.
    pub fn previous_weekday(self, weekday: Weekday) -> Option<Self> {
        let back = (i32::from(self.weekday().num_days_from_monday())
            - i32::from(weekday.num_days_from_monday())
            - 1)
        .rem_euclid(7)
            + 1;
        self.checked_add_days(-back)
    }

    // ── Formatting ────────────────────────────────────────────────────────────

    /// Render the date according to `layout`.
    ///
    /// See [`crate::layout`] for the layout syntax.
    pub fn format(self, layout: &str) -> String {
        layout::format(self, layout)
    }

    // ── chrono interop ────────────────────────────────────────────────────────

    /// Create a date from a `chrono::NaiveDate`.
    #[cfg(feature = "chrono")]
    pub fn from_naive_date(date: chrono::NaiveDate) -> Self {
        use chrono::Datelike;
        // chrono counts 0001-01-01 as day 1
        Date(date.num_days_from_ce() - 1)
    }

    /// Convert to a `chrono::NaiveDate`, or `None` outside chrono's range.
    #[cfg(feature = "chrono")]
    pub fn to_naive_date(self) -> Option<chrono::NaiveDate> {
        chrono::NaiveDate::from_num_days_from_ce_opt(self.0.checked_add(1)?)
    }

    /// The moment at the given time of day on this date.
    ///
    /// Returns `None` for an invalid time or a date outside chrono's range.
    #[cfg(feature = "chrono")]
    pub fn and_hms(self, hour: u32, minute: u32, second: u32) -> Option<chrono::NaiveDateTime> {
        self.to_naive_date()?.and_hms_opt(hour, minute, second)
    }

    /// Unix timestamp of the first second of this date at `offset`.
    #[cfg(feature = "chrono")]
    pub fn unix_timestamp(self, offset: chrono::FixedOffset) -> i64 {
        (i64::from(self.0) - i64::from(UNIX_EPOCH_SERIAL)) * SECONDS_PER_DAY
            - i64::from(offset.local_minus_utc())
    }
}

// ── Arithmetic operators ──────────────────────────────────────────────────────
//
// The operators saturate at `Date::MIN` / `Date::MAX`; use `add_days` or
// `checked_add_days` to detect overflow.

impl std::ops::Add<i32> for Date {
    type Output = Self;
    fn add(self, rhs: i32) -> Self {
        Date(self.0.saturating_add(rhs))
    }
}

impl std::ops::Sub<i32> for Date {
    type Output = Self;
    fn sub(self, rhs: i32) -> Self {
        Date(self.0.saturating_sub(rhs))
    }
}

impl std::ops::Sub<Date> for Date {
    type Output = i64;
    fn sub(self, rhs: Date) -> i64 {
        self.days_since(rhs)
    }
}

impl std::ops::AddAssign<i32> for Date {
    fn add_assign(&mut self, rhs: i32) {
        *self = *self + rhs;
    }
}

impl std::ops::SubAssign<i32> for Date {
    fn sub_assign(&mut self, rhs: i32) {
        *self = *self - rhs;
    }
}

// ── Display ───────────────────────────────────────────────────────────────────

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = self.ymd();
        if y < 0 {
            write!(f, "-{:04}-{m:02}-{d:02}", y.unsigned_abs())
        } else {
            write!(f, "{y:04}-{m:02}-{d:02}")
        }
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Date({self})")
    }
}

impl std::str::FromStr for Date {
    type Err = Error;

    /// Parse the canonical `YYYY-MM-DD` form.
    fn from_str(s: &str) -> Result<Self> {
        layout::parse(layout::CANONICAL, s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Date {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Date {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Whether a given year is a leap year in the proleptic Gregorian calendar.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month/year.
///
/// Returns 0 for a month outside `1..=12`.
pub fn days_in_month(year: i32, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// Convert (year, month, day) to a serial number.
///
/// Years are counted from March so that the leap day is the last day of the
/// counting year; a 400-year era always has 146 097 days.
fn serial_from_ymd(year: i32, month: u8, day: u8) -> i64 {
    let y = i64::from(year) - i64::from(month <= 2);
    let era = y.div_euclid(400);
    let yoe = y - era * 400; // [0, 399]
    let mp = (i64::from(month) + 9) % 12; // March = 0
    let doy = (153 * mp + 2) / 5 + i64::from(day) - 1; // [0, 365]
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy; // [0, 146096]
    era * DAYS_PER_ERA + doe - MARCH_SHIFT
}

/// Decompose a serial number into (year, month, day).
fn ymd_from_serial(serial: i32) -> (i32, u8, u8) {
    let z = i64::from(serial) + MARCH_SHIFT;
    let era = z.div_euclid(DAYS_PER_ERA);
    let doe = z - era * DAYS_PER_ERA;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let d = doy - (153 * mp + 2) / 5 + 1;
    let m = if mp < 10 { mp + 3 } else { mp - 9 };
    let y = yoe + era * 400 + i64::from(m <= 2);
    // |y| < 5.9 million for any i32 serial
    (y as i32, m as u8, d as u8)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
