//! Western Easter Sunday.
//!
//! From 1583 on the Gregorian computus is used (Gauss's algorithm in the
//! anonymous "Meeus/Jones/Butcher" form).  Earlier years use the Julian
//! computus, whose lunar cycle and leap-year congruences differ; the two
//! branches are kept apart.  The Julian result is expressed as the Julian
//! calendar's month and day.

use dc_core::errors::Result;

use crate::date::Date;
use crate::month::Month;

/// First year computed with the Gregorian computus.
pub const FIRST_GREGORIAN_YEAR: i32 = 1583;

/// Month and day of Western Easter Sunday in `year`.
///
/// The day is always a valid day of the returned month, which is March or
/// April.
pub fn western_easter(year: i32) -> (Month, u8) {
    let a = year.rem_euclid(19);
    let day = if year >= FIRST_GREGORIAN_YEAR {
        let b = year / 100;
        let c = year % 100;
        let d = b / 4;
        let e = b % 4;
        let f = (b + 8) / 25;
        let g = (b - f + 1) / 3;
        let h = (19 * a + b - d - g + 15) % 30;
        let i = c / 4;
        let k = c % 4;
        let l = (32 + 2 * e + 2 * i - h - k) % 7;
        let m = (a + 11 * h + 22 * l) / 451;
        21 + h + l - 7 * m
    } else {
        let b = year.rem_euclid(7);
        let c = year.rem_euclid(4);
        let d = (19 * a + 15) % 30;
        let e = (2 * c + 4 * b - d + 34) % 7;
        21 + d + e
    };
    // `day` counts from March 0; 31 and above spill into April.
    let month = if day >= 31 { Month::April } else { Month::March };
    (month, (day % 31 + 1) as u8)
}

/// Easter Sunday of `year` as a [`Date`].
///
/// Fails only for years outside the representable range.
pub fn easter_sunday(year: i32) -> Result<Date> {
    let (month, day) = western_easter(year);
    Date::from_ymd(year, month.number(), day)
}
