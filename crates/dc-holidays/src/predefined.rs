//! Predefined holiday rules shared by the regional calendars.

use std::borrow::Cow;

use dc_time::{Month, Weekday};

use crate::rule::{ChangingHolidayRule, FixedHolidayRule, MonthDay};

// ── Fixed ─────────────────────────────────────────────────────────────────────

/// January 1.
pub const NEW_YEARS_DAY: FixedHolidayRule =
    FixedHolidayRule::new("New years day", Month::January, 1);
/// January 6.
pub const EPIPHANY: FixedHolidayRule = FixedHolidayRule::new("Epiphany", Month::January, 6);
/// May 1.
pub const INTERNATIONAL_WORKERS_DAY: FixedHolidayRule =
    FixedHolidayRule::new("International worker's day", Month::May, 1);
/// December 24.
pub const CHRISTMAS_EVE: FixedHolidayRule =
    FixedHolidayRule::new("Christmas eve", Month::December, 24);
/// December 25.
pub const CHRISTMAS_DAY: FixedHolidayRule =
    FixedHolidayRule::new("Christmas day", Month::December, 25);
/// December 26.
pub const SECOND_DAY_OF_CHRISTMAS: FixedHolidayRule =
    FixedHolidayRule::new("Second day of Christmas", Month::December, 26);
/// December 31.
pub const NEW_YEARS_EVE: FixedHolidayRule =
    FixedHolidayRule::new("New Year's Eve", Month::December, 31);

// ── Easter ────────────────────────────────────────────────────────────────────

const fn easter_offset(name: &'static str, offset: i32) -> ChangingHolidayRule {
    ChangingHolidayRule::EasterOffset {
        name: Cow::Borrowed(name),
        offset,
    }
}

/// Two days before Easter Sunday.
pub const GOOD_FRIDAY: ChangingHolidayRule = easter_offset("Good Friday", -2);
/// Western Easter Sunday.
pub const EASTER_SUNDAY: ChangingHolidayRule = easter_offset("Easter Sunday", 0);
/// The day after Easter Sunday.
pub const EASTER_MONDAY: ChangingHolidayRule = easter_offset("Easter Monday", 1);
/// 39 days after Easter Sunday.
pub const ASCENSION_DAY: ChangingHolidayRule = easter_offset("Ascension Day", 39);
/// 49 days after Easter Sunday.
pub const PENTECOST: ChangingHolidayRule = easter_offset("Pentecost", 49);

/// Good Friday, Easter Sunday, Easter Monday, Ascension Day and Pentecost.
pub fn easter_and_friends() -> [ChangingHolidayRule; 5] {
    [
        GOOD_FRIDAY,
        EASTER_SUNDAY,
        EASTER_MONDAY,
        ASCENSION_DAY,
        PENTECOST,
    ]
}

// ── Midsummer ─────────────────────────────────────────────────────────────────

/// The Friday between June 19 and June 25.
pub const MIDSUMMER_EVE: ChangingHolidayRule = ChangingHolidayRule::WeekdayInWindow {
    name: Cow::Borrowed("Midsummer Eve"),
    weekday: Weekday::Friday,
    first: MonthDay::new(Month::June, 19),
    last: MonthDay::new(Month::June, 25),
};

/// The Saturday between June 20 and June 26.
pub const MIDSUMMER_DAY: ChangingHolidayRule = ChangingHolidayRule::WeekdayInWindow {
    name: Cow::Borrowed("Midsummer Day"),
    weekday: Weekday::Saturday,
    first: MonthDay::new(Month::June, 20),
    last: MonthDay::new(Month::June, 26),
};

#[cfg(test)]
mod tests {
    use super::*;
    use dc_time::Date;

    fn date(y: i32, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn easter_rules_2024() {
        let expected = [
            (date(2024, 3, 29), "Good Friday"),
            (date(2024, 3, 31), "Easter Sunday"),
            (date(2024, 4, 1), "Easter Monday"),
            (date(2024, 5, 9), "Ascension Day"),
            (date(2024, 5, 19), "Pentecost"),
        ];
        for (rule, (d, name)) in easter_and_friends().iter().zip(expected) {
            assert_eq!(rule.matches(d), Some(name));
            assert_eq!(rule.matches(d + 1), None);
        }
    }

    #[test]
    fn midsummer_pairs_up() {
        // Eve is always the day before Day.
        for year in 1900..2100 {
            let eve = (1..=30)
                .map(|d| date(year, 6, d))
                .find(|&d| MIDSUMMER_EVE.matches(d).is_some())
                .unwrap();
            assert_eq!(MIDSUMMER_DAY.matches(eve + 1), Some("Midsummer Day"));
        }
    }

    #[test]
    fn fixed_names() {
        assert_eq!(NEW_YEARS_DAY.name(), "New years day");
        assert!(SECOND_DAY_OF_CHRISTMAS.matches(date(2017, 12, 26)));
        assert!(NEW_YEARS_EVE.matches(date(1999, 12, 31)));
        assert!(INTERNATIONAL_WORKERS_DAY.matches(date(2017, 5, 1)));
    }
}
