//! Sweden calendar.

use std::borrow::Cow;

use dc_time::{Month, Weekday};

use crate::calendar::HolidayCalendar;
use crate::predefined::*;
use crate::rule::{ChangingHolidayRule, FixedHolidayRule, MonthDay};

/// Region identifier under which [`sweden`] is registered.
pub const STOCKHOLM: &str = "Europe/Stockholm";

/// June 6.
const NATIONAL_DAY: FixedHolidayRule =
    FixedHolidayRule::new("National day of Sweden", Month::June, 6);

/// The Saturday between October 31 and November 6.
const ALL_SAINTS_DAY: ChangingHolidayRule = ChangingHolidayRule::WeekdayInWindow {
    name: Cow::Borrowed("All Saints' Day"),
    weekday: Weekday::Saturday,
    first: MonthDay::new(Month::October, 31),
    last: MonthDay::new(Month::November, 6),
};

/// Swedish public holidays.
///
/// * New Year's Day (Jan 1), Epiphany (Jan 6)
/// * Good Friday, Easter Sunday, Easter Monday, Ascension Day, Pentecost
/// * International Workers' Day (May 1)
/// * National Day (Jun 6)
/// * Midsummer Eve (Friday between Jun 19-25) and Midsummer Day
/// * All Saints' Day (Saturday between Oct 31 and Nov 6)
/// * Christmas Eve, Christmas Day, Boxing Day, New Year's Eve
pub fn sweden() -> HolidayCalendar {
    HolidayCalendar::new("Sweden")
        .with_rules([
            NEW_YEARS_EVE,
            NEW_YEARS_DAY,
            EPIPHANY,
            INTERNATIONAL_WORKERS_DAY,
            CHRISTMAS_EVE,
            CHRISTMAS_DAY,
            SECOND_DAY_OF_CHRISTMAS,
            NATIONAL_DAY,
        ])
        .with_rules(easter_and_friends())
        .with_rules([MIDSUMMER_EVE, MIDSUMMER_DAY, ALL_SAINTS_DAY])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::Calendar;
    use dc_time::Date;

    fn date(y: i32, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn sweden_2017() {
        let cal = sweden();
        let holidays = [
            (date(2017, 1, 1), "New years day"),
            (date(2017, 1, 6), "Epiphany"),
            (date(2017, 4, 14), "Good Friday"),
            (date(2017, 4, 16), "Easter Sunday"),
            (date(2017, 4, 17), "Easter Monday"),
            (date(2017, 5, 1), "International worker's day"),
            (date(2017, 5, 25), "Ascension Day"),
            (date(2017, 6, 4), "Pentecost"),
            (date(2017, 6, 6), "National day of Sweden"),
            (date(2017, 6, 23), "Midsummer Eve"),
            (date(2017, 6, 24), "Midsummer Day"),
            (date(2017, 11, 4), "All Saints' Day"),
            (date(2017, 12, 24), "Christmas eve"),
            (date(2017, 12, 25), "Christmas day"),
            (date(2017, 12, 26), "Second day of Christmas"),
            (date(2017, 12, 31), "New Year's Eve"),
        ];
        for (d, name) in holidays {
            assert_eq!(cal.matches(d), vec![name], "{d}");
        }
        assert!(cal.validate().is_ok());
        let found = cal.holidays_between(date(2017, 1, 1), date(2017, 12, 31));
        assert_eq!(found.len(), holidays.len());
    }

    #[test]
    fn sweden_2024_moving_feasts() {
        let cal = sweden();
        assert!(cal.is_holiday(date(2024, 3, 29)));
        assert!(cal.is_holiday(date(2024, 4, 1)));
        assert!(cal.is_holiday(date(2024, 5, 9)));
        assert!(cal.is_holiday(date(2024, 6, 21)));
        assert!(cal.is_holiday(date(2024, 6, 22)));
        assert!(cal.is_holiday(date(2024, 11, 2)));
        assert!(!cal.is_holiday(date(2024, 11, 9)));
    }

    #[test]
    fn national_day_every_year() {
        let cal = sweden();
        // 2004-06-06 is a Sunday, 2017-06-06 a Tuesday.
        assert_eq!(cal.matches(date(2004, 6, 6)), vec!["National day of Sweden"]);
        assert_eq!(cal.matches(date(2017, 6, 6)), vec!["National day of Sweden"]);
        assert!(cal.is_holiday(date(1900, 6, 6)));
        assert!(!cal.is_workday(date(2017, 6, 6)));
    }

    #[test]
    fn workdays_around_christmas_2023() {
        let cal = sweden();
        // Fri 22 is the last workday before Christmas; Wed 27 the first after.
        assert_eq!(cal.next_workday(date(2023, 12, 22)), Some(date(2023, 12, 27)));
        assert_eq!(cal.previous_workday(date(2023, 12, 27)), Some(date(2023, 12, 22)));
        assert!(!cal.is_workday(date(2023, 12, 26)));
    }
}
