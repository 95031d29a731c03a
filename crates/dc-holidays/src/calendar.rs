//! `Calendar` trait and the rule-based [`HolidayCalendar`].
//!
//! A calendar knows which dates are holidays.  Workdays are the dates that
//! are neither holidays nor on a Saturday or Sunday.
//!
//! The stepping queries (`previous_*`, `next_*`, `adjust`, …) walk one day at
//! a time and have no bound other than the ends of the `Date` range, where
//! they give up and return `None`.  A calendar in which every day is a
//! holiday makes them run through the whole range; callers working with
//! untrusted calendars should impose their own cutoff.

use std::borrow::Cow;

use dc_core::errors::Result;
use dc_time::Date;
use tracing::trace;

use crate::rule::HolidayRule;
use crate::workday_convention::WorkdayConvention;

/// A holiday calendar.
pub trait Calendar: std::fmt::Debug + Send + Sync {
    /// Human-readable name (e.g. `"Sweden"`).
    fn name(&self) -> &str;

    /// Names of every holiday falling on `date`, sorted; empty if none.
    fn matches(&self, date: Date) -> Vec<&str>;

    /// Return `true` if `date` is a holiday.
    fn is_holiday(&self, date: Date) -> bool {
        !self.matches(date).is_empty()
    }

    /// Return `true` if `date` is a Saturday or Sunday.
    fn is_weekend(&self, date: Date) -> bool {
        date.weekday().is_weekend()
    }

    /// Return `true` if `date` is neither a weekend day nor a holiday.
    fn is_workday(&self, date: Date) -> bool {
        !self.is_weekend(date) && !self.is_holiday(date)
    }

    /// The closest holiday strictly before `date`.
    fn previous_holiday(&self, date: Date) -> Option<Date> {
        step_until(date, -1, |d| self.is_holiday(d))
    }

    /// The closest non-workday strictly before `date`.
    fn previous_non_workday(&self, date: Date) -> Option<Date> {
        step_until(date, -1, |d| !self.is_workday(d))
    }

    /// The closest workday strictly before `date`.
    fn previous_workday(&self, date: Date) -> Option<Date> {
        step_until(date, -1, |d| self.is_workday(d))
    }

    /// The closest holiday strictly after `date`.
    fn next_holiday(&self, date: Date) -> Option<Date> {
        step_until(date, 1, |d| self.is_holiday(d))
    }

    /// The closest non-workday strictly after `date`.
    fn next_non_workday(&self, date: Date) -> Option<Date> {
        step_until(date, 1, |d| !self.is_workday(d))
    }

    /// The closest workday strictly after `date`.
    fn next_workday(&self, date: Date) -> Option<Date> {
        step_until(date, 1, |d| self.is_workday(d))
    }

    /// Adjust `date` to a workday according to `convention`.
    fn adjust(&self, date: Date, convention: WorkdayConvention) -> Option<Date> {
        if convention == WorkdayConvention::Unadjusted || self.is_workday(date) {
            return Some(date);
        }
        match convention {
            WorkdayConvention::Unadjusted => Some(date),
            WorkdayConvention::Following => self.next_workday(date),
            WorkdayConvention::Preceding => self.previous_workday(date),
            WorkdayConvention::ModifiedFollowing => match self.next_workday(date) {
                Some(d) if d.month() == date.month() => Some(d),
                _ => self.previous_workday(date),
            },
            WorkdayConvention::ModifiedPreceding => match self.previous_workday(date) {
                Some(d) if d.month() == date.month() => Some(d),
                _ => self.next_workday(date),
            },
            WorkdayConvention::Nearest => {
                let fwd = self.next_workday(date);
                let bwd = self.previous_workday(date);
                match (fwd, bwd) {
                    (Some(f), Some(b)) if f - date <= date - b => Some(f),
                    (Some(_), Some(b)) => Some(b),
                    (f, b) => f.or(b),
                }
            }
        }
    }

    /// Advance `date` by `n` workdays (backwards if `n` is negative).
    fn advance_workdays(&self, mut date: Date, n: i32) -> Option<Date> {
        for _ in 0..n.unsigned_abs() {
            date = if n > 0 {
                self.next_workday(date)?
            } else {
                self.previous_workday(date)?
            };
        }
        Some(date)
    }

    /// Count the workdays between `d1` (exclusive) and `d2` (inclusive).
    /// Returns a negative number if `d2 < d1`.
    fn workdays_between(&self, d1: Date, d2: Date) -> i64 {
        if d1 == d2 {
            return 0;
        }
        let (start, end, sign) = if d2 > d1 { (d1, d2, 1) } else { (d2, d1, -1) };
        let mut count = 0;
        let mut d = start;
        while d < end {
            d += 1;
            if self.is_workday(d) {
                count += 1;
            }
        }
        sign * count
    }

    /// All holidays in the inclusive range `[from, to]`, in order.
    fn holidays_between(&self, from: Date, to: Date) -> Vec<Date> {
        let mut holidays = Vec::new();
        let mut d = from;
        while d <= to {
            if self.is_holiday(d) {
                holidays.push(d);
            }
            match d.checked_add_days(1) {
                Some(next) => d = next,
                None => break,
            }
        }
        holidays
    }
}

/// Step from `from` (exclusive) by `step` days until `pred` holds.
fn step_until(from: Date, step: i32, pred: impl Fn(Date) -> bool) -> Option<Date> {
    let mut d = from;
    let mut steps = 0u64;
    loop {
        d = d.checked_add_days(step)?;
        steps += 1;
        if pred(d) {
            trace!(%from, found = %d, steps, "calendar scan finished");
            return Some(d);
        }
    }
}

/// An ordered collection of holiday rules.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HolidayCalendar {
    name: Cow<'static, str>,
    #[cfg_attr(feature = "serde", serde(default))]
    rules: Vec<HolidayRule>,
}

impl HolidayCalendar {
    /// A calendar with no holidays: only weekends are non-workdays.
    pub const WEEKENDS_ONLY: HolidayCalendar = HolidayCalendar {
        name: Cow::Borrowed("Weekends only"),
        rules: Vec::new(),
    };

    /// Create an empty calendar.
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            rules: Vec::new(),
        }
    }

    /// Append a rule.
    pub fn with_rule(mut self, rule: impl Into<HolidayRule>) -> Self {
        self.add_rule(rule);
        self
    }

    /// Append several rules.
    pub fn with_rules<R: Into<HolidayRule>>(mut self, rules: impl IntoIterator<Item = R>) -> Self {
        self.rules.extend(rules.into_iter().map(Into::into));
        self
    }

    /// Append a rule.
    pub fn add_rule(&mut self, rule: impl Into<HolidayRule>) {
        self.rules.push(rule.into());
    }

    /// The rules, in insertion order.
    pub fn rules(&self) -> &[HolidayRule] {
        &self.rules
    }

    /// Fail on the first rule that can never match, e.g. one loaded from
    /// configuration with a day its month does not have.
    pub fn validate(&self) -> Result<()> {
        self.rules.iter().try_for_each(HolidayRule::validate)
    }
}

impl Calendar for HolidayCalendar {
    fn name(&self) -> &str {
        &self.name
    }

    fn matches(&self, date: Date) -> Vec<&str> {
        let mut names: Vec<&str> = self.rules.iter().filter_map(|r| r.matches(date)).collect();
        names.sort_unstable();
        names
    }

    fn is_holiday(&self, date: Date) -> bool {
        self.rules.iter().any(|r| r.matches(date).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::{ChangingHolidayRule, FixedHolidayRule, MonthDay};
    use dc_time::{Month, Weekday};

    fn date(y: i32, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn small() -> HolidayCalendar {
        HolidayCalendar::new("Small")
            .with_rule(FixedHolidayRule::new("Christmas eve", Month::December, 24))
            .with_rule(FixedHolidayRule::new("Christmas day", Month::December, 25))
            .with_rule(ChangingHolidayRule::WeekdayInWindow {
                name: "Late Saturday".into(),
                weekday: Weekday::Saturday,
                first: MonthDay::new(Month::December, 20),
                last: MonthDay::new(Month::December, 26),
            })
    }

    #[test]
    fn validate_checks_every_rule() {
        assert!(small().validate().is_ok());
        let broken = small().with_rule(FixedHolidayRule::new("Nowhere", Month::June, 31));
        assert!(broken.validate().is_err());
    }

    #[test]
    fn weekends_only_has_no_holidays() {
        let cal = HolidayCalendar::WEEKENDS_ONLY;
        assert_eq!(cal.name(), "Weekends only");
        assert!(cal.matches(date(2023, 12, 25)).is_empty());
        // 2023-09-02 is a Saturday
        assert!(!cal.is_workday(date(2023, 9, 2)));
        assert!(cal.is_workday(date(2023, 9, 4)));
    }

    #[test]
    fn coinciding_holidays_are_sorted() {
        // 2022-12-24 is a Saturday
        let cal = small();
        assert_eq!(
            cal.matches(date(2022, 12, 24)),
            vec!["Christmas eve", "Late Saturday"]
        );
        assert_eq!(cal.matches(date(2022, 12, 25)), vec!["Christmas day"]);
        assert!(cal.matches(date(2022, 12, 23)).is_empty());
    }

    #[test]
    fn previous_scans_exclude_start() {
        let cal = small();
        let boxing_day = date(2023, 12, 26); // Tuesday
        assert_eq!(cal.previous_holiday(boxing_day), Some(date(2023, 12, 25)));
        assert_eq!(cal.previous_holiday(date(2023, 12, 25)), Some(date(2023, 12, 24)));
        // Mon 25 and Sun 24 are holidays, Sat 23 is the weekend window day.
        assert_eq!(cal.previous_non_workday(boxing_day), Some(date(2023, 12, 25)));
        assert_eq!(cal.previous_workday(boxing_day), Some(date(2023, 12, 22)));
    }

    #[test]
    fn next_scans() {
        let cal = small();
        assert_eq!(cal.next_workday(date(2023, 12, 22)), Some(date(2023, 12, 26)));
        assert_eq!(cal.next_holiday(date(2023, 1, 1)), Some(date(2023, 12, 23)));
        assert_eq!(cal.next_non_workday(date(2023, 12, 20)), Some(date(2023, 12, 23)));
    }

    #[test]
    fn scans_stop_at_range_end() {
        let cal = HolidayCalendar::WEEKENDS_ONLY;
        assert_eq!(cal.previous_workday(Date::MIN), None);
        assert_eq!(cal.next_holiday(Date::MAX - 3), None);
    }

    #[test]
    fn adjust_conventions() {
        let cal = HolidayCalendar::WEEKENDS_ONLY;
        // 2023-09-02 is Saturday
        let sat = date(2023, 9, 2);
        assert_eq!(cal.adjust(sat, WorkdayConvention::Following), Some(date(2023, 9, 4)));
        assert_eq!(cal.adjust(sat, WorkdayConvention::Preceding), Some(date(2023, 9, 1)));
        assert_eq!(cal.adjust(sat, WorkdayConvention::Unadjusted), Some(sat));
        // Saturday is one day from Friday, two from Monday.
        assert_eq!(cal.adjust(sat, WorkdayConvention::Nearest), Some(date(2023, 9, 1)));
        // Sunday is one day from Monday, two from Friday.
        assert_eq!(cal.adjust(sat + 1, WorkdayConvention::Nearest), Some(date(2023, 9, 4)));
        // 2023-09-30 is Saturday; following would leave the month.
        let month_end = date(2023, 9, 30);
        assert_eq!(
            cal.adjust(month_end, WorkdayConvention::ModifiedFollowing),
            Some(date(2023, 9, 29))
        );
        // 2023-07-01 is Saturday; preceding would leave the month.
        assert_eq!(
            cal.adjust(date(2023, 7, 1), WorkdayConvention::ModifiedPreceding),
            Some(date(2023, 7, 3))
        );
    }

    #[test]
    fn workday_counting() {
        let cal = small();
        let d1 = date(2023, 12, 18); // Monday
        let d2 = date(2023, 12, 29); // Friday
        // Tue-Fri (4) + Tue 26 - Fri 29 (4); Mon 25 is a holiday.
        assert_eq!(cal.workdays_between(d1, d2), 8);
        assert_eq!(cal.workdays_between(d2, d1), -8);
        assert_eq!(cal.advance_workdays(d1, 5), Some(date(2023, 12, 26)));
        assert_eq!(cal.advance_workdays(date(2023, 12, 26), -1), Some(date(2023, 12, 22)));
        assert_eq!(cal.advance_workdays(d1, 0), Some(d1));
    }

    #[test]
    fn holidays_in_range() {
        let cal = small();
        assert_eq!(
            cal.holidays_between(date(2023, 12, 1), date(2023, 12, 31)),
            vec![date(2023, 12, 23), date(2023, 12, 24), date(2023, 12, 25)]
        );
        assert!(cal.holidays_between(date(2023, 12, 31), date(2023, 12, 1)).is_empty());
    }
}
