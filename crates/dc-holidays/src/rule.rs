//! Holiday rules.
//!
//! A [`HolidayRule`] is either a [`FixedHolidayRule`], which recurs on the
//! same month and day every year of its validity window, or a
//! [`ChangingHolidayRule`], whose date is computed per year.  Every rule
//! carries exactly one name and matches a given date at most once.

use std::borrow::Cow;
use std::sync::Arc;

use dc_core::ensure;
use dc_core::errors::Result;
use dc_time::{easter_sunday, Date, Month, Weekday};

/// A month and day of month, ordered by month first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MonthDay {
    /// The month.
    pub month: Month,
    /// The day of the month.
    pub day: u8,
}

impl MonthDay {
    /// Create a month/day pair.
    pub const fn new(month: Month, day: u8) -> Self {
        Self { month, day }
    }

    /// The month and day of `date`.
    pub fn of(date: Date) -> Self {
        Self::new(date.month(), date.day_of_month())
    }

    /// Fail if the day does not exist in the month in any year.
    pub fn validate(&self) -> Result<()> {
        // 2000 is a leap year, so February 29 passes.
        let last = self.month.days_in(2000);
        ensure!(
            (1..=last).contains(&self.day),
            "day {} out of range [1, {last}] for {}",
            self.day,
            self.month
        );
        Ok(())
    }
}

// ── Fixed rules ───────────────────────────────────────────────────────────────

/// A holiday on the same month and day every year.
///
/// The validity window is given by `first_year` and `end_year`:
/// * `first_year == end_year`: every year;
/// * `end_year < first_year`: every year from `first_year` on;
/// * otherwise the years `first_year..end_year` (end exclusive).
///
/// A February 29 rule matches only in leap years.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FixedHolidayRule {
    /// Holiday name.
    pub name: Cow<'static, str>,
    /// Month of the holiday.
    pub month: Month,
    /// Day of the month.
    pub day: u8,
    /// First year with the holiday.
    #[cfg_attr(feature = "serde", serde(default))]
    pub first_year: i32,
    /// First year without the holiday.
    #[cfg_attr(feature = "serde", serde(default))]
    pub end_year: i32,
}

impl FixedHolidayRule {
    /// A holiday observed every year.
    pub const fn new(name: &'static str, month: Month, day: u8) -> Self {
        Self {
            name: Cow::Borrowed(name),
            month,
            day,
            first_year: 0,
            end_year: 0,
        }
    }

    /// A holiday observed every year, with a run-time name.
    pub fn named(name: impl Into<Cow<'static, str>>, month: Month, day: u8) -> Self {
        Self {
            name: name.into(),
            month,
            day,
            first_year: 0,
            end_year: 0,
        }
    }

    /// Restrict the rule to the years `first_year..end_year`.
    pub fn valid_between(mut self, first_year: i32, end_year: i32) -> Self {
        self.first_year = first_year;
        self.end_year = end_year;
        self
    }

    /// Restrict the rule to the years from `first_year` on.
    pub fn valid_from(mut self, first_year: i32) -> Self {
        self.first_year = first_year;
        // i32::MIN has no predecessor; first == end then means every year.
        self.end_year = first_year.checked_sub(1).unwrap_or(first_year);
        self
    }

    /// Holiday name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Fail if the rule can never match.
    pub fn validate(&self) -> Result<()> {
        MonthDay::new(self.month, self.day).validate()
    }

    /// Return `true` if the rule is in force in `year`.
    pub fn applies_in(&self, year: i32) -> bool {
        if self.first_year == self.end_year {
            return true;
        }
        self.first_year <= year && (year < self.end_year || self.end_year < self.first_year)
    }

    /// Return `true` if the holiday falls on `date`.
    pub fn matches(&self, date: Date) -> bool {
        let (year, month, day) = date.ymd();
        month == self.month.number() && day == self.day && self.applies_in(year)
    }
}

// ── Changing rules ────────────────────────────────────────────────────────────

/// A named predicate over dates, for holidays that none of the data-driven
/// rules describe.
#[derive(Clone)]
pub struct ComputedRule {
    name: Cow<'static, str>,
    predicate: Arc<dyn Fn(Date) -> bool + Send + Sync>,
}

impl ComputedRule {
    /// Create a rule that matches wherever `predicate` returns `true`.
    pub fn new(
        name: impl Into<Cow<'static, str>>,
        predicate: impl Fn(Date) -> bool + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            predicate: Arc::new(predicate),
        }
    }

    /// Holiday name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Return `true` if the holiday falls on `date`.
    pub fn matches(&self, date: Date) -> bool {
        (self.predicate)(date)
    }
}

impl std::fmt::Debug for ComputedRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComputedRule")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Two computed rules are equal when they share name and predicate.
impl PartialEq for ComputedRule {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && Arc::ptr_eq(&self.predicate, &other.predicate)
    }
}

/// A holiday whose date is computed per year.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "rule", rename_all = "snake_case")
)]
pub enum ChangingHolidayRule {
    /// Western Easter Sunday of the date's year shifted by `offset` days.
    ///
    /// The shifted date is looked up in Easter's own year, so the offset
    /// should keep the holiday inside that year.
    EasterOffset {
        /// Holiday name.
        name: Cow<'static, str>,
        /// Days after Easter Sunday (negative for days before).
        offset: i32,
    },
    /// The day in the inclusive window `first..=last` that falls on
    /// `weekday`.  A window with `first > last` wraps over new year.
    WeekdayInWindow {
        /// Holiday name.
        name: Cow<'static, str>,
        /// Required weekday.
        weekday: Weekday,
        /// First day of the window.
        first: MonthDay,
        /// Last day of the window.
        last: MonthDay,
    },
    /// Arbitrary predicate.  Not serialisable.
    #[cfg_attr(feature = "serde", serde(skip))]
    Computed(ComputedRule),
}

impl ChangingHolidayRule {
    /// Holiday name.
    pub fn name(&self) -> &str {
        match self {
            ChangingHolidayRule::EasterOffset { name, .. }
            | ChangingHolidayRule::WeekdayInWindow { name, .. } => name,
            ChangingHolidayRule::Computed(rule) => rule.name(),
        }
    }

    /// Fail if a window bound is not a real month/day.
    pub fn validate(&self) -> Result<()> {
        if let ChangingHolidayRule::WeekdayInWindow { first, last, .. } = self {
            first.validate()?;
            last.validate()?;
        }
        Ok(())
    }

    /// The holiday name if the holiday falls on `date`.
    pub fn matches(&self, date: Date) -> Option<&str> {
        let hit = match self {
            ChangingHolidayRule::EasterOffset { offset, .. } => easter_sunday(date.year())
                .ok()
                .and_then(|easter| easter.checked_add_days(*offset))
                == Some(date),
            ChangingHolidayRule::WeekdayInWindow {
                weekday,
                first,
                last,
                ..
            } => {
                let md = MonthDay::of(date);
                let inside = if first <= last {
                    *first <= md && md <= *last
                } else {
                    *first <= md || md <= *last
                };
                inside && date.weekday() == *weekday
            }
            ChangingHolidayRule::Computed(rule) => rule.matches(date),
        };
        hit.then(|| self.name())
    }
}

// ── Sum type ──────────────────────────────────────────────────────────────────

/// Any holiday rule.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "kind", rename_all = "snake_case")
)]
pub enum HolidayRule {
    /// Same month and day every year.
    Fixed(FixedHolidayRule),
    /// Computed per year.
    Changing(ChangingHolidayRule),
}

impl HolidayRule {
    /// Holiday name.
    pub fn name(&self) -> &str {
        match self {
            HolidayRule::Fixed(rule) => rule.name(),
            HolidayRule::Changing(rule) => rule.name(),
        }
    }

    /// Fail if the rule can never match.
    pub fn validate(&self) -> Result<()> {
        match self {
            HolidayRule::Fixed(rule) => rule.validate(),
            HolidayRule::Changing(rule) => rule.validate(),
        }
    }

    /// The holiday name if the holiday falls on `date`.
    pub fn matches(&self, date: Date) -> Option<&str> {
        match self {
            HolidayRule::Fixed(rule) => rule.matches(date).then(|| rule.name()),
            HolidayRule::Changing(rule) => rule.matches(date),
        }
    }
}

impl From<FixedHolidayRule> for HolidayRule {
    fn from(rule: FixedHolidayRule) -> Self {
        HolidayRule::Fixed(rule)
    }
}

impl From<ChangingHolidayRule> for HolidayRule {
    fn from(rule: ChangingHolidayRule) -> Self {
        HolidayRule::Changing(rule)
    }
}

impl From<ComputedRule> for HolidayRule {
    fn from(rule: ComputedRule) -> Self {
        HolidayRule::Changing(ChangingHolidayRule::Computed(rule))
    }
}
