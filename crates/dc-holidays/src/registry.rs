//! Region registry.
//!
//! [`HolidayRegistry`] maps region identifiers such as `"Europe/Stockholm"`
//! to holiday calendars.  Lookups never fail: an unknown region behaves like
//! a calendar without holidays.
//!
//! The process-wide registry of predefined regions is built on first use and
//! never mutated afterwards.  Callers who need other regions build their own
//! registry and pass it by reference.

use std::collections::HashMap;
use std::sync::OnceLock;

use dc_time::Date;
use tracing::debug;

use crate::calendar::{Calendar, HolidayCalendar};
use crate::calendars;

static GLOBAL: OnceLock<HolidayRegistry> = OnceLock::new();
static WEEKENDS_ONLY: HolidayCalendar = HolidayCalendar::WEEKENDS_ONLY;

/// Holiday calendars indexed by region identifier.
///
/// Region identifiers are opaque and case-sensitive.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct HolidayRegistry {
    calendars: HashMap<String, HolidayCalendar>,
}

impl HolidayRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding every predefined region.
    pub fn predefined() -> Self {
        let registry = Self::new().with_calendar(calendars::STOCKHOLM, calendars::sweden());
        debug!(regions = registry.calendars.len(), "predefined holiday registry built");
        registry
    }

    /// The process-wide registry of predefined regions.
    pub fn global() -> &'static HolidayRegistry {
        GLOBAL.get_or_init(Self::predefined)
    }

    /// Add a calendar under `region`, replacing any previous one.
    pub fn with_calendar(mut self, region: impl Into<String>, calendar: HolidayCalendar) -> Self {
        self.insert(region, calendar);
        self
    }

    /// Add a calendar under `region`, returning the one it replaces.
    pub fn insert(
        &mut self,
        region: impl Into<String>,
        calendar: HolidayCalendar,
    ) -> Option<HolidayCalendar> {
        let region = region.into();
        debug!(
            region = %region,
            calendar = calendar.name(),
            rules = calendar.rules().len(),
            "holiday calendar registered"
        );
        self.calendars.insert(region, calendar)
    }

    /// The calendar registered for `region`.
    pub fn get(&self, region: &str) -> Option<&HolidayCalendar> {
        self.calendars.get(region)
    }

    /// The calendar registered for `region`, or a weekends-only calendar.
    pub fn calendar_or_empty(&self, region: &str) -> &HolidayCalendar {
        self.get(region).unwrap_or(&WEEKENDS_ONLY)
    }

    /// Names of the holidays falling on `date` in `region`, sorted.
    ///
    /// Empty for unknown regions.
    pub fn matches(&self, region: &str, date: Date) -> Vec<&str> {
        self.calendar_or_empty(region).matches(date)
    }

    /// Registered region identifiers, sorted.
    pub fn regions(&self) -> Vec<&str> {
        let mut regions: Vec<&str> = self.calendars.keys().map(String::as_str).collect();
        regions.sort_unstable();
        regions
    }

    /// Number of registered regions.
    pub fn len(&self) -> usize {
        self.calendars.len()
    }

    /// Return `true` if no region is registered.
    pub fn is_empty(&self) -> bool {
        self.calendars.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, HolidayCalendar)> for HolidayRegistry {
    fn from_iter<I: IntoIterator<Item = (S, HolidayCalendar)>>(iter: I) -> Self {
        let mut registry = Self::new();
        for (region, calendar) in iter {
            registry.insert(region, calendar);
        }
        registry
    }
}
