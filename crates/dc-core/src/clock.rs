//! Clock sources.
//!
//! Anything that needs "now" takes a [`Clock`] argument instead of reading
//! the system time itself, so that callers (and tests) decide which moment
//! and which UTC offset "today" refers to.  Timezone databases are not
//! handled here: a caller that knows the offset of a location at the current
//! moment passes it to [`SystemClock::with_offset`].

use chrono::{DateTime, FixedOffset, Offset, Utc};

/// A source of the current moment.
pub trait Clock {
    /// The current moment, expressed in the clock's UTC offset.
    fn now(&self) -> DateTime<FixedOffset>;
}

/// The system clock observed at a fixed UTC offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SystemClock {
    offset: FixedOffset,
}

impl SystemClock {
    /// The system clock in UTC.
    pub fn utc() -> Self {
        Self {
            offset: Utc.fix(),
        }
    }

    /// The system clock at the given offset.
    pub fn with_offset(offset: FixedOffset) -> Self {
        Self { offset }
    }

    /// The offset this clock reports in.
    pub fn offset(&self) -> FixedOffset {
        self.offset
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::utc()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Utc::now().with_timezone(&self.offset)
    }
}

/// A clock frozen at a single moment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(DateTime<FixedOffset>);

impl FixedClock {
    /// Freeze the clock at `moment`.
    pub fn new(moment: DateTime<FixedOffset>) -> Self {
        Self(moment)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> DateTime<FixedOffset> {
        (**self).now()
    }
}
