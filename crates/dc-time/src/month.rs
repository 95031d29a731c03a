//! Months of the year.

/// Month of the year.
///
/// Variants are numbered 1–12 (January = 1, December = 12).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Month {
    /// January (1).
    January = 1,
    /// February (2).
    February = 2,
    /// March (3).
    March = 3,
    /// April (4).
    April = 4,
    /// May (5).
    May = 5,
    /// June (6).
    June = 6,
    /// July (7).
    July = 7,
    /// August (8).
    August = 8,
    /// September (9).
    September = 9,
    /// October (10).
    October = 10,
    /// November (11).
    November = 11,
    /// December (12).
    December = 12,
}

impl Month {
    /// All months in calendar order.
    pub const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    /// The month numbered `n` (1 = January), or `None` outside `1..=12`.
    pub fn from_number(n: u8) -> Option<Self> {
        Self::ALL.get(usize::from(n).checked_sub(1)?).copied()
    }

    /// Month number, 1-based.
    pub const fn number(self) -> u8 {
        self as u8
    }

    /// Number of days in this month of `year`.
    pub fn days_in(self, year: i32) -> u8 {
        crate::date::days_in_month(year, self.number())
    }

    /// Three-letter abbreviation.
    pub fn short_name(self) -> &'static str {
        &self.long_name()[..3]
    }

    /// Full English name.
    pub fn long_name(self) -> &'static str {
        NAMES[self as usize - 1]
    }

    /// The month after this one, wrapping December to January.
    pub fn succ(self) -> Month {
        Self::ALL[self as usize % 12]
    }
}

const NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

impl std::fmt::Display for Month {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.long_name())
    }
}

impl From<Month> for u8 {
    fn from(m: Month) -> u8 {
        m as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbering() {
        for (i, m) in Month::ALL.into_iter().enumerate() {
            assert_eq!(usize::from(m.number()), i + 1);
            assert_eq!(Month::from_number(m.number()), Some(m));
        }
        assert_eq!(Month::from_number(0), None);
        assert_eq!(Month::from_number(13), None);
    }

    #[test]
    fn succ_wraps() {
        assert_eq!(Month::March.succ(), Month::April);
        assert_eq!(Month::December.succ(), Month::January);
    }

    #[test]
    fn names() {
        assert_eq!(Month::September.short_name(), "Sep");
        assert_eq!(Month::May.short_name(), "May");
        assert_eq!(Month::June.to_string(), "June");
    }

    #[test]
    fn february_length() {
        assert_eq!(Month::February.days_in(2024), 29);
        assert_eq!(Month::February.days_in(2100), 28);
        assert_eq!(Month::February.days_in(2000), 29);
    }
}
