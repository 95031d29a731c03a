//! Workday adjustment conventions.

use dc_core::errors::Error;

/// How to move a date that is not a workday onto one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum WorkdayConvention {
    /// Leave the date where it is.
    Unadjusted,
    /// The next workday.
    Following,
    /// The next workday, or the previous one if the next is in another month.
    ModifiedFollowing,
    /// The previous workday.
    Preceding,
    /// The previous workday, or the next one if the previous is in another
    /// month.
    ModifiedPreceding,
    /// Whichever workday is closer; ties go forward.
    Nearest,
}

impl WorkdayConvention {
    /// Every convention.
    pub const ALL: [WorkdayConvention; 6] = [
        WorkdayConvention::Unadjusted,
        WorkdayConvention::Following,
        WorkdayConvention::ModifiedFollowing,
        WorkdayConvention::Preceding,
        WorkdayConvention::ModifiedPreceding,
        WorkdayConvention::Nearest,
    ];

    /// Short identifier, as accepted by `FromStr`.
    pub fn as_str(self) -> &'static str {
        match self {
            WorkdayConvention::Unadjusted => "unadjusted",
            WorkdayConvention::Following => "following",
            WorkdayConvention::ModifiedFollowing => "modified_following",
            WorkdayConvention::Preceding => "preceding",
            WorkdayConvention::ModifiedPreceding => "modified_preceding",
            WorkdayConvention::Nearest => "nearest",
        }
    }
}

impl std::fmt::Display for WorkdayConvention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for WorkdayConvention {
    type Err = Error;

    /// Accepts the `as_str` identifiers, case-insensitively, with `-` or `_`.
    fn from_str(s: &str) -> Result<Self, Error> {
        let key = s.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == key)
            .ok_or_else(|| Error::Precondition(format!("unknown workday convention {s:?}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_roundtrip() {
        for c in WorkdayConvention::ALL {
            assert_eq!(c.to_string().parse::<WorkdayConvention>().unwrap(), c);
        }
        assert_eq!(
            "Modified-Following".parse::<WorkdayConvention>().unwrap(),
            WorkdayConvention::ModifiedFollowing
        );
        assert!("end_of_month".parse::<WorkdayConvention>().is_err());
    }
}
