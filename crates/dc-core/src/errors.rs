//! Error types for daycal.
//!
//! Every fallible operation in the workspace returns the single
//! `thiserror`-derived [`Error`] enum defined here.  [`ensure!`] is the
//! shorthand for precondition checks.

use thiserror::Error;

/// The top-level error type used throughout daycal.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Text could not be parsed as a date with the given layout.
    #[error("cannot parse {input:?} as {layout:?}: {reason}")]
    Parse {
        /// The offending input text.
        input: String,
        /// The layout the input was matched against.
        layout: String,
        /// What went wrong.
        reason: String,
    },

    /// Calendar fields are invalid or outside the representable day range.
    #[error("invalid date: {0}")]
    Construction(String),

    /// Precondition violated.
    #[error("precondition not satisfied: {0}")]
    Precondition(String),
}

impl Error {
    /// Build a [`Error::Parse`] from anything string-like.
    pub fn parse(
        input: impl Into<String>,
        layout: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Error::Parse {
            input: input.into(),
            layout: layout.into(),
            reason: reason.into(),
        }
    }
}

/// Shorthand `Result` type used throughout daycal.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use dc_core::{ensure, errors::Error};
/// fn positive(x: i32) -> dc_core::errors::Result<i32> {
///     ensure!(x > 0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1).is_ok());
/// assert!(matches!(positive(-1), Err(Error::Precondition(_))));
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_error_message_names_input_and_layout() {
        let e = Error::parse("2017-13-01", "2006-01-02", "month out of range");
        assert_eq!(
            e.to_string(),
            "cannot parse \"2017-13-01\" as \"2006-01-02\": month out of range"
        );
    }

    fn checked_day(day: u8) -> Result<u8> {
        crate::ensure!((1..=31).contains(&day), "day {day} out of range");
        Ok(day)
    }

    #[test]
    fn ensure_returns_precondition() {
        assert_eq!(checked_day(7), Ok(7));
        assert_eq!(
            checked_day(32),
            Err(Error::Precondition("day 32 out of range".into()))
        );
    }

    #[test]
    fn construction_message() {
        let e = Error::Construction("month 13 out of range [1, 12]".into());
        assert_eq!(e.to_string(), "invalid date: month 13 out of range [1, 12]");
    }
}
