//! Error types for the calendar_picker crate.
//!
//! None of these reach the host through the session callbacks. They surface
//! only from constructors (dates, ranges, configuration) and from locale
//! loaders, whose failures the resolver absorbs.

use crate::consts::{MAX_MONTH, MAX_YEAR};

/// Error produced while building or parsing a calendar date.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Invalid date format: {0}")]
    InvalidFormat(String),

    #[error("Invalid year: {0} (must be 1-{max})", max = MAX_YEAR)]
    InvalidYear(i64),

    #[error("Invalid month: {0} (must be 1-{max})", max = MAX_MONTH)]
    InvalidMonth(u8),

    #[error("Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: u16, month: u8, day: u8 },

    #[error("Empty date string")]
    EmptyInput,
}

/// Error type for selectable range construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    /// Lower bound is after the upper bound.
    #[error("Invalid date range: min ({min}) is after max ({max})")]
    Inverted { min: String, max: String },

    /// Error parsing a bound.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Error returned by locale loaders.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LocaleError {
    /// No data is available for the requested code.
    #[error("locale not found: {0}")]
    NotFound(String),

    /// Data exists but could not be loaded.
    #[error("failed to load locale {code}: {reason}")]
    LoadFailed { code: String, reason: String },

    /// A supplied profile is unusable (blank code or blank names).
    #[error("invalid locale profile {code}: {reason}")]
    InvalidProfile { code: String, reason: &'static str },
}

/// Error returned when host configuration cannot start a session.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error(transparent)]
    Range(#[from] RangeError),

    #[error(transparent)]
    Date(#[from] ParseError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_error_messages() {
        assert_eq!(
            ParseError::InvalidYear(0).to_string(),
            "Invalid year: 0 (must be 1-9999)"
        );
        assert_eq!(
            ParseError::InvalidMonth(13).to_string(),
            "Invalid month: 13 (must be 1-12)"
        );
        assert_eq!(
            ParseError::InvalidDay {
                year:  2023,
                month: 2,
                day:   29,
            }
            .to_string(),
            "Invalid day 29 for month 2023-02"
        );
    }

    #[test]
    fn range_error_wraps_parse_error() {
        let err: RangeError = ParseError::EmptyInput.into();
        assert_eq!(err.to_string(), "Empty date string");
    }

    #[test]
    fn locale_error_messages() {
        assert_eq!(LocaleError::NotFound("zz".into()).to_string(), "locale not found: zz");
        let err = LocaleError::LoadFailed {
            code:   "fr".into(),
            reason: "corrupt table".into(),
        };
        assert_eq!(err.to_string(), "failed to load locale fr: corrupt table");
    }

    #[test]
    fn errors_are_send_and_sync() {
        fn assert_impl<T: std::error::Error + Send + Sync>() {}
        assert_impl::<ParseError>();
        assert_impl::<RangeError>();
        assert_impl::<LocaleError>();
        assert_impl::<ConfigError>();
    }
}
