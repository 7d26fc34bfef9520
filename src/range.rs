use std::str::FromStr;

use tracing::debug;

use crate::{
    CalendarDate, YearSequence,
    consts::{DEFAULT_MAX_DATE, DEFAULT_MIN_DATE},
    error::{ParseError, RangeError},
    prelude::*,
};

/// ISO 8601 interval separator used by `Display`/`FromStr`.
const RANGE_SEPARATOR: char = '/';

/// The selectable window of a picker session (inclusive on both ends).
/// The lower bound must be less than or equal to the upper bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{min}/{max}")]
pub struct DateRange {
    min: CalendarDate,
    max: CalendarDate,
}

/// Outcome of a year-picker jump.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YearJump {
    /// The normalized candidate lies inside the range.
    Accepted(CalendarDate),
    /// The candidate was outside the range or not a representable year.
    Rejected { year: i32 },
}

impl YearJump {
    pub const fn accepted(self) -> Option<CalendarDate> {
        match self {
            Self::Accepted(date) => Some(date),
            Self::Rejected { .. } => None,
        }
    }
}

impl DateRange {
    /// Creates a new range with validation.
    ///
    /// # Errors
    /// Returns `RangeError::Inverted` if min > max.
    pub fn new(min: CalendarDate, max: CalendarDate) -> Result<Self, RangeError> {
        if min > max {
            return Err(RangeError::Inverted {
                min: min.to_string(),
                max: max.to_string(),
            });
        }
        Ok(Self { min, max })
    }

    pub const fn min(&self) -> CalendarDate {
        self.min
    }

    pub const fn max(&self) -> CalendarDate {
        self.max
    }

    /// Inclusive, day-granular containment test.
    pub fn contains(&self, date: CalendarDate) -> bool {
        self.min <= date && date <= self.max
    }

    /// Nearest date inside the range.
    pub fn clamp(&self, date: CalendarDate) -> CalendarDate {
        date.clamp(self.min, self.max)
    }

    /// First and last year touched by the range.
    pub fn year_span(&self) -> (u16, u16) {
        (self.min.year(), self.max.year())
    }

    /// Years offered by the year list for this range.
    pub fn years(&self) -> YearSequence {
        YearSequence::new(self)
    }

    /// Moves `current` to `target_year`, keeping month and day. A day that
    /// does not exist in the target year is pulled back to the month's last
    /// day before the range test. Out-of-range or unrepresentable results
    /// are rejected.
    pub fn clamp_year_jump(&self, current: CalendarDate, target_year: i32) -> YearJump {
        let candidate = match current.with_year_clamped(target_year) {
            Ok(candidate) => candidate,
            Err(err) => {
                debug!(target_year, %err, "year jump rejected: unrepresentable year");
                return YearJump::Rejected { year: target_year };
            },
        };

        if self.contains(candidate) {
            YearJump::Accepted(candidate)
        } else {
            debug!(%candidate, range = %self, "year jump rejected: out of range");
            YearJump::Rejected { year: target_year }
        }
    }
}

impl Default for DateRange {
    fn default() -> Self {
        let min = DEFAULT_MIN_DATE.parse().unwrap_or_else(|_| CalendarDate::today());
        let max = DEFAULT_MAX_DATE.parse().unwrap_or(min);
        Self { min, max }
    }
}

impl FromStr for DateRange {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let separator_count = trimmed.matches(RANGE_SEPARATOR).count();

        match separator_count {
            0 => Err(ParseError::InvalidFormat(format!(
                "No range separator found (expected '{RANGE_SEPARATOR}'): {s}"
            ))
            .into()),
            1 => {
                let (min, max) = trimmed.split_once(RANGE_SEPARATOR).ok_or_else(|| {
                    ParseError::InvalidFormat(format!("Separator '{RANGE_SEPARATOR}' not found in {s}"))
                })?;
                Self::new(min.trim().parse()?, max.trim().parse()?)
            },
            _ => Err(ParseError::InvalidFormat(format!(
                "Too many '{RANGE_SEPARATOR}' separators: expected 1, found {separator_count}"
            ))
            .into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{date, range};

    #[test]
    fn test_new_range_cases() {
        struct TestCase {
            min:            (u16, u8, u8),
            max:            (u16, u8, u8),
            should_succeed: bool,
            description:    &'static str,
        }

        let cases = [
            TestCase {
                min:            (1990, 1, 1),
                max:            (2000, 12, 31),
                should_succeed: true,
                description:    "valid range (min < max)",
            },
            TestCase {
                min:            (2000, 1, 1),
                max:            (1990, 1, 1),
                should_succeed: false,
                description:    "invalid range (min > max)",
            },
            TestCase {
                min:            (2000, 6, 15),
                max:            (2000, 6, 15),
                should_succeed: true,
                description:    "single-day range",
            },
        ];

        for case in &cases {
            let min = date(case.min.0, case.min.1, case.min.2);
            let max = date(case.max.0, case.max.1, case.max.2);
            let result = DateRange::new(min, max);

            if case.should_succeed {
                assert!(result.is_ok(), "Expected success for: {}", case.description);
            } else {
                assert!(
                    matches!(result, Err(RangeError::Inverted { .. })),
                    "Expected failure for: {}",
                    case.description
                );
            }
        }
    }

    #[test]
    fn test_contains_is_inclusive() {
        let r = range((2000, 1, 1), (2005, 12, 31));

        assert!(r.contains(date(2000, 1, 1)));
        assert!(r.contains(date(2005, 12, 31)));
        assert!(r.contains(date(2003, 6, 15)));
        assert!(!r.contains(date(1999, 12, 31)));
        assert!(!r.contains(date(2006, 1, 1)));
    }

    #[test]
    fn test_clamp() {
        let r = range((2000, 1, 1), (2005, 12, 31));
        assert_eq!(r.clamp(date(1980, 5, 5)), date(2000, 1, 1));
        assert_eq!(r.clamp(date(2010, 5, 5)), date(2005, 12, 31));
        assert_eq!(r.clamp(date(2002, 5, 5)), date(2002, 5, 5));
    }

    #[test]
    fn test_default_range() {
        let r = DateRange::default();
        assert_eq!(r.min(), date(1900, 1, 1));
        assert_eq!(r.max(), date(2700, 12, 31));
        assert_eq!(r.year_span(), (1900, 2700));
        assert_eq!(r.years().len(), 801);
    }

    #[test]
    fn test_year_jump_normalizes_leap_day() {
        let r = range((1900, 1, 1), (2700, 12, 31));
        assert_eq!(
            r.clamp_year_jump(date(2024, 2, 29), 2023),
            YearJump::Accepted(date(2023, 2, 28))
        );
    }

    #[test]
    fn test_year_jump_rejections() {
        let r = range((2000, 3, 1), (2005, 6, 30));
        let current = date(2003, 7, 4);

        assert_eq!(
            r.clamp_year_jump(current, 2005),
            YearJump::Rejected { year: 2005 },
            "2005-07-04 is past max"
        );
        assert_eq!(
            r.clamp_year_jump(current, 1999),
            YearJump::Rejected { year: 1999 }
        );
        assert_eq!(r.clamp_year_jump(current, -1), YearJump::Rejected { year: -1 });
        assert_eq!(r.clamp_year_jump(current, 2001).accepted(), Some(date(2001, 7, 4)));
    }

    #[test]
    fn test_year_jump_never_leaves_range() {
        let r = range((2000, 2, 29), (2004, 2, 28));
        let current = date(2000, 2, 29);
        for year in 1990..2010 {
            if let YearJump::Accepted(d) = r.clamp_year_jump(current, year) {
                assert!(r.contains(d), "{d} escaped {r}");
            }
        }
        // 2004-02-29 exists but is one day past max
        assert_eq!(r.clamp_year_jump(current, 2004), YearJump::Rejected { year: 2004 });
    }

    #[test]
    fn test_display_and_from_str() {
        let r = range((1990, 6, 15), (2000, 12, 31));
        assert_eq!(r.to_string(), "1990-06-15/2000-12-31");
        assert_eq!("1990-06-15/2000-12-31".parse::<DateRange>().unwrap(), r);
    }

    #[test]
    fn test_from_str_errors() {
        assert!("2000-01-01/1990-01-01".parse::<DateRange>().is_err());
        let err = "20002001".parse::<DateRange>().unwrap_err();
        assert!(err.to_string().contains("No range separator found"));
        let err = "2000-01-01/2001-01-01/2002-01-01"
            .parse::<DateRange>()
            .unwrap_err();
        assert!(err.to_string().contains("expected 1, found 2"));
    }
}
