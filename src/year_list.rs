use crate::{DateRange, consts::YEAR_LIST_LOOKBACK};

/// Years offered by the year picker, ascending and inclusive.
///
/// A pure function of the range's first and last year, so callers rebuild it
/// only when the range changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearSequence {
    first: u16,
    years: Vec<u16>,
}

impl YearSequence {
    pub fn new(range: &DateRange) -> Self {
        let (first, last) = range.year_span();
        Self {
            first,
            years: (first..=last).collect(),
        }
    }

    pub fn as_slice(&self) -> &[u16] {
        &self.years
    }

    pub fn len(&self) -> usize {
        self.years.len()
    }

    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }

    pub fn position(&self, year: u16) -> Option<usize> {
        year.checked_sub(self.first)
            .map(usize::from)
            .filter(|index| *index < self.years.len())
    }

    /// Index the list should open at so `current_year` sits a few rows below
    /// the top edge. Clamped to `[0, len - 1]`; a year outside the sequence
    /// anchors at the top.
    pub fn scroll_anchor(&self, current_year: u16) -> usize {
        let last = self.years.len().saturating_sub(1);
        self.position(current_year)
            .map_or(0, |index| index.saturating_sub(YEAR_LIST_LOOKBACK))
            .min(last)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::range;

    #[test]
    fn years_are_inclusive_and_ascending() {
        let years = YearSequence::new(&range((2000, 1, 1), (2005, 12, 31)));
        assert_eq!(years.as_slice(), &[2000, 2001, 2002, 2003, 2004, 2005]);
        assert_eq!(years.len(), 6);
        assert!(!years.is_empty());
    }

    #[test]
    fn single_year_range() {
        let years = YearSequence::new(&range((2010, 3, 1), (2010, 4, 1)));
        assert_eq!(years.as_slice(), &[2010]);
        assert_eq!(years.scroll_anchor(2010), 0);
    }

    #[test]
    fn default_range_spans_eight_centuries() {
        let years = YearSequence::new(&DateRange::default());
        assert_eq!(years.len(), 801);
        assert_eq!(years.position(2024), Some(124));
    }

    #[test]
    fn scroll_anchor_cases() {
        struct TestCase {
            year:        u16,
            expected:    usize,
            description: &'static str,
        }

        let years = YearSequence::new(&range((2000, 1, 1), (2005, 12, 31)));
        let cases = [
            TestCase {
                year:        2003,
                expected:    0,
                description: "index 3 minus lookback",
            },
            TestCase {
                year:        2005,
                expected:    2,
                description: "last year",
            },
            TestCase {
                year:        2001,
                expected:    0,
                description: "near top clamps to zero",
            },
            TestCase {
                year:        1990,
                expected:    0,
                description: "before first year",
            },
            TestCase {
                year:        2050,
                expected:    0,
                description: "after last year",
            },
        ];

        for case in &cases {
            assert_eq!(
                years.scroll_anchor(case.year),
                case.expected,
                "{}",
                case.description
            );
        }
    }

    #[test]
    fn position_outside_sequence() {
        let years = YearSequence::new(&range((2000, 1, 1), (2005, 12, 31)));
        assert_eq!(years.position(1999), None);
        assert_eq!(years.position(2006), None);
        assert_eq!(years.position(2000), Some(0));
    }
}
