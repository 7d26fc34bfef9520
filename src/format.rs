//! Moment-style date patterns (`"ddd, D MMM"`, `"MMMM YYYY"`).
//!
//! | token  | output                     |
//! |--------|----------------------------|
//! | `YYYY` | four-digit year            |
//! | `YY`   | two-digit year             |
//! | `MMMM` | month name                 |
//! | `MMM`  | short month name           |
//! | `MM`   | zero-padded month number   |
//! | `M`    | month number               |
//! | `DD`   | zero-padded day of month   |
//! | `D`    | day of month               |
//! | `dddd` | weekday name               |
//! | `ddd`  | short weekday name         |
//! | `dd`   | two-letter weekday name    |
//! | `d`    | weekday number, Sunday = 0 |
//!
//! Text inside `[...]` is emitted verbatim. Any other character is a literal.

use chrono::Datelike;

use crate::{CalendarDate, LocaleProfile};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Year4,
    Year2,
    MonthName,
    MonthNameShort,
    Month2,
    Month,
    Day2,
    Day,
    WeekdayName,
    WeekdayNameShort,
    WeekdayNameMin,
    WeekdayNumber,
}

// Longest tokens first so `MMMM` wins over `MM`.
const TOKENS: &[(&str, Field)] = &[
    ("YYYY", Field::Year4),
    ("YY", Field::Year2),
    ("MMMM", Field::MonthName),
    ("MMM", Field::MonthNameShort),
    ("MM", Field::Month2),
    ("M", Field::Month),
    ("DD", Field::Day2),
    ("D", Field::Day),
    ("dddd", Field::WeekdayName),
    ("ddd", Field::WeekdayNameShort),
    ("dd", Field::WeekdayNameMin),
    ("d", Field::WeekdayNumber),
];

#[derive(Debug, Clone, PartialEq, Eq)]
enum Piece {
    Field(Field),
    Literal(String),
}

/// A compiled date pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatePattern {
    source: String,
    pieces: Vec<Piece>,
}

impl DatePattern {
    /// Compiles `pattern`. Never fails: anything that is not a token is text.
    /// An unterminated `[` runs to the end of the pattern.
    pub fn new(pattern: &str) -> Self {
        let mut pieces = Vec::new();
        let mut literal = String::new();
        let mut rest = pattern;

        while let Some(c) = rest.chars().next() {
            if c == '[' {
                let body = &rest[1..];
                let (escaped, after) = body.split_once(']').unwrap_or((body, ""));
                literal.push_str(escaped);
                rest = after;
                continue;
            }

            if let Some((token, field)) = TOKENS.iter().find(|(token, _)| rest.starts_with(token)) {
                if !literal.is_empty() {
                    pieces.push(Piece::Literal(std::mem::take(&mut literal)));
                }
                pieces.push(Piece::Field(*field));
                rest = &rest[token.len()..];
                continue;
            }

            literal.push(c);
            rest = &rest[c.len_utf8()..];
        }

        if !literal.is_empty() {
            pieces.push(Piece::Literal(literal));
        }

        Self {
            source: pattern.to_owned(),
            pieces,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Renders `date` with the names from `locale`.
    pub fn format(&self, date: CalendarDate, locale: &LocaleProfile) -> String {
        let mut out = String::with_capacity(self.source.len() + 8);
        let month = date.month0() as usize;
        let weekday = date.weekday().num_days_from_sunday() as usize;

        for piece in &self.pieces {
            match piece {
                Piece::Literal(text) => out.push_str(text),
                Piece::Field(Field::Year4) => out.push_str(&format!("{:04}", date.year())),
                Piece::Field(Field::Year2) => out.push_str(&format!("{:02}", date.year() % 100)),
                Piece::Field(Field::MonthName) => out.push_str(&locale.month_names[month]),
                Piece::Field(Field::MonthNameShort) => out.push_str(&locale.month_names_short[month]),
                Piece::Field(Field::Month2) => out.push_str(&format!("{:02}", date.month())),
                Piece::Field(Field::Month) => out.push_str(&date.month().to_string()),
                Piece::Field(Field::Day2) => out.push_str(&format!("{:02}", date.day())),
                Piece::Field(Field::Day) => out.push_str(&date.day().to_string()),
                Piece::Field(Field::WeekdayName) => out.push_str(&locale.day_names[weekday]),
                Piece::Field(Field::WeekdayNameShort) => out.push_str(&locale.day_names_short[weekday]),
                Piece::Field(Field::WeekdayNameMin) => {
                    out.extend(locale.day_names_short[weekday].chars().take(2));
                },
                Piece::Field(Field::WeekdayNumber) => out.push_str(&weekday.to_string()),
            }
        }
        out
    }
}

impl From<&str> for DatePattern {
    fn from(pattern: &str) -> Self {
        Self::new(pattern)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BundledLocales;
    use crate::locale::LocaleLoader;
    use crate::test_utils::date;

    fn en() -> LocaleProfile {
        LocaleProfile::english()
    }

    #[test]
    fn default_header_pattern() {
        let pattern = DatePattern::new("ddd, D MMM");
        assert_eq!(pattern.format(date(2024, 2, 29), &en()), "Thu, 29 Feb");
        assert_eq!(pattern.format(date(2024, 3, 4), &en()), "Mon, 4 Mar");
    }

    #[test]
    fn default_month_year_pattern() {
        let pattern = DatePattern::new("MMMM YYYY");
        assert_eq!(pattern.format(date(2024, 2, 1), &en()), "February 2024");
        assert_eq!(pattern.format(date(987, 12, 1), &en()), "December 0987");
        assert_eq!(pattern.format(date(2024, 1, 31), &en()), "January 2024");
    }

    #[test]
    fn numeric_tokens() {
        struct TestCase {
            pattern:  &'static str,
            expected: &'static str,
        }

        let cases = [
            TestCase {
                pattern:  "YYYY-MM-DD",
                expected: "2009-03-07",
            },
            TestCase {
                pattern:  "D/M/YY",
                expected: "7/3/09",
            },
            TestCase {
                pattern:  "d",
                expected: "6",
            },
            TestCase {
                pattern:  "dddd dd",
                expected: "Saturday Sa",
            },
        ];

        for case in &cases {
            assert_eq!(
                DatePattern::new(case.pattern).format(date(2009, 3, 7), &en()),
                case.expected,
                "pattern {}",
                case.pattern
            );
        }
    }

    #[test]
    fn bracketed_text_is_literal() {
        let pattern = DatePattern::new("[Day] D [of] MMMM");
        assert_eq!(pattern.format(date(2024, 5, 9), &en()), "Day 9 of May");

        let open = DatePattern::new("YYYY [MM");
        assert_eq!(open.format(date(2024, 5, 9), &en()), "2024 MM");
    }

    #[test]
    fn names_come_from_the_given_locale() {
        let fr = BundledLocales.load("fr").unwrap();
        let pattern = DatePattern::from("dddd D MMMM YYYY");
        assert_eq!(pattern.format(date(2024, 8, 15), &fr), "jeudi 15 août 2024");
        assert_eq!(
            pattern.format(date(2024, 8, 15), &en()),
            "Thursday 15 August 2024"
        );
    }

    #[test]
    fn keeps_source() {
        assert_eq!(DatePattern::new("MMMM YYYY").as_str(), "MMMM YYYY");
    }
}
