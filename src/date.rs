use std::str::FromStr;

use chrono::{Datelike, Days, Local, Months, NaiveDate, Weekday};

use crate::consts::{DATE_SEPARATOR, MIN_DAY};
use crate::error::ParseError;
use crate::prelude::*;
use crate::types::{Day, Month, Year, year_in_bounds};

/// A calendar day with no time component.
///
/// Backed by [`NaiveDate`] but restricted to years `1..=9999`, so the
/// `YYYY-MM-DD` rendering is always exactly ten characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deref, Into, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", "_0.year()", "_0.month()", "_0.day()")]
pub struct CalendarDate(NaiveDate);

// Year is guaranteed to fit in u16 and month/day in u8 by construction.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
impl CalendarDate {
    /// Creates a date from validated components.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidDay` if the day does not exist in that month.
    pub fn from_parts(year: Year, month: Month, day: Day) -> Result<Self, ParseError> {
        NaiveDate::from_ymd_opt(
            i32::from(year.get()),
            u32::from(month.get()),
            u32::from(day.get()),
        )
        .map(Self)
        .ok_or(ParseError::InvalidDay {
            year:  year.get(),
            month: month.get(),
            day:   day.get(),
        })
    }

    /// Creates a date from raw components.
    ///
    /// # Errors
    /// Returns the `ParseError` of the first component that fails validation.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, ParseError> {
        let year = Year::new(year)?;
        let month = Month::new(month)?;
        let day = Day::new(day, year, month)?;
        Self::from_parts(year, month, day)
    }

    /// Today's date on the local clock.
    pub fn today() -> Self {
        let now = Local::now().date_naive();
        Self::try_from(now).unwrap_or_else(|_| Self::min_value())
    }

    fn min_value() -> Self {
        Self(NaiveDate::from_ymd_opt(1, 1, 1).unwrap_or(NaiveDate::MIN))
    }

    pub fn year(self) -> u16 {
        self.0.year() as u16
    }

    pub fn month(self) -> u8 {
        self.0.month() as u8
    }

    pub fn day(self) -> u8 {
        self.0.day() as u8
    }

    pub fn weekday(self) -> Weekday {
        self.0.weekday()
    }

    pub const fn as_naive(self) -> NaiveDate {
        self.0
    }

    /// The month containing this date.
    pub fn start_of_month(self) -> YearMonth {
        YearMonth(self.0 - Days::new(u64::from(self.0.day0())))
    }

    /// Replaces the year, keeping month and day. A day that does not exist
    /// in the target year's month is pulled back to that month's last day.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidYear` if `year` is outside `1..=9999`.
    pub fn with_year_clamped(self, year: i32) -> Result<Self, ParseError> {
        let year = Year::from_i32(year)?;
        let month = Month::new(self.month())?;
        let day = Day::clamped(self.day(), year, month);
        Self::from_parts(year, month, day)
    }
}

impl TryFrom<NaiveDate> for CalendarDate {
    type Error = ParseError;

    fn try_from(value: NaiveDate) -> Result<Self, Self::Error> {
        u16::try_from(value.year())
            .ok()
            .filter(|y| year_in_bounds(*y))
            .map(|_| Self(value))
            .ok_or(ParseError::InvalidYear(i64::from(value.year())))
    }
}

impl FromStr for CalendarDate {
    type Err = ParseError;

    /// Parses `YYYY-MM-DD`. Surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).map(str::trim).collect();
        if parts.len() != 3 {
            return Err(ParseError::InvalidFormat(format!(
                "expected YYYY{DATE_SEPARATOR}MM{DATE_SEPARATOR}DD, got {trimmed}"
            )));
        }

        let year = parse_number::<u16>(parts[0])?;
        let month = parse_number::<u8>(parts[1])?;
        let day = parse_number::<u8>(parts[2])?;
        Self::new(year, month, day)
    }
}

fn parse_number<T: FromStr>(s: &str) -> Result<T, ParseError> {
    s.parse::<T>().map_err(|_| ParseError::InvalidFormat(s.to_owned()))
}

impl serde::Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// A month of a year, stored as its first day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}", "_0.year()", "_0.month()")]
pub struct YearMonth(NaiveDate);

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
impl YearMonth {
    /// # Errors
    /// Returns a `ParseError` if the year or month is out of bounds.
    pub fn new(year: u16, month: u8) -> Result<Self, ParseError> {
        CalendarDate::new(year, month, MIN_DAY).map(CalendarDate::start_of_month)
    }

    pub fn year(self) -> u16 {
        self.0.year() as u16
    }

    pub fn month(self) -> u8 {
        self.0.month() as u8
    }

    /// The first day of the month.
    pub const fn first_day(self) -> CalendarDate {
        CalendarDate(self.0)
    }

    /// Moves one month in `direction`. Returns `None` past year 1 or 9999.
    pub fn shift(self, direction: Direction) -> Option<Self> {
        let stepped = match direction {
            Direction::Left => self.0.checked_sub_months(Months::new(1)),
            Direction::Right => self.0.checked_add_months(Months::new(1)),
        }?;
        year_in_bounds(u16::try_from(stepped.year()).ok()?).then_some(Self(stepped))
    }
}

impl serde::Serialize for YearMonth {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl From<CalendarDate> for YearMonth {
    fn from(date: CalendarDate) -> Self {
        date.start_of_month()
    }
}

/// Month navigation direction. `Left` goes back in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[display(fmt = "left")]
    Left,
    #[display(fmt = "right")]
    Right,
}

impl Direction {
    pub const fn reversed(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}
