//! Shorthand constructors for tests.

use crate::{CalendarDate, DateRange, LocaleProfile, PickerHost, YearMonth};

pub fn date(year: u16, month: u8, day: u8) -> CalendarDate {
    CalendarDate::new(year, month, day).unwrap()
}

pub fn year_month(year: u16, month: u8) -> YearMonth {
    YearMonth::new(year, month).unwrap()
}

pub fn range(min: (u16, u8, u8), max: (u16, u8, u8)) -> DateRange {
    DateRange::new(date(min.0, min.1, min.2), date(max.0, max.1, max.2)).unwrap()
}

/// English names under a different code.
pub fn profile_with_code(code: &str) -> LocaleProfile {
    LocaleProfile {
        code: code.to_owned(),
        ..LocaleProfile::english()
    }
}

/// Host that logs callbacks as `date:<value>` and `close`.
#[derive(Debug, Default)]
pub struct RecordingHost {
    pub events: Vec<String>,
}

impl PickerHost for RecordingHost {
    fn on_date_change(&mut self, date: &str) {
        self.events.push(format!("date:{date}"));
    }

    fn on_close(&mut self) {
        self.events.push("close".to_owned());
    }
}
