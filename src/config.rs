use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::{
    CalendarDate, DateRange, LocaleProfile,
    consts::{
        DEFAULT_CANCEL_LABEL, DEFAULT_HEADER_FORMAT, DEFAULT_MONTH_YEAR_FORMAT, DEFAULT_OK_LABEL,
    },
    error::ConfigError,
    theme::{StyleOverrides, ThemeOverrides},
};

/// Everything the host passes to the picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct PickerConfig {
    /// Date selected when the picker opens. `None` means today.
    pub initial_date: Option<CalendarDate>,

    #[serde(default = "default_min_date")]
    pub min_date: CalendarDate,

    #[serde(default = "default_max_date")]
    pub max_date: CalendarDate,

    /// Month and weekday names. `None` means English.
    pub locale: Option<LocaleProfile>,

    #[serde(default = "default_cancel_label")]
    pub cancel_label: String,

    #[serde(default = "default_ok_label")]
    pub ok_label: String,

    #[serde(default = "default_true")]
    pub animation_enabled: bool,

    pub theme: ThemeOverrides,

    /// Pattern for the selected date in the header.
    #[serde(default = "default_header_format")]
    pub header_format: String,

    /// Pattern for the displayed month above the grid.
    #[serde(default = "default_month_year_format")]
    pub month_year_format: String,

    #[serde(default = "default_first_weekday")]
    pub first_weekday: Weekday,

    pub styles: StyleOverrides,
}

fn default_min_date() -> CalendarDate {
    DateRange::default().min()
}

fn default_max_date() -> CalendarDate {
    DateRange::default().max()
}

fn default_cancel_label() -> String {
    DEFAULT_CANCEL_LABEL.to_string()
}

fn default_ok_label() -> String {
    DEFAULT_OK_LABEL.to_string()
}

fn default_true() -> bool {
    true
}

fn default_header_format() -> String {
    DEFAULT_HEADER_FORMAT.to_string()
}

fn default_month_year_format() -> String {
    DEFAULT_MONTH_YEAR_FORMAT.to_string()
}

fn default_first_weekday() -> Weekday {
    Weekday::Mon
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            initial_date: None,
            min_date: default_min_date(),
            max_date: default_max_date(),
            locale: None,
            cancel_label: default_cancel_label(),
            ok_label: default_ok_label(),
            animation_enabled: true,
            theme: ThemeOverrides::default(),
            header_format: default_header_format(),
            month_year_format: default_month_year_format(),
            first_weekday: default_first_weekday(),
            styles: StyleOverrides::default(),
        }
    }
}

impl PickerConfig {
    /// The selectable range.
    ///
    /// # Errors
    /// Returns `ConfigError::Range` if `min_date` is after `max_date`.
    pub fn range(&self) -> Result<DateRange, ConfigError> {
        Ok(DateRange::new(self.min_date, self.max_date)?)
    }

    /// Checks the configuration without building a session.
    ///
    /// # Errors
    /// Same as [`PickerConfig::range`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.range().map(|_| ())
    }

    pub fn initial_date_or_today(&self) -> CalendarDate {
        self.initial_date.unwrap_or_else(CalendarDate::today)
    }
}
