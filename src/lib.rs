//! Headless state for a modal calendar date picker.
//!
//! A [`PickerSession`] owns everything between "the host shows the picker"
//! and "the host learns the chosen date": locale resolution, range
//! clamping, month navigation, the year list and the commit/cancel
//! protocol. Rendering is left to the host, which reads view data from the
//! session ([`CalendarProps`], [`MonthGrid`], formatted labels) and feeds
//! gestures back in.
//!
//! ```
//! use calendar_picker::{CalendarDate, PickerConfig, PickerHost, PickerSession};
//!
//! #[derive(Default)]
//! struct Host(Option<String>);
//!
//! impl PickerHost for Host {
//!     fn on_date_change(&mut self, date: &str) {
//!         self.0 = Some(date.to_owned());
//!     }
//!     fn on_close(&mut self) {}
//! }
//!
//! let config = PickerConfig {
//!     initial_date: Some("2024-02-29".parse::<CalendarDate>()?),
//!     ..PickerConfig::default()
//! };
//! let mut picker = PickerSession::new(config, Host::default())?;
//! picker.set_visible(true);
//! assert_eq!(picker.header_label().as_deref(), Some("Thu, 29 Feb"));
//!
//! picker.open_year_picker();
//! picker.pick_year(2023);
//! picker.commit();
//! assert_eq!(picker.host().0.as_deref(), Some("2023-02-28"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod consts;
mod prelude;
mod types;

pub mod animation;
pub mod config;
pub mod date;
pub mod error;
pub mod format;
pub mod grid;
pub mod locale;
pub mod marked;
pub mod navigation;
pub mod range;
pub mod session;
pub mod theme;
pub mod year_list;

#[cfg(test)]
mod test_utils;

pub use animation::{AnimationDriver, AnimationRequest, NoAnimation, RecordingAnimation, Transition};
pub use config::PickerConfig;
pub use consts::{MAX_YEAR, MIN_YEAR};
pub use date::{CalendarDate, Direction, YearMonth};
pub use error::{ConfigError, LocaleError, ParseError, RangeError};
pub use format::DatePattern;
pub use grid::{GridDay, MonthGrid};
pub use locale::{BundledLocales, LocaleLoader, LocaleProfile, LocaleResolver, ResolvedLocale};
pub use marked::{MarkedDateSet, Marking};
pub use navigation::{Navigator, PickerState};
pub use range::{DateRange, YearJump};
pub use session::{CalendarProps, PickerHost, PickerSession};
pub use theme::{StyleOverrides, StyleTable, ThemeColors, ThemeOverrides};
pub use types::{Day, Month, Year};
pub use year_list::YearSequence;
