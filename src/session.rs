//! The host-facing picker.
//!
//! Data leaves a session through exactly two callbacks on [`PickerHost`]:
//! `on_date_change` (commit only, always an in-range `YYYY-MM-DD`) followed
//! by `on_close`, or `on_close` alone when the picker is dismissed.

use chrono::Weekday;
use serde::Serialize;
use tracing::{debug, info};

use crate::{
    CalendarDate, DateRange, Direction, LocaleProfile, MarkedDateSet, YearMonth, YearSequence,
    animation::{AnimationDriver, AnimationRequest, NoAnimation, Transition},
    config::PickerConfig,
    error::ConfigError,
    format::DatePattern,
    grid::{self, MonthGrid},
    locale::{LocaleResolver, ResolvedLocale},
    navigation::{Navigator, PickerState},
    range::YearJump,
    theme::{StyleOverrides, ThemeColors},
};

/// Receiver of the picker's two outcomes.
pub trait PickerHost {
    /// The user confirmed `date` (`YYYY-MM-DD`).
    fn on_date_change(&mut self, date: &str);
    /// The picker closed, after a commit or a dismissal.
    fn on_close(&mut self);
}

/// Input for the calendar-grid renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarProps {
    /// First day of the displayed month.
    pub current:       String,
    pub marked_dates:  MarkedDateSet,
    pub min_date:      String,
    pub max_date:      String,
    pub locale:        String,
    pub first_weekday: Weekday,
    /// Changes whenever the grid must be rebuilt from `current`.
    pub epoch:         u64,
}

/// One picker instance.
pub struct PickerSession<H, A = NoAnimation> {
    config:               PickerConfig,
    host:                 H,
    animator:             A,
    resolver:             LocaleResolver,
    locale:               ResolvedLocale,
    colors:               ThemeColors,
    header_pattern:       DatePattern,
    month_year_pattern:   DatePattern,
    navigator:            Navigator,
    visible:              bool,
    animation_generation: u64,
}

impl<H: PickerHost> PickerSession<H> {
    /// # Errors
    /// Returns `ConfigError::Range` if the configured min date is after the max date.
    pub fn new(config: PickerConfig, host: H) -> Result<Self, ConfigError> {
        Self::with_animator(config, host, NoAnimation)
    }
}

impl<H: PickerHost, A: AnimationDriver> PickerSession<H, A> {
    /// # Errors
    /// Returns `ConfigError::Range` if the configured min date is after the max date.
    pub fn with_animator(config: PickerConfig, host: H, animator: A) -> Result<Self, ConfigError> {
        let range = config.range()?;
        let colors = ThemeColors::default().merged(&config.theme);
        Ok(Self {
            header_pattern: DatePattern::new(&config.header_format),
            month_year_pattern: DatePattern::new(&config.month_year_format),
            navigator: Navigator::new(range, colors.primary.clone()),
            colors,
            locale: ResolvedLocale::default(),
            resolver: LocaleResolver::default(),
            config,
            host,
            animator,
            visible: false,
            animation_generation: 0,
        })
    }

    /// Replaces the locale resolver (custom loaders).
    #[must_use]
    pub fn with_resolver(mut self, resolver: LocaleResolver) -> Self {
        self.resolver = resolver;
        self
    }

    // --- lifecycle ---

    /// Mirrors the host's visibility flag. Showing opens a session; hiding
    /// dismisses it, whatever the reason.
    pub fn set_visible(&mut self, visible: bool) {
        match (self.visible, visible) {
            (false, true) => {
                self.visible = true;
                self.start();
            },
            (true, false) => self.cancel(),
            _ => {},
        }
    }

    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn state(&self) -> PickerState {
        self.navigator.state()
    }

    /// Applies new host configuration. Unchanged configuration is a no-op.
    /// If the picker is open and the initial date, locale or range changed,
    /// the session restarts as if freshly opened.
    ///
    /// # Errors
    /// Returns `ConfigError::Range` for an inverted range; the previous
    /// configuration stays in effect.
    pub fn reconfigure(&mut self, config: PickerConfig) -> Result<(), ConfigError> {
        if config == self.config {
            return Ok(());
        }
        let range = config.range()?;

        let restart = config.initial_date != self.config.initial_date
            || config.locale != self.config.locale
            || range != *self.navigator.range();

        if config.header_format != self.config.header_format {
            self.header_pattern = DatePattern::new(&config.header_format);
        }
        if config.month_year_format != self.config.month_year_format {
            self.month_year_pattern = DatePattern::new(&config.month_year_format);
        }
        if config.theme != self.config.theme {
            self.colors = ThemeColors::default().merged(&config.theme);
            self.navigator.set_selection_color(self.colors.primary.clone());
        }
        self.navigator.set_range(range);
        self.config = config;
        debug!(restart, "configuration updated");

        if restart && self.navigator.state() != PickerState::Idle {
            self.start();
        }
        Ok(())
    }

    fn start(&mut self) {
        self.locale = self.resolver.resolve_supplied(self.config.locale.as_ref());
        self.navigator.open(self.config.initial_date_or_today());
    }

    /// Confirms the selection: reports it, then closes. The navigator keeps
    /// the selection inside the range from `open` onwards.
    pub fn commit(&mut self) -> Option<CalendarDate> {
        let date = self.navigator.close()?;
        self.visible = false;
        info!(%date, "date committed");
        self.host.on_date_change(&date.to_string());
        self.host.on_close();
        Some(date)
    }

    /// Dismisses the picker. The selection is dropped and not reported.
    pub fn cancel(&mut self) {
        self.visible = false;
        if self.navigator.close().is_some() {
            debug!("picker dismissed");
            self.host.on_close();
        }
    }

    // --- gestures ---

    pub fn press_arrow(&mut self, direction: Direction) -> Option<YearMonth> {
        let month = self.navigator.press_arrow(direction)?;
        self.animate(Transition::month_slide(direction));
        Some(month)
    }

    /// Finger moved right-to-left: show the next month.
    pub fn swipe_left(&mut self) -> Option<YearMonth> {
        self.press_arrow(Direction::Right)
    }

    /// Finger moved left-to-right: show the previous month.
    pub fn swipe_right(&mut self) -> Option<YearMonth> {
        self.press_arrow(Direction::Left)
    }

    pub fn select_day(&mut self, date: CalendarDate) -> bool {
        self.navigator.select_day(date)
    }

    pub fn month_changed(&mut self, date: CalendarDate) -> bool {
        self.navigator.month_changed_externally(date)
    }

    pub fn press_header_date(&mut self) -> bool {
        let jumped = self.navigator.press_header_date();
        if jumped {
            self.animate(Transition::jump());
        }
        jumped
    }

    pub fn open_year_picker(&mut self) -> bool {
        self.navigator.open_year_picker()
    }

    pub fn close_year_picker(&mut self) -> bool {
        self.navigator.close_year_picker()
    }

    pub fn pick_year(&mut self, year: i32) -> Option<YearJump> {
        self.navigator.pick_year(year)
    }

    fn animate(&mut self, transition: Transition) {
        if !self.config.animation_enabled {
            return;
        }
        self.animation_generation += 1;
        self.animator.start(AnimationRequest {
            transition,
            generation: self.animation_generation,
        });
    }

    // --- view ---

    pub fn selected(&self) -> Option<CalendarDate> {
        self.navigator.selected()
    }

    pub fn displayed_month(&self) -> Option<YearMonth> {
        self.navigator.displayed()
    }

    pub fn marked_dates(&self) -> Option<&MarkedDateSet> {
        self.navigator.marked()
    }

    pub fn range(&self) -> &DateRange {
        self.navigator.range()
    }

    pub fn years(&self) -> &YearSequence {
        self.navigator.years()
    }

    pub fn year_scroll_anchor(&self) -> Option<usize> {
        self.navigator.year_scroll_anchor()
    }

    /// Year shown above the header date: the displayed month's year.
    pub fn header_year(&self) -> Option<u16> {
        self.displayed_month().map(YearMonth::year)
    }

    pub fn header_label(&self) -> Option<String> {
        self.selected()
            .map(|date| self.header_pattern.format(date, &self.locale.formatting))
    }

    pub fn month_year_label(&self) -> Option<String> {
        self.displayed_month()
            .map(|month| self.month_year_pattern.format(month.first_day(), &self.locale.formatting))
    }

    pub fn calendar_props(&self) -> Option<CalendarProps> {
        let displayed = self.displayed_month()?;
        let range = self.range();
        Some(CalendarProps {
            current:       displayed.first_day().to_string(),
            marked_dates:  self.marked_dates()?.clone(),
            min_date:      range.min().to_string(),
            max_date:      range.max().to_string(),
            locale:        self.locale.grid.code.clone(),
            first_weekday: self.config.first_weekday,
            epoch:         self.navigator.epoch(),
        })
    }

    pub fn month_grid(&self) -> Option<MonthGrid> {
        Some(MonthGrid::build(
            self.displayed_month()?,
            self.range(),
            self.marked_dates()?,
            self.config.first_weekday,
        ))
    }

    pub fn weekday_labels(&self) -> [&str; 7] {
        grid::weekday_labels(&self.locale.grid, self.config.first_weekday)
    }

    pub fn cancel_label(&self) -> &str {
        &self.config.cancel_label
    }

    pub fn ok_label(&self) -> &str {
        &self.config.ok_label
    }

    /// Overlays the configured style entries onto the renderer's `base` styles.
    pub fn styles(&self, base: StyleOverrides) -> StyleOverrides {
        base.merged(&self.config.styles)
    }

    /// Names used for the header and month-year labels.
    pub const fn locale(&self) -> &LocaleProfile {
        &self.locale.formatting
    }

    /// Names handed to the calendar grid.
    pub const fn grid_locale(&self) -> &LocaleProfile {
        &self.locale.grid
    }

    pub const fn colors(&self) -> &ThemeColors {
        &self.colors
    }

    pub const fn config(&self) -> &PickerConfig {
        &self.config
    }

    pub const fn host(&self) -> &H {
        &self.host
    }

    pub const fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub const fn animator(&self) -> &A {
        &self.animator
    }
}

impl<H: std::fmt::Debug, A: std::fmt::Debug> std::fmt::Debug for PickerSession<H, A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PickerSession")
            .field("visible", &self.visible)
            .field("state", &self.navigator.state())
            .field("locale", &self.locale.grid.code)
            .field("host", &self.host)
            .field("animator", &self.animator)
            .finish_non_exhaustive()
    }
}
