//! Selection and month navigation for one picker session.
//!
//! Every transition runs to completion synchronously. Derived state (the
//! marked-date set) is rebuilt inside the transition that changes the
//! selection, so observers never see the two disagree.

use tracing::debug;

use crate::{
    CalendarDate, DateRange, Direction, MarkedDateSet, YearMonth, YearSequence, range::YearJump,
};

/// Coarse lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PickerState {
    /// Picker closed; no selection exists.
    Idle,
    /// Picker open, year list closed.
    Browsing,
    /// Year list open on top of the picker.
    YearSelecting,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct OpenState {
    selected:         CalendarDate,
    displayed:        YearMonth,
    marked:           MarkedDateSet,
    year_picker_open: bool,
    epoch:            u64,
}

/// The navigation state machine.
#[derive(Debug, Clone)]
pub struct Navigator {
    range:           DateRange,
    years:           YearSequence,
    selection_color: String,
    open:            Option<OpenState>,
}

impl Navigator {
    pub fn new(range: DateRange, selection_color: impl Into<String>) -> Self {
        Self {
            years: range.years(),
            range,
            selection_color: selection_color.into(),
            open: None,
        }
    }

    pub fn state(&self) -> PickerState {
        match &self.open {
            None => PickerState::Idle,
            Some(open) if open.year_picker_open => PickerState::YearSelecting,
            Some(_) => PickerState::Browsing,
        }
    }

    pub const fn range(&self) -> &DateRange {
        &self.range
    }

    pub const fn years(&self) -> &YearSequence {
        &self.years
    }

    pub fn selected(&self) -> Option<CalendarDate> {
        self.open.as_ref().map(|open| open.selected)
    }

    pub fn displayed(&self) -> Option<YearMonth> {
        self.open.as_ref().map(|open| open.displayed)
    }

    pub fn marked(&self) -> Option<&MarkedDateSet> {
        self.open.as_ref().map(|open| &open.marked)
    }

    /// Grid reload counter; bumped by programmatic month changes.
    pub fn epoch(&self) -> u64 {
        self.open.as_ref().map_or(0, |open| open.epoch)
    }

    /// Where the year list should open, relative to the displayed year.
    pub fn year_scroll_anchor(&self) -> Option<usize> {
        self.displayed()
            .map(|month| self.years.scroll_anchor(month.year()))
    }

    /// Starts (or restarts) a session at `initial`. An initial date outside
    /// the range is pulled onto the nearest bound.
    pub fn open(&mut self, initial: CalendarDate) {
        let selected = self.range.clamp(initial);
        if selected != initial {
            debug!(%initial, %selected, "initial date clamped into range");
        }
        let epoch = self.open.as_ref().map_or(0, |open| open.epoch + 1);
        self.open = Some(OpenState {
            selected,
            displayed: selected.start_of_month(),
            marked: MarkedDateSet::selection(selected, &self.selection_color),
            year_picker_open: false,
            epoch,
        });
        debug!(%selected, "picker opened");
    }

    /// Moves the displayed month one step. The selection is untouched.
    /// Returns the new month, or `None` if nothing moved.
    pub fn press_arrow(&mut self, direction: Direction) -> Option<YearMonth> {
        let open = self.browsing_mut()?;
        let next = open.displayed.shift(direction)?;
        open.displayed = next;
        open.epoch += 1;
        debug!(%direction, displayed = %next, "month changed by arrow");
        Some(next)
    }

    /// Selects `date` if it is inside the range. Does not change the
    /// displayed month, even for a visible day of an adjacent month.
    pub fn select_day(&mut self, date: CalendarDate) -> bool {
        if !self.range.contains(date) {
            debug!(%date, range = %self.range, "day outside range ignored");
            return false;
        }
        let color = self.selection_color.clone();
        let Some(open) = self.browsing_mut() else {
            return false;
        };
        open.selected = date;
        open.marked = MarkedDateSet::selection(date, &color);
        debug!(%date, "day selected");
        true
    }

    /// The grid moved on its own (swipe or in-grid navigation).
    pub fn month_changed_externally(&mut self, date: CalendarDate) -> bool {
        let Some(open) = self.open.as_mut() else {
            return false;
        };
        open.displayed = date.start_of_month();
        debug!(displayed = %open.displayed, "month changed by grid");
        true
    }

    /// Brings the selected date's month back into view and forces a reload.
    pub fn press_header_date(&mut self) -> bool {
        let color = self.selection_color.clone();
        let Some(open) = self.browsing_mut() else {
            return false;
        };
        open.displayed = open.selected.start_of_month();
        open.marked = MarkedDateSet::selection(open.selected, &color);
        open.epoch += 1;
        debug!(displayed = %open.displayed, "jumped to selected month");
        true
    }

    pub fn open_year_picker(&mut self) -> bool {
        let Some(open) = self.browsing_mut() else {
            return false;
        };
        open.year_picker_open = true;
        debug!("year picker opened");
        true
    }

    /// Dismisses the year list without picking.
    pub fn close_year_picker(&mut self) -> bool {
        match self.open.as_mut() {
            Some(open) if open.year_picker_open => {
                open.year_picker_open = false;
                debug!("year picker dismissed");
                true
            },
            _ => false,
        }
    }

    /// Jumps the selection to `year`. The year list closes whether or not
    /// the jump is accepted. Returns `None` unless the year list was open.
    pub fn pick_year(&mut self, year: i32) -> Option<YearJump> {
        let open = self.open.as_mut().filter(|open| open.year_picker_open)?;
        open.year_picker_open = false;

        let jump = self.range.clamp_year_jump(open.selected, year);
        if let YearJump::Accepted(date) = jump {
            open.selected = date;
            open.displayed = date.start_of_month();
            open.marked = MarkedDateSet::selection(date, &self.selection_color);
            open.epoch += 1;
            debug!(%date, "jumped to year");
        }
        Some(jump)
    }

    /// Ends the session and returns the selection, if one was open.
    pub fn close(&mut self) -> Option<CalendarDate> {
        let closed = self.open.take().map(|open| open.selected);
        if closed.is_some() {
            debug!("picker closed");
        }
        closed
    }

    /// Swaps the range. The year list is rebuilt only if the year span moved.
    /// An open session keeps its state; callers re-open it to re-clamp.
    pub fn set_range(&mut self, range: DateRange) {
        if range == self.range {
            return;
        }
        if range.year_span() != self.range.year_span() {
            self.years = range.years();
        }
        self.range = range;
    }

    /// Changes the marking color and re-marks the current selection.
    pub fn set_selection_color(&mut self, color: impl Into<String>) {
        self.selection_color = color.into();
        if let Some(open) = self.open.as_mut() {
            open.marked = MarkedDateSet::selection(open.selected, &self.selection_color);
        }
    }

    fn browsing_mut(&mut self) -> Option<&mut OpenState> {
        self.open.as_mut().filter(|open| !open.year_picker_open)
    }
}
