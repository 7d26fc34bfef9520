//! Day grid for the displayed month, in the shape a calendar renderer draws.

use chrono::{Days, Weekday};
use serde::Serialize;

use crate::{CalendarDate, DateRange, LocaleProfile, MarkedDateSet, YearMonth, types::days_in_month};

const DAYS_PER_WEEK: usize = 7;

/// One drawn day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridDay {
    pub date:       CalendarDate,
    /// `false` for the leading/trailing days of adjacent months.
    pub in_month:   bool,
    /// `false` when the day is outside the selectable range; the renderer
    /// must draw it disabled and ignore presses on it.
    pub selectable: bool,
    pub selected:   bool,
}

/// A row of seven cells. A cell is `None` only when it would fall before
/// year 1.
pub type Week = [Option<GridDay>; DAYS_PER_WEEK];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthGrid {
    pub month: YearMonth,
    pub weeks: Vec<Week>,
}

impl MonthGrid {
    pub fn build(
        month: YearMonth,
        range: &DateRange,
        marked: &MarkedDateSet,
        first_weekday: Weekday,
    ) -> Self {
        let first = month.first_day();
        let lead = days_between(first_weekday, first.weekday());
        let cells = lead + usize::from(days_in_month(month.year(), month.month()));
        let week_count = cells.div_ceil(DAYS_PER_WEEK);

        let origin = first.as_naive();
        let day_at = |offset: usize| -> Option<GridDay> {
            let naive = if offset < lead {
                origin.checked_sub_days(Days::new((lead - offset) as u64))
            } else {
                origin.checked_add_days(Days::new((offset - lead) as u64))
            }?;
            let date = CalendarDate::try_from(naive).ok()?;
            Some(GridDay {
                date,
                in_month: date.start_of_month() == month,
                selectable: range.contains(date),
                selected: marked.is_selected(date),
            })
        };

        let weeks = (0..week_count)
            .map(|week| std::array::from_fn(|weekday| day_at(week * DAYS_PER_WEEK + weekday)))
            .collect();

        Self { month, weeks }
    }

    pub fn days(&self) -> impl Iterator<Item = &GridDay> {
        self.weeks.iter().flatten().flatten()
    }
}

/// Short weekday names in display order, starting at `first_weekday`.
pub fn weekday_labels(locale: &LocaleProfile, first_weekday: Weekday) -> [&str; DAYS_PER_WEEK] {
    let start = first_weekday.num_days_from_sunday() as usize;
    std::array::from_fn(|column| locale.day_names_short[(start + column) % DAYS_PER_WEEK].as_str())
}

fn days_between(from: Weekday, to: Weekday) -> usize {
    let from = from.num_days_from_monday() as usize;
    let to = to.num_days_from_monday() as usize;
    (to + DAYS_PER_WEEK - from) % DAYS_PER_WEEK
}
