use std::collections::BTreeMap;

use serde::Serialize;

use crate::CalendarDate;

/// How the grid should decorate one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Marking {
    pub selected:       bool,
    pub selected_color: String,
}

/// Days the grid decorates, keyed by `YYYY-MM-DD`.
///
/// Holds exactly one entry, the current selection. Every rebuild replaces
/// the whole map, so a stale selection can never linger.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct MarkedDateSet(BTreeMap<String, Marking>);

impl MarkedDateSet {
    pub fn selection(date: CalendarDate, color: &str) -> Self {
        let mut marks = BTreeMap::new();
        marks.insert(
            date.to_string(),
            Marking {
                selected:       true,
                selected_color: color.to_owned(),
            },
        );
        Self(marks)
    }

    pub fn get(&self, key: &str) -> Option<&Marking> {
        self.0.get(key)
    }

    pub fn is_selected(&self, date: CalendarDate) -> bool {
        self.0.get(&date.to_string()).is_some_and(|mark| mark.selected)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Marking)> {
        self.0.iter().map(|(key, mark)| (key.as_str(), mark))
    }
}
