use super::state::ViewState;
use crate::calendar::EventRecord;

#[derive(Debug, Clone, PartialEq)]
pub struct ListEntry {
    pub index: usize,
    pub color: String,
    pub date: String,
    pub name: String,
}

/// Month's events in load order, filtered by category.
#[derive(Debug, Clone, PartialEq)]
pub struct EventList {
    pub heading: String,
    pub entries: Vec<ListEntry>,
}

impl EventList {
    pub fn build(records: &[EventRecord], state: &ViewState, fallback: &str) -> Self {
        let entries = records
            .iter()
            .enumerate()
            .filter(|(_, ev)| ev.occurs_in(state.year(), state.month()) && state.filter.matches(ev))
            .map(|(index, ev)| ListEntry {
                index,
                color: ev.color_or(fallback).to_string(),
                date: ev.date_label().to_string(),
                name: ev.name().to_string(),
            })
            .collect();

        Self {
            heading: format!("Planner for {}", state.month_label()),
            entries,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Record a click on entry `row` would show.
    pub fn activate(&self, row: usize) -> Option<Vec<usize>> {
        self.entries.get(row).map(|e| vec![e.index])
    }
}
