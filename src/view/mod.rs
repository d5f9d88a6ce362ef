//! Render-ready view models.
//!
//! Everything here is a pure function of the loaded records and the
//! [`ViewState`]; sinks in [`crate::sink`] only draw what they are given.

pub mod grid;
pub mod legend;
pub mod list;
pub mod popup;
pub mod state;

use chrono::NaiveDate;

pub use grid::{Cell, DayCell, MonthGrid};
pub use legend::Legend;
pub use list::{EventList, ListEntry};
pub use popup::{EventDetail, Popup};
pub use state::{CategoryFilter, ViewState};

use crate::calendar::EventSet;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Focus {
    #[default]
    Grid,
    List,
}

/// Keyboard cursor: the highlighted day in the grid and row in the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub focus: Focus,
    pub day: u32,
    pub row: usize,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            focus: Focus::Grid,
            day: 1,
            row: 0,
        }
    }
}

/// State that decorates the planner but does not come from the records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Chrome {
    pub today: Option<NaiveDate>,
    pub selection: Selection,
    pub show_help: bool,
    pub status: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlannerView {
    pub grid: MonthGrid,
    pub list: EventList,
    pub legend: Legend,
    pub filter: CategoryFilter,
    /// "All" followed by every category, in first-occurrence order.
    pub filter_options: Vec<CategoryFilter>,
    pub popup: Option<Vec<EventDetail>>,
    pub chrome: Chrome,
}

impl PlannerView {
    pub fn build(events: &EventSet, state: &ViewState, popup: &Popup, fallback: &str) -> Self {
        let records = events.records();
        let filter_options = std::iter::once(CategoryFilter::All)
            .chain(
                events
                    .categories()
                    .names()
                    .map(|name| CategoryFilter::Only(name.to_string())),
            )
            .collect();

        Self {
            grid: MonthGrid::build(records, state, fallback),
            list: EventList::build(records, state, fallback),
            legend: Legend::build(events.categories(), fallback),
            filter: state.filter.clone(),
            filter_options,
            popup: popup.details(records),
            chrome: Chrome::default(),
        }
    }
}

/// Whole-screen content handed to a sink.
#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    Planner(Box<PlannerView>),
    LoadFailed { reason: String, show_help: bool },
}
