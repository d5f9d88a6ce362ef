use chrono::{Datelike, NaiveDate};

use super::state::{CategoryFilter, ViewState};
use crate::calendar::{first_match_color, EventRecord};

pub const WEEK_DAYS: usize = 7;
pub const GRID_CELLS: usize = 6 * WEEK_DAYS;

/// One coloured marker per distinct category present on a day.
#[derive(Debug, Clone, PartialEq)]
pub struct Indicator {
    pub category: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DayCell {
    pub day: u32,
    pub date: NaiveDate,
    pub weekend: bool,
    /// Indices into the record slice, in load order, already filtered.
    pub events: Vec<usize>,
    pub indicators: Vec<Indicator>,
}

impl DayCell {
    pub fn has_events(&self) -> bool {
        !self.events.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Blank { weekend: bool },
    Day(DayCell),
}

impl Cell {
    pub fn is_weekend(&self) -> bool {
        match self {
            Self::Blank { weekend } => *weekend,
            Self::Day(day) => day.weekend,
        }
    }

    pub fn as_day(&self) -> Option<&DayCell> {
        match self {
            Self::Day(day) => Some(day),
            Self::Blank { .. } => None,
        }
    }
}

/// Six Sunday-first weeks covering one month.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthGrid {
    pub label: String,
    pub cells: Vec<Cell>,
}

impl MonthGrid {
    pub fn build(records: &[EventRecord], state: &ViewState, fallback: &str) -> Self {
        let offset = state.first_day().weekday().num_days_from_sunday() as usize;
        let days = state.days_in_month() as usize;

        let cells = (0..GRID_CELLS)
            .map(|i| {
                let column = i % WEEK_DAYS;
                let weekend = column == 0 || column == WEEK_DAYS - 1;
                if i < offset || i - offset >= days {
                    return Cell::Blank { weekend };
                }
                let day = (i - offset + 1) as u32;
                match state.date_of(day) {
                    Some(date) => Cell::Day(day_cell(records, &state.filter, date, weekend, fallback)),
                    None => Cell::Blank { weekend },
                }
            })
            .collect();

        Self {
            label: state.month_label(),
            cells,
        }
    }

    pub fn weeks(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(WEEK_DAYS)
    }

    pub fn day(&self, day: u32) -> Option<&DayCell> {
        self.cells
            .iter()
            .filter_map(Cell::as_day)
            .find(|c| c.day == day)
    }

    /// Records a click on `day` would show, or `None` when the day has
    /// nothing to open.
    pub fn activate(&self, day: u32) -> Option<Vec<usize>> {
        self.day(day)
            .filter(|c| c.has_events())
            .map(|c| c.events.clone())
    }
}

/// Indices of records on `date` that pass `filter`.
pub fn events_on(records: &[EventRecord], filter: &CategoryFilter, date: NaiveDate) -> Vec<usize> {
    records
        .iter()
        .enumerate()
        .filter(|(_, ev)| ev.occurs_on(date) && filter.matches(ev))
        .map(|(i, _)| i)
        .collect()
}

fn day_cell(
    records: &[EventRecord],
    filter: &CategoryFilter,
    date: NaiveDate,
    weekend: bool,
    fallback: &str,
) -> DayCell {
    let events = events_on(records, filter, date);

    let mut indicators: Vec<Indicator> = Vec::new();
    for &i in &events {
        let category = records[i].category();
        if indicators.iter().any(|ind| ind.category == category) {
            continue;
        }
        let day_events = events.iter().map(|&j| &records[j]);
        indicators.push(Indicator {
            category: category.to_string(),
            color: first_match_color(day_events, category)
                .unwrap_or(fallback)
                .to_string(),
        });
    }

    DayCell {
        day: date.day(),
        date,
        weekend,
        events,
        indicators,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn record(date: &str, name: &str, service: &str, color: Option<&str>) -> EventRecord {
        serde_json::from_value(serde_json::json!({
            "ActivityDate": date,
            "ActivityName": name,
            "ActivityService": service,
            "ActSerColor": color,
        }))
        .unwrap()
    }

    #[test]
    fn every_month_has_42_cells_and_exact_day_count() {
        for year in [2023, 2024, 2025] {
            for month in 1..=12 {
                let state = ViewState::for_date(ymd(year, month, 1));
                let grid = MonthGrid::build(&[], &state, "#000");

                assert_eq!(grid.cells.len(), GRID_CELLS);
                let days = grid.cells.iter().filter(|c| c.as_day().is_some()).count();
                assert_eq!(days as u32, state.days_in_month(), "{year}-{month}");
            }
        }
    }

    #[test]
    fn first_day_lands_on_its_weekday_column() {
        // 1 March 2024 is a Friday.
        let grid = MonthGrid::build(&[], &ViewState::for_date(ymd(2024, 3, 1)), "#000");

        assert!(matches!(grid.cells[4], Cell::Blank { .. }));
        assert_eq!(grid.cells[5].as_day().unwrap().day, 1);
        assert_eq!(grid.weeks().count(), 6);
    }

    #[test]
    fn weekend_follows_column() {
        let grid = MonthGrid::build(&[], &ViewState::for_date(ymd(2024, 3, 1)), "#000");

        for (i, cell) in grid.cells.iter().enumerate() {
            let col = i % WEEK_DAYS;
            assert_eq!(cell.is_weekend(), col == 0 || col == 6, "cell {i}");
        }
    }

    #[test]
    fn one_indicator_per_distinct_category() {
        let records = vec![
            record("2024-03-15", "Art Class", "Art", Some("#ff0000")),
            record("2024-03-15", "Pottery", "Art", Some("#ff0000")),
            record("2024-03-15", "Choir", "Music", Some("#0000ff")),
            record("2024-03-16", "Band", "Music", Some("#0000ff")),
        ];
        let grid = MonthGrid::build(&records, &ViewState::for_date(ymd(2024, 3, 1)), "#000");
        let day = grid.day(15).unwrap();

        assert_eq!(day.events, vec![0, 1, 2]);
        let cats: Vec<_> = day.indicators.iter().map(|i| i.category.as_str()).collect();
        assert_eq!(cats, ["Art", "Music"]);
    }

    #[test]
    fn filter_hides_other_categories() {
        let records = vec![
            record("2024-03-15", "Art Class", "Art", Some("#ff0000")),
            record("2024-03-15", "Choir", "Music", Some("#0000ff")),
        ];
        let mut state = ViewState::for_date(ymd(2024, 3, 1));
        state.filter = CategoryFilter::Only("Music".into());
        let grid = MonthGrid::build(&records, &state, "#000");
        let day = grid.day(15).unwrap();

        assert_eq!(day.events, vec![1]);
        assert_eq!(day.indicators.len(), 1);
        assert_eq!(day.indicators[0].color, "#0000ff");
    }

    #[test]
    fn missing_color_uses_fallback() {
        let records = vec![record("2024-03-15", "Art Class", "Art", None)];
        let grid = MonthGrid::build(&records, &ViewState::for_date(ymd(2024, 3, 1)), "#000");

        assert_eq!(grid.day(15).unwrap().indicators[0].color, "#000");
    }

    #[test]
    fn first_record_of_the_day_decides_indicator_color() {
        let records = vec![
            record("2024-03-14", "Sketching", "Art", Some("#00ff00")),
            record("2024-03-15", "Art Class", "Art", None),
            record("2024-03-15", "Pottery", "Art", Some("#ff0000")),
        ];
        let grid = MonthGrid::build(&records, &ViewState::for_date(ymd(2024, 3, 1)), "#000");

        assert_eq!(grid.day(14).unwrap().indicators[0].color, "#00ff00");
        assert_eq!(grid.day(15).unwrap().indicators[0].color, "#000");
    }

    #[test]
    fn empty_day_does_not_activate() {
        let records = vec![record("2024-03-15", "Art Class", "Art", Some("#ff0000"))];
        let grid = MonthGrid::build(&records, &ViewState::for_date(ymd(2024, 3, 1)), "#000");

        let empty = grid.day(14).unwrap();
        assert!(!empty.has_events());
        assert!(empty.indicators.is_empty());
        assert_eq!(grid.activate(14), None);
        assert_eq!(grid.activate(40), None);
    }

    #[test]
    fn art_class_example() {
        let records = vec![record("2024-03-15", "Art Class", "Art", Some("#ff0000"))];
        let grid = MonthGrid::build(&records, &ViewState::for_date(ymd(2024, 3, 1)), "#000");
        let day = grid.day(15).unwrap();

        assert_eq!(grid.label, "March 2024");
        assert!(day.has_events());
        assert_eq!(
            day.indicators,
            vec![Indicator {
                category: "Art".into(),
                color: "#ff0000".into()
            }]
        );
        assert_eq!(grid.activate(15), Some(vec![0]));
    }
}
