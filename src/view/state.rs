use chrono::{Datelike, Months, NaiveDate};

use crate::calendar::{Categories, EventRecord};

/// Which categories the grid and list show.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    pub fn matches(&self, ev: &EventRecord) -> bool {
        match self {
            Self::All => true,
            Self::Only(name) => ev.category() == name,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::All => "All",
            Self::Only(name) => name,
        }
    }

    /// Next option in `[All, first category, .., last category]`, wrapping.
    pub fn next(&self, categories: &Categories) -> Self {
        let next = match self.position(categories) {
            None => 0,
            Some(i) => i + 1,
        };
        Self::at(categories, next)
    }

    pub fn prev(&self, categories: &Categories) -> Self {
        match self.position(categories) {
            None if categories.is_empty() => Self::All,
            None => Self::at(categories, categories.len() - 1),
            Some(0) => Self::All,
            Some(i) => Self::at(categories, i - 1),
        }
    }

    fn position(&self, categories: &Categories) -> Option<usize> {
        match self {
            Self::All => None,
            Self::Only(name) => categories.position(name),
        }
    }

    fn at(categories: &Categories, index: usize) -> Self {
        categories
            .get(index)
            .map_or(Self::All, |c| Self::Only(c.name.clone()))
    }
}

/// The month on screen and the active filter.
///
/// Always anchored on the first day of a representable month, so every
/// derived date is valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    first: NaiveDate,
    pub filter: CategoryFilter,
}

impl ViewState {
    pub fn for_date(date: NaiveDate) -> Self {
        Self {
            first: date.with_day(1).unwrap_or(date),
            filter: CategoryFilter::All,
        }
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    /// Month number, 1 to 12.
    pub fn month(&self) -> u32 {
        self.first.month()
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first
    }

    pub fn days_in_month(&self) -> u32 {
        days_in_month(self.first)
    }

    pub fn date_of(&self, day: u32) -> Option<NaiveDate> {
        self.first.with_day(day)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year() && date.month() == self.month()
    }

    /// "March 2024"
    pub fn month_label(&self) -> String {
        self.first.format("%B %Y").to_string()
    }

    pub fn next_month(&mut self) {
        if let Some(next) = self.first.checked_add_months(Months::new(1)) {
            self.first = next;
        }
    }

    pub fn prev_month(&mut self) {
        if let Some(prev) = self.first.checked_sub_months(Months::new(1)) {
            self.first = prev;
        }
    }

    pub fn go_to(&mut self, date: NaiveDate) {
        self.first = date.with_day(1).unwrap_or(date);
    }
}

pub fn days_in_month(first: NaiveDate) -> u32 {
    match first.checked_add_months(Months::new(1)) {
        Some(next) => next.signed_duration_since(first).num_days() as u32,
        // Last representable month is December.
        None => 31,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::EventRecord;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn categories(names: &[&str]) -> Categories {
        let records: Vec<EventRecord> = names
            .iter()
            .map(|n| EventRecord {
                date_text: None,
                date: None,
                name: None,
                service: Some(n.to_string()),
                color: None,
                time: None,
                notes: None,
                cost: None,
            })
            .collect();
        Categories::from_records(&records)
    }

    #[test]
    fn prev_from_january_rolls_to_december() {
        let mut state = ViewState::for_date(ymd(2024, 1, 20));
        state.prev_month();
        assert_eq!((state.year(), state.month()), (2023, 12));
    }

    #[test]
    fn next_from_december_rolls_to_january() {
        let mut state = ViewState::for_date(ymd(2023, 12, 31));
        state.next_month();
        assert_eq!((state.year(), state.month()), (2024, 1));
    }

    #[test]
    fn filter_survives_navigation() {
        let mut state = ViewState::for_date(ymd(2024, 3, 1));
        state.filter = CategoryFilter::Only("Art".into());
        state.next_month();
        state.next_month();
        state.prev_month();
        assert_eq!(state.filter, CategoryFilter::Only("Art".into()));
        assert_eq!(state.month_label(), "April 2024");
    }

    #[test]
    fn days_in_month_handles_leap_years() {
        assert_eq!(ViewState::for_date(ymd(2024, 2, 10)).days_in_month(), 29);
        assert_eq!(ViewState::for_date(ymd(2023, 2, 10)).days_in_month(), 28);
        assert_eq!(ViewState::for_date(ymd(2024, 12, 1)).days_in_month(), 31);
        assert_eq!(ViewState::for_date(ymd(2024, 4, 1)).days_in_month(), 30);
    }

    #[test]
    fn filter_cycles_through_all_and_categories() {
        let cats = categories(&["Art", "Music"]);
        let mut f = CategoryFilter::All;

        f = f.next(&cats);
        assert_eq!(f, CategoryFilter::Only("Art".into()));
        f = f.next(&cats);
        assert_eq!(f, CategoryFilter::Only("Music".into()));
        f = f.next(&cats);
        assert_eq!(f, CategoryFilter::All);
        f = f.prev(&cats);
        assert_eq!(f, CategoryFilter::Only("Music".into()));
    }

    #[test]
    fn filter_with_no_categories_stays_all() {
        let cats = Categories::default();
        assert_eq!(CategoryFilter::All.next(&cats), CategoryFilter::All);
        assert_eq!(CategoryFilter::All.prev(&cats), CategoryFilter::All);
    }
}
