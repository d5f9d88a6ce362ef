use chrono::{Datelike, NaiveDate};
use tracing::{debug, error};

use crate::calendar::{EventSet, LoadResult};
use crate::view::{
    CategoryFilter, Chrome, EventList, Focus, MonthGrid, PlannerView, Popup, Screen, Selection,
    ViewState,
};

pub struct App {
    pub running: bool,
    pub today: NaiveDate,
    pub state: ViewState,
    pub selection: Selection,
    pub popup: Popup,
    pub show_help: bool,
    pub status_message: Option<String>,
    fallback_color: String,
    events: Result<EventSet, String>,
}

impl App {
    pub fn new(
        loaded: LoadResult,
        today: NaiveDate,
        start: NaiveDate,
        fallback_color: String,
    ) -> Self {
        let events = loaded.map_err(|e| {
            error!("event load failed: {e}");
            e.to_string()
        });
        let state = ViewState::for_date(start);
        let day = if state.contains(today) { today.day() } else { 1 };

        Self {
            running: true,
            today,
            state,
            selection: Selection {
                day,
                ..Selection::default()
            },
            popup: Popup::default(),
            show_help: false,
            status_message: None,
            fallback_color,
            events,
        }
    }

    pub fn events(&self) -> Option<&EventSet> {
        self.events.as_ref().ok()
    }

    pub fn screen(&self) -> Screen {
        match &self.events {
            Ok(events) => {
                let mut view =
                    PlannerView::build(events, &self.state, &self.popup, &self.fallback_color);
                view.chrome = Chrome {
                    today: Some(self.today),
                    selection: self.selection,
                    show_help: self.show_help,
                    status: self.status_message.clone(),
                };
                Screen::Planner(Box::new(view))
            }
            Err(reason) => Screen::LoadFailed {
                reason: reason.clone(),
                show_help: self.show_help,
            },
        }
    }

    fn grid(&self) -> Option<MonthGrid> {
        self.events()
            .map(|ev| MonthGrid::build(ev.records(), &self.state, &self.fallback_color))
    }

    fn list(&self) -> Option<EventList> {
        self.events()
            .map(|ev| EventList::build(ev.records(), &self.state, &self.fallback_color))
    }

    // ── Month navigation ──

    pub fn next_month(&mut self) {
        self.state.next_month();
        self.on_month_changed();
    }

    pub fn prev_month(&mut self) {
        self.state.prev_month();
        self.on_month_changed();
    }

    pub fn go_to_today(&mut self) {
        self.state.go_to(self.today);
        self.on_month_changed();
        self.selection.day = self.today.day();
    }

    fn on_month_changed(&mut self) {
        self.selection.day = self.selection.day.min(self.state.days_in_month());
        self.selection.row = 0;
        debug!("showing {}", self.state.month_label());
    }

    // ── Category filter ──

    pub fn next_filter(&mut self) {
        if let Some(events) = self.events() {
            let filter = self.state.filter.next(events.categories());
            self.set_filter_to(filter);
        }
    }

    pub fn prev_filter(&mut self) {
        if let Some(events) = self.events() {
            let filter = self.state.filter.prev(events.categories());
            self.set_filter_to(filter);
        }
    }

    pub fn reset_filter(&mut self) {
        self.set_filter_to(CategoryFilter::All);
    }

    fn set_filter_to(&mut self, filter: CategoryFilter) {
        debug!("filter: {}", filter.label());
        self.state.filter = filter;
        self.selection.row = 0;
    }

    // ── Cursor ──

    pub fn toggle_focus(&mut self) {
        self.selection.focus = match self.selection.focus {
            Focus::Grid => Focus::List,
            Focus::List => Focus::Grid,
        };
    }

    /// Move the grid cursor by `delta` days, staying inside the month.
    pub fn move_day(&mut self, delta: i64) {
        let last = i64::from(self.state.days_in_month());
        let day = (i64::from(self.selection.day) + delta).clamp(1, last);
        self.selection.day = day as u32;
    }

    pub fn move_row(&mut self, delta: isize) {
        let len = self.list().map_or(0, |l| l.len());
        if len == 0 {
            self.selection.row = 0;
            return;
        }
        let row = self.selection.row.saturating_add_signed(delta);
        self.selection.row = row.min(len - 1);
    }

    // ── Popup ──

    /// Act on whatever the cursor points at: a day with events or a list row.
    pub fn activate(&mut self) {
        let target = match self.selection.focus {
            Focus::Grid => self.grid().and_then(|g| g.activate(self.selection.day)),
            Focus::List => self.list().and_then(|l| l.activate(self.selection.row)),
        };
        if let Some(records) = target {
            debug!("opening details for {} event(s)", records.len());
            self.popup.open(records);
        }
    }

    pub fn close_popup(&mut self) {
        self.popup.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::store::LoadError;
    use crate::calendar::Store;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn app() -> App {
        let loaded = Store::new("events.json").parse(
            br##"[
                {"ActivityDate": "2024-03-15", "ActivityName": "Art Class", "ActivityService": "Art", "ActSerColor": "#ff0000"},
                {"ActivityDate": "2024-03-15", "ActivityName": "Choir", "ActivityService": "Music", "ActSerColor": "#0000ff"},
                {"ActivityDate": "2024-04-02", "ActivityName": "Band", "ActivityService": "Music"}
            ]"##,
        );
        App::new(loaded, ymd(2024, 3, 10), ymd(2024, 3, 10), "#000".into())
    }

    fn popup_names(app: &App) -> Vec<String> {
        match app.screen() {
            Screen::Planner(view) => view
                .popup
                .unwrap_or_default()
                .into_iter()
                .map(|d| d.name)
                .collect(),
            Screen::LoadFailed { .. } => panic!("expected planner"),
        }
    }

    #[test]
    fn clicking_a_day_opens_all_its_events() {
        let mut app = app();
        app.move_day(5);
        app.activate();

        assert_eq!(popup_names(&app), ["Art Class", "Choir"]);
    }

    #[test]
    fn clicking_an_empty_day_does_nothing() {
        let mut app = app();
        app.activate();

        assert!(!app.popup.is_visible());
    }

    #[test]
    fn clicking_a_list_row_opens_one_event() {
        let mut app = app();
        app.toggle_focus();
        app.move_row(1);
        app.activate();

        assert_eq!(popup_names(&app), ["Choir"]);
    }

    #[test]
    fn filter_applies_to_day_popup_and_survives_navigation() {
        let mut app = app();
        app.next_filter();
        app.next_filter();
        assert_eq!(app.state.filter, CategoryFilter::Only("Music".into()));

        app.move_day(5);
        app.activate();
        assert_eq!(popup_names(&app), ["Choir"]);

        app.close_popup();
        app.next_month();
        app.prev_month();
        assert_eq!(app.state.filter, CategoryFilter::Only("Music".into()));
    }

    #[test]
    fn navigation_clamps_cursor() {
        let mut app = App::new(
            Store::new("x.json").parse(b"[]"),
            ymd(2024, 1, 31),
            ymd(2024, 1, 31),
            "#000".into(),
        );
        assert_eq!(app.selection.day, 31);

        app.next_month();
        assert_eq!((app.state.month(), app.selection.day), (2, 29));

        app.move_day(100);
        assert_eq!(app.selection.day, 29);
        app.move_day(-100);
        assert_eq!(app.selection.day, 1);

        app.go_to_today();
        assert_eq!((app.state.month(), app.selection.day), (1, 31));
    }

    #[test]
    fn list_cursor_stays_in_range() {
        let mut app = app();
        app.toggle_focus();
        app.move_row(10);
        assert_eq!(app.selection.row, 1);
        app.move_row(-10);
        assert_eq!(app.selection.row, 0);
    }

    #[test]
    fn failed_load_renders_error_screen() {
        let err = Store::new("broken.json").parse(b"not json");
        assert!(matches!(err, Err(LoadError::Parse { .. })));

        let mut app = App::new(err, ymd(2024, 3, 1), ymd(2024, 3, 1), "#000".into());
        app.activate();
        app.next_filter();

        match app.screen() {
            Screen::LoadFailed { reason, .. } => assert!(reason.contains("broken.json")),
            Screen::Planner(_) => panic!("expected load failure"),
        }
    }
}
