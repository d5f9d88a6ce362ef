pub mod detail_popup;
pub mod event_list;
pub mod filter_bar;
pub mod help;
pub mod legend;
pub mod month_view;
pub mod status_bar;

pub use event_list::EventListView;
pub use filter_bar::FilterBar;
pub use legend::LegendView;
pub use month_view::MonthView;
pub use status_bar::StatusBar;

use ratatui::{
    layout::{Constraint, Layout, Rect},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::theme;
use crate::view::{Focus, PlannerView, Screen};

/// Month grid: 7 columns plus borders, header plus 6 weeks plus borders.
const GRID_WIDTH: u16 = (month_view::CELL_WIDTH as u16) * 7 + 2;
const GRID_HEIGHT: u16 = 9;

pub fn draw(frame: &mut Frame, screen: &Screen) {
    let area = frame.area();
    match screen {
        Screen::LoadFailed { reason, show_help } => {
            let msg = Paragraph::new(format!(
                "Could not load events.\n\n{}\n\nPress 'q' to quit.",
                reason
            ))
            .style(theme::ERROR_STYLE)
            .wrap(Wrap { trim: false });
            frame.render_widget(msg, area);
            if *show_help {
                help::render_help(frame, area);
            }
        }
        Screen::Planner(view) => draw_planner(frame, area, view),
    }
}

fn draw_planner(frame: &mut Frame, area: Rect, view: &PlannerView) {
    let chrome = &view.chrome;
    let selection = chrome.selection;

    // Main layout: filter bar + content + status bar
    let layout = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(1),
        Constraint::Length(1),
    ])
    .split(area);

    FilterBar::render(frame, layout[0], &view.filter_options, &view.filter);

    let grid_focused = selection.focus == Focus::Grid;
    let (grid_area, side_area) = if area.width < GRID_WIDTH + 20 {
        let stacked = Layout::vertical([Constraint::Length(GRID_HEIGHT), Constraint::Min(3)])
            .split(layout[1]);
        (stacked[0], stacked[1])
    } else {
        let content = Layout::horizontal([Constraint::Length(GRID_WIDTH), Constraint::Min(20)])
            .split(layout[1]);
        (content[0], content[1])
    };

    MonthView::render(
        frame,
        grid_area,
        &view.grid,
        grid_focused.then_some(selection.day),
        chrome.today,
        grid_focused,
    );

    let legend_h = (view.legend.entries.len() as u16 + 2).clamp(3, 10);
    let side = Layout::vertical([Constraint::Min(3), Constraint::Length(legend_h)]).split(side_area);
    EventListView::render(frame, side[0], &view.list, selection.row, !grid_focused);
    LegendView::render(frame, side[1], &view.legend);

    // Render detail popup overlay
    if let Some(details) = &view.popup {
        detail_popup::render_detail_popup(frame, area, details);
    }

    // Render help overlay
    if chrome.show_help {
        help::render_help(frame, area);
    }

    StatusBar::render(
        frame,
        layout[2],
        selection.focus,
        view.popup.is_some(),
        chrome.status.as_deref(),
    );
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;
    use crate::calendar::EventSet;
    use crate::view::{Popup, ViewState};

    fn screen_text(screen: &Screen, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| draw(frame, screen)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn planner_shows_grid_list_legend_and_popup() {
        let records = serde_json::from_str(
            r##"[{"ActivityDate": "2024-03-15", "ActivityName": "Art Class", "ActivityService": "Art", "ActSerColor": "#ff0000", "ActivityCost": "$5"}]"##,
        )
        .unwrap();
        let events = EventSet::new(records);
        let state = ViewState::for_date(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        let mut popup = Popup::default();
        popup.open(vec![0]);
        let view = PlannerView::build(&events, &state, &popup, "#000");

        let text = screen_text(&Screen::Planner(Box::new(view)), 100, 30);

        assert!(text.contains("Filter:"));
        assert!(text.contains("March 2024"));
        assert!(text.contains("Legend (1)"));
        assert!(text.contains("Name: Art Class"));
        assert!(text.contains("Cost: $5"));
        assert!(text.contains("x:Close"));
    }

    #[test]
    fn load_failure_shows_reason() {
        let screen = Screen::LoadFailed {
            reason: "could not read events.json: not found".into(),
            show_help: false,
        };
        let text = screen_text(&screen, 80, 10);

        assert!(text.contains("Could not load events."));
        assert!(text.contains("events.json"));
    }
}
