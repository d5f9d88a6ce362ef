use chrono::NaiveDate;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::theme;
use crate::view::{Cell, DayCell, MonthGrid};

const DAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Width of one day column: " dd" plus three indicator slots.
pub const CELL_WIDTH: usize = 6;
const INDICATOR_SLOTS: usize = 3;

pub struct MonthView;

impl MonthView {
    pub fn render(
        frame: &mut Frame,
        area: Rect,
        grid: &MonthGrid,
        selected_day: Option<u32>,
        today: Option<NaiveDate>,
        focused: bool,
    ) {
        let theme = theme::current();
        let block = Block::default()
            .title(format!(" {} ", grid.label))
            .title_style(theme.header)
            .borders(Borders::ALL)
            .border_style(if focused { theme.focus_border } else { theme.border });

        let inner = block.inner(area);
        frame.render_widget(block, area);

        // Header row
        let header_cells: Vec<Span> = DAY_NAMES
            .iter()
            .enumerate()
            .map(|(i, d)| {
                let style = if i == 0 || i == 6 {
                    theme.weekend.add_modifier(Modifier::BOLD)
                } else {
                    theme.header
                };
                Span::styled(format!("{:^width$}", d, width = CELL_WIDTH), style)
            })
            .collect();
        let header = Line::from(header_cells);

        let weeks: Vec<Line> = grid
            .weeks()
            .map(|week| {
                let spans: Vec<Span> = week
                    .iter()
                    .flat_map(|cell| cell_spans(cell, selected_day, today))
                    .collect();
                Line::from(spans)
            })
            .collect();

        // Layout: header + weeks
        let mut constraints = vec![Constraint::Length(1)]; // header
        for _ in &weeks {
            constraints.push(Constraint::Length(1));
        }
        constraints.push(Constraint::Min(0)); // fill remaining

        let rows = Layout::vertical(constraints).split(inner);

        frame.render_widget(Paragraph::new(header), rows[0]);
        for (i, week) in weeks.into_iter().enumerate() {
            frame.render_widget(Paragraph::new(week), rows[i + 1]);
        }
    }
}

fn cell_spans(cell: &Cell, selected_day: Option<u32>, today: Option<NaiveDate>) -> Vec<Span<'static>> {
    let theme = theme::current();
    let day = match cell {
        Cell::Blank { .. } => {
            let style = if cell.is_weekend() { theme.weekend } else { Style::default() };
            return vec![Span::styled(" ".repeat(CELL_WIDTH), style)];
        }
        Cell::Day(day) => day,
    };

    let is_selected = selected_day == Some(day.day);
    let is_today = today == Some(day.date);

    let number_style = if is_today && is_selected {
        theme.today.patch(theme.selected).add_modifier(Modifier::BOLD)
    } else if is_selected {
        theme.selected
    } else if is_today {
        theme.today
    } else if day.weekend {
        theme.weekend
    } else {
        Style::default()
    };
    let number_style = if day.has_events() {
        number_style.add_modifier(Modifier::BOLD)
    } else {
        number_style
    };

    let mut spans = vec![Span::styled(format!(" {:>2}", day.day), number_style)];
    spans.extend(indicator_spans(day));
    spans
}

/// One dot per category; past the slot count, the last slot becomes "+".
fn indicator_spans(day: &DayCell) -> Vec<Span<'static>> {
    let n = day.indicators.len();
    let shown = if n > INDICATOR_SLOTS { INDICATOR_SLOTS - 1 } else { n };

    let mut spans: Vec<Span> = day.indicators[..shown]
        .iter()
        .map(|ind| Span::styled("\u{25cf}", Style::default().fg(theme::event_color(&ind.color))))
        .collect();
    if n > INDICATOR_SLOTS {
        spans.push(Span::styled("+", theme::DIM_STYLE));
    }
    let used = spans.len();
    spans.push(Span::raw(" ".repeat(INDICATOR_SLOTS - used)));
    spans
}
