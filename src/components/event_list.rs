use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::theme;
use crate::view::{EventList, ListEntry};

pub struct EventListView;

impl EventListView {
    pub fn render(frame: &mut Frame, area: Rect, list: &EventList, selected_row: usize, focused: bool) {
        let theme = theme::current();
        let n = list.len();
        let count_str = format!(" {} event{} ", n, if n == 1 { "" } else { "s" });

        let block = Block::default()
            .title(format!(" {} ", list.heading))
            .title_style(theme.header)
            .title_bottom(Line::from(Span::styled(count_str, theme.dim)))
            .borders(Borders::ALL)
            .border_style(if focused { theme.focus_border } else { theme.border });

        if list.is_empty() {
            let inner = block.inner(area);
            frame.render_widget(block, area);
            let msg = Paragraph::new("No events this month").style(theme.dim);
            frame.render_widget(msg, inner);
            return;
        }

        let items: Vec<ListItem> = list.entries.iter().map(format_entry).collect();
        let highlight = if focused { theme.selected } else { theme.highlight };
        let widget = List::new(items).block(block).highlight_style(highlight);

        let mut state = ListState::default().with_selected(Some(selected_row.min(n - 1)));
        frame.render_stateful_widget(widget, area, &mut state);
    }
}

fn format_entry(entry: &ListEntry) -> ListItem<'static> {
    let dot = Span::styled("  ", Style::default().bg(theme::event_color(&entry.color)));
    let date = Span::styled(format!(" {} ", entry.date), theme::current().dim);
    let name = Span::raw(format!("| {}", entry.name));

    ListItem::new(Line::from(vec![dot, date, name]))
}
