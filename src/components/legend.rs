use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::theme;
use crate::view::Legend;

pub struct LegendView;

impl LegendView {
    pub fn render(frame: &mut Frame, area: Rect, legend: &Legend) {
        let theme = theme::current();
        let w = area.width as usize;

        let title = if w >= 16 {
            format!(" Legend ({}) ", legend.entries.len())
        } else {
            " Legend ".to_string()
        };

        let block = Block::default()
            .title(title)
            .title_style(theme.header)
            .borders(Borders::ALL)
            .border_style(theme.border);

        if legend.entries.is_empty() {
            let inner = block.inner(area);
            frame.render_widget(block, area);
            let msg = Paragraph::new("No categories").style(theme.dim);
            frame.render_widget(msg, inner);
            return;
        }

        let inner_w = area.width.saturating_sub(2) as usize;

        let items: Vec<ListItem> = legend
            .entries
            .iter()
            .map(|entry| {
                let mut spans = vec![
                    Span::styled(
                        " \u{25cf} ",
                        Style::default()
                            .fg(theme::event_color(&entry.color))
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(truncate(&entry.name, inner_w.saturating_sub(6))),
                ];
                if entry.conflicting {
                    spans.push(Span::styled(" (!)", theme::ERROR_STYLE));
                }
                ListItem::new(Line::from(spans))
            })
            .collect();

        let list = List::new(items).block(block);
        frame.render_widget(list, area);
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else if max > 3 {
        let head: String = s.chars().take(max - 3).collect();
        format!("{}...", head)
    } else {
        s.chars().take(max).collect()
    }
}
