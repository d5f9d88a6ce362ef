use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::theme;
use crate::view::CategoryFilter;

/// One-line category selector: every option, the active one highlighted.
pub struct FilterBar;

impl FilterBar {
    pub fn render(frame: &mut Frame, area: Rect, options: &[CategoryFilter], active: &CategoryFilter) {
        let theme = theme::current();
        let mut spans = vec![Span::styled(" Filter:", theme.header)];

        for option in options {
            let style = if option == active {
                theme.selected
            } else {
                theme.dim
            };
            spans.push(Span::raw(" "));
            spans.push(Span::styled(format!(" {} ", option.label()), style));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}
