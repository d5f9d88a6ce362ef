use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::theme;
use crate::view::Focus;

pub struct StatusBar;

impl StatusBar {
    pub fn render(
        frame: &mut Frame,
        area: Rect,
        focus: Focus,
        popup_open: bool,
        message: Option<&str>,
    ) {
        let w = area.width as usize;
        let style = theme::current().status;

        let mode_str = match (popup_open, focus) {
            (true, _) => "[Details]",
            (false, Focus::Grid) => "[Grid]",
            (false, Focus::List) => "[List]",
        };

        // Show status message if present, otherwise show context-aware hints
        let right_text = match message {
            Some(msg) => format!(" {} ", msg),
            None if popup_open => " x:Close q:Quit ".to_string(),
            None if w >= 90 => {
                " hjkl:Move [/]:Month t:Today f/F:Filter a:All Tab:Focus Enter:Open ?:Help q:Quit "
                    .to_string()
            }
            None if w >= 50 => " [/]:Month f:Filter Enter:Open ?:Help q:Quit ".to_string(),
            None => " ?:Help q:Quit ".to_string(),
        };

        let left = format!(" {} ", mode_str);
        let padding = " ".repeat(w.saturating_sub(left.len() + right_text.len()));

        let line = Line::from(vec![
            Span::styled(left, style),
            Span::styled(padding, style),
            Span::styled(right_text, style),
        ]);

        let bar = Paragraph::new(line).style(style);
        frame.render_widget(bar, area);
    }
}
