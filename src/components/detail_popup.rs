use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::theme;
use crate::view::EventDetail;

/// Render the event detail popup overlay, one section per event.
pub fn render_detail_popup(frame: &mut Frame, area: Rect, details: &[EventDetail]) {
    let lines = detail_lines(details);

    // Borders plus content, capped to the screen.
    let wanted_h = lines.len() as u16 + 2;
    let popup_w = area.width.min(60).max(30.min(area.width));
    let popup_h = wanted_h.min(area.height).max(8.min(area.height));
    let x = area.x + (area.width.saturating_sub(popup_w)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_h)) / 2;
    let popup_area = Rect::new(x, y, popup_w, popup_h);

    frame.render_widget(Clear, popup_area);

    let title = match details {
        [one] => format!(" {} ", one.name),
        many => format!(" {} events ", many.len()),
    };
    let block = Block::default()
        .title(title)
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let para = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(para, popup_area);
}

fn detail_lines(details: &[EventDetail]) -> Vec<Line<'static>> {
    let mut lines: Vec<Line> = Vec::new();

    for (i, ev) in details.iter().enumerate() {
        if i > 0 {
            lines.push(Line::from(""));
        }
        for (label, value) in [
            ("Name: ", &ev.name),
            ("Time: ", &ev.time),
            ("Notes: ", &ev.notes),
            ("Cost: ", &ev.cost),
        ] {
            lines.push(Line::from(vec![
                Span::styled(label, theme::DIM_STYLE),
                Span::raw(value.clone()),
            ]));
        }
    }

    // Footer hint
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("Press x to close", theme::DIM_STYLE)));
    lines
}
