use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::theme;

const BINDINGS: &[(&str, &[(&str, &str)])] = &[
    (
        "Navigation",
        &[
            ("[ / ]     ", "Previous/next month"),
            ("t         ", "Jump to this month"),
            ("h/l j/k   ", "Move day (grid) or row (list)"),
            ("Tab       ", "Switch grid / list"),
        ],
    ),
    (
        "Filter",
        &[
            ("f / F     ", "Next/previous category"),
            ("a         ", "Show all categories"),
        ],
    ),
    (
        "Details",
        &[
            ("Enter     ", "Open day or event details"),
            ("x         ", "Close details"),
        ],
    ),
];

pub fn render_help(frame: &mut Frame, area: Rect) {
    let popup_w = area.width.min(52).max(30.min(area.width));
    let popup_h = area.height.min(20).max(12.min(area.height));
    let x = area.x + (area.width.saturating_sub(popup_w)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_h)) / 2;
    let popup_area = Rect::new(x, y, popup_w, popup_h);

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(" Keybindings ")
        .title_style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));

    let key_style = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
    let section_style = Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED);

    let mut lines: Vec<Line> = Vec::new();
    for (section, keys) in BINDINGS {
        lines.push(Line::from(Span::styled(*section, section_style)));
        for (key, desc) in keys.iter() {
            lines.push(Line::from(vec![
                Span::styled(format!("  {}", key), key_style),
                Span::raw(*desc),
            ]));
        }
        lines.push(Line::from(""));
    }
    lines.push(Line::from(vec![
        Span::styled("  q", key_style),
        Span::styled(" / ", theme::DIM_STYLE),
        Span::styled("?       ", key_style),
        Span::raw("Quit / close help"),
    ]));

    let para = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(para, popup_area);
}
