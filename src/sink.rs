//! Render targets for a [`Screen`].

use std::io::Write;

use color_eyre::Result;

use crate::components;
use crate::tui::Tui;
use crate::view::{Cell, PlannerView, Screen};

pub trait RenderSink {
    fn present(&mut self, screen: &Screen) -> Result<()>;
}

/// Interactive terminal, drawn with ratatui.
pub struct TerminalSink {
    terminal: Tui,
}

impl TerminalSink {
    pub fn new(terminal: Tui) -> Self {
        Self { terminal }
    }
}

impl RenderSink for TerminalSink {
    fn present(&mut self, screen: &Screen) -> Result<()> {
        self.terminal.draw(|frame| components::draw(frame, screen))?;
        Ok(())
    }
}

/// Plain text, one frame per `present`; used by `--dump`.
pub struct TextSink<W> {
    out: W,
}

impl<W: Write> TextSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> RenderSink for TextSink<W> {
    fn present(&mut self, screen: &Screen) -> Result<()> {
        let text = match screen {
            Screen::Planner(view) => planner_text(view),
            Screen::LoadFailed { reason, .. } => format!("Could not load events.\n{reason}\n"),
        };
        self.out.write_all(text.as_bytes())?;
        self.out.flush()?;
        Ok(())
    }
}

fn planner_text(view: &PlannerView) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}  [filter: {}]\n", view.grid.label, view.filter.label()));
    out.push_str(" Sun  Mon  Tue  Wed  Thu  Fri  Sat\n");
    for week in view.grid.weeks() {
        let line: String = week.iter().map(cell_text).collect();
        out.push_str(line.trim_end());
        out.push('\n');
    }

    out.push('\n');
    out.push_str(&view.list.heading);
    out.push('\n');
    if view.list.is_empty() {
        out.push_str("  (no events)\n");
    }
    for entry in &view.list.entries {
        out.push_str(&format!("  [{}] {} | {}\n", entry.color, entry.date, entry.name));
    }

    if !view.legend.entries.is_empty() {
        out.push_str("\nLegend\n");
        for entry in &view.legend.entries {
            let flag = if entry.conflicting { " (conflicting colours)" } else { "" };
            out.push_str(&format!("  [{}] {}{}\n", entry.color, entry.name, flag));
        }
    }

    if let Some(details) = &view.popup {
        out.push_str("\nDetails\n");
        for ev in details {
            out.push_str(&format!(
                "  Name: {}\n  Time: {}\n  Notes: {}\n  Cost: {}\n",
                ev.name, ev.time, ev.notes, ev.cost
            ));
        }
    }

    out
}

/// Five columns: day number, then one `*` per category (at most two).
fn cell_text(cell: &Cell) -> String {
    match cell {
        Cell::Blank { .. } => "     ".to_string(),
        Cell::Day(day) => {
            let marks = "*".repeat(day.indicators.len().min(2));
            format!(" {:>2}{:<2}", day.day, marks)
        }
    }
}
