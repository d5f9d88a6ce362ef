mod app;
mod calendar;
mod components;
mod config;
mod event;
mod logging;
mod sink;
mod theme;
mod tui;
mod view;

use std::path::PathBuf;
use std::time::Duration;

use app::App;
use calendar::Store;
use chrono::{Local, NaiveDate};
use clap::Parser;
use color_eyre::Result;
use config::Config;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use sink::{RenderSink, TerminalSink, TextSink};
use tracing::{info, warn};
use view::Focus;

/// Month planner for a JSON list of activities.
#[derive(Debug, Parser)]
#[command(version)]
struct Cli {
    /// Event file (JSON array); overrides `data_file` from the config.
    #[arg(long)]
    data: Option<PathBuf>,

    /// Config file [default: <config dir>/planner-tui/config.toml]
    #[arg(long)]
    config: Option<PathBuf>,

    /// Month to open, as YYYY-MM [default: this month]
    #[arg(long, value_parser = parse_month)]
    month: Option<NaiveDate>,

    /// Print the month as plain text and exit
    #[arg(long)]
    dump: bool,
}

fn parse_month(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(&format!("{}-01", s.trim()), "%Y-%m-%d")
        .map_err(|_| format!("expected YYYY-MM, got {s:?}"))
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    let _log_guard = logging::init();

    let config = Config::load(cli.config.as_deref())?;
    theme::init(&config.theme);
    if theme::parse_color(&config.fallback_color).is_none() {
        warn!("fallback colour {:?} is not a colour", config.fallback_color);
    }

    let store = Store::new(cli.data.unwrap_or_else(|| config.data_file.clone()));
    info!("loading events from {}", store.path().display());
    let loaded = store.load().await;

    let today = Local::now().date_naive();
    let start = cli.month.unwrap_or(today);

    if cli.dump {
        let app = App::new(Ok(loaded?), today, start, config.fallback_color);
        TextSink::new(std::io::stdout().lock()).present(&app.screen())?;
        return Ok(());
    }

    let mut app = App::new(loaded, today, start, config.fallback_color);

    tui::install_panic_hook();
    let mut sink = TerminalSink::new(tui::init()?);
    info!("planner started on {}", app.state.month_label());
    let result = run(&mut sink, &mut app);
    tui::restore()?;
    result
}

fn run(sink: &mut TerminalSink, app: &mut App) -> Result<()> {
    while app.running {
        sink.present(&app.screen())?;

        if let Some(key) = event::next_key_event(Duration::from_millis(100))? {
            // Clear status message on any key
            app.status_message = None;
            handle_key(app, key);
        }
    }

    Ok(())
}

fn handle_key(app: &mut App, key: KeyEvent) {
    let quit = matches!(
        (key.code, key.modifiers),
        (KeyCode::Char('q'), _) | (KeyCode::Char('c'), KeyModifiers::CONTROL)
    );
    if quit {
        app.running = false;
        return;
    }

    // Help overlay takes priority
    if app.show_help {
        if key.code == KeyCode::Esc || key.code == KeyCode::Char('?') {
            app.show_help = false;
        }
        return;
    }

    // Detail popup is modal and only closes on its close key
    if app.popup.is_visible() {
        if key.code == KeyCode::Char('x') {
            app.close_popup();
        }
        return;
    }

    if app.events().is_none() {
        if key.code == KeyCode::Char('?') {
            app.show_help = true;
        }
        return;
    }

    handle_normal_input(app, key.code);
}

fn handle_normal_input(app: &mut App, code: KeyCode) {
    let on_grid = app.selection.focus == Focus::Grid;
    match code {
        KeyCode::Char('[') | KeyCode::Char('p') => app.prev_month(),
        KeyCode::Char(']') | KeyCode::Char('n') => app.next_month(),
        KeyCode::Char('t') => app.go_to_today(),
        KeyCode::Char('f') => {
            app.next_filter();
            app.status_message = Some(format!("Filter: {}", app.state.filter.label()));
        }
        KeyCode::Char('F') => {
            app.prev_filter();
            app.status_message = Some(format!("Filter: {}", app.state.filter.label()));
        }
        KeyCode::Char('a') => app.reset_filter(),
        KeyCode::Tab | KeyCode::BackTab => app.toggle_focus(),
        KeyCode::Enter => app.activate(),
        KeyCode::Char('?') => app.show_help = true,
        KeyCode::Left | KeyCode::Char('h') if on_grid => app.move_day(-1),
        KeyCode::Right | KeyCode::Char('l') if on_grid => app.move_day(1),
        KeyCode::Up | KeyCode::Char('k') if on_grid => app.move_day(-7),
        KeyCode::Down | KeyCode::Char('j') if on_grid => app.move_day(7),
        KeyCode::Up | KeyCode::Char('k') => app.move_row(-1),
        KeyCode::Down | KeyCode::Char('j') => app.move_row(1),
        _ => {}
    }
}
