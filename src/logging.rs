use std::path::{Path, PathBuf};

use tracing_appender::{
    non_blocking::WorkerGuard,
    rolling::{RollingFileAppender, Rotation},
};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub fn log_dir() -> Option<PathBuf> {
    dirs::data_local_dir().map(|d| d.join("planner-tui").join("logs"))
}

/// Log to a daily file; the terminal belongs to the UI.
///
/// The returned guard flushes on drop and must live until exit. Without a
/// data directory, or when the log file cannot be set up, nothing is logged
/// and the planner runs anyway.
pub fn init() -> Option<WorkerGuard> {
    let dir = log_dir()?;
    match init_in(&dir) {
        Ok(guard) => Some(guard),
        Err(err) => {
            eprintln!("planner-tui: logging disabled: {err}");
            None
        }
    }
}

fn init_in(dir: &Path) -> color_eyre::Result<WorkerGuard> {
    std::fs::create_dir_all(dir)?;

    let file_appender = RollingFileAppender::new(
        Rotation::DAILY,
        dir,
        format!("planner-tui-{}.log", env!("CARGO_PKG_VERSION")),
    );
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer().with_ansi(false).with_writer(non_blocking);
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(file_layer)
        .with(env_filter)
        .try_init()?;

    Ok(guard)
}
