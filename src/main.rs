//! CLI entry point for the Trip Planner response inspector.
//!
//! Prints a human-readable summary of each captured API response. Takes no
//! arguments; behaviour is tuned through environment variables (see
//! [`InspectorConfig`]).

use anyhow::Result;
use std::ffi::OsStr;
use std::io::Write;
use std::path::Path;
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};
use trip_planner_inspector::config::InspectorConfig;
use trip_planner_inspector::report::run;

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path = std::env::var("LOG_FILE_PATH")
        .unwrap_or_else(|_| "logs/trip_planner_inspector.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("trip_planner_inspector.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let config = InspectorConfig::from_env()?;
    info!(
        responses_dir = %config.responses_dir.display(),
        max_depth = config.max_depth,
        print_structure = config.print_structure,
        "Starting inspection"
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let summary = run(&config, &mut out)?;
    out.flush()?;

    info!(
        inspected = summary.inspected,
        missing = summary.missing,
        "Done"
    );
    Ok(())
}
