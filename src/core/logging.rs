//! Logging setup.
//!
//! Console output goes to stderr. When a log file is configured, every event
//! is also written there without ANSI colors through a non-blocking writer;
//! the returned guard must be held for the lifetime of the process so the
//! writer can flush on exit.

use std::path::Path;

use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt, prelude::*};

use super::config::LoggingConfig;
use super::error::{Error, Result};

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Initialize the global logging subsystem.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::from_default_env().add_directive(parse_level(&config.level).into());
    let (layers, guard) = build_layers(config)?;

    tracing_subscriber::registry()
        .with(layers)
        .with(filter)
        .try_init()
        .map_err(|e| Error::logging(e.to_string()))?;

    Ok(guard)
}

/// Map a configured level name to a tracing level, defaulting to INFO.
pub fn parse_level(level: &str) -> Level {
    match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}

fn build_layers(config: &LoggingConfig) -> Result<(Vec<BoxedLayer>, Option<WorkerGuard>)> {
    let console = fmt::layer()
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr);

    let mut layers: Vec<BoxedLayer> = vec![if config.with_timestamps {
        console.boxed()
    } else {
        console.without_time().boxed()
    }];

    let guard = match &config.file {
        Some(path) => {
            let (layer, guard) = file_layer(path)?;
            layers.push(layer);
            Some(guard)
        }
        None => None,
    };

    Ok((layers, guard))
}

fn file_layer(path: &Path) -> Result<(BoxedLayer, WorkerGuard)> {
    let file_name = path
        .file_name()
        .ok_or_else(|| Error::logging(format!("log file path {:?} has no file name", path)))?;
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)?;

    let appender = tracing_appender::rolling::never(dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let layer = fmt::layer()
        .with_ansi(false)
        .with_target(true)
        .with_writer(writer)
        .boxed();

    Ok((layer, guard))
}
