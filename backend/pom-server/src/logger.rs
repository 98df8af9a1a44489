use crate::error::{Result as ServerErrorResult, ServerError};

use std::fmt::Arguments;
use std::path::PathBuf;
use std::time::SystemTime;

use fern::colors::{Color, ColoredLevelConfig};
use fern::{Dispatch, FormatCallback};
use log::{Record, info};

/// Initialize logger with fern
///
/// # Arguments
/// * `log_level` - Log level filter
/// * `log_file` - Optional path to log file. None = stdout, Some = file output
/// * `colored` - Enable colored output (ignored when logging to file)
///
/// Every line reads `[<rfc3339> - LEVEL] message [file:line]`.
#[track_caller]
pub fn initialize(
    log_level: pom_config::LogLevel,
    log_file: Option<PathBuf>,
    colored: bool,
) -> ServerErrorResult<()> {
    let level_filter = *log_level;

    let output = match log_file {
        Some(ref log_path) => {
            let file = fern::log_file(log_path).map_err(|e| ServerError::Io {
                path: log_path.clone(),
                source: e,
            })?;
            Dispatch::new().format(plain_line).chain(file)
        }
        None if colored => {
            let colors = ColoredLevelConfig::new()
                .trace(Color::Magenta)
                .debug(Color::Blue)
                .info(Color::Green)
                .warn(Color::Yellow)
                .error(Color::Red);

            Dispatch::new()
                .format(move |out, message, record| {
                    write_line(out, colors.color(record.level()), message, record)
                })
                .chain(std::io::stdout())
        }
        // Plain output for non-TTY (systemd, docker logs)
        None => Dispatch::new().format(plain_line).chain(std::io::stdout()),
    };

    Dispatch::new()
        .level(level_filter)
        // sqlx logs every statement at info
        .level_for("sqlx", log::LevelFilter::Warn)
        .chain(output)
        .apply()
        .map_err(|e| ServerError::Logger {
            message: format!("Failed to initialize logger: {e}"),
        })?;

    match log_file {
        Some(ref path) => info!(
            "Logger initialized: level={:?}, file={}",
            level_filter,
            path.display()
        ),
        None => info!("Logger initialized: level={:?}, stdout", level_filter),
    }

    // Bridge tracing to log
    tracing_log::LogTracer::init().ok();

    Ok(())
}

fn plain_line(out: FormatCallback, message: &Arguments, record: &Record) {
    write_line(out, record.level(), message, record)
}

fn write_line(
    out: FormatCallback,
    level: impl std::fmt::Display,
    message: &Arguments,
    record: &Record,
) {
    out.finish(format_args!(
        "[{date} - {level}] {message} [{file}:{line}]",
        date = humantime::format_rfc3339(SystemTime::now()),
        level = level,
        message = message,
        file = record.file().unwrap_or("unknown"),
        line = record.line().unwrap_or(0),
    ))
}
