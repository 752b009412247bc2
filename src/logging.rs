//! Logging setup
//!
//! Records go to stderr so that stdout carries nothing but diagram text.
//! A log file, when requested, receives the same records with timestamps.

use std::fmt;

use anyhow::Result;
use chrono::SecondsFormat;
use fern::Dispatch;
use fern::colors::{Color, ColoredLevelConfig};
use log::{Level, LevelFilter};

/// Verbosity level for logging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Errors only, selected by `--quiet`
    Error,
    /// Warnings such as skipped feedback loops
    Warning,
    /// Progress notices (default)
    Info,
    /// Parsed workflow and rendering summaries
    Debug,
    /// Per-stage walk of the decision renderer
    Trace,
}

impl LogLevel {
    /// Convert verbosity level to log::LevelFilter
    pub fn to_level_filter(&self) -> LevelFilter {
        match self {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warning => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }

    /// Get the verbosity level from the number of `-v` flags
    pub fn from_occurrences(occurrences: u8) -> Self {
        match occurrences {
            0 => LogLevel::Info,
            1 => LogLevel::Debug,
            _ => LogLevel::Trace,
        }
    }
}

/// Prefix marking problems on the console
fn console_prefix(level: Level) -> &'static str {
    match level {
        Level::Error => "error: ",
        Level::Warn => "warning: ",
        _ => "",
    }
}

/// Console text of a record before any tint is applied
fn console_line(level: Level, message: impl fmt::Display) -> String {
    format!("{}{}", console_prefix(level), message)
}

/// Console sink on stderr, tinted only when stderr is a terminal
fn console_dispatch(filter: LevelFilter) -> Dispatch {
    let colors = ColoredLevelConfig::new()
        .error(Color::Red)
        .warn(Color::Yellow)
        .info(Color::White)
        .debug(Color::BrightBlack)
        .trace(Color::BrightBlack);
    let tinted = atty::is(atty::Stream::Stderr);

    Dispatch::new()
        .format(move |out, message, record| {
            let line = console_line(record.level(), message);
            if tinted {
                out.finish(format_args!(
                    "\x1B[{}m{}\x1B[0m",
                    colors.get_color(&record.level()).to_fg_str(),
                    line
                ))
            } else {
                out.finish(format_args!("{line}"))
            }
        })
        .level(filter)
        .chain(std::io::stderr())
}

/// File sink with RFC 3339 timestamps
fn file_dispatch(filter: LevelFilter, path: &str) -> Result<Dispatch> {
    Ok(Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {:<5}] {}",
                chrono::Local::now().to_rfc3339_opts(SecondsFormat::Secs, true),
                record.level(),
                message
            ))
        })
        .level(filter)
        .chain(fern::log_file(path)?))
}

/// Initialise the logger with the specified verbosity level
///
/// When `log_file` is given, records are mirrored there as well.
pub fn init_logger(verbosity: LogLevel, log_file: Option<&str>) -> Result<()> {
    let filter = verbosity.to_level_filter();
    let mut logger = Dispatch::new().level(filter).chain(console_dispatch(filter));

    let log_file = log_file.filter(|path| !path.is_empty());
    if let Some(path) = log_file {
        logger = logger.chain(file_dispatch(filter, path)?);
    }
    logger.apply()?;

    match log_file {
        Some(path) => log::debug!("Logging at {verbosity:?} to stderr and {path}"),
        None => log::debug!("Logging at {verbosity:?} to stderr"),
    }

    Ok(())
}

/// Picks the coloured variant of a message when stderr is a terminal
pub fn format_message(message: &str, colored_message: &str) -> String {
    if atty::is(atty::Stream::Stderr) {
        colored_message.to_string()
    } else {
        message.to_string()
    }
}
