//! Logger setup for batch runs.
//!
//! Two line formats are available: a colored plain line for terminals and a JSON
//! object per line for log collectors. Both carry the level, the emitting module and
//! the message.

use std::io::Write;

use colored::{ColoredString, Colorize};
use log::{Level, LevelFilter};

use crate::config::LogFormat;
use crate::error_handling::InitializationError;

/// Dependencies that log far more than a page batch needs, with the level they are
/// capped at. html5ever reports every recoverable parse error and broken markup is
/// the norm on real pages.
const QUIET_MODULES: [(&str, LevelFilter); 5] = [
    ("html5ever", LevelFilter::Error),
    ("selectors", LevelFilter::Warn),
    ("reqwest", LevelFilter::Info),
    ("hyper", LevelFilter::Info),
    ("hyper_util", LevelFilter::Info),
];

/// Installs the global logger.
///
/// `RUST_LOG` is read first, so per-module directives such as
/// `RUST_LOG=page_text::extract=trace` still apply; `level` then sets the global
/// floor and the level for this crate.
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if a logger is already installed.
pub fn init_logger_with(level: LevelFilter, format: LogFormat) -> Result<(), InitializationError> {
    colored::control::set_override(true);

    let mut builder = env_logger::Builder::from_default_env();
    builder.filter_level(level);
    for (module, cap) in QUIET_MODULES {
        builder.filter_module(module, cap);
    }
    builder.filter_module("page_text", level);

    match format {
        LogFormat::Json => builder.format(|buf, record| {
            let line = json_line(
                chrono::Utc::now().timestamp_millis(),
                record.level(),
                record.target(),
                &record.args().to_string(),
            );
            writeln!(buf, "{line}")
        }),
        LogFormat::Plain => builder.format(|buf, record| {
            let line = plain_line(record.level(), record.target(), &record.args().to_string());
            writeln!(buf, "{line}")
        }),
    };

    builder.try_init()?;
    Ok(())
}

/// One JSON object: `{"ts":<unix millis>,"level":..,"target":..,"msg":..}`.
fn json_line(ts_millis: i64, level: Level, target: &str, msg: &str) -> String {
    serde_json::json!({
        "ts": ts_millis,
        "level": level.as_str(),
        "target": target,
        "msg": msg,
    })
    .to_string()
}

/// `<marker> <target> [<LEVEL>] <message>` with the target and level colored.
fn plain_line(level: Level, target: &str, msg: &str) -> String {
    format!(
        "{} {} [{}] {}",
        level_marker(level),
        target.cyan(),
        painted_level(level),
        msg
    )
}

fn level_marker(level: Level) -> &'static str {
    match level {
        Level::Error => "✖",
        Level::Warn => "!",
        Level::Info => "✔",
        Level::Debug => "·",
        Level::Trace => "…",
    }
}

fn painted_level(level: Level) -> ColoredString {
    let name = level.as_str();
    match level {
        Level::Error => name.red(),
        Level::Warn => name.yellow(),
        Level::Info => name.green(),
        Level::Debug => name.blue(),
        Level::Trace => name.purple(),
    }
}
