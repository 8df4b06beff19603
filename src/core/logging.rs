//! Logger setup for the `containerkit` binary
//!
//! The library itself only emits through the `log` facade. The binary
//! installs a flexi_logger backend with one of three line formats:
//!
//! | format | example                                                         |
//! |--------|-----------------------------------------------------------------|
//! | `text` | `2026-10-17 09:12:44.120 INF stress finished`                   |
//! | `ext`  | `2026-10-17 09:12:44.120 INF stress finished (app/run.rs:88)`   |
//! | `json` | `{"timestamp":"…","level":"INF","message":"…","target":"…"}`    |

use flexi_logger::{DeferredNow, FileSpec, Logger, LoggerHandle};
use std::sync::{Mutex, OnceLock};

// Dropping the handle stops file output, so it lives for the whole process
static LOGGER_HANDLE: OnceLock<Mutex<LoggerHandle>> = OnceLock::new();

/// Log formats accepted by `--log-format` and the `[logging]` config table
pub const LOG_FORMATS: [&str; 3] = ["text", "ext", "json"];

/// Log levels accepted by `--log-level` and the `[logging]` config table
pub const LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

/// Start the global logger
pub fn init_logging(
    log_level: Option<&str>,
    log_format: Option<&str>,
    log_file: Option<&str>,
    color_enabled: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let level_str = log_level.unwrap_or("info");
    let format_type = log_format.unwrap_or("text");

    let mut logger = Logger::try_with_str(level_str)?;

    logger = match (format_type, color_enabled) {
        ("json", _) => logger.format(json_format),
        ("ext", true) => logger.format(extended_color_format),
        ("ext", false) => logger.format(extended_format),
        (_, true) => logger.format(simple_color_format),
        (_, false) => logger.format(simple_format),
    };

    if let Some(file_path) = log_file {
        let file_spec = FileSpec::try_from(std::path::Path::new(file_path))?;
        logger = logger.log_to_file(file_spec);
    }

    let handle = logger.start()?;
    let _ = LOGGER_HANDLE.set(Mutex::new(handle));

    Ok(())
}

fn level_abbr(level: log::Level) -> &'static str {
    match level {
        log::Level::Error => "ERR",
        log::Level::Warn => "WRN",
        log::Level::Info => "INF",
        log::Level::Debug => "DBG",
        log::Level::Trace => "TRC",
    }
}

fn level_colored(level: log::Level) -> colored::ColoredString {
    use colored::*;

    match level {
        log::Level::Error => "ERR".red().bold(),
        log::Level::Warn => "WRN".yellow(),
        log::Level::Info => "INF".green(),
        log::Level::Debug => "DBG".blue(),
        log::Level::Trace => "TRC".magenta(),
    }
}

const TIMESTAMP: &str = "%Y-%m-%d %H:%M:%S%.3f";

// `<time> <LVL> <message>`, optionally followed by `(<file>:<line>)`
fn write_line(
    w: &mut dyn std::io::Write,
    now: &mut DeferredNow,
    record: &log::Record,
    color: bool,
    with_target: bool,
) -> Result<(), std::io::Error> {
    use colored::*;

    let timestamp = now.format(TIMESTAMP).to_string();
    if color {
        write!(w, "{} {} {}", timestamp.dimmed(), level_colored(record.level()), record.args())?;
    } else {
        write!(w, "{} {} {}", timestamp, level_abbr(record.level()), record.args())?;
    }

    if with_target {
        let target = format_target_as_path(record.target(), record.line());
        if color {
            write!(w, " ({})", target.dimmed())?;
        } else {
            write!(w, " ({})", target)?;
        }
    }
    Ok(())
}

fn simple_format(
    w: &mut dyn std::io::Write,
    now: &mut DeferredNow,
    record: &log::Record,
) -> Result<(), std::io::Error> {
    write_line(w, now, record, false, false)
}

fn simple_color_format(
    w: &mut dyn std::io::Write,
    now: &mut DeferredNow,
    record: &log::Record,
) -> Result<(), std::io::Error> {
    write_line(w, now, record, true, false)
}

fn extended_format(
    w: &mut dyn std::io::Write,
    now: &mut DeferredNow,
    record: &log::Record,
) -> Result<(), std::io::Error> {
    write_line(w, now, record, false, true)
}

fn extended_color_format(
    w: &mut dyn std::io::Write,
    now: &mut DeferredNow,
    record: &log::Record,
) -> Result<(), std::io::Error> {
    write_line(w, now, record, true, true)
}

fn json_format(
    w: &mut dyn std::io::Write,
    now: &mut DeferredNow,
    record: &log::Record,
) -> Result<(), std::io::Error> {
    use serde_json::{json, to_string};

    let json_obj = json!({
        "timestamp": now.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string(),
        "level": level_abbr(record.level()),
        "message": record.args().to_string(),
        "target": format_target_as_path(record.target(), record.line())
    });

    // flexi_logger appends the line terminator
    match to_string(&json_obj) {
        Ok(json_string) => w.write_all(json_string.as_bytes()),
        Err(_) => w.write_all(b"{\"error\":\"Failed to serialize log message\"}"),
    }
}

// containerkit::queue::blocking -> queue/blocking.rs:42
fn format_target_as_path(target: &str, line: Option<u32>) -> String {
    let path_like = if let Some(without_prefix) = target.strip_prefix("containerkit::") {
        without_prefix.replace("::", "/") + ".rs"
    } else {
        target.replace("::", "/")
    };

    match line {
        Some(line_num) => format!("{}:{}", path_like, line_num),
        None => path_like,
    }
}
