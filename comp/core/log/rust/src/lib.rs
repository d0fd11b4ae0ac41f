// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

//! Console backend for the `log` facade.
//!
//! Lines follow the agent console layout:
//! `2026-10-17 09:30:00 UTC | DEVLAUNCH | INFO | (src/main.rs:42) | message`.
//! Records at `INFO` and below go to stdout, `WARN` and `ERROR` to stderr, so
//! they interleave with the output of inherited child processes the same way
//! a terminal would show them.

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::{self, Write};
use time::OffsetDateTime;
use time::macros::format_description;

pub struct ConsoleLogger {
    name: &'static str,
    level: LevelFilter,
}

impl ConsoleLogger {
    pub fn new(name: &'static str, level: LevelFilter) -> Self {
        Self { name, level }
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_line(self.name, OffsetDateTime::now_utc(), record);
        // A closed stdout/stderr must never take the launcher down.
        if record.level() <= Level::Warn {
            let _ = writeln!(io::stderr().lock(), "{line}");
        } else {
            let _ = writeln!(io::stdout().lock(), "{line}");
        }
    }

    fn flush(&self) {
        let _ = io::stdout().flush();
        let _ = io::stderr().flush();
    }
}

/// Install a [`ConsoleLogger`] as the global logger.
pub fn init(name: &'static str, level: Level) -> Result<(), SetLoggerError> {
    let filter = level.to_level_filter();
    log::set_boxed_logger(Box::new(ConsoleLogger::new(name, filter)))?;
    log::set_max_level(filter);
    Ok(())
}

/// Parse a level name, accepting the agent spellings `warning` and `critical`.
pub fn parse_level(s: &str) -> Option<Level> {
    match s.trim().to_ascii_lowercase().as_str() {
        "warning" => Some(Level::Warn),
        "critical" => Some(Level::Error),
        other => other.parse().ok(),
    }
}

pub fn format_line(name: &str, now: OffsetDateTime, record: &Record<'_>) -> String {
    let timestamp = now
        .format(format_description!(
            "[year]-[month]-[day] [hour]:[minute]:[second]"
        ))
        .unwrap_or_else(|_| now.unix_timestamp().to_string());
    let location = match (record.file(), record.line()) {
        (Some(file), Some(line)) => format!("({file}:{line}) | "),
        _ => String::new(),
    };
    format!(
        "{timestamp} UTC | {name} | {} | {location}{}",
        record.level(),
        record.args()
    )
}
