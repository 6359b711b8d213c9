// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use chrono::Local;
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Stdout logger behind the `log` facade: builder with a label and level,
/// timestamped single-line output.
pub struct Logger {
    label: Option<String>,
    level: LevelFilter,
}

impl Logger {
    pub fn new() -> Self {
        Self {
            label: None,
            level: LevelFilter::Info,
        }
    }

    pub fn label(mut self, label: &str) -> Self {
        self.label = Some(label.to_string());
        self
    }

    pub fn level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }

    pub fn init(self) -> Result<(), SetLoggerError> {
        let level = self.level;
        log::set_boxed_logger(Box::new(SimpleLogger { label: self.label }))
            .map(|()| log::set_max_level(level))
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

struct SimpleLogger {
    label: Option<String>,
}

impl Log for SimpleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            // at debug and below, show the module target instead of the label
            let target = match &self.label {
                Some(label) if record.level() < Level::Debug => label.as_str(),
                _ => record.target(),
            };
            println!(
                "{} {:<5} [{}] {}",
                Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                target,
                record.args()
            );
        }
    }

    fn flush(&self) {}
}
