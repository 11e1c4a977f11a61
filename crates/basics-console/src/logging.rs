//! Log output to stderr.
//!
//! Report text goes to stdout; diagnostics from the `log` facade go through
//! [`ConsoleLogger`] to stderr so the two never interleave in a pipe.
//!
//! # Usage
//!
//! ```ignore
//! use basics_console::logging::ConsoleLogger;
//! use log::Level;
//!
//! ConsoleLogger::builder()
//!     .level(Level::Debug)
//!     .with_timestamps(false)
//!     .try_init();
//! ```

use console::{Style, Term};
use log::{Level, LevelFilter, Log, Metadata, Record};
use time::OffsetDateTime;
use time::macros::format_description;

use crate::config::ConsoleConfig;

/// Log targets used by the crate.
///
/// Example filter: `BASICS_LOG=debug` shows host queries and console reads.
pub mod targets {
    /// Root target.
    pub const BASICS: &str = "basics";

    /// Console reads, writes and color changes.
    pub const CONSOLE: &str = "basics::console";

    /// Host environment queries.
    pub const HOST: &str = "basics::host";

    /// Report sections.
    pub const REPORT: &str = "basics::report";

    /// Configuration resolution.
    pub const CONFIG: &str = "basics::config";
}

/// Logger that writes one line per record to stderr.
pub struct ConsoleLogger {
    min_level: Level,
    show_timestamps: bool,
    show_targets: bool,
    styled: bool,
}

impl ConsoleLogger {
    /// Create a new logger with the given minimum level.
    #[must_use]
    pub fn new(min_level: Level) -> Self {
        ConsoleLoggerBuilder::new().level(min_level).build()
    }

    /// Create a logger using the builder pattern.
    #[must_use]
    pub fn builder() -> ConsoleLoggerBuilder {
        ConsoleLoggerBuilder::new()
    }

    /// Render a record the way it will appear on stderr.
    #[must_use]
    pub fn format_record(&self, record: &Record) -> String {
        let mut line = String::new();

        if self.show_timestamps {
            let fmt = format_description!("[hour]:[minute]:[second]");
            if let Ok(ts) = OffsetDateTime::now_utc().format(&fmt) {
                line.push_str(&ts);
                line.push(' ');
            }
        }

        let label = format!("{:<5}", record.level());
        if self.styled {
            let style = level_style(record.level()).force_styling(true);
            line.push_str(&style.apply_to(label).to_string());
        } else {
            line.push_str(&label);
        }

        if self.show_targets {
            line.push(' ');
            line.push_str(record.target());
            line.push(':');
        }

        line.push(' ');
        line.push_str(&record.args().to_string());
        line
    }
}

fn level_style(level: Level) -> Style {
    match level {
        Level::Error => Style::new().red().bold(),
        Level::Warn => Style::new().yellow(),
        Level::Info => Style::new().cyan(),
        Level::Debug | Level::Trace => Style::new().dim(),
    }
}

/// Builder for configuring the logger.
#[derive(Debug)]
pub struct ConsoleLoggerBuilder {
    min_level: Level,
    show_timestamps: bool,
    show_targets: bool,
    styled: Option<bool>,
}

impl Default for ConsoleLoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleLoggerBuilder {
    /// Create a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            min_level: Level::Warn,
            show_timestamps: true,
            show_targets: true,
            styled: None,
        }
    }

    /// Seed the builder from a [`ConsoleConfig`].
    #[must_use]
    pub fn from_config(config: &ConsoleConfig) -> Self {
        let builder = Self::new()
            .level(config.effective_log_level())
            .with_timestamps(config.log_timestamps)
            .with_targets(config.log_targets);
        if config.force_plain {
            builder.styled(false)
        } else {
            builder
        }
    }

    /// Set the minimum log level.
    #[must_use]
    pub fn level(mut self, level: Level) -> Self {
        self.min_level = level;
        self
    }

    /// Set the minimum log level from a LevelFilter.
    #[must_use]
    pub fn level_filter(mut self, filter: LevelFilter) -> Self {
        self.min_level = filter.to_level().unwrap_or(Level::Trace);
        self
    }

    /// Set whether to show timestamps.
    #[must_use]
    pub fn with_timestamps(mut self, show: bool) -> Self {
        self.show_timestamps = show;
        self
    }

    /// Set whether to show targets.
    #[must_use]
    pub fn with_targets(mut self, show: bool) -> Self {
        self.show_targets = show;
        self
    }

    /// Force level coloring on or off (default: stderr is a terminal).
    #[must_use]
    pub fn styled(mut self, styled: bool) -> Self {
        self.styled = Some(styled);
        self
    }

    /// Build the logger without installing it.
    #[must_use]
    pub fn build(self) -> ConsoleLogger {
        let styled = self
            .styled
            .unwrap_or_else(|| Term::stderr().is_term() && !crate::detection::is_plain_requested());

        ConsoleLogger {
            min_level: self.min_level,
            show_timestamps: self.show_timestamps,
            show_targets: self.show_targets,
            styled,
        }
    }

    /// Build and install as the global logger.
    ///
    /// Returns an error if a logger has already been set.
    pub fn init(self) -> Result<(), log::SetLoggerError> {
        let level = self.min_level;
        let logger = Box::new(self.build());
        log::set_boxed_logger(logger)?;
        log::set_max_level(level.to_level_filter());
        Ok(())
    }

    /// Build and install, ignoring errors if already set.
    pub fn try_init(self) {
        let _ = self.init();
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.min_level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        eprintln!("{}", self.format_record(record));
    }

    fn flush(&self) {}
}
