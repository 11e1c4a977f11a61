//! Centralized configuration for console output.
//!
//! `ConsoleConfig` gathers color mode, number locale and logging settings,
//! either programmatically or from environment variables.

use crate::detection::DisplayContext;
use crate::locale::NumberLocale;
use crate::logging::targets;
use std::env;

/// Configuration for the console programs
#[derive(Debug, Clone)]
pub struct ConsoleConfig {
    // Display mode
    /// Override display context (None = auto-detect)
    pub context: Option<DisplayContext>,
    /// Force color output even in non-TTY
    pub force_color: Option<bool>,
    /// Force plain text mode (no styling)
    pub force_plain: bool,

    // Formatting
    /// Culture used by numeric format specifiers
    pub locale: NumberLocale,

    // Logging
    /// Log level filter
    pub log_level: Option<log::Level>,
    /// Show timestamps in logs
    pub log_timestamps: bool,
    /// Show target module in logs
    pub log_targets: bool,

    // Diagnostics
    /// Problems found by `from_env`, logged later by `log_warnings`
    pub warnings: Vec<String>,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            context: None,
            force_color: None,
            force_plain: false,
            locale: NumberLocale::default(),
            log_level: None,
            log_timestamps: true,
            log_targets: true,
            warnings: Vec::new(),
        }
    }
}

impl ConsoleConfig {
    /// Create config with defaults
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create config from environment variables
    ///
    /// # Environment Variables
    ///
    /// | Variable | Values | Description |
    /// |----------|--------|-------------|
    /// | `BASICS_FORCE_COLOR` | (set) | Force colored output |
    /// | `BASICS_PLAIN` | (set) | Force plain output |
    /// | `NO_COLOR` | (set) | Disable colors (standard) |
    /// | `BASICS_LOCALE` | en-US/en-GB/de-DE/fr-FR/invariant | Number locale |
    /// | `BASICS_LOG` | trace/debug/info/warn/error | Log level |
    /// | `BASICS_LOG_TIMESTAMPS` | 0/1 | Show timestamps |
    ///
    /// Unrecognized values are kept in [`ConsoleConfig::warnings`]; call
    /// [`ConsoleConfig::log_warnings`] once a logger is installed.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Create config from an arbitrary variable lookup
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        // Display mode
        if lookup("BASICS_FORCE_COLOR").is_some() {
            config.force_color = Some(true);
        }
        if lookup("BASICS_PLAIN").is_some() || lookup("NO_COLOR").is_some() {
            config.force_plain = true;
        }

        // Formatting
        if let Some(name) = lookup("BASICS_LOCALE") {
            match NumberLocale::by_name(&name) {
                Some(locale) => config.locale = locale,
                None => config.warnings.push(format!(
                    "Unknown locale {name:?} in BASICS_LOCALE, keeping {} (available: {})",
                    config.locale.name,
                    NumberLocale::available().collect::<Vec<_>>().join(", ")
                )),
            }
        }

        // Logging
        if let Some(level) = lookup("BASICS_LOG") {
            config.log_level = parse_level(&level);
            if config.log_level.is_none() {
                config.warnings.push(format!(
                    "Unknown log level {level:?} in BASICS_LOG, keeping {}",
                    config.effective_log_level()
                ));
            }
        }
        if lookup("BASICS_LOG_TIMESTAMPS")
            .map(|v| v == "0" || v.to_lowercase() == "false")
            .unwrap_or(false)
        {
            config.log_timestamps = false;
        }

        config
    }

    /// Emit every problem found while reading the environment
    pub fn log_warnings(&self) {
        for warning in &self.warnings {
            log::warn!(target: targets::CONFIG, "{warning}");
        }
    }

    // ─────────────────────────────────────────────────
    // Builder Methods
    // ─────────────────────────────────────────────────

    /// Force color output
    #[must_use]
    pub fn force_color(mut self, force: bool) -> Self {
        self.force_color = Some(force);
        self
    }

    /// Enable plain text mode (no styling)
    #[must_use]
    pub fn plain_mode(mut self) -> Self {
        self.force_plain = true;
        self
    }

    /// Set the number locale
    #[must_use]
    pub fn with_locale(mut self, locale: NumberLocale) -> Self {
        self.locale = locale;
        self
    }

    /// Set the log level
    #[must_use]
    pub fn with_log_level(mut self, level: log::Level) -> Self {
        self.log_level = Some(level);
        self
    }

    /// Set display context explicitly
    #[must_use]
    pub fn with_context(mut self, context: DisplayContext) -> Self {
        self.context = Some(context);
        self
    }

    // ─────────────────────────────────────────────────
    // Resolution Methods
    // ─────────────────────────────────────────────────

    /// Resolve the display context based on config and environment
    #[must_use]
    pub fn resolve_context(&self) -> DisplayContext {
        if self.force_plain {
            return DisplayContext::Plain;
        }
        if let Some(true) = self.force_color {
            return DisplayContext::Styled;
        }
        self.context.unwrap_or_else(DisplayContext::detect)
    }

    /// Check if colored output should be used based on resolved context
    #[must_use]
    pub fn should_use_color(&self) -> bool {
        self.resolve_context().is_styled()
    }

    /// Effective log level, `Warn` unless configured
    #[must_use]
    pub fn effective_log_level(&self) -> log::Level {
        self.log_level.unwrap_or(log::Level::Warn)
    }
}

fn parse_level(level: &str) -> Option<log::Level> {
    match level.to_lowercase().as_str() {
        "trace" => Some(log::Level::Trace),
        "debug" => Some(log::Level::Debug),
        "info" => Some(log::Level::Info),
        "warn" | "warning" => Some(log::Level::Warn),
        "error" => Some(log::Level::Error),
        _ => None,
    }
}
