//! Styled/plain context detection
//!
//! Determines whether color escapes should be written to standard output.

use console::Term;

/// Display context for report output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayContext {
    /// Plain text, no escape sequences (pipes, files, CI logs)
    #[default]
    Plain,
    /// Colored output for an interactive terminal
    Styled,
}

impl DisplayContext {
    /// Auto-detect the display context from environment
    #[must_use]
    pub fn detect() -> Self {
        if should_enable_color() {
            Self::Styled
        } else {
            Self::Plain
        }
    }

    /// Check if color output is enabled
    #[must_use]
    pub fn is_styled(&self) -> bool {
        matches!(self, Self::Styled)
    }

    /// Check if this is a plain context
    #[must_use]
    pub fn is_plain(&self) -> bool {
        matches!(self, Self::Plain)
    }
}

/// Determine if color has been explicitly switched off
#[must_use]
pub fn is_plain_requested() -> bool {
    std::env::var("BASICS_PLAIN").is_ok()
        || std::env::var("NO_COLOR").is_ok()
        || std::env::var("CI").is_ok()
}

/// Determine if color output should be enabled
#[must_use]
pub fn should_enable_color() -> bool {
    // Explicit enable always wins
    if std::env::var("BASICS_FORCE_COLOR").is_ok() {
        return true;
    }

    if is_plain_requested() {
        return false;
    }

    Term::stdout().is_term()
}
