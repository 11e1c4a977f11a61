//! Console I/O provider
//!
//! [`ConsoleIo`] is the seam between the reports and the terminal: blocking
//! line input, templated output and foreground color state.
//! [`TerminalConsole`] is the production implementation over stdin/stdout.

use std::io::{self, BufRead, Write};
use std::ops::{Deref, DerefMut};

use console::Style;

use crate::config::ConsoleConfig;
use crate::error::BasicsResult;
use crate::locale::NumberLocale;
use crate::logging::targets;
use crate::template::{Value, interpolate};

/// The sixteen classic console colors plus the terminal default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Color {
    /// Whatever the terminal uses; nothing is emitted.
    #[default]
    Default,
    Black,
    DarkBlue,
    DarkGreen,
    DarkCyan,
    DarkRed,
    DarkMagenta,
    DarkYellow,
    Gray,
    DarkGray,
    Blue,
    Green,
    Cyan,
    Red,
    Magenta,
    Yellow,
    White,
}

impl Color {
    /// Terminal style for this color, `None` for [`Color::Default`].
    #[must_use]
    pub fn style(self) -> Option<Style> {
        use console::Color as Ansi;

        let style = Style::new();
        let style = match self {
            Color::Default => return None,
            Color::Black => style.fg(Ansi::Black),
            Color::DarkBlue => style.fg(Ansi::Blue),
            Color::DarkGreen => style.fg(Ansi::Green),
            Color::DarkCyan => style.fg(Ansi::Cyan),
            Color::DarkRed => style.fg(Ansi::Red),
            Color::DarkMagenta => style.fg(Ansi::Magenta),
            Color::DarkYellow => style.fg(Ansi::Yellow),
            Color::Gray => style.fg(Ansi::White),
            Color::DarkGray => style.fg(Ansi::Black).bright(),
            Color::Blue => style.fg(Ansi::Blue).bright(),
            Color::Green => style.fg(Ansi::Green).bright(),
            Color::Cyan => style.fg(Ansi::Cyan).bright(),
            Color::Red => style.fg(Ansi::Red).bright(),
            Color::Magenta => style.fg(Ansi::Magenta).bright(),
            Color::Yellow => style.fg(Ansi::Yellow).bright(),
            Color::White => style.fg(Ansi::White).bright(),
        };
        Some(style)
    }
}

/// Line-based console input/output with foreground color state.
pub trait ConsoleIo {
    /// Read one line, without its line terminator. `None` at end of input.
    fn read_line(&mut self) -> Option<String>;

    /// Write raw text in the current color and flush.
    fn write_str(&mut self, text: &str) -> BasicsResult<()>;

    fn foreground_color(&self) -> Color;

    fn set_foreground_color(&mut self, color: Color);

    /// Culture used when interpolating numbers.
    fn locale(&self) -> &NumberLocale;

    /// Interpolate `template` with `args` and write it without a newline.
    fn write(&mut self, template: &str, args: &[Value<'_>]) -> BasicsResult<()> {
        let text = interpolate(template, args, self.locale())?;
        self.write_str(&text)
    }

    /// Interpolate `template` with `args` and write it as one line.
    fn write_line(&mut self, template: &str, args: &[Value<'_>]) -> BasicsResult<()> {
        let mut text = interpolate(template, args, self.locale())?;
        text.push('\n');
        self.write_str(&text)
    }

    /// Write an empty line.
    fn newline(&mut self) -> BasicsResult<()> {
        self.write_str("\n")
    }

    /// Switch to `color` until the returned guard is dropped.
    fn with_color(&mut self, color: Color) -> ColorGuard<'_, Self>
    where
        Self: Sized,
    {
        ColorGuard::new(self, color)
    }
}

/// Restores the saved foreground color when dropped.
///
/// ```ignore
/// {
///     let mut highlighted = console.with_color(Color::Yellow);
///     highlighted.write_line("Hello {0}!", &[name.into()])?;
/// } // previous color is back here, even on early return
/// ```
pub struct ColorGuard<'a, C: ConsoleIo + ?Sized> {
    console: &'a mut C,
    saved: Color,
}

impl<'a, C: ConsoleIo + ?Sized> ColorGuard<'a, C> {
    /// Save the current color of `console` and switch to `color`.
    pub fn new(console: &'a mut C, color: Color) -> Self {
        let saved = console.foreground_color();
        console.set_foreground_color(color);
        Self { console, saved }
    }

    /// The color that will be restored.
    pub fn saved(&self) -> Color {
        self.saved
    }
}

impl<C: ConsoleIo + ?Sized> Deref for ColorGuard<'_, C> {
    type Target = C;

    fn deref(&self) -> &C {
        self.console
    }
}

impl<C: ConsoleIo + ?Sized> DerefMut for ColorGuard<'_, C> {
    fn deref_mut(&mut self) -> &mut C {
        self.console
    }
}

impl<C: ConsoleIo + ?Sized> Drop for ColorGuard<'_, C> {
    fn drop(&mut self) {
        self.console.set_foreground_color(self.saved);
    }
}

/// Console over a line reader and a writer.
pub struct TerminalConsole<R, W> {
    input: R,
    output: W,
    color: Color,
    colors_enabled: bool,
    locale: NumberLocale,
}

impl TerminalConsole<io::StdinLock<'static>, io::Stdout> {
    /// Console over the process's stdin and stdout, configured from `config`.
    #[must_use]
    pub fn stdio(config: &ConsoleConfig) -> Self {
        Self::new(io::stdin().lock(), io::stdout())
            .with_colors(config.should_use_color())
            .with_locale(config.locale.clone())
    }
}

impl<R: BufRead, W: Write> TerminalConsole<R, W> {
    /// Plain console with the default locale.
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            color: Color::Default,
            colors_enabled: false,
            locale: NumberLocale::default(),
        }
    }

    /// Enable or disable ANSI color escapes
    #[must_use]
    pub fn with_colors(mut self, enabled: bool) -> Self {
        self.colors_enabled = enabled;
        self
    }

    /// Set the number locale
    #[must_use]
    pub fn with_locale(mut self, locale: NumberLocale) -> Self {
        self.locale = locale;
        self
    }

    /// Check if color escapes are written
    pub fn colors_enabled(&self) -> bool {
        self.colors_enabled
    }

    /// Give back the reader and writer.
    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }

    fn styled(&self, text: &str) -> String {
        let style = if self.colors_enabled {
            self.color.style()
        } else {
            None
        };
        let Some(style) = style else {
            return text.to_string();
        };
        let style = style.force_styling(true);

        // Style each line separately so newlines stay outside the escapes.
        let mut out = String::with_capacity(text.len() + 16);
        for (i, line) in text.split('\n').enumerate() {
            if i > 0 {
                out.push('\n');
            }
            if !line.is_empty() {
                out.push_str(&style.apply_to(line).to_string());
            }
        }
        out
    }
}

impl<R: BufRead, W: Write> ConsoleIo for TerminalConsole<R, W> {
    fn read_line(&mut self) -> Option<String> {
        let mut line = Vec::new();
        match self.input.read_until(b'\n', &mut line) {
            Ok(0) => {
                log::debug!(target: targets::CONSOLE, "End of input");
                None
            }
            Ok(_) => {
                if line.ends_with(b"\n") {
                    line.pop();
                    if line.ends_with(b"\r") {
                        line.pop();
                    }
                }
                // Undecodable bytes become U+FFFD; the rest of the line is kept.
                Some(String::from_utf8_lossy(&line).into_owned())
            }
            Err(e) => {
                log::warn!(target: targets::CONSOLE, "Failed to read input: {e}");
                None
            }
        }
    }

    fn write_str(&mut self, text: &str) -> BasicsResult<()> {
        let text = self.styled(text);
        self.output.write_all(text.as_bytes())?;
        self.output.flush()?;
        Ok(())
    }

    fn foreground_color(&self) -> Color {
        self.color
    }

    fn set_foreground_color(&mut self, color: Color) {
        log::trace!(target: targets::CONSOLE, "Foreground color {:?} -> {:?}", self.color, color);
        self.color = color;
    }

    fn locale(&self) -> &NumberLocale {
        &self.locale
    }
}
