//! TestConsole for capturing output in tests
//!
//! A [`ConsoleIo`] with scripted input that captures everything written
//! instead of touching stdin/stdout.

use std::io::{Cursor, Write};
use std::sync::{Arc, Mutex};

use strip_ansi_escapes::strip;

use crate::console::{Color, ConsoleIo, TerminalConsole};
use crate::error::BasicsResult;
use crate::locale::NumberLocale;

/// A console that captures output for testing
///
/// Input lines are supplied up front; once they run out reads return
/// `None`, like a closed stdin. Colors are always rendered so tests can
/// check the escapes in `raw_output()`, while `output()` strips them.
pub struct TestConsole {
    inner: TerminalConsole<Cursor<Vec<u8>>, BufferWriter>,
    buffer: Arc<Mutex<String>>,
    color_changes: Vec<Color>,
}

impl TestConsole {
    /// Create a test console with no input
    #[must_use]
    pub fn new() -> Self {
        Self::with_input(&[])
    }

    /// Create a test console that answers reads with `lines`
    #[must_use]
    pub fn with_input(lines: &[&str]) -> Self {
        let mut input = String::new();
        for line in lines {
            input.push_str(line);
            input.push('\n');
        }

        let buffer = Arc::new(Mutex::new(String::new()));
        let writer = BufferWriter(buffer.clone());

        Self {
            inner: TerminalConsole::new(Cursor::new(input.into_bytes()), writer).with_colors(true),
            buffer,
            color_changes: Vec::new(),
        }
    }

    /// Use `locale` for numbers
    #[must_use]
    pub fn with_locale(mut self, locale: NumberLocale) -> Self {
        self.inner = self.inner.with_locale(locale);
        self
    }

    /// All captured output split into lines (ANSI codes stripped)
    #[must_use]
    pub fn output(&self) -> Vec<String> {
        self.output_string().lines().map(String::from).collect()
    }

    /// All captured output (ANSI codes stripped)
    #[must_use]
    pub fn output_string(&self) -> String {
        let raw = self.raw_output_string();
        String::from_utf8_lossy(&strip(raw.as_bytes())).into_owned()
    }

    /// All captured output split into lines (with ANSI codes)
    #[must_use]
    pub fn raw_output(&self) -> Vec<String> {
        self.raw_output_string().lines().map(String::from).collect()
    }

    /// All captured output (with ANSI codes)
    #[must_use]
    pub fn raw_output_string(&self) -> String {
        self.buffer.lock().map(|b| b.clone()).unwrap_or_default()
    }

    /// Every color set, in order
    #[must_use]
    pub fn color_changes(&self) -> Vec<Color> {
        self.color_changes.clone()
    }

    /// Check if output contains a string (case-insensitive)
    #[must_use]
    pub fn contains(&self, needle: &str) -> bool {
        let output = self.output_string().to_lowercase();
        output.contains(&needle.to_lowercase())
    }

    /// Check if output contains all of the given strings
    #[must_use]
    pub fn contains_all(&self, needles: &[&str]) -> bool {
        needles.iter().all(|n| self.contains(n))
    }

    /// Check if output matches a regex pattern
    #[must_use]
    pub fn matches(&self, pattern: &str) -> bool {
        match regex::Regex::new(pattern) {
            Ok(re) => re.is_match(&self.output_string()),
            Err(_) => false,
        }
    }

    /// Assert that output contains a string
    ///
    /// # Panics
    ///
    /// Panics if the output does not contain the needle string.
    pub fn assert_contains(&self, needle: &str) {
        assert!(
            self.contains(needle),
            "Output did not contain '{}'. Actual output:\n{}",
            needle,
            self.output_string()
        );
    }

    /// Assert that output does NOT contain a string
    ///
    /// # Panics
    ///
    /// Panics if the output contains the needle string.
    pub fn assert_not_contains(&self, needle: &str) {
        assert!(
            !self.contains(needle),
            "Output unexpectedly contained '{}'. Actual output:\n{}",
            needle,
            self.output_string()
        );
    }

    /// Assert output has specific number of lines
    ///
    /// # Panics
    ///
    /// Panics if the line count doesn't match expected.
    pub fn assert_line_count(&self, expected: usize) {
        let actual = self.output().len();
        assert_eq!(
            actual,
            expected,
            "Expected {} lines but got {}. Actual output:\n{}",
            expected,
            actual,
            self.output_string()
        );
    }

    /// Clear the captured output
    pub fn clear(&self) {
        if let Ok(mut buf) = self.buffer.lock() {
            buf.clear();
        }
    }
}

impl Default for TestConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TestConsole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TestConsole")
            .field("line_count", &self.output().len())
            .field("color", &self.inner.foreground_color())
            .finish()
    }
}

impl ConsoleIo for TestConsole {
    fn read_line(&mut self) -> Option<String> {
        self.inner.read_line()
    }

    fn write_str(&mut self, text: &str) -> BasicsResult<()> {
        self.inner.write_str(text)
    }

    fn foreground_color(&self) -> Color {
        self.inner.foreground_color()
    }

    fn set_foreground_color(&mut self, color: Color) {
        self.color_changes.push(color);
        self.inner.set_foreground_color(color);
    }

    fn locale(&self) -> &NumberLocale {
        self.inner.locale()
    }
}

/// Writer that captures to a shared buffer
struct BufferWriter(Arc<Mutex<String>>);

impl Write for BufferWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        if let Ok(mut buffer) = self.0.lock() {
            buffer.push_str(&String::from_utf8_lossy(buf));
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::Value;

    #[test]
    fn test_output_capture() {
        let mut tc = TestConsole::new();
        tc.write_line("Hello, {0}!", &[Value::from("world")]).unwrap();
        assert!(tc.contains("Hello"));
        assert!(tc.contains("world"));
        assert_eq!(tc.output(), vec!["Hello, world!"]);
    }

    #[test]
    fn test_scripted_input_then_eof() {
        let mut tc = TestConsole::with_input(&["first", "second"]);
        assert_eq!(tc.read_line().as_deref(), Some("first"));
        assert_eq!(tc.read_line().as_deref(), Some("second"));
        assert_eq!(tc.read_line(), None);
        assert_eq!(tc.read_line(), None);
    }

    #[test]
    fn test_contains_case_insensitive() {
        let mut tc = TestConsole::new();
        tc.write_line("Hello World", &[]).unwrap();
        assert!(tc.contains("hello"));
        assert!(tc.contains("WORLD"));
    }

    #[test]
    fn test_contains_all() {
        let mut tc = TestConsole::new();
        tc.write_line("The quick brown fox", &[]).unwrap();
        assert!(tc.contains_all(&["quick", "brown", "fox"]));
        assert!(!tc.contains_all(&["quick", "lazy"]));
    }

    #[test]
    fn test_raw_output_keeps_escapes() {
        let mut tc = TestConsole::new();
        {
            let mut guard = tc.with_color(Color::Red);
            guard.write_line("alert", &[]).unwrap();
        }
        assert!(tc.raw_output()[0].contains('\u{1b}'));
        assert_eq!(tc.output(), vec!["alert"]);
        assert_eq!(tc.color_changes(), vec![Color::Red, Color::Default]);
    }

    #[test]
    fn test_clear() {
        let mut tc = TestConsole::new();
        tc.write_line("Some output", &[]).unwrap();
        assert!(!tc.output().is_empty());
        tc.clear();
        assert!(tc.output().is_empty());
    }

    #[test]
    fn test_matches_regex() {
        let mut tc = TestConsole::new();
        tc.write_line("Number of processors: {0}", &[Value::from(12usize)])
            .unwrap();
        assert!(tc.matches(r"processors: \d+"));
        assert!(!tc.matches(r"processors: [a-z]+"));
    }

    #[test]
    fn test_with_locale() {
        let mut tc = TestConsole::new().with_locale(NumberLocale::invariant());
        tc.write_line("{0:c}", &[Value::from(5)]).unwrap();
        tc.assert_contains("¤5.00");
    }

    #[test]
    fn test_assert_line_count() {
        let mut tc = TestConsole::new();
        tc.write_line("one", &[]).unwrap();
        tc.newline().unwrap();
        tc.assert_line_count(2);
    }
}
