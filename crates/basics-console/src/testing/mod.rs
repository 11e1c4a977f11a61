//! Testing utilities for console reports
//!
//! Provides `TestConsole` for capturing and asserting on console output and
//! `FakeHost` for deterministic environment reports.

mod fake_host;
mod test_console;

pub use fake_host::FakeHost;
pub use test_console::TestConsole;
