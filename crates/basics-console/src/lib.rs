#![forbid(unsafe_code)]
#![doc = include_str!("../README.md")]

pub mod chars;
pub mod config;
pub mod console;
pub mod detection;
pub mod error;
pub mod host;
pub mod limits;
pub mod locale;
pub mod logging; // stderr logger (ConsoleLogger)
pub mod numeric;
pub mod report;
pub mod template;
pub mod testing; // Test utilities

pub use config::ConsoleConfig;
pub use console::{Color, ColorGuard, ConsoleIo, TerminalConsole};
pub use detection::{DisplayContext, should_enable_color};
pub use error::{BasicsError, BasicsResult};
pub use host::{HostEnvironment, SystemHost};
pub use locale::NumberLocale;
pub use logging::{ConsoleLogger, ConsoleLoggerBuilder};
pub use template::{Value, interpolate};
