//! The two console reports.
//!
//! - [`basic_io`] - user input echo, numeric formats, type limits, char predicates
//! - [`environment`] - drives, OS, processor count, runtime version

pub mod basic_io;
pub mod environment;

pub use basic_io::run as run_basic_console_io;
pub use environment::show_environment_details;
