//! Basic Console I/O - prompts for a name and age, then prints numeric
//! formats, type boundaries and character predicates.

#![forbid(unsafe_code)]

use std::process::ExitCode;

use clap::Parser;

use basics_console::logging::{ConsoleLoggerBuilder, targets};
use basics_console::report::run_basic_console_io;
use basics_console::{ConsoleConfig, TerminalConsole};

/// Echo a greeting and demonstrate numeric formats, type limits and char tests.
///
/// Reads two lines from stdin. Color, number locale and logging follow
/// BASICS_FORCE_COLOR, BASICS_PLAIN / NO_COLOR, BASICS_LOCALE and BASICS_LOG.
#[derive(Parser)]
#[command(name = "basic-console-io")]
#[command(version, about, long_about = None)]
struct Cli {}

fn main() -> ExitCode {
    let _cli = Cli::parse();

    let config = ConsoleConfig::from_env();
    ConsoleLoggerBuilder::from_config(&config).try_init();
    config.log_warnings();
    log::debug!(target: targets::BASICS, "Using locale {}", config.locale.name);

    let mut terminal = TerminalConsole::stdio(&config);
    match run_basic_console_io(&mut terminal) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e}", console::style("Error:").red().bold());
            ExitCode::FAILURE
        }
    }
}
