//! System Environment - prints logical drives, OS, processor count and the
//! compiler version.

#![forbid(unsafe_code)]

use std::process::ExitCode;

use clap::Parser;

use basics_console::logging::ConsoleLoggerBuilder;
use basics_console::report::show_environment_details;
use basics_console::{ConsoleConfig, SystemHost, TerminalConsole};

/// Show facts about the host machine and the toolchain this was built with.
#[derive(Parser)]
#[command(name = "system-environment")]
#[command(version, about, long_about = None)]
struct Cli {}

fn main() -> ExitCode {
    let _cli = Cli::parse();

    let config = ConsoleConfig::from_env();
    ConsoleLoggerBuilder::from_config(&config).try_init();
    config.log_warnings();

    let mut terminal = TerminalConsole::stdio(&config);
    match show_environment_details(&mut terminal, &SystemHost::new()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e}", console::style("Error:").red().bold());
            ExitCode::FAILURE
        }
    }
}
