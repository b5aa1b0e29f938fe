mod cli;

use clap::Parser;
use cli::{Cli, Commands};
use std::process::ExitCode;

fn main() -> ExitCode {
    let mut cli = Cli::parse();
    g4_lint::logging::init_tracing();

    match cli.command.take() {
        Some(Commands::Why { rule, list }) => cli::why::run_why(rule, list),
        None => cli::lint::run_lint(cli),
    }
}
