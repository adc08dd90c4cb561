//! fakeshell CLI entry point.
//!
//! Usage:
//!   fakeshell                      # Interactive session
//!   fakeshell -c 'ls' -c 'pwd'     # Run lines and exit
//!   fakeshell --config shell.toml  # Custom identity and filesystem

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use fakeshell::Session;
use fakeshell_cli::{run_commands, run_interactive, Args};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> ExitCode {
    // Logs go to stderr so they never mix with shell output (respects RUST_LOG)
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:?}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<()> {
    let mut session = Session::new(args.shell_config()?);

    if args.commands.is_empty() {
        run_interactive(&mut session)
    } else {
        run_commands(&mut session, &args.commands, &mut std::io::stdout())
    }
}
