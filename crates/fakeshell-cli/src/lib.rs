//! Terminal host for a fakeshell session.
//!
//! Reads lines from the real terminal (or from `-c` arguments), hands them
//! to a [`Session`] and prints the result.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use fakeshell::{Session, ShellConfig};
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::Editor;

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "fakeshell", version, about = "A pretend Unix shell over an in-memory filesystem")]
pub struct Args {
    /// Configuration file (TOML, or JSON with a .json extension)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the user name shown in the prompt
    #[arg(long)]
    pub user: Option<String>,

    /// Override the host name shown in the prompt
    #[arg(long)]
    pub host: Option<String>,

    /// Run these lines instead of reading from the terminal
    #[arg(short = 'c', long = "command", value_name = "LINE")]
    pub commands: Vec<String>,
}

impl Args {
    /// Build the session configuration from the file and overrides.
    pub fn shell_config(&self) -> Result<ShellConfig> {
        let mut config = match &self.config {
            Some(path) => ShellConfig::load(path)
                .with_context(|| format!("Failed to load config: {}", path.display()))?,
            None => ShellConfig::default(),
        };
        if let Some(user) = &self.user {
            config.user = user.clone();
        }
        if let Some(host) = &self.host {
            config.host = host.clone();
        }
        config.validate().context("Invalid config overrides")?;
        Ok(config)
    }
}

/// Run `lines` through the session, writing output to `out`.
///
/// Stops early if a line runs `exit`.
pub fn run_commands<W: Write>(session: &mut Session, lines: &[String], out: &mut W) -> Result<()> {
    write_lines(out, session.drain_output())?;
    for line in lines {
        if !session.is_running() {
            break;
        }
        write_lines(out, session.handle_input(line))?;
    }
    Ok(())
}

/// Interactive loop: prompt, read, execute, print.
pub fn run_interactive(session: &mut Session) -> Result<()> {
    let mut rl: Editor<(), DefaultHistory> =
        Editor::new().context("Failed to create editor")?;
    let mut stdout = std::io::stdout();

    write_lines(&mut stdout, session.drain_output())?;

    while session.is_running() {
        match rl.readline(&session.prompt()) {
            Ok(line) => {
                if let Err(e) = rl.add_history_entry(line.as_str()) {
                    tracing::warn!("Failed to add history entry: {}", e);
                }
                write_lines(&mut stdout, session.handle_input(&line))?;
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                continue;
            }
            Err(ReadlineError::Eof) => break,
            Err(err) => anyhow::bail!("Failed to read input: {}", err),
        }
    }

    tracing::debug!("interactive loop finished");
    Ok(())
}

fn write_lines<W: Write>(out: &mut W, lines: Vec<String>) -> Result<()> {
    for line in lines {
        writeln!(out, "{}", line)?;
    }
    out.flush()?;
    Ok(())
}
