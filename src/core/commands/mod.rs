//! Built-in command parsing and execution.
//!
//! This module provides:
//! - `Command` enum for parsed built-ins
//! - `CommandResult` for command output
//! - `execute_command` to run a command against the shell state
//!
//! # Architecture
//!
//! The first token of a segment selects a `Command` variant (matched
//! case-insensitively), the remaining tokens become its operands, and
//! `execute_command` runs it. Failures are `CommandError`s whose message
//! becomes the command's only output line.

mod execute;
mod grep;
mod result;

pub use execute::execute_command;
pub use result::CommandResult;

use std::fmt;

// =============================================================================
// Path Argument Type
// =============================================================================

/// A path argument passed to a command (e.g., `cd usr`, `cat notes.txt`).
///
/// Stored as typed; it is evaluated against the working directory at
/// execution time, and error messages quote it verbatim.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathArg(String);

impl PathArg {
    /// Create a new path argument from a string.
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// Get the path as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PathArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for PathArg {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl PartialEq<&str> for PathArg {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

// =============================================================================
// Command Enum
// =============================================================================

/// Parsed built-in command.
///
/// Commands that take a path only ever look at their first operand; any
/// further operands (including lines piped in) are ignored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Clear,
    /// List a directory (working directory when `None`)
    Ls(Option<PathArg>),
    /// Change directory (no-op when `None`)
    Cd(Option<PathArg>),
    Exit,
    Pwd,
    Rm(Option<PathArg>),
    Touch(Option<PathArg>),
    Mkdir(Option<PathArg>),
    Cat(Option<PathArg>),
    /// Print the first operand only
    Echo(Option<String>),
    /// Regex match against a file or against the operands themselves
    Grep {
        pattern: Option<String>,
        operands: Vec<String>,
    },
    /// Not a built-in; holds the name as typed
    Unknown(String),
}

impl Command {
    /// Parse command from name and arguments.
    pub fn parse(name: &str, args: &[String]) -> Self {
        let path = || args.first().map(|arg| PathArg::new(arg.as_str()));

        match name.to_lowercase().as_str() {
            "clear" => Self::Clear,
            "ls" => Self::Ls(path()),
            "cd" => Self::Cd(path()),
            "exit" => Self::Exit,
            "pwd" => Self::Pwd,
            "rm" => Self::Rm(path()),
            "touch" => Self::Touch(path()),
            "mkdir" => Self::Mkdir(path()),
            "cat" => Self::Cat(path()),
            "echo" => Self::Echo(args.first().cloned()),
            "grep" => Self::Grep {
                pattern: args.first().cloned(),
                operands: args.iter().skip(1).cloned().collect(),
            },
            _ => Self::Unknown(name.to_string()),
        }
    }

    /// Parse a full token list (command name first).
    ///
    /// Returns `None` for an empty token list or an empty command name
    /// (such as a bare `""`).
    pub fn from_tokens(tokens: &[String]) -> Option<Self> {
        let (name, args) = tokens.split_first()?;
        if name.is_empty() {
            return None;
        }
        Some(Self::parse(name, args))
    }
}

// =============================================================================
// Tests
// =============================================================================
