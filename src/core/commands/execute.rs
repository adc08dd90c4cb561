//! Command execution logic.
//!
//! Contains the `execute_command` function that runs parsed commands
//! against the virtual filesystem and returns their output.

use tracing::debug;

use crate::config::{CLEAR_LINE_COUNT, LS_COLUMNS};
use crate::core::error::CommandError;
use crate::core::path::{basename, evaluate, full_path, parent_of};
use crate::core::session::ShellState;
use crate::core::VirtualFs;
use crate::models::FileEntry;

use super::{grep, Command, CommandResult, PathArg};

/// Execute a parsed command and return its output.
///
/// `cd` and `exit` mutate `state`; `rm`, `mkdir` and `touch` mutate `fs`.
/// Failures are rendered into the output, never returned.
pub fn execute_command(cmd: Command, state: &mut ShellState, fs: &mut VirtualFs) -> CommandResult {
    debug!(command = ?cmd, cwd = %state.working_directory, "executing");

    let result = match cmd {
        Command::Clear => Ok(CommandResult::line("\n".repeat(CLEAR_LINE_COUNT))),
        Command::Ls(path) => execute_ls(path, state, fs),
        Command::Cd(path) => execute_cd(path, state, fs),
        Command::Exit => {
            state.running = false;
            Ok(CommandResult::empty())
        }
        Command::Pwd => Ok(CommandResult::line(state.working_directory.clone())),
        Command::Rm(path) => execute_rm(path, state, fs),
        Command::Touch(path) => execute_touch(path, state, fs),
        Command::Mkdir(path) => execute_mkdir(path, state, fs),
        Command::Cat(path) => execute_cat(path, state, fs),
        Command::Echo(text) => Ok(CommandResult::line(text.unwrap_or_default())),
        Command::Grep { pattern, operands } => grep::execute_grep(pattern, &operands, state, fs),
        Command::Unknown(name) => Err(CommandError::NotFound(name)),
    };

    result.unwrap_or_else(|err| CommandResult::line(err.to_string()))
}

/// Execute `ls` command.
fn execute_ls(
    path: Option<PathArg>,
    state: &ShellState,
    fs: &VirtualFs,
) -> Result<CommandResult, CommandError> {
    let directory = match path {
        None => state.working_directory.clone(),
        Some(path) => {
            let resolved = evaluate(path.as_str(), &state.working_directory);
            let index = fs
                .lookup(&resolved, false)
                .ok_or_else(|| CommandError::LsNoSuchFile(path.to_string()))?;
            fs.get(index).map(full_path).unwrap_or(resolved)
        }
    };

    let names: Vec<String> = fs
        .children_of(&directory)
        .into_iter()
        .map(FileEntry::display_name)
        .collect();

    Ok(CommandResult::output(
        names.chunks(LS_COLUMNS).map(|row| row.join("\t")).collect(),
    ))
}

/// Execute `cd` command.
fn execute_cd(
    path: Option<PathArg>,
    state: &mut ShellState,
    fs: &VirtualFs,
) -> Result<CommandResult, CommandError> {
    let Some(path) = path else {
        return Ok(CommandResult::empty());
    };

    match path.as_str() {
        "./" => {}
        ".." | "../" => state.working_directory = parent_of(&state.working_directory),
        raw => {
            let resolved = evaluate(raw, &state.working_directory);
            // Files never match a directory lookup, so they read as missing
            let entry = fs
                .lookup(&resolved, true)
                .and_then(|index| fs.get(index))
                .ok_or_else(|| CommandError::CdNoSuchFile(path.to_string()))?;
            state.working_directory = full_path(entry);
        }
    }

    Ok(CommandResult::empty())
}

/// Execute `rm` command. Directories are removed without their contents.
fn execute_rm(
    path: Option<PathArg>,
    state: &ShellState,
    fs: &mut VirtualFs,
) -> Result<CommandResult, CommandError> {
    let path = path.ok_or(CommandError::RmMissingOperand)?;
    let resolved = evaluate(path.as_str(), &state.working_directory);
    let index = fs
        .lookup(&resolved, false)
        .ok_or_else(|| CommandError::RmNoSuchFile(path.to_string()))?;

    if fs.get(index).is_some_and(FileEntry::is_root) {
        return Err(CommandError::RmRoot(path.to_string()));
    }

    fs.remove(index);
    Ok(CommandResult::empty())
}

/// Execute `touch` command.
///
/// The parent directory is not checked, so files can be created under
/// directories that do not exist.
fn execute_touch(
    path: Option<PathArg>,
    state: &ShellState,
    fs: &mut VirtualFs,
) -> Result<CommandResult, CommandError> {
    let Some(path) = path else {
        return Ok(CommandResult::empty());
    };

    let resolved = evaluate(path.as_str(), &state.working_directory);
    if resolved.is_empty() || fs.lookup(&resolved, false).is_some() {
        return Ok(CommandResult::empty());
    }

    fs.add(FileEntry::file(parent_of(&resolved), basename(&resolved), ""));
    Ok(CommandResult::empty())
}

/// Execute `mkdir` command.
fn execute_mkdir(
    path: Option<PathArg>,
    state: &ShellState,
    fs: &mut VirtualFs,
) -> Result<CommandResult, CommandError> {
    let path = path.ok_or(CommandError::MkdirMissingOperand)?;
    let resolved = evaluate(path.as_str(), &state.working_directory);
    let parent = parent_of(&resolved);

    if fs.lookup(&parent, true).is_none() {
        return Err(CommandError::MkdirNoSuchFile(path.to_string()));
    }
    if fs.lookup(&resolved, false).is_some() {
        return Err(CommandError::MkdirExists(path.to_string()));
    }

    fs.add(FileEntry::directory(parent, basename(&resolved)));
    Ok(CommandResult::empty())
}

/// Execute `cat` command.
fn execute_cat(
    path: Option<PathArg>,
    state: &ShellState,
    fs: &VirtualFs,
) -> Result<CommandResult, CommandError> {
    let Some(path) = path else {
        return Ok(CommandResult::empty());
    };

    let resolved = evaluate(path.as_str(), &state.working_directory);
    let entry = fs
        .lookup(&resolved, false)
        .and_then(|index| fs.get(index))
        .ok_or_else(|| CommandError::CatNoSuchFile(path.to_string()))?;

    match entry.content() {
        Some(text) => Ok(CommandResult::line(text)),
        None => Err(CommandError::CatIsDirectory(entry.name.clone())),
    }
}

// =============================================================================
// Tests
// =============================================================================
