//! Shell session: state plus the input-line driver.
//!
//! A [`Session`] owns the filesystem, the working directory and the
//! transient pipeline buffer. The host feeds it one line at a time through
//! [`Session::handle_input`] and prints whatever comes back.

use std::mem;

use tracing::{debug, info, trace, warn};

use crate::config::{ShellConfig, ROOT_PATH};
use crate::core::commands::{execute_command, Command};
use crate::core::error::CommandError;
use crate::core::parser::{split, tokenize, validate, Operator, Segment};
use crate::core::path::{basename, evaluate, parent_of};
use crate::core::VirtualFs;
use crate::models::{FileData, FileEntry, OutputMode, Prompt};

// =============================================================================
// ShellState
// =============================================================================

/// The part of the session commands are allowed to change.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShellState {
    /// Current directory, always in directory form (trailing `/`)
    pub working_directory: String,
    /// User name shown in the prompt
    pub user: String,
    /// Host name shown in the prompt
    pub host: String,
    /// Cleared by `exit`; never set again
    pub running: bool,
}

impl ShellState {
    /// Fresh state at the root directory.
    pub fn new(user: impl Into<String>, host: impl Into<String>) -> Self {
        Self {
            working_directory: ROOT_PATH.to_string(),
            user: user.into(),
            host: host.into(),
            running: true,
        }
    }
}

// =============================================================================
// Session
// =============================================================================

/// A single interactive shell.
pub struct Session {
    state: ShellState,
    fs: VirtualFs,
    mode: OutputMode,
    /// Output captured while a pipeline stage runs
    buffer: Vec<String>,
    /// Output waiting to be handed to the host
    output: Vec<String>,
}

impl Session {
    /// Start a session from a configuration.
    ///
    /// The banner, if any, is queued as the first output line.
    pub fn new(config: ShellConfig) -> Self {
        let mut session = Self::with_filesystem(
            ShellState::new(config.user, config.host),
            VirtualFs::from_seeds(&config.files),
        );
        if let Some(banner) = config.banner {
            session.output.push(banner);
        }
        session
    }

    /// Start a session over an existing filesystem, without a banner.
    pub fn with_filesystem(state: ShellState, fs: VirtualFs) -> Self {
        Self {
            state,
            fs,
            mode: OutputMode::Direct,
            buffer: Vec::new(),
            output: Vec::new(),
        }
    }

    /// Process one input line and return the lines to display.
    ///
    /// Pending output (such as the banner) is returned first. Once the
    /// session has stopped, input is ignored.
    pub fn handle_input(&mut self, line: &str) -> Vec<String> {
        if !self.state.running {
            debug!("ignoring input after exit");
            return self.drain_output();
        }

        let segments = split(line);
        if let [segment] = segments.as_slice() {
            self.run_command(&segment.text, Vec::new());
        } else {
            self.run_pipeline(&segments);
        }

        if !self.state.running {
            info!(user = %self.state.user, "session stopped");
        }
        self.drain_output()
    }

    /// Take all output queued for the host.
    pub fn drain_output(&mut self) -> Vec<String> {
        mem::take(&mut self.output)
    }

    /// Prompt string for the host to show before reading input.
    pub fn prompt(&self) -> String {
        Prompt {
            user: &self.state.user,
            host: &self.state.host,
            working_directory: &self.state.working_directory,
        }
        .to_string()
    }

    /// False once `exit` has run.
    pub fn is_running(&self) -> bool {
        self.state.running
    }

    /// Current working directory.
    pub fn working_directory(&self) -> &str {
        &self.state.working_directory
    }

    /// The session's filesystem.
    pub fn filesystem(&self) -> &VirtualFs {
        &self.fs
    }

    /// Current output routing. `Direct` between lines.
    pub fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn emit(&mut self, line: String) {
        match self.mode {
            OutputMode::Direct => self.output.push(line),
            OutputMode::Buffered => self.buffer.push(line),
        }
    }

    /// Tokenize and run one command; `piped` lines become trailing operands.
    fn run_command(&mut self, text: &str, piped: Vec<String>) {
        let mut tokens = tokenize(text);
        trace!(?tokens, piped = piped.len(), "tokenized");
        tokens.extend(piped);

        let Some(cmd) = Command::from_tokens(&tokens) else {
            return;
        };
        let result = execute_command(cmd, &mut self.state, &mut self.fs);
        for line in result.output {
            self.emit(line);
        }
    }

    /// Run a multi-stage line.
    ///
    /// Every stage runs buffered. A stage after `|` receives the buffer as
    /// operands; a stage after `>` names the file the buffer is written to.
    /// Whatever is left in the buffer at the end goes to the host.
    fn run_pipeline(&mut self, segments: &[Segment]) {
        if let Err(err) = validate(segments) {
            warn!(%err, "rejected pipeline");
            self.output.push(err.to_string());
            return;
        }

        debug!(stages = segments.len(), "running pipeline");
        self.mode = OutputMode::Buffered;

        let mut previous: Option<Operator> = None;
        for segment in segments {
            if !self.state.running {
                break;
            }
            debug!(%segment, ?previous, "stage");

            match previous {
                Some(Operator::Redirect) => self.redirect(&segment.destination()),
                Some(Operator::Pipe) => {
                    let piped = mem::take(&mut self.buffer);
                    self.run_command(&segment.text, piped);
                }
                None => self.run_command(&segment.text, Vec::new()),
            }
            previous = segment.operator;
        }

        self.mode = OutputMode::Direct;
        let remaining = mem::take(&mut self.buffer);
        self.output.extend(remaining);
    }

    /// Write the buffer, newline-joined, to `destination`.
    ///
    /// Missing files are created without checking the parent directory.
    fn redirect(&mut self, destination: &str) {
        let content = mem::take(&mut self.buffer).join("\n");
        let resolved = evaluate(destination, &self.state.working_directory);

        let existing = self
            .fs
            .lookup(&resolved, false)
            .and_then(|index| self.fs.get_mut(index));
        if let Some(entry) = existing {
            if entry.is_directory() {
                let err = CommandError::RedirectIsDirectory(destination.to_string());
                self.output.push(err.to_string());
            } else {
                entry.data = FileData::Text(content);
            }
        } else {
            self.fs.add(FileEntry::file(
                parent_of(&resolved),
                basename(&resolved),
                content,
            ));
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(ShellConfig::default())
    }
}
