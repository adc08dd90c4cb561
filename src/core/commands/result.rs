//! Command execution result type.

/// Result of executing a command.
///
/// Commands only produce text; where it ends up (terminal, pipe buffer or
/// file) is decided by the session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CommandResult {
    /// Output lines, in order
    pub output: Vec<String>,
}

impl CommandResult {
    /// Create a result from several lines.
    pub fn output(lines: Vec<String>) -> Self {
        Self { output: lines }
    }

    /// Create a result with a single line.
    pub fn line(line: impl Into<String>) -> Self {
        Self {
            output: vec![line.into()],
        }
    }

    /// Create an empty result (no output).
    pub fn empty() -> Self {
        Self { output: vec![] }
    }
}
