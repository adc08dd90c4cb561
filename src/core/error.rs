//! Error types for the shell.
//!
//! Command failures are never surfaced to the host as Rust errors: their
//! `Display` output is the exact message the user sees on the terminal.
//!
//! - [`CommandError`] - Built-in command failures and usage messages
//! - [`PipelineError`] - Malformed pipe/redirect chains
//! - [`ConfigError`] - Configuration loading, before any session exists

use thiserror::Error;

/// Built-in command failures, rendered as terminal output.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// Name does not match any built-in
    #[error("{0}: command not found")]
    NotFound(String),

    #[error("ls: cannot access '{0}': No such file or directory")]
    LsNoSuchFile(String),

    #[error("cd: '{0}': No such file or directory")]
    CdNoSuchFile(String),

    #[error("rm: missing operand")]
    RmMissingOperand,
    #[error("rm: cannot remove '{0}': No such file or directory")]
    RmNoSuchFile(String),
    /// The root entry can never be removed
    #[error("rm: cannot remove '{0}': Permission denied")]
    RmRoot(String),

    #[error("mkdir: missing operand")]
    MkdirMissingOperand,
    #[error("mkdir: cannot create directory '{0}': No such file or directory")]
    MkdirNoSuchFile(String),
    #[error("mkdir: cannot create directory '{0}': File exists")]
    MkdirExists(String),

    #[error("cat: '{0}': No such file or directory")]
    CatNoSuchFile(String),
    #[error("cat: '{0}': Is a directory")]
    CatIsDirectory(String),

    #[error("usage: grep PATTERN [FILE]")]
    GrepUsage,
    #[error("grep: invalid pattern '{0}'")]
    GrepInvalidPattern(String),
    #[error("grep: '{0}': Is a directory")]
    GrepIsDirectory(String),

    /// Redirect target is an existing directory
    #[error("{0}: Is a directory")]
    RedirectIsDirectory(String),
}

/// Structural problems in a pipe/redirect chain.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PipelineError {
    /// A stage has no command text: `| grep`, `ls | | wc`, `echo a >`
    #[error("syntax error near unexpected token '{token}'")]
    EmptySegment { token: String },
}

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid TOML config: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),
    /// Parsed fine but describes an impossible filesystem or identity
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_messages() {
        assert_eq!(
            CommandError::NotFound("foo".to_string()).to_string(),
            "foo: command not found"
        );
        assert_eq!(
            CommandError::RmNoSuchFile("nope".to_string()).to_string(),
            "rm: cannot remove 'nope': No such file or directory"
        );
        assert_eq!(
            CommandError::MkdirExists("/usr/new".to_string()).to_string(),
            "mkdir: cannot create directory '/usr/new': File exists"
        );
    }

    #[test]
    fn test_pipeline_message() {
        let err = PipelineError::EmptySegment {
            token: "newline".to_string(),
        };
        assert_eq!(err.to_string(), "syntax error near unexpected token 'newline'");
    }
}
