//! Terminal-related data types.

use std::fmt;

/// Where command output goes while a line is being processed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputMode {
    /// Lines go straight to the host.
    #[default]
    Direct,
    /// Lines are captured in the session buffer for the next pipeline stage.
    Buffered,
}

/// Shell prompt shown by the host before each read.
///
/// Format: `{user}@{host}:{cwd}$  ` (two trailing spaces).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Prompt<'a> {
    pub user: &'a str,
    pub host: &'a str,
    pub working_directory: &'a str,
}

impl fmt::Display for Prompt<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}:{}$  ", self.user, self.host, self.working_directory)
    }
}
