//! Splitting an input line into pipe/redirect stages.
//!
//! The line is cut right after every `|` and `>`; the operator stays with
//! the stage before it. Quotes are not considered, so `echo "a|b"` is two
//! stages.

use std::fmt;

use crate::core::error::PipelineError;

// =============================================================================
// Operator / Segment
// =============================================================================

/// Operator terminating a segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operator {
    /// `|`: output becomes trailing arguments of the next command
    Pipe,
    /// `>`: output is written to the file named by the next segment
    Redirect,
}

impl Operator {
    fn from_char(c: char) -> Option<Self> {
        match c {
            '|' => Some(Self::Pipe),
            '>' => Some(Self::Redirect),
            _ => None,
        }
    }

    /// The operator's character.
    pub fn as_char(self) -> char {
        match self {
            Self::Pipe => '|',
            Self::Redirect => '>',
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// One stage of an input line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Segment {
    /// Stage text without its trailing operator
    pub text: String,
    /// Trailing operator (`None` only for the last segment)
    pub operator: Option<Operator>,
}

impl Segment {
    /// True when the stage has no command text.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Destination path of a redirect: the text with all spaces removed.
    pub fn destination(&self) -> String {
        self.text.chars().filter(|c| *c != ' ').collect()
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.operator {
            Some(op) => write!(f, "{}{}", self.text, op),
            None => write!(f, "{}", self.text),
        }
    }
}

// =============================================================================
// Splitting
// =============================================================================

/// Split `line` after every operator.
///
/// Always returns at least one segment. The last segment has no operator
/// and is empty when the line ends with one.
pub fn split(line: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut current = String::new();

    for c in line.chars() {
        match Operator::from_char(c) {
            Some(op) => segments.push(Segment {
                text: std::mem::take(&mut current),
                operator: Some(op),
            }),
            None => current.push(c),
        }
    }

    segments.push(Segment {
        text: current,
        operator: None,
    });
    segments
}

/// Reject chains with an empty stage.
///
/// A blank stage followed by an operator reports that operator; a blank
/// final stage reports `newline`.
pub fn validate(segments: &[Segment]) -> Result<(), PipelineError> {
    if segments.len() < 2 {
        return Ok(());
    }

    match segments.iter().find(|segment| segment.is_blank()) {
        Some(segment) => Err(PipelineError::EmptySegment {
            token: segment
                .operator
                .map(|op| op.to_string())
                .unwrap_or_else(|| "newline".to_string()),
        }),
        None => Ok(()),
    }
}

// =============================================================================
// Tests
// =============================================================================
