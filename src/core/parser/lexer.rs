//! Lexer for tokenizing one command segment.
//!
//! Handles:
//! - Whitespace-separated words
//! - Double-quoted strings (`"hello world"` is one argument)
//!
//! There are no escape sequences. An unmatched `"` swallows the rest of the
//! segment into a single token.

// =============================================================================
// Lexer
// =============================================================================

/// Lexer producing argument tokens from a segment's command text.
pub struct Lexer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given input
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Tokenize the entire input into a vector
    pub fn tokenize(self) -> Vec<String> {
        self.collect()
    }

    fn current_char(&self) -> char {
        self.input[self.pos..].chars().next().unwrap_or('\0')
    }
}

impl Iterator for Lexer<'_> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        let mut token = String::new();
        let mut started = false;
        let mut quoted = false;

        while self.pos < self.input.len() {
            let c = self.current_char();
            self.pos += c.len_utf8();

            if c == '"' {
                if quoted {
                    // Closing quote always ends the token, even an empty one
                    return Some(token);
                }
                quoted = true;
                started = true;
            } else if c.is_whitespace() && !quoted {
                if started {
                    return Some(token);
                }
            } else {
                token.push(c);
                started = true;
            }
        }

        if token.is_empty() { None } else { Some(token) }
    }
}

/// Split command text into tokens. The first token is the command name.
pub fn tokenize(input: &str) -> Vec<String> {
    Lexer::new(input).tokenize()
}

// =============================================================================
// Tests
// =============================================================================
