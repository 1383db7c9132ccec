use std::fmt;
use thiserror::Error;

/// Location in the input text for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

impl SourceLocation {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Locate a byte offset in `text`, counting CR, LF and CRLF as one line break each.
    /// Columns count characters, starting at 1.
    pub fn of_offset(text: &str, offset: usize) -> Self {
        let mut line = 1;
        let mut column = 1;
        let mut chars = text[..offset].chars().peekable();

        while let Some(ch) = chars.next() {
            match ch {
                '\r' => {
                    if chars.peek() == Some(&'\n') {
                        chars.next();
                    }
                    line += 1;
                    column = 1;
                }
                '\n' => {
                    line += 1;
                    column = 1;
                }
                _ => column += 1,
            }
        }

        Self { line, column }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// All error types for csvscan
#[derive(Error, Debug)]
pub enum Error {
    #[error("configuration error: {message}")]
    Configuration { message: String },

    #[error("invalid input: {0}")]
    InvalidInput(#[from] std::str::Utf8Error),

    #[error("unterminated quoted field starting at {location}")]
    UnterminatedQuote { location: SourceLocation },
}

impl Error {
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn unterminated_quote(location: SourceLocation) -> Self {
        Self::UnterminatedQuote { location }
    }
}

/// Result type alias for csvscan operations
pub type Result<T> = std::result::Result<T, Error>;
