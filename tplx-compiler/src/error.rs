//! The single error taxonomy of the compiler.
//!
//! Every failure surfaces as a [`SyntaxError`] raised while parsing; the
//! later stages operate on a well-formed tree and cannot fail.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SyntaxError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxErrorKind {
    /// `</b>` closing a `<a>`, compared as raw template text.
    MismatchedTag,
    /// A literal tag name containing an uppercase character.
    UppercaseTag,
    /// Anything the grammar itself rejects.
    Unexpected,
}

/// Location in the template source. `line` and `column` are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn from_offset(source: &str, offset: usize) -> Self {
        let mut line = 1;
        let mut column = 1;
        for (i, ch) in source.char_indices() {
            if i >= offset {
                break;
            }
            if ch == '\n' {
                line += 1;
                column = 1;
            } else {
                column += 1;
            }
        }
        Self { offset, line, column }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("SyntaxError: {message} ({}:{})", .position.line, .position.column)]
pub struct SyntaxError {
    pub kind: SyntaxErrorKind,
    pub position: Position,
    pub message: String,
}

impl SyntaxError {
    pub fn new(kind: SyntaxErrorKind, position: Position, message: impl Into<String>) -> Self {
        Self { kind, position, message: message.into() }
    }

    pub(crate) fn from_pest<R: pest::RuleType>(source: &str, err: pest::error::Error<R>) -> Self {
        let offset = match err.location {
            pest::error::InputLocation::Pos(p) => p,
            pest::error::InputLocation::Span((start, _)) => start,
        };
        let message = match &err.variant {
            pest::error::ErrorVariant::CustomError { message } => message.clone(),
            pest::error::ErrorVariant::ParsingError { .. } => {
                let found = source[offset..].chars().next();
                match found {
                    Some(c) => format!("unexpected {c:?}"),
                    None => "unexpected end of template".to_string(),
                }
            }
        };
        Self::new(SyntaxErrorKind::Unexpected, Position::from_offset(source, offset), message)
    }

    /// Render the error with the offending source line and a caret.
    pub fn format_with_source(&self, source: &str) -> String {
        let Position { line, column, .. } = self.position;
        let source_line = source.lines().nth(line.saturating_sub(1)).unwrap_or("");
        let pointer = " ".repeat(column.saturating_sub(1)) + "^";
        format!(
            "SyntaxError: {}\n --> {line}:{column}\n  |\n{line:>3} | {source_line}\n    | {pointer}",
            self.message
        )
    }
}
