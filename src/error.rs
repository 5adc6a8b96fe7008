//! Errors reported at the text boundary.

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Input text that is not a valid command.
#[derive(Debug, Error, Diagnostic)]
#[error("failed to parse operator products")]
#[diagnostic(code(wick::parse))]
pub struct ParseError {
    /// Source text being parsed
    #[source_code]
    pub src: NamedSource<String>,
    /// Position where parsing failed
    #[label("here")]
    pub span: SourceSpan,
    /// What the parser expected
    #[help]
    pub reason: Option<String>,
}

impl ParseError {
    /// A failure at byte `offset` of `src`. The span covers the character
    /// there, or the last character when input ended early.
    pub fn new(name: &str, src: &str, offset: usize, reason: String) -> Self {
        let span = match src.get(offset..).and_then(|rest| rest.chars().next()) {
            Some(c) => (offset, c.len_utf8()),
            None => src
                .char_indices()
                .next_back()
                .map_or((offset, 0), |(at, c)| (at, c.len_utf8())),
        };
        ParseError {
            src: NamedSource::new(name, src.to_owned()),
            span: span.into(),
            reason: (!reason.is_empty()).then_some(reason),
        }
    }

    /// Byte offset of the labelled span.
    pub fn offset(&self) -> usize {
        self.span.offset()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_covers_failing_character() {
        let err = ParseError::new("test", "a_{p} b^{q}", 6, String::new());
        assert_eq!((err.span.offset(), err.span.len()), (6, 1));
        assert!(err.reason.is_none());
    }

    #[test]
    fn end_of_input_points_at_last_character() {
        let err = ParseError::new("test", "a_{p} a^{q", 10, "expected `}`".to_owned());
        assert_eq!((err.span.offset(), err.span.len()), (9, 1));
    }

    #[test]
    fn empty_source_has_empty_span() {
        let err = ParseError::new("test", "", 0, String::new());
        assert_eq!((err.span.offset(), err.span.len()), (0, 0));
    }
}
