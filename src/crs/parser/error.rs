//! Errors reported by the strict parser

use crate::crs::graph::{GraphError, RealmCode};
use crate::crs::position::{Position, SourceLocation};
use std::fmt;
use std::ops::Range;

/// What went wrong at a given place in the source
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// A character that cannot start any token (lowercase letter, digit, punctuation)
    UnexpectedCharacter(char),
    /// A valid token in a place the grammar does not allow
    UnexpectedToken(String),
    /// Input ended inside a group or after an opening delimiter
    UnexpectedEnd,
    /// A `[` with no matching `]`
    UnclosedBracket,
    /// A realm listed in its own coupling group
    SelfCoupling(RealmCode),
    /// The string parsed but describes a graph that breaks the embedding invariants
    InvalidGraph(GraphError),
}

/// A strict parse error with its byte range and line/column position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub range: Range<usize>,
    pub position: Position,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, range: Range<usize>, location: &SourceLocation) -> Self {
        let position = location.range_start(&range);
        Self {
            kind,
            range,
            position,
        }
    }
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseErrorKind::UnexpectedCharacter(c) => write!(f, "Unexpected character '{c}'"),
            ParseErrorKind::UnexpectedToken(token) => write!(f, "Unexpected '{token}'"),
            ParseErrorKind::UnexpectedEnd => write!(f, "Unexpected end of input"),
            ParseErrorKind::UnclosedBracket => write!(f, "Unclosed '['"),
            ParseErrorKind::SelfCoupling(code) => write!(f, "Realm {code} is coupled with itself"),
            ParseErrorKind::InvalidGraph(err) => write!(f, "{err}"),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.kind, self.position)
    }
}

impl std::error::Error for ParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let location = SourceLocation::new("A(b)");
        let err = ParseError::new(ParseErrorKind::UnexpectedCharacter('b'), 2..3, &location);
        assert_eq!(err.position, Position::new(0, 2));
        assert_eq!(err.to_string(), "Unexpected character 'b' at 0:2");
    }
}
