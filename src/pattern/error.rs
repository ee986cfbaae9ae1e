use std::fmt;
use thiserror::Error;

/// Construct the parser was looking for when it failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    Char(char),
    EscapedChar,
    EndOfInput,
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Char(ch) => write!(f, "'{ch}'"),
            Self::EscapedChar => f.write_str("character after '\\'"),
            Self::EndOfInput => f.write_str("end of input"),
        }
    }
}

/// What the parser saw instead of an identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Found {
    Char(char),
    End,
}

impl fmt::Display for Found {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Char(ch) => write!(f, "unexpected character '{ch}'"),
            Self::End => f.write_str("unexpected end"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    #[error("unexpected character '{found}', expected {expected}")]
    UnexpectedCharacter { found: char, expected: Expected },
    #[error("unexpected end, expected {expected}")]
    UnexpectedEnd { expected: Expected },
    #[error("empty identifier after '{sigil}': {found}, expected identifier")]
    EmptyIdentifier { sigil: char, found: Found },
    #[error(
        "invalid escape-sequence '\\{found}', expected one of '\\(', '\\)', '\\*', '\\:' or '\\\\'"
    )]
    InvalidEscape { found: char },
    #[error("unexpected special character '{found}', missing escaping")]
    MissingEscape { found: char },
    #[error("unmatched ')'")]
    UnmatchedCloseParen,
    #[error("expression too deeply nested (more than {limit} groups)")]
    NestingTooDeep { limit: usize },
}

/// Failure to parse an expression.
///
/// `offset` is the byte position where parsing stopped; everything before
/// it was consumed successfully.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub struct ParseError {
    input: String,
    offset: usize,
    kind: ParseErrorKind,
}

impl ParseError {
    pub(crate) fn new(input: &str, offset: usize, kind: ParseErrorKind) -> Self {
        Self {
            input: input.to_string(),
            offset,
            kind,
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn kind(&self) -> &ParseErrorKind {
        &self.kind
    }

    pub fn consumed(&self) -> &str {
        self.input.get(..self.offset).unwrap_or(&self.input)
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "parse error: after '{}': {}", self.consumed(), self.kind)
    }
}

pub type ParseResult<T> = Result<T, ParseError>;
