use std::fmt;

/// Characters with syntactic meaning in an expression. They must be written
/// with a leading `\` to appear as literal text.
pub const RESERVED_CHARS: [char; 5] = ['(', ')', '*', ':', '\\'];

pub fn is_reserved(ch: char) -> bool {
    RESERVED_CHARS.contains(&ch)
}

/// Characters allowed in parameter and glob names.
pub fn is_name_char(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_'
}

pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(is_name_char)
}

/// A parsed unit of an expression.
///
/// The root of a parsed expression is always a [`Token::Sequence`], and the
/// body of a [`Token::Group`] is always one too.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Concatenation of tokens, matched left to right.
    Sequence { items: Vec<Token> },
    /// Optional sub-expression, `( ... )`.
    Group { inner: Box<Token> },
    /// Named capture bounded by separators by default, `:name`.
    Parameter { name: String },
    /// Named capture crossing separators by default, `*name`.
    Glob { name: String },
    /// One literal character, already unescaped.
    Literal(char),
}

impl Token {
    pub fn sequence(items: Vec<Token>) -> Self {
        Self::Sequence { items }
    }

    pub fn group(items: Vec<Token>) -> Self {
        Self::Group {
            inner: Box::new(Self::sequence(items)),
        }
    }

    pub fn parameter<S: Into<String>>(name: S) -> Self {
        Self::Parameter { name: name.into() }
    }

    pub fn glob<S: Into<String>>(name: S) -> Self {
        Self::Glob { name: name.into() }
    }

    pub fn literal(ch: char) -> Self {
        Self::Literal(ch)
    }

    /// Builds a sequence of literal tokens spelling `text`.
    pub fn literal_text(text: &str) -> Self {
        Self::sequence(text.chars().map(Self::Literal).collect())
    }

    /// Direct children of a sequence, or of the sequence inside a group.
    pub fn items(&self) -> &[Token] {
        match self {
            Self::Sequence { items } => items.as_slice(),
            Self::Group { inner } => inner.items(),
            _ => &[],
        }
    }

    /// Names of every parameter and glob, in source order.
    pub fn capture_names(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_names(&mut out);
        out
    }

    fn collect_names<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            Self::Sequence { items } => {
                for item in items {
                    item.collect_names(out);
                }
            }
            Self::Group { inner } => inner.collect_names(out),
            Self::Parameter { name } | Self::Glob { name } => out.push(name),
            Self::Literal(_) => {}
        }
    }

    /// Textual form that parses back into an equivalent token.
    pub fn source_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sequence { items } => {
                for item in items {
                    write!(f, "{item}")?;
                }
                Ok(())
            }
            Self::Group { inner } => write!(f, "({inner})"),
            Self::Parameter { name } => write!(f, ":{name}"),
            Self::Glob { name } => write!(f, "*{name}"),
            Self::Literal(ch) if is_reserved(*ch) => write!(f, "\\{ch}"),
            Self::Literal(ch) => write!(f, "{ch}"),
        }
    }
}
