use std::borrow::Cow;

use super::ast::Token;
use crate::config::{ANY_PATTERN, PatternConfig};

impl Token {
    /// Renders the token as an unanchored `regex` fragment.
    ///
    /// Parameters and globs become named groups written as `(?P<name>...)`.
    /// Names are not checked for uniqueness; the engine rejects duplicates
    /// when the fragment is compiled.
    pub fn regex_fragment(&self, config: &PatternConfig) -> String {
        let mut out = String::new();
        self.write_fragment(config, &mut out);
        out
    }

    pub(crate) fn write_fragment(&self, config: &PatternConfig, out: &mut String) {
        match self {
            Token::Sequence { items } => {
                for item in items {
                    item.write_fragment(config, out);
                }
            }
            Token::Group { inner } => {
                out.push_str("(?:");
                inner.write_fragment(config, out);
                out.push_str(")?");
            }
            Token::Parameter { name } => {
                push_named_group(out, name, &config.pattern_for(name));
            }
            Token::Glob { name } => {
                // Only an explicit requirement bounds a glob by separators.
                let pattern = if config.has_explicit_pattern(name) {
                    config.pattern_for(name)
                } else {
                    Cow::Borrowed(ANY_PATTERN)
                };
                push_named_group(out, name, &pattern);
            }
            Token::Literal(ch) => {
                let mut buf = [0u8; 4];
                out.push_str(&regex::escape(ch.encode_utf8(&mut buf)));
            }
        }
    }
}

fn push_named_group(out: &mut String, name: &str, pattern: &str) {
    out.push_str("(?P<");
    out.push_str(name);
    out.push('>');
    out.push_str(pattern);
    out.push(')');
}
