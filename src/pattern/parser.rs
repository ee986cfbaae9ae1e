use super::ast::{Token, is_name_char, is_reserved};
use super::error::{Expected, Found, ParseError, ParseErrorKind, ParseResult};

/// Deepest group nesting accepted before parsing gives up.
pub const MAX_GROUP_DEPTH: usize = 256;

/// Parses an expression into its root [`Token::Sequence`].
#[tracing::instrument(level = "trace", fields(expression_len = expression.len() as u64))]
pub fn parse(expression: &str) -> ParseResult<Token> {
    let mut parser = ExpressionParser::new(expression);
    let root = parser.parse_expression(0)?;

    match parser.peek() {
        None => Ok(root),
        Some(')') => Err(parser.error(ParseErrorKind::UnmatchedCloseParen)),
        // parse_expression only stops at end of input or ')'.
        Some(found) => Err(parser.error(ParseErrorKind::UnexpectedCharacter {
            found,
            expected: Expected::EndOfInput,
        })),
    }
}

struct ExpressionParser<'a> {
    expression: &'a str,
    chars: Vec<(usize, char)>,
    index: usize,
}

impl<'a> ExpressionParser<'a> {
    fn new(expression: &'a str) -> Self {
        Self {
            expression,
            chars: expression.char_indices().collect(),
            index: 0,
        }
    }

    /// Expression := Token* (end-of-input | ')')
    ///
    /// The closing `)` is left for the caller.
    fn parse_expression(&mut self, depth: usize) -> ParseResult<Token> {
        let mut items = Vec::new();
        while let Some(ch) = self.peek() {
            if ch == ')' {
                break;
            }
            items.push(self.parse_token(ch, depth)?);
        }
        Ok(Token::sequence(items))
    }

    fn parse_token(&mut self, next: char, depth: usize) -> ParseResult<Token> {
        // Dispatch on the peeked char so a malformed `:x` or `*x` reports a
        // missing identifier instead of a missing escape.
        match next {
            ':' => self.parse_parameter(),
            '*' => self.parse_glob(),
            '(' => self.parse_group(depth),
            _ => self.parse_literal(next),
        }
    }

    fn parse_parameter(&mut self) -> ParseResult<Token> {
        self.expect(':')?;
        let name = self.parse_name(':')?;
        Ok(Token::Parameter { name })
    }

    fn parse_glob(&mut self) -> ParseResult<Token> {
        self.expect('*')?;
        let name = self.parse_name('*')?;
        Ok(Token::Glob { name })
    }

    fn parse_group(&mut self, depth: usize) -> ParseResult<Token> {
        if depth >= MAX_GROUP_DEPTH {
            return Err(self.error(ParseErrorKind::NestingTooDeep {
                limit: MAX_GROUP_DEPTH,
            }));
        }
        self.expect('(')?;
        let inner = self.parse_expression(depth + 1)?;
        self.expect(')')?;
        Ok(Token::Group {
            inner: Box::new(inner),
        })
    }

    fn parse_literal(&mut self, ch: char) -> ParseResult<Token> {
        if ch == '\\' {
            let escape_index = self.index;
            self.next();
            return match self.next() {
                Some(escaped) if is_reserved(escaped) => Ok(Token::Literal(escaped)),
                Some(found) => {
                    self.index = escape_index;
                    Err(self.error(ParseErrorKind::InvalidEscape { found }))
                }
                None => Err(self.error(ParseErrorKind::UnexpectedEnd {
                    expected: Expected::EscapedChar,
                })),
            };
        }

        if is_reserved(ch) {
            return Err(self.error(ParseErrorKind::MissingEscape { found: ch }));
        }

        self.next();
        Ok(Token::Literal(ch))
    }

    /// Name := [A-Za-z_]+
    fn parse_name(&mut self, sigil: char) -> ParseResult<String> {
        let mut name = String::new();
        while let Some(ch) = self.peek() {
            if !is_name_char(ch) {
                break;
            }
            name.push(ch);
            self.next();
        }

        if name.is_empty() {
            let found = self.peek().map_or(Found::End, Found::Char);
            return Err(self.error(ParseErrorKind::EmptyIdentifier { sigil, found }));
        }
        Ok(name)
    }

    fn expect(&mut self, expected: char) -> ParseResult<()> {
        match self.peek() {
            Some(ch) if ch == expected => {
                self.next();
                Ok(())
            }
            Some(found) => Err(self.error(ParseErrorKind::UnexpectedCharacter {
                found,
                expected: Expected::Char(expected),
            })),
            None => Err(self.error(ParseErrorKind::UnexpectedEnd {
                expected: Expected::Char(expected),
            })),
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.index).map(|(_, ch)| *ch)
    }

    fn next(&mut self) -> Option<char> {
        let ch = self.peek();
        if ch.is_some() {
            self.index += 1;
        }
        ch
    }

    fn current_byte_index(&self) -> usize {
        self.chars
            .get(self.index)
            .map(|(idx, _)| *idx)
            .unwrap_or(self.expression.len())
    }

    fn error(&self, kind: ParseErrorKind) -> ParseError {
        ParseError::new(self.expression, self.current_byte_index(), kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_parameter_inside_group() {
        let token = parse("(:id)").expect("group should parse");
        assert_eq!(
            token,
            Token::sequence(vec![Token::group(vec![Token::parameter("id")])])
        );
    }

    #[test]
    fn unescapes_reserved_characters() {
        let token = parse("a\\(b").expect("escaped paren should parse");
        assert_eq!(token, Token::literal_text("a(b"));
    }

    #[test]
    fn name_stops_at_first_non_name_character() {
        let token = parse(":id.json").expect("parameter with suffix should parse");
        let items = token.items();
        assert_eq!(items[0], Token::parameter("id"));
        assert_eq!(items[1], Token::literal('.'));
        assert_eq!(items.len(), 6);
    }

    #[test]
    fn empty_expression_is_an_empty_sequence() {
        assert_eq!(parse("").expect("empty input parses"), Token::sequence(vec![]));
    }

    #[test]
    fn error_offset_points_after_sigil() {
        let err = parse("/users/:1").expect_err("digit is not a name character");
        assert_eq!(err.offset(), 8);
        assert_eq!(err.consumed(), "/users/:");
        assert_eq!(
            err.kind(),
            &ParseErrorKind::EmptyIdentifier {
                sigil: ':',
                found: Found::Char('1'),
            }
        );
    }

    #[test]
    fn invalid_escape_offset_points_at_backslash() {
        let err = parse("ab\\x").expect_err("\\x is not an escape");
        assert_eq!(err.offset(), 2);
        assert_eq!(err.kind(), &ParseErrorKind::InvalidEscape { found: 'x' });
    }

    #[test]
    fn multibyte_literals_keep_byte_offsets() {
        let err = parse("é)").expect_err("close paren is unmatched");
        assert_eq!(err.offset(), 'é'.len_utf8());
        assert_eq!(err.consumed(), "é");
    }

    #[test]
    fn rejects_nesting_beyond_limit() {
        let deep = "(".repeat(MAX_GROUP_DEPTH + 1) + &")".repeat(MAX_GROUP_DEPTH + 1);
        let err = parse(&deep).expect_err("nesting should be bounded");
        assert_eq!(
            err.kind(),
            &ParseErrorKind::NestingTooDeep {
                limit: MAX_GROUP_DEPTH
            }
        );
        assert_eq!(err.offset(), MAX_GROUP_DEPTH);
    }

    #[test]
    fn accepts_nesting_at_limit() {
        let deep = "(".repeat(MAX_GROUP_DEPTH) + &")".repeat(MAX_GROUP_DEPTH);
        parse(&deep).expect("nesting at the limit should parse");
    }
}
