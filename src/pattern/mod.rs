mod ast;
mod error;
mod parser;
mod render;

pub use ast::{RESERVED_CHARS, Token, is_name_char, is_reserved, is_valid_name};
pub use error::{Expected, Found, ParseError, ParseErrorKind, ParseResult};
pub use parser::{MAX_GROUP_DEPTH, parse};
