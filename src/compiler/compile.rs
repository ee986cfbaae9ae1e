use regex::Regex;

use super::CompiledPattern;
use crate::config::PatternConfig;
use crate::errors::CompileResult;
use crate::pattern::{ParseResult, parse};

/// Parses `expression` and renders it as an anchored regex source string.
pub fn to_regex(expression: &str, config: &PatternConfig) -> ParseResult<String> {
    let root = parse(expression)?;
    let mut source = String::with_capacity(expression.len() * 2 + 2);
    source.push('^');
    root.write_fragment(config, &mut source);
    source.push('$');
    Ok(source)
}

/// Compiles `expression` into a matcher.
///
/// Parse errors and engine errors are returned unchanged.
#[tracing::instrument(level = "trace", skip(config), fields(expression = %expression))]
pub fn compile(expression: &str, config: &PatternConfig) -> CompileResult<CompiledPattern> {
    let source = to_regex(expression, config)?;
    let regex = Regex::new(&source).inspect_err(|err| {
        tracing::event!(
            tracing::Level::DEBUG,
            operation = "compile",
            regex = %source,
            error = %err,
            "engine rejected pattern"
        );
    })?;
    tracing::event!(tracing::Level::DEBUG, operation = "compile", regex = %source);
    Ok(CompiledPattern::new(expression, regex))
}

/// Like [`compile`], for expressions known to be valid.
///
/// # Panics
///
/// Panics if the expression does not parse or the engine rejects it.
pub fn must_compile(expression: &str, config: &PatternConfig) -> CompiledPattern {
    match compile(expression, config) {
        Ok(pattern) => pattern,
        Err(err) => panic!("strexp: cannot compile '{expression}': {err}"),
    }
}
