use crate::pattern::ParseError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CompileError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The rendered pattern was rejected by the `regex` engine, for example
    /// an invalid requirement fragment or a duplicated capture name.
    #[error(transparent)]
    Engine(#[from] regex::Error),
}

pub type CompileResult<T> = Result<T, CompileError>;
