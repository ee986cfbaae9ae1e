mod compile;
mod compiled;

pub use compile::{compile, must_compile, to_regex};
pub use compiled::{CapturedParam, CaptureList, CompiledPattern, MatchedParams, ParamOffset};
