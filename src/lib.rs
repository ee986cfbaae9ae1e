//! Segmented string expressions.
//!
//! An expression such as `/files/:name(.:ext)` or `/static/*path` is parsed
//! into a [`Token`] tree and lowered into an anchored [`regex::Regex`] with
//! one named capture per parameter and glob.
//!
//! - `:name` matches one or more characters that are not separators.
//! - `*name` matches one or more characters of any kind.
//! - `( ... )` makes its contents optional.
//! - `\(`, `\)`, `\*`, `\:` and `\\` escape the reserved characters.
//!
//! ```
//! use strexp::{PatternConfig, compile};
//!
//! let config = PatternConfig::builder().separators("/").build().unwrap();
//! let pattern = compile("/users/:id(/*rest)", &config).unwrap();
//!
//! let params = pattern.captures("/users/42/posts/7").unwrap();
//! assert_eq!(params.get("id"), Some("42"));
//! assert_eq!(params.get("rest"), Some("posts/7"));
//! ```

pub mod compiler;
pub mod config;
pub mod errors;
pub mod pattern;

pub use compiler::{CompiledPattern, MatchedParams, compile, must_compile, to_regex};
pub use config::{ConfigError, PatternConfig, PatternConfigBuilder};
pub use errors::{CompileError, CompileResult};
pub use pattern::{ParseError, ParseErrorKind, Token, parse};
