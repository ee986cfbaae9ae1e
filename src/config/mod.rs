mod options;

pub use options::{ANY_PATTERN, ConfigError, PatternConfig, PatternConfigBuilder};
