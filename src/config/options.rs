use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::HashMap;
use thiserror::Error;

use crate::pattern::is_valid_name;

/// Fallback fragment when no separators are configured, and the default for
/// every glob without an explicit requirement.
pub const ANY_PATTERN: &str = ".+";

/// Rules controlling how parameters and globs render.
///
/// `requirements` maps a capture name to a raw `regex` fragment used in
/// place of the default. `separators` lists the characters a parameter
/// without a requirement may not match.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PatternConfig {
    pub requirements: HashMap<String, String>,
    pub separators: String,
}

impl PatternConfig {
    pub fn new<S: Into<String>>(requirements: HashMap<String, String>, separators: S) -> Self {
        Self {
            requirements,
            separators: separators.into(),
        }
    }

    pub fn builder() -> PatternConfigBuilder {
        PatternConfigBuilder::default()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(name) = self.requirements.keys().find(|name| !is_valid_name(name)) {
            return Err(ConfigError::InvalidRequirementName { name: name.clone() });
        }
        Ok(())
    }

    pub fn requirements(&self) -> &HashMap<String, String> {
        &self.requirements
    }

    pub fn separators(&self) -> &str {
        &self.separators
    }

    pub fn has_explicit_pattern(&self, name: &str) -> bool {
        self.requirements.contains_key(name)
    }

    /// Fragment a parameter named `name` renders with.
    pub fn pattern_for(&self, name: &str) -> Cow<'_, str> {
        match self.requirements.get(name) {
            Some(pattern) => Cow::Borrowed(pattern.as_str()),
            None => self.default_pattern(),
        }
    }

    /// `[^<separators>]+`, or [`ANY_PATTERN`] without separators.
    pub fn default_pattern(&self) -> Cow<'_, str> {
        if self.separators.is_empty() {
            return Cow::Borrowed(ANY_PATTERN);
        }

        let mut class = String::with_capacity(self.separators.len() + 4);
        class.push_str("[^");
        let mut buf = [0u8; 4];
        for sep in self.separators.chars() {
            class.push_str(&regex::escape(sep.encode_utf8(&mut buf)));
        }
        class.push_str("]+");
        Cow::Owned(class)
    }
}

#[derive(Debug, Default, Clone)]
pub struct PatternConfigBuilder {
    config: PatternConfig,
}

impl PatternConfigBuilder {
    pub fn requirement<N, P>(mut self, name: N, pattern: P) -> Self
    where
        N: Into<String>,
        P: Into<String>,
    {
        self.config.requirements.insert(name.into(), pattern.into());
        self
    }

    pub fn requirements(mut self, requirements: HashMap<String, String>) -> Self {
        self.config.requirements = requirements;
        self
    }

    pub fn separators<S: Into<String>>(mut self, separators: S) -> Self {
        self.config.separators = separators.into();
        self
    }

    pub fn build(self) -> Result<PatternConfig, ConfigError> {
        let config = self.config;
        config.validate()?;
        Ok(config)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("requirement name '{name}' is not a valid identifier (expected [A-Za-z_]+)")]
    InvalidRequirementName { name: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_to_any_without_separators() {
        let config = PatternConfig::default();
        assert_eq!(config.pattern_for("id"), ANY_PATTERN);
        assert!(!config.has_explicit_pattern("id"));
    }

    #[test]
    fn separators_build_negated_class() {
        let config = PatternConfig::new(HashMap::new(), "/.");
        assert_eq!(config.pattern_for("id"), "[^/\\.]+");
    }

    #[test]
    fn escapes_class_metacharacters_in_separators() {
        let config = PatternConfig::new(HashMap::new(), "]^-\\");
        assert_eq!(config.default_pattern(), "[^\\]\\^\\-\\\\]+");
    }

    #[test]
    fn requirement_takes_priority_over_separators() {
        let config = PatternConfig::builder()
            .separators("/")
            .requirement("id", "\\d+")
            .build()
            .expect("config should build");
        assert!(config.has_explicit_pattern("id"));
        assert_eq!(config.pattern_for("id"), "\\d+");
        assert_eq!(config.pattern_for("other"), "[^/]+");
    }

    #[test]
    fn builder_rejects_invalid_requirement_name() {
        let err = PatternConfig::builder()
            .requirement("id-1", "\\d+")
            .build()
            .expect_err("hyphenated name can never be referenced");
        assert_eq!(
            err,
            ConfigError::InvalidRequirementName {
                name: "id-1".to_string()
            }
        );
    }
}
