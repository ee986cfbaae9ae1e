use regex::Regex;
use smallvec::SmallVec;

pub type ParamOffset = (usize, usize);
pub type CapturedParam = (String, ParamOffset);
pub type CaptureList = SmallVec<[CapturedParam; 4]>;

/// A compiled expression, backed by an anchored [`Regex`].
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    expression: String,
    regex: Regex,
}

impl CompiledPattern {
    pub(crate) fn new(expression: &str, regex: Regex) -> Self {
        Self {
            expression: expression.to_string(),
            regex,
        }
    }

    /// The expression this pattern was compiled from.
    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// The anchored regex source handed to the engine.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    pub fn as_regex(&self) -> &Regex {
        &self.regex
    }

    pub fn into_regex(self) -> Regex {
        self.regex
    }

    pub fn is_match(&self, haystack: &str) -> bool {
        self.regex.is_match(haystack)
    }

    /// Names of every parameter and glob, in pattern order.
    pub fn param_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.regex.capture_names().flatten()
    }

    /// Matches the whole of `haystack`, returning the captures that took
    /// part in the match. Parameters inside an unmatched optional group are
    /// absent from the result.
    pub fn captures<'t>(&self, haystack: &'t str) -> Option<MatchedParams<'t>> {
        let caps = self.regex.captures(haystack)?;
        let mut params: CaptureList = SmallVec::new();

        for name in self.regex.capture_names().flatten() {
            if let Some(m) = caps.name(name) {
                params.push((name.to_string(), (m.start(), m.len())));
            }
        }

        Some(MatchedParams { haystack, params })
    }
}

/// Named captures of one successful match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchedParams<'t> {
    haystack: &'t str,
    params: CaptureList,
}

impl<'t> MatchedParams<'t> {
    pub fn get(&self, name: &str) -> Option<&'t str> {
        self.params
            .iter()
            .find(|(param, _)| param == name)
            .map(|(_, offset)| self.slice(*offset))
    }

    pub fn offset(&self, name: &str) -> Option<ParamOffset> {
        self.params
            .iter()
            .find(|(param, _)| param == name)
            .map(|(_, offset)| *offset)
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &'t str)> + '_ {
        self.params
            .iter()
            .map(|(name, offset)| (name.as_str(), self.slice(*offset)))
    }

    fn slice(&self, (start, len): ParamOffset) -> &'t str {
        &self.haystack[start..start + len]
    }
}
