//! Alert labels parsed from `key:value` pairs.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single alert label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    pub key: String,
    pub value: String,
}

impl Label {
    /// Create a label from a key and value.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// A label is sent to the API only when both key and value carry text.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.key.trim().is_empty() && !self.value.trim().is_empty()
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.key, self.value)
    }
}

/// Parse labels given as `key1:value1,key2:value2`.
///
/// Each pair is split on its first `:` so values may themselves contain
/// colons (`url:https://example.com`). A pair without a colon becomes a
/// label with an empty value. Blank input yields no labels.
#[must_use]
pub fn parse_labels(input: &str) -> Vec<Label> {
    if input.trim().is_empty() {
        return Vec::new();
    }

    input
        .split(',')
        .map(|pair| match pair.split_once(':') {
            Some((key, value)) => Label::new(key.trim(), value.trim()),
            None => Label::new(pair.trim(), ""),
        })
        .collect()
}

/// Render labels back into the `key:value,...` input form.
#[must_use]
pub fn format_labels(labels: &[Label]) -> String {
    labels
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}
