//! Attribute map serialized into the alert request body.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use serde::Serialize;

use crate::labels::Label;

/// A single alert attribute value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Text(String),
    List(Vec<String>),
    Flag(bool),
    Labels(Vec<Label>),
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

impl From<Vec<String>> for AttributeValue {
    fn from(value: Vec<String>) -> Self {
        Self::List(value)
    }
}

impl From<Vec<Label>> for AttributeValue {
    fn from(value: Vec<Label>) -> Self {
        Self::Labels(value)
    }
}

/// Alert attributes keyed by their API field name.
pub type AttributeMap = BTreeMap<String, AttributeValue>;

/// Items that may be blank and are dropped before being sent.
pub trait Blank {
    /// Whether the item carries nothing worth sending.
    fn is_blank(&self) -> bool;
}

impl Blank for String {
    fn is_blank(&self) -> bool {
        self.trim().is_empty()
    }
}

impl Blank for Label {
    fn is_blank(&self) -> bool {
        !self.is_valid()
    }
}

/// Attach the non-blank `items` under `key`.
///
/// Nothing is attached when `items` is absent or every item is blank, and an
/// existing entry under `key` is never replaced. Surviving items are kept
/// as given, without trimming.
pub fn attach_non_blank<T>(items: Option<&[T]>, key: &str, target: &mut AttributeMap)
where
    T: Blank + Clone,
    AttributeValue: From<Vec<T>>,
{
    let Some(items) = items else {
        return;
    };

    let kept: Vec<T> = items.iter().filter(|item| !item.is_blank()).cloned().collect();
    if kept.is_empty() {
        return;
    }

    if let Entry::Vacant(entry) = target.entry(key.to_string()) {
        entry.insert(AttributeValue::from(kept));
    }
}

/// Attach a scalar under `key` when it is present and non-empty.
pub fn attach_non_empty(value: Option<&str>, key: &str, target: &mut AttributeMap) {
    match value {
        Some(value) if !value.is_empty() => {
            target
                .entry(key.to_string())
                .or_insert_with(|| AttributeValue::from(value));
        }
        _ => {}
    }
}
