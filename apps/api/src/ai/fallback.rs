#![allow(dead_code)]

//! Topic keys and the static fallback table.
//!
//! A table is built once at startup, injected through `AppState`, and never
//! mutated afterwards — concurrent readers share it without locking. The
//! default entry is an explicit slot of its own: a lookup miss serves it
//! without being confused with a real entry that happens to share content.

use std::collections::HashMap;
use std::fmt;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("topic must be a non-empty string")]
pub struct TopicError;

/// Normalized topic key: first letter uppercase, remainder lowercase.
/// Used both as the generation-prompt parameter and the fallback-table key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Topic(String);

impl Topic {
    /// Normalizes and validates a raw topic string. A blank topic is the one
    /// caller-input error in the generation path; it fails here, before any
    /// prompt is built or network call made.
    pub fn parse(raw: &str) -> Result<Self, TopicError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(TopicError);
        }
        Ok(Topic(normalize_key(trimmed)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn normalize_key(raw: &str) -> String {
    let mut normalized = String::with_capacity(raw.len());
    for (i, c) in raw.trim().chars().enumerate() {
        if i == 0 {
            normalized.extend(c.to_uppercase());
        } else {
            normalized.extend(c.to_lowercase());
        }
    }
    normalized
}

/// Read-only mapping from normalized topic to a fully-formed payload in the
/// same shape the generator is expected to produce.
#[derive(Debug, Clone)]
pub struct FallbackTable<T> {
    entries: HashMap<String, T>,
    default: T,
}

impl<T> FallbackTable<T> {
    /// Builds a table around its explicit default entry.
    pub fn new(default: T) -> Self {
        Self {
            entries: HashMap::new(),
            default,
        }
    }

    /// Registers a topic-specific entry. The key is normalized the same way
    /// incoming topics are.
    pub fn with_entry(mut self, topic: &str, payload: T) -> Self {
        self.entries.insert(normalize_key(topic), payload);
        self
    }

    /// Returns the entry for `topic`, or the default entry when none exists.
    pub fn lookup(&self, topic: &Topic) -> &T {
        self.entries.get(topic.as_str()).unwrap_or(&self.default)
    }

    /// The topic-specific entry only, if one is registered.
    pub fn entry(&self, topic: &Topic) -> Option<&T> {
        self.entries.get(topic.as_str())
    }

    pub fn default_payload(&self) -> &T {
        &self.default
    }

    /// Iterates all registered payloads plus the default. Used by tests to
    /// assert every hand-authored payload passes its own schema validation.
    pub fn payloads(&self) -> impl Iterator<Item = &T> {
        self.entries.values().chain(std::iter::once(&self.default))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topic_normalizes_casing() {
        assert_eq!(Topic::parse("finance").unwrap().as_str(), "Finance");
        assert_eq!(Topic::parse("FINANCE").unwrap().as_str(), "Finance");
        assert_eq!(Topic::parse("  sales  ").unwrap().as_str(), "Sales");
        assert_eq!(
            Topic::parse("Data Science").unwrap().as_str(),
            "Data science"
        );
    }

    #[test]
    fn test_blank_topic_is_rejected() {
        assert_eq!(Topic::parse(""), Err(TopicError));
        assert_eq!(Topic::parse("   "), Err(TopicError));
    }

    #[test]
    fn test_lookup_prefers_registered_entry() {
        let table = FallbackTable::new("default")
            .with_entry("Finance", "finance")
            .with_entry("technology", "tech");
        assert_eq!(*table.lookup(&Topic::parse("finance").unwrap()), "finance");
        assert_eq!(*table.lookup(&Topic::parse("TECHNOLOGY").unwrap()), "tech");
    }

    #[test]
    fn test_lookup_miss_serves_explicit_default() {
        let table = FallbackTable::new("default").with_entry("Finance", "finance");
        let topic = Topic::parse("Astrology").unwrap();
        assert_eq!(*table.lookup(&topic), "default");
        assert_eq!(table.entry(&topic), None);
    }

    #[test]
    fn test_payloads_include_default() {
        let table = FallbackTable::new(0).with_entry("A", 1).with_entry("B", 2);
        let mut all: Vec<i32> = table.payloads().copied().collect();
        all.sort_unstable();
        assert_eq!(all, vec![0, 1, 2]);
    }
}
