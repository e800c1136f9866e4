use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use super::entry::{ApiError, ExtError};
use crate::json;

/// Capacity hint used by [`ErrorCollection::new`]
pub const DEFAULT_CAPACITY: usize = 1;

/// Several errors reported together, e.g. every failed field of a request
/// body during validation.
///
/// Append only: entries keep insertion order and are never removed. No
/// internal locking; wrap it in a `Mutex` to share between writers.
#[derive(Debug)]
pub struct ErrorCollection {
    entries: Vec<Box<dyn ExtError>>,
}

impl ErrorCollection {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Pre-size storage. Does not bound growth.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Append entries in iteration order
    pub fn add<I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = Box<dyn ExtError>>,
    {
        self.entries.extend(entries);
    }

    pub fn push<E: ExtError>(&mut self, entry: E) {
        self.entries.push(Box::new(entry));
    }

    /// Append `entry` if present. Pairs with the `Option` returned by the
    /// [`ApiError`] constructors.
    pub fn push_opt<E: ExtError>(&mut self, entry: Option<E>) {
        if let Some(entry) = entry {
            self.push(entry);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order, borrowed without copying
    pub fn entries(&self) -> &[Box<dyn ExtError>] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Box<dyn ExtError>> {
        self.entries.iter()
    }

    pub fn into_entries(self) -> Vec<Box<dyn ExtError>> {
        self.entries
    }

    pub fn to_json(&self) -> json::Result<String> {
        json::to_string(self)
    }
}

impl Default for ErrorCollection {
    fn default() -> Self {
        Self::new()
    }
}

impl Extend<Box<dyn ExtError>> for ErrorCollection {
    fn extend<I: IntoIterator<Item = Box<dyn ExtError>>>(&mut self, iter: I) {
        self.add(iter);
    }
}

impl FromIterator<Box<dyn ExtError>> for ErrorCollection {
    fn from_iter<I: IntoIterator<Item = Box<dyn ExtError>>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ErrorCollection {
    type Item = &'a Box<dyn ExtError>;
    type IntoIter = std::slice::Iter<'a, Box<dyn ExtError>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Each entry's own text joined with `"; "`
impl fmt::Display for ErrorCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}", entry)?;
        }
        Ok(())
    }
}

impl std::error::Error for ErrorCollection {}

/// Bare array of entry bodies
impl Serialize for ErrorCollection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.entries.iter().map(|entry| entry.body()))
    }
}

/// Entries come back as [`ApiError`] with status code `0`
impl<'de> Deserialize<'de> for ErrorCollection {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let entries = Vec::<ApiError>::deserialize(deserializer)?;
        Ok(entries
            .into_iter()
            .map(|entry| Box::new(entry) as Box<dyn ExtError>)
            .collect())
    }
}
