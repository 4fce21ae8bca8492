//! Alias table.
//!
//! Maps alias names to their token lists. Tokens may name other aliases,
//! terminal values, or exclusions. Nothing is validated: cycles, self
//! references, empty lists and dangling names are all legal and handled at
//! resolution time.

use std::collections::HashMap;
use std::hash::BuildHasher;

use rustc_hash::{FxBuildHasher, FxHashMap};

/// Mapping from alias name to its ordered token list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct AliasTable {
    entries: FxHashMap<String, Vec<String>>,
}

impl AliasTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        AliasTable {
            entries: FxHashMap::with_capacity_and_hasher(capacity, FxBuildHasher),
        }
    }

    /// Define `name`, returning the previous definition if there was one.
    pub fn insert<I>(&mut self, name: impl Into<String>, tokens: I) -> Option<Vec<String>>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.entries
            .insert(name.into(), tokens.into_iter().map(Into::into).collect())
    }

    #[inline]
    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.entries.get(name).map(Vec::as_slice)
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Alias names, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// `(name, tokens)` pairs, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(name, tokens)| (name.as_str(), tokens.as_slice()))
    }
}

impl<K, I> FromIterator<(K, I)> for AliasTable
where
    K: Into<String>,
    I: IntoIterator,
    I::Item: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, I)>>(iter: T) -> Self {
        let mut table = AliasTable::new();
        for (name, tokens) in iter {
            table.insert(name, tokens);
        }
        table
    }
}

impl<S: BuildHasher> From<HashMap<String, Vec<String>, S>> for AliasTable {
    fn from(map: HashMap<String, Vec<String>, S>) -> Self {
        map.into_iter().collect()
    }
}

#[cfg(test)]
mod tests;
