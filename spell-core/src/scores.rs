//! Total score mappings over a closed set.
//!
//! Used for a caster's spellbook and element skills and for an enemy's
//! elemental resistances. Every member of the set always has an entry;
//! members that were never supplied score 0.

use crate::error::ValidationError;
use crate::magic::{Element, Enumerated, Spellbook};
use serde::Serialize;
use std::collections::BTreeMap;

/// A score for every member of `K`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ScoreMap<K: Enumerated> {
    scores: BTreeMap<K, i32>,
}

/// Skill per spellbook.
pub type BookSkills = ScoreMap<Spellbook>;
/// Skill per element.
pub type ElementSkills = ScoreMap<Element>;
/// Resistance percentage per element.
pub type Resistances = ScoreMap<Element>;

impl<K: Enumerated> ScoreMap<K> {
    /// A fresh mapping with every member at 0.
    pub fn new() -> Self {
        Self {
            scores: K::all().iter().map(|&key| (key, 0)).collect(),
        }
    }

    /// Build from the supplied entries; the rest default to 0.
    ///
    /// A key supplied more than once keeps its last value.
    pub fn from_entries(entries: impl IntoIterator<Item = (K, i32)>) -> Self {
        let mut map = Self::new();
        map.scores.extend(entries);
        map
    }

    /// Build from entries keyed by name, rejecting unknown names.
    pub fn from_named<'a>(
        entries: impl IntoIterator<Item = (&'a str, i32)>,
    ) -> Result<Self, ValidationError> {
        let mut map = Self::new();
        for (name, score) in entries {
            map.scores.insert(K::parse_name(name)?, score);
        }
        Ok(map)
    }

    /// Return a copy with `key` set to `score`.
    pub fn with(mut self, key: K, score: i32) -> Self {
        self.scores.insert(key, score);
        self
    }

    /// Score for `key`.
    pub fn get(&self, key: K) -> i32 {
        self.scores.get(&key).copied().unwrap_or_default()
    }

    /// Every entry, in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (K, i32)> + '_ {
        self.scores.iter().map(|(&key, &score)| (key, score))
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

impl<K: Enumerated> Default for ScoreMap<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Enumerated> FromIterator<(K, i32)> for ScoreMap<K> {
    fn from_iter<I: IntoIterator<Item = (K, i32)>>(iter: I) -> Self {
        Self::from_entries(iter)
    }
}
