//! Targets of a casting.

use crate::magic::Element;
use crate::scores::Resistances;
use serde::Serialize;

/// An enemy with a level and a resistance percentage per element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Enemy {
    name: String,
    level: u32,
    resistances: Resistances,
}

impl Enemy {
    pub const DEFAULT_NAME: &'static str = "Enemy";

    /// Create an enemy with no resistances.
    pub fn new(name: impl Into<String>, level: u32) -> Self {
        Self {
            name: name.into(),
            level,
            resistances: Resistances::new(),
        }
    }

    pub fn with_resistances(mut self, resistances: Resistances) -> Self {
        self.resistances = resistances;
        self
    }

    pub fn with_resistance(mut self, element: Element, pct: i32) -> Self {
        self.resistances = self.resistances.with(element, pct);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn resistances(&self) -> &Resistances {
        &self.resistances
    }

    pub fn resistance(&self, element: Element) -> i32 {
        self.resistances.get(element)
    }
}
