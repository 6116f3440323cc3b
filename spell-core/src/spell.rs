//! Spell definitions.

use crate::error::ValidationError;
use crate::magic::{Element, Spellbook, StatusKind};
use crate::tables::{level_penalty, skill_penalty};
use serde::Serialize;

/// A validated spell.
///
/// The difficulty and strength values are looked up once on construction
/// and never change afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Spell {
    name: String,
    book: Spellbook,
    element: Element,
    level: u32,
    base_cost: u32,
    statuses: Vec<StatusKind>,
    skill_difficulty: i32,
    level_difficulty: i32,
    base_strength: i32,
}

impl Spell {
    /// Create a spell, validating its level and cost against the rule tables.
    ///
    /// `statuses` may repeat a status; order is kept but carries no meaning.
    pub fn new(
        name: impl Into<String>,
        book: Spellbook,
        element: Element,
        level: u32,
        base_cost: u32,
        statuses: impl IntoIterator<Item = StatusKind>,
    ) -> Result<Self, ValidationError> {
        let level_difficulty = level_penalty(level)?;
        let half_cost = i64::from(base_cost / 2);
        let skill_difficulty = skill_penalty(half_cost + i64::from(level))?;
        // both validated above, so these fit comfortably in i32
        let base_strength = level as i32 + (base_cost / 2) as i32 / 2;

        Ok(Self {
            name: name.into(),
            book,
            element,
            level,
            base_cost,
            statuses: statuses.into_iter().collect(),
            skill_difficulty,
            level_difficulty,
            base_strength,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn book(&self) -> Spellbook {
        self.book
    }

    pub fn element(&self) -> Element {
        self.element
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn base_cost(&self) -> u32 {
        self.base_cost
    }

    pub fn statuses(&self) -> &[StatusKind] {
        &self.statuses
    }

    /// Weighted skill needed to reliably cast at power level 7.
    pub fn skill_difficulty(&self) -> i32 {
        self.skill_difficulty
    }

    /// Caster level at which level-based failure vanishes at power level 1.
    pub fn level_difficulty(&self) -> i32 {
        self.level_difficulty
    }

    /// Power the spell brings against resistance before the caster's
    /// contribution.
    pub fn base_strength(&self) -> i32 {
        self.base_strength
    }

    /// Weighted skill needed to reliably cast at the lowest power level.
    pub fn reliable_skill_at_base_power(&self) -> i32 {
        self.skill_difficulty / 7
    }

    /// Weighted skill needed to reliably cast at the highest power level.
    pub fn reliable_skill_at_max_power(&self) -> i32 {
        self.skill_difficulty
    }

    /// Caster level needed to avoid level-based failure at the lowest power
    /// level. Each extra power level raises it by one.
    pub fn reliable_caster_level(&self) -> i32 {
        self.level_difficulty
    }
}
