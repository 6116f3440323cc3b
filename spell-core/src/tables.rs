//! Rule tables.
//!
//! Fixed lookup tables that turn discrete indices into penalty and bonus
//! magnitudes. All tables are compile-time constants; lookups outside a
//! table's domain are reported as [`ValidationError::OutOfTable`].

use crate::error::ValidationError;
use crate::magic::{EffectType, StatusKind};

/// Weighted skill needed to reliably cast at full power, indexed by
/// `base_cost / 2 + spell_level`.
pub const SKILL_PENALTY_TABLE: [i32; 17] = [
    30, 40, 50, 58, 64, 70, 76, 81, 86, 90, 94, 97, 100, 102, 105, 107, 110,
];

/// Caster level needed to reliably cast at full power, indexed by
/// spell level starting at 1.
pub const LEVEL_PENALTY_TABLE: [i32; 7] = [1, 3, 5, 8, 11, 14, 18];

/// Lowest spell level in [`LEVEL_PENALTY_TABLE`].
pub const MIN_SPELL_LEVEL: u32 = 1;

/// Highest spell level in [`LEVEL_PENALTY_TABLE`].
pub const MAX_SPELL_LEVEL: u32 = LEVEL_PENALTY_TABLE.len() as u32;

/// Look up the skill difficulty for a cost/level index.
pub fn skill_penalty(index: i64) -> Result<i32, ValidationError> {
    usize::try_from(index)
        .ok()
        .and_then(|i| SKILL_PENALTY_TABLE.get(i).copied())
        .ok_or(ValidationError::OutOfTable {
            table: "skill penalty table",
            field: "cost/level index",
            value: index,
            min: 0,
            max: SKILL_PENALTY_TABLE.len() as i64 - 1,
        })
}

/// Look up the level difficulty for a spell level.
pub fn level_penalty(level: u32) -> Result<i32, ValidationError> {
    level
        .checked_sub(MIN_SPELL_LEVEL)
        .and_then(|i| LEVEL_PENALTY_TABLE.get(i as usize).copied())
        .ok_or(ValidationError::OutOfTable {
            table: "level penalty table",
            field: "spell level",
            value: i64::from(level),
            min: i64::from(MIN_SPELL_LEVEL),
            max: i64::from(MAX_SPELL_LEVEL),
        })
}

impl StatusKind {
    /// Bonus added to a target's resistance against this status.
    ///
    /// Higher means harder to inflict.
    pub const fn resist_bonus(&self) -> i32 {
        match self {
            StatusKind::DrainStamina => 0,
            StatusKind::Disease => 2,
            StatusKind::Irritated => 3,
            StatusKind::Nausea => 4,
            StatusKind::Slow => 4,
            StatusKind::Afraid => 5,
            StatusKind::Poisoned => 6,
            StatusKind::Silenced => 7,
            StatusKind::Hex => 8,
            StatusKind::Enthrall => 9,
            StatusKind::Insanity => 10,
            StatusKind::Blind => 12,
            StatusKind::Turncoat => 14,
            StatusKind::Web => 16,
            StatusKind::Paralyzed => 18,
            StatusKind::Sleep => 20,
            StatusKind::Unconscious => 22,
            StatusKind::Death => 24,
        }
    }
}

impl EffectType {
    /// Scale applied to the base skill fail chance.
    pub const fn multiplier(&self) -> f64 {
        match self {
            EffectType::Spell => 1.0,
            EffectType::Artifact => 0.9,
            EffectType::Thrown => 0.8,
        }
    }
}
