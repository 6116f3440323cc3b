//! Outcome engine: how likely a casting is to succeed, fizzle or backfire.
//!
//! # Formula
//!
//! ```text
//! weighted_skill        = (book_skill + 4 * element_skill) / 5
//! cast_skill_difficulty = skill_difficulty * power_level / 7
//! base_skill_fail       = trunc(70 * (1 - weighted_skill / cast_skill_difficulty))
//! skill_fail            = max(trunc(base_skill_fail * effect_multiplier) + item_offset, 0)
//! level_fail            = max((level_difficulty - caster_level + power_level - 1) * spell_level, 0)
//! overall_fail          = min(skill_fail + level_fail, 100)
//! backfire              = overall_fail / 3 if overall_fail >= 15 else 0
//! fizzle                = overall_fail - backfire
//! success               = 100 - overall_fail
//! ```
//!
//! Integer division truncates toward zero throughout.

use crate::caster::Caster;
use crate::config::{FailClamp, ResolutionConfig};
use crate::error::CastError;
use crate::impact;
use crate::magic::EffectType;
use crate::params::CastParams;
use crate::spell::Spell;
use serde::Serialize;
use tracing::debug;

/// Skill fail chance of a caster with no relevant skill at all.
pub const BASE_SKILL_FAIL: f64 = 70.0;

/// Power level at which the tabled skill difficulty applies in full.
pub const FULL_POWER_LEVEL: i64 = 7;

/// Overall fail chances below this only ever fizzle.
pub const BACKFIRE_THRESHOLD: i64 = 15;

/// Blend of book and element skill, weighted 1:4 toward the element.
pub fn weighted_skill(book_skill: i32, element_skill: i32) -> i64 {
    (i64::from(book_skill) + 4 * i64::from(element_skill)) / 5
}

/// Skill difficulty scaled to the chosen power level.
pub fn cast_skill_difficulty(skill_difficulty: i32, power_level: u32) -> i64 {
    i64::from(skill_difficulty) * i64::from(power_level) / FULL_POWER_LEVEL
}

/// Chance to fail from lack of skill.
///
/// `cast_difficulty` must be non-zero.
pub fn skill_fail_chance(
    weighted_skill: i64,
    cast_difficulty: i64,
    effect_type: EffectType,
    item_offset: i32,
) -> i64 {
    let relative_skill = weighted_skill as f64 / cast_difficulty as f64;
    // float to int casts saturate
    let base = (BASE_SKILL_FAIL * (1.0 - relative_skill)) as i64;
    let scaled = (base as f64 * effect_type.multiplier()) as i64;
    scaled.saturating_add(i64::from(item_offset)).max(0)
}

/// Chance to fail from lack of caster level.
pub fn level_fail_chance(
    level_difficulty: i32,
    caster_level: i64,
    power_level: u32,
    spell_level: u32,
) -> i64 {
    let level_deficit = i64::from(level_difficulty).saturating_sub(caster_level);
    level_deficit
        .saturating_add(i64::from(power_level) - 1)
        .saturating_mul(i64::from(spell_level))
        .max(0)
}

/// Split an overall fail chance into `(backfire, fizzle)`.
pub fn split_failure(overall_fail: i64) -> (i64, i64) {
    let backfire = if overall_fail >= BACKFIRE_THRESHOLD {
        overall_fail / 3
    } else {
        0
    };
    (backfire, overall_fail - backfire)
}

/// Outcome percentages for one casting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutcomeChances {
    pub skill_fail: i64,
    pub level_fail: i64,
    pub overall_fail: i64,
    pub backfire: i64,
    pub fizzle: i64,
    pub success: i64,
}

impl OutcomeChances {
    /// Combine the two failure sources under `clamp`.
    pub fn from_failures(skill_fail: i64, level_fail: i64, clamp: FailClamp) -> Self {
        let sum = skill_fail.saturating_add(level_fail);
        let overall_fail = match clamp {
            FailClamp::Clamped => sum.min(100),
            FailClamp::Unclamped => sum,
        };
        let (backfire, fizzle) = split_failure(overall_fail);
        Self {
            skill_fail,
            level_fail,
            overall_fail,
            backfire,
            fizzle,
            success: 100i64.saturating_sub(overall_fail).max(0),
        }
    }
}

/// A spell about to be cast by a caster with chosen parameters.
///
/// All derived values are computed once in the constructor; the casting
/// borrows its spell and caster and holds no other state.
#[derive(Debug, Clone)]
pub struct Casting<'a> {
    spell: &'a Spell,
    caster: &'a Caster,
    params: CastParams,
    config: ResolutionConfig,
    weighted_skill: i64,
    cast_skill_difficulty: i64,
    outcome: OutcomeChances,
    cast_strength: i64,
    power_cast_factor: i64,
    reference_enemy_level: i64,
}

impl<'a> Casting<'a> {
    /// Resolve with the canonical policies.
    pub fn new(spell: &'a Spell, caster: &'a Caster, params: CastParams) -> Result<Self, CastError> {
        Self::with_config(spell, caster, params, ResolutionConfig::default())
    }

    /// Resolve with explicit policies.
    pub fn with_config(
        spell: &'a Spell,
        caster: &'a Caster,
        params: CastParams,
        config: ResolutionConfig,
    ) -> Result<Self, CastError> {
        if params.power_level == 0 {
            return Err(CastError::ZeroPowerLevel);
        }

        let weighted_skill = weighted_skill(
            caster.book_skill(spell.book()),
            caster.element_skill(spell.element()),
        );
        let cast_skill_difficulty =
            cast_skill_difficulty(spell.skill_difficulty(), params.power_level);
        if cast_skill_difficulty == 0 {
            return Err(CastError::ZeroCastDifficulty {
                skill_difficulty: spell.skill_difficulty(),
                power_level: params.power_level,
            });
        }

        let skill_fail = skill_fail_chance(
            weighted_skill,
            cast_skill_difficulty,
            params.effect_type,
            params.item_offset(),
        );
        let level_fail = level_fail_chance(
            spell.level_difficulty(),
            caster.caster_level(),
            params.power_level,
            spell.level(),
        );
        let outcome = OutcomeChances::from_failures(skill_fail, level_fail, config.fail_clamp);

        let cast_strength =
            impact::cast_strength(spell.base_strength(), params.power_level, caster.caster_level());
        let power_cast_factor = impact::power_cast_factor(caster.power_cast_skill());
        let reference_enemy_level = impact::reference_enemy_level(cast_strength, power_cast_factor);

        debug!(
            spell = spell.name(),
            caster = caster.name(),
            power_level = params.power_level,
            weighted_skill,
            cast_skill_difficulty,
            skill_fail,
            level_fail,
            overall_fail = outcome.overall_fail,
            reference_enemy_level,
            "resolved casting"
        );

        Ok(Self {
            spell,
            caster,
            params,
            config,
            weighted_skill,
            cast_skill_difficulty,
            outcome,
            cast_strength,
            power_cast_factor,
            reference_enemy_level,
        })
    }

    pub fn spell(&self) -> &'a Spell {
        self.spell
    }

    pub fn caster(&self) -> &'a Caster {
        self.caster
    }

    pub fn params(&self) -> CastParams {
        self.params
    }

    pub fn config(&self) -> ResolutionConfig {
        self.config
    }

    pub fn weighted_skill(&self) -> i64 {
        self.weighted_skill
    }

    pub fn cast_skill_difficulty(&self) -> i64 {
        self.cast_skill_difficulty
    }

    pub fn cast_strength(&self) -> i64 {
        self.cast_strength
    }

    pub fn power_cast_factor(&self) -> i64 {
        self.power_cast_factor
    }

    /// The effective level this casting projects onto every target.
    pub fn reference_enemy_level(&self) -> i64 {
        self.reference_enemy_level
    }

    pub fn outcome(&self) -> OutcomeChances {
        self.outcome
    }

    /// Intermediate values of the casting, detached from its borrows.
    pub fn summary(&self) -> CastingSummary {
        CastingSummary {
            spell: self.spell.name().to_string(),
            caster: self.caster.name().to_string(),
            power_level: self.params.power_level,
            effect_type: self.params.effect_type,
            unidentified_item: self.params.unidentified_item,
            weighted_skill: self.weighted_skill,
            cast_skill_difficulty: self.cast_skill_difficulty,
            cast_strength: self.cast_strength,
            power_cast_factor: self.power_cast_factor,
            reference_enemy_level: self.reference_enemy_level,
        }
    }
}

/// Owned snapshot of a casting's intermediate values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CastingSummary {
    pub spell: String,
    pub caster: String,
    pub power_level: u32,
    pub effect_type: EffectType,
    pub unidentified_item: bool,
    pub weighted_skill: i64,
    pub cast_skill_difficulty: i64,
    pub cast_strength: i64,
    pub power_cast_factor: i64,
    pub reference_enemy_level: i64,
}

/// Outcome chances for casting `spell` with the canonical policies.
pub fn resolve_outcome(
    spell: &Spell,
    caster: &Caster,
    params: CastParams,
) -> Result<OutcomeChances, CastError> {
    Casting::new(spell, caster, params).map(|casting| casting.outcome())
}
