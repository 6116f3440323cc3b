//! Impact engine: how much of a casting gets through each target's
//! resistance.
//!
//! # Formula
//!
//! ```text
//! cast_strength         = base_strength + power_level + caster_level / 2
//! power_cast_factor     = 100 + (1 + power_cast_skill / 4) / 2
//! reference_enemy_level = cast_strength * power_cast_factor / 100
//!
//! per target:
//! resist_pct     = resistance[element] + (target_level - reference_enemy_level) * 3
//! min_efficiency = max(100 - max(resist_pct + resist_pct / 2, 0), 0)
//! max_efficiency = max(100 - max(resist_pct - resist_pct / 2, 0), 0)
//! status_resist  = 100 - clamp(resist_pct + status_bonus, 5, 95)
//! ```
//!
//! Note the sign flip on the last line: a status' resist percentage is the
//! chance it *lands*, so a bigger table bonus lowers it.

use crate::caster::Caster;
use crate::config::{ResistClamp, ResolutionConfig};
use crate::enemy::Enemy;
use crate::error::CastError;
use crate::magic::{Element, StatusKind};
use crate::outcome::Casting;
use crate::params::CastParams;
use crate::spell::Spell;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::trace;

/// Resist points gained per level a target sits above the reference level.
pub const RESIST_PER_LEVEL: i64 = 3;

/// Overall power a casting brings to bear.
pub fn cast_strength(base_strength: i32, power_level: u32, caster_level: i64) -> i64 {
    i64::from(base_strength)
        .saturating_add(i64::from(power_level))
        .saturating_add(caster_level / 2)
}

/// Percentage multiplier from power-cast training; never below 100.
pub fn power_cast_factor(power_cast_skill: u32) -> i64 {
    100 + (1 + i64::from(power_cast_skill / 4)) / 2
}

/// Effective level a casting projects onto its targets.
pub fn reference_enemy_level(cast_strength: i64, power_cast_factor: i64) -> i64 {
    cast_strength.saturating_mul(power_cast_factor) / 100
}

/// Raw resist percentage of a target with `base_resist` at `target_level`.
pub fn resist_pct(base_resist: i32, target_level: u32, reference_level: i64) -> i64 {
    let level_gap = i64::from(target_level).saturating_sub(reference_level);
    i64::from(base_resist).saturating_add(level_gap.saturating_mul(RESIST_PER_LEVEL))
}

/// Band of damage dealt through a given resist percentage.
pub fn damage_efficiency(resist_pct: i64) -> EfficiencyRange {
    let half = resist_pct / 2;
    EfficiencyRange {
        min: efficiency(resist_pct.saturating_add(half)),
        max: efficiency(resist_pct - half),
    }
}

/// `100 - loss`, with the loss taken within [0, 100].
fn efficiency(loss: i64) -> i32 {
    (100 - loss.clamp(0, 100)) as i32
}

/// Chance a status lands on a target with `resist_pct`.
pub fn status_resist_pct(resist_pct: i64, status: StatusKind) -> i32 {
    let resist = resist_pct.saturating_add(i64::from(status.resist_bonus()));
    (100 - ResolutionConfig::clamp_resist(resist)) as i32
}

/// Percent of full damage dealt, at worst and at best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct EfficiencyRange {
    pub min: i32,
    pub max: i32,
}

/// Result of a casting against one target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetImpact {
    pub target: String,
    /// The target's resistance to the spell's element, before level effects.
    pub base_resist: i32,
    pub resist_pct: i64,
    pub damage: EfficiencyRange,
    /// Chance each of the spell's statuses lands. Repeated statuses appear once.
    pub statuses: BTreeMap<StatusKind, i32>,
}

/// Everything about a casting the impact engine needs, shared by all
/// targets of that casting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImpactContext {
    pub reference_enemy_level: i64,
    pub element: Element,
    pub statuses: Vec<StatusKind>,
    pub resist_clamp: ResistClamp,
}

impl ImpactContext {
    pub fn from_casting(casting: &Casting<'_>) -> Self {
        Self {
            reference_enemy_level: casting.reference_enemy_level(),
            element: casting.spell().element(),
            statuses: casting.spell().statuses().to_vec(),
            resist_clamp: casting.config().resist_clamp,
        }
    }

    /// Evaluate against a single target.
    pub fn evaluate(&self, enemy: &Enemy) -> TargetImpact {
        let base_resist = enemy.resistance(self.element);
        let raw = resist_pct(base_resist, enemy.level(), self.reference_enemy_level);
        let resist = match self.resist_clamp {
            ResistClamp::PerStatus => raw,
            ResistClamp::Consolidated => ResolutionConfig::clamp_resist(raw),
        };
        let damage = damage_efficiency(resist);
        let statuses = self
            .statuses
            .iter()
            .map(|&status| (status, status_resist_pct(resist, status)))
            .collect();

        trace!(
            enemy = enemy.name(),
            base_resist,
            resist_pct = resist,
            min_efficiency = damage.min,
            max_efficiency = damage.max,
            "evaluated target"
        );

        TargetImpact {
            target: enemy.name().to_string(),
            base_resist,
            resist_pct: resist,
            damage,
            statuses,
        }
    }

    /// Evaluate against every target, in order.
    pub fn evaluate_all<'e>(&self, enemies: impl IntoIterator<Item = &'e Enemy>) -> Vec<TargetImpact> {
        enemies.into_iter().map(|enemy| self.evaluate(enemy)).collect()
    }
}

impl Casting<'_> {
    /// One impact record per target, all sharing this casting's reference
    /// level.
    pub fn impact<'e>(&self, enemies: impl IntoIterator<Item = &'e Enemy>) -> Vec<TargetImpact> {
        ImpactContext::from_casting(self).evaluate_all(enemies)
    }
}

/// Impact of casting `spell` against `enemies` with the canonical policies.
pub fn resolve_impact(
    spell: &Spell,
    caster: &Caster,
    params: CastParams,
    enemies: &[Enemy],
) -> Result<Vec<TargetImpact>, CastError> {
    Casting::new(spell, caster, params).map(|casting| casting.impact(enemies))
}
