//! Per-casting choices.

use crate::magic::EffectType;
use serde::{Deserialize, Serialize};

/// How a particular casting is performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CastParams {
    /// Power tier invested in the casting. Level 7 matches the tabled
    /// difficulty; the outcome engine rejects 0.
    pub power_level: u32,
    #[serde(default)]
    pub effect_type: EffectType,
    /// Casting from an item whose nature is unknown to the caster.
    #[serde(default)]
    pub unidentified_item: bool,
}

impl CastParams {
    /// Flat fail chance added when casting from an unidentified item.
    pub const UNIDENTIFIED_ITEM_PENALTY: i32 = 30;

    /// A plain spell cast at `power_level`.
    pub fn new(power_level: u32) -> Self {
        Self {
            power_level,
            effect_type: EffectType::Spell,
            unidentified_item: false,
        }
    }

    pub fn with_effect_type(mut self, effect_type: EffectType) -> Self {
        self.effect_type = effect_type;
        self
    }

    pub fn unidentified(mut self) -> Self {
        self.unidentified_item = true;
        self
    }

    /// Fail chance added for the item source, if any.
    pub fn item_offset(&self) -> i32 {
        if self.unidentified_item {
            Self::UNIDENTIFIED_ITEM_PENALTY
        } else {
            0
        }
    }
}
