//! Resolution policies.
//!
//! The rules have been played with two different clamping conventions in
//! two places. Both are available here; the defaults are the canonical ones.

use serde::{Deserialize, Serialize};

/// Whether the combined fail chance is capped before it is split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FailClamp {
    /// Overall fail is `min(skill + level, 100)`; backfire and fizzle are
    /// split from the capped value and success is its complement.
    #[default]
    Clamped,
    /// Overall fail is the raw sum, which may exceed 100. Backfire and
    /// fizzle are split from the raw sum; success floors at 0.
    Unclamped,
}

/// Where a target's resist percentage is clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ResistClamp {
    /// The resist percentage is left raw. The damage range floors itself at
    /// 0, and each status clamps `resist + bonus` into [5, 95] on its own.
    #[default]
    PerStatus,
    /// The resist percentage is clamped into [5, 95] once and that value
    /// feeds both the damage range and the status chances.
    Consolidated,
}

/// Policies used when resolving a casting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResolutionConfig {
    pub fail_clamp: FailClamp,
    pub resist_clamp: ResistClamp,
}

impl ResolutionConfig {
    /// Lowest resist percentage a clamp may produce.
    pub const MIN_RESIST: i64 = 5;
    /// Highest resist percentage a clamp may produce.
    pub const MAX_RESIST: i64 = 95;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fail_clamp(mut self, fail_clamp: FailClamp) -> Self {
        self.fail_clamp = fail_clamp;
        self
    }

    pub fn with_resist_clamp(mut self, resist_clamp: ResistClamp) -> Self {
        self.resist_clamp = resist_clamp;
        self
    }

    /// Clamp a resist percentage into the allowed band.
    pub fn clamp_resist(pct: i64) -> i64 {
        pct.clamp(Self::MIN_RESIST, Self::MAX_RESIST)
    }
}
