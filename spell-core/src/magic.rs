//! Closed sets of magic: spellbooks, elements, status effects and
//! delivery methods.
//!
//! Every set is an exhaustive enum. Parsing a name that is not a member
//! yields a [`ValidationError`] listing the members, so unknown values are
//! rejected at the boundary instead of silently defaulting.

use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A fixed, ordered set of named values.
pub trait Enumerated: Copy + Ord + fmt::Debug + 'static {
    /// Name of the set, used in error messages (e.g. "spellbook").
    const KIND: &'static str;

    /// Every member, in canonical order.
    fn all() -> &'static [Self];

    /// The member's canonical name.
    fn name(&self) -> &'static str;

    /// Look up a member by canonical name.
    fn parse_name(value: &str) -> Result<Self, ValidationError> {
        Self::all()
            .iter()
            .copied()
            .find(|member| member.name() == value)
            .ok_or_else(|| ValidationError::UnknownOption {
                kind: Self::KIND,
                value: value.to_string(),
                valid: Self::all().iter().map(|member| member.name()).collect(),
            })
    }
}

/// Schools of spells a caster trains in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Spellbook {
    Wizardry,
    Divinity,
    Alchemy,
    Psionics,
}

impl Enumerated for Spellbook {
    const KIND: &'static str = "spellbook";

    fn all() -> &'static [Self] {
        &[
            Spellbook::Wizardry,
            Spellbook::Divinity,
            Spellbook::Alchemy,
            Spellbook::Psionics,
        ]
    }

    fn name(&self) -> &'static str {
        match self {
            Spellbook::Wizardry => "wizardry",
            Spellbook::Divinity => "divinity",
            Spellbook::Alchemy => "alchemy",
            Spellbook::Psionics => "psionics",
        }
    }
}

/// Elemental realm of a spell, and the axis enemies resist along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Element {
    Fire,
    Water,
    Air,
    Earth,
    Mental,
    Divine,
}

impl Enumerated for Element {
    const KIND: &'static str = "element";

    fn all() -> &'static [Self] {
        &[
            Element::Fire,
            Element::Water,
            Element::Air,
            Element::Earth,
            Element::Mental,
            Element::Divine,
        ]
    }

    fn name(&self) -> &'static str {
        match self {
            Element::Fire => "fire",
            Element::Water => "water",
            Element::Air => "air",
            Element::Earth => "earth",
            Element::Mental => "mental",
            Element::Divine => "divine",
        }
    }
}

/// Status effects a spell may inflict on its targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StatusKind {
    DrainStamina,
    Disease,
    Irritated,
    Nausea,
    Slow,
    Afraid,
    Poisoned,
    Silenced,
    Hex,
    Enthrall,
    Insanity,
    Blind,
    Turncoat,
    Web,
    Sleep,
    Paralyzed,
    Unconscious,
    Death,
}

impl Enumerated for StatusKind {
    const KIND: &'static str = "status";

    fn all() -> &'static [Self] {
        &[
            StatusKind::DrainStamina,
            StatusKind::Disease,
            StatusKind::Irritated,
            StatusKind::Nausea,
            StatusKind::Slow,
            StatusKind::Afraid,
            StatusKind::Poisoned,
            StatusKind::Silenced,
            StatusKind::Hex,
            StatusKind::Enthrall,
            StatusKind::Insanity,
            StatusKind::Blind,
            StatusKind::Turncoat,
            StatusKind::Web,
            StatusKind::Sleep,
            StatusKind::Paralyzed,
            StatusKind::Unconscious,
            StatusKind::Death,
        ]
    }

    fn name(&self) -> &'static str {
        match self {
            StatusKind::DrainStamina => "drainStamina",
            StatusKind::Disease => "disease",
            StatusKind::Irritated => "irritated",
            StatusKind::Nausea => "nausea",
            StatusKind::Slow => "slow",
            StatusKind::Afraid => "afraid",
            StatusKind::Poisoned => "poisoned",
            StatusKind::Silenced => "silenced",
            StatusKind::Hex => "hex",
            StatusKind::Enthrall => "enthrall",
            StatusKind::Insanity => "insanity",
            StatusKind::Blind => "blind",
            StatusKind::Turncoat => "turncoat",
            StatusKind::Web => "web",
            StatusKind::Sleep => "sleep",
            StatusKind::Paralyzed => "paralyzed",
            StatusKind::Unconscious => "unconscious",
            StatusKind::Death => "death",
        }
    }
}

/// How the magic is delivered.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum EffectType {
    /// Cast directly by the caster.
    #[default]
    Spell,
    /// Invoked from a magic item.
    Artifact,
    /// Thrown, e.g. a potion or bomb.
    Thrown,
}

impl Enumerated for EffectType {
    const KIND: &'static str = "effect type";

    fn all() -> &'static [Self] {
        &[EffectType::Spell, EffectType::Artifact, EffectType::Thrown]
    }

    fn name(&self) -> &'static str {
        match self {
            EffectType::Spell => "spell",
            EffectType::Artifact => "artifact",
            EffectType::Thrown => "thrown",
        }
    }
}

macro_rules! enumerated_str_impls {
    ($($ty:ty),* $(,)?) => {$(
        impl ::std::str::FromStr for $ty {
            type Err = $crate::error::ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <$ty as $crate::magic::Enumerated>::parse_name(s)
            }
        }

        impl ::std::fmt::Display for $ty {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::magic::Enumerated::name(self))
            }
        }
    )*};
}

pub(crate) use enumerated_str_impls;

enumerated_str_impls!(Spellbook, Element, StatusKind, EffectType);
