//! Spell failure and resistance resolution engine.
//!
//! This crate provides:
//! - Rule tables for skill, level and status difficulty
//! - Validated spells, casters, enemies and casting parameters
//! - An outcome engine for skill/level failure, backfire and fizzle chances
//! - An impact engine for damage efficiency and status chances per target
//!
//! Everything is deterministic: the engine produces probabilities, it never
//! rolls dice.
//!
//! # Quick Start
//!
//! ```
//! use spell_core::{CastParams, Caster, Casting, Element, Enemy, Profession, Spell, Spellbook, StatusKind};
//!
//! let spell = Spell::new("Terror", Spellbook::Wizardry, Element::Mental, 1, 3, [StatusKind::Afraid])?;
//! let caster = Caster::new("Toshi", Profession::Samurai, 5).with_book_skill(Spellbook::Wizardry, 3);
//! let casting = Casting::new(&spell, &caster, CastParams::new(1))?;
//!
//! assert_eq!(casting.outcome().success, 30);
//!
//! let impacts = casting.impact(&[Enemy::new("Oni", 8)]);
//! assert_eq!(impacts[0].damage.min, 73);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod caster;
pub mod config;
pub mod defs;
pub mod enemy;
pub mod error;
pub mod impact;
pub mod magic;
pub mod outcome;
pub mod params;
pub mod scores;
pub mod spell;
pub mod tables;

// Primary public API
pub use caster::{Caster, CasterClass, Profession};
pub use config::{FailClamp, ResistClamp, ResolutionConfig};
pub use defs::{CasterDef, EnemyDef, SpellDef};
pub use enemy::Enemy;
pub use error::{CastError, ValidationError};
pub use impact::{resolve_impact, EfficiencyRange, ImpactContext, TargetImpact};
pub use magic::{EffectType, Element, Enumerated, Spellbook, StatusKind};
pub use outcome::{resolve_outcome, Casting, CastingSummary, OutcomeChances};
pub use params::CastParams;
pub use scores::{BookSkills, ElementSkills, Resistances, ScoreMap};
pub use spell::Spell;
