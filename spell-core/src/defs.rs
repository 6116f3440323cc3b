//! Raw, name-keyed definitions of spells, casters and enemies.
//!
//! These deserialize from loosely typed input (JSON scenario files, CLI
//! arguments) and validate into the strongly typed entities via `TryFrom`.
//! Unknown names surface as [`ValidationError`]s that list the valid
//! options, rather than as deserialization failures.

use crate::caster::{Caster, Profession};
use crate::enemy::Enemy;
use crate::error::ValidationError;
use crate::magic::{Element, Enumerated, Spellbook, StatusKind};
use crate::scores::{BookSkills, ElementSkills, Resistances};
use crate::spell::Spell;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Spell definition with names in place of enum values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpellDef {
    pub name: String,
    pub book: String,
    pub element: String,
    pub level: u32,
    pub base_cost: u32,
    #[serde(default)]
    pub status_list: Vec<String>,
}

impl TryFrom<&SpellDef> for Spell {
    type Error = ValidationError;

    fn try_from(def: &SpellDef) -> Result<Self, Self::Error> {
        let book = Spellbook::parse_name(&def.book)?;
        let element = Element::parse_name(&def.element)?;
        let statuses = def
            .status_list
            .iter()
            .map(|name| StatusKind::parse_name(name))
            .collect::<Result<Vec<_>, _>>()?;
        Spell::new(def.name.clone(), book, element, def.level, def.base_cost, statuses)
    }
}

/// Caster definition with names in place of enum values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CasterDef {
    #[serde(default = "default_caster_name")]
    pub name: String,
    pub profession: String,
    pub level: u32,
    #[serde(default)]
    pub power_cast_skill: u32,
    #[serde(default)]
    pub book_skills: BTreeMap<String, i32>,
    #[serde(default)]
    pub element_skills: BTreeMap<String, i32>,
}

fn default_caster_name() -> String {
    Caster::DEFAULT_NAME.to_string()
}

impl TryFrom<&CasterDef> for Caster {
    type Error = ValidationError;

    fn try_from(def: &CasterDef) -> Result<Self, Self::Error> {
        let profession = Profession::parse_name(&def.profession)?;
        let book_skills =
            BookSkills::from_named(def.book_skills.iter().map(|(k, &v)| (k.as_str(), v)))?;
        let element_skills =
            ElementSkills::from_named(def.element_skills.iter().map(|(k, &v)| (k.as_str(), v)))?;

        Ok(Caster::new(def.name.clone(), profession, def.level)
            .with_power_cast_skill(def.power_cast_skill)
            .with_book_skills(book_skills)
            .with_element_skills(element_skills))
    }
}

/// Enemy definition with names in place of enum values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnemyDef {
    #[serde(default = "default_enemy_name")]
    pub name: String,
    pub level: u32,
    #[serde(default)]
    pub resistances: BTreeMap<String, i32>,
}

fn default_enemy_name() -> String {
    Enemy::DEFAULT_NAME.to_string()
}

impl TryFrom<&EnemyDef> for Enemy {
    type Error = ValidationError;

    fn try_from(def: &EnemyDef) -> Result<Self, Self::Error> {
        let resistances =
            Resistances::from_named(def.resistances.iter().map(|(k, &v)| (k.as_str(), v)))?;
        Ok(Enemy::new(def.name.clone(), def.level).with_resistances(resistances))
    }
}
