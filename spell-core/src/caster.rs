//! Casters and their professions.

use crate::magic::{enumerated_str_impls, Element, Enumerated, Spellbook};
use crate::scores::{BookSkills, ElementSkills};
use serde::{Deserialize, Serialize};

/// How much of a profession's training goes into spellcasting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CasterClass {
    /// Caster level equals character level.
    Full,
    /// Caster level trails character level by four.
    Hybrid,
    /// No caster level at all.
    NonCaster,
}

impl CasterClass {
    /// Levels a hybrid caster lags behind a full caster.
    pub const HYBRID_LEVEL_LAG: i64 = 4;

    /// Effective caster level for a character of `level`.
    ///
    /// Low-level hybrids come out negative; this is not clamped.
    pub fn caster_level(&self, level: u32) -> i64 {
        let level = i64::from(level);
        match self {
            CasterClass::Full => level,
            CasterClass::Hybrid => level - Self::HYBRID_LEVEL_LAG,
            CasterClass::NonCaster => 0,
        }
    }
}

/// Character professions. Every profession is explicitly classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Profession {
    Mage,
    Priest,
    Alchemist,
    Psionic,
    Bishop,
    Samurai,
    Valkyrie,
    Lord,
    Ranger,
    Ninja,
    Monk,
    Fighter,
    Thief,
}

impl Profession {
    pub fn caster_class(&self) -> CasterClass {
        match self {
            Profession::Mage
            | Profession::Priest
            | Profession::Alchemist
            | Profession::Psionic
            | Profession::Bishop => CasterClass::Full,
            Profession::Samurai
            | Profession::Valkyrie
            | Profession::Lord
            | Profession::Ranger
            | Profession::Ninja
            | Profession::Monk => CasterClass::Hybrid,
            Profession::Fighter | Profession::Thief => CasterClass::NonCaster,
        }
    }
}

impl Enumerated for Profession {
    const KIND: &'static str = "profession";

    fn all() -> &'static [Self] {
        &[
            Profession::Mage,
            Profession::Priest,
            Profession::Alchemist,
            Profession::Psionic,
            Profession::Bishop,
            Profession::Samurai,
            Profession::Valkyrie,
            Profession::Lord,
            Profession::Ranger,
            Profession::Ninja,
            Profession::Monk,
            Profession::Fighter,
            Profession::Thief,
        ]
    }

    fn name(&self) -> &'static str {
        match self {
            Profession::Mage => "mage",
            Profession::Priest => "priest",
            Profession::Alchemist => "alchemist",
            Profession::Psionic => "psionic",
            Profession::Bishop => "bishop",
            Profession::Samurai => "samurai",
            Profession::Valkyrie => "valkyrie",
            Profession::Lord => "lord",
            Profession::Ranger => "ranger",
            Profession::Ninja => "ninja",
            Profession::Monk => "monk",
            Profession::Fighter => "fighter",
            Profession::Thief => "thief",
        }
    }
}

enumerated_str_impls!(Profession);

/// A spellcaster.
///
/// Caster level is derived once from profession and level. There are no
/// setters, so it cannot go stale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Caster {
    name: String,
    profession: Profession,
    level: u32,
    caster_level: i64,
    power_cast_skill: u32,
    book_skills: BookSkills,
    element_skills: ElementSkills,
}

impl Caster {
    pub const DEFAULT_NAME: &'static str = "Caster";

    /// Create an untrained caster; every skill starts at 0.
    pub fn new(name: impl Into<String>, profession: Profession, level: u32) -> Self {
        Self {
            name: name.into(),
            profession,
            level,
            caster_level: profession.caster_class().caster_level(level),
            power_cast_skill: 0,
            book_skills: BookSkills::new(),
            element_skills: ElementSkills::new(),
        }
    }

    pub fn with_book_skills(mut self, skills: BookSkills) -> Self {
        self.book_skills = skills;
        self
    }

    pub fn with_element_skills(mut self, skills: ElementSkills) -> Self {
        self.element_skills = skills;
        self
    }

    pub fn with_book_skill(mut self, book: Spellbook, skill: i32) -> Self {
        self.book_skills = self.book_skills.with(book, skill);
        self
    }

    pub fn with_element_skill(mut self, element: Element, skill: i32) -> Self {
        self.element_skills = self.element_skills.with(element, skill);
        self
    }

    pub fn with_power_cast_skill(mut self, skill: u32) -> Self {
        self.power_cast_skill = skill;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn profession(&self) -> Profession {
        self.profession
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn caster_level(&self) -> i64 {
        self.caster_level
    }

    pub fn power_cast_skill(&self) -> u32 {
        self.power_cast_skill
    }

    pub fn book_skills(&self) -> &BookSkills {
        &self.book_skills
    }

    pub fn element_skills(&self) -> &ElementSkills {
        &self.element_skills
    }

    pub fn book_skill(&self, book: Spellbook) -> i32 {
        self.book_skills.get(book)
    }

    pub fn element_skill(&self, element: Element) -> i32 {
        self.element_skills.get(element)
    }
}
