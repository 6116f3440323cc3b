//! Scenarios: one caster casting one spell at a group of targets.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use spell_core::{
    CastParams, Caster, CasterDef, Enemy, EnemyDef, ResolutionConfig, Spell, SpellDef,
};
use std::collections::BTreeMap;
use std::path::Path;

/// A scenario as written in a JSON file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioFile {
    pub caster: CasterDef,
    pub spell: SpellDef,
    pub params: CastParams,
    #[serde(default)]
    pub targets: Vec<EnemyDef>,
    #[serde(default)]
    pub config: ResolutionConfig,
}

impl ScenarioFile {
    /// A level 5 samurai with a little wizardry training casts Terror at an
    /// oni.
    pub fn demo() -> Self {
        Self {
            caster: CasterDef {
                name: "Toshi".to_string(),
                profession: "samurai".to_string(),
                level: 5,
                power_cast_skill: 0,
                book_skills: BTreeMap::from([("wizardry".to_string(), 3)]),
                element_skills: BTreeMap::from([("fire".to_string(), 0)]),
            },
            spell: SpellDef {
                name: "Terror".to_string(),
                book: "wizardry".to_string(),
                element: "mental".to_string(),
                level: 1,
                base_cost: 3,
                status_list: vec!["afraid".to_string()],
            },
            params: CastParams::new(1),
            targets: vec![EnemyDef {
                name: "Oni".to_string(),
                level: 8,
                resistances: BTreeMap::from([
                    ("fire".to_string(), 25),
                    ("water".to_string(), 80),
                    ("earth".to_string(), 60),
                    ("air".to_string(), 70),
                ]),
            }],
            config: ResolutionConfig::default(),
        }
    }

    /// Read a scenario file from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read scenario {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse scenario {}", path.display()))
    }
}

/// A validated scenario, ready to resolve.
#[derive(Debug, Clone)]
pub struct Scenario {
    pub caster: Caster,
    pub spell: Spell,
    pub params: CastParams,
    pub targets: Vec<Enemy>,
    pub config: ResolutionConfig,
}

impl TryFrom<&ScenarioFile> for Scenario {
    type Error = anyhow::Error;

    fn try_from(file: &ScenarioFile) -> Result<Self> {
        let caster = Caster::try_from(&file.caster).context("Invalid caster")?;
        let spell = Spell::try_from(&file.spell).context("Invalid spell")?;
        let targets = file
            .targets
            .iter()
            .enumerate()
            .map(|(i, def)| {
                Enemy::try_from(def).with_context(|| format!("Invalid target {i} ({})", def.name))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            caster,
            spell,
            params: file.params,
            targets,
            config: file.config,
        })
    }
}
