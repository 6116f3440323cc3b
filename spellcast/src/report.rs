//! Text and JSON reports of a resolved scenario.

use crate::scenario::Scenario;
use serde::Serialize;
use spell_core::{
    CastError, Caster, Casting, CastingSummary, Enemy, Enumerated, OutcomeChances,
    ResolutionConfig, Spell, TargetImpact,
};
use std::fmt::Write;

/// Everything computed for one scenario.
#[derive(Debug, Clone, Serialize)]
pub struct Report<'a> {
    pub caster: &'a Caster,
    pub spell: &'a Spell,
    pub casting: CastingSummary,
    pub outcome: OutcomeChances,
    pub targets: &'a [Enemy],
    pub impacts: Vec<TargetImpact>,
    pub config: ResolutionConfig,
}

impl<'a> Report<'a> {
    /// Resolve a scenario.
    pub fn build(scenario: &'a Scenario) -> Result<Self, CastError> {
        let casting = Casting::with_config(
            &scenario.spell,
            &scenario.caster,
            scenario.params,
            scenario.config,
        )?;

        Ok(Self {
            caster: &scenario.caster,
            spell: &scenario.spell,
            casting: casting.summary(),
            outcome: casting.outcome(),
            targets: &scenario.targets,
            impacts: casting.impact(&scenario.targets),
            config: scenario.config,
        })
    }

    /// The full text report.
    pub fn render(&self) -> String {
        let mut out = String::new();
        section(&mut out, "CASTER", &render_caster(self.caster));
        section(&mut out, "SPELL", &render_spell(self.spell));
        section(&mut out, "SPELL INSTANCE", &render_casting(&self.casting));
        section(&mut out, "CASTING OUTCOMES", &render_outcome(&self.outcome));
        let targets: Vec<_> = self.targets.iter().map(render_enemy).collect();
        section(&mut out, "TARGETS", &targets.join("\n"));
        section(&mut out, "EFFICIENCIES", &render_impacts(&self.impacts));
        out
    }
}

fn section(out: &mut String, title: &str, body: &str) {
    let _ = writeln!(out, "{title}");
    let _ = writeln!(out, "{body}");
}

pub fn render_caster(caster: &Caster) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "  Name: {}", caster.name());
    let _ = writeln!(out, "  Class: {}", caster.profession());
    let _ = writeln!(out, "  Level: {}", caster.level());
    let _ = writeln!(out, "  Caster Level: {}", caster.caster_level());
    let _ = writeln!(out, "  School Skills:");
    for (book, skill) in caster.book_skills().iter() {
        let _ = writeln!(out, "    {}: {skill}", book.name());
    }
    let _ = writeln!(out, "  Element Skills:");
    for (element, skill) in caster.element_skills().iter() {
        let _ = writeln!(out, "    {}: {skill}", element.name());
    }
    out
}

pub fn render_spell(spell: &Spell) -> String {
    let statuses: Vec<_> = spell.statuses().iter().map(|s| s.name()).collect();
    let mut out = String::new();
    let _ = writeln!(out, "  Name: {}", spell.name());
    let _ = writeln!(out, "  School: {}", spell.book());
    let _ = writeln!(out, "  Realm: {}", spell.element());
    let _ = writeln!(out, "  Level: {}", spell.level());
    let _ = writeln!(out, "  Cost/Level: {}", spell.base_cost());
    let _ = writeln!(out, "  Statuses: [{}]", statuses.join(", "));
    let _ = writeln!(
        out,
        "  Weighted skill to reliably cast at base power: {}",
        spell.reliable_skill_at_base_power()
    );
    let _ = writeln!(
        out,
        "  Weighted skill to reliably cast at max power: {}",
        spell.reliable_skill_at_max_power()
    );
    let _ = writeln!(
        out,
        "  Caster level to reliably cast at base power: {}",
        spell.reliable_caster_level()
    );
    let _ = writeln!(
        out,
        "  Base power to overcome resistance: {}",
        spell.base_strength()
    );
    out
}

pub fn render_casting(casting: &CastingSummary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "  Power Level: {}", casting.power_level);
    let _ = writeln!(out, "  Source: {}", casting.effect_type);
    let _ = writeln!(out, "    Unidentified Item?: {}", casting.unidentified_item);
    let _ = writeln!(out, "  Weighted Caster Skill: {}", casting.weighted_skill);
    let _ = writeln!(out, "  Skill Difficulty at Level: {}", casting.cast_skill_difficulty);
    let _ = writeln!(out, "  Reference Enemy Level: {}", casting.reference_enemy_level);
    out
}

pub fn render_outcome(outcome: &OutcomeChances) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "  Success: {}%", outcome.success);
    let _ = writeln!(out, "  Fail: {}%", outcome.overall_fail);
    let _ = writeln!(out, "    By Reason:");
    let _ = writeln!(out, "      Skill: {}%", outcome.skill_fail);
    let _ = writeln!(out, "      Level: {}%", outcome.level_fail);
    let _ = writeln!(out, "    By Subtype:");
    let _ = writeln!(out, "      Backfire: {}%", outcome.backfire);
    let _ = writeln!(out, "      Fizzle: {}%", outcome.fizzle);
    out
}

pub fn render_enemy(enemy: &Enemy) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "  Type/Name: {}", enemy.name());
    let _ = writeln!(out, "  Level: {}", enemy.level());
    let _ = writeln!(out, "  Resistances:");
    for (element, resist) in enemy.resistances().iter() {
        let _ = writeln!(out, "    {}: {resist}", element.name());
    }
    out
}

pub fn render_impacts(impacts: &[TargetImpact]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "  Damage Profiles:");
    for (i, impact) in impacts.iter().enumerate() {
        let _ = writeln!(
            out,
            "    {} {i}: {}-{}%",
            impact.target, impact.damage.min, impact.damage.max
        );
    }
    let _ = writeln!(out, "  Status Profiles:");
    for (i, impact) in impacts.iter().enumerate() {
        let statuses: Vec<_> = impact
            .statuses
            .iter()
            .map(|(status, pct)| format!("{status}: {pct}%"))
            .collect();
        let _ = writeln!(out, "    {} {i}: {{{}}}", impact.target, statuses.join(", "));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::ScenarioFile;

    fn demo() -> Scenario {
        Scenario::try_from(&ScenarioFile::demo()).unwrap()
    }

    #[test]
    fn test_demo_report_numbers() {
        let scenario = demo();
        let report = Report::build(&scenario).unwrap();
        assert_eq!(report.outcome.success, 30);
        assert_eq!(report.casting.reference_enemy_level, 2);
        assert_eq!(report.impacts.len(), 1);
        assert_eq!(report.impacts[0].damage.min, 73);
        assert_eq!(report.impacts[0].damage.max, 91);
    }

    #[test]
    fn test_render_contains_sections() {
        let scenario = demo();
        let text = Report::build(&scenario).unwrap().render();
        for title in [
            "CASTER",
            "SPELL",
            "SPELL INSTANCE",
            "CASTING OUTCOMES",
            "TARGETS",
            "EFFICIENCIES",
        ] {
            assert!(text.contains(title), "missing {title}");
        }
        assert!(text.contains("Success: 30%"));
        assert!(text.contains("Backfire: 23%"));
        assert!(text.contains("Oni 0: 73-91%"));
        assert!(text.contains("Oni 0: {afraid: 77%}"));
        assert!(text.contains("Caster Level: 1"));
    }

    #[test]
    fn test_render_spell_thresholds() {
        let scenario = demo();
        let text = render_spell(&scenario.spell);
        assert!(text.contains("Statuses: [afraid]"));
        assert!(text.contains("at base power: 7"));
        assert!(text.contains("at max power: 50"));
    }

    #[test]
    fn test_json_report_shape() {
        let scenario = demo();
        let report = Report::build(&scenario).unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["outcome"]["fizzle"], 47);
        assert_eq!(json["caster"]["casterLevel"], 1);
        assert_eq!(json["caster"]["bookSkills"]["wizardry"], 3);
        assert_eq!(json["impacts"][0]["statuses"]["afraid"], 77);
        assert_eq!(json["config"]["failClamp"], "clamped");
    }

    #[test]
    fn test_zero_power_fails_to_build() {
        let mut scenario = demo();
        scenario.params.power_level = 0;
        assert_eq!(Report::build(&scenario).unwrap_err(), CastError::ZeroPowerLevel);
    }
}
