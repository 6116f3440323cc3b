//! QA tests for the outcome engine through the public API.
//!
//! These tests verify:
//! - The reference samurai scenario end to end
//! - Effect types and unidentified items
//! - Clamped and unclamped overall failure
//! - Invariants that hold across a sweep of casters and spells
//!
//! Run with: `cargo test -p spell-core --test qa_outcome`

use spell_core::{
    resolve_outcome, CastError, CastParams, Caster, Casting, EffectType, Element, FailClamp,
    OutcomeChances, Profession, ResolutionConfig, Spell, Spellbook, StatusKind,
};

fn fireball() -> Spell {
    Spell::new("Fireball", Spellbook::Wizardry, Element::Fire, 3, 6, [StatusKind::Blind]).unwrap()
}

fn battle_mage() -> Caster {
    Caster::new("Ayla", Profession::Mage, 10)
        .with_book_skill(Spellbook::Wizardry, 20)
        .with_element_skill(Element::Fire, 30)
        .with_power_cast_skill(12)
}

fn smite() -> Spell {
    Spell::new(
        "Smite",
        Spellbook::Divinity,
        Element::Divine,
        4,
        8,
        [StatusKind::Paralyzed, StatusKind::Sleep],
    )
    .unwrap()
}

fn novice_priest() -> Caster {
    Caster::new("Novice", Profession::Priest, 2)
        .with_book_skill(Spellbook::Divinity, 5)
        .with_element_skill(Element::Divine, 5)
}

// =============================================================================
// REFERENCE SCENARIO
// =============================================================================

#[test]
fn test_samurai_casts_terror() {
    let spell = Spell::new(
        "Terror",
        Spellbook::Wizardry,
        Element::Mental,
        1,
        3,
        [StatusKind::Afraid],
    )
    .unwrap();
    let caster = Caster::new("Toshi", Profession::Samurai, 5)
        .with_book_skill(Spellbook::Wizardry, 3)
        .with_element_skill(Element::Fire, 0);

    assert_eq!(caster.caster_level(), 1);
    assert_eq!(spell.skill_difficulty(), 50);
    assert_eq!(spell.level_difficulty(), 1);

    let outcome = resolve_outcome(&spell, &caster, CastParams::new(1)).unwrap();
    assert_eq!(outcome.skill_fail, 70);
    assert_eq!(outcome.level_fail, 0);
    assert_eq!(outcome.overall_fail, 70);
    assert_eq!(outcome.backfire, 23);
    assert_eq!(outcome.fizzle, 47);
    assert_eq!(outcome.success, 30);
}

// =============================================================================
// DELIVERY METHODS
// =============================================================================

#[test]
fn test_trained_mage_by_effect_type() {
    let spell = fireball();
    let caster = battle_mage();

    let cast = |params: CastParams| resolve_outcome(&spell, &caster, params).unwrap();

    let direct = cast(CastParams::new(5));
    assert_eq!(
        direct,
        OutcomeChances {
            skill_fail: 33,
            level_fail: 0,
            overall_fail: 33,
            backfire: 11,
            fizzle: 22,
            success: 67,
        }
    );

    let artifact = cast(CastParams::new(5).with_effect_type(EffectType::Artifact));
    assert_eq!(artifact.skill_fail, 29);
    assert_eq!(artifact.backfire, 9);
    assert_eq!(artifact.success, 71);

    let thrown_unknown = cast(
        CastParams::new(5)
            .with_effect_type(EffectType::Thrown)
            .unidentified(),
    );
    assert_eq!(thrown_unknown.skill_fail, 56);
    assert_eq!(thrown_unknown.overall_fail, 56);
    assert_eq!(thrown_unknown.backfire, 18);
    assert_eq!(thrown_unknown.fizzle, 38);
}

#[test]
fn test_full_power_raises_both_failures() {
    let spell = fireball();
    let caster = battle_mage();
    let casting = Casting::new(&spell, &caster, CastParams::new(7)).unwrap();

    assert_eq!(casting.cast_skill_difficulty(), 76);
    let outcome = casting.outcome();
    assert_eq!(outcome.skill_fail, 44);
    assert_eq!(outcome.level_fail, 3);
    assert_eq!(outcome.overall_fail, 47);
    assert_eq!(outcome.success, 53);
}

#[test]
fn test_non_caster_has_no_caster_level() {
    let spell = Spell::new("Spark", Spellbook::Alchemy, Element::Air, 1, 0, []).unwrap();
    let caster = Caster::new("Brom", Profession::Fighter, 9);

    let casting = Casting::new(&spell, &caster, CastParams::new(1)).unwrap();
    assert_eq!(casting.cast_skill_difficulty(), 5);
    assert_eq!(casting.outcome().skill_fail, 70);
    assert_eq!(casting.outcome().level_fail, 1);
    assert_eq!(casting.outcome().success, 29);
}

// =============================================================================
// FAIL CLAMP POLICIES
// =============================================================================

#[test]
fn test_overwhelmed_caster_clamped() {
    let spell = smite();
    let caster = novice_priest();
    let params = CastParams::new(7).unidentified();

    let outcome = resolve_outcome(&spell, &caster, params).unwrap();
    assert_eq!(outcome.skill_fail, 95);
    assert_eq!(outcome.level_fail, 48);
    assert_eq!(outcome.overall_fail, 100);
    assert_eq!(outcome.backfire, 33);
    assert_eq!(outcome.fizzle, 67);
    assert_eq!(outcome.success, 0);
}

#[test]
fn test_overwhelmed_caster_unclamped() {
    let spell = smite();
    let caster = novice_priest();
    let params = CastParams::new(7).unidentified();
    let config = ResolutionConfig::new().with_fail_clamp(FailClamp::Unclamped);

    let outcome = Casting::with_config(&spell, &caster, params, config)
        .unwrap()
        .outcome();
    assert_eq!(outcome.overall_fail, 143);
    assert_eq!(outcome.backfire, 47);
    assert_eq!(outcome.fizzle, 96);
    assert_eq!(outcome.success, 0);
}

#[test]
fn test_policies_agree_below_100() {
    let spell = fireball();
    let caster = battle_mage();
    let unclamped = ResolutionConfig::new().with_fail_clamp(FailClamp::Unclamped);

    for power in 1..=7 {
        let params = CastParams::new(power);
        let a = Casting::new(&spell, &caster, params).unwrap().outcome();
        let b = Casting::with_config(&spell, &caster, params, unclamped)
            .unwrap()
            .outcome();
        if a.skill_fail + a.level_fail <= 100 {
            assert_eq!(a, b, "power {power}");
        }
    }
}

// =============================================================================
// ERRORS
// =============================================================================

#[test]
fn test_power_level_zero() {
    let err = resolve_outcome(&fireball(), &battle_mage(), CastParams::new(0)).unwrap_err();
    assert_eq!(err, CastError::ZeroPowerLevel);
    assert!(err.to_string().contains("at least 1"));
}

// =============================================================================
// EXTREME INPUTS
// =============================================================================

fn doom() -> Spell {
    Spell::new("Doom", Spellbook::Divinity, Element::Divine, 7, 19, []).unwrap()
}

#[test]
fn test_huge_power_level_saturates_outcome() {
    let spell = doom();
    let caster = battle_mage();

    let casting = Casting::new(&spell, &caster, CastParams::new(20_000_000)).unwrap();
    assert_eq!(casting.cast_skill_difficulty(), 314_285_714);
    let outcome = casting.outcome();
    assert_eq!(outcome.skill_fail, 70);
    assert_eq!(outcome.level_fail, 140_000_049);
    assert_eq!(outcome.overall_fail, 100);
    assert_eq!(outcome.backfire, 33);
    assert_eq!(outcome.success, 0);

    let unclamped = ResolutionConfig::new().with_fail_clamp(FailClamp::Unclamped);
    let outcome = Casting::with_config(&spell, &caster, CastParams::new(u32::MAX), unclamped)
        .unwrap()
        .outcome();
    assert_eq!(outcome.level_fail, 30_064_771_114);
    assert_eq!(outcome.overall_fail, 30_064_771_184);
    assert_eq!(outcome.backfire + outcome.fizzle, outcome.overall_fail);
    assert_eq!(outcome.success, 0);
}

#[test]
fn test_huge_skills_stay_in_range() {
    let spell = doom();

    let sage = Caster::new("Sage", Profession::Mage, 20)
        .with_element_skill(Element::Divine, 600_000_000);
    let outcome = resolve_outcome(&spell, &sage, CastParams::new(7)).unwrap();
    assert_eq!(outcome.skill_fail, 0);
    assert_eq!(outcome.level_fail, 28);
    assert_eq!(outcome.success, 72);

    let cursed = Caster::new("Cursed", Profession::Mage, 20)
        .with_book_skill(Spellbook::Divinity, i32::MIN)
        .with_element_skill(Element::Divine, i32::MIN);
    let outcome = resolve_outcome(&spell, &cursed, CastParams::new(7)).unwrap();
    assert!(outcome.skill_fail > 100);
    assert_eq!(outcome.overall_fail, 100);
    assert_eq!(outcome.success, 0);
}

#[test]
fn test_maximum_level_caster_at_maximum_power() {
    let spell = doom();
    let caster = Caster::new("Elder", Profession::Valkyrie, u32::MAX)
        .with_element_skill(Element::Divine, i32::MAX);
    let outcome = resolve_outcome(&spell, &caster, CastParams::new(u32::MAX)).unwrap();
    // the level lag and the power surcharge nearly cancel
    assert_eq!(outcome.skill_fail, 68);
    assert_eq!(outcome.level_fail, 147);
    assert_eq!(outcome.overall_fail, 100);
}

// =============================================================================
// INVARIANTS
// =============================================================================

#[test]
fn test_outcome_invariants_hold_across_sweep() {
    let professions = [Profession::Mage, Profession::Ranger, Profession::Thief];
    let effects = [EffectType::Spell, EffectType::Artifact, EffectType::Thrown];

    for level in 1..=7u32 {
        for cost in [0u32, 3, 8, 18] {
            let Ok(spell) = Spell::new("Probe", Spellbook::Psionics, Element::Mental, level, cost, [])
            else {
                continue;
            };
            for &profession in &professions {
                for char_level in [1u32, 6, 15] {
                    for skill in [0, 12, 40, 120] {
                        let caster = Caster::new("Probe", profession, char_level)
                            .with_book_skill(Spellbook::Psionics, skill)
                            .with_element_skill(Element::Mental, skill / 2);
                        for power in 1..=7u32 {
                            for &effect in &effects {
                                for unidentified in [false, true] {
                                    let mut params = CastParams::new(power).with_effect_type(effect);
                                    params.unidentified_item = unidentified;
                                    let o = resolve_outcome(&spell, &caster, params).unwrap();

                                    assert!(o.skill_fail >= 0);
                                    assert!(o.level_fail >= 0);
                                    assert!((0..=100).contains(&o.overall_fail));
                                    assert_eq!(o.success, 100 - o.overall_fail);
                                    assert_eq!(o.backfire + o.fizzle, o.overall_fail);
                                    if o.overall_fail < 15 {
                                        assert_eq!(o.backfire, 0);
                                    } else {
                                        assert_eq!(o.backfire, o.overall_fail / 3);
                                    }
                                    assert!(o.fizzle >= 0);
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[test]
fn test_same_inputs_same_outputs() {
    let spell = smite();
    let caster = novice_priest();
    let params = CastParams::new(3).with_effect_type(EffectType::Artifact);

    let first = Casting::new(&spell, &caster, params).unwrap();
    let second = Casting::new(&spell, &caster, params).unwrap();
    assert_eq!(first.outcome(), second.outcome());
    assert_eq!(first.summary(), second.summary());
}
