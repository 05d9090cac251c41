//! Behavior of the presto chango pipeline through the public API
//!
//! Each test sets up a class of witch states and checks that exactly the
//! expected error (or toad) comes back.

use coven::{
    Bat, Cat, ChangoSpellError, Companion, Familiar, Hat, HatColor, HatSize, MagicWords,
    MagicalBeing, Spell, Toad, Witch,
};

fn named(name: &str) -> Option<String> {
    Some(name.to_string())
}

/// Every familiar shape worth checking: each variant, named and nameless.
fn familiars() -> Vec<Option<Companion>> {
    vec![
        None,
        Some(Cat::named(named("Salem")).into()),
        Some(Cat::default().into()),
        Some(Bat::named(named("Vlad")).into()),
        Some(Bat::named(Some(String::new())).into()),
        Some(Toad::named(named("Gerald")).into()),
        Some(Toad::default().into()),
    ]
}

fn unusable_hats() -> Vec<Option<Hat>> {
    vec![
        None,
        Some(Hat::mundane()),
        Some(Hat { size: HatSize::Large, color: HatColor::Black, is_magical: false }),
    ]
}

fn magical_hat() -> Option<Hat> {
    Some(Hat { size: HatSize::Medium, color: HatColor::Black, is_magical: true })
}

#[test]
fn test_unusable_hat_always_reported_first() {
    for hat in unusable_hats() {
        for familiar in familiars() {
            for spells in [vec![], vec![Spell::new(MagicWords::PrestoChango)]] {
                let mut witch = Witch::with_hat(named("Sabrina"), familiar.clone(), hat.clone());
                witch.spells = spells;
                assert_eq!(
                    witch.turn_familiar_into_toad(),
                    Err(ChangoSpellError::HatMissingOrNotMagical),
                    "hat {:?}, familiar {:?}",
                    hat,
                    familiar
                );
            }
        }
    }
}

#[test]
fn test_missing_familiar() {
    for spells in [vec![], vec![Spell::new(MagicWords::Alakazam)]] {
        let mut witch = Witch::with_hat(named("Sabrina"), None, magical_hat());
        witch.spells = spells;
        assert_eq!(witch.turn_familiar_into_toad(), Err(ChangoSpellError::NoFamiliar));
    }
}

#[test]
fn test_toads_are_refused_before_spell_and_name_checks() {
    for toad in [Toad::named(named("Gerald")), Toad::default()] {
        let mut witch = Witch::with_hat(None, Some(toad.into()), magical_hat());
        assert_eq!(witch.turn_familiar_into_toad(), Err(ChangoSpellError::FamiliarAlreadyAToad));

        witch.spells.clear();
        assert_eq!(witch.turn_familiar_into_toad(), Err(ChangoSpellError::FamiliarAlreadyAToad));
    }
}

#[test]
fn test_unknown_spell_reported_before_missing_name() {
    let candidates: Vec<Companion> = vec![
        Cat::named(named("Salem")).into(),
        Cat::default().into(),
        Bat::named(named("Vlad")).into(),
    ];
    for familiar in candidates {
        let mut witch = Witch::with_hat(named("Sabrina"), Some(familiar), magical_hat());
        witch.spells = vec![
            Spell::new(MagicWords::Abracadabra),
            Spell::new(MagicWords::Alakazam),
            Spell::new(MagicWords::HocusPocus),
        ];
        assert_eq!(witch.turn_familiar_into_toad(), Err(ChangoSpellError::SpellNotKnownToWitch));
    }
}

#[test]
fn test_nameless_familiar_fails_with_reason() {
    let candidates: Vec<Companion> = vec![
        Cat::default().into(),
        Bat::default().into(),
        Cat::named(Some(String::new())).into(),
    ];
    for familiar in candidates {
        let witch = Witch::with_hat(named("Sabrina"), Some(familiar), magical_hat());
        assert_eq!(
            witch.turn_familiar_into_toad(),
            Err(ChangoSpellError::SpellFailed {
                reason: "Familiar doesn't have a name.".to_string()
            })
        );
    }
}

#[test]
fn test_success_yields_new_toad_with_same_name() {
    let candidates: Vec<Companion> =
        vec![Cat::named(named("Salem")).into(), Bat::named(named("Vlad")).into()];
    for familiar in candidates {
        let witch = Witch::with_hat(named("Sabrina"), Some(familiar.clone()), magical_hat());
        let toad = witch.turn_familiar_into_toad().expect("spell should succeed");

        assert_eq!(toad.name(), familiar.name());
        assert_eq!(witch.familiar.as_ref(), Some(&familiar));
        assert!(!familiar.is_toad());
    }
}

#[test]
fn test_repeated_casts_are_identical() {
    let witch = Witch::with_hat(named("Sabrina"), Some(Cat::named(named("Salem")).into()), magical_hat());
    let first = witch.turn_familiar_into_toad();
    let second = witch.turn_familiar_into_toad();
    assert_eq!(first, second);
}

#[test]
fn test_scenario_salem_with_magical_hat() {
    let witch = Witch::with_hat(named("Sabrina"), Some(Cat::named(named("Salem")).into()), magical_hat());
    assert_eq!(witch.turn_familiar_into_toad(), Ok(Toad { name: named("Salem") }));
}

#[test]
fn test_scenario_salem_without_hat() {
    let witch = Witch::new(named("Sabrina"), Some(Cat::named(named("Salem")).into()));
    assert_eq!(witch.turn_familiar_into_toad(), Err(ChangoSpellError::HatMissingOrNotMagical));
}

#[test]
fn test_scenario_nameless_cat() {
    let witch = Witch::with_hat(named("Sabrina"), Some(Cat::default().into()), magical_hat());
    assert_eq!(
        witch.turn_familiar_into_toad(),
        Err(ChangoSpellError::spell_failed("Familiar doesn't have a name."))
    );
}

#[test]
fn test_constructors_always_seed_presto_chango() {
    for familiar in familiars() {
        let witch = Witch::new(None, familiar.clone());
        assert_eq!(witch.spells, vec![Spell::new(MagicWords::PrestoChango)]);

        let hatted = Witch::with_hat(None, familiar, magical_hat());
        assert!(hatted.has_spell_of_type(MagicWords::PrestoChango));
    }
}

#[test]
fn test_cloned_witch_owns_its_familiar() {
    let original = Witch::with_hat(named("Sabrina"), Some(Cat::named(named("Salem")).into()), magical_hat());
    let mut copy = original.clone();
    if let Some(familiar) = copy.familiar.as_mut() {
        familiar.set_name(None);
    }

    assert_eq!(original.turn_familiar_into_toad(), Ok(Toad { name: named("Salem") }));
    assert!(matches!(copy.turn_familiar_into_toad(), Err(ChangoSpellError::SpellFailed { .. })));
}

#[test]
fn test_spell_from_text() {
    assert_eq!(Spell::from_words("abracadabra").map(|s| s.magic_words), Some(MagicWords::Abracadabra));
    assert_eq!(Spell::from_words("hocus pocus").map(|s| s.magic_words), Some(MagicWords::HocusPocus));
    assert_eq!(Spell::from_words("xyzzy"), None);
}
