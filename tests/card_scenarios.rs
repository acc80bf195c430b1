//! Card-by-card scenarios through the public API.
//!
//! Matches run in testing mode unless noted, so plays are free and turns
//! start without a draw.

use std::sync::Arc;

use wizard_duel::{
    Await, CardCatalog, CardChoice, CardName, GameConfig, GameError, GameState, PermSlot, PlayerId, Target,
};

const P0: PlayerId = PlayerId::new(0);
const P1: PlayerId = PlayerId::new(1);

fn summon(game: &mut GameState, player: PlayerId, names: &[CardName]) {
    for name in names {
        game.play(player, CardChoice::Card(name.id())).unwrap();
    }
}

fn hp(game: &GameState, player: PlayerId, slot: usize) -> i64 {
    game.field(player).unwrap()[slot].hp
}

// =============================================================================
// Wizard Attacks
// =============================================================================

#[test]
fn test_librarian_draws_for_its_owner() {
    let mut game = GameState::for_testing(2).unwrap();
    summon(&mut game, P0, &[CardName::Librarian]);
    summon(&mut game, P1, &[CardName::Librarian]);
    game.set_deck(P0, vec![CardName::Angel.id()]).unwrap();

    game.attack(Target::creature(P0, 0), Target::creature(P1, 0)).unwrap();

    assert_eq!(game.hand(P0).unwrap(), &[CardName::Angel.id()]);
    assert_eq!(hp(&game, P1, 0), 6);
}

#[test]
fn test_librarian_hits_harder_with_a_full_hand() {
    let mut game = GameState::for_testing(2).unwrap();
    summon(&mut game, P0, &[CardName::Librarian, CardName::Librarian]);
    game.set_deck(P0, vec![CardName::Angel.id(); 7]).unwrap();
    for _ in 0..7 {
        game.draw(P0).unwrap();
    }

    game.attack(Target::creature(P0, 0).with_attack(1), Target::creature(P0, 1)).unwrap();

    assert_eq!(hp(&game, P0, 1), 5);
}

#[test]
fn test_mind_mage_bypasses_protection() {
    let mut game = GameState::for_testing(2).unwrap();
    summon(&mut game, P0, &[CardName::MindMage]);
    summon(&mut game, P1, &[CardName::Librarian]);
    game.play(P1, CardChoice::Card(CardName::Protectio.id())).unwrap();
    game.resolve_target(Target::creature(P1, 0)).unwrap();

    game.attack(Target::creature(P0, 0), Target::creature(P1, 0)).unwrap();

    assert_eq!(hp(&game, P1, 0), 6);
}

#[test]
fn test_mind_mage_removes_a_permanent() {
    let mut game = GameState::for_testing(2).unwrap();
    summon(&mut game, P0, &[CardName::MindMage]);
    summon(&mut game, P1, &[CardName::Librarian, CardName::Aquarius]);
    let attacker = Target::creature(P0, 0).with_attack(1);

    game.attack(attacker, Target::creature(P1, 0)).unwrap();
    assert_eq!(hp(&game, P1, 0), 5);
    assert_eq!(game.awaiting(), &Await::AttackFollowup { attacker });

    assert_eq!(game.resolve_target(Target::creature(P1, 0)), Err(GameError::UnexpectedTarget));
    assert!(!game.awaiting().is_idle());

    game.resolve_target(Target::permanent(P1, 0)).unwrap();
    assert!(game.permanent(PermSlot::new(P1, 0)).is_none());
    assert!(game.awaiting().is_idle());
}

#[test]
fn test_mind_mage_removal_of_empty_slot_clears_prompt() {
    let mut game = GameState::for_testing(2).unwrap();
    summon(&mut game, P0, &[CardName::MindMage]);
    summon(&mut game, P1, &[CardName::Librarian]);

    game.attack(Target::creature(P0, 0).with_attack(1), Target::creature(P1, 0)).unwrap();
    assert!(game.resolve_target(Target::permanent(P1, 4)).is_err());

    assert!(game.awaiting().is_idle());
    assert_eq!(game.resolve_target(Target::permanent(P1, 4)), Err(GameError::NotAwaitingTarget));
}

#[test]
fn test_pyromancer_splashes() {
    let mut game = GameState::for_testing(2).unwrap();
    summon(&mut game, P0, &[CardName::Pyromancer, CardName::Librarian, CardName::Librarian]);
    summon(&mut game, P1, &[CardName::Librarian, CardName::Librarian]);

    game.attack(Target::creature(P0, 0), Target::creature(P0, 1)).unwrap();
    assert!((0..3).all(|slot| hp(&game, P0, slot) == 7));

    game.attack(Target::creature(P0, 0).with_attack(1), Target::creature(P0, 1)).unwrap();
    assert!((0..3).all(|slot| hp(&game, P0, slot) == 7));
    assert!((0..2).all(|slot| hp(&game, P1, slot) == 7));
}

#[test]
fn test_angel_heals_and_revives() {
    let mut game = GameState::for_testing(2).unwrap();
    summon(&mut game, P0, &[CardName::Angel, CardName::Librarian]);
    let ally = Target::creature(P0, 1);
    game.apply_damage(ally, 5).unwrap();

    game.attack(Target::creature(P0, 0), ally).unwrap();
    assert_eq!(hp(&game, P0, 1), 5);

    game.apply_damage(ally, 5).unwrap();
    game.attack(Target::creature(P0, 0).with_attack(1), ally).unwrap();
    game.resolve_target(ally).unwrap();

    assert_eq!(hp(&game, P0, 0), 0);
    assert_eq!(hp(&game, P0, 1), 8);
}

#[test]
fn test_bloodeater_attacks_twice() {
    let mut game = GameState::for_testing(2).unwrap();
    summon(&mut game, P0, &[CardName::Bloodeater]);
    summon(&mut game, P1, &[CardName::Librarian, CardName::Angel]);

    game.attack(Target::creature(P0, 0), Target::creature(P1, 0)).unwrap();
    assert_eq!(hp(&game, P1, 0), 7);

    game.resolve_target(Target::creature(P1, 1)).unwrap();
    assert_eq!(hp(&game, P1, 1), 7);
    assert!(game.awaiting().is_idle());
}

#[test]
fn test_bloodeater_frenzy_chains_on_kills() {
    let mut game = GameState::for_testing(2).unwrap();
    summon(&mut game, P0, &[CardName::Bloodeater]);
    summon(&mut game, P1, &[CardName::Librarian, CardName::Angel, CardName::Mortician]);
    game.apply_damage(Target::creature(P1, 0), 4).unwrap();
    game.apply_damage(Target::creature(P1, 1), 5).unwrap();
    let frenzy = Target::creature(P0, 0).with_attack(1);

    game.attack(frenzy, Target::creature(P1, 0)).unwrap();
    assert_eq!(hp(&game, P1, 0), 0);
    assert_eq!(game.awaiting(), &Await::AttackFollowup { attacker: frenzy });

    game.resolve_target(Target::creature(P1, 1)).unwrap();
    assert_eq!(hp(&game, P1, 1), 0);
    assert!(!game.awaiting().is_idle());

    game.resolve_target(Target::creature(P1, 2)).unwrap();
    assert_eq!(hp(&game, P1, 2), 4);
    assert!(game.awaiting().is_idle());
}

#[test]
fn test_mortician_hurts_allies() {
    let mut game = GameState::for_testing(2).unwrap();
    summon(&mut game, P0, &[CardName::Mortician, CardName::Librarian, CardName::Angel]);
    summon(&mut game, P1, &[CardName::Librarian]);

    game.attack(Target::creature(P0, 0), Target::creature(P1, 0)).unwrap();

    assert_eq!(hp(&game, P0, 0), 8);
    assert_eq!(hp(&game, P0, 1), 7);
    assert_eq!(hp(&game, P0, 2), 7);
    assert_eq!(hp(&game, P1, 0), 6);
}

#[test]
fn test_conjurer_bonus_mana_arrives_next_turn() {
    let mut game = GameState::for_testing(2).unwrap();
    summon(&mut game, P0, &[CardName::Conjurer]);
    summon(&mut game, P1, &[CardName::Librarian]);

    game.attack(Target::creature(P0, 0), Target::creature(P1, 0)).unwrap();
    game.end_turn();
    assert_eq!(game.mana(), 1);
    game.end_turn();

    assert_eq!(game.mana(), 3);
}

#[test]
fn test_conjurer_discounts_next_spell() {
    let mut game = GameState::new(GameConfig::new(2), Arc::new(CardCatalog::standard())).unwrap();
    game.start_first_turn();
    summon(&mut game, P0, &[CardName::Conjurer, CardName::Librarian]);

    game.attack(Target::creature(P0, 0).with_attack(1), Target::creature(P0, 1)).unwrap();
    game.play(P0, CardChoice::Card(CardName::PyrusBalio.id())).unwrap();
    assert_eq!(game.mana(), 1);

    game.play(P0, CardChoice::Card(CardName::PyrusBalio.id())).unwrap();
    assert_eq!(game.mana(), 0);
}

// =============================================================================
// Attachments
// =============================================================================

#[test]
fn test_mortius_strikes_back_on_death() {
    let mut game = GameState::for_testing(2).unwrap();
    summon(&mut game, P0, &[CardName::Mortician]);
    summon(&mut game, P1, &[CardName::Librarian, CardName::Mortius]);
    game.resolve_target(Target::creature(P1, 0)).unwrap();
    game.apply_damage(Target::creature(P1, 0), 6).unwrap();

    game.attack(Target::creature(P0, 0).with_attack(1), Target::creature(P1, 0)).unwrap();

    assert_eq!(hp(&game, P1, 0), 0);
    assert_eq!(hp(&game, P0, 0), 6);
}

#[test]
fn test_armorius_reduces_damage() {
    let mut game = GameState::for_testing(2).unwrap();
    summon(&mut game, P0, &[CardName::Librarian]);
    summon(&mut game, P1, &[CardName::Librarian, CardName::Armorius]);
    game.resolve_target(Target::creature(P1, 0)).unwrap();

    game.attack(Target::creature(P0, 0), Target::creature(P1, 0)).unwrap();

    assert_eq!(hp(&game, P1, 0), 7);
}

#[test]
fn test_attachment_follows_its_creature() {
    let mut game = GameState::for_testing(2).unwrap();
    summon(&mut game, P0, &[CardName::Magician, CardName::Librarian, CardName::Enhancius]);
    game.resolve_target(Target::creature(P0, 1)).unwrap();

    game.attack(Target::creature(P0, 0), Target::creature(P0, 1)).unwrap();

    assert_eq!(game.field(P0).unwrap().len(), 1);
    assert_eq!(game.field(P0).unwrap()[0].attached, Some(CardName::Enhancius));
    assert_eq!(
        game.permanent(PermSlot::new(P0, 0)).unwrap().attached_to,
        Some(Target::creature(P0, 0))
    );
}

// =============================================================================
// Dragons
// =============================================================================

#[test]
fn test_dragon_attacks_once_per_turn() {
    let mut game = GameState::for_testing(2).unwrap();
    summon(&mut game, P0, &[CardName::Dragonius]);
    summon(&mut game, P1, &[CardName::Librarian]);
    let dragon = Target::permanent(P0, 0);

    game.attack(dragon, Target::creature(P1, 0)).unwrap();
    assert_eq!(hp(&game, P1, 0), 8);
    assert_eq!(game.awaiting(), &Await::DragonBreath { dragon: PermSlot::new(P0, 0) });

    game.resolve_target(Target::creature(P1, 0)).unwrap();
    assert_eq!(hp(&game, P1, 0), 5);
    assert_eq!(game.attack(dragon, Target::creature(P1, 0)), Err(GameError::AlreadyActivated));

    game.end_turn();
    game.end_turn();
    game.attack(dragon, Target::creature(P1, 0)).unwrap();
}

#[test]
fn test_dragon_can_be_attacked_and_healed() {
    let mut game = GameState::for_testing(2).unwrap();
    summon(&mut game, P0, &[CardName::Librarian]);
    summon(&mut game, P1, &[CardName::Dragonius]);
    let dragon = Target::permanent(P1, 0);

    game.attack(Target::creature(P0, 0), dragon).unwrap();
    assert_eq!(game.combatant(dragon).unwrap().hp, 1);

    game.play(P1, CardChoice::Card(CardName::AngeliDustio.id())).unwrap();
    game.resolve_target(dragon).unwrap();
    assert_eq!(game.combatant(dragon).unwrap().hp, 3);
}
