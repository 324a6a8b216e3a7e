//! Spell integration tests: placement, casting, and every effect tag.

use std::sync::Arc;

use defend_the_fort::cards::{CardDefinition, CardInstance};
use defend_the_fort::core::{GameError, InstanceId, MatchConfig, PlayerId};
use defend_the_fort::effects::{SpellEffect, UpgradeKind};
use defend_the_fort::entities::Monster;
use defend_the_fort::game::{Game, GamePhase, Player, Scenario, SpellOutcome};

const ANN: PlayerId = PlayerId::FIRST;
const BEA: PlayerId = PlayerId::SECOND;

/// Turn 2, Ann to move with plenty of Stars.
fn on_turn_two() -> Scenario {
    Scenario::new(MatchConfig::default())
        .at_turn(2, ANN)
        .seat(ANN, |p| p.stars = 20)
}

fn card(n: u32, def: CardDefinition) -> CardInstance {
    CardInstance::new(InstanceId(700 + n), Arc::new(def))
}

/// Deal Ann one copy of each spell, numbered from `first`.
fn spells(first: u32, effects: &[SpellEffect]) -> impl FnOnce(&mut Player) + '_ {
    move |p| {
        for (n, &effect) in (first..).zip(effects) {
            let def = CardDefinition::spell("test_spell", "Test Spell", 1, effect);
            p.hand.push_back(card(n, def));
        }
    }
}

/// Place and cast the oldest spell in Ann's hand.
fn cast(game: &mut Game) -> SpellOutcome {
    let id = game.player(ANN).hand.front().unwrap().id;
    let placed = game.play_spell(ANN, id, None).unwrap();
    game.cast_spell(ANN, placed.zone).unwrap()
}

fn unit(player: &mut Player, slot: usize, stats: (u32, u32, u32)) {
    let (attack, defense, health) = stats;
    let owner = player.id;
    player
        .monster_field
        .place(slot, Monster::token("Unit", owner, attack, defense, health))
        .unwrap();
}

#[test]
fn test_play_spell_checks_stars_first_then_type() {
    let fireball = SpellEffect::DamageEnemyFort(8);
    let fireball = card(1, CardDefinition::spell("fireball", "Fireball", 3, fireball));
    let imp = card(2, CardDefinition::monster("imp", "Imp", 1, 1, 0, 2));
    let (fireball_id, imp_id) = (fireball.id, imp.id);
    let mut game = on_turn_two()
        .seat(ANN, |p| {
            p.stars = 2;
            p.hand.push_back(fireball);
            p.hand.push_back(imp);
        })
        .build();

    assert_eq!(
        game.play_spell(ANN, fireball_id, None),
        Err(GameError::InsufficientStars {
            required: 3,
            available: 2
        })
    );
    assert!(matches!(
        game.play_spell(ANN, imp_id, None),
        Err(GameError::WrongCardType { .. })
    ));
    assert_eq!(
        game.play_spell(ANN, InstanceId(1), None),
        Err(GameError::CardNotInHand {
            instance: InstanceId(1)
        })
    );
    assert_eq!(game.player(ANN).hand.len(), 2);
    assert_eq!(game.player(ANN).stars, 2);
}

#[test]
fn test_spell_zone_fills_up() {
    let mut game = on_turn_two()
        .seat(ANN, spells(0, &[SpellEffect::GainStars(3); 6]))
        .build();
    for n in 0..6 {
        let id = game.player(ANN).hand.front().unwrap().id;
        let placed = game.play_spell(ANN, id, None);
        if n < 5 {
            assert_eq!(placed.map(|p| p.zone), Ok(n as usize));
        } else {
            assert_eq!(placed, Err(GameError::NoFreeSlot));
        }
    }
}

#[test]
fn test_fort_damage_spell() {
    let mut game = on_turn_two()
        .seat(ANN, spells(0, &[SpellEffect::DamageEnemyFort(8)]))
        .build();
    let outcome = cast(&mut game);

    assert!(!outcome.negated);
    assert!(outcome.effect.is_some());
    assert_eq!(game.player(BEA).fort.hp, 92);
}

#[test]
fn test_lethal_fort_spell_wins() {
    let mut game = on_turn_two()
        .seat(ANN, spells(0, &[SpellEffect::DamageEnemyFort(8)]))
        .seat(BEA, |p| p.fort.hp = 5)
        .build();

    cast(&mut game);

    assert_eq!(game.winner(), Some(ANN));
    assert_eq!(game.phase(), GamePhase::GameOver);
    assert_eq!(game.end_turn(ANN), Err(GameError::GameOver));
}

#[test]
fn test_monster_damage_spell_destroys_weak() {
    let mut game = on_turn_two()
        .seat(ANN, |p| {
            spells(0, &[SpellEffect::DamageEnemyMonsters(4)])(p);
            unit(p, 0, (1, 0, 3));
        })
        .seat(BEA, |p| {
            unit(p, 0, (1, 0, 3));
            unit(p, 3, (1, 2, 10));
        })
        .build();

    cast(&mut game);

    assert!(game.player(BEA).monster_field.get(0).is_none());
    assert_eq!(game.player(BEA).monster_field.get(3).unwrap().current_health, 8);
    assert_eq!(game.player(ANN).monster_field.get(0).unwrap().current_health, 3);
}

#[test]
fn test_heals_cap_at_max() {
    let mut game = on_turn_two()
        .seat(ANN, |p| {
            spells(0, &[SpellEffect::HealFort(15), SpellEffect::HealMonsters(6)])(p);
            p.fort.hp = 95;
            unit(p, 0, (1, 0, 10));
            p.monster_field.get_mut(0).unwrap().current_health = 2;
        })
        .build();

    cast(&mut game);
    cast(&mut game);

    assert_eq!(game.player(ANN).fort.hp, 100);
    assert_eq!(game.player(ANN).monster_field.get(0).unwrap().current_health, 8);
}

#[test]
fn test_boost_lasts_until_next_own_turn() {
    let mut game = on_turn_two()
        .seat(ANN, |p| {
            spells(0, &[SpellEffect::BoostAttack(3)])(p);
            unit(p, 0, (2, 0, 10));
        })
        .build();

    cast(&mut game);
    assert_eq!(game.player(ANN).monster_field.get(0).unwrap().attack(), 5);

    game.end_turn(ANN).unwrap();
    assert_eq!(game.player(ANN).monster_field.get(0).unwrap().attack(), 5);
    game.end_turn(BEA).unwrap();
    assert_eq!(game.player(ANN).monster_field.get(0).unwrap().attack(), 2);
}

#[test]
fn test_empower_is_permanent() {
    let mut game = on_turn_two()
        .seat(ANN, |p| {
            spells(0, &[SpellEffect::Empower(1)])(p);
            unit(p, 0, (2, 0, 10));
        })
        .build();

    cast(&mut game);
    game.end_turn(ANN).unwrap();
    game.end_turn(BEA).unwrap();

    assert_eq!(game.player(ANN).monster_field.get(0).unwrap().attack(), 3);
}

#[test]
fn test_gain_stars_and_draw() {
    let mut game = on_turn_two()
        .seat(ANN, |p| {
            spells(0, &[SpellEffect::GainStars(3), SpellEffect::DrawCards(2)])(p);
            for n in 10..13 {
                p.deck.push_back(card(n, CardDefinition::monster("imp", "Imp", 1, 1, 0, 2)));
            }
        })
        .build();

    cast(&mut game);
    assert_eq!(game.player(ANN).stars, 20 - 1 + 3);

    cast(&mut game);
    assert_eq!(game.player(ANN).hand.len(), 2);
    assert_eq!(game.player(ANN).deck.len(), 1);
}

#[test]
fn test_extra_upgrade_raises_cap() {
    let mut game = on_turn_two()
        .seat(ANN, |p| {
            spells(0, &[SpellEffect::ExtraUpgrade(UpgradeKind::Attack)])(p);
            unit(p, 0, (2, 0, 10));
        })
        .build();

    game.upgrade_weapon(ANN, 0).unwrap();
    assert_eq!(game.upgrade_weapon(ANN, 0), Err(GameError::UpgradeCapReached));

    cast(&mut game);
    game.upgrade_weapon(ANN, 0).unwrap();
    assert_eq!(game.player(ANN).monster_field.get(0).unwrap().weapon_level, 2);
    assert_eq!(game.upgrade_weapon(ANN, 0), Err(GameError::UpgradeCapReached));
}

#[test]
fn test_cast_needs_turn_and_spell() {
    let mut game = on_turn_two().build();
    assert_eq!(game.cast_spell(ANN, 0), Err(GameError::InvalidTarget));
    assert_eq!(game.cast_spell(ANN, 5), Err(GameError::InvalidSlot { index: 5 }));
    assert_eq!(
        game.cast_spell(BEA, 0),
        Err(GameError::WrongTurnOwner {
            expected: ANN,
            actual: BEA
        })
    );
}
