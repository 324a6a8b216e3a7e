//! Effect resolution: applying spell and trap tags to a `Game`.
//!
//! Both resolvers return log text rather than failing. Preconditions that
//! don't hold (no attacker left to reflect on, fort not low enough to heal)
//! make the effect a no-op with an explanatory message.

use crate::core::PlayerId;
use crate::entities::Monster;
use crate::game::Game;
use crate::triggers::{GameEvent, SlotRef, LOW_FORT_HP};

use super::effect::{SpellEffect, TrapEffect};

/// Flat damage dealt by `CounterDamage`.
pub const COUNTER_DAMAGE: u32 = 5;

/// HP restored by `EmergencyHeal`.
pub const EMERGENCY_HEAL: u32 = 30;

/// Stars taken by `StealStars`.
pub const STOLEN_STARS: u32 = 3;

/// Name and stats of the `SummonDefender` token.
pub const DEFENDER_NAME: &str = "Trap Guardian";
pub const DEFENDER_STATS: (u32, u32, u32) = (3, 3, 5);

/// Outcome of one trap effect.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrapResolution {
    /// The card play that fired the event must be cancelled.
    pub negated: bool,
    pub message: String,
}

impl TrapResolution {
    fn message(message: impl Into<String>) -> Self {
        Self {
            negated: false,
            message: message.into(),
        }
    }
}

/// Apply a spell effect on behalf of `caster`.
pub fn resolve_spell(game: &mut Game, caster: PlayerId, name: &str, effect: SpellEffect) -> String {
    let opponent = caster.opponent();

    match effect {
        SpellEffect::DamageEnemyFort(amount) => {
            let fort = &mut game.player_mut(opponent).fort;
            let damage = fort.take_damage(amount);
            let hp = fort.hp;
            game.presenter().fort_hit(opponent, damage, hp);
            game.check_win();
            format!("{name} deals {damage} damage to {opponent}'s fort ({hp} HP left)")
        }
        SpellEffect::DamageEnemyMonsters(amount) => {
            let targets: Vec<usize> = game
                .player(opponent)
                .monster_field
                .alive()
                .map(|(slot, _)| slot)
                .collect();

            let mut destroyed = 0;
            for slot in &targets {
                let field = &mut game.player_mut(opponent).monster_field;
                let Some(monster) = field.alive_at_mut(*slot) else {
                    continue;
                };
                monster.take_damage(amount);
                if !monster.is_alive() {
                    destroyed += 1;
                    game.destroy_monster(SlotRef::new(opponent, *slot), None);
                }
            }
            format!(
                "{name} strikes {} enemy monsters, destroying {destroyed}",
                targets.len()
            )
        }
        SpellEffect::HealFort(amount) => {
            let healed = game.player_mut(caster).fort.heal(amount);
            format!("{name} restores {healed} fort HP")
        }
        SpellEffect::HealMonsters(amount) => {
            let healed: u32 = for_each_alive(game, caster, |m| m.heal(amount));
            format!("{name} restores {healed} health to {caster}'s monsters")
        }
        SpellEffect::BoostAttack(amount) => {
            let count: u32 = for_each_alive(game, caster, |m| {
                m.temporary_attack_boost += amount;
                1
            });
            format!("{name} gives {count} monsters +{amount} attack this turn")
        }
        SpellEffect::Empower(amount) => {
            let count: u32 = for_each_alive(game, caster, |m| {
                m.permanent_attack_boost += amount;
                1
            });
            format!("{name} permanently gives {count} monsters +{amount} attack")
        }
        SpellEffect::GainStars(amount) => {
            let player = game.player_mut(caster);
            player.stars += amount;
            format!("{name} grants {amount} Stars ({} total)", player.stars)
        }
        SpellEffect::DrawCards(amount) => {
            let player = game.player_mut(caster);
            let drawn = (0..amount).filter_map(|_| player.draw_card()).count();
            format!("{name} draws {drawn} cards")
        }
        SpellEffect::ExtraUpgrade(kind) => {
            game.player_mut(caster).grant_extra_upgrade(kind);
            format!("{name} grants an extra {kind} upgrade this turn")
        }
    }
}

fn for_each_alive(
    game: &mut Game,
    player: PlayerId,
    mut f: impl FnMut(&mut Monster) -> u32,
) -> u32 {
    game.player_mut(player)
        .monster_field
        .alive_mut()
        .map(|(_, monster)| f(monster))
        .sum()
}

/// Apply a trap effect for `owner` in response to `event`.
pub fn resolve_trap(
    game: &mut Game,
    owner: PlayerId,
    effect: TrapEffect,
    event: &GameEvent,
) -> TrapResolution {
    match effect {
        TrapEffect::ReflectDamage => {
            let Some(source) = event.source else {
                return TrapResolution::message("finds nothing to reflect");
            };
            let reflected = event.damage / 2;
            let Some(attacker) = game
                .player_mut(source.player)
                .monster_field
                .alive_at_mut(source.slot)
            else {
                return TrapResolution::message("finds nothing to reflect");
            };

            let damage = attacker.take_damage(reflected);
            let name = attacker.name.clone();
            let killed = !attacker.is_alive();
            if killed {
                game.destroy_monster(source, None);
            }
            TrapResolution::message(format!(
                "reflects {damage} damage to {name}{}",
                if killed { ", destroying it" } else { "" }
            ))
        }
        TrapEffect::CounterDamage => {
            let Some(source) = event.source else {
                return TrapResolution::message("has no destroyer to punish");
            };
            let Some(destroyer) = game
                .player_mut(source.player)
                .monster_field
                .alive_at_mut(source.slot)
            else {
                return TrapResolution::message("has no destroyer to punish");
            };

            let lost = destroyer.lose_health(COUNTER_DAMAGE);
            let name = destroyer.name.clone();
            if !destroyer.is_alive() {
                game.destroy_monster(source, None);
            }
            TrapResolution::message(format!("deals {lost} damage to {name}"))
        }
        TrapEffect::Negate => TrapResolution {
            negated: true,
            message: "negates the card".to_string(),
        },
        TrapEffect::SummonDefender => {
            let (attack, defense, health) = DEFENDER_STATS;
            let field = &mut game.player_mut(owner).monster_field;
            let Some(slot) = field.first_empty() else {
                return TrapResolution::message("has no room to summon a defender");
            };
            let defender = Monster::token(DEFENDER_NAME, owner, attack, defense, health);
            match field.place(slot, defender) {
                Ok(_) => {
                    TrapResolution::message(format!("summons a {DEFENDER_NAME} into slot {slot}"))
                }
                Err(_) => TrapResolution::message("has no room to summon a defender"),
            }
        }
        TrapEffect::EmergencyHeal => {
            let fort = &mut game.player_mut(owner).fort;
            if fort.hp < LOW_FORT_HP {
                let healed = fort.heal(EMERGENCY_HEAL);
                TrapResolution::message(format!("restores {healed} fort HP"))
            } else {
                TrapResolution::message("fizzles, the fort is not in danger")
            }
        }
        TrapEffect::StealStars => {
            let (mine, theirs) = game.players_mut().split_mut(owner);
            if theirs.stars >= STOLEN_STARS {
                theirs.stars -= STOLEN_STARS;
                mine.stars += STOLEN_STARS;
                TrapResolution::message(format!("steals {STOLEN_STARS} Stars"))
            } else {
                TrapResolution::message("finds too few Stars to steal")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MatchConfig;
    use crate::game::{Game, Player};

    fn started() -> Game {
        let config = MatchConfig::default();
        let players = [
            Player::new(PlayerId::FIRST, "Ann", &config),
            Player::new(PlayerId::SECOND, "Bea", &config),
        ];
        let mut game = Game::with_players(config, players);
        game.start().unwrap();
        game
    }

    fn place(
        game: &mut Game,
        player: PlayerId,
        slot: usize,
        attack: u32,
        defense: u32,
        health: u32,
    ) {
        game.player_mut(player)
            .monster_field
            .place(slot, Monster::token("Unit", player, attack, defense, health))
            .unwrap();
    }

    #[test]
    fn test_damage_enemy_fort_can_win() {
        let mut game = started();
        game.player_mut(PlayerId::SECOND).fort.hp = 5;

        resolve_spell(&mut game, PlayerId::FIRST, "Fireball", SpellEffect::DamageEnemyFort(8));
        assert_eq!(game.player(PlayerId::SECOND).fort.hp, 0);
        assert_eq!(game.winner(), Some(PlayerId::FIRST));
    }

    #[test]
    fn test_damage_enemy_monsters_buries_dead() {
        let mut game = started();
        place(&mut game, PlayerId::SECOND, 0, 1, 0, 3);
        place(&mut game, PlayerId::SECOND, 2, 1, 0, 10);

        let message = resolve_spell(
            &mut game,
            PlayerId::FIRST,
            "Storm",
            SpellEffect::DamageEnemyMonsters(5),
        );
        let field = &game.player(PlayerId::SECOND).monster_field;
        assert!(field.get(0).is_none());
        assert_eq!(field.get(2).map(|m| m.current_health), Some(5));
        assert!(message.contains("destroying 1"));
    }

    #[test]
    fn test_buffs_only_touch_caster() {
        let mut game = started();
        place(&mut game, PlayerId::FIRST, 0, 2, 0, 5);
        place(&mut game, PlayerId::SECOND, 0, 2, 0, 5);

        resolve_spell(&mut game, PlayerId::FIRST, "Battle Cry", SpellEffect::BoostAttack(3));
        resolve_spell(&mut game, PlayerId::FIRST, "Blessing", SpellEffect::Empower(1));

        assert_eq!(game.player(PlayerId::FIRST).monster_field.get(0).unwrap().attack(), 6);
        assert_eq!(game.player(PlayerId::SECOND).monster_field.get(0).unwrap().attack(), 2);
    }

    #[test]
    fn test_reflect_halves_event_damage() {
        let mut game = started();
        place(&mut game, PlayerId::FIRST, 1, 9, 0, 20);
        let event = GameEvent::attack(
            SlotRef::new(PlayerId::FIRST, 1),
            SlotRef::new(PlayerId::SECOND, 0),
            9,
        );

        resolve_trap(&mut game, PlayerId::SECOND, TrapEffect::ReflectDamage, &event);
        assert_eq!(
            game.player(PlayerId::FIRST).monster_field.get(1).map(|m| m.current_health),
            Some(16)
        );
    }

    #[test]
    fn test_counter_damage_ignores_defense() {
        let mut game = started();
        place(&mut game, PlayerId::FIRST, 0, 4, 10, 20);
        let event = GameEvent::monster_destroyed(
            SlotRef::new(PlayerId::SECOND, 0),
            Some(SlotRef::new(PlayerId::FIRST, 0)),
        );

        resolve_trap(&mut game, PlayerId::SECOND, TrapEffect::CounterDamage, &event);
        assert_eq!(
            game.player(PlayerId::FIRST).monster_field.get(0).map(|m| m.current_health),
            Some(15)
        );
    }

    #[test]
    fn test_summon_defender_needs_room() {
        let mut game = started();
        let event = GameEvent::turn_start(PlayerId::SECOND);

        resolve_trap(&mut game, PlayerId::SECOND, TrapEffect::SummonDefender, &event);
        let guardian = game.player(PlayerId::SECOND).monster_field.get(0).unwrap();
        assert_eq!(guardian.name, DEFENDER_NAME);
        assert_eq!((guardian.attack(), guardian.defense(), guardian.current_health), (3, 3, 5));

        for slot in 1..4 {
            place(&mut game, PlayerId::SECOND, slot, 1, 1, 1);
        }
        let full = resolve_trap(&mut game, PlayerId::SECOND, TrapEffect::SummonDefender, &event);
        assert!(full.message.contains("no room"));
    }

    #[test]
    fn test_emergency_heal_only_when_low() {
        let mut game = started();
        let event = GameEvent::turn_start(PlayerId::SECOND);

        resolve_trap(&mut game, PlayerId::SECOND, TrapEffect::EmergencyHeal, &event);
        assert_eq!(game.player(PlayerId::SECOND).fort.hp, 100);

        game.player_mut(PlayerId::SECOND).fort.hp = 10;
        resolve_trap(&mut game, PlayerId::SECOND, TrapEffect::EmergencyHeal, &event);
        assert_eq!(game.player(PlayerId::SECOND).fort.hp, 40);
    }

    #[test]
    fn test_steal_stars_threshold() {
        let mut game = started();
        let event = GameEvent::card_play(PlayerId::FIRST, crate::cards::CardType::Spell);
        game.player_mut(PlayerId::FIRST).stars = 2;
        game.player_mut(PlayerId::SECOND).stars = 0;

        resolve_trap(&mut game, PlayerId::SECOND, TrapEffect::StealStars, &event);
        assert_eq!(game.player(PlayerId::SECOND).stars, 0);

        game.player_mut(PlayerId::FIRST).stars = 4;
        resolve_trap(&mut game, PlayerId::SECOND, TrapEffect::StealStars, &event);
        assert_eq!(game.player(PlayerId::FIRST).stars, 1);
        assert_eq!(game.player(PlayerId::SECOND).stars, 3);
    }

    #[test]
    fn test_negate_flags_resolution() {
        let mut game = started();
        let event = GameEvent::card_play(PlayerId::FIRST, crate::cards::CardType::Spell);
        assert!(resolve_trap(&mut game, PlayerId::SECOND, TrapEffect::Negate, &event).negated);
    }
}
