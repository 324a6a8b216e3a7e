//! Decision policies for computer-controlled seats.
//!
//! A policy is a pure function from a game view to a prioritized list of
//! actions. It never mutates the game; `MatchSession` commits the plan one
//! action at a time and asks again after each success.

use crate::cards::{Ability, CardKind, CardType};
use crate::core::{Action, PlayerId};
use crate::effects::{FortUpgrade, SpellEffect};
use crate::game::{Game, Player};

/// Chooses actions for one seat.
pub trait AiPolicy {
    /// Candidate actions for `player`, best first. An empty plan means
    /// "end the turn".
    fn plan(&self, game: &Game, player: PlayerId) -> Vec<Action>;
}

/// Fort HP below which the greedy policy buys fort HP.
pub const FORT_REPAIR_THRESHOLD: u32 = 40;

/// A one-ply heuristic player.
///
/// Priority order:
/// 1. cast spells already waiting in the zone
/// 2. summon the most expensive affordable monster
/// 3. set traps, then place spells
/// 4. attacks: the fort when it's open, else kills, else even trades
/// 5. weapon upgrades, then armor
/// 6. a fort HP upgrade when the fort is low
/// 7. end the turn
#[derive(Clone, Debug, Default)]
pub struct GreedyPolicy;

impl GreedyPolicy {
    fn monster_plays(me: &Player) -> Vec<Action> {
        let Some(slot) = me.monster_field.first_empty() else {
            return Vec::new();
        };
        let mut monsters: Vec<_> = me
            .hand
            .iter()
            .filter(|c| c.card_type() == CardType::Monster && me.can_play_card(c))
            .collect();
        monsters.sort_by_key(|c| std::cmp::Reverse(c.cost()));
        monsters
            .into_iter()
            .map(|c| Action::PlayMonster { card: c.id, slot })
            .collect()
    }

    fn zone_plays(me: &Player) -> Vec<Action> {
        if me.spell_trap_zone.is_full() {
            return Vec::new();
        }
        let playable = |kind: CardType| {
            me.hand
                .iter()
                .filter(move |c| c.card_type() == kind && me.can_play_card(c))
        };

        let traps = playable(CardType::Trap).map(|c| Action::PlayTrap { card: c.id, zone: None });
        let spells = playable(CardType::Spell)
            .filter(|c| Self::spell_is_useful(me, &c.definition.kind))
            .map(|c| Action::PlaySpell { card: c.id, zone: None });
        traps.chain(spells).collect()
    }

    fn spell_is_useful(me: &Player, kind: &CardKind) -> bool {
        let CardKind::Spell { effect } = kind else {
            return false;
        };
        match effect {
            SpellEffect::HealFort(_) => me.fort.hp < me.fort.max_hp,
            SpellEffect::HealMonsters(_) => me
                .alive_monsters()
                .any(|(_, m)| m.current_health < m.max_health),
            SpellEffect::BoostAttack(_)
            | SpellEffect::Empower(_)
            | SpellEffect::ExtraUpgrade(_) => me.has_alive_monsters(),
            SpellEffect::DamageEnemyFort(_)
            | SpellEffect::DamageEnemyMonsters(_)
            | SpellEffect::GainStars(_)
            | SpellEffect::DrawCards(_) => true,
        }
    }

    fn attacks(game: &Game, player: PlayerId) -> Vec<Action> {
        if game.turn_number() == 1 && player == PlayerId::FIRST {
            return Vec::new();
        }
        let me = game.player(player);
        let enemy = game.player(player.opponent());
        let fort_open = !enemy.has_alive_monsters();

        let mut fort_hits = Vec::new();
        let mut kills = Vec::new();
        let mut trades = Vec::new();
        for (attacker, monster) in me.alive_monsters().filter(|(_, m)| m.can_attack()) {
            if fort_open || monster.has_ability(Ability::DirectFortAttack) {
                fort_hits.push(Action::AttackFort { attacker });
            }
            for (target, defender) in enemy.alive_monsters() {
                let dealt = defender.mitigated(monster.attack());
                let taken = monster.mitigated(defender.attack());
                if dealt >= defender.current_health {
                    kills.push((defender.attack(), Action::AttackMonster { attacker, target }));
                } else if taken < monster.current_health && dealt >= taken {
                    trades.push(Action::AttackMonster { attacker, target });
                }
            }
        }

        // Kill the hardest hitters first.
        kills.sort_by_key(|(attack, _)| std::cmp::Reverse(*attack));
        fort_hits
            .into_iter()
            .chain(kills.into_iter().map(|(_, action)| action))
            .chain(trades)
            .collect()
    }

    fn upgrades(me: &Player) -> Vec<Action> {
        if me.stars < me.monster_upgrade_cost {
            return Vec::new();
        }
        let strongest = me
            .alive_monsters()
            .max_by_key(|(_, m)| (m.attack(), m.current_health))
            .map(|(slot, _)| slot);
        let Some(slot) = strongest else {
            return Vec::new();
        };

        let mut actions = Vec::new();
        if me.attack_upgrades_this_turn < me.max_attack_upgrades {
            actions.push(Action::UpgradeWeapon { slot });
        }
        if me.defense_upgrades_this_turn < me.max_defense_upgrades {
            actions.push(Action::UpgradeArmor { slot });
        }
        actions
    }
}

impl AiPolicy for GreedyPolicy {
    fn plan(&self, game: &Game, player: PlayerId) -> Vec<Action> {
        if game.is_over() || game.current_player() != player {
            return Vec::new();
        }
        let me = game.player(player);

        let mut plan: Vec<Action> = me
            .spell_trap_zone
            .spells()
            .filter(|(_, spell)| Self::spell_is_useful(me, &spell.card.definition.kind))
            .map(|(zone, _)| Action::CastSpell { zone })
            .collect();
        plan.extend(Self::monster_plays(me));
        plan.extend(Self::zone_plays(me));
        plan.extend(Self::attacks(game, player));
        plan.extend(Self::upgrades(me));

        let field_full = me.monster_field.first_empty().is_none();
        let spare_stars = me.stars >= 2 * me.fort_upgrade_cost;
        if me.fort.hp < FORT_REPAIR_THRESHOLD || (field_full && spare_stars) {
            plan.push(Action::UpgradeFort { kind: FortUpgrade::Hp });
        }

        plan.push(Action::EndTurn);
        plan
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MatchConfig;
    use crate::entities::Monster;

    fn game_on_turn_two() -> Game {
        let config = MatchConfig::default();
        let mut game = Game::with_players(
            config.clone(),
            [
                Player::new(PlayerId::FIRST, "Ann", &config),
                Player::new(PlayerId::SECOND, "Bot", &config),
            ],
        );
        game.start().unwrap();
        game.end_turn(PlayerId::FIRST).unwrap();
        game
    }

    #[test]
    fn test_plan_off_turn_is_empty() {
        let game = game_on_turn_two();
        assert!(GreedyPolicy.plan(&game, PlayerId::FIRST).is_empty());
    }

    #[test]
    fn test_plan_always_ends_turn() {
        let game = game_on_turn_two();
        let plan = GreedyPolicy.plan(&game, PlayerId::SECOND);
        assert_eq!(plan.last(), Some(&Action::EndTurn));
    }

    #[test]
    fn test_open_fort_is_attacked_first() {
        let mut game = game_on_turn_two();
        game.player_mut(PlayerId::SECOND)
            .monster_field
            .place(1, Monster::token("Brute", PlayerId::SECOND, 6, 0, 8))
            .unwrap();

        let plan = GreedyPolicy.plan(&game, PlayerId::SECOND);
        assert_eq!(plan.first(), Some(&Action::AttackFort { attacker: 1 }));
    }

    #[test]
    fn test_prefers_killing_blows() {
        let mut game = game_on_turn_two();
        game.player_mut(PlayerId::SECOND)
            .monster_field
            .place(0, Monster::token("Brute", PlayerId::SECOND, 6, 0, 8))
            .unwrap();
        game.player_mut(PlayerId::FIRST)
            .monster_field
            .place(2, Monster::token("Imp", PlayerId::FIRST, 2, 0, 4))
            .unwrap();

        let plan = GreedyPolicy.plan(&game, PlayerId::SECOND);
        assert!(plan.contains(&Action::AttackMonster {
            attacker: 0,
            target: 2
        }));
        assert!(!plan.contains(&Action::AttackFort { attacker: 0 }));
    }
}
