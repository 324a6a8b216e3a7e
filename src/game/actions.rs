//! `Action` dispatch, history and legal-move enumeration.

use crate::cards::{Ability, CardType};
use crate::core::{Action, ActionRecord, GameError, PlayerId};
use crate::effects::FortUpgrade;
use crate::zones::MONSTER_SLOTS;

use super::outcome::ActionResult;
use super::state::{Game, GamePhase};

impl Game {
    /// Perform `action` for `player`.
    ///
    /// Committed actions are appended to `history()`; rejected ones leave
    /// no trace.
    pub fn apply(&mut self, player: PlayerId, action: &Action) -> Result<ActionResult, GameError> {
        let turn = self.turn_number;
        let opponent = player.opponent();

        let result = match *action {
            Action::PlayMonster { card, slot } => {
                self.play_monster(player, card, slot).map(ActionResult::Summon)
            }
            Action::PlaySpell { card, zone } => {
                self.play_spell(player, card, zone).map(ActionResult::SpellPlaced)
            }
            Action::CastSpell { zone } => {
                self.cast_spell(player, zone).map(ActionResult::SpellCast)
            }
            Action::PlayTrap { card, zone } => {
                self.play_trap(player, card, zone).map(ActionResult::TrapSet)
            }
            Action::UpgradeWeapon { slot } => {
                self.upgrade_weapon(player, slot).map(ActionResult::Upgrade)
            }
            Action::UpgradeArmor { slot } => {
                self.upgrade_armor(player, slot).map(ActionResult::Upgrade)
            }
            Action::UpgradeFort { kind } => {
                self.upgrade_fort(player, kind).map(ActionResult::Upgrade)
            }
            Action::AttackMonster { attacker, target } => self
                .attack_monster(player, attacker, opponent, target)
                .map(ActionResult::Attack),
            Action::AttackFort { attacker } => self
                .attack_fort(player, attacker, opponent)
                .map(ActionResult::FortAttack),
            Action::EndTurn => self.end_turn(player).map(ActionResult::TurnEnded),
        }?;

        self.history
            .push_back(ActionRecord::new(player, action.clone(), turn, self.action_sequence));
        self.action_sequence += 1;
        Ok(result)
    }

    /// Every action `player` could take right now that passes the rules
    /// checks. Empty unless it is `player`'s turn.
    #[must_use]
    pub fn legal_actions(&self, player: PlayerId) -> Vec<Action> {
        if self.phase != GamePhase::PlayerTurn || player != self.current {
            return Vec::new();
        }

        let me = &self.players[player];
        let enemy = &self.players[player.opponent()];
        let mut actions = Vec::new();

        for card in me.hand.iter().filter(|c| me.can_play_card(c)) {
            match card.card_type() {
                CardType::Monster => actions.extend(
                    (0..MONSTER_SLOTS)
                        .filter(|&slot| me.monster_field.check_free(slot).is_ok())
                        .map(|slot| Action::PlayMonster { card: card.id, slot }),
                ),
                CardType::Spell if !me.spell_trap_zone.is_full() => {
                    actions.push(Action::PlaySpell { card: card.id, zone: None });
                }
                CardType::Trap if !me.spell_trap_zone.is_full() => {
                    actions.push(Action::PlayTrap { card: card.id, zone: None });
                }
                CardType::Spell | CardType::Trap => {}
            }
        }

        actions.extend(me.spell_trap_zone.spells().map(|(zone, _)| Action::CastSpell { zone }));

        if me.stars >= me.monster_upgrade_cost {
            for (slot, _) in me.alive_monsters() {
                if me.attack_upgrades_this_turn < me.max_attack_upgrades {
                    actions.push(Action::UpgradeWeapon { slot });
                }
                if me.defense_upgrades_this_turn < me.max_defense_upgrades {
                    actions.push(Action::UpgradeArmor { slot });
                }
            }
        }
        if me.stars >= me.fort_upgrade_cost {
            actions.extend(FortUpgrade::ALL.map(|kind| Action::UpgradeFort { kind }));
        }

        let may_attack = !(self.turn_number == 1 && player == PlayerId::FIRST);
        if may_attack {
            let fort_open = !enemy.has_alive_monsters();
            for (attacker, monster) in me.alive_monsters().filter(|(_, m)| m.can_attack()) {
                actions.extend(
                    enemy
                        .alive_monsters()
                        .map(|(target, _)| Action::AttackMonster { attacker, target }),
                );
                if fort_open || monster.has_ability(Ability::DirectFortAttack) {
                    actions.push(Action::AttackFort { attacker });
                }
            }
        }

        actions.push(Action::EndTurn);
        actions
    }
}
