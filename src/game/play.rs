//! Card play and upgrades, gated by turn ownership.
//!
//! Summons, trap sets and spell casts each fire `CardPlay` against the
//! opponent's zone once the card has left the hand. A negating trap
//! cancels a cast spell (consumed, no effect) or a freshly set trap (sent
//! to the graveyard). Summons can't be negated.

use crate::cards::CardType;
use crate::core::{GameError, InstanceId, PlayerId};
use crate::effects::FortUpgrade;
use crate::triggers::{check_traps, GameEvent, TrapReport};
use crate::zones::ZoneSlot;

use super::outcome::{
    PlacementOutcome, SpellOutcome, SummonOutcome, TrapSetOutcome, UpgradeOutcome, UpgradeTarget,
};
use super::state::Game;

impl Game {
    fn fire_card_play(&mut self, player: PlayerId, card_type: CardType) -> TrapReport {
        check_traps(self, player.opponent(), &GameEvent::card_play(player, card_type))
    }

    /// Summon a monster from `player`'s hand into `slot`.
    pub fn play_monster(
        &mut self,
        player: PlayerId,
        card: InstanceId,
        slot: usize,
    ) -> Result<SummonOutcome, GameError> {
        self.ensure_turn(player)?;
        let card_id = self.players[player]
            .hand_card(card)
            .map(|c| c.card_id().clone())
            .ok_or(GameError::CardNotInHand { instance: card })?;
        let name = self.players[player].play_monster(card, slot)?.name.clone();

        self.log(format!("{} summons {name}", self.players[player].name));
        let traps = self.fire_card_play(player, CardType::Monster).activations;
        Ok(SummonOutcome {
            player,
            slot,
            card: card_id,
            name,
            traps,
        })
    }

    /// Place a spell from hand into the zone without casting it.
    pub fn play_spell(
        &mut self,
        player: PlayerId,
        card: InstanceId,
        zone: Option<usize>,
    ) -> Result<PlacementOutcome, GameError> {
        self.ensure_turn(player)?;
        let zone = self.players[player].play_spell(card, zone)?;
        let name = match self.players[player].spell_trap_zone.get(zone) {
            Some(ZoneSlot::Spell(spell)) => spell.name().to_string(),
            _ => String::new(),
        };

        self.log(format!("{} places {name}", self.players[player].name));
        Ok(PlacementOutcome { player, zone, name })
    }

    /// Cast the spell waiting in `zone`. The spell is consumed either way.
    pub fn cast_spell(&mut self, player: PlayerId, zone: usize) -> Result<SpellOutcome, GameError> {
        self.ensure_turn(player)?;
        match self.players[player].spell_trap_zone.get(zone) {
            None => return Err(GameError::InvalidSlot { index: zone }),
            Some(ZoneSlot::Empty) => return Err(GameError::InvalidTarget),
            Some(ZoneSlot::Trap(_)) => {
                return Err(GameError::WrongCardType {
                    expected: CardType::Spell,
                    actual: CardType::Trap,
                })
            }
            Some(ZoneSlot::Spell(_)) => {}
        }
        let ZoneSlot::Spell(spell) = self.players[player].spell_trap_zone.take(zone) else {
            return Err(GameError::InvalidTarget);
        };
        let name = spell.name().to_string();

        let report = self.fire_card_play(player, CardType::Spell);
        let effect = if report.negated() {
            self.log(format!("{}'s {name} is negated", self.players[player].name));
            None
        } else {
            let message = spell.execute(self, player);
            self.log(message.clone());
            self.check_win();
            Some(message)
        };

        Ok(SpellOutcome {
            player,
            zone,
            name,
            negated: effect.is_none(),
            effect,
            traps: report.activations,
        })
    }

    /// Set a trap from hand into the zone.
    pub fn play_trap(
        &mut self,
        player: PlayerId,
        card: InstanceId,
        zone: Option<usize>,
    ) -> Result<TrapSetOutcome, GameError> {
        self.ensure_turn(player)?;
        let zone = self.players[player].play_trap(card, zone)?;
        let name = match self.players[player].spell_trap_zone.get(zone) {
            Some(ZoneSlot::Trap(trap)) => trap.name().to_string(),
            _ => String::new(),
        };
        self.log(format!("{} sets a trap", self.players[player].name));

        let report = self.fire_card_play(player, CardType::Trap);
        let negated = report.negated();
        if negated {
            let owner = &mut self.players[player];
            if let ZoneSlot::Trap(trap) = owner.spell_trap_zone.take(zone) {
                owner.graveyard.push_back(trap.card);
            }
            self.log(format!("{}'s {name} is negated", self.players[player].name));
        }

        Ok(TrapSetOutcome {
            player,
            zone,
            name,
            negated,
            traps: report.activations,
        })
    }

    /// Buy a weapon level for `player`'s monster in `slot`.
    pub fn upgrade_weapon(
        &mut self,
        player: PlayerId,
        slot: usize,
    ) -> Result<UpgradeOutcome, GameError> {
        self.ensure_turn(player)?;
        let level = self.players[player].upgrade_monster_weapon(slot)?.weapon_level;
        self.upgraded(player, UpgradeTarget::Weapon { slot, level })
    }

    /// Buy an armor level for `player`'s monster in `slot`.
    pub fn upgrade_armor(
        &mut self,
        player: PlayerId,
        slot: usize,
    ) -> Result<UpgradeOutcome, GameError> {
        self.ensure_turn(player)?;
        let level = self.players[player].upgrade_monster_armor(slot)?.armor_level;
        self.upgraded(player, UpgradeTarget::Armor { slot, level })
    }

    /// Buy a fort upgrade for `player`.
    pub fn upgrade_fort(
        &mut self,
        player: PlayerId,
        kind: FortUpgrade,
    ) -> Result<UpgradeOutcome, GameError> {
        self.ensure_turn(player)?;
        let level = self.players[player].upgrade_fort(kind)?.level;
        self.upgraded(player, UpgradeTarget::Fort { kind, level })
    }

    fn upgraded(
        &mut self,
        player: PlayerId,
        target: UpgradeTarget,
    ) -> Result<UpgradeOutcome, GameError> {
        let outcome = UpgradeOutcome {
            player,
            target,
            stars_left: self.players[player].stars,
        };
        self.log(outcome.message());
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardDefinition, CardInstance};
    use crate::core::MatchConfig;
    use crate::effects::{SpellEffect, TrapEffect, TrapTrigger};
    use crate::game::Player;
    use std::sync::Arc;

    fn started() -> Game {
        let config = MatchConfig::default();
        let mut game = Game::with_players(
            config.clone(),
            [
                Player::new(PlayerId::FIRST, "Ann", &config),
                Player::new(PlayerId::SECOND, "Bea", &config),
            ],
        );
        game.start().unwrap();
        game
    }

    fn give(game: &mut Game, player: PlayerId, raw: u32, def: CardDefinition) -> InstanceId {
        let id = InstanceId(InstanceId::first_for(player).raw() + 500 + raw);
        game.player_mut(player)
            .hand
            .push_back(CardInstance::new(id, Arc::new(def)));
        id
    }

    #[test]
    fn test_wrong_seat_rejected_without_change() {
        let mut game = started();
        let card = give(
            &mut game,
            PlayerId::SECOND,
            0,
            CardDefinition::monster("g", "Goblin", 1, 2, 0, 4),
        );

        assert_eq!(
            game.play_monster(PlayerId::SECOND, card, 0),
            Err(GameError::WrongTurnOwner {
                expected: PlayerId::FIRST,
                actual: PlayerId::SECOND
            })
        );
        assert_eq!(game.player(PlayerId::SECOND).hand.len(), 1);
    }

    #[test]
    fn test_cast_spell_consumes_it() {
        let mut game = started();
        let card = give(
            &mut game,
            PlayerId::FIRST,
            0,
            CardDefinition::spell("t", "Treasure", 1, SpellEffect::GainStars(3)),
        );

        let placed = game.play_spell(PlayerId::FIRST, card, None).unwrap();
        assert_eq!(game.player(PlayerId::FIRST).stars, 4);

        let outcome = game.cast_spell(PlayerId::FIRST, placed.zone).unwrap();
        assert!(!outcome.negated);
        assert_eq!(game.player(PlayerId::FIRST).stars, 7);
        assert!(game.player(PlayerId::FIRST).spell_trap_zone.get(placed.zone).unwrap().is_empty());
        assert!(game.player(PlayerId::FIRST).graveyard.is_empty());
        assert_eq!(game.cast_spell(PlayerId::FIRST, placed.zone), Err(GameError::InvalidTarget));
    }

    #[test]
    fn test_cast_from_trap_slot_rejected() {
        let mut game = started();
        let card = give(
            &mut game,
            PlayerId::FIRST,
            0,
            CardDefinition::trap(
                "a",
                "Ambush",
                1,
                TrapTrigger::OnAttack,
                TrapEffect::SummonDefender,
            ),
        );
        let set = game.play_trap(PlayerId::FIRST, card, Some(3)).unwrap();
        assert_eq!(set.zone, 3);
        assert_eq!(
            game.cast_spell(PlayerId::FIRST, 3),
            Err(GameError::WrongCardType {
                expected: CardType::Spell,
                actual: CardType::Trap
            })
        );
        assert_eq!(game.cast_spell(PlayerId::FIRST, 9), Err(GameError::InvalidSlot { index: 9 }));
    }

    #[test]
    fn test_upgrades_through_game() {
        let mut game = started();
        game.player_mut(PlayerId::FIRST).stars = 10;
        game.player_mut(PlayerId::FIRST)
            .monster_field
            .place(0, crate::entities::Monster::token("Unit", PlayerId::FIRST, 1, 1, 5))
            .unwrap();

        let outcome = game.upgrade_weapon(PlayerId::FIRST, 0).unwrap();
        assert_eq!(outcome.target, UpgradeTarget::Weapon { slot: 0, level: 1 });
        assert_eq!(outcome.stars_left, 8);

        let outcome = game.upgrade_fort(PlayerId::FIRST, FortUpgrade::Defense).unwrap();
        assert_eq!(outcome.stars_left, 3);
        assert_eq!(game.player(PlayerId::FIRST).fort.defense, 2);
        assert_eq!(
            game.upgrade_armor(PlayerId::SECOND, 0),
            Err(GameError::WrongTurnOwner {
                expected: PlayerId::FIRST,
                actual: PlayerId::SECOND
            })
        );
    }
}
