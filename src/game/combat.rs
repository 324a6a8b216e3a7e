//! Combat resolution.
//!
//! ## Monster attack
//!
//! 1. Gates: turn owner, game over, no first-seat attacks on turn 1.
//! 2. Attacker and target must be alive; attacker must have attacks left.
//! 3. `Attack` fires against the defender's zone with the raw attack value.
//! 4. If the attacker survived the traps, it strikes.
//! 5. A surviving target counter-attacks once. The counter ignores and
//!    doesn't consume the target's own attack budget.
//! 6. Whoever died is buried and `MonsterDestroyed` fires for its owner.
//!
//! ## Fort attack
//!
//! Allowed only if the defender has no living monsters or the attacker
//! has `DirectFortAttack`. The strike lands, `FortAttack` fires with the
//! damage dealt, then the win condition is checked.

use crate::cards::Ability;
use crate::core::{GameError, PlayerId};
use crate::entities::Monster;
use crate::triggers::{check_traps, GameEvent, SlotRef};

use super::outcome::{AttackOutcome, FortAttackOutcome};
use super::state::Game;

impl Game {
    fn ensure_can_attack(
        &self,
        player: PlayerId,
        target_player: PlayerId,
    ) -> Result<(), GameError> {
        self.ensure_turn(player)?;
        if self.turn_number == 1 && player == PlayerId::FIRST {
            return Err(GameError::FirstTurnAttack);
        }
        if target_player == player {
            return Err(GameError::InvalidTarget);
        }
        Ok(())
    }

    fn ready_attacker(&self, attacker: SlotRef) -> Result<&Monster, GameError> {
        let monster = self.players[attacker.player]
            .monster_field
            .alive_at(attacker.slot)
            .ok_or(GameError::InvalidTarget)?;
        if !monster.can_attack() {
            return Err(GameError::AlreadyAttacked);
        }
        Ok(monster)
    }

    /// Attack `target_player`'s monster in `target_slot` with the monster in
    /// `attacker_slot`.
    pub fn attack_monster(
        &mut self,
        player: PlayerId,
        attacker_slot: usize,
        target_player: PlayerId,
        target_slot: usize,
    ) -> Result<AttackOutcome, GameError> {
        self.ensure_can_attack(player, target_player)?;
        let attacker = SlotRef::new(player, attacker_slot);
        let target = SlotRef::new(target_player, target_slot);

        let attack = self.ready_attacker(attacker)?.attack();
        self.players[target_player]
            .monster_field
            .alive_at(target_slot)
            .ok_or(GameError::InvalidTarget)?;
        let attacker_stamp = self.players[player].monster_field.occupant(attacker_slot);
        let target_stamp = self.players[target_player].monster_field.occupant(target_slot);

        tracing::debug!(%player, attacker_slot, target_slot, attack, "monster attack");
        let event = GameEvent::attack(attacker, target, attack);
        let mut traps = check_traps(self, target_player, &event).activations;

        let mut outcome = AttackOutcome {
            attacker,
            target,
            strike: None,
            counter: None,
            target_destroyed: false,
            attacker_destroyed: false,
            traps: Vec::new(),
        };

        // Traps may have killed either side, and a slot may already hold
        // a newcomer. Only the declared pair fights.
        let attacker_standing =
            self.players[player].monster_field.occupant(attacker_slot) == attacker_stamp;
        let target_standing =
            self.players[target_player].monster_field.occupant(target_slot) == target_stamp;
        if attacker_standing && target_standing && !self.is_over() {
            let (mine, theirs) = self.players.split_mut(player);
            if let (Some(attacking), Some(defending)) = (
                mine.monster_field.alive_at_mut(attacker_slot),
                theirs.monster_field.alive_at_mut(target_slot),
            ) {
                let strike = attacking.attack_monster(defending, false)?;
                if !strike.target_killed {
                    outcome.counter = Some(defending.attack_monster(attacking, true)?);
                }
                outcome.strike = Some(strike);
            }
        }

        if outcome.strike.as_ref().is_some_and(|s| s.target_killed) {
            outcome.target_destroyed = true;
            traps.extend(self.destroy_monster(target, Some(attacker)));
        } else if outcome.counter.as_ref().is_some_and(|c| c.target_killed) {
            traps.extend(self.destroy_monster(attacker, Some(target)));
        }

        outcome.attacker_destroyed =
            self.players[player].monster_field.occupant(attacker_slot) != attacker_stamp;
        outcome.traps = traps;
        self.log(outcome.message());
        self.presenter.monster_attacked(&outcome);
        Ok(outcome)
    }

    /// Attack `target_player`'s fort with the monster in `attacker_slot`.
    pub fn attack_fort(
        &mut self,
        player: PlayerId,
        attacker_slot: usize,
        target_player: PlayerId,
    ) -> Result<FortAttackOutcome, GameError> {
        self.ensure_can_attack(player, target_player)?;
        let attacker = SlotRef::new(player, attacker_slot);

        let direct = self.ready_attacker(attacker)?.has_ability(Ability::DirectFortAttack);
        if self.players[target_player].has_alive_monsters() && !direct {
            return Err(GameError::FortBlockedByMonsters);
        }

        let (mine, theirs) = self.players.split_mut(player);
        let attacking = mine
            .monster_field
            .alive_at_mut(attacker_slot)
            .ok_or(GameError::InvalidTarget)?;
        let strike = attacking.attack_fort(&mut theirs.fort)?;

        tracing::debug!(
            %player,
            attacker_slot,
            damage = strike.damage,
            fort_hp = strike.fort_hp,
            "fort attack"
        );
        self.presenter.fort_hit(target_player, strike.damage, strike.fort_hp);

        let event = GameEvent::fort_attack(attacker, strike.damage);
        let traps = check_traps(self, target_player, &event).activations;
        let winner = self.check_win();

        let outcome = FortAttackOutcome {
            attacker,
            defender: target_player,
            strike,
            traps,
            winner,
        };
        self.log(outcome.message());
        Ok(outcome)
    }
}
