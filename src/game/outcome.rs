//! Structured results of successful engine operations.
//!
//! Each outcome carries the operation-specific facts a presentation layer
//! needs plus a `message()` summary. Failures are `GameError`s instead.

use serde::{Deserialize, Serialize};

use crate::cards::CardId;
use crate::core::PlayerId;
use crate::effects::FortUpgrade;
use crate::entities::{FortStrike, MonsterStrike};
use crate::triggers::{SlotRef, TrapActivation};

fn with_traps(mut message: String, traps: &[TrapActivation]) -> String {
    for trap in traps {
        message.push_str(". ");
        message.push_str(&trap.message);
    }
    message
}

/// Result of a monster attacking another monster.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackOutcome {
    pub attacker: SlotRef,
    pub target: SlotRef,
    /// `None` if a trap removed the attacker before it could strike.
    pub strike: Option<MonsterStrike>,
    /// The target's mandatory counter-attack, if it survived.
    pub counter: Option<MonsterStrike>,
    pub target_destroyed: bool,
    pub attacker_destroyed: bool,
    /// Every trap that sprang during the exchange, in order.
    pub traps: Vec<TrapActivation>,
}

impl AttackOutcome {
    #[must_use]
    pub fn message(&self) -> String {
        let base = match (&self.strike, &self.counter) {
            (None, _) => "The attacker fell before it could strike".to_string(),
            (Some(strike), None) => format!(
                "{} deals {} damage to {}{}",
                strike.attacker_name,
                strike.damage,
                strike.target_name,
                if strike.target_killed { " and destroys it" } else { "" }
            ),
            (Some(strike), Some(counter)) => format!(
                "{} deals {} damage to {}, which strikes back for {}{}",
                strike.attacker_name,
                strike.damage,
                strike.target_name,
                counter.damage,
                if counter.target_killed { " and destroys it" } else { "" }
            ),
        };
        with_traps(base, &self.traps)
    }
}

/// Result of a monster attacking a fort.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FortAttackOutcome {
    pub attacker: SlotRef,
    pub defender: PlayerId,
    pub strike: FortStrike,
    pub traps: Vec<TrapActivation>,
    /// Set when this attack ended the match.
    pub winner: Option<PlayerId>,
}

impl FortAttackOutcome {
    #[must_use]
    pub fn message(&self) -> String {
        let mut base = format!(
            "{}'s fort takes {} damage ({} HP left)",
            self.defender, self.strike.damage, self.strike.fort_hp
        );
        if let Some(winner) = self.winner {
            base.push_str(&format!(". {winner} wins"));
        }
        with_traps(base, &self.traps)
    }
}

/// Result of summoning a monster.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummonOutcome {
    pub player: PlayerId,
    pub slot: usize,
    pub card: CardId,
    pub name: String,
    pub traps: Vec<TrapActivation>,
}

impl SummonOutcome {
    #[must_use]
    pub fn message(&self) -> String {
        with_traps(
            format!("{} summons {} to slot {}", self.player, self.name, self.slot),
            &self.traps,
        )
    }
}

/// Result of placing a spell in the zone.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementOutcome {
    pub player: PlayerId,
    pub zone: usize,
    pub name: String,
}

impl PlacementOutcome {
    #[must_use]
    pub fn message(&self) -> String {
        format!("{} places {} in zone {}", self.player, self.name, self.zone)
    }
}

/// Result of casting a placed spell.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpellOutcome {
    pub player: PlayerId,
    pub zone: usize,
    pub name: String,
    pub negated: bool,
    /// What the effect did. `None` when negated.
    pub effect: Option<String>,
    pub traps: Vec<TrapActivation>,
}

impl SpellOutcome {
    #[must_use]
    pub fn message(&self) -> String {
        let base = match &self.effect {
            Some(effect) => effect.clone(),
            None => format!("{}'s {} is negated", self.player, self.name),
        };
        with_traps(base, &self.traps)
    }
}

/// Result of setting a trap.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrapSetOutcome {
    pub player: PlayerId,
    pub zone: usize,
    pub name: String,
    /// The trap was negated and sent to the graveyard.
    pub negated: bool,
    pub traps: Vec<TrapActivation>,
}

impl TrapSetOutcome {
    #[must_use]
    pub fn message(&self) -> String {
        let base = if self.negated {
            format!("{}'s {} is negated", self.player, self.name)
        } else {
            format!("{} sets a trap in zone {}", self.player, self.zone)
        };
        with_traps(base, &self.traps)
    }
}

/// What an upgrade bought.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum UpgradeTarget {
    Weapon { slot: usize, level: u32 },
    Armor { slot: usize, level: u32 },
    Fort { kind: FortUpgrade, level: u32 },
}

/// Result of buying an upgrade.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpgradeOutcome {
    pub player: PlayerId,
    pub target: UpgradeTarget,
    pub stars_left: u32,
}

impl UpgradeOutcome {
    #[must_use]
    pub fn message(&self) -> String {
        match self.target {
            UpgradeTarget::Weapon { slot, level } => {
                format!("{} upgrades the weapon in slot {slot} to level {level}", self.player)
            }
            UpgradeTarget::Armor { slot, level } => {
                format!("{} upgrades the armor in slot {slot} to level {level}", self.player)
            }
            UpgradeTarget::Fort { kind, level } => {
                format!("{} upgrades fort {kind}, fort level {level}", self.player)
            }
        }
    }
}

/// Result of a turn handover.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnOutcome {
    pub current: PlayerId,
    pub turn_number: u32,
    /// Stars income rose for everyone on this handover.
    pub income_increased: bool,
    /// Card drawn by the new current player.
    pub drawn: Option<CardId>,
    pub traps: Vec<TrapActivation>,
}

impl TurnOutcome {
    #[must_use]
    pub fn message(&self) -> String {
        let mut base = format!("Turn {}: {}'s turn", self.turn_number, self.current);
        if self.income_increased {
            base.push_str(". Star income increases");
        }
        with_traps(base, &self.traps)
    }
}

/// Result of any committed `Action`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionResult {
    Summon(SummonOutcome),
    SpellPlaced(PlacementOutcome),
    SpellCast(SpellOutcome),
    TrapSet(TrapSetOutcome),
    Upgrade(UpgradeOutcome),
    Attack(AttackOutcome),
    FortAttack(FortAttackOutcome),
    TurnEnded(TurnOutcome),
}

impl ActionResult {
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            ActionResult::Summon(o) => o.message(),
            ActionResult::SpellPlaced(o) => o.message(),
            ActionResult::SpellCast(o) => o.message(),
            ActionResult::TrapSet(o) => o.message(),
            ActionResult::Upgrade(o) => o.message(),
            ActionResult::Attack(o) => o.message(),
            ActionResult::FortAttack(o) => o.message(),
            ActionResult::TurnEnded(o) => o.message(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::TrapEffect;

    #[test]
    fn test_attack_message_mentions_counter() {
        let outcome = AttackOutcome {
            attacker: SlotRef::new(PlayerId::FIRST, 0),
            target: SlotRef::new(PlayerId::SECOND, 1),
            strike: Some(MonsterStrike {
                damage: 4,
                attacker_name: "Goblin".into(),
                target_name: "Golem".into(),
                target_killed: false,
            }),
            counter: Some(MonsterStrike {
                damage: 3,
                attacker_name: "Golem".into(),
                target_name: "Goblin".into(),
                target_killed: true,
            }),
            target_destroyed: false,
            attacker_destroyed: true,
            traps: vec![],
        };
        assert_eq!(
            outcome.message(),
            "Goblin deals 4 damage to Golem, which strikes back for 3 and destroys it"
        );
    }

    #[test]
    fn test_trap_messages_are_appended() {
        let outcome = TrapSetOutcome {
            player: PlayerId::FIRST,
            zone: 2,
            name: "Ambush".into(),
            negated: true,
            traps: vec![TrapActivation {
                owner: PlayerId::SECOND,
                trap_name: "Counter Spell".into(),
                effect: TrapEffect::Negate,
                negated: true,
                message: "Player 2's Counter Spell negates the card".into(),
            }],
        };
        assert_eq!(
            outcome.message(),
            "Player 1's Ambush is negated. Player 2's Counter Spell negates the card"
        );
    }
}
