//! Zone scan: spring every matching trap for an event.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;
use crate::effects::TrapEffect;
use crate::game::Game;
use crate::zones::{ZoneSlot, SPELL_TRAP_SLOTS};

use super::event::GameEvent;

/// One trap that sprang.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrapActivation {
    pub owner: PlayerId,
    pub trap_name: String,
    pub effect: TrapEffect,
    /// The trap cancelled the card play that fired the event.
    pub negated: bool,
    pub message: String,
}

/// Everything that sprang during one scan, in slot order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrapReport {
    pub activations: Vec<TrapActivation>,
}

impl TrapReport {
    /// Whether any activation negated the triggering play.
    #[must_use]
    pub fn negated(&self) -> bool {
        self.activations.iter().any(|a| a.negated)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.activations.is_empty()
    }

    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.activations.iter().map(|a| a.message.as_str())
    }
}

/// Fire `event` against `owner`'s spell/trap zone.
///
/// Slots are scanned in index order. Each matching, dormant trap is taken
/// out of its slot, activated, and sent to its owner's graveyard, so every
/// trap fires at most once. Spells in the zone are left alone. The scan
/// stops early if a trap ends the match.
pub fn check_traps(game: &mut Game, owner: PlayerId, event: &GameEvent) -> TrapReport {
    let mut report = TrapReport::default();

    for index in 0..SPELL_TRAP_SLOTS {
        if game.is_over() {
            break;
        }

        let player = game.player(owner);
        let springs = matches!(
            player.spell_trap_zone.get(index),
            Some(ZoneSlot::Trap(trap)) if trap.check_trigger(player, event)
        );
        if !springs {
            continue;
        }

        let ZoneSlot::Trap(mut trap) = game.player_mut(owner).spell_trap_zone.take(index) else {
            continue;
        };
        tracing::debug!(%owner, trap = trap.name(), kind = %event.kind, "trap springs");

        if let Some(activation) = trap.activate(game, owner, event) {
            game.log(activation.message.clone());
            game.presenter().trap_activated(&activation);
            report.activations.push(activation);
        }
        game.player_mut(owner).graveyard.push_back(trap.card);
    }

    report
}
