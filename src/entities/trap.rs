//! Traps lying dormant in the spell/trap zone.
//!
//! A trap is a one-shot latch: *dormant* until its trigger matches a fired
//! event, then *activated* forever. The zone scan in `triggers` removes it
//! from the zone as it springs.

use serde::{Deserialize, Serialize};

use crate::cards::{CardInstance, CardKind, CardType};
use crate::core::{GameError, PlayerId};
use crate::effects::{resolver, TrapEffect, TrapTrigger};
use crate::game::{Game, Player};
use crate::triggers::{GameEvent, TrapActivation};

/// A set trap card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trap {
    pub card: CardInstance,
    pub trigger: TrapTrigger,
    pub effect: TrapEffect,
    pub activated: bool,
}

impl Trap {
    /// Instantiate a dormant trap from a trap card.
    pub fn from_card(card: CardInstance) -> Result<Self, GameError> {
        let CardKind::Trap { trigger, effect } = card.definition.kind else {
            return Err(GameError::WrongCardType {
                expected: CardType::Trap,
                actual: card.card_type(),
            });
        };
        Ok(Self {
            card,
            trigger,
            effect,
            activated: false,
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        self.card.name()
    }

    #[must_use]
    pub fn cost(&self) -> u32 {
        self.card.cost()
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.card.definition.description
    }

    /// Whether this trap would spring for `event` fired against `owner`.
    ///
    /// Always false once activated.
    #[must_use]
    pub fn check_trigger(&self, owner: &Player, event: &GameEvent) -> bool {
        !self.activated && self.trigger.matches(owner, event)
    }

    /// Spring the trap. Returns `None` if it already fired.
    pub fn activate(
        &mut self,
        game: &mut Game,
        owner: PlayerId,
        event: &GameEvent,
    ) -> Option<TrapActivation> {
        if self.activated {
            return None;
        }
        self.activated = true;

        let resolution = resolver::resolve_trap(game, owner, self.effect, event);
        Some(TrapActivation {
            owner,
            trap_name: self.name().to_string(),
            effect: self.effect,
            negated: resolution.negated,
            message: format!("{owner}'s {} {}", self.name(), resolution.message),
        })
    }
}
