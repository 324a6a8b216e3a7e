//! Spells waiting in the spell/trap zone.

use serde::{Deserialize, Serialize};

use crate::cards::{CardInstance, CardKind, CardType};
use crate::core::{GameError, PlayerId};
use crate::effects::{resolver, SpellEffect};
use crate::game::Game;

/// A placed spell card.
///
/// Stateless: each `execute` is independent. The engine removes the spell
/// from its zone before executing it, so one placement is one cast.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spell {
    pub card: CardInstance,
    pub effect: SpellEffect,
}

impl Spell {
    /// Instantiate a spell from a spell card.
    pub fn from_card(card: CardInstance) -> Result<Self, GameError> {
        let CardKind::Spell { effect } = card.definition.kind else {
            return Err(GameError::WrongCardType {
                expected: CardType::Spell,
                actual: card.card_type(),
            });
        };
        Ok(Self { card, effect })
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

    /// Apply the effect on behalf of `caster`. Returns a log message.
    pub fn execute(&self, game: &mut Game, caster: PlayerId) -> String {
        resolver::resolve_spell(game, caster, self.name(), self.effect)
    }
}
