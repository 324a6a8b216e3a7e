//! Trap trigger matching.

use crate::effects::TrapTrigger;
use crate::game::Player;

use super::event::{EventKind, GameEvent};

/// Fort HP strictly below this counts as low.
pub const LOW_FORT_HP: u32 = 20;

impl TrapTrigger {
    /// The event kind this trigger listens for.
    #[must_use]
    pub fn event_kind(self) -> EventKind {
        match self {
            TrapTrigger::OnAttack => EventKind::Attack,
            TrapTrigger::OnFortAttack => EventKind::FortAttack,
            TrapTrigger::OnMonsterDestroyed => EventKind::MonsterDestroyed,
            TrapTrigger::OnLowFortHp => EventKind::TurnStart,
            TrapTrigger::OnOpponentCardPlay => EventKind::CardPlay,
        }
    }

    /// Whether `event`, fired against `owner`'s zone, satisfies this trigger.
    #[must_use]
    pub fn matches(self, owner: &Player, event: &GameEvent) -> bool {
        if event.kind != self.event_kind() {
            return false;
        }
        match self {
            TrapTrigger::OnLowFortHp => owner.fort.hp < LOW_FORT_HP,
            TrapTrigger::OnOpponentCardPlay => event.actor.is_some_and(|actor| actor != owner.id),
            TrapTrigger::OnAttack | TrapTrigger::OnFortAttack | TrapTrigger::OnMonsterDestroyed => {
                true
            }
        }
    }
}
