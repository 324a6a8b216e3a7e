//! Action representation.
//!
//! An `Action` names one inbound engine operation together with its
//! arguments. Human input and AI plans both travel as `Action`s through
//! `Game::apply`, so every actor goes through the same legality checks.

use serde::{Deserialize, Serialize};

use super::entity::InstanceId;
use super::player::PlayerId;
use crate::effects::FortUpgrade;

/// A complete player action.
///
/// ```
/// use defend_the_fort::core::{Action, InstanceId};
///
/// let summon = Action::PlayMonster { card: InstanceId(3), slot: 0 };
/// assert!(!summon.is_end_turn());
/// assert!(Action::EndTurn.is_end_turn());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Summon a monster card from hand into a field slot.
    PlayMonster { card: InstanceId, slot: usize },
    /// Place a spell card from hand into the spell/trap zone.
    PlaySpell { card: InstanceId, zone: Option<usize> },
    /// Execute the spell sitting in a zone slot.
    CastSpell { zone: usize },
    /// Set a trap card from hand into the spell/trap zone.
    PlayTrap { card: InstanceId, zone: Option<usize> },
    /// Buy a weapon level for a monster.
    UpgradeWeapon { slot: usize },
    /// Buy an armor level for a monster.
    UpgradeArmor { slot: usize },
    /// Buy a fort upgrade.
    UpgradeFort { kind: FortUpgrade },
    /// Attack an enemy monster.
    AttackMonster { attacker: usize, target: usize },
    /// Attack the enemy fort.
    AttackFort { attacker: usize },
    /// Pass the turn.
    EndTurn,
}

impl Action {
    #[must_use]
    pub fn is_end_turn(&self) -> bool {
        matches!(self, Action::EndTurn)
    }

    #[must_use]
    pub fn is_attack(&self) -> bool {
        matches!(self, Action::AttackMonster { .. } | Action::AttackFort { .. })
    }
}

/// A committed action with metadata for history tracking.
///
/// Used for replay, debugging, and AI inspection of what already happened.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The seat that acted.
    pub player: PlayerId,

    /// The action taken.
    pub action: Action,

    /// Turn number when action was taken.
    pub turn: u32,

    /// Sequence number within the match (for ordering).
    pub sequence: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(player: PlayerId, action: Action, turn: u32, sequence: u32) -> Self {
        Self {
            player,
            action,
            turn,
            sequence,
        }
    }
}
