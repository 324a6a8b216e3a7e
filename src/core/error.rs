//! Rule rejections.
//!
//! Every mutating engine call returns `Result<_, GameError>`. An `Err` is an
//! expected, recoverable rejection: the call had no effect on the match and
//! the `Display` text is the message to show the acting player.

use serde::{Deserialize, Serialize};

use crate::cards::{CardId, CardType};
use crate::core::{InstanceId, PlayerId};

/// Why an operation was rejected.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameError {
    /// Zone index outside the zone.
    InvalidSlot { index: usize },
    /// Target zone slot already holds a card.
    SlotOccupied { index: usize },
    /// Cost exceeds current Stars.
    InsufficientStars { required: u32, available: u32 },
    /// Card type doesn't fit the requested zone or action.
    WrongCardType { expected: CardType, actual: CardType },
    /// Attack or upgrade target missing, dead, or otherwise illegal.
    InvalidTarget,
    /// Attacker already used its attacks this turn.
    AlreadyAttacked,
    /// Defender still has living monsters.
    FortBlockedByMonsters,
    /// The acting seat doesn't own the current turn.
    WrongTurnOwner { expected: PlayerId, actual: PlayerId },
    /// Spell/trap zone has no free slot.
    NoFreeSlot,
    /// Unknown fort upgrade kind.
    InvalidUpgradeKind { kind: String },
    /// Per-turn upgrade cap already reached.
    UpgradeCapReached,
    /// The first mover may not attack on turn 1.
    FirstTurnAttack,
    /// No card with this instance id in hand.
    CardNotInHand { instance: InstanceId },
    /// Card id doesn't resolve in the catalog.
    UnknownCard { card: CardId },
    /// The match hasn't started yet.
    NotStarted,
    /// `start` was called on a match already in progress.
    AlreadyStarted,
    /// The match is over.
    GameOver,
}

impl std::fmt::Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameError::InvalidSlot { index } => write!(f, "Slot {index} does not exist"),
            GameError::SlotOccupied { index } => write!(f, "Slot {index} is already occupied"),
            GameError::InsufficientStars { required, available } => {
                write!(f, "Not enough Stars: need {required}, have {available}")
            }
            GameError::WrongCardType { expected, actual } => {
                write!(f, "Expected a {expected} card, got a {actual} card")
            }
            GameError::InvalidTarget => write!(f, "Invalid target"),
            GameError::AlreadyAttacked => write!(f, "This monster cannot attack again this turn"),
            GameError::FortBlockedByMonsters => {
                write!(f, "The fort is protected while defending monsters stand")
            }
            GameError::WrongTurnOwner { expected, actual } => {
                write!(f, "It is {expected}'s turn, not {actual}'s")
            }
            GameError::NoFreeSlot => write!(f, "No free spell/trap slot"),
            GameError::InvalidUpgradeKind { kind } => write!(f, "Unknown upgrade kind '{kind}'"),
            GameError::UpgradeCapReached => write!(f, "No upgrades of this kind left this turn"),
            GameError::FirstTurnAttack => write!(f, "The first player cannot attack on turn 1"),
            GameError::CardNotInHand { instance } => write!(f, "{instance} is not in hand"),
            GameError::UnknownCard { card } => write!(f, "Unknown card '{card}'"),
            GameError::NotStarted => write!(f, "The match has not started"),
            GameError::AlreadyStarted => write!(f, "The match is already in progress"),
            GameError::GameOver => write!(f, "The match is over"),
        }
    }
}

impl std::error::Error for GameError {}
