//! The spell/trap zone: five fixed slots.

use serde::{Deserialize, Serialize};

use crate::core::GameError;
use crate::entities::{Spell, Trap};

/// Number of spell/trap slots per player.
pub const SPELL_TRAP_SLOTS: usize = 5;

/// Contents of one spell/trap slot.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZoneSlot {
    #[default]
    Empty,
    Spell(Spell),
    Trap(Trap),
}

impl ZoneSlot {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, ZoneSlot::Empty)
    }

    #[must_use]
    pub fn as_spell(&self) -> Option<&Spell> {
        match self {
            ZoneSlot::Spell(spell) => Some(spell),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_trap(&self) -> Option<&Trap> {
        match self {
            ZoneSlot::Trap(trap) => Some(trap),
            _ => None,
        }
    }
}

/// A player's spell/trap slots.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpellTrapZone {
    slots: [ZoneSlot; SPELL_TRAP_SLOTS],
}

impl SpellTrapZone {
    /// Resolve the slot a new card would go into.
    ///
    /// `None` picks the first empty slot.
    pub fn target_slot(&self, index: Option<usize>) -> Result<usize, GameError> {
        match index {
            None => self.first_empty().ok_or(GameError::NoFreeSlot),
            Some(index) if index >= SPELL_TRAP_SLOTS => Err(GameError::InvalidSlot { index }),
            Some(index) if !self.slots[index].is_empty() => Err(GameError::NoFreeSlot),
            Some(index) => Ok(index),
        }
    }

    /// Put a spell or trap into a slot. Returns the slot used.
    pub fn place(&mut self, index: Option<usize>, content: ZoneSlot) -> Result<usize, GameError> {
        let index = self.target_slot(index)?;
        self.slots[index] = content;
        Ok(index)
    }

    /// Empty a slot, returning what was there.
    pub fn take(&mut self, index: usize) -> ZoneSlot {
        self.slots
            .get_mut(index)
            .map(std::mem::take)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&ZoneSlot> {
        self.slots.get(index)
    }

    #[must_use]
    pub fn first_empty(&self) -> Option<usize> {
        self.slots.iter().position(ZoneSlot::is_empty)
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.first_empty().is_none()
    }

    /// Placed spells as (index, spell).
    pub fn spells(&self) -> impl Iterator<Item = (usize, &Spell)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_spell().map(|s| (i, s)))
    }

    /// Set traps as (index, trap).
    pub fn traps(&self) -> impl Iterator<Item = (usize, &Trap)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_trap().map(|t| (i, t)))
    }
}
