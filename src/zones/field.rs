//! The monster field: four fixed slots.

use serde::{Deserialize, Serialize};

use crate::core::GameError;
use crate::entities::Monster;

/// Number of monster slots per player.
pub const MONSTER_SLOTS: usize = 4;

/// A player's monster slots.
///
/// Each slot is empty or holds one monster. Dead monsters are removed in
/// the same operation that kills them, so an occupied slot normally holds
/// a living monster; `alive()` filters defensively anyway.
///
/// ```
/// use defend_the_fort::core::PlayerId;
/// use defend_the_fort::entities::Monster;
/// use defend_the_fort::zones::MonsterField;
///
/// let mut field = MonsterField::default();
/// field.place(2, Monster::token("Guard", PlayerId::FIRST, 3, 3, 5)).unwrap();
///
/// assert_eq!(field.first_empty(), Some(0));
/// assert_eq!(field.alive().count(), 1);
/// assert!(field.place(2, Monster::token("Guard", PlayerId::FIRST, 3, 3, 5)).is_err());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonsterField {
    slots: [Option<Monster>; MONSTER_SLOTS],
    /// Bumped every time a slot is filled.
    placements: [u32; MONSTER_SLOTS],
}

impl MonsterField {
    fn check_index(index: usize) -> Result<(), GameError> {
        if index < MONSTER_SLOTS {
            Ok(())
        } else {
            Err(GameError::InvalidSlot { index })
        }
    }

    /// Check that `index` exists and is free.
    pub fn check_free(&self, index: usize) -> Result<(), GameError> {
        Self::check_index(index)?;
        if self.slots[index].is_some() {
            return Err(GameError::SlotOccupied { index });
        }
        Ok(())
    }

    /// Put a monster into a free slot.
    pub fn place(&mut self, index: usize, monster: Monster) -> Result<&Monster, GameError> {
        self.check_free(index)?;
        self.placements[index] = self.placements[index].wrapping_add(1);
        Ok(self.slots[index].insert(monster))
    }

    /// Stamp of the living monster in a slot.
    ///
    /// A refilled slot gets a new stamp, so comparing stamps tells whether
    /// the same monster is still standing there.
    #[must_use]
    pub fn occupant(&self, index: usize) -> Option<u32> {
        self.alive_at(index).map(|_| self.placements[index])
    }

    /// Remove whatever occupies a slot.
    pub fn take(&mut self, index: usize) -> Option<Monster> {
        self.slots.get_mut(index).and_then(Option::take)
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Monster> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Monster> {
        self.slots.get_mut(index).and_then(Option::as_mut)
    }

    /// Living monster in a slot.
    #[must_use]
    pub fn alive_at(&self, index: usize) -> Option<&Monster> {
        self.get(index).filter(|m| m.is_alive())
    }

    pub fn alive_at_mut(&mut self, index: usize) -> Option<&mut Monster> {
        self.get_mut(index).filter(|m| m.is_alive())
    }

    #[must_use]
    pub fn first_empty(&self) -> Option<usize> {
        self.slots.iter().position(Option::is_none)
    }

    /// Occupied slots as (index, monster).
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Monster)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|m| (i, m)))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (usize, &mut Monster)> {
        self.slots
            .iter_mut()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_mut().map(|m| (i, m)))
    }

    /// Living monsters as (index, monster).
    pub fn alive(&self) -> impl Iterator<Item = (usize, &Monster)> {
        self.iter().filter(|(_, m)| m.is_alive())
    }

    pub fn alive_mut(&mut self) -> impl Iterator<Item = (usize, &mut Monster)> {
        self.iter_mut().filter(|(_, m)| m.is_alive())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlayerId;

    fn guard() -> Monster {
        Monster::token("Guard", PlayerId::FIRST, 3, 3, 5)
    }

    #[test]
    fn test_refilled_slot_gets_new_stamp() {
        let mut field = MonsterField::default();
        assert_eq!(field.occupant(0), None);

        field.place(0, guard()).unwrap();
        let first = field.occupant(0);
        assert!(first.is_some());

        field.take(0);
        assert_eq!(field.occupant(0), None);
        field.place(0, guard()).unwrap();
        assert_ne!(field.occupant(0), first);
    }

    #[test]
    fn test_place_and_take() {
        let mut field = MonsterField::default();
        field.place(1, guard()).unwrap();

        assert!(field.get(1).is_some());
        assert!(field.get(0).is_none());
        assert_eq!(field.take(1).map(|m| m.name), Some("Guard".to_string()));
        assert!(field.get(1).is_none());
    }

    #[test]
    fn test_invalid_and_occupied_slots() {
        let mut field = MonsterField::default();
        assert_eq!(field.place(4, guard()).unwrap_err(), GameError::InvalidSlot { index: 4 });

        field.place(0, guard()).unwrap();
        assert_eq!(field.place(0, guard()).unwrap_err(), GameError::SlotOccupied { index: 0 });
    }

    #[test]
    fn test_alive_filters_dead() {
        let mut field = MonsterField::default();
        field.place(0, guard()).unwrap();
        field.place(3, guard()).unwrap();
        field.get_mut(3).unwrap().current_health = 0;

        let alive: Vec<_> = field.alive().map(|(i, _)| i).collect();
        assert_eq!(alive, vec![0]);
        assert!(field.alive_at(3).is_none());
        assert_eq!(field.iter().count(), 2);
    }

    #[test]
    fn test_full_field_has_no_empty_slot() {
        let mut field = MonsterField::default();
        for i in 0..MONSTER_SLOTS {
            field.place(i, guard()).unwrap();
        }
        assert_eq!(field.first_empty(), None);
    }

    #[test]
    fn test_out_of_range_access_is_none() {
        let mut field = MonsterField::default();
        assert!(field.get(10).is_none());
        assert!(field.take(10).is_none());
    }
}
