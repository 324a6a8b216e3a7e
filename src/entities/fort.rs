//! Player forts.

use serde::{Deserialize, Serialize};

use crate::effects::FortUpgrade;

/// Defense gained per defense upgrade.
pub const FORT_DEFENSE_STEP: u32 = 2;

/// Max HP gained per HP upgrade.
pub const FORT_HP_STEP: u32 = 20;

/// A player's base. HP 0 loses the match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fort {
    pub hp: u32,
    pub max_hp: u32,
    pub defense: u32,
    /// Bonus Stars per turn.
    pub star_generation: u32,
    pub level: u32,
}

impl Fort {
    /// A fresh fort at full HP.
    #[must_use]
    pub fn new(max_hp: u32, defense: u32) -> Self {
        Self {
            hp: max_hp,
            max_hp,
            defense,
            star_generation: 0,
            level: 1,
        }
    }

    /// Apply an incoming hit.
    ///
    /// Defense mitigates, but at least 1 damage always lands. HP floors at
    /// 0. Returns the mitigated damage.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        let damage = amount.saturating_sub(self.defense).max(1);
        self.hp = self.hp.saturating_sub(damage);
        damage
    }

    /// Restore HP up to max. Returns the HP actually restored.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let before = self.hp;
        self.hp = self.hp.saturating_add(amount).min(self.max_hp);
        self.hp - before
    }

    #[must_use]
    pub fn is_destroyed(&self) -> bool {
        self.hp == 0
    }

    /// Apply a purchased upgrade.
    pub fn upgrade(&mut self, kind: FortUpgrade) {
        match kind {
            FortUpgrade::Defense => self.defense += FORT_DEFENSE_STEP,
            FortUpgrade::Stars => self.star_generation += 1,
            FortUpgrade::Hp => {
                self.max_hp += FORT_HP_STEP;
                self.hp += FORT_HP_STEP;
            }
        }
        self.level += 1;
    }
}

impl Default for Fort {
    fn default() -> Self {
        Self::new(100, 0)
    }
}
