//! Monsters on the field.
//!
//! A `Monster` is created from a monster card when it is summoned (or as a
//! token by a trap) and lives in one of its owner's four field slots until
//! its health reaches 0. Dead monsters never come back.
//!
//! ## Stats
//!
//! ```text
//! attack  = base_attack + 2 * weapon_level + temporary_attack_boost + permanent_attack_boost
//! defense = base_defense + 2 * armor_level
//! ```
//!
//! Incoming damage is always mitigated by defense but never below 1.

use serde::{Deserialize, Serialize};

use super::fort::Fort;
use crate::cards::{Abilities, Ability, CardInstance, CardKind, CardType};
use crate::core::{GameError, PlayerId};

/// Attack gained per weapon level.
pub const WEAPON_STEP: u32 = 2;

/// Defense gained per armor level.
pub const ARMOR_STEP: u32 = 2;

/// Experience needed for the first level-up.
pub const INITIAL_EXPERIENCE_TO_NEXT: u32 = 10;

/// Result of one monster hitting another.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonsterStrike {
    /// Damage applied after the target's defense.
    pub damage: u32,
    pub attacker_name: String,
    pub target_name: String,
    pub target_killed: bool,
}

/// Result of a monster hitting a fort.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FortStrike {
    /// Damage applied after fort defense.
    pub damage: u32,
    pub fort_hp: u32,
    pub fort_destroyed: bool,
}

/// A combat unit in a field slot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Monster {
    pub name: String,
    /// The card this monster was summoned from. `None` for tokens.
    pub card: Option<CardInstance>,
    pub owner: PlayerId,

    pub base_attack: u32,
    pub base_defense: u32,
    pub base_health: u32,
    pub max_health: u32,
    pub current_health: u32,

    pub level: u32,
    pub experience: u32,
    pub experience_to_next: u32,

    pub weapon_level: u32,
    pub armor_level: u32,
    /// Cleared at the start of the owner's turn.
    pub temporary_attack_boost: u32,
    pub permanent_attack_boost: u32,

    pub abilities: Abilities,
    pub attack_count_this_turn: u32,
}

impl Monster {
    /// Instantiate a monster from a monster card.
    pub fn from_card(card: CardInstance, owner: PlayerId) -> Result<Self, GameError> {
        let CardKind::Monster {
            attack,
            defense,
            health,
            ref abilities,
        } = card.definition.kind
        else {
            return Err(GameError::WrongCardType {
                expected: CardType::Monster,
                actual: card.card_type(),
            });
        };

        let mut monster = Self::token(card.name(), owner, attack, defense, health);
        monster.abilities = abilities.clone();
        monster.card = Some(card);
        Ok(monster)
    }

    /// Create a monster with no backing card.
    #[must_use]
    pub fn token(
        name: impl Into<String>,
        owner: PlayerId,
        attack: u32,
        defense: u32,
        health: u32,
    ) -> Self {
        Self {
            name: name.into(),
            card: None,
            owner,
            base_attack: attack,
            base_defense: defense,
            base_health: health,
            max_health: health,
            current_health: health,
            level: 1,
            experience: 0,
            experience_to_next: INITIAL_EXPERIENCE_TO_NEXT,
            weapon_level: 0,
            armor_level: 0,
            temporary_attack_boost: 0,
            permanent_attack_boost: 0,
            abilities: Abilities::new(),
            attack_count_this_turn: 0,
        }
    }

    /// Effective attack.
    #[must_use]
    pub fn attack(&self) -> u32 {
        self.base_attack
            + WEAPON_STEP * self.weapon_level
            + self.temporary_attack_boost
            + self.permanent_attack_boost
    }

    /// Effective defense.
    #[must_use]
    pub fn defense(&self) -> u32 {
        self.base_defense + ARMOR_STEP * self.armor_level
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.current_health > 0
    }

    #[must_use]
    pub fn has_ability(&self, ability: Ability) -> bool {
        self.abilities.contains(&ability)
    }

    /// Attacks allowed per turn.
    #[must_use]
    pub fn attack_cap(&self) -> u32 {
        if self.has_ability(Ability::MultipleAttacks) {
            u32::MAX
        } else if self.has_ability(Ability::DoubleAttack) {
            2
        } else {
            1
        }
    }

    #[must_use]
    pub fn can_attack(&self) -> bool {
        self.is_alive() && self.attack_count_this_turn < self.attack_cap()
    }

    /// Damage this monster would take from a hit of `amount`.
    #[must_use]
    pub fn mitigated(&self, amount: u32) -> u32 {
        amount.saturating_sub(self.defense()).max(1)
    }

    /// Apply a hit. Returns the mitigated damage (at least 1).
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        let damage = self.mitigated(amount);
        self.current_health = self.current_health.saturating_sub(damage);
        damage
    }

    /// Lose health ignoring defense. Returns the amount lost.
    pub fn lose_health(&mut self, amount: u32) -> u32 {
        let lost = amount.min(self.current_health);
        self.current_health -= lost;
        lost
    }

    /// Restore health up to max. Returns the health restored.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let before = self.current_health;
        self.current_health = self.current_health.saturating_add(amount).min(self.max_health);
        self.current_health - before
    }

    /// Hit another monster.
    ///
    /// Counter-attacks skip the attack budget check and don't consume it.
    pub fn attack_monster(
        &mut self,
        target: &mut Monster,
        is_counter_attack: bool,
    ) -> Result<MonsterStrike, GameError> {
        if !target.is_alive() {
            return Err(GameError::InvalidTarget);
        }
        if !is_counter_attack && !self.can_attack() {
            return Err(GameError::AlreadyAttacked);
        }

        let damage = target.take_damage(self.attack());
        if !is_counter_attack {
            self.attack_count_this_turn += 1;
        }
        self.gain_experience(damage / 2);

        let target_killed = !target.is_alive();
        if !target_killed {
            target.gain_experience(1);
        }

        Ok(MonsterStrike {
            damage,
            attacker_name: self.name.clone(),
            target_name: target.name.clone(),
            target_killed,
        })
    }

    /// Hit a fort.
    pub fn attack_fort(&mut self, fort: &mut Fort) -> Result<FortStrike, GameError> {
        if !self.can_attack() {
            return Err(GameError::AlreadyAttacked);
        }

        let damage = fort.take_damage(self.attack());
        self.attack_count_this_turn += 1;
        self.gain_experience(damage / 3);

        Ok(FortStrike {
            damage,
            fort_hp: fort.hp,
            fort_destroyed: fort.is_destroyed(),
        })
    }

    /// Add experience, levelling up as many times as it covers.
    /// Returns the number of levels gained.
    pub fn gain_experience(&mut self, amount: u32) -> u32 {
        self.experience += amount;
        let mut levels = 0;
        while self.experience >= self.experience_to_next {
            self.experience -= self.experience_to_next;
            self.level_up();
            levels += 1;
        }
        levels
    }

    fn level_up(&mut self) {
        self.level += 1;
        self.base_attack += 1;
        self.base_defense += 1;
        self.max_health += 2;
        self.current_health += 2;
        self.experience_to_next = self.experience_to_next * 3 / 2;
    }

    /// Owner's turn start: attacks refresh, temporary boosts expire.
    pub fn reset_for_turn(&mut self) {
        self.attack_count_this_turn = 0;
        self.temporary_attack_boost = 0;
    }
}
