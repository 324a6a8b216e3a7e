//! Match configuration.
//!
//! Every tunable number of a match lives here: opening resources, fort
//! stats, upgrade prices, and the battle log size. Defaults reproduce the
//! standard ruleset; tests and alternative modes override individual
//! values with the `with_*` builders.

use serde::{Deserialize, Serialize};

/// Match configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Seed for deck shuffles.
    /// Same seed and decks produce identical draws.
    pub seed: u64,

    /// Stars each player holds before their first turn.
    pub starting_stars: u32,

    /// Stars gained at the start of every own turn (before fort bonus).
    pub stars_per_turn: u32,

    /// Cards drawn into each hand during setup.
    pub starting_hand_size: usize,

    /// Fort max and starting HP.
    pub fort_hp: u32,

    /// Fort damage mitigation.
    pub fort_defense: u32,

    /// Price of one weapon or armor upgrade.
    pub monster_upgrade_cost: u32,

    /// Price of one fort upgrade.
    pub fort_upgrade_cost: u32,

    /// Battle log ring buffer capacity.
    pub log_capacity: usize,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            starting_stars: 2,
            stars_per_turn: 3,
            starting_hand_size: 4,
            fort_hp: 100,
            fort_defense: 0,
            monster_upgrade_cost: 2,
            fort_upgrade_cost: 5,
            log_capacity: 50,
        }
    }
}

impl MatchConfig {
    /// Use a custom shuffle seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Use custom opening Stars.
    #[must_use]
    pub fn with_starting_stars(mut self, stars: u32) -> Self {
        self.starting_stars = stars;
        self
    }

    /// Use a custom per-turn Stars income.
    #[must_use]
    pub fn with_stars_per_turn(mut self, stars: u32) -> Self {
        self.stars_per_turn = stars;
        self
    }

    /// Use a custom opening hand size.
    #[must_use]
    pub fn with_starting_hand_size(mut self, size: usize) -> Self {
        self.starting_hand_size = size;
        self
    }

    /// Use a custom fort HP.
    #[must_use]
    pub fn with_fort_hp(mut self, hp: u32) -> Self {
        self.fort_hp = hp;
        self
    }

    /// Use a custom battle log capacity.
    #[must_use]
    pub fn with_log_capacity(mut self, capacity: usize) -> Self {
        self.log_capacity = capacity;
        self
    }
}
