//! Monster ability tags.
//!
//! Only `DirectFortAttack`, `DoubleAttack` and `MultipleAttacks` change
//! what the engine allows. The remaining tags appear in card data and are
//! carried onto monsters, but no rule reads them yet.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// A monster ability tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ability {
    /// May attack the fort even while enemy monsters stand.
    DirectFortAttack,
    /// Two attacks per turn.
    DoubleAttack,
    /// No per-turn attack limit.
    MultipleAttacks,
    Revive,
    Rebirth,
    Rage,
    Protection,
    MoraleBoost,
}

impl Ability {
    /// Whether any engine rule reads this tag.
    #[must_use]
    pub fn is_implemented(self) -> bool {
        matches!(
            self,
            Ability::DirectFortAttack | Ability::DoubleAttack | Ability::MultipleAttacks
        )
    }
}

/// Ability set of a card or monster.
///
/// Most monsters carry zero or one tag, so two inline slots avoid a heap
/// allocation in the common case.
pub type Abilities = SmallVec<[Ability; 2]>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_implemented_tags() {
        assert!(Ability::DoubleAttack.is_implemented());
        assert!(Ability::DirectFortAttack.is_implemented());
        assert!(Ability::MultipleAttacks.is_implemented());
        assert!(!Ability::Rebirth.is_implemented());
        assert!(!Ability::MoraleBoost.is_implemented());
    }

    #[test]
    fn test_ability_json_tags() {
        let abilities: Abilities =
            serde_json::from_str(r#"["direct_fort_attack","morale_boost"]"#).unwrap();
        assert_eq!(abilities.as_slice(), &[Ability::DirectFortAttack, Ability::MoraleBoost]);
    }
}
