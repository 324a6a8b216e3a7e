//! Effect tag tables.
//!
//! Spells and traps don't carry scripts: each card names one entry from a
//! fixed, enumerated table and the resolver knows what every entry does.
//! The tags serialize in snake_case so catalog JSON reads naturally:
//!
//! ```json
//! { "spell": { "effect": { "damage_enemy_fort": 8 } } }
//! { "trap":  { "trigger": "on_attack", "effect": "reflect_damage" } }
//! ```

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::core::GameError;

/// What a spell does when cast.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpellEffect {
    /// Damage the opposing fort (fort defense mitigates, minimum 1).
    DamageEnemyFort(u32),
    /// Damage every living enemy monster (defense mitigates, minimum 1).
    DamageEnemyMonsters(u32),
    /// Restore HP to the caster's fort.
    HealFort(u32),
    /// Restore health to each of the caster's living monsters.
    HealMonsters(u32),
    /// Temporary attack bonus for the caster's monsters, gone next own turn.
    BoostAttack(u32),
    /// Permanent attack bonus for the caster's monsters.
    Empower(u32),
    /// Gain Stars.
    GainStars(u32),
    /// Draw cards.
    DrawCards(u32),
    /// One more weapon and/or armor upgrade this turn.
    ExtraUpgrade(UpgradeKind),
}

impl SpellEffect {
    /// Short description for card text and logs.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            SpellEffect::DamageEnemyFort(n) => format!("Deal {n} damage to the enemy fort"),
            SpellEffect::DamageEnemyMonsters(n) => {
                format!("Deal {n} damage to every enemy monster")
            }
            SpellEffect::HealFort(n) => format!("Restore {n} fort HP"),
            SpellEffect::HealMonsters(n) => format!("Heal your monsters for {n}"),
            SpellEffect::BoostAttack(n) => format!("Your monsters gain +{n} attack this turn"),
            SpellEffect::Empower(n) => format!("Your monsters permanently gain +{n} attack"),
            SpellEffect::GainStars(n) => format!("Gain {n} Stars"),
            SpellEffect::DrawCards(n) => format!("Draw {n} cards"),
            SpellEffect::ExtraUpgrade(kind) => format!("Gain an extra {kind} upgrade this turn"),
        }
    }
}

/// Event condition a trap waits for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrapTrigger {
    /// An enemy monster attacks one of the owner's monsters.
    OnAttack,
    /// The owner's fort is hit.
    OnFortAttack,
    /// One of the owner's monsters is destroyed.
    OnMonsterDestroyed,
    /// The owner's turn starts while fort HP is below the low-HP threshold.
    OnLowFortHp,
    /// The opponent plays a card.
    OnOpponentCardPlay,
}

/// What a trap does when it springs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrapEffect {
    /// Send half the incoming damage back to the attacker.
    ReflectDamage,
    /// Deal flat damage to whatever destroyed the owner's monster.
    CounterDamage,
    /// Cancel the spell or trap that was just played.
    Negate,
    /// Summon a fixed defender token into an empty field slot.
    SummonDefender,
    /// Heal the fort if it is low.
    EmergencyHeal,
    /// Take Stars from the opponent.
    StealStars,
}

/// Which per-turn upgrade cap a bonus applies to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpgradeKind {
    Attack,
    Defense,
    Both,
}

impl UpgradeKind {
    #[must_use]
    pub fn includes_attack(self) -> bool {
        matches!(self, UpgradeKind::Attack | UpgradeKind::Both)
    }

    #[must_use]
    pub fn includes_defense(self) -> bool {
        matches!(self, UpgradeKind::Defense | UpgradeKind::Both)
    }
}

impl std::fmt::Display for UpgradeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            UpgradeKind::Attack => "attack",
            UpgradeKind::Defense => "defense",
            UpgradeKind::Both => "attack and defense",
        };
        f.write_str(name)
    }
}

/// Fort upgrade purchases.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FortUpgrade {
    /// +2 fort defense.
    Defense,
    /// +1 Star generated per turn.
    Stars,
    /// +20 max and current HP.
    Hp,
}

impl FortUpgrade {
    pub const ALL: [FortUpgrade; 3] = [FortUpgrade::Defense, FortUpgrade::Stars, FortUpgrade::Hp];
}

impl FromStr for FortUpgrade {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "defense" => Ok(FortUpgrade::Defense),
            "stars" => Ok(FortUpgrade::Stars),
            "hp" => Ok(FortUpgrade::Hp),
            other => Err(GameError::InvalidUpgradeKind {
                kind: other.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for FortUpgrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            FortUpgrade::Defense => "defense",
            FortUpgrade::Stars => "stars",
            FortUpgrade::Hp => "hp",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fort_upgrade_parse() {
        assert_eq!("hp".parse::<FortUpgrade>(), Ok(FortUpgrade::Hp));
        assert_eq!("stars".parse::<FortUpgrade>(), Ok(FortUpgrade::Stars));
        assert_eq!(
            "moat".parse::<FortUpgrade>(),
            Err(GameError::InvalidUpgradeKind {
                kind: "moat".to_string()
            })
        );
    }

    #[test]
    fn test_fort_upgrade_display_parses_back() {
        for kind in FortUpgrade::ALL {
            assert_eq!(kind.to_string().parse::<FortUpgrade>(), Ok(kind));
        }
    }

    #[test]
    fn test_upgrade_kind_coverage() {
        assert!(UpgradeKind::Both.includes_attack());
        assert!(UpgradeKind::Both.includes_defense());
        assert!(!UpgradeKind::Attack.includes_defense());
        assert!(!UpgradeKind::Defense.includes_attack());
    }

    #[test]
    fn test_tags_use_snake_case() {
        let json = serde_json::to_string(&SpellEffect::DamageEnemyFort(8)).unwrap();
        assert_eq!(json, r#"{"damage_enemy_fort":8}"#);

        let trigger: TrapTrigger = serde_json::from_str(r#""on_low_fort_hp""#).unwrap();
        assert_eq!(trigger, TrapTrigger::OnLowFortHp);

        let effect: SpellEffect =
            serde_json::from_str(r#"{"extra_upgrade":"both"}"#).unwrap();
        assert_eq!(effect, SpellEffect::ExtraUpgrade(UpgradeKind::Both));
    }
}
