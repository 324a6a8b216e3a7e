//! Card definitions - static card data.
//!
//! `CardDefinition` holds the immutable properties of a catalog entry.
//! For example, "Stone Golem" always costs 3 Stars and has 2/4/12 stats.
//!
//! Battle state (current health, upgrade levels, trap activation) lives on
//! the runtime instances in `entities`, created from a definition when the
//! card is played.

use serde::{Deserialize, Serialize};

use super::abilities::{Abilities, Ability};
use crate::effects::{SpellEffect, TrapEffect, TrapTrigger};

/// Unique identifier for a card definition, e.g. `"stone_golem"`.
///
/// This identifies the catalog entry, not a specific copy in a deck.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(pub String);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw ID text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CardId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Broad card category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardType {
    Monster,
    Spell,
    Trap,
}

impl std::fmt::Display for CardType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            CardType::Monster => "monster",
            CardType::Spell => "spell",
            CardType::Trap => "trap",
        };
        f.write_str(name)
    }
}

/// Type-specific card data.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardKind {
    Monster {
        attack: u32,
        defense: u32,
        health: u32,
        #[serde(default)]
        abilities: Abilities,
    },
    Spell {
        effect: SpellEffect,
    },
    Trap {
        trigger: TrapTrigger,
        effect: TrapEffect,
    },
}

/// Static card definition.
///
/// ## Example
///
/// ```
/// use defend_the_fort::cards::{Ability, CardDefinition, CardType};
///
/// let drake = CardDefinition::monster("fire_drake", "Fire Drake", 4, 6, 1, 10)
///     .with_ability(Ability::DoubleAttack);
///
/// assert_eq!(drake.card_type(), CardType::Monster);
/// assert!(drake.has_ability(Ability::DoubleAttack));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDefinition {
    /// Unique identifier for this card definition.
    pub id: CardId,

    /// Display name.
    pub name: String,

    /// Stars price.
    pub cost: u32,

    /// Flavor/rules text.
    #[serde(default)]
    pub description: String,

    /// Type-specific data.
    pub kind: CardKind,
}

impl CardDefinition {
    /// Create a monster definition.
    #[must_use]
    pub fn monster(
        id: impl Into<String>,
        name: impl Into<String>,
        cost: u32,
        attack: u32,
        defense: u32,
        health: u32,
    ) -> Self {
        Self {
            id: CardId::new(id),
            name: name.into(),
            cost,
            description: String::new(),
            kind: CardKind::Monster {
                attack,
                defense,
                health,
                abilities: Abilities::new(),
            },
        }
    }

    /// Create a spell definition.
    #[must_use]
    pub fn spell(
        id: impl Into<String>,
        name: impl Into<String>,
        cost: u32,
        effect: SpellEffect,
    ) -> Self {
        Self {
            id: CardId::new(id),
            name: name.into(),
            cost,
            description: effect.describe(),
            kind: CardKind::Spell { effect },
        }
    }

    /// Create a trap definition.
    #[must_use]
    pub fn trap(
        id: impl Into<String>,
        name: impl Into<String>,
        cost: u32,
        trigger: TrapTrigger,
        effect: TrapEffect,
    ) -> Self {
        Self {
            id: CardId::new(id),
            name: name.into(),
            cost,
            description: String::new(),
            kind: CardKind::Trap { trigger, effect },
        }
    }

    /// Add an ability tag (builder pattern). No-op for non-monsters.
    #[must_use]
    pub fn with_ability(mut self, ability: Ability) -> Self {
        if let CardKind::Monster { abilities, .. } = &mut self.kind {
            if !abilities.contains(&ability) {
                abilities.push(ability);
            }
        }
        self
    }

    /// Set the card text (builder pattern).
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Card category.
    #[must_use]
    pub fn card_type(&self) -> CardType {
        match self.kind {
            CardKind::Monster { .. } => CardType::Monster,
            CardKind::Spell { .. } => CardType::Spell,
            CardKind::Trap { .. } => CardType::Trap,
        }
    }

    /// Ability tags (always empty for spells and traps).
    #[must_use]
    pub fn abilities(&self) -> &[Ability] {
        match &self.kind {
            CardKind::Monster { abilities, .. } => abilities,
            _ => &[],
        }
    }

    #[must_use]
    pub fn has_ability(&self, ability: Ability) -> bool {
        self.abilities().contains(&ability)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_id() {
        let id = CardId::new("goblin_scout");
        assert_eq!(id.as_str(), "goblin_scout");
        assert_eq!(format!("{}", id), "goblin_scout");
    }

    #[test]
    fn test_monster_builder() {
        let card = CardDefinition::monster("golem", "Stone Golem", 3, 2, 4, 12)
            .with_ability(Ability::Protection)
            .with_ability(Ability::Protection)
            .with_description("Slow but sturdy");

        assert_eq!(card.card_type(), CardType::Monster);
        assert_eq!(card.cost, 3);
        assert_eq!(card.abilities(), &[Ability::Protection]);
        assert_eq!(card.description, "Slow but sturdy");
    }

    #[test]
    fn test_spell_has_no_abilities() {
        let card = CardDefinition::spell("fireball", "Fireball", 3, SpellEffect::DamageEnemyFort(8))
            .with_ability(Ability::DoubleAttack);

        assert_eq!(card.card_type(), CardType::Spell);
        assert!(card.abilities().is_empty());
        assert!(!card.description.is_empty());
    }

    #[test]
    fn test_definition_json_shape() {
        let json = r#"{
            "id": "mirror_shield",
            "name": "Mirror Shield",
            "cost": 2,
            "kind": { "trap": { "trigger": "on_attack", "effect": "reflect_damage" } }
        }"#;
        let card: CardDefinition = serde_json::from_str(json).unwrap();

        assert_eq!(card.card_type(), CardType::Trap);
        assert_eq!(
            card.kind,
            CardKind::Trap {
                trigger: TrapTrigger::OnAttack,
                effect: TrapEffect::ReflectDamage
            }
        );
        assert!(card.description.is_empty());
    }

    #[test]
    fn test_monster_json_without_abilities() {
        let json = r#"{
            "id": "goblin", "name": "Goblin", "cost": 1,
            "kind": { "monster": { "attack": 2, "defense": 0, "health": 4 } }
        }"#;
        let card: CardDefinition = serde_json::from_str(json).unwrap();
        assert!(card.abilities().is_empty());
    }
}
