//! The standard card set and starter deck.

use super::abilities::Ability;
use super::deck::DeckList;
use super::definition::{CardDefinition, CardId};
use super::registry::CardCatalog;
use crate::effects::{SpellEffect, TrapEffect, TrapTrigger, UpgradeKind};

/// Monster rows: id, name, cost, attack, defense, health, ability.
const MONSTERS: &[(&str, &str, u32, u32, u32, u32, Option<Ability>)] = &[
    ("goblin_scout", "Goblin Scout", 1, 2, 0, 4, None),
    ("skeleton_warrior", "Skeleton Warrior", 2, 3, 1, 5, Some(Ability::Revive)),
    ("stone_golem", "Stone Golem", 3, 2, 4, 12, None),
    ("knight_captain", "Knight Captain", 3, 4, 2, 9, Some(Ability::MoraleBoost)),
    ("berserker", "Berserker", 3, 5, 1, 7, Some(Ability::Rage)),
    ("fire_drake", "Fire Drake", 4, 6, 1, 10, Some(Ability::DoubleAttack)),
    ("shadow_assassin", "Shadow Assassin", 4, 5, 0, 6, Some(Ability::DirectFortAttack)),
    ("guardian_angel", "Guardian Angel", 4, 3, 3, 12, Some(Ability::Protection)),
    ("phoenix", "Phoenix", 5, 5, 2, 10, Some(Ability::Rebirth)),
    ("hydra", "Hydra", 6, 4, 2, 14, Some(Ability::MultipleAttacks)),
];

const SPELLS: &[(&str, &str, u32, SpellEffect)] = &[
    ("treasure", "Treasure", 1, SpellEffect::GainStars(3)),
    ("forge", "Forge", 1, SpellEffect::ExtraUpgrade(UpgradeKind::Both)),
    ("repair", "Repair", 2, SpellEffect::HealFort(15)),
    ("healing_wave", "Healing Wave", 2, SpellEffect::HealMonsters(6)),
    ("battle_cry", "Battle Cry", 2, SpellEffect::BoostAttack(3)),
    ("insight", "Insight", 2, SpellEffect::DrawCards(2)),
    ("fireball", "Fireball", 3, SpellEffect::DamageEnemyFort(8)),
    ("lightning_storm", "Lightning Storm", 4, SpellEffect::DamageEnemyMonsters(4)),
    ("blessing", "Blessing", 4, SpellEffect::Empower(1)),
];

struct TrapRow {
    id: &'static str,
    name: &'static str,
    cost: u32,
    trigger: TrapTrigger,
    effect: TrapEffect,
    text: &'static str,
}

const TRAPS: &[TrapRow] = &[
    TrapRow {
        id: "mirror_shield",
        name: "Mirror Shield",
        cost: 2,
        trigger: TrapTrigger::OnAttack,
        effect: TrapEffect::ReflectDamage,
        text: "When attacked, reflect half the damage back",
    },
    TrapRow {
        id: "vengeance",
        name: "Vengeance",
        cost: 2,
        trigger: TrapTrigger::OnMonsterDestroyed,
        effect: TrapEffect::CounterDamage,
        text: "When your monster falls, deal 5 damage to its killer",
    },
    TrapRow {
        id: "thief",
        name: "Thief",
        cost: 2,
        trigger: TrapTrigger::OnOpponentCardPlay,
        effect: TrapEffect::StealStars,
        text: "When your opponent plays a card, steal 3 Stars",
    },
    TrapRow {
        id: "emergency_repair",
        name: "Emergency Repair",
        cost: 2,
        trigger: TrapTrigger::OnLowFortHp,
        effect: TrapEffect::EmergencyHeal,
        text: "At turn start below 20 fort HP, restore 30",
    },
    TrapRow {
        id: "counter_spell",
        name: "Counter Spell",
        cost: 3,
        trigger: TrapTrigger::OnOpponentCardPlay,
        effect: TrapEffect::Negate,
        text: "Negate your opponent's next spell or trap",
    },
    TrapRow {
        id: "ambush",
        name: "Ambush",
        cost: 3,
        trigger: TrapTrigger::OnFortAttack,
        effect: TrapEffect::SummonDefender,
        text: "When your fort is hit, summon a 3/3/5 guardian",
    },
];

/// Build the standard catalog.
#[must_use]
pub fn standard_catalog() -> CardCatalog {
    let mut catalog = CardCatalog::new();

    for &(id, name, cost, attack, defense, health, ability) in MONSTERS {
        let card = CardDefinition::monster(id, name, cost, attack, defense, health);
        catalog.register(match ability {
            Some(ability) => card.with_ability(ability),
            None => card,
        });
    }
    for &(id, name, cost, effect) in SPELLS {
        catalog.register(CardDefinition::spell(id, name, cost, effect));
    }
    for row in TRAPS {
        let card = CardDefinition::trap(row.id, row.name, row.cost, row.trigger, row.effect);
        catalog.register(card.with_description(row.text));
    }

    catalog
}

/// The 20-card deck every new player starts with.
#[must_use]
pub fn starter_deck() -> DeckList {
    [
        "goblin_scout", "goblin_scout", "goblin_scout",
        "skeleton_warrior", "skeleton_warrior",
        "stone_golem", "stone_golem",
        "knight_captain", "berserker",
        "fire_drake", "shadow_assassin",
        "treasure", "treasure",
        "repair", "battle_cry", "fireball", "insight",
        "mirror_shield", "vengeance", "emergency_repair",
    ]
    .into_iter()
    .map(CardId::from)
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardType;

    #[test]
    fn test_starter_deck_is_legal() {
        let catalog = standard_catalog();
        let deck = starter_deck();
        assert_eq!(deck.len(), 20);
        assert_eq!(deck.validate(&catalog), Ok(()));
    }

    #[test]
    fn test_table_rows_keep_their_stats() {
        let catalog = standard_catalog();
        let drake = catalog.get(&CardId::from("fire_drake")).unwrap();
        assert_eq!(drake.cost, 4);
        assert!(drake.has_ability(Ability::DoubleAttack));

        let ambush = catalog.get(&CardId::from("ambush")).unwrap();
        assert_eq!(ambush.description, "When your fort is hit, summon a 3/3/5 guardian");
    }

    #[test]
    fn test_catalog_covers_every_type() {
        let catalog = standard_catalog();
        assert!(catalog.find_by_type(CardType::Monster).count() >= 10);
        assert!(catalog.find_by_type(CardType::Spell).count() >= 9);
        assert!(catalog.find_by_type(CardType::Trap).count() >= 6);
    }
}
