//! A seat in the match: resources, cards and zones.
//!
//! `Player` owns everything one side of the board needs: Stars, deck,
//! hand, graveyard, both zones, the fort, and the per-turn upgrade
//! budget. All operations here validate fully before mutating, so an
//! `Err` leaves the player exactly as it was.
//!
//! Turn ownership and game-over gates belong to `Game`, which wraps the
//! card-play operations so trap checks can't be bypassed.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::{CardCatalog, CardInstance, CardType, DeckList};
use crate::core::{GameError, GameRng, InstanceId, MatchConfig, PlayerId};
use crate::effects::{FortUpgrade, UpgradeKind};
use crate::entities::{Fort, Monster, Spell, Trap};
use crate::zones::{MonsterField, SpellTrapZone, ZoneSlot};

/// Default per-turn cap for each upgrade kind.
pub const BASE_UPGRADES_PER_TURN: u32 = 1;

/// One side of the board.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,

    pub stars: u32,
    pub stars_per_turn: u32,

    pub hand: Vector<CardInstance>,
    /// Draws pop from the back.
    pub deck: Vector<CardInstance>,
    pub graveyard: Vector<CardInstance>,

    pub monster_field: MonsterField,
    pub spell_trap_zone: SpellTrapZone,

    pub attack_upgrades_this_turn: u32,
    pub defense_upgrades_this_turn: u32,
    pub max_attack_upgrades: u32,
    pub max_defense_upgrades: u32,

    pub fort: Fort,

    pub monster_upgrade_cost: u32,
    pub fort_upgrade_cost: u32,

    next_instance: InstanceId,
    rng: GameRng,
}

impl Player {
    /// A player with an empty deck, configured from `config`.
    #[must_use]
    pub fn new(id: PlayerId, name: impl Into<String>, config: &MatchConfig) -> Self {
        let rng = GameRng::new(config.seed).for_context(&format!("deck-{}", id.index()));
        Self {
            id,
            name: name.into(),
            stars: config.starting_stars,
            stars_per_turn: config.stars_per_turn,
            hand: Vector::new(),
            deck: Vector::new(),
            graveyard: Vector::new(),
            monster_field: MonsterField::default(),
            spell_trap_zone: SpellTrapZone::default(),
            attack_upgrades_this_turn: 0,
            defense_upgrades_this_turn: 0,
            max_attack_upgrades: BASE_UPGRADES_PER_TURN,
            max_defense_upgrades: BASE_UPGRADES_PER_TURN,
            fort: Fort::new(config.fort_hp, config.fort_defense),
            monster_upgrade_cost: config.monster_upgrade_cost,
            fort_upgrade_cost: config.fort_upgrade_cost,
            next_instance: InstanceId::first_for(id),
            rng,
        }
    }

    /// Replace the deck with fresh instances of `list`, then shuffle.
    ///
    /// Every id must resolve in `catalog`; nothing changes otherwise.
    pub fn initialize_deck(
        &mut self,
        list: &DeckList,
        catalog: &CardCatalog,
    ) -> Result<(), GameError> {
        let definitions = list
            .iter()
            .map(|id| {
                catalog
                    .get(id)
                    .cloned()
                    .ok_or_else(|| GameError::UnknownCard { card: id.clone() })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let deck: Vector<CardInstance> = definitions
            .into_iter()
            .map(|definition| CardInstance::new(self.allocate_instance(), definition))
            .collect();
        self.deck = deck;
        self.shuffle_deck();
        Ok(())
    }

    fn allocate_instance(&mut self) -> InstanceId {
        let id = self.next_instance;
        self.next_instance = id.next();
        id
    }

    /// Fisher–Yates over the deck.
    pub fn shuffle_deck(&mut self) {
        let len = self.deck.len();
        self.rng.fisher_yates(len, |i, j| self.deck.swap(i, j));
    }

    /// Whether the current Stars cover `card`'s cost.
    #[must_use]
    pub fn can_play_card(&self, card: &CardInstance) -> bool {
        self.stars >= card.cost()
    }

    /// Hand card by instance id.
    #[must_use]
    pub fn hand_card(&self, card: InstanceId) -> Option<&CardInstance> {
        self.hand.iter().find(|c| c.id == card)
    }

    fn hand_position(&self, card: InstanceId) -> Result<usize, GameError> {
        self.hand
            .iter()
            .position(|c| c.id == card)
            .ok_or(GameError::CardNotInHand { instance: card })
    }

    fn check_affordable(&self, cost: u32) -> Result<(), GameError> {
        if self.stars < cost {
            return Err(GameError::InsufficientStars {
                required: cost,
                available: self.stars,
            });
        }
        Ok(())
    }

    fn check_type(card: &CardInstance, expected: CardType) -> Result<(), GameError> {
        let actual = card.card_type();
        if actual != expected {
            return Err(GameError::WrongCardType { expected, actual });
        }
        Ok(())
    }

    /// Summon a monster card from hand into `slot`.
    pub fn play_monster(&mut self, card: InstanceId, slot: usize) -> Result<&Monster, GameError> {
        let position = self.hand_position(card)?;
        let instance = &self.hand[position];
        let cost = instance.cost();
        self.monster_field.check_free(slot)?;
        self.check_affordable(cost)?;
        Self::check_type(instance, CardType::Monster)?;

        let monster = Monster::from_card(instance.clone(), self.id)?;
        self.hand.remove(position);
        self.stars -= cost;
        self.monster_field.place(slot, monster)
    }

    /// Place a spell card from hand into the spell/trap zone.
    ///
    /// `zone` of `None` picks the first free slot. Returns the slot used.
    /// The spell is not cast; see `Game::cast_spell`.
    pub fn play_spell(
        &mut self,
        card: InstanceId,
        zone: Option<usize>,
    ) -> Result<usize, GameError> {
        let position = self.hand_position(card)?;
        let instance = &self.hand[position];
        let slot = self.spell_trap_zone.target_slot(zone)?;
        self.check_affordable(instance.cost())?;
        Self::check_type(instance, CardType::Spell)?;

        let spell = Spell::from_card(instance.clone())?;
        self.hand.remove(position);
        self.stars -= spell.cost();
        self.spell_trap_zone.place(Some(slot), ZoneSlot::Spell(spell))
    }

    /// Set a trap card from hand into the spell/trap zone.
    pub fn play_trap(&mut self, card: InstanceId, zone: Option<usize>) -> Result<usize, GameError> {
        let position = self.hand_position(card)?;
        let instance = &self.hand[position];
        let slot = self.spell_trap_zone.target_slot(zone)?;
        self.check_affordable(instance.cost())?;
        Self::check_type(instance, CardType::Trap)?;

        let trap = Trap::from_card(instance.clone())?;
        self.hand.remove(position);
        self.stars -= trap.cost();
        self.spell_trap_zone.place(Some(slot), ZoneSlot::Trap(trap))
    }

    /// Draw the top card into hand.
    ///
    /// An empty deck is refilled by shuffling the graveyard into it first.
    /// With both empty nothing is drawn.
    pub fn draw_card(&mut self) -> Option<CardInstance> {
        if self.deck.is_empty() && !self.graveyard.is_empty() {
            self.deck = std::mem::take(&mut self.graveyard);
            self.shuffle_deck();
            tracing::debug!(
                player = %self.id,
                cards = self.deck.len(),
                "graveyard reshuffled into deck"
            );
        }

        let card = self.deck.pop_back()?;
        self.hand.push_back(card.clone());
        Some(card)
    }

    /// Start-of-turn upkeep: income, one draw, refreshed monsters and
    /// upgrade budget.
    pub fn start_turn(&mut self) -> Option<CardInstance> {
        self.stars += self.stars_per_turn + self.fort.star_generation;
        let drawn = self.draw_card();

        for (_, monster) in self.monster_field.alive_mut() {
            monster.reset_for_turn();
        }
        self.attack_upgrades_this_turn = 0;
        self.defense_upgrades_this_turn = 0;
        self.max_attack_upgrades = BASE_UPGRADES_PER_TURN;
        self.max_defense_upgrades = BASE_UPGRADES_PER_TURN;
        drawn
    }

    /// Buy one weapon level for the monster in `slot`.
    pub fn upgrade_monster_weapon(&mut self, slot: usize) -> Result<&Monster, GameError> {
        self.check_upgrade(slot, self.attack_upgrades_this_turn, self.max_attack_upgrades)?;
        self.stars -= self.monster_upgrade_cost;
        self.attack_upgrades_this_turn += 1;
        let monster = self
            .monster_field
            .alive_at_mut(slot)
            .ok_or(GameError::InvalidTarget)?;
        monster.weapon_level += 1;
        Ok(monster)
    }

    /// Buy one armor level for the monster in `slot`.
    pub fn upgrade_monster_armor(&mut self, slot: usize) -> Result<&Monster, GameError> {
        self.check_upgrade(slot, self.defense_upgrades_this_turn, self.max_defense_upgrades)?;
        self.stars -= self.monster_upgrade_cost;
        self.defense_upgrades_this_turn += 1;
        let monster = self
            .monster_field
            .alive_at_mut(slot)
            .ok_or(GameError::InvalidTarget)?;
        monster.armor_level += 1;
        Ok(monster)
    }

    fn check_upgrade(&self, slot: usize, used: u32, cap: u32) -> Result<(), GameError> {
        if self.monster_field.alive_at(slot).is_none() {
            return Err(GameError::InvalidTarget);
        }
        self.check_affordable(self.monster_upgrade_cost)?;
        if used >= cap {
            return Err(GameError::UpgradeCapReached);
        }
        Ok(())
    }

    /// One more upgrade of `kind` for the rest of this turn.
    pub fn grant_extra_upgrade(&mut self, kind: UpgradeKind) {
        if kind.includes_attack() {
            self.max_attack_upgrades += 1;
        }
        if kind.includes_defense() {
            self.max_defense_upgrades += 1;
        }
    }

    /// Buy a fort upgrade.
    pub fn upgrade_fort(&mut self, kind: FortUpgrade) -> Result<&Fort, GameError> {
        self.check_affordable(self.fort_upgrade_cost)?;
        self.stars -= self.fort_upgrade_cost;
        self.fort.upgrade(kind);
        Ok(&self.fort)
    }

    /// Buy a fort upgrade by name. Unknown names cost nothing.
    pub fn upgrade_fort_named(&mut self, kind: &str) -> Result<&Fort, GameError> {
        let kind = kind.parse::<FortUpgrade>()?;
        self.upgrade_fort(kind)
    }

    /// Living monsters as (slot, monster).
    pub fn alive_monsters(&self) -> impl Iterator<Item = (usize, &Monster)> {
        self.monster_field.alive()
    }

    #[must_use]
    pub fn has_alive_monsters(&self) -> bool {
        self.alive_monsters().next().is_some()
    }

    /// Remove the monster in `slot`, sending its card to the graveyard.
    /// Tokens leave nothing behind.
    pub fn bury_monster(&mut self, slot: usize) -> Option<Monster> {
        let mut monster = self.monster_field.take(slot)?;
        if let Some(card) = monster.card.take() {
            self.graveyard.push_back(card);
        }
        Some(monster)
    }

    /// Cards currently owned across deck, hand, graveyard and field.
    #[must_use]
    pub fn card_count(&self) -> usize {
        let on_field = self
            .monster_field
            .iter()
            .filter(|(_, m)| m.card.is_some())
            .count();
        let in_zone = self.spell_trap_zone.spells().count() + self.spell_trap_zone.traps().count();
        self.deck.len() + self.hand.len() + self.graveyard.len() + on_field + in_zone
    }
}
