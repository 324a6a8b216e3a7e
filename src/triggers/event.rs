//! Battle events that traps listen for.
//!
//! An event is fired against one player's spell/trap zone: the *owner* of
//! the traps being scanned. The event itself records who acted and which
//! slots were involved; trigger matching decides what counts.

use serde::{Deserialize, Serialize};

use crate::cards::CardType;
use crate::core::PlayerId;

/// Kind of battle event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// A monster declared an attack on another monster.
    Attack,
    /// A fort was hit.
    FortAttack,
    /// A monster died.
    MonsterDestroyed,
    /// A player's turn began.
    TurnStart,
    /// A card was played from hand or cast from the zone.
    CardPlay,
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            EventKind::Attack => "attack",
            EventKind::FortAttack => "fort attack",
            EventKind::MonsterDestroyed => "monster destroyed",
            EventKind::TurnStart => "turn start",
            EventKind::CardPlay => "card play",
        };
        f.write_str(name)
    }
}

/// A monster field slot on one side of the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SlotRef {
    pub player: PlayerId,
    pub slot: usize,
}

impl SlotRef {
    #[must_use]
    pub const fn new(player: PlayerId, slot: usize) -> Self {
        Self { player, slot }
    }
}

/// A battle event with its context.
///
/// - `actor`: the player whose action caused the event
/// - `source`: the attacking monster, or the destroyer of a dead monster
/// - `target`: the monster attacked or destroyed
/// - `damage`: raw attack for `Attack`, damage dealt for `FortAttack`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameEvent {
    pub kind: EventKind,
    pub actor: Option<PlayerId>,
    pub source: Option<SlotRef>,
    pub target: Option<SlotRef>,
    pub damage: u32,
    pub card_type: Option<CardType>,
}

impl GameEvent {
    /// Create an event with no context.
    #[must_use]
    pub fn new(kind: EventKind) -> Self {
        Self {
            kind,
            actor: None,
            source: None,
            target: None,
            damage: 0,
            card_type: None,
        }
    }

    #[must_use]
    pub fn with_actor(mut self, actor: PlayerId) -> Self {
        self.actor = Some(actor);
        self
    }

    #[must_use]
    pub fn with_source(mut self, source: SlotRef) -> Self {
        self.source = Some(source);
        self
    }

    #[must_use]
    pub fn with_target(mut self, target: SlotRef) -> Self {
        self.target = Some(target);
        self
    }

    #[must_use]
    pub fn with_damage(mut self, damage: u32) -> Self {
        self.damage = damage;
        self
    }

    #[must_use]
    pub fn with_card_type(mut self, card_type: CardType) -> Self {
        self.card_type = Some(card_type);
        self
    }
}

/// Constructors for the events the engine fires.
impl GameEvent {
    /// `attacker` is about to hit `target` with `attack` raw damage.
    #[must_use]
    pub fn attack(attacker: SlotRef, target: SlotRef, attack: u32) -> Self {
        Self::new(EventKind::Attack)
            .with_actor(attacker.player)
            .with_source(attacker)
            .with_target(target)
            .with_damage(attack)
    }

    /// `attacker` hit the opposing fort for `damage`.
    #[must_use]
    pub fn fort_attack(attacker: SlotRef, damage: u32) -> Self {
        Self::new(EventKind::FortAttack)
            .with_actor(attacker.player)
            .with_source(attacker)
            .with_damage(damage)
    }

    /// The monster in `victim` died. `destroyer` is the monster that killed
    /// it, if any.
    #[must_use]
    pub fn monster_destroyed(victim: SlotRef, destroyer: Option<SlotRef>) -> Self {
        let event = Self::new(EventKind::MonsterDestroyed).with_target(victim);
        match destroyer {
            Some(destroyer) => event.with_actor(destroyer.player).with_source(destroyer),
            None => event,
        }
    }

    #[must_use]
    pub fn turn_start(player: PlayerId) -> Self {
        Self::new(EventKind::TurnStart).with_actor(player)
    }

    #[must_use]
    pub fn card_play(actor: PlayerId, card_type: CardType) -> Self {
        Self::new(EventKind::CardPlay)
            .with_actor(actor)
            .with_card_type(card_type)
    }
}
