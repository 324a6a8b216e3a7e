//! # defend-the-fort
//!
//! Rules engine for a two-player card battler. Each player defends a fort,
//! summons monsters into four field slots, and keeps spells and face-down
//! traps in a five-slot zone. A player wins when the enemy fort falls.
//!
//! ## Design Principles
//!
//! 1. **Rules Only**: No rendering, input or networking. Front ends talk to
//!    the engine through `Action`s and typed outcomes, and may attach a
//!    `PresentationPort` for fire-and-forget notifications.
//!
//! 2. **Explicit Failures**: Every rejected command is a `GameError` and
//!    leaves the match untouched.
//!
//! 3. **Deterministic**: Shuffles draw from a seeded ChaCha stream; a match
//!    replays exactly from its seed and action history.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: Hands, decks, graveyards and history
//!   are `im` vectors, so `Game::lookahead` and snapshots clone cheaply.
//!
//! - **Event-driven traps**: Combat, card play and turn changes build a
//!   `GameEvent` and hand it to `check_traps`, which scans the defender's
//!   zone once.
//!
//! ## Modules
//!
//! - `core`: Seats, instance IDs, actions, config, RNG, errors, battle log
//! - `cards`: Card definitions, catalog, deck lists, starter content
//! - `effects`: Spell/trap effect vocabulary and their resolution
//! - `entities`: Monster, fort, spell and trap runtime objects
//! - `zones`: Monster field and spell/trap zone
//! - `triggers`: Game events and trap checks
//! - `game`: Player, turn flow, combat, match session
//! - `ai`: Computer opponents
//!
//! ## Quick Start
//!
//! ```
//! use std::sync::Arc;
//! use defend_the_fort::{
//!     standard_catalog, starter_deck, Action, GreedyPolicy, MatchConfig, MatchSession, PlayerId,
//! };
//!
//! let mut session = MatchSession::new(
//!     Arc::new(standard_catalog()),
//!     MatchConfig::default(),
//!     ("Ann", starter_deck()),
//!     ("Bot", starter_deck()),
//! )
//! .unwrap()
//! .with_ai(PlayerId::SECOND, GreedyPolicy);
//!
//! session.apply(PlayerId::FIRST, &Action::EndTurn).unwrap();
//! let results = session.run_ai_turn();
//! assert!(!results.is_empty());
//! assert_eq!(session.game().current_player(), PlayerId::FIRST);
//! ```

pub mod ai;
pub mod cards;
pub mod core;
pub mod effects;
pub mod entities;
pub mod game;
pub mod triggers;
pub mod zones;

pub use crate::core::{
    Action, ActionRecord, BattleLog, GameError, GameRng, InstanceId, LogEntry, MatchConfig,
    PlayerId, PlayerMap,
};

pub use crate::cards::{
    standard_catalog, starter_deck, Ability, CardCatalog, CardDefinition, CardId, CardInstance,
    CardKind, CardType, DeckList,
};

pub use crate::effects::{FortUpgrade, SpellEffect, TrapEffect, TrapTrigger};

pub use crate::entities::{Fort, Monster, Spell, Trap};

pub use crate::zones::{MonsterField, SpellTrapZone, ZoneSlot};

pub use crate::triggers::{check_traps, EventKind, GameEvent, SlotRef, TrapActivation};

pub use crate::game::{
    ActionResult, Game, GameBuilder, GamePhase, MatchSession, Player, PresentationPort, Scenario,
};

pub use crate::ai::{AiPolicy, GreedyPolicy};
