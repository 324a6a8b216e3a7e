//! Trap triggers.
//!
//! The engine fires a [`GameEvent`] against one player's spell/trap zone at
//! fixed points in the battle flow; [`check_traps`] springs every dormant
//! trap whose [`TrapTrigger`](crate::effects::TrapTrigger) matches.
//!
//! ## Firing points
//!
//! | Event               | Fired against          | When                                  |
//! |---------------------|------------------------|---------------------------------------|
//! | `Attack`            | defender               | before a monster-vs-monster strike    |
//! | `FortAttack`        | defender               | after a fort strike                   |
//! | `MonsterDestroyed`  | owner of the dead unit | after it is removed from the field    |
//! | `TurnStart`         | new current player     | after start-of-turn upkeep            |
//! | `CardPlay`          | opponent of the player | after a card leaves hand or is cast   |
//!
//! ## Example
//!
//! ```
//! use defend_the_fort::core::{MatchConfig, PlayerId};
//! use defend_the_fort::game::Player;
//! use defend_the_fort::effects::TrapTrigger;
//! use defend_the_fort::triggers::GameEvent;
//!
//! let mut owner = Player::new(PlayerId::FIRST, "Ann", &MatchConfig::default());
//! owner.fort.hp = 12;
//!
//! let event = GameEvent::turn_start(PlayerId::FIRST);
//! assert!(TrapTrigger::OnLowFortHp.matches(&owner, &event));
//! ```

mod condition;
mod engine;
mod event;

pub use condition::LOW_FORT_HP;
pub use engine::{check_traps, TrapActivation, TrapReport};
pub use event::{EventKind, GameEvent, SlotRef};
