//! Fixed-size zones for cards in play.
//!
//! ## Key Types
//!
//! - `MonsterField`: four monster slots
//! - `SpellTrapZone`: five slots, each holding a `ZoneSlot`
//! - `ZoneSlot`: {Empty, Spell, Trap}, matched exhaustively wherever a slot
//!   is consumed
//!
//! Deck, hand and graveyard are plain ordered sequences on `Player`.

pub mod field;
pub mod spell_trap;

pub use field::{MonsterField, MONSTER_SLOTS};
pub use spell_trap::{SpellTrapZone, ZoneSlot, SPELL_TRAP_SLOTS};
