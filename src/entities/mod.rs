//! Runtime battle entities.
//!
//! Each is created from a catalog card when played and carries the
//! mutable state the card definition doesn't: health, upgrade levels,
//! activation latches.

pub mod fort;
pub mod monster;
pub mod spell;
pub mod trap;

pub use fort::Fort;
pub use monster::{FortStrike, Monster, MonsterStrike};
pub use spell::Spell;
pub use trap::Trap;
