//! Spell and trap effects.
//!
//! - `SpellEffect`, `TrapTrigger`, `TrapEffect`: the fixed tag tables card
//!   definitions draw from
//! - `UpgradeKind`, `FortUpgrade`: upgrade selectors
//! - `resolver`: applies a tag to a live `Game`
//!
//! Effects are data. Nothing here holds state between activations; the
//! one-shot latch lives on the `Trap` entity.

mod effect;
pub mod resolver;

pub use effect::{FortUpgrade, SpellEffect, TrapEffect, TrapTrigger, UpgradeKind};
pub use resolver::TrapResolution;
