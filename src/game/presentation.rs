//! Optional presentation callbacks.
//!
//! A front end (renderer, audio, replay recorder) implements
//! [`PresentationPort`] and attaches it to a `Game`. Every hook is
//! fire-and-forget with a no-op default: rules never depend on whether a
//! port is attached, and the port is not part of saved state.

use std::fmt;
use std::rc::Rc;

use crate::core::PlayerId;
use crate::triggers::TrapActivation;

use super::outcome::AttackOutcome;

/// Hooks called at fixed points of the battle flow.
pub trait PresentationPort {
    /// A monster-vs-monster attack resolved.
    fn monster_attacked(&self, _outcome: &AttackOutcome) {}

    /// A fort took damage.
    fn fort_hit(&self, _defender: PlayerId, _damage: u32, _fort_hp: u32) {}

    /// A monster left the field.
    fn monster_destroyed(&self, _owner: PlayerId, _name: &str) {}

    fn trap_activated(&self, _activation: &TrapActivation) {}

    fn game_over(&self, _winner: PlayerId) {}
}

/// Handle to an attached port, or nothing.
#[derive(Clone, Default)]
pub struct Presenter(Option<Rc<dyn PresentationPort>>);

impl Presenter {
    #[must_use]
    pub fn new(port: Rc<dyn PresentationPort>) -> Self {
        Self(Some(port))
    }

    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.0.is_some()
    }

    pub fn monster_attacked(&self, outcome: &AttackOutcome) {
        if let Some(port) = &self.0 {
            port.monster_attacked(outcome);
        }
    }

    pub fn fort_hit(&self, defender: PlayerId, damage: u32, fort_hp: u32) {
        if let Some(port) = &self.0 {
            port.fort_hit(defender, damage, fort_hp);
        }
    }

    pub fn monster_destroyed(&self, owner: PlayerId, name: &str) {
        if let Some(port) = &self.0 {
            port.monster_destroyed(owner, name);
        }
    }

    pub fn trap_activated(&self, activation: &TrapActivation) {
        if let Some(port) = &self.0 {
            port.trap_activated(activation);
        }
    }

    pub fn game_over(&self, winner: PlayerId) {
        if let Some(port) = &self.0 {
            port.game_over(winner);
        }
    }
}

impl fmt::Debug for Presenter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Presenter")
            .field(&if self.is_attached() { "attached" } else { "detached" })
            .finish()
    }
}
