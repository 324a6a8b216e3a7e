//! Card instance identification.
//!
//! Every physical card in a match has a unique `InstanceId`, even when
//! several copies of the same catalog entry sit in one deck. Hand lookups
//! ("play the card with this id") resolve by instance, never by catalog id.
//!
//! ## ID Layout
//!
//! Each seat allocates from its own block so ids never collide across the
//! table:
//! - seat 0: `0..SEAT_BLOCK`
//! - seat 1: `SEAT_BLOCK..2*SEAT_BLOCK`
//!
//! ```
//! use defend_the_fort::core::{InstanceId, PlayerId};
//!
//! let first = InstanceId::first_for(PlayerId::SECOND);
//! assert_eq!(first.seat(), PlayerId::SECOND);
//! assert_eq!(first.next().seat(), PlayerId::SECOND);
//! ```

use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// Ids reserved per seat.
pub const SEAT_BLOCK: u32 = 1 << 20;

/// Unique identifier for a card instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct InstanceId(pub u32);

impl InstanceId {
    /// First id in a seat's block.
    #[must_use]
    pub const fn first_for(player: PlayerId) -> Self {
        Self(player.0 as u32 * SEAT_BLOCK)
    }

    /// The id following this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }

    /// The seat whose block this id was allocated from.
    #[must_use]
    pub const fn seat(self) -> PlayerId {
        PlayerId((self.0 / SEAT_BLOCK) as u8)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for InstanceId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for InstanceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Instance({})", self.0)
    }
}
