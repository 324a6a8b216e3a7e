//! Card instances - physical copies of a definition.
//!
//! A deck built from `["goblin_scout", "goblin_scout"]` holds two
//! `CardInstance`s sharing one definition but with distinct `InstanceId`s.
//! Instances move between deck, hand and graveyard; when played they are
//! attached to the monster/spell/trap they became, and come back out when
//! that entity leaves play.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::definition::{CardDefinition, CardId, CardType};
use crate::core::InstanceId;

/// One physical card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardInstance {
    /// Unique per match.
    pub id: InstanceId,

    /// Shared catalog definition.
    pub definition: Arc<CardDefinition>,
}

impl CardInstance {
    /// Create a new card instance.
    #[must_use]
    pub fn new(id: InstanceId, definition: Arc<CardDefinition>) -> Self {
        Self { id, definition }
    }

    /// Catalog id of this card.
    #[must_use]
    pub fn card_id(&self) -> &CardId {
        &self.definition.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.definition.name
    }

    #[must_use]
    pub fn cost(&self) -> u32 {
        self.definition.cost
    }

    #[must_use]
    pub fn card_type(&self) -> CardType {
        self.definition.card_type()
    }
}
