//! Card catalog for definition lookup.
//!
//! The `CardCatalog` stores every card definition known to a match. It is
//! built once before any player is constructed and shared read-only (via
//! `Arc`) from then on.

use rustc_hash::FxHashMap;
use std::sync::Arc;

use super::definition::{CardDefinition, CardId, CardKind, CardType};

/// Problems found while building a catalog.
///
/// These are startup errors: a catalog that fails to load should stop the
/// program before a match begins.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CatalogError {
    /// The JSON could not be parsed.
    Parse(String),
    /// Two entries share an id.
    DuplicateId(CardId),
    /// An entry has impossible stats.
    Invalid { id: CardId, reason: String },
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogError::Parse(err) => write!(f, "catalog parse error: {err}"),
            CatalogError::DuplicateId(id) => write!(f, "card '{id}' defined twice"),
            CatalogError::Invalid { id, reason } => write!(f, "card '{id}' is invalid: {reason}"),
        }
    }
}

impl std::error::Error for CatalogError {}

/// Registry of card definitions.
///
/// ## Example
///
/// ```
/// use defend_the_fort::cards::{CardCatalog, CardDefinition, CardId};
///
/// let mut catalog = CardCatalog::new();
/// catalog.register(CardDefinition::monster("goblin", "Goblin", 1, 2, 0, 4));
///
/// let found = catalog.get(&CardId::new("goblin")).unwrap();
/// assert_eq!(found.name, "Goblin");
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardCatalog {
    cards: FxHashMap<CardId, Arc<CardDefinition>>,
}

impl CardCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a catalog from a JSON array of definitions.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let definitions: Vec<CardDefinition> =
            serde_json::from_str(json).map_err(|e| CatalogError::Parse(e.to_string()))?;

        let mut catalog = Self::new();
        for definition in definitions {
            catalog.try_register(definition)?;
        }
        Ok(catalog)
    }

    /// Register a card definition.
    ///
    /// Panics if the definition is rejected by [`CardCatalog::try_register`].
    /// Use for catalogs assembled in code, where a bad entry is a bug.
    pub fn register(&mut self, card: CardDefinition) {
        if let Err(err) = self.try_register(card) {
            panic!("{err}");
        }
    }

    /// Register a card definition, rejecting duplicates and dead monsters.
    pub fn try_register(&mut self, card: CardDefinition) -> Result<(), CatalogError> {
        if self.cards.contains_key(&card.id) {
            return Err(CatalogError::DuplicateId(card.id));
        }
        if let CardKind::Monster { health: 0, .. } = card.kind {
            return Err(CatalogError::Invalid {
                id: card.id,
                reason: "monster health must be positive".to_string(),
            });
        }
        self.cards.insert(card.id.clone(), Arc::new(card));
        Ok(())
    }

    /// Get a card definition by ID.
    #[must_use]
    pub fn get(&self, id: &CardId) -> Option<&Arc<CardDefinition>> {
        self.cards.get(id)
    }

    /// Check if a card ID is registered.
    #[must_use]
    pub fn contains(&self, id: &CardId) -> bool {
        self.cards.contains_key(id)
    }

    /// Get the number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all card definitions.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<CardDefinition>> {
        self.cards.values()
    }

    /// Find cards by type.
    pub fn find_by_type(&self, card_type: CardType) -> impl Iterator<Item = &Arc<CardDefinition>> {
        self.cards.values().filter(move |c| c.card_type() == card_type)
    }
}
