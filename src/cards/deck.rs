//! Deck lists.
//!
//! A deck list is the persisted form of a deck: an ordered sequence of
//! catalog ids, exchanged as a JSON array of strings. Size limits are a
//! deck-building policy; the battle engine accepts any list whose ids
//! resolve.

use serde::{Deserialize, Serialize};

use super::definition::CardId;
use super::registry::CardCatalog;

/// Fewest cards a constructed deck may hold.
pub const MIN_DECK_SIZE: usize = 20;

/// Most cards a constructed deck may hold.
pub const MAX_DECK_SIZE: usize = 30;

/// Why a deck list was rejected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DeckError {
    /// Not a JSON array of strings.
    Parse(String),
    /// An id doesn't resolve in the catalog.
    UnknownCard(CardId),
    /// Too few or too many cards.
    InvalidSize { len: usize },
}

impl std::fmt::Display for DeckError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeckError::Parse(err) => write!(f, "deck parse error: {err}"),
            DeckError::UnknownCard(id) => write!(f, "unknown card '{id}' in deck"),
            DeckError::InvalidSize { len } => write!(
                f,
                "deck has {len} cards, must have {MIN_DECK_SIZE}-{MAX_DECK_SIZE}"
            ),
        }
    }
}

impl std::error::Error for DeckError {}

/// Ordered list of catalog ids.
///
/// ```
/// use defend_the_fort::cards::DeckList;
///
/// let deck = DeckList::from_json(r#"["goblin_scout", "fireball"]"#).unwrap();
/// assert_eq!(deck.len(), 2);
/// assert_eq!(deck.to_json(), r#"["goblin_scout","fireball"]"#);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeckList {
    cards: Vec<CardId>,
}

impl DeckList {
    /// Create a deck list from ids.
    pub fn new(cards: impl IntoIterator<Item = CardId>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    /// Parse a JSON array of card id strings.
    pub fn from_json(json: &str) -> Result<Self, DeckError> {
        serde_json::from_str(json).map_err(|e| DeckError::Parse(e.to_string()))
    }

    /// Export as a JSON array of card id strings.
    #[must_use]
    pub fn to_json(&self) -> String {
        let ids: Vec<&str> = self.cards.iter().map(CardId::as_str).collect();
        // Serializing a list of strings cannot fail.
        serde_json::to_string(&ids).unwrap_or_default()
    }

    /// Check the deck-building policy: every id resolves and the size is
    /// within `MIN_DECK_SIZE..=MAX_DECK_SIZE`.
    pub fn validate(&self, catalog: &CardCatalog) -> Result<(), DeckError> {
        if let Some(unknown) = self.cards.iter().find(|id| !catalog.contains(id)) {
            return Err(DeckError::UnknownCard(unknown.clone()));
        }
        if !(MIN_DECK_SIZE..=MAX_DECK_SIZE).contains(&self.cards.len()) {
            return Err(DeckError::InvalidSize {
                len: self.cards.len(),
            });
        }
        Ok(())
    }

    /// Card ids in list order.
    pub fn iter(&self) -> impl Iterator<Item = &CardId> {
        self.cards.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl FromIterator<CardId> for DeckList {
    fn from_iter<I: IntoIterator<Item = CardId>>(iter: I) -> Self {
        Self::new(iter)
    }
}
