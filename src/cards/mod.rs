//! Card system: definitions, instances, catalog, and deck lists.
//!
//! ## Key Types
//!
//! - `CardId`: Identifier for catalog entries
//! - `CardDefinition`: Static card data (cost, stats, effect tags)
//! - `CardInstance`: One physical copy moving between deck, hand and graveyard
//! - `CardCatalog`: Definition lookup, loaded once per process
//! - `DeckList`: Persisted deck as an ordered list of ids

pub mod abilities;
pub mod deck;
pub mod definition;
pub mod instance;
pub mod registry;
pub mod starter;

pub use abilities::{Abilities, Ability};
pub use deck::{DeckError, DeckList, MAX_DECK_SIZE, MIN_DECK_SIZE};
pub use definition::{CardDefinition, CardId, CardKind, CardType};
pub use instance::CardInstance;
pub use registry::{CardCatalog, CatalogError};
pub use starter::{standard_catalog, starter_deck};
