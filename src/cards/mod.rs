//! Card system: the immutable card model and catalog lookup.
//!
//! ## Key Types
//!
//! - `CardId`: Identifier for a logical card (one per printed card)
//! - `TypeCategory`: Closed set of card type categories
//! - `Card`: Static card data (name, energy, rarity, stats, image)
//! - `StatBlock` / `StatValue`: Power/rest values with a distinct
//!   "not applicable" state
//! - `CardCatalog`: Card lookup by id, plus `CatalogProfile`
//!
//! ## Immutability
//!
//! Cards never change once loaded into the catalog. The one-way stat
//! reset applied while a card is being *authored* and its type changes
//! lives in `rules::TypeRuleTable::change_category`.

pub mod card;
pub mod catalog;
pub mod stats;

pub use card::{Card, CardId, Energy, Rarity, TypeCategory};
pub use catalog::{CardCatalog, CatalogProfile};
pub use stats::{StatBlock, StatValue};
