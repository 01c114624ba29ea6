//! Deck container and resolution: TSV import/export and the row-by-row
//! definition rewrite against the lexicon.

pub mod deck;
pub mod error;
pub mod resolver;
pub mod tsv;

pub use deck::Deck;
pub use error::DeckError;
pub use resolver::{INDEX_COLUMN, ORIGINAL_DEF_COLUMN, ResolveStats, resolve_deck};
pub use tsv::{read_deck, write_deck};
