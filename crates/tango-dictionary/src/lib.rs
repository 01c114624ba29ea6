//! Term-bank dictionary sources: shard discovery, record parsing, and
//! first-wins merging into the shared lexicon.

pub mod loader;
pub mod term_bank;

pub use loader::{LoadError, LoadStats, load_directory};
pub use term_bank::TermRecord;
