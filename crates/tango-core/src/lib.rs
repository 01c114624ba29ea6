//! Definition resolution core: dictionary content flattening, definition
//! cleanup, and the merged headword lexicon with ending-stripping lookup.

pub mod content;
pub mod extract;
pub mod lexicon;

pub use content::ContentNode;
pub use extract::definition_text;
pub use lexicon::Lexicon;
