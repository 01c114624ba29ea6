use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_vocab_field() -> String {
    "VocabKanji".to_string()
}

fn default_definitions_field() -> String {
    "VocabDef".to_string()
}

fn default_notes_field() -> String {
    "Notes".to_string()
}

/// Settings for one deck conversion run.
#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ConvertConfig {
    /// Deck file to convert
    pub deck: PathBuf,
    /// Where to write the converted deck; derived from the input if unset
    pub output: Option<PathBuf>,
    /// Column holding the surface word
    pub vocab_field: String,
    /// Column holding and receiving the definition
    pub definitions_field: String,
    pub notes_field: String,
    /// Dictionary directories in priority order
    pub dictionaries: Vec<PathBuf>,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            deck: PathBuf::new(),
            output: None,
            vocab_field: default_vocab_field(),
            definitions_field: default_definitions_field(),
            notes_field: default_notes_field(),
            dictionaries: vec![],
        }
    }
}

impl ConvertConfig {
    pub fn new() -> Self {
        let vocab_field = env::var("TANGO_VOCAB_FIELD").unwrap_or_else(|_| default_vocab_field());
        let definitions_field =
            env::var("TANGO_DEFINITIONS_FIELD").unwrap_or_else(|_| default_definitions_field());
        let notes_field = env::var("TANGO_NOTES_FIELD").unwrap_or_else(|_| default_notes_field());

        ConvertConfig {
            deck: PathBuf::new(),
            output: None,
            vocab_field,
            definitions_field,
            notes_field,
            dictionaries: vec![],
        }
    }

    /// Output path for the converted deck.
    pub fn output_path(&self) -> PathBuf {
        match &self.output {
            Some(path) => path.clone(),
            None => self.deck.with_extension("mono.tsv"),
        }
    }
}
