use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use tango_core::{Lexicon, definition_text};

use crate::term_bank::{TermRecord, strip_sense_index};

/// Shard files of a dictionary source, e.g. `term_bank_3.json`.
static TERM_BANK_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^term_bank_(\d+)\.json$").unwrap());

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error in {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
}

/// Counters describing one source load.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LoadStats {
    pub banks: usize,
    pub records: usize,
    pub added: usize,
}

/// Loads every term bank of one dictionary source into the lexicon.
///
/// Banks are processed in ascending numeric order, so `term_bank_2`
/// precedes `term_bank_10`. Existing lexicon entries are never
/// replaced, which makes the caller's source order the priority order.
/// A missing directory or an unparsable bank aborts the load.
pub fn load_directory(source_dir: &Path, lexicon: &mut Lexicon) -> Result<LoadStats, LoadError> {
    let mut banks: Vec<(u64, PathBuf)> = Vec::new();
    for entry in fs::read_dir(source_dir)? {
        let entry = entry?;
        let name = entry.file_name();
        let Some(name) = name.to_str() else { continue };
        if let Some(captures) = TERM_BANK_NAME.captures(name) {
            if let Ok(index) = captures[1].parse::<u64>() {
                banks.push((index, entry.path()));
            }
        }
    }
    banks.sort();

    let mut stats = LoadStats::default();
    for (_, path) in &banks {
        tracing::info!("Loading term bank: {}", path.display());
        let raw = fs::read_to_string(path)?;
        let records: Vec<TermRecord> =
            serde_json::from_str(&raw).map_err(|source| LoadError::Parse {
                path: path.display().to_string(),
                source,
            })?;
        stats.banks += 1;
        stats.records += records.len();
        for record in &records {
            stats.added += merge_record(record, lexicon);
        }
    }
    Ok(stats)
}

/// Adds one record's definition under its headword and, independently,
/// under its reading. Returns how many new entries that produced.
fn merge_record(record: &TermRecord, lexicon: &mut Lexicon) -> usize {
    let headword = strip_sense_index(&record.headword);
    let reading = record
        .reading
        .as_deref()
        .map(strip_sense_index)
        .filter(|reading| !reading.is_empty());

    let wants_headword = !lexicon.contains(headword);
    let wants_reading = reading.is_some_and(|reading| !lexicon.contains(reading));
    if !wants_headword && !wants_reading {
        return 0;
    }

    let text = record
        .definition_tree()
        .map(definition_text)
        .unwrap_or_default();

    let mut added = 0;
    if wants_headword && lexicon.insert_if_absent(headword.to_string(), text.clone()) {
        added += 1;
    }
    if let Some(reading) = reading {
        if lexicon.insert_if_absent(reading.to_string(), text) {
            added += 1;
        }
    }
    added
}
