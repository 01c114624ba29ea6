use std::sync::LazyLock;

use regex::Regex;
use tango_config::ConvertConfig;
use tango_core::Lexicon;

use crate::deck::Deck;
use crate::error::DeckError;

/// Ordinal column added at the far left of the output deck.
pub const INDEX_COLUMN: &str = "Index";
/// Receives each row's pre-conversion definition.
pub const ORIGINAL_DEF_COLUMN: &str = "OriginalDef";

/// Rows whose notes mention this marker are example sentences and keep
/// their definition untouched.
const SENTENCE_MARKER: &str = "sentence";

/// Decoration stripped from the word field before lookup: alternatives
/// before a `・` separator, bracketed and parenthesized spans, a comma
/// and everything before it, angle-bracket markup, spaces, the
/// ideographic full stop, and embedded newlines.
static EXTRANEOUS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^.+・|\[.+?\]|.+,| |<.+?>|。|\n|\(.+?\)").unwrap());

/// Counters describing one deck resolution pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ResolveStats {
    pub rows: usize,
    pub glossed: usize,
    pub misses: usize,
    pub sentences: usize,
}

/// Resolves every row of the deck against the lexicon, in place.
///
/// Adds the ordinal and original-definition columns, cleans and
/// normalizes each word field, and overwrites the definition field
/// with the lexicon gloss, or with an empty string when the word stays
/// unknown after normalization. Rows flagged as example sentences keep
/// their definition.
pub fn resolve_deck(
    deck: &mut Deck,
    lexicon: &Lexicon,
    config: &ConvertConfig,
) -> Result<ResolveStats, DeckError> {
    deck.insert_column(0, INDEX_COLUMN);
    deck.insert_column(1, ORIGINAL_DEF_COLUMN);

    let word_index = require_column(deck, &config.vocab_field)?;
    let definition_index = require_column(deck, &config.definitions_field)?;
    let notes_index = require_column(deck, &config.notes_field)?;

    let total = deck.len();
    let progress_step = total / 10;
    let mut stats = ResolveStats {
        rows: total,
        ..ResolveStats::default()
    };

    for (ordinal, row) in deck.rows.iter_mut().enumerate() {
        row[0] = ordinal.to_string();

        let cleaned = EXTRANEOUS.replace_all(&row[word_index], "").into_owned();
        let word = lexicon.normalize(&cleaned);
        row[word_index] = word.to_string();
        row[1] = row[definition_index].clone();

        if row[notes_index].contains(SENTENCE_MARKER) {
            stats.sentences += 1;
        } else {
            match lexicon.get(&row[word_index]) {
                Some(definition) => {
                    row[definition_index] = definition.to_string();
                    stats.glossed += 1;
                }
                None => {
                    row[definition_index] = String::new();
                    stats.misses += 1;
                }
            }
        }

        if progress_step > 0 && ordinal > 0 && ordinal % progress_step == 0 {
            tracing::info!("Resolved {}/{} rows", ordinal, total);
        }
    }

    Ok(stats)
}

fn require_column(deck: &Deck, name: &str) -> Result<usize, DeckError> {
    deck.column_index(name)
        .ok_or_else(|| DeckError::MissingColumn(name.to_string()))
}
