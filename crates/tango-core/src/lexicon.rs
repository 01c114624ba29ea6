use std::collections::HashMap;
use std::collections::hash_map::Entry;

/// Inflectional and decorative endings tried against unknown words,
/// in priority order. The first ending whose removal leaves a known
/// headword wins.
const ENDINGS: [&str; 6] = ["な", "だ", "と", "に", "した", "よう"];

/// Merged headword-to-definition table built from every configured
/// dictionary source.
///
/// Insertion is first-wins: once a headword is present, later sources
/// cannot replace it. Build it once, then treat it as read-only.
#[derive(Debug, Default)]
pub struct Lexicon {
    entries: HashMap<String, String>,
}

impl Lexicon {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, headword: &str) -> bool {
        self.entries.contains_key(headword)
    }

    pub fn get(&self, headword: &str) -> Option<&str> {
        self.entries.get(headword).map(String::as_str)
    }

    /// Inserts a definition unless the headword is already taken.
    /// Returns whether the entry was added.
    pub fn insert_if_absent(&mut self, headword: String, definition: String) -> bool {
        match self.entries.entry(headword) {
            Entry::Vacant(slot) => {
                slot.insert(definition);
                true
            }
            Entry::Occupied(_) => false,
        }
    }

    /// Maps a surface word onto a known headword by stripping endings.
    ///
    /// An exact hit is returned as-is. Otherwise each ending is tried
    /// in order and the first stem found in the table wins. Words that
    /// never match come back unchanged; callers treat those as misses.
    pub fn normalize<'a>(&self, word: &'a str) -> &'a str {
        if self.contains(word) {
            return word;
        }
        for ending in ENDINGS {
            if let Some(stem) = word.strip_suffix(ending) {
                if self.contains(stem) {
                    return stem;
                }
            }
        }
        word
    }
}
