use std::path::Path;

use csv::{ReaderBuilder, WriterBuilder};

use crate::deck::Deck;
use crate::error::DeckError;

/// Reads a tab-separated deck export.
///
/// The first record names the columns. Ragged data rows are padded or
/// trimmed to the header width so the deck stays rectangular.
pub fn read_deck(path: &Path) -> Result<Deck, DeckError> {
    let mut reader = ReaderBuilder::new()
        .delimiter(b'\t')
        .flexible(true)
        .from_path(path)?;

    let columns: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let mut row: Vec<String> = record.iter().map(str::to_string).collect();
        row.resize(columns.len(), String::new());
        rows.push(row);
    }
    Ok(Deck { columns, rows })
}

/// Writes the deck back out as tab-separated values.
pub fn write_deck(path: &Path, deck: &Deck) -> Result<(), DeckError> {
    let mut writer = WriterBuilder::new().delimiter(b'\t').from_path(path)?;
    writer.write_record(&deck.columns)?;
    for row in &deck.rows {
        writer.write_record(row)?;
    }
    writer.flush()?;
    Ok(())
}
