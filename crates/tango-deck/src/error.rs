#[derive(Debug, thiserror::Error)]
pub enum DeckError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Deck file error: {0}")]
    File(#[from] csv::Error),

    #[error("Missing column: {0}")]
    MissingColumn(String),
}
