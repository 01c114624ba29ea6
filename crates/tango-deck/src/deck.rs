/// A deck held in memory: named columns and row-major cells.
///
/// Every row has exactly one cell per column; the TSV reader pads or
/// trims ragged input to keep it that way.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Deck {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Deck {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of a named column, first match wins.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }

    /// Inserts an empty column, shifting later columns right.
    pub fn insert_column(&mut self, index: usize, name: &str) {
        self.columns.insert(index, name.to_string());
        for row in &mut self.rows {
            row.insert(index, String::new());
        }
    }
}
