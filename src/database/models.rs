//! Exercise Row Model
//!
//! Rows are consumed positionally: the column layout of the exercise table
//! is a contract with the storage collaborator and must not be renumbered.

/// Column index of the category field.
pub const COL_CATEGORY: usize = 0;
/// Column index of the serialized image-filename list.
pub const COL_IMAGES: usize = 4;
/// Column index of the serialized instruction list.
pub const COL_INSTRUCTIONS: usize = 5;
/// Column index of the exercise name.
pub const COL_NAME: usize = 8;

/// One raw exercise row, column values in storage order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExerciseRow {
    columns: Vec<Option<String>>,
}

impl ExerciseRow {
    pub fn new(columns: Vec<Option<String>>) -> Self {
        Self { columns }
    }

    pub fn category(&self) -> &str {
        self.text(COL_CATEGORY).unwrap_or("")
    }

    pub fn name(&self) -> &str {
        self.text(COL_NAME).unwrap_or("")
    }

    /// Serialized image-filename list, if present.
    pub fn images_raw(&self) -> Option<&str> {
        self.text(COL_IMAGES)
    }

    /// Serialized instruction list, if present.
    pub fn instructions_raw(&self) -> Option<&str> {
        self.text(COL_INSTRUCTIONS)
    }

    fn text(&self, index: usize) -> Option<&str> {
        self.columns.get(index).and_then(|c| c.as_deref())
    }
}
