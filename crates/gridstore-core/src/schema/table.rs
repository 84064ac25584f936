use super::Column;

/// A database table.
///
/// Schemas are never migrated; a replace-mode save rebuilds the table
/// from scratch.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    /// Name of the table. Always a sanitized identifier.
    pub name: String,

    /// The table's columns
    pub columns: Vec<Column>,
}

impl Table {
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.name == name)
    }
}
