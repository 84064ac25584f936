use super::Type;
use crate::stmt;

/// A column of a database table.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    /// The name of the column in the database. Always a sanitized
    /// identifier.
    pub name: String,

    /// The column type, from gridstore's point of view.
    pub ty: stmt::Type,

    /// The database storage type of the column.
    pub storage_ty: Type,
}
