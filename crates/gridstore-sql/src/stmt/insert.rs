use super::Statement;

use gridstore_core::stmt::Value;

/// A multi-row `INSERT INTO ... VALUES` statement.
///
/// Every value is serialized as a bound parameter, never as a spliced
/// literal.
#[derive(Debug, Clone)]
pub struct Insert {
    /// Name of the target table
    pub table: String,

    /// Target column names, in row order
    pub columns: Vec<String>,

    /// The rows to insert; each row has one value per column
    pub rows: Vec<Vec<Value>>,
}

impl Insert {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

impl Statement {
    pub fn insert(
        table: impl Into<String>,
        columns: Vec<String>,
        rows: Vec<Vec<Value>>,
    ) -> Self {
        Insert {
            table: table.into(),
            columns,
            rows,
        }
        .into()
    }
}

impl From<Insert> for Statement {
    fn from(value: Insert) -> Self {
        Self::Insert(value)
    }
}
