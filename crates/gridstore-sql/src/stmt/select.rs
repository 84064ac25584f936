use super::Statement;

/// `SELECT * FROM "<table>"`.
///
/// The gateway materializes whole tables; there is no projection,
/// filter, or paging at this layer.
#[derive(Debug, Clone)]
pub struct Select {
    /// Name of the table
    pub table: String,
}

impl Statement {
    pub fn select_all(table: impl Into<String>) -> Self {
        Select {
            table: table.into(),
        }
        .into()
    }
}

impl From<Select> for Statement {
    fn from(value: Select) -> Self {
        Self::Select(value)
    }
}
