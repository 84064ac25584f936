use super::Statement;

/// Lists the table names of one schema via `information_schema`,
/// alphabetically sorted.
#[derive(Debug, Clone)]
pub struct TableList {
    /// The schema to list, e.g. `public`
    pub table_schema: String,
}

impl Statement {
    pub fn table_list(table_schema: impl Into<String>) -> Self {
        TableList {
            table_schema: table_schema.into(),
        }
        .into()
    }
}

impl From<TableList> for Statement {
    fn from(value: TableList) -> Self {
        Self::TableList(value)
    }
}
