use super::Statement;

#[derive(Debug, Clone)]
pub struct DropTable {
    /// Name of the table
    pub name: String,

    /// Emit `IF EXISTS`, making the drop idempotent
    pub if_exists: bool,
}

impl Statement {
    pub fn drop_table(name: impl Into<String>) -> Self {
        DropTable {
            name: name.into(),
            if_exists: false,
        }
        .into()
    }

    pub fn drop_table_if_exists(name: impl Into<String>) -> Self {
        DropTable {
            name: name.into(),
            if_exists: true,
        }
        .into()
    }
}

impl From<DropTable> for Statement {
    fn from(value: DropTable) -> Self {
        Self::DropTable(value)
    }
}
