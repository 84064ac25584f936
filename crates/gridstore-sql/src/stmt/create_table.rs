use super::{ColumnDef, Statement};

use gridstore_core::schema::Table;

#[derive(Debug, Clone)]
pub struct CreateTable {
    /// Name of the table
    pub name: String,

    /// Column definitions
    pub columns: Vec<ColumnDef>,

    /// Emit `IF NOT EXISTS`; used by append-mode saves
    pub if_not_exists: bool,
}

impl Statement {
    pub fn create_table(table: &Table) -> Self {
        CreateTable {
            name: table.name.clone(),
            columns: table.columns.iter().map(ColumnDef::from_schema).collect(),
            if_not_exists: false,
        }
        .into()
    }

    pub fn create_table_if_not_exists(table: &Table) -> Self {
        match Self::create_table(table) {
            Self::CreateTable(stmt) => CreateTable {
                if_not_exists: true,
                ..stmt
            }
            .into(),
            _ => unreachable!(),
        }
    }
}

impl From<CreateTable> for Statement {
    fn from(value: CreateTable) -> Self {
        Self::CreateTable(value)
    }
}
