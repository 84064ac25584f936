use gridstore_core::schema;

#[derive(Debug, Clone)]
pub struct ColumnDef {
    pub name: String,
    pub ty: schema::Type,
}

impl ColumnDef {
    pub(crate) fn from_schema(column: &schema::Column) -> ColumnDef {
        ColumnDef {
            name: column.name.clone(),
            ty: column.storage_ty,
        }
    }
}
