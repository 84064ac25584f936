mod column_def;
pub use column_def::ColumnDef;

mod create_table;
pub use create_table::CreateTable;

mod drop_table;
pub use drop_table::DropTable;

mod insert;
pub use insert::Insert;

mod select;
pub use select::Select;

mod table_list;
pub use table_list::TableList;

pub use gridstore_core::stmt::*;

#[derive(Debug, Clone)]
pub enum Statement {
    CreateTable(CreateTable),
    DropTable(DropTable),
    Insert(Insert),
    Select(Select),
    TableList(TableList),
}
