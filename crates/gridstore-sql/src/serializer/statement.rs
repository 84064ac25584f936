use super::{Comma, Formatter, Ident, Params, ToSql};

use crate::stmt::{self, Statement};

impl ToSql for &Statement {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        match self {
            Statement::CreateTable(stmt) => stmt.to_sql(f),
            Statement::DropTable(stmt) => stmt.to_sql(f),
            Statement::Insert(stmt) => stmt.to_sql(f),
            Statement::Select(stmt) => stmt.to_sql(f),
            Statement::TableList(stmt) => stmt.to_sql(f),
        }
    }
}

impl ToSql for &stmt::CreateTable {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let name = Ident(&self.name);
        let if_not_exists = if self.if_not_exists {
            "IF NOT EXISTS "
        } else {
            ""
        };

        fmt!(f, "CREATE TABLE " if_not_exists name " (");

        for (index, column) in self.columns.iter().enumerate() {
            fmt!(f, "\n    " column);
            if index < self.columns.len() - 1 {
                fmt!(f, ",");
            }
        }

        fmt!(f, "\n)");
    }
}

impl ToSql for &stmt::ColumnDef {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let name = Ident(&self.name);
        let ty = &self.ty;

        fmt!(f, name " " ty)
    }
}

impl ToSql for &stmt::DropTable {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let name = Ident(&self.name);
        let if_exists = if self.if_exists { "IF EXISTS " } else { "" };

        fmt!(f, "DROP TABLE " if_exists name);
    }
}

impl ToSql for &stmt::Insert {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let table = Ident(&self.table);
        let columns = Comma(self.columns.iter().map(Ident));

        fmt!(f, "INSERT INTO " table " (" columns ") VALUES ");

        for (index, row) in self.rows.iter().enumerate() {
            if index > 0 {
                fmt!(f, ", ");
            }

            let values = Comma(row.iter());
            fmt!(f, "(" values ")");
        }
    }
}

impl ToSql for &stmt::Select {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let table = Ident(&self.table);

        fmt!(f, "SELECT * FROM " table);
    }
}

impl ToSql for &stmt::TableList {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let table_schema = stmt::Value::String(self.table_schema.clone());
        let placeholder = f.params.push(&table_schema);

        fmt!(
            f,
            "SELECT table_name FROM information_schema.tables WHERE table_schema = "
            placeholder
            " ORDER BY table_name"
        );
    }
}
