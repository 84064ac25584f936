use super::{Formatter, Params, ToSql};

use gridstore_core::schema;

impl ToSql for &schema::Type {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        fmt!(f, self.as_sql());
    }
}
