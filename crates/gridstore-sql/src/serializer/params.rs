use super::{Formatter, ToSql};

use gridstore_core::stmt;

/// A sink for bound statement parameters.
pub trait Params {
    fn push(&mut self, param: &stmt::Value) -> Placeholder;
}

/// A 1-based `$n` parameter reference.
pub struct Placeholder(pub usize);

impl Params for Vec<stmt::Value> {
    fn push(&mut self, value: &stmt::Value) -> Placeholder {
        self.push(value.clone());
        Placeholder(self.len())
    }
}

impl ToSql for Placeholder {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        use std::fmt::Write;

        write!(&mut f.dst, "${}", self.0).unwrap();
    }
}
