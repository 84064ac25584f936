#[macro_use]
mod fmt;
use fmt::ToSql;

mod delim;
use delim::Comma;

mod ident;
use ident::Ident;

mod params;
pub use params::{Params, Placeholder};

// Fragment serializers
mod statement;
mod ty;
mod value;

use crate::stmt::Statement;

/// Serialize a statement to parameter-bound PostgreSQL text.
///
/// Values never appear in the generated SQL; every one is pushed into
/// the supplied [`Params`] sink and referenced by a `$n` placeholder.
#[derive(Debug)]
pub struct Serializer {
    _private: (),
}

struct Formatter<'a, T> {
    /// Where to write the serialized SQL
    dst: &'a mut String,

    /// Where to store parameters
    params: &'a mut T,
}

impl Serializer {
    pub fn postgresql() -> Self {
        Self { _private: () }
    }

    pub fn serialize(&self, stmt: &Statement, params: &mut impl Params) -> String {
        let mut ret = String::new();

        let mut fmt = Formatter {
            dst: &mut ret,
            params,
        };

        stmt.to_sql(&mut fmt);

        ret.push(';');
        ret
    }
}
