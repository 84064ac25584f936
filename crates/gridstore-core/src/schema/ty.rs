use std::fmt;

use crate::stmt;

/// Database-level storage types.
///
/// Gridstore has two type systems: [`stmt::Type`] is how a column is
/// viewed in memory, and `schema::Type` is the column type that
/// appears in `CREATE TABLE` statements. The mapping between the two
/// is [`Type::from_app`] and is the only place a storage type is ever
/// derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Type {
    /// 32-bit signed integer column
    Integer,

    /// 64-bit floating point column
    DoublePrecision,

    /// Civil datetime column without a time zone
    Timestamp,

    /// Unconstrained text column
    Text,
}

impl Type {
    /// Maps an application-level type to a storage type.
    ///
    /// Integer-valued columns map to `INTEGER`, floating-point to
    /// `DOUBLE PRECISION`, and temporal to `TIMESTAMP`. Everything
    /// else, booleans included, is stored as `TEXT`.
    pub fn from_app(ty: stmt::Type) -> Type {
        match ty {
            stmt::Type::I64 => Type::Integer,
            stmt::Type::F64 => Type::DoublePrecision,
            stmt::Type::Timestamp => Type::Timestamp,
            stmt::Type::Bool | stmt::Type::String => Type::Text,
        }
    }

    /// The SQL spelling of the type.
    pub fn as_sql(&self) -> &'static str {
        match self {
            Type::Integer => "INTEGER",
            Type::DoublePrecision => "DOUBLE PRECISION",
            Type::Timestamp => "TIMESTAMP",
            Type::Text => "TEXT",
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_sql())
    }
}
