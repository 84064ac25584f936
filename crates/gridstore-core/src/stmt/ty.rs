/// Application-level value types.
///
/// This is how gridstore views a column in memory. The database
/// storage type is derived from it via
/// [`schema::Type::from_app`](crate::schema::Type::from_app).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Type {
    /// Boolean value
    Bool,

    /// Signed 64-bit integer
    I64,

    /// 64-bit floating point
    F64,

    /// Civil datetime without a time zone
    Timestamp,

    /// String value
    String,
}

impl Type {
    /// The narrowest type holding values of both types, if one exists.
    ///
    /// Integers widen to floats when the two are mixed; every other
    /// mix has no common type and the caller falls back to `String`.
    pub fn unify(self, other: Type) -> Option<Type> {
        match (self, other) {
            (a, b) if a == b => Some(a),
            (Type::I64, Type::F64) | (Type::F64, Type::I64) => Some(Type::F64),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unify_same() {
        assert_eq!(Type::I64.unify(Type::I64), Some(Type::I64));
        assert_eq!(Type::String.unify(Type::String), Some(Type::String));
    }

    #[test]
    fn unify_numeric_widens() {
        assert_eq!(Type::I64.unify(Type::F64), Some(Type::F64));
        assert_eq!(Type::F64.unify(Type::I64), Some(Type::F64));
    }

    #[test]
    fn unify_incompatible() {
        assert_eq!(Type::I64.unify(Type::String), None);
        assert_eq!(Type::Timestamp.unify(Type::Bool), None);
    }
}
