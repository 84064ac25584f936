use super::{Formatter, Params, ToSql};

/// A double-quoted identifier. Embedded quotes are doubled, although
/// sanitized identifiers can never contain one.
pub(super) struct Ident<S>(pub(super) S);

impl<S: AsRef<str>> ToSql for Ident<S> {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        f.dst.push('"');
        for ch in self.0.as_ref().chars() {
            if ch == '"' {
                f.dst.push('"');
            }
            f.dst.push(ch);
        }
        f.dst.push('"');
    }
}
