//! Identifier sanitization.
//!
//! Table and column identifiers reaching the persistence layer are
//! restricted to lowercase ASCII alphanumerics and underscores.

/// Normalizes an arbitrary label into a safe relational identifier.
///
/// Lowercases, maps every whitespace character to an underscore,
/// drops every other character that is not an ASCII alphanumeric or
/// underscore, then trims the trailing underscores left behind by
/// stripped suffixes. Total over any input and idempotent. The empty
/// string maps to itself; callers must reject empty identifiers.
pub fn sanitize(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());

    for ch in raw.chars() {
        if ch.is_whitespace() {
            out.push('_');
        } else if ch.is_ascii_alphanumeric() || ch == '_' {
            out.push(ch.to_ascii_lowercase());
        }
    }

    let len = out.trim_end_matches('_').len();
    out.truncate(len);
    out
}
