use std::fmt;

/// Returns early with an ad hoc [`Error`] built from a format string.
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::Error::from_args(format_args!($($arg)*)))
    };
}

/// Creates an ad hoc [`Error`] from a format string.
#[macro_export]
macro_rules! err {
    ($($arg:tt)*) => {
        $crate::Error::from_args(format_args!($($arg)*))
    };
}

/// An error that can occur in gridstore.
///
/// Every failure is categorized at construction: connection failures
/// (store unreachable or credentials rejected), query failures (the
/// store rejected a statement), parse failures (unreadable input
/// file), and schema failures (a frame cannot be expressed as a valid
/// table). Callers report the error at the operation boundary; no
/// failure terminates the process.
pub struct Error {
    kind: ErrorKind,
}

#[derive(Debug)]
enum ErrorKind {
    Connection(anyhow::Error),
    Query(anyhow::Error),
    Parse(anyhow::Error),
    Schema(String),
    Adhoc(String),
}

impl Error {
    /// The store was unreachable or rejected the credentials.
    pub fn connection(err: impl Into<anyhow::Error>) -> Error {
        ErrorKind::Connection(err.into()).into()
    }

    /// The store rejected a statement.
    pub fn query(err: impl Into<anyhow::Error>) -> Error {
        ErrorKind::Query(err.into()).into()
    }

    /// An input file could not be read or parsed.
    pub fn parse(err: impl Into<anyhow::Error>) -> Error {
        ErrorKind::Parse(err.into()).into()
    }

    /// A frame cannot be expressed as a valid table schema.
    pub fn schema(msg: impl Into<String>) -> Error {
        ErrorKind::Schema(msg.into()).into()
    }

    #[doc(hidden)]
    pub fn from_args(args: fmt::Arguments<'_>) -> Error {
        ErrorKind::Adhoc(args.to_string()).into()
    }

    pub fn is_connection(&self) -> bool {
        matches!(self.kind, ErrorKind::Connection(_))
    }

    pub fn is_query(&self) -> bool {
        matches!(self.kind, ErrorKind::Query(_))
    }

    pub fn is_parse(&self) -> bool {
        matches!(self.kind, ErrorKind::Parse(_))
    }

    pub fn is_schema(&self) -> bool {
        matches!(self.kind, ErrorKind::Schema(_))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ErrorKind::Connection(err) => write!(f, "failed to connect to the database: {err}"),
            ErrorKind::Query(err) => write!(f, "query failed: {err}"),
            ErrorKind::Parse(err) => write!(f, "failed to parse input: {err}"),
            ErrorKind::Schema(msg) => write!(f, "invalid schema: {msg}"),
            ErrorKind::Adhoc(msg) => f.write_str(msg),
        }
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.debug_struct("Error").field("kind", &self.kind).finish()
        } else {
            fmt::Display::fmt(self, f)
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ErrorKind::Connection(err) | ErrorKind::Query(err) | ErrorKind::Parse(err) => {
                Some(err.as_ref())
            }
            _ => None,
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error { kind }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connection_display() {
        let err = Error::connection(anyhow::anyhow!("refused"));
        assert_eq!(err.to_string(), "failed to connect to the database: refused");
        assert!(err.is_connection());
        assert!(!err.is_query());
    }

    #[test]
    fn query_display() {
        let err = Error::query(anyhow::anyhow!("syntax error"));
        assert_eq!(err.to_string(), "query failed: syntax error");
        assert!(err.is_query());
    }

    #[test]
    fn parse_display() {
        let err = Error::parse(anyhow::anyhow!("bad row"));
        assert_eq!(err.to_string(), "failed to parse input: bad row");
        assert!(err.is_parse());
    }

    #[test]
    fn schema_display() {
        let err = Error::schema("duplicate column");
        assert_eq!(err.to_string(), "invalid schema: duplicate column");
        assert!(err.is_schema());
    }

    #[test]
    fn err_macro() {
        let err = err!("value {} out of range", 42);
        assert_eq!(err.to_string(), "value 42 out of range");
    }

    #[test]
    fn source_chain() {
        use std::error::Error as _;

        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = Error::parse(io);
        assert!(err.source().is_some());
        assert!(Error::schema("x").source().is_none());
    }
}
