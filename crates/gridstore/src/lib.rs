mod connect;
pub use connect::Connector;

mod gateway;
pub use gateway::{Gateway, SaveMode};

pub mod ingest;

mod row;

mod value;
pub(crate) use value::PgValue;

pub use gridstore_core::{frame, ident, schema, stmt, Error, Frame, Result};
