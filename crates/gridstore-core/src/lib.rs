mod error;
pub use error::Error;

pub mod frame;
pub use frame::Frame;

pub mod ident;

pub mod schema;

pub mod stmt;

/// A Result type alias that uses gridstore's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
