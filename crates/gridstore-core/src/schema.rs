mod column;
pub use column::Column;

mod table;
pub use table::Table;

mod ty;
pub use ty::Type;
