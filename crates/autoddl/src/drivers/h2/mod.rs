//! H2 DDL, mostly for embedded and test databases.

mod dialect;
mod types;

pub use dialect::H2Strategy;
pub use types::h2_column_mapper;
