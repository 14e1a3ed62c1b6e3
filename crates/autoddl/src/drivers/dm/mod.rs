//! DM (Dameng) DDL.

mod dialect;
mod types;

pub use dialect::DmStrategy;
pub use types::dm_column_mapper;
