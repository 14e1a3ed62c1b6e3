//! TDengine time-series DDL.
//!
//! - [`TdengineStrategy`]: DDL syntax strategy, including super tables
//! - [`tdengine_column_mapper`]: column type resolution (NCHAR strings,
//!   TIMESTAMP for every temporal type)

mod dialect;
mod types;

pub use dialect::TdengineStrategy;
pub use types::tdengine_column_mapper;
