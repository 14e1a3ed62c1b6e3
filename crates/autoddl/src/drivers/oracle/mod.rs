//! Oracle DDL.
//!
//! - [`OracleStrategy`]: DDL syntax strategy
//! - [`oracle_column_mapper`]: column type resolution; NUMBER for integers and
//!   booleans, CLOB past the VARCHAR2 limit

mod dialect;
mod types;

pub use dialect::OracleStrategy;
pub use types::oracle_column_mapper;
