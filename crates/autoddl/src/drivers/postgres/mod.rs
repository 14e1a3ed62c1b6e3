//! PostgreSQL DDL.
//!
//! - [`PostgresStrategy`]: DDL syntax strategy
//! - [`postgres_column_mapper`]: column type resolution with the native
//!   UUID, JSONB, BYTEA, INTERVAL, and array types

mod dialect;
mod types;

pub use dialect::PostgresStrategy;
pub use types::postgres_column_mapper;
