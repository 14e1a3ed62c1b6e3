//! Core abstractions for dialect-agnostic DDL generation.
//!
//! - [`database`]: the closed set of supported dialects
//! - [`schema`]: table, column, and constraint descriptors
//! - [`identifier`]: identifier validation and quoting
//! - [`traits`]: the [`DdlStrategy`] each dialect implements
//! - [`catalog`]: the strategy registry
//!
//! # Architecture
//!
//! The core module defines the intermediate schema model and the strategy
//! seam. Dialect modules under `drivers/` lower the model into SQL text, so a
//! new dialect never touches core code.
//!
//! # Design Patterns
//!
//! - **Registry**: `StrategyRegistry` resolves and caches one strategy per dialect
//! - **Strategy**: `DdlStrategy` isolates per-dialect syntax
//! - **Template Method**: default trait methods build indexes, foreign keys,
//!   and junction tables from the required per-dialect pieces

pub mod catalog;
pub mod database;
pub mod identifier;
pub mod schema;
pub mod traits;

pub use catalog::{get_strategy, StrategyRegistry, StrategyRegistryBuilder};
pub use database::DatabaseType;
pub use schema::{
    ColumnDescriptor, ForeignKeyInfo, IndexDefinition, ManyToManyTable, SchemaDocument,
    TableDescriptor,
};
pub use traits::{junction_table, DdlStrategy};
