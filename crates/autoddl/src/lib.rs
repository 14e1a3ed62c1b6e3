//! # autoddl
//!
//! Dialect-pluggable DDL generation.
//!
//! A dialect-agnostic schema model (tables, columns, foreign keys, indexes,
//! many-to-many junction tables) is lowered into SQL text for:
//!
//! - **MySQL / MariaDB**
//! - **PostgreSQL**
//! - **Oracle** and **DM** (Dameng)
//! - **H2**
//! - **TDengine** time-series tables
//!
//! Column types are resolved by classifying the source type into a
//! [`TypeCategory`] and looking the category up in the dialect's
//! [`DialectMappingTable`], with per-dialect overrides on top.
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use autoddl::{ColumnDescriptor, GeneratorConfig, SchemaAssembler, StrategyRegistry, TableDescriptor};
//!
//! fn main() -> autoddl::Result<()> {
//!     let registry = StrategyRegistry::with_builtins(Arc::new(GeneratorConfig::default()));
//!     let strategy = registry.get_strategy_by_name("mysql")?;
//!
//!     let table = TableDescriptor::new("sys_user")
//!         .with_column(ColumnDescriptor::new("id", "Long").with_primary_key(true).with_auto_increment(true))
//!         .with_column(ColumnDescriptor::new("username", "String").with_length(50));
//!
//!     println!("{}", strategy.generate_create_table(&table));
//!     println!("{}", SchemaAssembler::new(strategy).generate_schema(&[table])?);
//!     Ok(())
//! }
//! ```

pub mod assembler;
pub mod config;
pub mod core;
pub mod dependency;
pub mod dialect;
pub mod drivers;
pub mod error;

// Re-exports for convenient access
pub use assembler::SchemaAssembler;
pub use config::{AuditColumns, GeneratorConfig, SchemaOptions};
pub use core::{
    get_strategy, ColumnDescriptor, DatabaseType, DdlStrategy, ForeignKeyInfo, IndexDefinition,
    ManyToManyTable, SchemaDocument, StrategyRegistry, TableDescriptor,
};
pub use dependency::DependencyResolver;
pub use dialect::{ColumnTypeMapper, DialectMappingTable, TypeCategory};
pub use error::{DdlError, Result};
