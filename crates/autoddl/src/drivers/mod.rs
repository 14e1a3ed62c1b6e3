//! Per-dialect DDL strategies.
//!
//! Each dialect module provides a [`DdlStrategy`] implementation and the
//! column type mapper it renders with:
//!
//! - [`mysql`]: MySQL / MariaDB
//! - [`postgres`]: PostgreSQL
//! - [`oracle`]: Oracle 12c+
//! - [`dm`]: DM (Dameng)
//! - [`h2`]: H2
//! - [`tdengine`]: TDengine time-series tables
//! - [`common`]: layout helpers shared by the relational dialects
//!
//! # Adding New Dialects
//!
//! 1. Add a variant to [`DatabaseType`]
//! 2. Create a module under `drivers/` with a `types.rs` mapper and a
//!    `dialect.rs` strategy
//! 3. Give it a row in its own mapping table in `dialect::typemap`
//! 4. Add a factory to [`BUILTIN_STRATEGIES`]

use std::sync::Arc;

use crate::config::GeneratorConfig;
use crate::core::traits::DdlStrategy;
use crate::core::DatabaseType;

pub mod common;
pub mod dm;
pub mod h2;
pub mod mysql;
pub mod oracle;
pub mod postgres;
pub mod tdengine;

pub use dm::DmStrategy;
pub use h2::H2Strategy;
pub use mysql::MysqlStrategy;
pub use oracle::OracleStrategy;
pub use postgres::PostgresStrategy;
pub use tdengine::TdengineStrategy;

/// Builds a strategy for the given configuration.
pub type StrategyFactory = fn(Arc<GeneratorConfig>) -> Arc<dyn DdlStrategy>;

fn mysql_strategy(config: Arc<GeneratorConfig>) -> Arc<dyn DdlStrategy> {
    Arc::new(MysqlStrategy::new(config))
}

fn postgres_strategy(config: Arc<GeneratorConfig>) -> Arc<dyn DdlStrategy> {
    Arc::new(PostgresStrategy::new(config))
}

fn oracle_strategy(config: Arc<GeneratorConfig>) -> Arc<dyn DdlStrategy> {
    Arc::new(OracleStrategy::new(config))
}

fn dm_strategy(config: Arc<GeneratorConfig>) -> Arc<dyn DdlStrategy> {
    Arc::new(DmStrategy::new(config))
}

fn h2_strategy(config: Arc<GeneratorConfig>) -> Arc<dyn DdlStrategy> {
    Arc::new(H2Strategy::new(config))
}

fn tdengine_strategy(config: Arc<GeneratorConfig>) -> Arc<dyn DdlStrategy> {
    Arc::new(TdengineStrategy::new(config))
}

/// The built-in strategies, in [`DatabaseType::ALL`] order.
pub const BUILTIN_STRATEGIES: [(DatabaseType, StrategyFactory); 6] = [
    (DatabaseType::Mysql, mysql_strategy),
    (DatabaseType::Postgresql, postgres_strategy),
    (DatabaseType::Oracle, oracle_strategy),
    (DatabaseType::Dm, dm_strategy),
    (DatabaseType::H2, h2_strategy),
    (DatabaseType::Tdengine, tdengine_strategy),
];
