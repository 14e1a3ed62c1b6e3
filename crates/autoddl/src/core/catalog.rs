//! Strategy registry with explicit registration.
//!
//! The [`StrategyRegistry`] resolves a [`DdlStrategy`] by dialect. Strategies
//! come from an explicit registration table instead of runtime discovery:
//!
//! - **Explicit registration**: a builder takes `(dialect, factory)` pairs or
//!   ready-made instances, in a deterministic order
//! - **Built-in fallback**: a registry built with no registrations falls back
//!   to [`BUILTIN_STRATEGIES`], so there is always a usable dialect
//! - **Memoized lookups**: the strategy list is built once, and each resolved
//!   dialect is cached, so repeated lookups return the same instance
//!
//! Both the one-time list construction and the per-dialect cache are safe
//! under concurrent access.

use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use dashmap::DashMap;
use once_cell::sync::{Lazy, OnceCell};
use tracing::{debug, warn};

use super::database::DatabaseType;
use super::traits::DdlStrategy;
use crate::config::GeneratorConfig;
use crate::drivers::{StrategyFactory, BUILTIN_STRATEGIES};
use crate::error::{DdlError, Result};

enum Registration {
    Factory(DatabaseType, StrategyFactory),
    Instance(Arc<dyn DdlStrategy>),
}

/// Registry of DDL strategies keyed by dialect.
///
/// # Example
///
/// ```rust,ignore
/// let registry = StrategyRegistry::with_builtins(Arc::new(GeneratorConfig::default()));
/// let strategy = registry.get_strategy_by_name("mysql")?;
/// let sql = strategy.generate_create_table(&table);
/// ```
pub struct StrategyRegistry {
    config: Arc<GeneratorConfig>,
    registrations: Vec<Registration>,
    strategies: OnceCell<Vec<Arc<dyn DdlStrategy>>>,
    cache: DashMap<DatabaseType, Arc<dyn DdlStrategy>>,
}

static GLOBAL: Lazy<StrategyRegistry> =
    Lazy::new(|| StrategyRegistry::new(Arc::new(GeneratorConfig::default())));

impl StrategyRegistry {
    /// Registry that falls back to the built-in strategies.
    pub fn new(config: Arc<GeneratorConfig>) -> Self {
        Self::builder(config).build()
    }

    /// Registry with every built-in strategy registered explicitly.
    pub fn with_builtins(config: Arc<GeneratorConfig>) -> Self {
        let mut builder = Self::builder(config);
        for (dialect, factory) in BUILTIN_STRATEGIES {
            builder = builder.register(dialect, factory);
        }
        builder.build()
    }

    pub fn builder(config: Arc<GeneratorConfig>) -> StrategyRegistryBuilder {
        StrategyRegistryBuilder {
            config,
            registrations: Vec::new(),
        }
    }

    /// Process-wide registry using the default configuration.
    pub fn global() -> &'static StrategyRegistry {
        &GLOBAL
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Every available strategy, built on first use.
    pub fn strategies(&self) -> &[Arc<dyn DdlStrategy>] {
        self.strategies.get_or_init(|| {
            if self.registrations.is_empty() {
                warn!("No DDL strategies registered, falling back to built-ins");
                return BUILTIN_STRATEGIES
                    .iter()
                    .map(|(_, factory)| factory(Arc::clone(&self.config)))
                    .collect();
            }
            self.registrations
                .iter()
                .map(|registration| match registration {
                    Registration::Factory(dialect, factory) => {
                        debug!("Instantiating {} strategy", dialect);
                        factory(Arc::clone(&self.config))
                    }
                    Registration::Instance(strategy) => Arc::clone(strategy),
                })
                .collect()
        })
    }

    /// Resolve the strategy for a dialect.
    ///
    /// # Errors
    ///
    /// Returns [`DdlError::NoStrategyForDialect`] when nothing registered
    /// supports the dialect.
    pub fn get_strategy(&self, dialect: DatabaseType) -> Result<Arc<dyn DdlStrategy>> {
        if let Some(cached) = self.cache.get(&dialect) {
            return Ok(Arc::clone(cached.value()));
        }

        let found = self
            .strategies()
            .iter()
            .find(|s| s.supports(dialect))
            .cloned()
            .ok_or(DdlError::NoStrategyForDialect(dialect))?;

        debug!("Resolved DDL strategy for {}", dialect);
        let entry = self.cache.entry(dialect).or_insert(found);
        Ok(Arc::clone(entry.value()))
    }

    /// Resolve the strategy for a dialect name (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns [`DdlError::UnknownDialect`] for names that are not dialects,
    /// and [`DdlError::NoStrategyForDialect`] as for [`Self::get_strategy`].
    pub fn get_strategy_by_name(&self, name: &str) -> Result<Arc<dyn DdlStrategy>> {
        self.get_strategy(DatabaseType::from_name(name)?)
    }

    /// Dialects with an available strategy.
    pub fn supported_dialects(&self) -> BTreeSet<DatabaseType> {
        DatabaseType::ALL
            .into_iter()
            .filter(|d| self.strategies().iter().any(|s| s.supports(*d)))
            .collect()
    }

    /// Whether a dialect has an available strategy.
    pub fn supports(&self, dialect: DatabaseType) -> bool {
        self.strategies().iter().any(|s| s.supports(dialect))
    }
}

impl fmt::Debug for StrategyRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StrategyRegistry")
            .field("registrations", &self.registrations.len())
            .field("initialized", &self.strategies.get().is_some())
            .field("cached", &self.cache.len())
            .finish()
    }
}

/// Builder for [`StrategyRegistry`].
pub struct StrategyRegistryBuilder {
    config: Arc<GeneratorConfig>,
    registrations: Vec<Registration>,
}

impl StrategyRegistryBuilder {
    /// Register a factory for a dialect. Earlier registrations win lookups.
    pub fn register(mut self, dialect: DatabaseType, factory: StrategyFactory) -> Self {
        self.registrations.push(Registration::Factory(dialect, factory));
        self
    }

    /// Register a ready-made strategy.
    pub fn register_instance(mut self, strategy: Arc<dyn DdlStrategy>) -> Self {
        self.registrations.push(Registration::Instance(strategy));
        self
    }

    pub fn build(self) -> StrategyRegistry {
        StrategyRegistry {
            config: self.config,
            registrations: self.registrations,
            strategies: OnceCell::new(),
            cache: DashMap::new(),
        }
    }
}

/// Resolve a strategy by name from the global registry.
pub fn get_strategy(name: &str) -> Result<Arc<dyn DdlStrategy>> {
    StrategyRegistry::global().get_strategy_by_name(name)
}
