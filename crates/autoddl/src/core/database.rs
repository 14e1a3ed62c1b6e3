//! Dialect identifiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{DdlError, Result};

/// A SQL database product with its own DDL syntax and type vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseType {
    Mysql,
    Postgresql,
    Oracle,
    Dm,
    H2,
    Tdengine,
}

impl DatabaseType {
    /// Every dialect, in registration order.
    pub const ALL: [DatabaseType; 6] = [
        DatabaseType::Mysql,
        DatabaseType::Postgresql,
        DatabaseType::Oracle,
        DatabaseType::Dm,
        DatabaseType::H2,
        DatabaseType::Tdengine,
    ];

    /// Canonical lowercase name.
    pub fn name(&self) -> &'static str {
        match self {
            DatabaseType::Mysql => "mysql",
            DatabaseType::Postgresql => "postgresql",
            DatabaseType::Oracle => "oracle",
            DatabaseType::Dm => "dm",
            DatabaseType::H2 => "h2",
            DatabaseType::Tdengine => "tdengine",
        }
    }

    /// Resolve a dialect from a user-supplied name (case-insensitive).
    ///
    /// Accepts the canonical names plus a few common aliases
    /// (`postgres`, `pg`, `dameng`, `taos`, `mariadb`).
    pub fn from_name(name: &str) -> Result<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "mysql" | "mariadb" => Ok(DatabaseType::Mysql),
            "postgresql" | "postgres" | "pg" => Ok(DatabaseType::Postgresql),
            "oracle" => Ok(DatabaseType::Oracle),
            "dm" | "dameng" => Ok(DatabaseType::Dm),
            "h2" => Ok(DatabaseType::H2),
            "tdengine" | "taos" => Ok(DatabaseType::Tdengine),
            _ => Err(DdlError::unknown_dialect(name)),
        }
    }

    /// Whether the dialect enforces relational constraints (keys, nullability).
    pub fn is_relational(&self) -> bool {
        !matches!(self, DatabaseType::Tdengine)
    }
}

impl fmt::Display for DatabaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DatabaseType {
    type Err = DdlError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s)
    }
}
