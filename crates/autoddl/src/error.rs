//! Error types for the DDL generation library.

use thiserror::Error;

use crate::core::DatabaseType;

/// Main error type for DDL generation.
#[derive(Error, Debug)]
pub enum DdlError {
    /// Configuration error (invalid YAML, out-of-range values, etc.)
    #[error("Configuration error: {0}")]
    Config(String),

    /// The dialect name does not match any known dialect
    #[error("Unknown dialect: '{name}'. Available: {available}")]
    UnknownDialect { name: String, available: String },

    /// The dialect is known but nothing is registered to render it
    #[error(
        "No DDL generation strategy found for dialect: {0}. \
         Register one with StrategyRegistry::builder().register(..) or use the built-in registry"
    )]
    NoStrategyForDialect(DatabaseType),

    /// Structurally invalid table, column, or auxiliary descriptor
    #[error("Invalid table definition: {0}")]
    InvalidTableDefinition(String),

    /// The dialect has no equivalent for the requested statement
    #[error("{feature} is not supported by {dialect}")]
    Unsupported {
        dialect: DatabaseType,
        feature: String,
    },

    /// Foreign keys form a cycle, so no creation order exists
    #[error("Circular dependency detected involving table: {0}")]
    CircularDependency(String),

    /// IO error (file operations)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML serialization/deserialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl DdlError {
    /// Create an UnknownDialect error listing every valid dialect name.
    pub fn unknown_dialect(name: impl Into<String>) -> Self {
        let available = DatabaseType::ALL
            .iter()
            .map(|d| d.name())
            .collect::<Vec<_>>()
            .join(", ");
        DdlError::UnknownDialect {
            name: name.into(),
            available,
        }
    }

    /// Create an Unsupported error
    pub fn unsupported(dialect: DatabaseType, feature: impl Into<String>) -> Self {
        DdlError::Unsupported {
            dialect,
            feature: feature.into(),
        }
    }

    /// Create an InvalidTableDefinition error
    pub fn invalid(message: impl Into<String>) -> Self {
        DdlError::InvalidTableDefinition(message.into())
    }

    /// Process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            DdlError::Config(_)
            | DdlError::InvalidTableDefinition(_)
            | DdlError::Yaml(_)
            | DdlError::Json(_) => 1,
            DdlError::UnknownDialect { .. } | DdlError::NoStrategyForDialect(_) => 2,
            DdlError::Unsupported { .. } | DdlError::CircularDependency(_) => 3,
            DdlError::Io(_) => 7,
        }
    }

    /// Format error with full details including error chain
    pub fn format_detailed(&self) -> String {
        let mut output = format!("Error: {}\n", self);

        let mut source = std::error::Error::source(self);
        let mut depth = 1;
        while let Some(err) = source {
            output.push_str(&format!("\nCaused by:\n  {}: {}", depth, err));
            source = err.source();
            depth += 1;
        }

        output
    }
}

/// Result type alias for DDL generation.
pub type Result<T> = std::result::Result<T, DdlError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_dialect_lists_valid_names() {
        let err = DdlError::unknown_dialect("unknown_db");
        let msg = err.to_string();
        assert!(msg.contains("unknown_db"));
        for dialect in DatabaseType::ALL {
            assert!(msg.contains(dialect.name()), "missing {}", dialect.name());
        }
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(DdlError::Config("x".into()).exit_code(), 1);
        assert_eq!(DdlError::unknown_dialect("x").exit_code(), 2);
        assert_eq!(
            DdlError::NoStrategyForDialect(DatabaseType::H2).exit_code(),
            2
        );
        assert_eq!(
            DdlError::unsupported(DatabaseType::Tdengine, "FOREIGN KEY").exit_code(),
            3
        );
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        assert_eq!(DdlError::from(io).exit_code(), 7);
    }

    #[test]
    fn test_format_detailed_includes_source() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "schema.yaml");
        let detailed = DdlError::from(io).format_detailed();
        assert!(detailed.starts_with("Error: IO error"));
    }

    #[test]
    fn test_unsupported_message() {
        let err = DdlError::unsupported(DatabaseType::Tdengine, "FOREIGN KEY constraints");
        assert_eq!(err.to_string(), "FOREIGN KEY constraints is not supported by tdengine");
    }
}
