//! Configuration validation.

use std::collections::HashSet;

use super::GeneratorConfig;
use crate::error::{DdlError, Result};

/// Longest string length any supported dialect accepts for VARCHAR.
const MAX_STRING_LENGTH: u32 = 65_535;

/// Validate the configuration.
pub fn validate(config: &GeneratorConfig) -> Result<()> {
    if config.default_string_length == 0 {
        return Err(DdlError::Config(
            "default_string_length must be greater than 0".into(),
        ));
    }
    if config.default_string_length > MAX_STRING_LENGTH {
        return Err(DdlError::Config(format!(
            "default_string_length must be at most {}, got {}",
            MAX_STRING_LENGTH, config.default_string_length
        )));
    }

    for (i, keyword) in config.long_text_keywords.iter().enumerate() {
        if keyword.trim().is_empty() {
            return Err(DdlError::Config(format!(
                "long_text_keywords[{}] cannot be blank",
                i
            )));
        }
    }

    let mut seen = HashSet::new();
    for dialect in &config.long_text_dialects {
        if !seen.insert(dialect) {
            return Err(DdlError::Config(format!(
                "long_text_dialects lists '{}' more than once",
                dialect
            )));
        }
    }

    if config.skip_audit_columns {
        let audit = &config.audit_columns;
        for (field, name) in [
            ("id", &audit.id),
            ("create_by", &audit.create_by),
            ("update_by", &audit.update_by),
            ("create_time", &audit.create_time),
            ("update_time", &audit.update_time),
        ] {
            if name.trim().is_empty() {
                return Err(DdlError::Config(format!(
                    "audit_columns.{} cannot be blank when skip_audit_columns is set",
                    field
                )));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::DatabaseType;

    fn valid_config() -> GeneratorConfig {
        GeneratorConfig::default()
    }

    #[test]
    fn test_valid_config() {
        assert!(validate(&valid_config()).is_ok());
    }

    #[test]
    fn test_zero_string_length() {
        let mut config = valid_config();
        config.default_string_length = 0;
        let err = validate(&config).unwrap_err();
        assert!(err.to_string().contains("default_string_length"));
    }

    #[test]
    fn test_oversized_string_length() {
        let mut config = valid_config();
        config.default_string_length = 70_000;
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_blank_keyword() {
        let mut config = valid_config();
        config.long_text_keywords.push("  ".into());
        let err = validate(&config).unwrap_err();
        assert!(err.to_string().contains("long_text_keywords[5]"));
    }

    #[test]
    fn test_duplicate_long_text_dialect() {
        let mut config = valid_config();
        config.long_text_dialects = vec![DatabaseType::Postgresql, DatabaseType::Postgresql];
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_blank_audit_column_only_checked_when_skipping() {
        let mut config = valid_config();
        config.audit_columns.create_by = String::new();
        assert!(validate(&config).is_ok());

        config.skip_audit_columns = true;
        let err = validate(&config).unwrap_err();
        assert!(err.to_string().contains("audit_columns.create_by"));
    }
}
