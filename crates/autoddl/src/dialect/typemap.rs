//! Per-dialect mapping from [`TypeCategory`] to a SQL type token.
//!
//! Each dialect owns one [`DialectMappingTable`] with an entry for every
//! category, so the mapping is total by construction. An entry is a base
//! token plus a suffix policy; the suffix comes from the column when it
//! declares a length or precision, otherwise from the policy default.

use crate::config::GeneratorConfig;
use crate::core::schema::ColumnDescriptor;
use crate::core::DatabaseType;

use super::category::TypeCategory;

/// How the length/precision suffix of a type is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Suffix {
    /// Never a suffix (`TEXT`, `DATE`).
    None,
    /// `(length)` from the column, else the default if any.
    Length(Option<u32>),
    /// `(precision,scale)` or `(precision)` from the column, else the default.
    Precision(Option<(u32, u32)>),
    /// Always this literal suffix (`NUMBER(19)`).
    Fixed(&'static str),
}

/// Base token and suffix policy for one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeEntry {
    pub base: &'static str,
    pub suffix: Suffix,
}

const fn entry(base: &'static str, suffix: Suffix) -> TypeEntry {
    TypeEntry { base, suffix }
}

const DECIMAL_DEFAULT: Suffix = Suffix::Precision(Some((19, 2)));

impl TypeEntry {
    /// Render the SQL type for a column.
    pub fn render(&self, column: &ColumnDescriptor) -> String {
        let suffix = match self.suffix {
            Suffix::None => String::new(),
            Suffix::Fixed(s) => s.to_string(),
            Suffix::Length(default) => column
                .length
                .or(default)
                .map(|len| format!("({})", len))
                .unwrap_or_default(),
            Suffix::Precision(default) => match (column.precision, column.scale) {
                (Some(p), Some(s)) => format!("({},{})", p, s),
                (Some(p), None) => format!("({})", p),
                (None, _) => default
                    .map(|(p, s)| format!("({},{})", p, s))
                    .unwrap_or_default(),
            },
        };
        format!("{}{}", self.base, suffix)
    }
}

/// Total function from [`TypeCategory`] to SQL type for one dialect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialectMappingTable {
    dialect: DatabaseType,
    entries: [TypeEntry; 11],
}

impl DialectMappingTable {
    /// Build the table for a dialect. The configured default string length
    /// is the STRING suffix default.
    pub fn for_dialect(dialect: DatabaseType, config: &GeneratorConfig) -> Self {
        let len = Suffix::Length(Some(config.default_string_length));
        let one = Suffix::Length(Some(1));

        // Order matches TypeCategory::ALL.
        let entries = match dialect {
            DatabaseType::Mysql => [
                entry("TEXT", Suffix::None),
                entry("VARCHAR", len),
                entry("CHAR", one),
                entry("DATETIME", Suffix::None),
                entry("DATE", Suffix::None),
                entry("TIME", Suffix::None),
                entry("INT", Suffix::None),
                entry("DOUBLE", Suffix::None),
                entry("DECIMAL", DECIMAL_DEFAULT),
                entry("BIGINT", Suffix::None),
                entry("TINYINT", Suffix::Fixed("(1)")),
            ],
            DatabaseType::Postgresql => [
                entry("TEXT", Suffix::None),
                entry("VARCHAR", len),
                entry("CHAR", one),
                entry("TIMESTAMP", Suffix::None),
                entry("DATE", Suffix::None),
                entry("TIME", Suffix::None),
                entry("INTEGER", Suffix::None),
                entry("DOUBLE PRECISION", Suffix::None),
                entry("NUMERIC", DECIMAL_DEFAULT),
                entry("BIGINT", Suffix::None),
                entry("BOOLEAN", Suffix::None),
            ],
            DatabaseType::Oracle => [
                entry("CLOB", Suffix::None),
                entry("VARCHAR2", len),
                entry("CHAR", one),
                entry("TIMESTAMP", Suffix::None),
                entry("DATE", Suffix::None),
                entry("TIMESTAMP", Suffix::None),
                entry("NUMBER", Suffix::Fixed("(10)")),
                entry("BINARY_DOUBLE", Suffix::None),
                entry("NUMBER", DECIMAL_DEFAULT),
                entry("NUMBER", Suffix::Fixed("(19)")),
                entry("NUMBER", Suffix::Fixed("(1)")),
            ],
            DatabaseType::Dm => [
                entry("CLOB", Suffix::None),
                entry("VARCHAR", len),
                entry("CHAR", one),
                entry("TIMESTAMP", Suffix::None),
                entry("DATE", Suffix::None),
                entry("TIME", Suffix::None),
                entry("INT", Suffix::None),
                entry("DOUBLE", Suffix::None),
                entry("NUMERIC", DECIMAL_DEFAULT),
                entry("BIGINT", Suffix::None),
                entry("BIT", Suffix::None),
            ],
            DatabaseType::H2 => [
                entry("CLOB", Suffix::None),
                entry("VARCHAR", len),
                entry("CHAR", one),
                entry("TIMESTAMP", Suffix::None),
                entry("DATE", Suffix::None),
                entry("TIME", Suffix::None),
                entry("INTEGER", Suffix::None),
                entry("DOUBLE PRECISION", Suffix::None),
                entry("NUMERIC", DECIMAL_DEFAULT),
                entry("BIGINT", Suffix::None),
                entry("BOOLEAN", Suffix::None),
            ],
            // Every temporal category is a TIMESTAMP; NCHAR holds text.
            DatabaseType::Tdengine => [
                entry("NCHAR", Suffix::Length(Some(4096))),
                entry("NCHAR", len),
                entry("NCHAR", one),
                entry("TIMESTAMP", Suffix::None),
                entry("TIMESTAMP", Suffix::None),
                entry("TIMESTAMP", Suffix::None),
                entry("INT", Suffix::None),
                entry("DOUBLE", Suffix::None),
                entry("DECIMAL", DECIMAL_DEFAULT),
                entry("BIGINT", Suffix::None),
                entry("BOOL", Suffix::None),
            ],
        };

        Self { dialect, entries }
    }

    pub fn dialect(&self) -> DatabaseType {
        self.dialect
    }

    /// The entry for a category.
    pub fn entry(&self, category: TypeCategory) -> &TypeEntry {
        &self.entries[category as usize]
    }

    /// Render the SQL type for a column of the given category.
    pub fn map_type(&self, category: TypeCategory, column: &ColumnDescriptor) -> String {
        self.entry(category).render(column)
    }
}

/// Render the SQL type of a column for a dialect, given its category.
pub fn map_type(
    dialect: DatabaseType,
    category: TypeCategory,
    column: &ColumnDescriptor,
    config: &GeneratorConfig,
) -> String {
    DialectMappingTable::for_dialect(dialect, config).map_type(category, column)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(dialect: DatabaseType) -> DialectMappingTable {
        DialectMappingTable::for_dialect(dialect, &GeneratorConfig::default())
    }

    fn col(source_type: &str) -> ColumnDescriptor {
        ColumnDescriptor::new("value", source_type)
    }

    #[test]
    fn test_mapping_is_total() {
        let config = GeneratorConfig::default();
        for dialect in DatabaseType::ALL {
            for category in TypeCategory::ALL {
                let sql = map_type(dialect, category, &col("x"), &config);
                assert!(!sql.is_empty(), "{} {} is empty", dialect, category);
            }
        }
    }

    #[test]
    fn test_string_default_length() {
        assert_eq!(
            table(DatabaseType::Mysql).map_type(TypeCategory::String, &col("String")),
            "VARCHAR(255)"
        );
        assert_eq!(
            table(DatabaseType::Oracle).map_type(TypeCategory::String, &col("String")),
            "VARCHAR2(255)"
        );
    }

    #[test]
    fn test_string_explicit_length() {
        let column = col("String").with_length(50);
        assert_eq!(
            table(DatabaseType::Postgresql).map_type(TypeCategory::String, &column),
            "VARCHAR(50)"
        );
    }

    #[test]
    fn test_configured_string_length() {
        let config = GeneratorConfig {
            default_string_length: 64,
            ..GeneratorConfig::default()
        };
        let mapping = DialectMappingTable::for_dialect(DatabaseType::H2, &config);
        assert_eq!(mapping.map_type(TypeCategory::String, &col("String")), "VARCHAR(64)");
    }

    #[test]
    fn test_decimal_precision_and_scale_on_every_dialect() {
        let price = col("BigDecimal").with_precision(10, Some(2));
        for dialect in DatabaseType::ALL {
            let sql = table(dialect).map_type(TypeCategory::Decimal, &price);
            assert!(sql.ends_with("(10,2)"), "{}: {}", dialect, sql);
        }
    }

    #[test]
    fn test_decimal_precision_only() {
        let amount = col("BigDecimal").with_precision(12, None);
        assert_eq!(
            table(DatabaseType::Mysql).map_type(TypeCategory::Decimal, &amount),
            "DECIMAL(12)"
        );
    }

    #[test]
    fn test_decimal_default() {
        assert_eq!(
            table(DatabaseType::Postgresql).map_type(TypeCategory::Decimal, &col("BigDecimal")),
            "NUMERIC(19,2)"
        );
        assert_eq!(
            table(DatabaseType::Oracle).map_type(TypeCategory::Decimal, &col("BigDecimal")),
            "NUMBER(19,2)"
        );
    }

    #[test]
    fn test_length_ignored_for_unsuffixed_types() {
        let column = col("LocalDateTime").with_length(20);
        assert_eq!(
            table(DatabaseType::Mysql).map_type(TypeCategory::DateTime, &column),
            "DATETIME"
        );
    }

    #[test]
    fn test_boolean_per_dialect() {
        let flag = col("Boolean");
        assert_eq!(table(DatabaseType::Mysql).map_type(TypeCategory::Boolean, &flag), "TINYINT(1)");
        assert_eq!(table(DatabaseType::Oracle).map_type(TypeCategory::Boolean, &flag), "NUMBER(1)");
        assert_eq!(
            table(DatabaseType::Postgresql).map_type(TypeCategory::Boolean, &flag),
            "BOOLEAN"
        );
        assert_eq!(table(DatabaseType::Tdengine).map_type(TypeCategory::Boolean, &flag), "BOOL");
    }

    #[test]
    fn test_oracle_fixed_numbers() {
        let mapping = table(DatabaseType::Oracle);
        assert_eq!(mapping.map_type(TypeCategory::Int, &col("int")), "NUMBER(10)");
        assert_eq!(mapping.map_type(TypeCategory::Long, &col("long")), "NUMBER(19)");
        assert_eq!(mapping.map_type(TypeCategory::Text, &col("String")), "CLOB");
    }
}
