//! Oracle column type resolution.

use std::sync::Arc;

use crate::config::GeneratorConfig;
use crate::core::schema::ColumnDescriptor;
use crate::core::DatabaseType;
use crate::dialect::{ColumnTypeMapper, TypeCategory, TypeRenderer};

/// Longest VARCHAR2 under the default MAX_STRING_SIZE.
const MAX_VARCHAR2_LENGTH: u32 = 4_000;

/// Column type mapper for Oracle 12c+.
pub fn oracle_column_mapper(config: Arc<GeneratorConfig>) -> ColumnTypeMapper {
    ColumnTypeMapper::builder(DatabaseType::Oracle, config)
        .override_with(clob_for_long_strings)
        .both("java.lang.Short", "Short", TypeRenderer::Literal("NUMBER(5)"))
        .simple("short", TypeRenderer::Literal("NUMBER(5)"))
        .both("java.lang.Byte", "Byte", TypeRenderer::Literal("NUMBER(3)"))
        .simple("byte", TypeRenderer::Literal("NUMBER(3)"))
        .both("java.lang.Float", "Float", TypeRenderer::Literal("BINARY_FLOAT"))
        .simple("float", TypeRenderer::Literal("BINARY_FLOAT"))
        .both(
            "java.math.BigInteger",
            "BigInteger",
            TypeRenderer::Literal("NUMBER(38,0)"),
        )
        .both(
            "java.time.ZonedDateTime",
            "ZonedDateTime",
            TypeRenderer::Literal("TIMESTAMP WITH TIME ZONE"),
        )
        .both(
            "java.time.OffsetDateTime",
            "OffsetDateTime",
            TypeRenderer::Literal("TIMESTAMP WITH TIME ZONE"),
        )
        .both("java.util.UUID", "UUID", TypeRenderer::Literal("VARCHAR2(36)"))
        .simple("byte[]", TypeRenderer::Literal("BLOB"))
        .simple("ByteArray", TypeRenderer::Literal("BLOB"))
        .build()
}

fn clob_for_long_strings(_mapper: &ColumnTypeMapper, column: &ColumnDescriptor) -> Option<String> {
    match column.length {
        Some(len)
            if len > MAX_VARCHAR2_LENGTH
                && TypeCategory::String.family().contains(&column.source_type) =>
        {
            Some("CLOB".to_string())
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(column: ColumnDescriptor) -> String {
        oracle_column_mapper(Arc::new(GeneratorConfig::default())).map_field_to_column_type(&column)
    }

    #[test]
    fn test_number_types() {
        assert_eq!(map(ColumnDescriptor::new("id", "Long")), "NUMBER(19)");
        assert_eq!(map(ColumnDescriptor::new("n", "Integer")), "NUMBER(10)");
        assert_eq!(map(ColumnDescriptor::new("n", "short")), "NUMBER(5)");
        assert_eq!(map(ColumnDescriptor::new("flag", "Boolean")), "NUMBER(1)");
        assert_eq!(map(ColumnDescriptor::new("amount", "BigDecimal")), "NUMBER(19,2)");
        assert_eq!(map(ColumnDescriptor::new("ratio", "Float")), "BINARY_FLOAT");
        assert_eq!(map(ColumnDescriptor::new("ratio", "Double")), "BINARY_DOUBLE");
    }

    #[test]
    fn test_string_types() {
        assert_eq!(map(ColumnDescriptor::new("name", "String")), "VARCHAR2(255)");
        assert_eq!(map(ColumnDescriptor::new("name", "String").with_length(4000)), "VARCHAR2(4000)");
        assert_eq!(map(ColumnDescriptor::new("body", "String").with_length(4001)), "CLOB");
        assert_eq!(map(ColumnDescriptor::new("file_path", "String")), "CLOB");
        assert_eq!(map(ColumnDescriptor::new("id", "UUID")), "VARCHAR2(36)");
    }

    #[test]
    fn test_temporal_and_binary() {
        assert_eq!(map(ColumnDescriptor::new("at", "LocalDateTime")), "TIMESTAMP");
        assert_eq!(map(ColumnDescriptor::new("on", "LocalDate")), "DATE");
        assert_eq!(map(ColumnDescriptor::new("t", "LocalTime")), "TIMESTAMP");
        assert_eq!(map(ColumnDescriptor::new("raw", "byte[]")), "BLOB");
    }
}
