//! DM (Dameng) column type resolution.

use std::sync::Arc;

use crate::config::GeneratorConfig;
use crate::core::schema::ColumnDescriptor;
use crate::core::DatabaseType;
use crate::dialect::{ColumnTypeMapper, TypeCategory, TypeRenderer};

/// Longest VARCHAR with the default 8K page size.
const MAX_VARCHAR_LENGTH: u32 = 8_188;

/// Column type mapper for DM 8.
pub fn dm_column_mapper(config: Arc<GeneratorConfig>) -> ColumnTypeMapper {
    ColumnTypeMapper::builder(DatabaseType::Dm, config)
        .override_with(clob_for_long_strings)
        .both("java.lang.Short", "Short", TypeRenderer::Literal("SMALLINT"))
        .simple("short", TypeRenderer::Literal("SMALLINT"))
        .both("java.lang.Byte", "Byte", TypeRenderer::Literal("TINYINT"))
        .simple("byte", TypeRenderer::Literal("TINYINT"))
        .both("java.lang.Float", "Float", TypeRenderer::Literal("FLOAT"))
        .simple("float", TypeRenderer::Literal("FLOAT"))
        .both("java.util.UUID", "UUID", TypeRenderer::Literal("VARCHAR(36)"))
        .simple("byte[]", TypeRenderer::Literal("BLOB"))
        .simple("ByteArray", TypeRenderer::Literal("BLOB"))
        .build()
}

fn clob_for_long_strings(_mapper: &ColumnTypeMapper, column: &ColumnDescriptor) -> Option<String> {
    match column.length {
        Some(len)
            if len > MAX_VARCHAR_LENGTH
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
        dm_column_mapper(Arc::new(GeneratorConfig::default())).map_field_to_column_type(&column)
    }

    #[test]
    fn test_types() {
        assert_eq!(map(ColumnDescriptor::new("id", "Long")), "BIGINT");
        assert_eq!(map(ColumnDescriptor::new("flag", "Boolean")), "BIT");
        assert_eq!(map(ColumnDescriptor::new("name", "String")), "VARCHAR(255)");
        assert_eq!(map(ColumnDescriptor::new("intro_text", "String")), "CLOB");
        assert_eq!(map(ColumnDescriptor::new("body", "String").with_length(9000)), "CLOB");
        assert_eq!(map(ColumnDescriptor::new("amount", "BigDecimal")), "NUMERIC(19,2)");
        assert_eq!(map(ColumnDescriptor::new("n", "Short")), "SMALLINT");
        assert_eq!(map(ColumnDescriptor::new("raw", "byte[]")), "BLOB");
        assert_eq!(map(ColumnDescriptor::new("id", "java.util.UUID")), "VARCHAR(36)");
    }
}
