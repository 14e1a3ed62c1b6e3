//! H2 column type resolution.

use std::sync::Arc;

use crate::config::GeneratorConfig;
use crate::core::DatabaseType;
use crate::dialect::{ColumnTypeMapper, TypeRenderer};

/// Column type mapper for H2 2.x.
pub fn h2_column_mapper(config: Arc<GeneratorConfig>) -> ColumnTypeMapper {
    ColumnTypeMapper::builder(DatabaseType::H2, config)
        .both("java.lang.Short", "Short", TypeRenderer::Literal("SMALLINT"))
        .simple("short", TypeRenderer::Literal("SMALLINT"))
        .both("java.lang.Byte", "Byte", TypeRenderer::Literal("TINYINT"))
        .simple("byte", TypeRenderer::Literal("TINYINT"))
        .both("java.lang.Float", "Float", TypeRenderer::Literal("REAL"))
        .simple("float", TypeRenderer::Literal("REAL"))
        .both(
            "java.time.OffsetDateTime",
            "OffsetDateTime",
            TypeRenderer::Literal("TIMESTAMP WITH TIME ZONE"),
        )
        .both("java.util.UUID", "UUID", TypeRenderer::Literal("UUID"))
        .both(
            "com.fasterxml.jackson.databind.JsonNode",
            "JsonNode",
            TypeRenderer::Literal("JSON"),
        )
        .simple("byte[]", TypeRenderer::Literal("VARBINARY"))
        .simple("ByteArray", TypeRenderer::Literal("VARBINARY"))
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::schema::ColumnDescriptor;

    fn map(column: ColumnDescriptor) -> String {
        h2_column_mapper(Arc::new(GeneratorConfig::default())).map_field_to_column_type(&column)
    }

    #[test]
    fn test_types() {
        assert_eq!(map(ColumnDescriptor::new("id", "Long")), "BIGINT");
        assert_eq!(map(ColumnDescriptor::new("n", "Integer")), "INTEGER");
        assert_eq!(map(ColumnDescriptor::new("flag", "Boolean")), "BOOLEAN");
        assert_eq!(map(ColumnDescriptor::new("note_text", "String")), "CLOB");
        assert_eq!(map(ColumnDescriptor::new("id", "UUID")), "UUID");
        assert_eq!(map(ColumnDescriptor::new("doc", "JsonNode")), "JSON");
        assert_eq!(map(ColumnDescriptor::new("raw", "byte[]")), "VARBINARY");
        assert_eq!(map(ColumnDescriptor::new("ratio", "float")), "REAL");
    }
}
