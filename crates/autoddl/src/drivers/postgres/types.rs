//! PostgreSQL column type resolution.

use std::sync::Arc;

use crate::config::GeneratorConfig;
use crate::core::schema::ColumnDescriptor;
use crate::core::DatabaseType;
use crate::dialect::{ColumnTypeMapper, TypeCategory, TypeRenderer};

/// VARCHAR limit; anything longer becomes TEXT.
const MAX_VARCHAR_LENGTH: u32 = 10_485_760;

const TIMESTAMPTZ: TypeRenderer = TypeRenderer::Literal("TIMESTAMP WITH TIME ZONE");

/// Column type mapper for PostgreSQL 12+.
pub fn postgres_column_mapper(config: Arc<GeneratorConfig>) -> ColumnTypeMapper {
    ColumnTypeMapper::builder(DatabaseType::Postgresql, config)
        .override_with(oversized_varchar)
        // No TINYINT
        .both("java.lang.Short", "Short", TypeRenderer::Literal("SMALLINT"))
        .both("java.lang.Byte", "Byte", TypeRenderer::Literal("SMALLINT"))
        .simple("short", TypeRenderer::Literal("SMALLINT"))
        .simple("byte", TypeRenderer::Literal("SMALLINT"))
        .both("java.lang.Float", "Float", TypeRenderer::Literal("REAL"))
        .simple("float", TypeRenderer::Literal("REAL"))
        .both(
            "java.math.BigInteger",
            "BigInteger",
            TypeRenderer::Literal("NUMERIC(65,0)"),
        )
        .both("java.time.ZonedDateTime", "ZonedDateTime", TIMESTAMPTZ)
        .both("java.time.OffsetDateTime", "OffsetDateTime", TIMESTAMPTZ)
        .both("java.time.Instant", "Instant", TIMESTAMPTZ)
        .both("java.time.Duration", "Duration", TypeRenderer::Literal("INTERVAL"))
        .simple("byte[]", TypeRenderer::Literal("BYTEA"))
        .simple("ByteArray", TypeRenderer::Literal("BYTEA"))
        .both("java.util.UUID", "UUID", TypeRenderer::Literal("UUID"))
        .both(
            "com.fasterxml.jackson.databind.JsonNode",
            "JsonNode",
            TypeRenderer::Literal("JSONB"),
        )
        .both("java.lang.Integer[]", "Integer[]", TypeRenderer::Literal("INTEGER[]"))
        .simple("int[]", TypeRenderer::Literal("INTEGER[]"))
        .simple("IntArray", TypeRenderer::Literal("INTEGER[]"))
        .both("java.lang.Long[]", "Long[]", TypeRenderer::Literal("BIGINT[]"))
        .simple("long[]", TypeRenderer::Literal("BIGINT[]"))
        .simple("LongArray", TypeRenderer::Literal("BIGINT[]"))
        .both("java.lang.String[]", "String[]", TypeRenderer::Literal("TEXT[]"))
        .simple("Array<String>", TypeRenderer::Literal("TEXT[]"))
        .build()
}

fn oversized_varchar(_mapper: &ColumnTypeMapper, column: &ColumnDescriptor) -> Option<String> {
    match column.length {
        Some(len)
            if len > MAX_VARCHAR_LENGTH
                && TypeCategory::String.family().contains(&column.source_type) =>
        {
            Some("TEXT".to_string())
        }
        _ => None,
    }
}
