//! MySQL column type resolution.

use std::sync::Arc;

use crate::config::GeneratorConfig;
use crate::core::schema::ColumnDescriptor;
use crate::core::DatabaseType;
use crate::dialect::{ColumnTypeMapper, TypeCategory, TypeRenderer};

/// Longest VARCHAR in characters under utf8mb4 (65,535 bytes / 4).
const MAX_VARCHAR_CHARS: u32 = 16_383;
const TEXT_MAX: u32 = 65_535;
const MEDIUMTEXT_MAX: u32 = 16_777_215;

/// Column type mapper for MySQL 5.7+ / 8.0.
pub fn mysql_column_mapper(config: Arc<GeneratorConfig>) -> ColumnTypeMapper {
    ColumnTypeMapper::builder(DatabaseType::Mysql, config)
        .override_with(text_sizing)
        .both("java.lang.Short", "Short", TypeRenderer::Literal("SMALLINT"))
        .simple("short", TypeRenderer::Literal("SMALLINT"))
        .both("java.lang.Byte", "Byte", TypeRenderer::Literal("TINYINT"))
        .simple("byte", TypeRenderer::Literal("TINYINT"))
        .both("java.lang.Float", "Float", TypeRenderer::Literal("FLOAT"))
        .simple("float", TypeRenderer::Literal("FLOAT"))
        .both(
            "java.math.BigInteger",
            "BigInteger",
            TypeRenderer::Literal("DECIMAL(65,0)"),
        )
        .both("java.time.Instant", "Instant", TypeRenderer::Literal("TIMESTAMP"))
        .both(
            "java.time.ZonedDateTime",
            "ZonedDateTime",
            TypeRenderer::Literal("TIMESTAMP"),
        )
        .both(
            "java.time.OffsetDateTime",
            "OffsetDateTime",
            TypeRenderer::Literal("TIMESTAMP"),
        )
        .both("java.sql.Timestamp", "Timestamp", TypeRenderer::Literal("TIMESTAMP"))
        .both("java.time.Year", "Year", TypeRenderer::Literal("YEAR"))
        .both("java.util.UUID", "UUID", TypeRenderer::Literal("CHAR(36)"))
        .both(
            "com.fasterxml.jackson.databind.JsonNode",
            "JsonNode",
            TypeRenderer::Literal("JSON"),
        )
        .simple("byte[]", TypeRenderer::Render(binary))
        .simple("ByteArray", TypeRenderer::Render(binary))
        .build()
}

/// Pick TEXT, MEDIUMTEXT, or LONGTEXT for long strings.
fn text_sizing(mapper: &ColumnTypeMapper, column: &ColumnDescriptor) -> Option<String> {
    if !TypeCategory::String.family().contains(&column.source_type) {
        return None;
    }
    let long_text = mapper.classify(column) == TypeCategory::Text;
    match column.length {
        Some(len) if len > MEDIUMTEXT_MAX => Some("LONGTEXT".to_string()),
        Some(len) if len > TEXT_MAX => Some("MEDIUMTEXT".to_string()),
        Some(len) if len > MAX_VARCHAR_CHARS => Some("TEXT".to_string()),
        _ if long_text => Some("TEXT".to_string()),
        _ => None,
    }
}

fn binary(column: &ColumnDescriptor) -> String {
    match column.length {
        Some(len) if len <= 255 => format!("VARBINARY({})", len),
        Some(len) if len > MEDIUMTEXT_MAX => "LONGBLOB".to_string(),
        Some(len) if len > TEXT_MAX => "MEDIUMBLOB".to_string(),
        _ => "BLOB".to_string(),
    }
}
