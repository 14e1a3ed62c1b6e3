//! TDengine column type resolution.

use std::sync::Arc;

use crate::config::GeneratorConfig;
use crate::core::schema::ColumnDescriptor;
use crate::core::DatabaseType;
use crate::dialect::{ColumnTypeMapper, TypeRenderer};

/// Column type mapper for TDengine 3.x.
pub fn tdengine_column_mapper(config: Arc<GeneratorConfig>) -> ColumnTypeMapper {
    ColumnTypeMapper::builder(DatabaseType::Tdengine, config)
        .both("java.lang.Short", "Short", TypeRenderer::Literal("SMALLINT"))
        .simple("short", TypeRenderer::Literal("SMALLINT"))
        .both("java.lang.Byte", "Byte", TypeRenderer::Literal("TINYINT"))
        .simple("byte", TypeRenderer::Literal("TINYINT"))
        .both("java.lang.Float", "Float", TypeRenderer::Literal("FLOAT"))
        .simple("float", TypeRenderer::Literal("FLOAT"))
        .both("java.util.UUID", "UUID", TypeRenderer::Literal("VARCHAR(36)"))
        .simple("byte[]", TypeRenderer::Render(varbinary))
        .simple("ByteArray", TypeRenderer::Render(varbinary))
        .build()
}

fn varbinary(column: &ColumnDescriptor) -> String {
    format!("VARBINARY({})", column.length.unwrap_or(255))
}
