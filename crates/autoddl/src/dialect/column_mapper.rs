//! Field-oriented column type resolution.
//!
//! [`ColumnTypeMapper`] resolves the SQL type of a column by trying, in order:
//!
//! 1. the column's literal `column_definition`, then the dialect override hook
//! 2. the fully qualified source type name
//! 3. the simple source type name
//! 4. the dialect default (the STRING mapping, e.g. `VARCHAR(255)`)
//!
//! Name lookups are seeded with every type the classification chain knows,
//! mapped to [`TypeRenderer::Classified`]. Those entries run the classifier
//! and render through the [`DialectMappingTable`], so there is one truth
//! table for the categorised types. Dialects then add or replace entries for
//! types the categories do not model (`UUID`, `byte[]`, `SMALLINT`, ...).

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use tracing::warn;

use crate::config::GeneratorConfig;
use crate::core::schema::ColumnDescriptor;
use crate::core::DatabaseType;

use super::category::{classify, TypeCategory};
use super::typemap::DialectMappingTable;

/// Dialect-specific override consulted before any name lookup.
pub type OverrideHook = fn(&ColumnTypeMapper, &ColumnDescriptor) -> Option<String>;

/// How a matched type name becomes SQL.
#[derive(Clone, Copy)]
pub enum TypeRenderer {
    /// Classify the column and render through the mapping table.
    Classified,
    /// A fixed SQL type.
    Literal(&'static str),
    /// Computed from the column (length-dependent types).
    Render(fn(&ColumnDescriptor) -> String),
}

impl fmt::Debug for TypeRenderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeRenderer::Classified => write!(f, "Classified"),
            TypeRenderer::Literal(sql) => write!(f, "Literal({})", sql),
            TypeRenderer::Render(_) => write!(f, "Render(..)"),
        }
    }
}

/// Resolves column SQL types for one dialect.
pub struct ColumnTypeMapper {
    dialect: DatabaseType,
    config: Arc<GeneratorConfig>,
    table: DialectMappingTable,
    override_hook: Option<OverrideHook>,
    qualified: HashMap<&'static str, TypeRenderer>,
    simple: HashMap<&'static str, TypeRenderer>,
    default_type: String,
}

impl fmt::Debug for ColumnTypeMapper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnTypeMapper")
            .field("dialect", &self.dialect)
            .field("qualified", &self.qualified.len())
            .field("simple", &self.simple.len())
            .field("default_type", &self.default_type)
            .finish()
    }
}

impl ColumnTypeMapper {
    /// Start a mapper seeded with every classified type name.
    pub fn builder(dialect: DatabaseType, config: Arc<GeneratorConfig>) -> ColumnTypeMapperBuilder {
        let mut qualified = HashMap::new();
        let mut simple = HashMap::new();
        for category in TypeCategory::ALL {
            let family = category.family();
            for name in family.qualified {
                qualified.insert(*name, TypeRenderer::Classified);
            }
            for name in family.simple {
                simple.insert(*name, TypeRenderer::Classified);
            }
        }
        ColumnTypeMapperBuilder {
            dialect,
            config,
            override_hook: None,
            qualified,
            simple,
        }
    }

    pub fn dialect(&self) -> DatabaseType {
        self.dialect
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// The category mapping table backing classified types.
    pub fn table(&self) -> &DialectMappingTable {
        &self.table
    }

    /// Classify a column with this mapper's dialect and config.
    pub fn classify(&self, column: &ColumnDescriptor) -> TypeCategory {
        classify(column, self.dialect, &self.config)
    }

    /// Type used when nothing else matches.
    pub fn default_type(&self) -> &str {
        &self.default_type
    }

    /// Resolve the SQL type for a column.
    pub fn map_field_to_column_type(&self, column: &ColumnDescriptor) -> String {
        if let Some(definition) = column.column_definition.as_deref() {
            if !definition.trim().is_empty() {
                return definition.trim().to_string();
            }
        }

        if let Some(sql) = self.override_hook.and_then(|hook| hook(self, column)) {
            return sql;
        }

        let source_type = column.source_type.trim();
        if let Some(renderer) = self.qualified.get(source_type) {
            return self.render(*renderer, column);
        }

        let simple_name = column.simple_type_name();
        if let Some(renderer) = self.simple.get(simple_name) {
            if source_type == simple_name {
                return self.render(*renderer, column);
            }
            // A foreign package classifies under its simple name.
            let by_simple_name = ColumnDescriptor {
                source_type: simple_name.to_string(),
                ..column.clone()
            };
            return self.render(*renderer, &by_simple_name);
        }

        warn!(
            "Unmappable type '{}' for column '{}' on {}, using {}",
            column.source_type, column.name, self.dialect, self.default_type
        );
        self.default_type.clone()
    }

    fn render(&self, renderer: TypeRenderer, column: &ColumnDescriptor) -> String {
        match renderer {
            TypeRenderer::Classified => self.table.map_type(self.classify(column), column),
            TypeRenderer::Literal(sql) => sql.to_string(),
            TypeRenderer::Render(f) => f(column),
        }
    }
}

/// Builder for [`ColumnTypeMapper`].
pub struct ColumnTypeMapperBuilder {
    dialect: DatabaseType,
    config: Arc<GeneratorConfig>,
    override_hook: Option<OverrideHook>,
    qualified: HashMap<&'static str, TypeRenderer>,
    simple: HashMap<&'static str, TypeRenderer>,
}

impl ColumnTypeMapperBuilder {
    /// Install the dialect override hook.
    pub fn override_with(mut self, hook: OverrideHook) -> Self {
        self.override_hook = Some(hook);
        self
    }

    /// Map a fully qualified type name, replacing any existing entry.
    pub fn qualified(mut self, name: &'static str, renderer: TypeRenderer) -> Self {
        self.qualified.insert(name, renderer);
        self
    }

    /// Map a simple type name, replacing any existing entry.
    pub fn simple(mut self, name: &'static str, renderer: TypeRenderer) -> Self {
        self.simple.insert(name, renderer);
        self
    }

    /// Map a type under both its qualified and simple names.
    pub fn both(self, qualified: &'static str, simple: &'static str, renderer: TypeRenderer) -> Self {
        self.qualified(qualified, renderer).simple(simple, renderer)
    }

    pub fn build(self) -> ColumnTypeMapper {
        let table = DialectMappingTable::for_dialect(self.dialect, &self.config);
        let default_type = table.map_type(
            TypeCategory::FALLBACK,
            &ColumnDescriptor::new("", ""),
        );
        ColumnTypeMapper {
            dialect: self.dialect,
            config: self.config,
            table,
            override_hook: self.override_hook,
            qualified: self.qualified,
            simple: self.simple,
            default_type,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain_mapper(dialect: DatabaseType) -> ColumnTypeMapper {
        ColumnTypeMapper::builder(dialect, Arc::new(GeneratorConfig::default())).build()
    }

    #[test]
    fn test_classified_types_follow_mapping_table() {
        let mapper = plain_mapper(DatabaseType::Postgresql);
        let column = ColumnDescriptor::new("username", "java.lang.String").with_length(50);
        assert_eq!(mapper.map_field_to_column_type(&column), "VARCHAR(50)");
        let column = ColumnDescriptor::new("created", "LocalDateTime");
        assert_eq!(mapper.map_field_to_column_type(&column), "TIMESTAMP");
    }

    #[test]
    fn test_long_text_name_still_applies() {
        let mapper = plain_mapper(DatabaseType::Mysql);
        let column = ColumnDescriptor::new("avatar_url", "String");
        assert_eq!(mapper.map_field_to_column_type(&column), "TEXT");
    }

    #[test]
    fn test_column_definition_wins() {
        let mapper = plain_mapper(DatabaseType::Postgresql);
        let column = ColumnDescriptor::new("email", "String").with_column_definition("CITEXT");
        assert_eq!(mapper.map_field_to_column_type(&column), "CITEXT");
    }

    #[test]
    fn test_override_hook_before_lookup() {
        fn hook(_: &ColumnTypeMapper, column: &ColumnDescriptor) -> Option<String> {
            (column.simple_type_name() == "Boolean").then(|| "BIT(1)".to_string())
        }
        let mapper = ColumnTypeMapper::builder(DatabaseType::Mysql, Arc::new(GeneratorConfig::default()))
            .override_with(hook)
            .build();
        let column = ColumnDescriptor::new("enabled", "java.lang.Boolean");
        assert_eq!(mapper.map_field_to_column_type(&column), "BIT(1)");
    }

    #[test]
    fn test_qualified_before_simple() {
        let mapper = ColumnTypeMapper::builder(DatabaseType::Mysql, Arc::new(GeneratorConfig::default()))
            .qualified("com.example.Money", TypeRenderer::Literal("DECIMAL(19,4)"))
            .simple("Money", TypeRenderer::Literal("BIGINT"))
            .build();
        let qualified = ColumnDescriptor::new("amount", "com.example.Money");
        let simple = ColumnDescriptor::new("amount", "Money");
        let other_package = ColumnDescriptor::new("amount", "org.other.Money");
        assert_eq!(mapper.map_field_to_column_type(&qualified), "DECIMAL(19,4)");
        assert_eq!(mapper.map_field_to_column_type(&simple), "BIGINT");
        assert_eq!(mapper.map_field_to_column_type(&other_package), "BIGINT");
    }

    #[test]
    fn test_foreign_package_resolves_by_simple_name() {
        let mapper = plain_mapper(DatabaseType::Mysql);
        let cases = [
            ("org.joda.time.LocalDate", "DATE"),
            ("org.joda.time.DateTime", "DATETIME"),
            ("com.acme.Long", "BIGINT"),
        ];
        for (source_type, expected) in cases {
            let column = ColumnDescriptor::new("value", source_type);
            assert_eq!(mapper.map_field_to_column_type(&column), expected, "{}", source_type);
        }
    }

    #[test]
    fn test_simple_name_fallback_keeps_column_sizing() {
        let mapper = plain_mapper(DatabaseType::Postgresql);
        let column = ColumnDescriptor::new("title", "com.acme.String").with_length(80);
        assert_eq!(mapper.map_field_to_column_type(&column), "VARCHAR(80)");
        let column = ColumnDescriptor::new("price", "org.money.BigDecimal").with_precision(10, Some(2));
        assert_eq!(mapper.map_field_to_column_type(&column), "NUMERIC(10,2)");
    }

    #[test]
    fn test_render_fn() {
        let mapper = ColumnTypeMapper::builder(DatabaseType::H2, Arc::new(GeneratorConfig::default()))
            .simple(
                "byte[]",
                TypeRenderer::Render(|c| format!("VARBINARY({})", c.length.unwrap_or(255))),
            )
            .build();
        let column = ColumnDescriptor::new("payload", "byte[]").with_length(16);
        assert_eq!(mapper.map_field_to_column_type(&column), "VARBINARY(16)");
    }

    #[test]
    fn test_unknown_type_uses_default() {
        let mapper = plain_mapper(DatabaseType::Oracle);
        assert_eq!(mapper.default_type(), "VARCHAR2(255)");
        let column = ColumnDescriptor::new("blob", "com.example.Widget");
        assert_eq!(mapper.map_field_to_column_type(&column), "VARCHAR2(255)");
    }
}
