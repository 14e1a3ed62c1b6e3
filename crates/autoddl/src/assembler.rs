//! Multi-table script assembly.
//!
//! A foreign key may reference a table declared later in the input, so no
//! constraint is emitted until every table exists. [`SchemaAssembler`] builds
//! three kinds of script on top of one [`DdlStrategy`]:
//!
//! - [`SchemaAssembler::generate_schema`]: every CREATE TABLE (junction tables
//!   included), then per-table foreign keys and comments, then junction
//!   foreign keys; statements separated by a blank line
//! - [`SchemaAssembler::complete_script`]: the same content in four commented
//!   phases (tables, indexes, foreign keys, comments), each one switchable
//!   through [`SchemaOptions`]
//! - [`SchemaAssembler::rollback_script`]: DROP TABLE statements in reverse
//!   dependency order

use std::borrow::Cow;
use std::sync::Arc;

use tracing::{info, warn};

use crate::config::SchemaOptions;
use crate::core::schema::{ManyToManyTable, SchemaDocument, TableDescriptor};
use crate::core::traits::DdlStrategy;
use crate::dependency::DependencyResolver;
use crate::error::Result;

const RULE: &str = "-- =============================================";

/// Assembles multi-table DDL scripts for one dialect.
#[derive(Debug, Clone)]
pub struct SchemaAssembler {
    strategy: Arc<dyn DdlStrategy>,
    options: SchemaOptions,
}

impl SchemaAssembler {
    /// Assembler using the schema options of the strategy's configuration.
    pub fn new(strategy: Arc<dyn DdlStrategy>) -> Self {
        let options = strategy.column_mapper().config().schema;
        Self { strategy, options }
    }

    pub fn with_options(mut self, options: SchemaOptions) -> Self {
        self.options = options;
        self
    }

    pub fn strategy(&self) -> &dyn DdlStrategy {
        self.strategy.as_ref()
    }

    pub fn options(&self) -> &SchemaOptions {
        &self.options
    }

    /// Two-phase script for a list of tables.
    pub fn generate_schema(&self, tables: &[TableDescriptor]) -> Result<String> {
        self.generate_schema_for(&SchemaDocument::from_tables(tables.to_vec()))
    }

    /// Two-phase script for a document, including its foreign keys and
    /// junction tables.
    pub fn generate_schema_for(&self, document: &SchemaDocument) -> Result<String> {
        let statements = self.schema_statements(document)?;
        info!(
            "Assembled {} statements for {} tables ({})",
            statements.len(),
            document.tables.len(),
            self.strategy.dialect()
        );
        Ok(statements.join("\n\n"))
    }

    /// The statements of [`Self::generate_schema_for`], in order.
    pub fn schema_statements(&self, document: &SchemaDocument) -> Result<Vec<String>> {
        let strategy = self.strategy();
        let tables = self.prepared_tables(document);
        let junctions: &[ManyToManyTable] = if self.options.include_many_to_many_tables {
            document.many_to_many.as_slice()
        } else {
            &[]
        };
        let foreign_keys = self.foreign_keys_enabled(document);

        let mut statements: Vec<String> = tables
            .iter()
            .map(|t| strategy.generate_create_table(t))
            .collect();
        statements.extend(junctions.iter().map(|j| strategy.generate_many_to_many_table(j)));

        for table in &tables {
            if foreign_keys {
                for fk in document.foreign_keys_for(&table.name) {
                    statements.push(strategy.generate_add_foreign_key(&table.name, fk)?);
                }
            }
            if self.options.include_comments {
                statements.extend(strategy.generate_add_comment(table));
            }
        }
        if foreign_keys {
            for junction in junctions {
                statements.extend(strategy.generate_many_to_many_table_foreign_keys(junction)?);
            }
        }
        Ok(statements)
    }

    /// Phase-commented creation script for a document.
    pub fn complete_script(&self, document: &SchemaDocument) -> Result<String> {
        let strategy = self.strategy();
        let tables = self.prepared_tables(document);
        let junctions: &[ManyToManyTable] = if self.options.include_many_to_many_tables {
            document.many_to_many.as_slice()
        } else {
            &[]
        };
        let mut lines = Vec::new();

        phase_header(&mut lines, "Phase 1: Create All Tables (without FK)");
        for table in &tables {
            lines.push(format!("-- Table: {}", table.name));
            lines.push(strategy.generate_create_table(table));
            lines.push(String::new());
        }
        if !junctions.is_empty() {
            lines.push("-- Many-to-Many Junction Tables".to_string());
            for junction in junctions {
                lines.push(format!(
                    "-- Junction: {} <-> {}",
                    junction.left_table, junction.right_table
                ));
                lines.push(strategy.generate_many_to_many_table(junction));
                lines.push(String::new());
            }
        }

        if self.options.include_indexes {
            phase_header(&mut lines, "Phase 2: Create Indexes");
            for table in &tables {
                let indexes: Vec<_> = document.indexes_for(&table.name).collect();
                if indexes.is_empty() {
                    continue;
                }
                lines.push(format!("-- Indexes for {}", table.name));
                for index in indexes {
                    lines.push(strategy.generate_create_index(&table.name, index));
                }
                lines.push(String::new());
            }
        }

        if self.foreign_keys_enabled(document) {
            phase_header(&mut lines, "Phase 3: Add Foreign Key Constraints");
            for table in &tables {
                let fks: Vec<_> = document.foreign_keys_for(&table.name).collect();
                if fks.is_empty() {
                    continue;
                }
                lines.push(format!("-- Foreign Keys for {}", table.name));
                for fk in fks {
                    lines.push(strategy.generate_add_foreign_key(&table.name, fk)?);
                }
                lines.push(String::new());
            }
            if !junctions.is_empty() {
                lines.push("-- Foreign Keys for Junction Tables".to_string());
                for junction in junctions {
                    lines.push(format!("-- Foreign Keys for {}", junction.table_name));
                    lines.extend(strategy.generate_many_to_many_table_foreign_keys(junction)?);
                    lines.push(String::new());
                }
            }
        }

        if self.options.include_comments {
            phase_header(&mut lines, "Phase 4: Add Comments");
            for table in &tables {
                if let Some(comment) = strategy.generate_add_comment(table) {
                    lines.push(comment);
                    lines.push(String::new());
                }
            }
        }

        info!(
            "Assembled complete {} script for {} tables and {} junction tables",
            strategy.dialect(),
            tables.len(),
            junctions.len()
        );
        Ok(lines.join("\n"))
    }

    /// `ALTER TABLE ... ADD COLUMN` statements for every column of every
    /// table, one per line.
    pub fn alter_script(&self, document: &SchemaDocument) -> String {
        self.prepared_tables(document)
            .iter()
            .flat_map(|t| self.strategy.generate_alter_table_add_column(t))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// DROP TABLE statements: junction tables first, then tables in reverse
    /// dependency order.
    ///
    /// # Errors
    ///
    /// Returns [`crate::DdlError::CircularDependency`] when the foreign keys
    /// form a cycle.
    pub fn rollback_script(&self, document: &SchemaDocument) -> Result<String> {
        let strategy = self.strategy();
        let mut statements: Vec<String> = document
            .many_to_many
            .iter()
            .map(|j| strategy.generate_drop_table(&j.table_name))
            .collect();
        for table in DependencyResolver::for_document(document).deletion_order()? {
            statements.push(strategy.generate_drop_table(&table.name));
        }
        Ok(statements.join("\n"))
    }

    /// Tables with audit columns removed when the configuration asks for it.
    fn prepared_tables<'a>(&self, document: &'a SchemaDocument) -> Vec<Cow<'a, TableDescriptor>> {
        let config = self.strategy.column_mapper().config();
        document
            .tables
            .iter()
            .map(|t| {
                if config.skip_audit_columns {
                    Cow::Owned(t.without_audit_columns(&config.audit_columns))
                } else {
                    Cow::Borrowed(t)
                }
            })
            .collect()
    }

    fn foreign_keys_enabled(&self, document: &SchemaDocument) -> bool {
        if !self.options.include_foreign_keys {
            return false;
        }
        if !self.strategy.supports_foreign_keys() {
            let declared = document.foreign_keys.len() + 2 * document.many_to_many.len();
            if declared > 0 {
                warn!(
                    "{} has no foreign keys, skipping {} constraints",
                    self.strategy.dialect(),
                    declared
                );
            }
            return false;
        }
        true
    }
}

fn phase_header(lines: &mut Vec<String>, title: &str) {
    lines.push(RULE.to_string());
    lines.push(format!("-- {}", title));
    lines.push(RULE.to_string());
    lines.push(String::new());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GeneratorConfig;
    use crate::core::schema::{ColumnDescriptor, ForeignKeyInfo, IndexDefinition};
    use crate::core::{DatabaseType, StrategyRegistry};

    fn assembler(dialect: DatabaseType) -> SchemaAssembler {
        assembler_with(dialect, GeneratorConfig::default())
    }

    fn assembler_with(dialect: DatabaseType, config: GeneratorConfig) -> SchemaAssembler {
        let registry = StrategyRegistry::with_builtins(Arc::new(config));
        SchemaAssembler::new(registry.get_strategy(dialect).unwrap())
    }

    fn make_test_table(name: &str, comment: &str) -> TableDescriptor {
        TableDescriptor::new(name)
            .with_comment(comment)
            .with_primary_key("id")
            .with_column(
                ColumnDescriptor::new("id", "Long")
                    .with_primary_key(true)
                    .with_auto_increment(true),
            )
    }

    /// `t_order` references `sys_user`, which is declared after it.
    fn document() -> SchemaDocument {
        let order = make_test_table("t_order", "")
            .with_column(ColumnDescriptor::new("user_id", "Long").with_nullable(false));
        let user = make_test_table("sys_user", "system user")
            .with_column(ColumnDescriptor::new("username", "String").with_length(50));
        SchemaDocument {
            tables: vec![order, user],
            foreign_keys: vec![ForeignKeyInfo::new(
                "fk_order_user",
                "t_order",
                "user_id",
                "sys_user",
                "id",
            )],
            indexes: vec![IndexDefinition::new("idx_order_user", "t_order", ["user_id"])],
            many_to_many: vec![ManyToManyTable::new(
                "user_role",
                "sys_user",
                "user_id",
                "sys_role",
                "role_id",
            )],
        }
    }

    fn position(script: &str, needle: &str) -> usize {
        script
            .find(needle)
            .unwrap_or_else(|| panic!("missing {:?} in:\n{}", needle, script))
    }

    #[test]
    fn test_generate_schema_creates_before_constraints() {
        let sql = assembler(DatabaseType::Mysql)
            .generate_schema_for(&document())
            .unwrap();
        let last_create = position(&sql, "CREATE TABLE `user_role`");
        assert!(position(&sql, "CREATE TABLE `t_order`") < position(&sql, "CREATE TABLE `sys_user`"));
        assert!(last_create < position(&sql, "ADD CONSTRAINT `fk_order_user`"));
        assert!(last_create < position(&sql, "ALTER TABLE `sys_user` COMMENT"));
        assert!(last_create < position(&sql, "`fk_user_role_user_id`"));
        assert!(!sql.contains("CREATE INDEX"));
    }

    #[test]
    fn test_generate_schema_statement_list() {
        let statements = assembler(DatabaseType::Postgresql)
            .schema_statements(&document())
            .unwrap();
        // 3 creates, 1 FK, 1 comment block, 2 junction FKs
        assert_eq!(statements.len(), 7);
        assert!(statements[..3].iter().all(|s| s.starts_with("CREATE TABLE")));
        assert!(statements[3].contains("\"fk_order_user\""));
        assert!(statements[4].starts_with("COMMENT ON TABLE \"sys_user\""));
    }

    #[test]
    fn test_generate_schema_tables_only() {
        let tables = vec![make_test_table("a", ""), make_test_table("b", "")];
        let sql = assembler(DatabaseType::H2).generate_schema(&tables).unwrap();
        assert_eq!(sql.matches("CREATE TABLE").count(), 2);
        assert!(sql.contains(");\n\nCREATE TABLE \"b\""));
        assert!(!sql.contains("COMMENT"));
    }

    #[test]
    fn test_complete_script_phases() {
        let script = assembler(DatabaseType::Postgresql)
            .complete_script(&document())
            .unwrap();
        let phase1 = position(&script, "-- Phase 1: Create All Tables (without FK)");
        let phase2 = position(&script, "-- Phase 2: Create Indexes");
        let phase3 = position(&script, "-- Phase 3: Add Foreign Key Constraints");
        let phase4 = position(&script, "-- Phase 4: Add Comments");
        assert!(phase1 < phase2 && phase2 < phase3 && phase3 < phase4);

        assert!(script.contains("-- Table: t_order"));
        assert!(script.contains("-- Junction: sys_user <-> sys_role"));
        assert!(position(&script, "CREATE INDEX \"idx_order_user\"") > phase2);
        assert!(position(&script, "-- Foreign Keys for Junction Tables") > phase3);
        assert!(position(&script, "COMMENT ON TABLE \"sys_user\"") > phase4);
    }

    #[test]
    fn test_complete_script_respects_options() {
        let options = SchemaOptions {
            include_indexes: false,
            include_many_to_many_tables: false,
            include_foreign_keys: false,
            include_comments: false,
        };
        let script = assembler(DatabaseType::Mysql)
            .with_options(options)
            .complete_script(&document())
            .unwrap();
        assert!(script.contains("-- Phase 1"));
        assert!(!script.contains("-- Phase 2"));
        assert!(!script.contains("-- Phase 3"));
        assert!(!script.contains("-- Phase 4"));
        assert!(!script.contains("user_role"));
    }

    #[test]
    fn test_options_come_from_config() {
        let mut config = GeneratorConfig::default();
        config.schema.include_indexes = false;
        let script = assembler_with(DatabaseType::Mysql, config)
            .complete_script(&document())
            .unwrap();
        assert!(!script.contains("CREATE INDEX"));
    }

    #[test]
    fn test_complete_script_is_deterministic() {
        let a = assembler(DatabaseType::Oracle);
        assert_eq!(
            a.complete_script(&document()).unwrap(),
            a.complete_script(&document()).unwrap()
        );
    }

    #[test]
    fn test_tdengine_skips_foreign_keys() {
        let a = assembler(DatabaseType::Tdengine);
        let script = a.complete_script(&document()).unwrap();
        assert!(!script.contains("FOREIGN KEY"));
        assert!(!script.contains("-- Phase 3"));
        let sql = a.generate_schema_for(&document()).unwrap();
        assert!(!sql.contains("FOREIGN KEY"));
    }

    #[test]
    fn test_skip_audit_columns() {
        let config = GeneratorConfig {
            skip_audit_columns: true,
            ..GeneratorConfig::default()
        };
        let table = TableDescriptor::new("doc")
            .with_column(ColumnDescriptor::new("title", "String"))
            .with_column(ColumnDescriptor::new("createTime", "LocalDateTime"))
            .with_column(ColumnDescriptor::new("update_by", "Long"));
        let sql = assembler_with(DatabaseType::Mysql, config)
            .generate_schema(&[table])
            .unwrap();
        assert!(sql.contains("`title`"));
        assert!(!sql.contains("createTime"));
        assert!(!sql.contains("update_by"));
    }

    #[test]
    fn test_skip_audit_columns_keeps_primary_key() {
        let config = GeneratorConfig {
            skip_audit_columns: true,
            ..GeneratorConfig::default()
        };
        let user = make_test_table("sys_user", "")
            .with_column(ColumnDescriptor::new("username", "String"))
            .with_column(ColumnDescriptor::new("create_time", "LocalDateTime"));
        let order = make_test_table("t_order", "")
            .with_column(ColumnDescriptor::new("user_id", "Long"));
        let document = SchemaDocument {
            tables: vec![user, order],
            foreign_keys: vec![ForeignKeyInfo::new(
                "fk_order_user",
                "t_order",
                "user_id",
                "sys_user",
                "id",
            )],
            ..SchemaDocument::default()
        };
        let sql = assembler_with(DatabaseType::Mysql, config)
            .generate_schema_for(&document)
            .unwrap();
        assert!(sql.contains("`id` BIGINT NOT NULL AUTO_INCREMENT"));
        assert!(sql.contains("PRIMARY KEY (`id`)"));
        assert!(!sql.contains("create_time"));
        assert!(sql.contains("REFERENCES `sys_user` (`id`)"));
    }

    #[test]
    fn test_alter_script() {
        let sql = assembler(DatabaseType::Mysql).alter_script(&document());
        assert_eq!(sql.lines().count(), 4);
        assert!(sql.lines().all(|l| l.contains("ADD COLUMN")));
    }

    #[test]
    fn test_rollback_script_order() {
        let sql = assembler(DatabaseType::Mysql).rollback_script(&document()).unwrap();
        assert_eq!(
            sql,
            "DROP TABLE IF EXISTS `user_role`;\n\
             DROP TABLE IF EXISTS `t_order`;\n\
             DROP TABLE IF EXISTS `sys_user`;"
        );
    }
}
