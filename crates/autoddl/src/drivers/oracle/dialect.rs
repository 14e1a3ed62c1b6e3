//! Oracle DDL strategy.

use std::sync::Arc;

use super::types::oracle_column_mapper;
use crate::config::GeneratorConfig;
use crate::core::identifier::quote_upper;
use crate::core::schema::{ColumnDescriptor, TableDescriptor};
use crate::core::traits::DdlStrategy;
use crate::core::DatabaseType;
use crate::dialect::ColumnTypeMapper;
use crate::drivers::common::{
    column_comment_on, comment_on_statements, create_table, default_clause, nullability,
    primary_key_clause,
};

/// Oracle DDL strategy (12c+).
///
/// Identifiers are upper-cased and double-quoted. Auto-increment uses
/// identity columns, and the DEFAULT/identity clause precedes the
/// nullability constraint as Oracle requires.
#[derive(Debug)]
pub struct OracleStrategy {
    mapper: ColumnTypeMapper,
}

impl OracleStrategy {
    pub fn new(config: Arc<GeneratorConfig>) -> Self {
        Self {
            mapper: oracle_column_mapper(config),
        }
    }
}

impl DdlStrategy for OracleStrategy {
    fn dialect(&self) -> DatabaseType {
        DatabaseType::Oracle
    }

    fn quote_ident(&self, name: &str) -> String {
        quote_upper(name)
    }

    fn column_mapper(&self) -> &ColumnTypeMapper {
        &self.mapper
    }

    fn column_definition(&self, column: &ColumnDescriptor) -> String {
        let mut parts = vec![self.quote_ident(&column.name), self.column_type(column)];
        if column.auto_increment {
            parts.push("GENERATED BY DEFAULT AS IDENTITY".to_string());
        } else if let Some(default) = default_clause(column) {
            parts.push(default);
        }
        parts.push(nullability(column).to_string());
        parts.join(" ")
    }

    fn generate_create_table(&self, table: &TableDescriptor) -> String {
        let mut body: Vec<String> = table
            .columns
            .iter()
            .map(|c| self.column_definition(c))
            .collect();
        body.extend(primary_key_clause(self, table));
        create_table(
            &format!(
                "CREATE TABLE {}",
                self.table_ref(&table.name, &table.database_name)
            ),
            &body,
            "",
        )
    }

    /// Oracle has no `IF EXISTS`; dependent constraints are dropped along
    /// with the table.
    fn generate_drop_table(&self, table: &str) -> String {
        format!("DROP TABLE {} CASCADE CONSTRAINTS;", self.quote_ident(table))
    }

    fn add_column_sql(&self, target: &str, column: &ColumnDescriptor) -> String {
        format!("ALTER TABLE {} ADD {};", target, self.column_definition(column))
    }

    fn column_comment_sql(&self, target: &str, column: &ColumnDescriptor) -> Option<String> {
        column
            .has_comment()
            .then(|| column_comment_on(self, target, column))
    }

    fn generate_modify_column(&self, table: &str, column: &ColumnDescriptor) -> String {
        format!(
            "ALTER TABLE {} MODIFY ({});",
            self.quote_ident(table),
            self.column_definition(column)
        )
    }

    fn generate_add_comment(&self, table: &TableDescriptor) -> Option<String> {
        comment_on_statements(self, table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::schema::{ForeignKeyInfo, IndexDefinition};
    use crate::drivers::fixtures::{config, sys_user};

    fn strategy() -> OracleStrategy {
        OracleStrategy::new(config())
    }

    #[test]
    fn test_quote_ident_upper_cases() {
        assert_eq!(strategy().quote_ident("sys_user"), "\"SYS_USER\"");
    }

    #[test]
    fn test_create_table_layout() {
        let sql = strategy().generate_create_table(&sys_user());
        assert_eq!(
            sql,
            "CREATE TABLE \"SYS_USER\" (\n    \
             \"ID\" NUMBER(19) GENERATED BY DEFAULT AS IDENTITY NOT NULL,\n    \
             \"USERNAME\" VARCHAR2(50) NOT NULL,\n    \
             \"EMAIL\" VARCHAR2(100) NULL,\n    \
             PRIMARY KEY (\"ID\")\n\
             );"
        );
    }

    #[test]
    fn test_default_precedes_nullability() {
        let col = ColumnDescriptor::new("status", "Integer")
            .with_nullable(false)
            .with_default_value("1");
        assert_eq!(
            strategy().column_definition(&col),
            "\"STATUS\" NUMBER(10) DEFAULT 1 NOT NULL"
        );
    }

    #[test]
    fn test_create_table_empty_columns() {
        let sql = strategy().generate_create_table(&TableDescriptor::new("empty_table"));
        assert!(sql.contains("CREATE TABLE"));
        assert!(sql.contains("EMPTY_TABLE"));
    }

    #[test]
    fn test_alter_statements() {
        let s = strategy();
        let col = ColumnDescriptor::new("age", "Integer").with_comment("age");
        assert_eq!(
            s.generate_alter_table_add_column(&TableDescriptor::new("sys_user").with_column(col.clone())),
            vec![
                "ALTER TABLE \"SYS_USER\" ADD \"AGE\" NUMBER(10) NULL;",
                "COMMENT ON COLUMN \"SYS_USER\".\"AGE\" IS 'age';",
            ]
        );
        assert_eq!(
            s.generate_modify_column("sys_user", &col),
            "ALTER TABLE \"SYS_USER\" MODIFY (\"AGE\" NUMBER(10) NULL);"
        );
        assert_eq!(
            s.generate_drop_column("sys_user", "age"),
            "ALTER TABLE \"SYS_USER\" DROP COLUMN \"AGE\";"
        );
        assert_eq!(
            s.generate_drop_table("sys_user"),
            "DROP TABLE \"SYS_USER\" CASCADE CONSTRAINTS;"
        );
    }

    #[test]
    fn test_add_comment() {
        let sql = strategy().generate_add_comment(&sys_user()).unwrap();
        assert!(sql.starts_with("COMMENT ON TABLE \"SYS_USER\" IS 'system user';"));
        assert!(sql.contains("COMMENT ON COLUMN \"SYS_USER\".\"USERNAME\" IS 'login name';"));
    }

    #[test]
    fn test_constraints() {
        let s = strategy();
        let fk = ForeignKeyInfo::new("fk_order_user", "t_order", "user_id", "sys_user", "id");
        assert_eq!(
            s.generate_add_foreign_key("t_order", &fk).unwrap(),
            "ALTER TABLE \"T_ORDER\" ADD CONSTRAINT \"FK_ORDER_USER\" FOREIGN KEY (\"USER_ID\") REFERENCES \"SYS_USER\" (\"ID\");"
        );
        let index = IndexDefinition::new("idx_email", "sys_user", ["email"]);
        assert_eq!(
            s.generate_create_index("sys_user", &index),
            "CREATE INDEX \"IDX_EMAIL\" ON \"SYS_USER\" (\"EMAIL\");"
        );
    }
}
