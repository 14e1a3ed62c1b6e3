//! MySQL DDL strategy.
//!
//! Columns carry their comments inline, and the CREATE TABLE trailer pins the
//! InnoDB engine and the utf8mb4 character set.

use std::sync::Arc;

use super::types::mysql_column_mapper;
use crate::config::GeneratorConfig;
use crate::core::identifier::{quote_backtick, string_literal};
use crate::core::schema::{ColumnDescriptor, TableDescriptor};
use crate::core::traits::DdlStrategy;
use crate::core::DatabaseType;
use crate::dialect::ColumnTypeMapper;
use crate::drivers::common::{create_table, default_clause, nullability, primary_key_clause};

const TABLE_OPTIONS: &str = " ENGINE=InnoDB DEFAULT CHARSET=utf8mb4";

/// MySQL DDL strategy.
///
/// Compatible with MySQL 5.7+, 8.0+, and MariaDB 10.2+.
#[derive(Debug)]
pub struct MysqlStrategy {
    mapper: ColumnTypeMapper,
}

impl MysqlStrategy {
    pub fn new(config: Arc<GeneratorConfig>) -> Self {
        Self {
            mapper: mysql_column_mapper(config),
        }
    }
}

impl DdlStrategy for MysqlStrategy {
    fn dialect(&self) -> DatabaseType {
        DatabaseType::Mysql
    }

    fn quote_ident(&self, name: &str) -> String {
        quote_backtick(name)
    }

    fn column_mapper(&self) -> &ColumnTypeMapper {
        &self.mapper
    }

    fn column_definition(&self, column: &ColumnDescriptor) -> String {
        let mut parts = vec![
            self.quote_ident(&column.name),
            self.column_type(column),
            nullability(column).to_string(),
        ];
        // AUTO_INCREMENT columns cannot carry a DEFAULT
        if column.auto_increment {
            parts.push("AUTO_INCREMENT".to_string());
        } else if let Some(default) = default_clause(column) {
            parts.push(default);
        }
        if column.has_comment() {
            parts.push(format!("COMMENT {}", string_literal(&column.comment)));
        }
        parts.join(" ")
    }

    fn generate_create_table(&self, table: &TableDescriptor) -> String {
        let mut body: Vec<String> = table
            .columns
            .iter()
            .map(|c| self.column_definition(c))
            .collect();
        body.extend(primary_key_clause(self, table));

        let mut trailer = TABLE_OPTIONS.to_string();
        if !table.comment.trim().is_empty() {
            trailer.push_str(&format!(" COMMENT={}", string_literal(&table.comment)));
        }

        create_table(
            &format!(
                "CREATE TABLE {}",
                self.table_ref(&table.name, &table.database_name)
            ),
            &body,
            &trailer,
        )
    }

    fn generate_modify_column(&self, table: &str, column: &ColumnDescriptor) -> String {
        format!(
            "ALTER TABLE {} MODIFY COLUMN {};",
            self.quote_ident(table),
            self.column_definition(column)
        )
    }

    /// Comments are part of the table and column definitions, so re-applying
    /// them means `ALTER TABLE ... COMMENT` and a `MODIFY COLUMN` per
    /// commented column.
    fn generate_add_comment(&self, table: &TableDescriptor) -> Option<String> {
        if !table.has_comments() {
            return None;
        }
        let target = self.table_ref(&table.name, &table.database_name);
        let mut statements = Vec::new();
        if !table.comment.trim().is_empty() {
            statements.push(format!(
                "ALTER TABLE {} COMMENT = {};",
                target,
                string_literal(&table.comment)
            ));
        }
        for column in table.columns.iter().filter(|c| c.has_comment()) {
            statements.push(format!(
                "ALTER TABLE {} MODIFY COLUMN {};",
                target,
                self.column_definition(column)
            ));
        }
        Some(statements.join("\n"))
    }
}
