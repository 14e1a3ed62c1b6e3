//! DM (Dameng) DDL strategy.

use std::sync::Arc;

use super::types::dm_column_mapper;
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

/// DM DDL strategy.
///
/// Oracle-compatible identifier handling (upper-cased, double-quoted) with
/// `IDENTITY(1,1)` auto-increment columns.
#[derive(Debug)]
pub struct DmStrategy {
    mapper: ColumnTypeMapper,
}

impl DmStrategy {
    pub fn new(config: Arc<GeneratorConfig>) -> Self {
        Self {
            mapper: dm_column_mapper(config),
        }
    }
}

impl DdlStrategy for DmStrategy {
    fn dialect(&self) -> DatabaseType {
        DatabaseType::Dm
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
            parts.push("IDENTITY(1,1)".to_string());
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
            "ALTER TABLE {} MODIFY {};",
            self.quote_ident(table),
            self.column_definition(column)
        )
    }

    fn generate_add_comment(&self, table: &TableDescriptor) -> Option<String> {
        comment_on_statements(self, table)
    }
}
