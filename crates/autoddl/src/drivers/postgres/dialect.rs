//! PostgreSQL DDL strategy.

use std::sync::Arc;

use super::types::postgres_column_mapper;
use crate::config::GeneratorConfig;
use crate::core::identifier::quote_double;
use crate::core::schema::{ColumnDescriptor, TableDescriptor};
use crate::core::traits::DdlStrategy;
use crate::core::DatabaseType;
use crate::dialect::ColumnTypeMapper;
use crate::drivers::common::{
    column_comment_on, comment_on_statements, create_table, default_clause, nullability,
    primary_key_clause,
};

/// PostgreSQL DDL strategy.
///
/// Identifiers are double-quoted with their case preserved. Auto-increment
/// columns use identity columns rather than SERIAL, and comments are always
/// separate `COMMENT ON` statements.
#[derive(Debug)]
pub struct PostgresStrategy {
    mapper: ColumnTypeMapper,
}

impl PostgresStrategy {
    pub fn new(config: Arc<GeneratorConfig>) -> Self {
        Self {
            mapper: postgres_column_mapper(config),
        }
    }

    /// `CREATE SEQUENCE IF NOT EXISTS` with increment and start of 1.
    pub fn generate_create_sequence(&self, name: &str) -> String {
        format!(
            "CREATE SEQUENCE IF NOT EXISTS {} INCREMENT BY 1 START WITH 1;",
            self.quote_ident(name)
        )
    }
}

impl DdlStrategy for PostgresStrategy {
    fn dialect(&self) -> DatabaseType {
        DatabaseType::Postgresql
    }

    fn quote_ident(&self, name: &str) -> String {
        quote_double(name)
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
        if column.auto_increment {
            parts.push("GENERATED BY DEFAULT AS IDENTITY".to_string());
        } else if let Some(default) = default_clause(column) {
            parts.push(default);
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
        create_table(
            &format!(
                "CREATE TABLE {}",
                self.table_ref(&table.name, &table.database_name)
            ),
            &body,
            "",
        )
    }

    fn column_comment_sql(&self, target: &str, column: &ColumnDescriptor) -> Option<String> {
        column
            .has_comment()
            .then(|| column_comment_on(self, target, column))
    }

    /// Type, nullability, and default are altered by separate statements,
    /// one per line.
    fn generate_modify_column(&self, table: &str, column: &ColumnDescriptor) -> String {
        let alter = format!(
            "ALTER TABLE {} ALTER COLUMN {}",
            self.quote_ident(table),
            self.quote_ident(&column.name)
        );
        let mut statements = vec![format!("{} TYPE {};", alter, self.column_type(column))];
        if column.nullable {
            statements.push(format!("{} DROP NOT NULL;", alter));
        } else {
            statements.push(format!("{} SET NOT NULL;", alter));
        }
        if let Some(default) = default_clause(column) {
            statements.push(format!("{} SET {};", alter, default));
        }
        statements.join("\n")
    }

    fn generate_add_comment(&self, table: &TableDescriptor) -> Option<String> {
        comment_on_statements(self, table)
    }
}
