//! TDengine DDL strategy.
//!
//! TDengine is a time-series database: every table's first column is its
//! TIMESTAMP key, and there are no constraints. Columns render as name and
//! type only; foreign keys are unsupported and comments are never emitted.

use std::sync::Arc;

use tracing::warn;

use super::types::tdengine_column_mapper;
use crate::config::GeneratorConfig;
use crate::core::identifier::quote_backtick;
use crate::core::schema::{ColumnDescriptor, ForeignKeyInfo, IndexDefinition, TableDescriptor};
use crate::core::traits::DdlStrategy;
use crate::core::DatabaseType;
use crate::dialect::ColumnTypeMapper;
use crate::drivers::common::create_table;
use crate::error::{DdlError, Result};

/// Name of the timestamp key added when a table does not lead with one.
const TIMESTAMP_COLUMN: &str = "ts";

/// TDengine DDL strategy.
#[derive(Debug)]
pub struct TdengineStrategy {
    mapper: ColumnTypeMapper,
}

impl TdengineStrategy {
    pub fn new(config: Arc<GeneratorConfig>) -> Self {
        Self {
            mapper: tdengine_column_mapper(config),
        }
    }

    /// Column lines of a table, with the leading timestamp key added when
    /// the first column does not map to TIMESTAMP. A `ts` column declared
    /// later becomes that key instead of appearing twice.
    fn body(&self, columns: &[ColumnDescriptor]) -> Vec<String> {
        let leads_with_timestamp = columns
            .first()
            .is_some_and(|c| self.column_type(c) == "TIMESTAMP");
        if leads_with_timestamp {
            return columns.iter().map(|c| self.column_definition(c)).collect();
        }
        let mut body = Vec::with_capacity(columns.len() + 1);
        body.push(format!("{} TIMESTAMP", self.quote_ident(TIMESTAMP_COLUMN)));
        body.extend(
            columns
                .iter()
                .filter(|c| !c.name.eq_ignore_ascii_case(TIMESTAMP_COLUMN))
                .map(|c| self.column_definition(c)),
        );
        body
    }

    /// `CREATE STABLE` for a super table: the table's columns plus the tag
    /// columns that distinguish its subtables.
    pub fn generate_create_stable(&self, table: &TableDescriptor, tags: &[ColumnDescriptor]) -> String {
        let tags = tags
            .iter()
            .map(|t| self.column_definition(t))
            .collect::<Vec<_>>()
            .join(", ");
        create_table(
            &format!(
                "CREATE STABLE IF NOT EXISTS {}",
                self.table_ref(&table.name, &table.database_name)
            ),
            &self.body(&table.columns),
            &format!(" TAGS ({})", tags),
        )
    }
}

impl DdlStrategy for TdengineStrategy {
    fn dialect(&self) -> DatabaseType {
        DatabaseType::Tdengine
    }

    fn quote_ident(&self, name: &str) -> String {
        quote_backtick(name)
    }

    fn column_mapper(&self) -> &ColumnTypeMapper {
        &self.mapper
    }

    fn column_definition(&self, column: &ColumnDescriptor) -> String {
        format!("{} {}", self.quote_ident(&column.name), self.column_type(column))
    }

    fn generate_create_table(&self, table: &TableDescriptor) -> String {
        create_table(
            &format!(
                "CREATE TABLE IF NOT EXISTS {}",
                self.table_ref(&table.name, &table.database_name)
            ),
            &self.body(&table.columns),
            "",
        )
    }

    fn generate_modify_column(&self, table: &str, column: &ColumnDescriptor) -> String {
        format!(
            "ALTER TABLE {} MODIFY COLUMN {};",
            self.quote_ident(table),
            self.column_definition(column)
        )
    }

    fn supports_foreign_keys(&self) -> bool {
        false
    }

    fn generate_add_foreign_key(&self, _table: &str, _fk: &ForeignKeyInfo) -> Result<String> {
        Err(DdlError::unsupported(self.dialect(), "foreign keys"))
    }

    fn generate_add_comment(&self, _table: &TableDescriptor) -> Option<String> {
        None
    }

    /// Indexes cannot be unique; a unique index is created as a plain one.
    fn generate_create_index(&self, table: &str, index: &IndexDefinition) -> String {
        if index.unique {
            warn!(
                "TDengine has no unique indexes, creating {} as a plain index",
                index.name
            );
        }
        let columns = index
            .columns
            .iter()
            .map(|c| self.quote_ident(c))
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "CREATE INDEX {} ON {} ({});",
            self.quote_ident(&index.name),
            self.quote_ident(table),
            columns
        )
    }
}
