//! The per-dialect DDL rendering strategy.

use std::fmt;

use super::database::DatabaseType;
use super::identifier::qualify;
use super::schema::{ColumnDescriptor, ForeignKeyInfo, IndexDefinition, ManyToManyTable, TableDescriptor};
use crate::dialect::ColumnTypeMapper;
use crate::error::Result;

/// DDL syntax strategy for one database dialect.
///
/// Lowers the dialect-agnostic schema model into SQL text. Every statement
/// returned is terminated and can be executed on its own.
///
/// # Design Pattern
///
/// This is a **Strategy** pattern with **Template Method** defaults: the
/// required methods cover what differs between dialects (quoting, column
/// layout, CREATE TABLE trailer, ALTER syntax, comments), and the provided
/// methods build indexes, foreign keys, and junction tables on top of them.
///
/// Methods taking a `table: &str` expect the raw (unquoted) table name.
pub trait DdlStrategy: Send + Sync + fmt::Debug {
    /// The dialect this strategy renders.
    fn dialect(&self) -> DatabaseType;

    /// Whether this strategy renders the given dialect.
    fn supports(&self, dialect: DatabaseType) -> bool {
        self.dialect() == dialect
    }

    /// Quote an identifier (table name, column name, constraint name).
    fn quote_ident(&self, name: &str) -> String;

    /// Column type resolution for this dialect.
    fn column_mapper(&self) -> &ColumnTypeMapper;

    /// SQL type of a column.
    fn column_type(&self, column: &ColumnDescriptor) -> String {
        self.column_mapper().map_field_to_column_type(column)
    }

    /// Quoted table reference, prefixed by the database when one is given.
    fn table_ref(&self, table: &str, database: &str) -> String {
        let db = (!database.trim().is_empty()).then(|| self.quote_ident(database));
        qualify(db, self.quote_ident(table))
    }

    /// Full column definition as it appears inside CREATE TABLE.
    fn column_definition(&self, column: &ColumnDescriptor) -> String;

    /// `CREATE TABLE` for a table, with a PRIMARY KEY clause when any column
    /// is flagged as primary key.
    fn generate_create_table(&self, table: &TableDescriptor) -> String;

    /// `DROP TABLE` for a table.
    fn generate_drop_table(&self, table: &str) -> String {
        format!("DROP TABLE IF EXISTS {};", self.quote_ident(table))
    }

    /// ADD COLUMN statement against an already rendered table reference.
    fn add_column_sql(&self, target: &str, column: &ColumnDescriptor) -> String {
        format!(
            "ALTER TABLE {} ADD COLUMN {};",
            target,
            self.column_definition(column)
        )
    }

    /// Separate comment statement for a column, for dialects without inline
    /// column comments.
    fn column_comment_sql(&self, _target: &str, _column: &ColumnDescriptor) -> Option<String> {
        None
    }

    /// Add a single column to a table.
    fn generate_add_column(&self, table: &str, column: &ColumnDescriptor) -> String {
        self.add_column_sql(&self.table_ref(table, ""), column)
    }

    /// Add every column of a table to an existing table: one statement per
    /// column, each followed by its comment statement where comments are
    /// separate statements.
    fn generate_alter_table_add_column(&self, table: &TableDescriptor) -> Vec<String> {
        let target = self.table_ref(&table.name, &table.database_name);
        let mut statements = Vec::with_capacity(table.columns.len());
        for column in &table.columns {
            statements.push(self.add_column_sql(&target, column));
            if let Some(comment) = self.column_comment_sql(&target, column) {
                statements.push(comment);
            }
        }
        statements
    }

    /// Drop a column.
    fn generate_drop_column(&self, table: &str, column: &str) -> String {
        format!(
            "ALTER TABLE {} DROP COLUMN {};",
            self.quote_ident(table),
            self.quote_ident(column)
        )
    }

    /// Change a column's type, nullability, and default.
    fn generate_modify_column(&self, table: &str, column: &ColumnDescriptor) -> String;

    /// Whether the dialect has foreign key constraints.
    fn supports_foreign_keys(&self) -> bool {
        true
    }

    /// `ALTER TABLE ... ADD CONSTRAINT ... FOREIGN KEY`.
    fn generate_add_foreign_key(&self, table: &str, fk: &ForeignKeyInfo) -> Result<String> {
        Ok(format!(
            "ALTER TABLE {} ADD CONSTRAINT {} FOREIGN KEY ({}) REFERENCES {} ({});",
            self.quote_ident(table),
            self.quote_ident(&fk.name),
            self.quote_ident(&fk.column_name),
            self.quote_ident(&fk.referenced_table),
            self.quote_ident(&fk.referenced_column)
        ))
    }

    /// Table and column comment statements, or `None` when the table has no
    /// comments or the dialect cannot store them.
    fn generate_add_comment(&self, table: &TableDescriptor) -> Option<String>;

    /// `CREATE [UNIQUE] INDEX name ON table (cols);`
    fn generate_create_index(&self, table: &str, index: &IndexDefinition) -> String {
        let columns = index
            .columns
            .iter()
            .map(|c| self.quote_ident(c))
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "CREATE {}INDEX {} ON {} ({});",
            if index.unique { "UNIQUE " } else { "" },
            self.quote_ident(&index.name),
            self.quote_ident(table),
            columns
        )
    }

    /// Junction table with a composite primary key and no foreign keys.
    fn generate_many_to_many_table(&self, junction: &ManyToManyTable) -> String {
        self.generate_create_table(&junction_table(junction))
    }

    /// The two foreign keys of a junction table, owning side first.
    fn generate_many_to_many_table_foreign_keys(
        &self,
        junction: &ManyToManyTable,
    ) -> Result<Vec<String>> {
        junction
            .foreign_keys()
            .iter()
            .map(|fk| self.generate_add_foreign_key(&junction.table_name, fk))
            .collect()
    }
}

/// The table descriptor of a junction table: two non-null 64-bit key
/// columns forming the primary key.
pub fn junction_table(junction: &ManyToManyTable) -> TableDescriptor {
    let key = |name: &str| {
        ColumnDescriptor::new(name, "java.lang.Long").with_primary_key(true)
    };
    TableDescriptor::new(&junction.table_name)
        .with_column(key(&junction.left_column))
        .with_column(key(&junction.right_column))
}
