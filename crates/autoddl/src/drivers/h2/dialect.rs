//! H2 DDL strategy.

use std::sync::Arc;

use super::types::h2_column_mapper;
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

/// H2 DDL strategy.
#[derive(Debug)]
pub struct H2Strategy {
    mapper: ColumnTypeMapper,
}

impl H2Strategy {
    pub fn new(config: Arc<GeneratorConfig>) -> Self {
        Self {
            mapper: h2_column_mapper(config),
        }
    }
}

impl DdlStrategy for H2Strategy {
    fn dialect(&self) -> DatabaseType {
        DatabaseType::H2
    }

    fn quote_ident(&self, name: &str) -> String {
        quote_double(name)
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

    fn column_comment_sql(&self, target: &str, column: &ColumnDescriptor) -> Option<String> {
        column
            .has_comment()
            .then(|| column_comment_on(self, target, column))
    }

    fn generate_modify_column(&self, table: &str, column: &ColumnDescriptor) -> String {
        let alter = format!(
            "ALTER TABLE {} ALTER COLUMN {}",
            self.quote_ident(table),
            self.quote_ident(&column.name)
        );
        let null_change = if column.nullable {
            "SET NULL"
        } else {
            "SET NOT NULL"
        };
        format!(
            "{alter} SET DATA TYPE {};\n{alter} {};",
            self.column_type(column),
            null_change
        )
    }

    fn generate_add_comment(&self, table: &TableDescriptor) -> Option<String> {
        comment_on_statements(self, table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drivers::fixtures::{config, sys_user};

    fn strategy() -> H2Strategy {
        H2Strategy::new(config())
    }

    #[test]
    fn test_create_table_layout() {
        let sql = strategy().generate_create_table(&sys_user());
        assert_eq!(
            sql,
            "CREATE TABLE \"sys_user\" (\n    \
             \"id\" BIGINT GENERATED BY DEFAULT AS IDENTITY NOT NULL,\n    \
             \"username\" VARCHAR(50) NOT NULL,\n    \
             \"email\" VARCHAR(100) NULL,\n    \
             PRIMARY KEY (\"id\")\n\
             );"
        );
    }

    #[test]
    fn test_modify_column() {
        let col = ColumnDescriptor::new("age", "Integer").with_nullable(false);
        assert_eq!(
            strategy().generate_modify_column("sys_user", &col),
            "ALTER TABLE \"sys_user\" ALTER COLUMN \"age\" SET DATA TYPE INTEGER;\n\
             ALTER TABLE \"sys_user\" ALTER COLUMN \"age\" SET NOT NULL;"
        );
    }

    #[test]
    fn test_add_column_and_comment() {
        let s = strategy();
        let col = ColumnDescriptor::new("age", "Integer").with_comment("age");
        assert_eq!(
            s.generate_alter_table_add_column(&TableDescriptor::new("sys_user").with_column(col)),
            vec![
                "ALTER TABLE \"sys_user\" ADD COLUMN \"age\" INTEGER NULL;",
                "COMMENT ON COLUMN \"sys_user\".\"age\" IS 'age';",
            ]
        );
        assert!(s.generate_add_comment(&sys_user()).is_some());
    }
}
