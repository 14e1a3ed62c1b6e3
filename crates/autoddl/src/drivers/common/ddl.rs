//! Shared DDL layout helpers.

use crate::core::identifier::string_literal;
use crate::core::schema::{ColumnDescriptor, TableDescriptor};
use crate::core::traits::DdlStrategy;

/// Column indentation inside CREATE TABLE.
const INDENT: &str = "    ";

/// `NOT NULL` or `NULL`.
pub fn nullability(column: &ColumnDescriptor) -> &'static str {
    if column.nullable {
        "NULL"
    } else {
        "NOT NULL"
    }
}

/// `DEFAULT <expr>` when the column declares a default.
pub fn default_clause(column: &ColumnDescriptor) -> Option<String> {
    column
        .default_value
        .as_deref()
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .map(|d| format!("DEFAULT {}", d))
}

/// `PRIMARY KEY (a, b)` over the columns flagged as primary key.
pub fn primary_key_clause<S: DdlStrategy + ?Sized>(
    strategy: &S,
    table: &TableDescriptor,
) -> Option<String> {
    let keys = table.primary_key_columns();
    if keys.is_empty() {
        return None;
    }
    let names = keys
        .iter()
        .map(|c| strategy.quote_ident(&c.name))
        .collect::<Vec<_>>()
        .join(", ");
    Some(format!("PRIMARY KEY ({})", names))
}

/// Lay out a CREATE TABLE statement.
///
/// `head` is everything before the opening parenthesis, `trailer` everything
/// between the closing parenthesis and the terminating semicolon. An empty
/// body renders as `()`.
pub fn create_table(head: &str, body: &[String], trailer: &str) -> String {
    if body.is_empty() {
        return format!("{} (){};", head, trailer);
    }
    let lines = body
        .iter()
        .map(|line| format!("{}{}", INDENT, line))
        .collect::<Vec<_>>()
        .join(",\n");
    format!("{} (\n{}\n){};", head, lines, trailer)
}

/// `COMMENT ON TABLE` / `COMMENT ON COLUMN` statements, one per line.
///
/// Returns `None` when neither the table nor any column has a comment.
pub fn comment_on_statements<S: DdlStrategy + ?Sized>(
    strategy: &S,
    table: &TableDescriptor,
) -> Option<String> {
    if !table.has_comments() {
        return None;
    }
    let target = strategy.table_ref(&table.name, &table.database_name);
    let mut statements = Vec::new();
    if !table.comment.trim().is_empty() {
        statements.push(format!(
            "COMMENT ON TABLE {} IS {};",
            target,
            string_literal(&table.comment)
        ));
    }
    for column in table.columns.iter().filter(|c| c.has_comment()) {
        statements.push(column_comment_on(strategy, &target, column));
    }
    Some(statements.join("\n"))
}

/// `COMMENT ON COLUMN target.column IS '...';`
pub fn column_comment_on<S: DdlStrategy + ?Sized>(
    strategy: &S,
    target: &str,
    column: &ColumnDescriptor,
) -> String {
    format!(
        "COMMENT ON COLUMN {}.{} IS {};",
        target,
        strategy.quote_ident(&column.name),
        string_literal(&column.comment)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nullability() {
        let col = ColumnDescriptor::new("a", "String");
        assert_eq!(nullability(&col), "NULL");
        assert_eq!(nullability(&col.with_nullable(false)), "NOT NULL");
    }

    #[test]
    fn test_default_clause() {
        let col = ColumnDescriptor::new("status", "Integer");
        assert_eq!(default_clause(&col), None);
        assert_eq!(
            default_clause(&col.clone().with_default_value("0")),
            Some("DEFAULT 0".to_string())
        );
        assert_eq!(default_clause(&col.with_default_value("  ")), None);
    }

    #[test]
    fn test_create_table_layout() {
        let sql = create_table(
            "CREATE TABLE t",
            &["a INT".to_string(), "PRIMARY KEY (a)".to_string()],
            "",
        );
        assert_eq!(sql, "CREATE TABLE t (\n    a INT,\n    PRIMARY KEY (a)\n);");
    }

    #[test]
    fn test_create_table_empty_body() {
        assert_eq!(create_table("CREATE TABLE t", &[], " X=1"), "CREATE TABLE t () X=1;");
    }
}
