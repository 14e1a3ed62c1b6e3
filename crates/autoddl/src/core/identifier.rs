//! Identifier validation, quoting, and string literal escaping.
//!
//! SQL identifiers cannot be bound as parameters, so generated DDL has to
//! embed them directly. Every name that reaches a strategy passes through
//! [`validate_identifier`] at descriptor validation time and through one of the
//! quoting functions at render time:
//!
//! - MySQL, TDengine: backticks (`` `name` ``)
//! - PostgreSQL, H2: double quotes, case preserved (`"name"`)
//! - Oracle, DM: double quotes, upper-cased (`"NAME"`)
//!
//! Embedded quote characters are escaped by doubling them.

use crate::error::{DdlError, Result};

/// Maximum identifier length (conservative limit across databases).
/// - PostgreSQL: 63 bytes
/// - MySQL: 64 characters
/// - Oracle 12.2+: 128 bytes
pub const MAX_IDENTIFIER_LENGTH: usize = 128;

/// Validate an identifier for security issues.
///
/// Rejects:
/// - Empty identifiers
/// - Identifiers containing null bytes (injection vector)
/// - Identifiers exceeding maximum length
pub fn validate_identifier(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(DdlError::invalid("Identifier cannot be empty"));
    }

    if name.contains('\0') {
        return Err(DdlError::invalid(format!(
            "Identifier contains null byte: {:?}",
            name
        )));
    }

    if name.len() > MAX_IDENTIFIER_LENGTH {
        return Err(DdlError::invalid(format!(
            "Identifier exceeds maximum length of {} bytes (got {} bytes): {:?}",
            MAX_IDENTIFIER_LENGTH,
            name.len(),
            name
        )));
    }

    Ok(())
}

/// Quote an identifier with backticks (MySQL, TDengine).
///
/// ```ignore
/// assert_eq!(quote_backtick("users"), "`users`");
/// assert_eq!(quote_backtick("table`name"), "`table``name`");
/// ```
pub fn quote_backtick(name: &str) -> String {
    format!("`{}`", name.replace('`', "``"))
}

/// Quote an identifier with double quotes, preserving case (PostgreSQL, H2).
pub fn quote_double(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

/// Quote an identifier with double quotes after upper-casing it (Oracle, DM).
///
/// Both databases fold unquoted identifiers to upper case, so quoting the
/// upper-cased name keeps the object reachable without quotes.
pub fn quote_upper(name: &str) -> String {
    quote_double(&name.to_uppercase())
}

/// Prefix an already-quoted table with an already-quoted database name.
///
/// An empty database leaves the table unqualified.
pub fn qualify(quoted_database: Option<String>, quoted_table: String) -> String {
    match quoted_database {
        Some(db) => format!("{}.{}", db, quoted_table),
        None => quoted_table,
    }
}

/// Render a SQL string literal, doubling embedded single quotes.
pub fn string_literal(text: &str) -> String {
    format!("'{}'", text.replace('\'', "''"))
}
