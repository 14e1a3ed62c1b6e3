//! Schema model for DDL generation: tables, columns, foreign keys, indexes,
//! and many-to-many junction tables.
//!
//! These types are dialect-agnostic value objects. They are built by the caller
//! (a source scanner, a YAML file, a test) and lowered into SQL text by a
//! [`DdlStrategy`](super::traits::DdlStrategy). Modifications use the `with_*`
//! copy-with-overrides builders rather than mutation.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::identifier::validate_identifier;
use crate::config::AuditColumns;
use crate::error::{DdlError, Result};

fn default_true() -> bool {
    true
}

fn default_id() -> String {
    "id".to_string()
}

/// Column metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDescriptor {
    /// Column name.
    pub name: String,

    /// Source-language type name, fully qualified or simple
    /// (e.g. `java.lang.String`, `BigDecimal`).
    #[serde(rename = "type")]
    pub source_type: String,

    /// Column comment (empty when none).
    #[serde(default)]
    pub comment: String,

    /// Whether the column accepts NULL.
    #[serde(default = "default_true")]
    pub nullable: bool,

    /// Whether the column is part of the primary key.
    #[serde(default)]
    pub primary_key: bool,

    /// Whether the column is auto-incremented (identity).
    #[serde(default)]
    pub auto_increment: bool,

    /// Maximum length for string-like columns. `None` means the dialect default.
    #[serde(default)]
    pub length: Option<u32>,

    /// Numeric precision for decimal columns.
    #[serde(default)]
    pub precision: Option<u32>,

    /// Numeric scale for decimal columns.
    #[serde(default)]
    pub scale: Option<u32>,

    /// Default value expression, rendered verbatim after `DEFAULT`.
    #[serde(default)]
    pub default_value: Option<String>,

    /// Literal SQL type that bypasses type mapping entirely.
    #[serde(default)]
    pub column_definition: Option<String>,
}

impl ColumnDescriptor {
    /// Create a nullable, non-key column.
    pub fn new(name: impl Into<String>, source_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source_type: source_type.into(),
            comment: String::new(),
            nullable: true,
            primary_key: false,
            auto_increment: false,
            length: None,
            precision: None,
            scale: None,
            default_value: None,
            column_definition: None,
        }
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }

    pub fn with_nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    /// Mark as primary key. Primary key columns are never nullable.
    pub fn with_primary_key(mut self, primary_key: bool) -> Self {
        self.primary_key = primary_key;
        if primary_key {
            self.nullable = false;
        }
        self
    }

    pub fn with_auto_increment(mut self, auto_increment: bool) -> Self {
        self.auto_increment = auto_increment;
        self
    }

    pub fn with_length(mut self, length: u32) -> Self {
        self.length = Some(length);
        self
    }

    pub fn with_precision(mut self, precision: u32, scale: Option<u32>) -> Self {
        self.precision = Some(precision);
        self.scale = scale;
        self
    }

    pub fn with_default_value(mut self, default_value: impl Into<String>) -> Self {
        self.default_value = Some(default_value.into());
        self
    }

    pub fn with_column_definition(mut self, definition: impl Into<String>) -> Self {
        self.column_definition = Some(definition.into());
        self
    }

    /// The source type with any package or namespace prefix stripped.
    pub fn simple_type_name(&self) -> &str {
        simple_name(&self.source_type)
    }

    /// Whether the column has a non-blank comment.
    pub fn has_comment(&self) -> bool {
        !self.comment.trim().is_empty()
    }

    /// Validate the column in isolation.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(DdlError::invalid("column name cannot be blank"));
        }
        validate_identifier(&self.name)
            .map_err(|e| DdlError::invalid(format!("column '{}': {}", self.name, e)))?;
        if self.source_type.trim().is_empty() {
            return Err(DdlError::invalid(format!(
                "column '{}' has no source type",
                self.name
            )));
        }
        if self.length == Some(0) {
            return Err(DdlError::invalid(format!(
                "column '{}' has a zero length",
                self.name
            )));
        }
        if self.precision == Some(0) {
            return Err(DdlError::invalid(format!(
                "column '{}' has a zero precision",
                self.name
            )));
        }
        if self.scale.is_some() && self.precision.is_none() {
            return Err(DdlError::invalid(format!(
                "column '{}' has a scale but no precision",
                self.name
            )));
        }
        Ok(())
    }
}

/// Strip a namespace prefix: `java.lang.String` becomes `String`.
pub fn simple_name(type_name: &str) -> &str {
    let trimmed = type_name.trim();
    match trimmed.rfind(|c: char| c == '.' || c == '$') {
        Some(pos) => &trimmed[pos + 1..],
        None => trimmed,
    }
}

/// Table metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableDescriptor {
    /// Table name.
    pub name: String,

    /// Table comment (empty when none).
    #[serde(default)]
    pub comment: String,

    /// Columns in declaration order. Order is preserved in generated DDL.
    #[serde(default)]
    pub columns: Vec<ColumnDescriptor>,

    /// Name of the column designated primary key.
    #[serde(default)]
    pub primary_key: Option<String>,

    /// Database (catalog/schema) prefix. Empty means the connection default.
    #[serde(default)]
    pub database_name: String,
}

impl TableDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            comment: String::new(),
            columns: Vec::new(),
            primary_key: None,
            database_name: String::new(),
        }
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }

    pub fn with_column(mut self, column: ColumnDescriptor) -> Self {
        self.columns.push(column);
        self
    }

    pub fn with_columns(mut self, columns: impl IntoIterator<Item = ColumnDescriptor>) -> Self {
        self.columns.extend(columns);
        self
    }

    pub fn with_primary_key(mut self, column_name: impl Into<String>) -> Self {
        self.primary_key = Some(column_name.into());
        self
    }

    pub fn with_database_name(mut self, database_name: impl Into<String>) -> Self {
        self.database_name = database_name.into();
        self
    }

    /// Columns that are not part of the primary key.
    pub fn non_primary_columns(&self) -> Vec<&ColumnDescriptor> {
        self.columns.iter().filter(|c| !c.primary_key).collect()
    }

    /// The column named by `primary_key`, if any column matches.
    ///
    /// A `primary_key` that matches no column yields `None` rather than an error.
    pub fn primary_key_column(&self) -> Option<&ColumnDescriptor> {
        let pk = self.primary_key.as_deref()?;
        self.columns.iter().find(|c| c.name == pk)
    }

    /// Columns flagged as primary key, in declaration order.
    pub fn primary_key_columns(&self) -> Vec<&ColumnDescriptor> {
        self.columns.iter().filter(|c| c.primary_key).collect()
    }

    /// Look up a column by name.
    pub fn column(&self, name: &str) -> Option<&ColumnDescriptor> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Whether the table or any of its columns carries a comment.
    pub fn has_comments(&self) -> bool {
        !self.comment.trim().is_empty() || self.columns.iter().any(|c| c.has_comment())
    }

    /// Copy of this table without the configured audit columns.
    ///
    /// Primary key columns are kept even when their name is an audit name,
    /// since foreign keys and the PRIMARY KEY clause refer to them.
    pub fn without_audit_columns(&self, audit: &AuditColumns) -> Self {
        let declared_pk = self.primary_key.as_deref();
        Self {
            columns: self
                .columns
                .iter()
                .filter(|c| {
                    c.primary_key
                        || declared_pk == Some(c.name.as_str())
                        || !audit.matches(&c.name)
                })
                .cloned()
                .collect(),
            ..self.clone()
        }
    }

    /// Validate table structure before generation.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(DdlError::invalid("table name cannot be blank"));
        }
        validate_identifier(&self.name)
            .map_err(|e| DdlError::invalid(format!("table '{}': {}", self.name, e)))?;

        let mut seen = HashSet::new();
        for column in &self.columns {
            column
                .validate()
                .map_err(|e| DdlError::invalid(format!("table '{}': {}", self.name, e)))?;
            if !seen.insert(column.name.to_lowercase()) {
                return Err(DdlError::invalid(format!(
                    "table '{}' declares column '{}' more than once",
                    self.name, column.name
                )));
            }
        }
        Ok(())
    }
}

/// A foreign key from one column to a column of another table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForeignKeyInfo {
    /// Constraint name.
    pub name: String,
    /// Referencing table.
    pub table_name: String,
    /// Referencing column.
    pub column_name: String,
    /// Referenced table.
    pub referenced_table: String,
    /// Referenced column.
    #[serde(default = "default_id")]
    pub referenced_column: String,
}

impl ForeignKeyInfo {
    pub fn new(
        name: impl Into<String>,
        table_name: impl Into<String>,
        column_name: impl Into<String>,
        referenced_table: impl Into<String>,
        referenced_column: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            table_name: table_name.into(),
            column_name: column_name.into(),
            referenced_table: referenced_table.into(),
            referenced_column: referenced_column.into(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        for (what, value) in [
            ("name", &self.name),
            ("table_name", &self.table_name),
            ("column_name", &self.column_name),
            ("referenced_table", &self.referenced_table),
            ("referenced_column", &self.referenced_column),
        ] {
            if value.trim().is_empty() {
                return Err(DdlError::invalid(format!("foreign key {} cannot be blank", what)));
            }
        }
        Ok(())
    }
}

/// An index over one or more columns of a table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexDefinition {
    /// Index name.
    pub name: String,
    /// Indexed table.
    pub table_name: String,
    /// Indexed columns, in key order.
    pub columns: Vec<String>,
    /// Whether the index enforces uniqueness.
    #[serde(default)]
    pub unique: bool,
}

impl IndexDefinition {
    pub fn new(
        name: impl Into<String>,
        table_name: impl Into<String>,
        columns: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            name: name.into(),
            table_name: table_name.into(),
            columns: columns.into_iter().map(Into::into).collect(),
            unique: false,
        }
    }

    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(DdlError::invalid("index name cannot be blank"));
        }
        if self.table_name.trim().is_empty() {
            return Err(DdlError::invalid(format!(
                "index '{}' has no table",
                self.name
            )));
        }
        if self.columns.is_empty() || self.columns.iter().any(|c| c.trim().is_empty()) {
            return Err(DdlError::invalid(format!(
                "index '{}' needs at least one non-blank column",
                self.name
            )));
        }
        Ok(())
    }
}

/// A junction table linking two tables in a many-to-many relationship.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManyToManyTable {
    /// Junction table name.
    pub table_name: String,
    /// Owning side table.
    pub left_table: String,
    /// Junction column referencing the owning side.
    pub left_column: String,
    /// Inverse side table.
    pub right_table: String,
    /// Junction column referencing the inverse side.
    pub right_column: String,
    /// Referenced key on the owning side.
    #[serde(default = "default_id")]
    pub left_referenced_column: String,
    /// Referenced key on the inverse side.
    #[serde(default = "default_id")]
    pub right_referenced_column: String,
}

impl ManyToManyTable {
    pub fn new(
        table_name: impl Into<String>,
        left_table: impl Into<String>,
        left_column: impl Into<String>,
        right_table: impl Into<String>,
        right_column: impl Into<String>,
    ) -> Self {
        Self {
            table_name: table_name.into(),
            left_table: left_table.into(),
            left_column: left_column.into(),
            right_table: right_table.into(),
            right_column: right_column.into(),
            left_referenced_column: default_id(),
            right_referenced_column: default_id(),
        }
    }

    /// The two foreign keys of the junction table, owning side first.
    ///
    /// Constraint names follow `fk_<junction>_<column>`.
    pub fn foreign_keys(&self) -> [ForeignKeyInfo; 2] {
        [
            ForeignKeyInfo::new(
                format!("fk_{}_{}", self.table_name, self.left_column),
                &self.table_name,
                &self.left_column,
                &self.left_table,
                &self.left_referenced_column,
            ),
            ForeignKeyInfo::new(
                format!("fk_{}_{}", self.table_name, self.right_column),
                &self.table_name,
                &self.right_column,
                &self.right_table,
                &self.right_referenced_column,
            ),
        ]
    }

    pub fn validate(&self) -> Result<()> {
        for (what, value) in [
            ("table_name", &self.table_name),
            ("left_table", &self.left_table),
            ("left_column", &self.left_column),
            ("right_table", &self.right_table),
            ("right_column", &self.right_column),
        ] {
            if value.trim().is_empty() {
                return Err(DdlError::invalid(format!(
                    "many-to-many {} cannot be blank",
                    what
                )));
            }
        }
        if self.left_column == self.right_column {
            return Err(DdlError::invalid(format!(
                "junction table '{}' uses '{}' for both sides",
                self.table_name, self.left_column
            )));
        }
        Ok(())
    }
}

/// A complete schema description: tables plus the auxiliary descriptors that
/// reference them. This is the file format accepted by the command line tool.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaDocument {
    #[serde(default)]
    pub tables: Vec<TableDescriptor>,
    #[serde(default)]
    pub foreign_keys: Vec<ForeignKeyInfo>,
    #[serde(default)]
    pub indexes: Vec<IndexDefinition>,
    #[serde(default)]
    pub many_to_many: Vec<ManyToManyTable>,
}

impl SchemaDocument {
    pub fn from_tables(tables: Vec<TableDescriptor>) -> Self {
        Self {
            tables,
            ..Self::default()
        }
    }

    /// Parse a document from YAML.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let doc: SchemaDocument = serde_yaml::from_str(yaml)?;
        doc.validate()?;
        Ok(doc)
    }

    /// Parse a document from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        let doc: SchemaDocument = serde_json::from_str(json)?;
        doc.validate()?;
        Ok(doc)
    }

    /// Load a document, choosing JSON for `.json` files and YAML otherwise.
    pub fn load<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("json"));
        if is_json {
            Self::from_json(&content)
        } else {
            Self::from_yaml(&content)
        }
    }

    /// Foreign keys declared on the given table.
    pub fn foreign_keys_for<'a>(
        &'a self,
        table: &'a str,
    ) -> impl Iterator<Item = &'a ForeignKeyInfo> + 'a {
        self.foreign_keys.iter().filter(move |fk| fk.table_name == table)
    }

    /// Indexes declared on the given table.
    pub fn indexes_for<'a>(&'a self, table: &'a str) -> impl Iterator<Item = &'a IndexDefinition> + 'a {
        self.indexes.iter().filter(move |idx| idx.table_name == table)
    }

    /// Validate every descriptor in the document.
    pub fn validate(&self) -> Result<()> {
        let mut names = HashSet::new();
        for table in &self.tables {
            table.validate()?;
            if !names.insert(table.name.to_lowercase()) {
                return Err(DdlError::invalid(format!(
                    "table '{}' is declared more than once",
                    table.name
                )));
            }
        }
        for fk in &self.foreign_keys {
            fk.validate()?;
        }
        for index in &self.indexes {
            index.validate()?;
        }
        for junction in &self.many_to_many {
            junction.validate()?;
        }
        Ok(())
    }
}
