//! Configuration type definitions.

use serde::{Deserialize, Serialize};

use crate::core::DatabaseType;

/// Root configuration structure.
///
/// Every field has a default, so an empty mapping (`{}`) is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Field-name substrings that promote a string column to long text
    /// (matched case-insensitively).
    #[serde(default = "default_long_text_keywords")]
    pub long_text_keywords: Vec<String>,

    /// Dialects that render every string column as long text.
    #[serde(default)]
    pub long_text_dialects: Vec<DatabaseType>,

    /// Length used for string columns that declare none (default: 255).
    #[serde(default = "default_string_length")]
    pub default_string_length: u32,

    /// Names of the audit columns shared by every entity.
    #[serde(default)]
    pub audit_columns: AuditColumns,

    /// Drop audit columns from tables before generating DDL.
    #[serde(default)]
    pub skip_audit_columns: bool,

    /// Which sections the complete schema script contains.
    #[serde(default)]
    pub schema: SchemaOptions,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            long_text_keywords: default_long_text_keywords(),
            long_text_dialects: Vec::new(),
            default_string_length: default_string_length(),
            audit_columns: AuditColumns::default(),
            skip_audit_columns: false,
            schema: SchemaOptions::default(),
        }
    }
}

impl GeneratorConfig {
    /// Whether the dialect renders every string column as long text.
    pub fn prefers_long_text(&self, dialect: DatabaseType) -> bool {
        self.long_text_dialects.contains(&dialect)
    }

    /// Whether a field name contains one of the long-text keywords.
    pub fn is_long_text_name(&self, field_name: &str) -> bool {
        let lower = field_name.to_lowercase();
        self.long_text_keywords
            .iter()
            .any(|kw| !kw.is_empty() && lower.contains(&kw.to_lowercase()))
    }
}

/// Names of the audit columns inherited from a common base entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditColumns {
    #[serde(default = "default_id_column")]
    pub id: String,
    #[serde(default = "default_create_by")]
    pub create_by: String,
    #[serde(default = "default_update_by")]
    pub update_by: String,
    #[serde(default = "default_create_time")]
    pub create_time: String,
    #[serde(default = "default_update_time")]
    pub update_time: String,
}

impl Default for AuditColumns {
    fn default() -> Self {
        Self {
            id: default_id_column(),
            create_by: default_create_by(),
            update_by: default_update_by(),
            create_time: default_create_time(),
            update_time: default_update_time(),
        }
    }
}

impl AuditColumns {
    /// All configured names.
    pub fn names(&self) -> [&str; 5] {
        [
            &self.id,
            &self.create_by,
            &self.update_by,
            &self.create_time,
            &self.update_time,
        ]
    }

    /// Whether a column name is an audit column.
    ///
    /// Comparison ignores case and underscores so `createTime` matches
    /// `create_time`.
    pub fn matches(&self, column_name: &str) -> bool {
        let wanted = normalize(column_name);
        self.names()
            .iter()
            .any(|name| !name.is_empty() && normalize(name) == wanted)
    }
}

fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| *c != '_')
        .flat_map(char::to_lowercase)
        .collect()
}

/// Sections included in the complete schema script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaOptions {
    /// Emit CREATE INDEX statements.
    #[serde(default = "default_true")]
    pub include_indexes: bool,

    /// Emit many-to-many junction tables.
    #[serde(default = "default_true")]
    pub include_many_to_many_tables: bool,

    /// Emit foreign key constraints.
    #[serde(default = "default_true")]
    pub include_foreign_keys: bool,

    /// Emit table and column comments.
    #[serde(default = "default_true")]
    pub include_comments: bool,
}

impl Default for SchemaOptions {
    fn default() -> Self {
        Self {
            include_indexes: true,
            include_many_to_many_tables: true,
            include_foreign_keys: true,
            include_comments: true,
        }
    }
}

fn default_long_text_keywords() -> Vec<String> {
    ["url", "base64", "text", "path", "introduction"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_string_length() -> u32 {
    255
}

fn default_id_column() -> String {
    "id".to_string()
}

fn default_create_by() -> String {
    "create_by".to_string()
}

fn default_update_by() -> String {
    "update_by".to_string()
}

fn default_create_time() -> String {
    "create_time".to_string()
}

fn default_update_time() -> String {
    "update_time".to_string()
}

fn default_true() -> bool {
    true
}
