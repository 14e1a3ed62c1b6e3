//! Common utilities shared across dialect strategies.
//!
//! - [`ddl`]: column clause pieces and the CREATE TABLE / COMMENT ON layouts
//!   that several dialects share

pub mod ddl;

pub use ddl::{
    column_comment_on, comment_on_statements, create_table, default_clause, nullability,
    primary_key_clause,
};
