//! Type classification and dialect type mapping.
//!
//! Column types are resolved in two layers:
//!
//! - [`category`]: classifies a source type into a [`TypeCategory`] with an
//!   ordered, first-match rule chain
//! - [`typemap`]: a per-dialect [`DialectMappingTable`] turning a category into
//!   a SQL type token with its length/precision suffix
//!
//! [`ColumnTypeMapper`] sits on top as the field-oriented entry point used by
//! the strategies. It adds the dialect override hook and name lookups for
//! types outside the category set, and delegates everything else to the
//! mapping table.
//!
//! ```rust,ignore
//! let config = Arc::new(GeneratorConfig::default());
//! let mapper = mysql_column_mapper(config);
//! let sql = mapper.map_field_to_column_type(&column);
//! ```

pub mod category;
pub mod column_mapper;
pub mod typemap;

pub use category::{classify, try_classify, TypeCategory, TypeFamily};
pub use column_mapper::{ColumnTypeMapper, ColumnTypeMapperBuilder, OverrideHook, TypeRenderer};
pub use typemap::{map_type, DialectMappingTable, Suffix, TypeEntry};
