//! MySQL/MariaDB DDL.
//!
//! - [`MysqlStrategy`]: DDL syntax strategy
//! - [`mysql_column_mapper`]: column type resolution, including TEXT and BLOB
//!   sizing by declared length
//!
//! # Supported Versions
//!
//! - MySQL 5.7+, 8.0+
//! - MariaDB 10.2+

mod dialect;
mod types;

pub use dialect::MysqlStrategy;
pub use types::mysql_column_mapper;
