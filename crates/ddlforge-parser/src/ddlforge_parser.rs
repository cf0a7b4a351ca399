//! ddlforge Parser - CREATE TABLE model extraction
//!
//! Turns a free-form `CREATE TABLE` statement into a [`ParsedDdl`]: the table
//! name, its columns in source order and the primary key columns. The result
//! drives the code generation templates in `ddlforge-templates`.
//!
//! This is deliberately not a SQL parser. It handles the practical subset of
//! DDL needed to recover a table's shape:
//!
//! - whitespace normalisation so multi-line and single-line DDL parse the same
//! - table name and column block extraction
//! - paren-aware splitting of column clauses
//! - inline (`id INT PRIMARY KEY`) and table-level (`PRIMARY KEY (id)`) keys
//! - snake_case to camelCase/PascalCase naming and SQL to Java type mapping
//!
//! ## Example
//!
//! ```
//! use ddlforge_parser::{parse_ddl, validate_ddl};
//!
//! let ddl = "CREATE TABLE users (id INT PRIMARY KEY, user_name VARCHAR(100) NOT NULL);";
//! assert!(validate_ddl(ddl));
//!
//! let parsed = parse_ddl(ddl).unwrap();
//! assert_eq!(parsed.table_name, "Users");
//! assert_eq!(parsed.attributes[1].cc_name, "userName");
//! assert_eq!(parsed.pk_attributes.len(), 1);
//! ```

mod error;
mod extractor;
mod model;
pub mod naming;
mod sample;
pub mod type_mapping;

pub use error::{DdlError, Result};
pub use extractor::{parse_ddl, validate_ddl};
pub use model::{Column, ParsedDdl};
pub use sample::sample_ddl;
pub use type_mapping::{FALLBACK_JAVA_TYPE, java_type_for};
