//! Table and column model produced by the extractor

use serde::{Deserialize, Serialize};

/// A single column recovered from a column clause.
///
/// Field names serialise in camelCase (`columnName`, `ccName`, ...) because
/// that is the vocabulary the code templates are written against.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    /// Identifier as written in the DDL, quote and backtick characters removed
    pub column_name: String,
    /// lowerCamelCase field name (`user_name` -> `userName`)
    pub cc_name: String,
    /// PascalCase name derived from `cc_name` (`userName` -> `UserName`)
    pub pc_name: String,
    /// Upper-cased base SQL type with any size/precision removed
    pub data_type: String,
    /// Fully qualified Java type for `data_type`
    pub java_type: String,
    pub is_primary_key: bool,
}

/// Output of [`crate::parse_ddl`].
///
/// `pk_attributes` is always the in-order subsequence of `attributes` whose
/// `is_primary_key` flag is set, and `attributes` is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedDdl {
    pub table_name: String,
    pub attributes: Vec<Column>,
    pub pk_attributes: Vec<Column>,
}

impl ParsedDdl {
    /// Column names of the primary key, in source order
    pub fn primary_key_names(&self) -> Vec<&str> {
        self.pk_attributes
            .iter()
            .map(|column| column.column_name.as_str())
            .collect()
    }

    /// Columns that are not part of the primary key
    pub fn non_key_attributes(&self) -> impl Iterator<Item = &Column> {
        self.attributes.iter().filter(|column| !column.is_primary_key)
    }
}
