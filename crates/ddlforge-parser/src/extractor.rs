//! CREATE TABLE extraction
//!
//! Pattern matching plus one paren-depth-aware split; there is no grammar and
//! no AST. The stages are:
//!
//! 1. collapse whitespace runs to single spaces
//! 2. pull the table name, the outer parenthesised span and the table-level
//!    `PRIMARY KEY (...)` list independently
//! 3. split the span on top-level commas
//! 4. turn every remaining clause into a [`Column`]
//!
//! The column block is everything between the first `(` and the last `)` of
//! the whole statement. Parenthesised text after the closing table paren
//! (`) ENGINE=InnoDB (...)`) is captured too and surfaces as extra clauses.

use regex::Regex;
use std::sync::LazyLock;

use crate::error::{DdlError, Result};
use crate::model::{Column, ParsedDdl};
use crate::naming::{table_class_name, to_camel_case, to_pascal_case};
use crate::type_mapping::java_type_for;

static WHITESPACE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

static TABLE_NAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)CREATE TABLE `?([A-Za-z0-9_]+)`?").expect("valid regex"));

static PRIMARY_KEY_LIST_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)PRIMARY KEY\s*\(([^)]+)\)").expect("valid regex"));

static BASE_TYPE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_]+").expect("valid regex"));

/// Clause prefixes (matched case-sensitively) that never describe a column
const SKIPPED_CLAUSE_PREFIXES: [&str; 3] = ["UNIQUE KEY", "KEY", "CONSTRAINT"];

/// Upper-cased clause prefixes for constraint and annotation lines
const NON_COLUMN_PREFIXES: [&str; 2] = ["PRIMARY KEY", "COMMENT ON"];

const IDENTIFIER_QUOTES: [char; 3] = ['`', '"', '\''];

/// Parse a `CREATE TABLE` statement into a [`ParsedDdl`].
///
/// Other statements around the `CREATE TABLE` (for example `COMMENT ON ...`)
/// are tolerated but not mined for data.
///
/// # Errors
///
/// - [`DdlError::TableNameNotFound`] when no `CREATE TABLE <name>` is present
/// - [`DdlError::ColumnBlockNotFound`] when there is no `(...)` span
/// - [`DdlError::NoValidColumns`] when every clause is filtered out
pub fn parse_ddl(ddl: &str) -> Result<ParsedDdl> {
    let ddl = normalize_whitespace(ddl);

    let raw_table_name = TABLE_NAME_REGEX
        .captures(&ddl)
        .and_then(|caps| caps.get(1))
        .ok_or(DdlError::TableNameNotFound)?
        .as_str();
    let table_name = table_class_name(raw_table_name);

    let column_block = outer_paren_span(&ddl).ok_or(DdlError::ColumnBlockNotFound)?;
    let clauses: Vec<&str> = split_top_level(column_block)
        .into_iter()
        .map(str::trim)
        .filter(|clause| {
            !clause.is_empty()
                && !SKIPPED_CLAUSE_PREFIXES
                    .iter()
                    .any(|prefix| clause.starts_with(prefix))
        })
        .collect();

    let primary_key_columns = table_level_primary_key(&ddl);

    let mut attributes = Vec::new();
    let mut pk_attributes = Vec::new();

    for clause in clauses {
        let Some(column) = parse_column_clause(clause, &primary_key_columns) else {
            continue;
        };
        if column.is_primary_key {
            pk_attributes.push(column.clone());
        }
        attributes.push(column);
    }

    if attributes.is_empty() {
        tracing::debug!(table = %table_name, "DDL contained no column definitions");
        return Err(DdlError::NoValidColumns);
    }

    let parsed = ParsedDdl {
        table_name,
        attributes,
        pk_attributes,
    };

    tracing::debug!(
        table = %parsed.table_name,
        columns = parsed.attributes.len(),
        primary_keys = ?parsed.primary_key_names(),
        "Parsed CREATE TABLE"
    );

    Ok(parsed)
}

/// Cheap structural pre-flight check that never fails.
///
/// Returns `false` for empty input, input without `CREATE TABLE`, unbalanced
/// paren counts, or an empty outer paren span. It is weaker than
/// [`parse_ddl`]: it works on the raw text and does not look for a valid table
/// name, so a `true` here can still be followed by a parse error.
pub fn validate_ddl(ddl: &str) -> bool {
    if ddl.is_empty() {
        return false;
    }

    if !ddl.to_uppercase().contains("CREATE TABLE") {
        return false;
    }

    let open_parens = ddl.matches('(').count();
    let close_parens = ddl.matches(')').count();
    if open_parens != close_parens {
        return false;
    }

    outer_paren_span(ddl).is_some_and(|span| !span.trim().is_empty())
}

/// Turn one retained clause into a column, or `None` for constraint and
/// comment lines.
fn parse_column_clause(clause: &str, primary_key_columns: &[String]) -> Option<Column> {
    let upper_clause = clause.trim().to_uppercase();
    if NON_COLUMN_PREFIXES
        .iter()
        .any(|prefix| upper_clause.starts_with(prefix))
    {
        return None;
    }

    let mut parts = clause.split(' ');
    let column_name = strip_identifier_quotes(parts.next().unwrap_or_default());
    let raw_data_type = parts.next().map(str::to_uppercase).unwrap_or_default();

    // The space split already isolates the type in most DDL; this guards
    // against `VARCHAR(10)` style tokens with the parameters attached.
    let data_type = BASE_TYPE_REGEX
        .find(&raw_data_type)
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| raw_data_type.clone());

    let is_primary_key =
        primary_key_columns.contains(&column_name) || upper_clause.contains("PRIMARY KEY");

    let cc_name = to_camel_case(&column_name);
    let pc_name = to_pascal_case(&cc_name);
    let java_type = java_type_for(&data_type).to_string();

    Some(Column {
        column_name,
        cc_name,
        pc_name,
        data_type,
        java_type,
        is_primary_key,
    })
}

fn normalize_whitespace(ddl: &str) -> String {
    WHITESPACE_REGEX.replace_all(ddl, " ").trim().to_string()
}

/// Content between the first `(` and the last `)` of the input.
fn outer_paren_span(text: &str) -> Option<&str> {
    let open = text.find('(')?;
    let close = text.rfind(')')?;
    (close > open).then(|| &text[open + 1..close])
}

/// Split on commas that are not nested inside parentheses.
fn split_top_level(block: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (idx, ch) in block.char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                parts.push(&block[start..idx]);
                start = idx + 1;
            }
            _ => {}
        }
    }
    parts.push(&block[start..]);

    parts
}

/// Column names listed in the first `PRIMARY KEY (...)` of the statement
fn table_level_primary_key(ddl: &str) -> Vec<String> {
    PRIMARY_KEY_LIST_REGEX
        .captures(ddl)
        .and_then(|caps| caps.get(1))
        .map(|list| {
            list.as_str()
                .split(',')
                .map(|name| strip_identifier_quotes(name.trim()))
                .collect()
        })
        .unwrap_or_default()
}

fn strip_identifier_quotes(name: &str) -> String {
    name.chars()
        .filter(|ch| !IDENTIFIER_QUOTES.contains(ch))
        .collect()
}
